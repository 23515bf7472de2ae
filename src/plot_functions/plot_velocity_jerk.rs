// src/plot_functions/plot_velocity_jerk.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_JERK_SMOOTHED, COLOR_VELOCITY, LINE_WIDTH_PLOT, SMOOTHING_WINDOW_LEN};
use crate::data_input::log_data::Sample;
use crate::pipeline::PipelineOutput;
use crate::plot_framework::{draw_stacked_plot, max_annotation, zip_series, PlotConfig, PlotSeries};

/// Generates the stacked Velocity and Jerk plot: measured velocity magnitude on top,
/// smoothed jerk below, each with its maximum annotated.
pub fn plot_velocity_jerk(
    samples: &[Sample],
    output: &PipelineOutput,
    output_dir: &Path,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_velocity_and_jerk.png"));

    let velocity: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| (s.header_stamp_sec, s.vel_x.hypot(s.vel_y)))
        .collect();
    let jerk = zip_series(
        &output.times,
        output.derived.smoothed_jerk().as_slice().unwrap_or_default(),
    );

    let velocity_panel = PlotConfig::fitted(
        "Velocity",
        vec![PlotSeries {
            data: velocity.clone(),
            label: "v odometry".to_string(),
            color: *COLOR_VELOCITY,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        "Time [s]",
        "v [m/s]",
    )
    .map(|config| config.with_annotation(max_annotation(&velocity, "v")));

    let jerk_panel = PlotConfig::fitted(
        "Jerk",
        vec![PlotSeries {
            data: jerk.clone(),
            label: format!("j smooth,{SMOOTHING_WINDOW_LEN}"),
            color: *COLOR_JERK_SMOOTHED,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        "Time [s]",
        "j [m/s^3]",
    )
    .map(|config| config.with_annotation(max_annotation(&jerk, "j")));

    draw_stacked_plot(
        &output_file.to_string_lossy(),
        root_name,
        "Velocity and Jerk",
        &[velocity_panel, jerk_panel],
    )
}

// src/plot_functions/plot_velocity_jerk.rs
