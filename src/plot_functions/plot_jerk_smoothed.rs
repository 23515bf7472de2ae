// src/plot_functions/plot_jerk_smoothed.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_JERK_SMOOTHED, COLOR_THRESHOLD, LINE_WIDTH_PLOT, SMOOTHING_WINDOW_LEN};
use crate::pipeline::PipelineOutput;
use crate::plot_framework::{draw_stacked_plot, max_annotation, zip_series, PlotConfig, PlotSeries};

/// Generates the Jerk Smoothed plot: the smoothed jerk magnitude over time with the
/// maximum allowed jerk as a reference line and the maximum annotated.
pub fn plot_jerk_smoothed(
    output: &PipelineOutput,
    output_dir: &Path,
    root_name: &str,
    max_jerk: f64,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_jerk_smoothed.png"));
    let jerk = zip_series(
        &output.times,
        output.derived.smoothed_jerk().as_slice().unwrap_or_default(),
    );

    let mut series = vec![PlotSeries {
        data: jerk.clone(),
        label: format!("j smooth,{SMOOTHING_WINDOW_LEN}"),
        color: *COLOR_JERK_SMOOTHED,
        stroke_width: LINE_WIDTH_PLOT,
    }];
    if let (Some(&t_start), Some(&t_end)) = (output.times.first(), output.times.last()) {
        series.push(PlotSeries {
            data: vec![(t_start, max_jerk), (t_end, max_jerk)],
            label: format!("max jerk {max_jerk:.2}"),
            color: *COLOR_THRESHOLD,
            stroke_width: LINE_WIDTH_PLOT,
        });
    }

    let panel = PlotConfig::fitted("Jerk Smoothed", series, "Time [s]", "j [m/s^3]")
        .map(|config| config.with_annotation(max_annotation(&jerk, "j")));

    draw_stacked_plot(
        &output_file.to_string_lossy(),
        root_name,
        "Jerk Smoothed",
        &[panel],
    )
}

// src/plot_functions/plot_jerk_smoothed.rs
