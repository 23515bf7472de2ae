// src/plot_functions/plot_jerk_window_comparison.rs

use std::error::Error;
use std::path::Path;

use log::warn;

use crate::constants::{
    COLOR_COMPARISON, COLOR_THRESHOLD, JERK_COMPARISON_WINDOWS, LINE_WIDTH_PLOT,
};
use crate::data_analysis::smoothing::{smooth, WindowKind};
use crate::pipeline::PipelineOutput;
use crate::plot_framework::{draw_stacked_plot, zip_series, PlotConfig, PlotSeries};

/// Generates the jerk comparison plot: the unsmoothed gradient jerk magnitude smoothed
/// with Hanning windows of several lengths, plus the maximum allowed jerk as a band line.
pub fn plot_jerk_window_comparison(
    output: &PipelineOutput,
    output_dir: &Path,
    root_name: &str,
    max_jerk: f64,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_jerk_comparison.png"));
    let raw_jerk = &output.derived.gradient.jerk.raw.magnitude;

    let mut series: Vec<PlotSeries> = Vec::new();
    for (&window_len, &color) in JERK_COMPARISON_WINDOWS.iter().zip(COLOR_COMPARISON.iter()) {
        match smooth(raw_jerk, window_len, WindowKind::Hanning) {
            Ok(smoothed) => series.push(PlotSeries {
                data: zip_series(&output.times, smoothed.as_slice().unwrap_or_default()),
                label: format!("j grad,smooth,{window_len}"),
                color: *color,
                stroke_width: LINE_WIDTH_PLOT,
            }),
            Err(e) => warn!("Skipping jerk comparison window {window_len}: {e}"),
        }
    }
    if let (Some(&t_start), Some(&t_end)) = (output.times.first(), output.times.last()) {
        series.push(PlotSeries {
            data: vec![(t_start, max_jerk), (t_end, max_jerk)],
            label: "Bandwidth".to_string(),
            color: *COLOR_THRESHOLD,
            stroke_width: LINE_WIDTH_PLOT,
        });
    }

    let panel = PlotConfig::fitted(
        "Jerk comparison different smoothing",
        series,
        "Time [s]",
        "j [m/s^3]",
    );

    draw_stacked_plot(
        &output_file.to_string_lossy(),
        root_name,
        "Jerk Comparison",
        &[panel],
    )
}

// src/plot_functions/plot_jerk_window_comparison.rs
