// src/plot_functions/plot_smoothing_workflow.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_RAW, COLOR_SMOOTHED_AFTER, COLOR_SMOOTHED_BEFORE, LINE_WIDTH_PLOT,
};
use crate::pipeline::PipelineOutput;
use crate::plot_framework::{draw_stacked_plot, zip_series, PlotConfig, PlotSeries};
use crate::types::{Quantity, SmoothingState};

/// Generates the smoothing workflow comparison: acceleration and jerk magnitude from the
/// gradient method, unsmoothed against smoothing after and before differentiation.
pub fn plot_smoothing_workflow(
    output: &PipelineOutput,
    output_dir: &Path,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_smoothing_workflow_comparison.png"));

    let panels: Vec<Option<PlotConfig>> = [
        (Quantity::Acceleration, "Acceleration", "a [m/s^2]", "vel"),
        (Quantity::Jerk, "Jerk", "j [m/s^3]", "acc"),
    ]
    .into_iter()
    .map(|(quantity, title, y_label, source)| {
        let stage = output.derived.gradient.stage(quantity);
        let series = [
            (SmoothingState::Raw, "unsmoothed".to_string(), *COLOR_RAW),
            (
                SmoothingState::SmoothedAfter,
                "smoothed after differentiation".to_string(),
                *COLOR_SMOOTHED_AFTER,
            ),
            (
                SmoothingState::SmoothedBefore,
                format!("smoothed {source} used for differentiation"),
                *COLOR_SMOOTHED_BEFORE,
            ),
        ]
        .into_iter()
        .map(|(state, label, color)| PlotSeries {
            data: zip_series(
                &output.times,
                stage.variant(state).magnitude.as_slice().unwrap_or_default(),
            ),
            label,
            color,
            stroke_width: LINE_WIDTH_PLOT,
        })
        .collect();
        PlotConfig::fitted(title, series, "Time [s]", y_label)
    })
    .collect();

    draw_stacked_plot(
        &output_file.to_string_lossy(),
        root_name,
        "Smoothing Workflow",
        &panels,
    )
}

// src/plot_functions/plot_smoothing_workflow.rs
