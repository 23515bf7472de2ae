// src/pipeline.rs

use log::info;

use crate::constants::DEFAULT_MAX_JERK;
use crate::data_analysis::differentiation::{differentiate, SmoothingParams};
use crate::data_analysis::jerk_metrics::{evaluate, Verdict};
use crate::data_input::log_data::{header_times, Sample};
use crate::error::Result;
use crate::types::DerivedSeries;

/// Settings of one jerk evaluation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Maximum allowed jerk [m/s^3]. Any value is accepted.
    pub max_jerk: f64,
    pub smoothing: SmoothingParams,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_jerk: DEFAULT_MAX_JERK,
            smoothing: SmoothingParams::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_max_jerk(max_jerk: Option<f64>) -> Self {
        Self {
            max_jerk: max_jerk.unwrap_or(DEFAULT_MAX_JERK),
            ..Self::default()
        }
    }
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Header timestamps, the time axis of the length-N series.
    pub times: Vec<f64>,
    pub derived: DerivedSeries,
    pub verdict: Verdict,
}

/// Differentiates the samples and checks the smoothed jerk against `config.max_jerk`.
///
/// Samples are expected to be time-normalized already. Any failure aborts the run before
/// a verdict exists.
pub fn run(samples: &[Sample], config: &PipelineConfig) -> Result<PipelineOutput> {
    let derived = differentiate(samples, &config.smoothing)?;
    let times = header_times(samples);

    let verdict = evaluate(
        derived.smoothed_jerk().as_slice().unwrap_or_default(),
        &times,
        config.max_jerk,
    );
    info!(
        "Jerk check against {:.3} m/s^3: {}",
        config.max_jerk,
        if verdict.passed() { "passed" } else { "failed" }
    );

    Ok(PipelineOutput {
        times,
        derived,
        verdict,
    })
}

// src/pipeline.rs
