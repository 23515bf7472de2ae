// src/error.rs

use thiserror::Error;

/// Failures of the windowed smoothing filter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmoothingError {
    #[error("input vector needs to be at least as long as the window ({len} < {window_len})")]
    InputTooShort { len: usize, window_len: usize },

    #[error("smoothing only accepts one-dimensional input, got {ndim} dimensions")]
    InvalidDimension { ndim: usize },

    #[error("unknown window '{0}', expected one of flat, hanning, hamming, bartlett, blackman")]
    InvalidWindow(String),
}

/// Failures of the differentiation stage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DifferentiationError {
    #[error("need at least 2 samples to differentiate, got {0}")]
    InsufficientSamples(usize),

    #[error("invalid sample at index {index}: {reason}")]
    InvalidSample { index: usize, reason: String },

    #[error("sampling interval must be finite and positive, got {0}")]
    InvalidSamplingInterval(f64),
}

/// Failure of a complete pipeline run, tagged with the stage that aborted it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("differentiation stage: {0}")]
    Differentiation(#[from] DifferentiationError),

    #[error("smoothing stage: {0}")]
    Smoothing(#[from] SmoothingError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

// src/error.rs
