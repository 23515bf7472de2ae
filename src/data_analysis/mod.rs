// src/data_analysis/mod.rs

pub mod derivative;
pub mod differentiation;
pub mod jerk_metrics;
pub mod smoothing;

// src/data_analysis/mod.rs
