// src/plot_functions/mod.rs

pub mod plot_jerk_smoothed;
pub mod plot_jerk_window_comparison;
pub mod plot_smoothing_workflow;
pub mod plot_velocity_jerk;

// src/plot_functions/mod.rs
