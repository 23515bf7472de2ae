// src/lib.rs - Library interface for internal module access

pub mod axis_names;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod data_output;
pub mod error;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

pub use error::{PipelineError, Result};
pub use pipeline::{run, PipelineConfig, PipelineOutput};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
