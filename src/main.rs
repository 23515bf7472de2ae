// src/main.rs

use clap::Parser;
use log::{info, warn};
use std::error::Error;
use std::path::{Path, PathBuf};

use jerk_metrics::constants::DEFAULT_OUTPUT_DIR;
use jerk_metrics::crate_version;
use jerk_metrics::data_analysis::jerk_metrics::format_report;
use jerk_metrics::data_input::log_data::Sample;
use jerk_metrics::data_input::log_parser::parse_odometry_csv;
use jerk_metrics::data_output::csv_export::{
    create_output_dir, output_timestamp, write_results_csv,
};
use jerk_metrics::pipeline::{run, PipelineConfig, PipelineOutput};
use jerk_metrics::plot_functions::plot_jerk_smoothed::plot_jerk_smoothed;
use jerk_metrics::plot_functions::plot_jerk_window_comparison::plot_jerk_window_comparison;
use jerk_metrics::plot_functions::plot_smoothing_workflow::plot_smoothing_workflow;
use jerk_metrics::plot_functions::plot_velocity_jerk::plot_velocity_jerk;

#[derive(Parser)]
#[command(
    name = "jerk_metrics",
    about = "Checks the jerk of a recorded robot drive against a maximum allowed jerk",
    version
)]
struct Cli {
    /// Odometry CSV export
    input: PathBuf,

    /// Maximum allowed jerk [m/s^3]
    #[arg(short, long)]
    jerk: Option<f64>,

    /// Render the analysis plots
    #[arg(short, long)]
    show_figures: bool,

    /// Base directory for result folders
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Do not write the results CSV
    #[arg(long)]
    no_save: bool,
}

fn render_plots(
    samples: &[Sample],
    output: &PipelineOutput,
    plot_dir: &Path,
    root_name: &str,
    max_jerk: f64,
) {
    let results = [
        ("jerk smoothed", plot_jerk_smoothed(output, plot_dir, root_name, max_jerk)),
        ("velocity and jerk", plot_velocity_jerk(samples, output, plot_dir, root_name)),
        ("smoothing workflow", plot_smoothing_workflow(output, plot_dir, root_name)),
        (
            "jerk comparison",
            plot_jerk_window_comparison(output, plot_dir, root_name, max_jerk),
        ),
    ];
    for (name, result) in results {
        if let Err(e) = result {
            warn!("Failed to render {name} plot: {e}");
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("jerk_metrics {}", crate_version());

    let root_name = cli
        .input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    let samples = parse_odometry_csv(&cli.input)?;
    let config = PipelineConfig::with_max_jerk(cli.jerk);
    let output = run(&samples, &config)?;

    // Plots land next to the results CSV, or in the working directory without one.
    let mut plot_dir = PathBuf::from(".");
    if !cli.no_save {
        let timestamp = output_timestamp();
        let dir = create_output_dir(&cli.output_dir, &timestamp)?;
        write_results_csv(&dir, &timestamp, &samples, &output.derived)?;
        plot_dir = dir;
    }

    if cli.show_figures {
        render_plots(&samples, &output, &plot_dir, &root_name, config.max_jerk);
    }

    println!("==================================");
    for line in format_report(&output.verdict, config.max_jerk) {
        println!("{line}");
    }
    println!("==================================");

    if !output.verdict.passed() {
        std::process::exit(1);
    }
    Ok(())
}

// src/main.rs
