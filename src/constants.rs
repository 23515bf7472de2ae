// src/constants.rs

use plotters::style::colors::full_palette::{BLUE, GREEN, GREY, ORANGE, PURPLE, RED};
use plotters::style::RGBColor;

use crate::data_analysis::smoothing::WindowKind;

// Smoothing applied to every derived stage. 30 samples with a Hanning taper gives a clean
// jerk trace for odometry logged at ~50 Hz.
pub const SMOOTHING_WINDOW_LEN: usize = 30;
pub const SMOOTHING_WINDOW_KIND: WindowKind = WindowKind::Hanning;

// Default maximum allowed jerk [m/s^3].
pub const DEFAULT_MAX_JERK: f64 = 4.0;

// Timestamp columns are logged in nanoseconds.
pub const NANOSECONDS_TO_SECONDS: f64 = 1e-9;
// A header stamp span shorter than this after scaling means the stamps were already seconds.
pub const MIN_PLAUSIBLE_SPAN_S: f64 = 0.1;

// --- Odometry CSV columns ---
pub const COL_TIME: &str = "%time";
pub const COL_HEADER_SEQ: &str = "field.header.seq";
pub const COL_HEADER_STAMP: &str = "field.header.stamp";
pub const COL_VEL_X: &str = "field.twist.twist.linear.x";
pub const COL_VEL_Y: &str = "field.twist.twist.linear.y";
pub const COL_OMEGA_Z: &str = "field.twist.twist.angular.z";
pub const COL_POS_X: &str = "field.pose.pose.position.x";
pub const COL_POS_Y: &str = "field.pose.pose.position.y";

pub const ODOMETRY_COLUMNS: [&str; 8] = [
    COL_TIME,
    COL_HEADER_SEQ,
    COL_HEADER_STAMP,
    COL_VEL_X,
    COL_VEL_Y,
    COL_OMEGA_Z,
    COL_POS_X,
    COL_POS_Y,
];

// Extra result columns written next to the sample columns.
pub const COL_SMOOTHED_ACC: &str = "smo_acc";
pub const COL_SMOOTHED_JERK: &str = "smo_jerk";

// --- Output ---
pub const DEFAULT_OUTPUT_DIR: &str = "Data";
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%d_%m_%Y---%H:%M";
pub const MAX_OUTPUT_DIR_SUFFIX: usize = 100;

// --- Plot geometry ---
pub const PLOT_WIDTH: u32 = 1600;
pub const PLOT_HEIGHT: u32 = 1000;

pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 15;
pub const FONT_SIZE_LEGEND: i32 = 15;
pub const FONT_SIZE_MESSAGE: i32 = 20;
pub const FONT_SIZE_ANNOTATION: i32 = 16;

pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Windows compared in the jerk smoothing comparison figure.
pub const JERK_COMPARISON_WINDOWS: [usize; 5] = [10, 20, 30, 40, 50];

// --- Plot Color Assignments ---
pub const COLOR_JERK_SMOOTHED: &RGBColor = &RED;
pub const COLOR_VELOCITY: &RGBColor = &GREEN;
pub const COLOR_THRESHOLD: &RGBColor = &GREY;
pub const COLOR_RAW: &RGBColor = &BLUE;
pub const COLOR_SMOOTHED_AFTER: &RGBColor = &PURPLE;
pub const COLOR_SMOOTHED_BEFORE: &RGBColor = &RED;
pub const COLOR_COMPARISON: [&RGBColor; 5] = [&BLUE, &GREEN, &ORANGE, &PURPLE, &RED];

// src/constants.rs
