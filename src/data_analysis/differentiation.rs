// src/data_analysis/differentiation.rs

use log::debug;
use ndarray::Array1;

use crate::constants::{SMOOTHING_WINDOW_KIND, SMOOTHING_WINDOW_LEN};
use crate::data_analysis::derivative::{magnitude, DiffMethod};
use crate::data_analysis::smoothing::{smooth, WindowKind};
use crate::data_input::log_data::Sample;
use crate::error::{DifferentiationError, Result};
use crate::types::{AxisSeries, DerivedSeries, MethodSeries, StageVariants};

/// Smoothing filter settings applied at every stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingParams {
    pub window_len: usize,
    pub kind: WindowKind,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            window_len: SMOOTHING_WINDOW_LEN,
            kind: SMOOTHING_WINDOW_KIND,
        }
    }
}

impl SmoothingParams {
    fn apply(&self, signal: &Array1<f64>) -> Result<Array1<f64>> {
        Ok(smooth(signal, self.window_len, self.kind)?)
    }

    /// Whether a series of `len` samples can pass through the filter.
    pub fn accepts(&self, len: usize) -> bool {
        self.window_len < 3 || len >= self.window_len
    }
}

/// Checks that every field is finite and header stamps never go backwards.
pub fn validate_samples(samples: &[Sample]) -> std::result::Result<(), DifferentiationError> {
    if samples.len() < 2 {
        return Err(DifferentiationError::InsufficientSamples(samples.len()));
    }
    for (index, sample) in samples.iter().enumerate() {
        if let Some((field, value)) = sample
            .named_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(DifferentiationError::InvalidSample {
                index,
                reason: format!("{field} is {value}"),
            });
        }
    }
    for (index, pair) in samples.windows(2).enumerate() {
        if pair[1].header_stamp_sec < pair[0].header_stamp_sec {
            return Err(DifferentiationError::InvalidSample {
                index: index + 1,
                reason: format!(
                    "header stamp {:.6} s is earlier than the previous {:.6} s",
                    pair[1].header_stamp_sec, pair[0].header_stamp_sec
                ),
            });
        }
    }
    Ok(())
}

/// Uniform sample spacing taken from the first two header stamps.
///
/// Later irregular spacing is not accounted for; the whole series is differentiated
/// against this single interval. Equal first stamps are allowed by [`validate_samples`]
/// but give a zero interval, which is rejected here.
pub fn sampling_interval(samples: &[Sample]) -> std::result::Result<f64, DifferentiationError> {
    match samples {
        [first, second, ..] => {
            let dt = second.header_stamp_sec - first.header_stamp_sec;
            if dt.is_finite() && dt > 0.0 {
                Ok(dt)
            } else {
                Err(DifferentiationError::InvalidSamplingInterval(dt))
            }
        }
        _ => Err(DifferentiationError::InsufficientSamples(samples.len())),
    }
}

/// Derives velocity, acceleration and jerk with both differentiation methods.
///
/// Velocity is differentiated from position, acceleration from the measured velocity and
/// jerk from the raw acceleration of the same method.
pub fn differentiate(samples: &[Sample], smoothing: &SmoothingParams) -> Result<DerivedSeries> {
    validate_samples(samples)?;
    let dt = sampling_interval(samples)?;
    debug!(
        "Differentiating {} samples at dt={:.6} s ({} window of {})",
        samples.len(),
        dt,
        smoothing.kind,
        smoothing.window_len
    );

    let pos_x: Array1<f64> = samples.iter().map(|s| s.pos_x).collect();
    let pos_y: Array1<f64> = samples.iter().map(|s| s.pos_y).collect();
    let vel_x: Array1<f64> = samples.iter().map(|s| s.vel_x).collect();
    let vel_y: Array1<f64> = samples.iter().map(|s| s.vel_y).collect();

    let gradient = derive_method(
        DiffMethod::Gradient,
        [&pos_x, &pos_y],
        [&vel_x, &vel_y],
        dt,
        smoothing,
    )?;
    let finite_difference = derive_method(
        DiffMethod::FiniteDifference,
        [&pos_x, &pos_y],
        [&vel_x, &vel_y],
        dt,
        smoothing,
    )?;

    Ok(DerivedSeries {
        sampling_interval: dt,
        finite_difference,
        gradient,
    })
}

fn derive_method(
    method: DiffMethod,
    position: [&Array1<f64>; 2],
    velocity: [&Array1<f64>; 2],
    dt: f64,
    smoothing: &SmoothingParams,
) -> Result<MethodSeries> {
    let velocity_stage = derive_stage(method, position, dt, smoothing)?;
    let acceleration_stage = derive_stage(method, velocity, dt, smoothing)?;
    let jerk_stage = derive_stage(
        method,
        [&acceleration_stage.raw.x, &acceleration_stage.raw.y],
        dt,
        smoothing,
    )?;
    debug!(
        "{}: velocity {} / acceleration {} / jerk {} samples",
        method.name(),
        velocity_stage.raw.len(),
        acceleration_stage.raw.len(),
        jerk_stage.raw.len()
    );

    Ok(MethodSeries {
        velocity: velocity_stage,
        acceleration: acceleration_stage,
        jerk: jerk_stage,
    })
}

/// One differentiation stage with its raw, smoothed-after and smoothed-before variants.
///
/// Finite-difference series shrink by one sample per stage. Their smoothed variants are
/// left empty when the series to smooth is shorter than the window; for the gradient
/// method that case is an error.
fn derive_stage(
    method: DiffMethod,
    [prev_x, prev_y]: [&Array1<f64>; 2],
    dt: f64,
    smoothing: &SmoothingParams,
) -> Result<StageVariants> {
    let raw_x = method.apply(prev_x.view(), dt)?;
    let raw_y = method.apply(prev_y.view(), dt)?;
    let raw = combine(raw_x, raw_y);
    let skip_short = method == DiffMethod::FiniteDifference;

    // The magnitude itself is smoothed here, not recombined from smoothed axes.
    let smoothed_after = if skip_short && !smoothing.accepts(raw.len()) {
        debug!(
            "{}: {} samples are too few to smooth, smoothed-after variant left empty",
            method.name(),
            raw.len()
        );
        AxisSeries::empty()
    } else {
        AxisSeries {
            x: smoothing.apply(&raw.x)?,
            y: smoothing.apply(&raw.y)?,
            magnitude: smoothing.apply(&raw.magnitude)?,
        }
    };

    let smoothed_before = if skip_short && !smoothing.accepts(prev_x.len()) {
        debug!(
            "{}: {} samples are too few to smooth, smoothed-before variant left empty",
            method.name(),
            prev_x.len()
        );
        AxisSeries::empty()
    } else {
        let pre_x = smoothing.apply(prev_x)?;
        let pre_y = smoothing.apply(prev_y)?;
        combine(
            method.apply(pre_x.view(), dt)?,
            method.apply(pre_y.view(), dt)?,
        )
    };

    Ok(StageVariants {
        raw,
        smoothed_after,
        smoothed_before,
    })
}

fn combine(x: Array1<f64>, y: Array1<f64>) -> AxisSeries {
    let magnitude = magnitude(x.view(), y.view());
    AxisSeries { x, y, magnitude }
}


// src/data_analysis/differentiation.rs
