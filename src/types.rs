// src/types.rs
// Derived kinematic series produced by the differentiation engine.

use ndarray::Array1;
use std::fmt;

use crate::axis_names::Axis;
use crate::data_analysis::derivative::DiffMethod;

/// Motion quantity produced by one differentiation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Velocity,
    Acceleration,
    Jerk,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [Quantity::Velocity, Quantity::Acceleration, Quantity::Jerk];

    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Velocity => "velocity",
            Quantity::Acceleration => "acceleration",
            Quantity::Jerk => "jerk",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where smoothing sits relative to the differentiation of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmoothingState {
    /// Derivative of the unsmoothed previous stage.
    Raw,
    /// Raw derivative passed through the smoothing filter.
    SmoothedAfter,
    /// Derivative of the smoothed previous stage, then magnitude-combined.
    SmoothedBefore,
}

impl SmoothingState {
    pub const ALL: [SmoothingState; 3] = [
        SmoothingState::Raw,
        SmoothingState::SmoothedAfter,
        SmoothingState::SmoothedBefore,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SmoothingState::Raw => "raw",
            SmoothingState::SmoothedAfter => "smoothed_after",
            SmoothingState::SmoothedBefore => "smoothed_before",
        }
    }
}

/// Per-axis components of one series plus their magnitude.
///
/// Empty when a finite-difference series was too short for the smoothing window.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSeries {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub magnitude: Array1<f64>,
}

impl AxisSeries {
    /// A series with no samples, used for variants that could not be computed.
    pub fn empty() -> Self {
        Self {
            x: Array1::zeros(0),
            y: Array1::zeros(0),
            magnitude: Array1::zeros(0),
        }
    }

    pub fn axis(&self, axis: Axis) -> &Array1<f64> {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Magnitude => &self.magnitude,
        }
    }

    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }
}

/// The three smoothing variants of one stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageVariants {
    pub raw: AxisSeries,
    pub smoothed_after: AxisSeries,
    pub smoothed_before: AxisSeries,
}

impl StageVariants {
    pub fn variant(&self, state: SmoothingState) -> &AxisSeries {
        match state {
            SmoothingState::Raw => &self.raw,
            SmoothingState::SmoothedAfter => &self.smoothed_after,
            SmoothingState::SmoothedBefore => &self.smoothed_before,
        }
    }
}

/// Velocity, acceleration and jerk computed with one differentiation method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSeries {
    pub velocity: StageVariants,
    pub acceleration: StageVariants,
    pub jerk: StageVariants,
}

impl MethodSeries {
    pub fn stage(&self, quantity: Quantity) -> &StageVariants {
        match quantity {
            Quantity::Velocity => &self.velocity,
            Quantity::Acceleration => &self.acceleration,
            Quantity::Jerk => &self.jerk,
        }
    }
}

/// Every series derived from one sample sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    /// Uniform spacing used by the gradient method, `stamp[1] - stamp[0]`.
    pub sampling_interval: f64,
    pub finite_difference: MethodSeries,
    pub gradient: MethodSeries,
}

impl DerivedSeries {
    pub fn method(&self, method: DiffMethod) -> &MethodSeries {
        match method {
            DiffMethod::FiniteDifference => &self.finite_difference,
            DiffMethod::Gradient => &self.gradient,
        }
    }

    /// One series addressed by its full (method, quantity, smoothing, axis) key.
    pub fn series(
        &self,
        method: DiffMethod,
        quantity: Quantity,
        state: SmoothingState,
        axis: Axis,
    ) -> &Array1<f64> {
        self.method(method)
            .stage(quantity)
            .variant(state)
            .axis(axis)
    }

    /// Jerk magnitude differentiated from smoothed acceleration. This is the series the
    /// threshold check runs on.
    pub fn smoothed_jerk(&self) -> &Array1<f64> {
        &self.gradient.jerk.smoothed_before.magnitude
    }

    /// Acceleration magnitude from smoothed velocity, exported next to the smoothed jerk.
    ///
    /// This differentiates the smoothed velocity. Smoothing the per-axis acceleration
    /// afterwards gives slightly different values within a window length of either end.
    pub fn smoothed_acceleration(&self) -> &Array1<f64> {
        &self.gradient.acceleration.smoothed_before.magnitude
    }
}

// src/types.rs
