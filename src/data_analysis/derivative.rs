// src/data_analysis/derivative.rs

use ndarray::{Array1, ArrayView1, Zip};

use crate::error::DifferentiationError;

/// Numerical differentiation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffMethod {
    /// Consecutive-sample subtraction, length N-1, not divided by the sample interval.
    FiniteDifference,
    /// Central differences inside, one-sided at the ends, length N, per second.
    Gradient,
}

impl DiffMethod {
    pub const ALL: [DiffMethod; 2] = [DiffMethod::FiniteDifference, DiffMethod::Gradient];

    pub fn name(&self) -> &'static str {
        match self {
            DiffMethod::FiniteDifference => "diff",
            DiffMethod::Gradient => "grad",
        }
    }

    /// Applies this method to `data` sampled at the uniform interval `dt`.
    pub fn apply(
        &self,
        data: ArrayView1<f64>,
        dt: f64,
    ) -> Result<Array1<f64>, DifferentiationError> {
        match self {
            DiffMethod::FiniteDifference => finite_difference(data),
            DiffMethod::Gradient => gradient(data, dt),
        }
    }
}

/// First discrete difference `d[i] = f[i+1] - f[i]`.
pub fn finite_difference(data: ArrayView1<f64>) -> Result<Array1<f64>, DifferentiationError> {
    if data.len() < 2 {
        return Err(DifferentiationError::InsufficientSamples(data.len()));
    }
    Ok(data
        .windows(2)
        .into_iter()
        .map(|w| w[1] - w[0])
        .collect())
}

/// Derivative of a uniformly sampled signal with spacing `dt`.
/// Forward difference at the first point, central differences in the middle and backward
/// difference at the last point.
pub fn gradient(data: ArrayView1<f64>, dt: f64) -> Result<Array1<f64>, DifferentiationError> {
    if data.len() < 2 {
        return Err(DifferentiationError::InsufficientSamples(data.len()));
    }
    if !dt.is_finite() || dt <= 0.0 {
        return Err(DifferentiationError::InvalidSamplingInterval(dt));
    }

    let n = data.len();
    let mut derivative = Array1::<f64>::zeros(n);

    derivative[0] = (data[1] - data[0]) / dt;
    for i in 1..n - 1 {
        derivative[i] = (data[i + 1] - data[i - 1]) / (2.0 * dt);
    }
    derivative[n - 1] = (data[n - 1] - data[n - 2]) / dt;

    Ok(derivative)
}

/// Element-wise `sqrt(x^2 + y^2)`.
pub fn magnitude(x: ArrayView1<f64>, y: ArrayView1<f64>) -> Array1<f64> {
    Zip::from(&x).and(&y).map_collect(|&a, &b| a.hypot(b))
}


// src/data_analysis/derivative.rs
