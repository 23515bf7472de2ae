// src/data_analysis/smoothing.rs

use ndarray::{s, Array1, ArrayBase, Data, Dimension, Ix1};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::SmoothingError;

/// Taper applied to the smoothing kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    /// Unweighted moving average.
    Flat,
    Hanning,
    Hamming,
    Bartlett,
    Blackman,
}

impl WindowKind {
    pub const ALL: [WindowKind; 5] = [
        WindowKind::Flat,
        WindowKind::Hanning,
        WindowKind::Hamming,
        WindowKind::Bartlett,
        WindowKind::Blackman,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WindowKind::Flat => "flat",
            WindowKind::Hanning => "hanning",
            WindowKind::Hamming => "hamming",
            WindowKind::Bartlett => "bartlett",
            WindowKind::Blackman => "blackman",
        }
    }

    /// Window coefficients of length `len`, not normalized.
    pub fn coefficients(&self, len: usize) -> Array1<f64> {
        if len == 1 {
            return Array1::ones(1);
        }
        let denom = (len - 1) as f64;
        Array1::from_shape_fn(len, |n| {
            let n = n as f64;
            match self {
                WindowKind::Flat => 1.0,
                WindowKind::Hanning => 0.5 - 0.5 * (2.0 * PI * n / denom).cos(),
                WindowKind::Hamming => 0.54 - 0.46 * (2.0 * PI * n / denom).cos(),
                WindowKind::Bartlett => 1.0 - (2.0 * n / denom - 1.0).abs(),
                WindowKind::Blackman => {
                    0.42 - 0.5 * (2.0 * PI * n / denom).cos() + 0.08 * (4.0 * PI * n / denom).cos()
                }
            }
        })
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowKind {
    type Err = SmoothingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| SmoothingError::InvalidWindow(s.to_string()))
    }
}

/// Smooths a signal by convolving it with a normalized window.
///
/// Reflected copies of the signal are added at both ends so the start and the end of the
/// output carry no transient. The output has the same length as the input. Windows
/// shorter than 3 samples leave the signal unchanged.
pub fn smooth<S, D>(
    signal: &ArrayBase<S, D>,
    window_len: usize,
    kind: WindowKind,
) -> Result<Array1<f64>, SmoothingError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let ndim = signal.ndim();
    let x = signal
        .view()
        .into_dimensionality::<Ix1>()
        .map_err(|_| SmoothingError::InvalidDimension { ndim })?;

    if window_len < 3 {
        return Ok(x.to_owned());
    }

    let n = x.len();
    if n < window_len {
        return Err(SmoothingError::InputTooShort {
            len: n,
            window_len,
        });
    }

    // Head: x[window_len-1], ..., x[1]. Tail: x[n-2] backwards, window_len samples when
    // available.
    let tail_start = n.saturating_sub(window_len + 1);
    let padded: Vec<f64> = x
        .slice(s![1..window_len; -1])
        .iter()
        .chain(x.iter())
        .chain(x.slice(s![tail_start..n - 1; -1]).iter())
        .copied()
        .collect();
    let padded = Array1::from(padded);

    let window = kind.coefficients(window_len);
    let kernel = &window / window.sum();
    let kernel = kernel.slice(s![..;-1]);

    let offset = window_len / 2 - 1;
    let smoothed: Array1<f64> = padded
        .windows(window_len)
        .into_iter()
        .skip(offset)
        .take(n)
        .map(|segment| segment.dot(&kernel))
        .collect();

    Ok(smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    fn noisy_ramp(len: usize) -> Array1<f64> {
        Array1::from_shape_fn(len, |i| 0.1 * i as f64 + if i % 2 == 0 { 0.3 } else { -0.3 })
    }

    #[test]
    fn test_output_length_matches_input() {
        for kind in WindowKind::ALL {
            for window_len in [3, 4, 5, 10, 11, 30, 31] {
                for len in [window_len, window_len + 1, window_len + 7, 200] {
                    let x = noisy_ramp(len);
                    let y = smooth(&x, window_len, kind).unwrap();
                    assert_eq!(
                        y.len(),
                        len,
                        "kind={kind} window_len={window_len} len={len}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_short_window_is_identity() {
        let x = noisy_ramp(12);
        for window_len in 0..3 {
            assert_eq!(smooth(&x, window_len, WindowKind::Hanning).unwrap(), x);
        }
        let tiny = array![4.2];
        assert_eq!(smooth(&tiny, 2, WindowKind::Flat).unwrap(), tiny);
    }

    #[test]
    fn test_constant_signal_is_preserved() {
        let x = Array1::from_elem(64, 2.5);
        for kind in WindowKind::ALL {
            let y = smooth(&x, 30, kind).unwrap();
            for &v in y.iter() {
                assert_abs_diff_eq!(v, 2.5, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_flat_window_is_moving_average() {
        let x = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let y = smooth(&x, 3, WindowKind::Flat).unwrap();
        // A 3 sample window keeps the leading trim at zero, so y[i] averages
        // x[i-2], x[i-1], x[i] with the head reflected around x[0].
        assert_abs_diff_eq!(y[0], (3.0 + 2.0 + 1.0) / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y[3], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y[7], 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_smoothing_reduces_noise() {
        let x = noisy_ramp(120);
        let y = smooth(&x, 10, WindowKind::Hanning).unwrap();
        // Away from the edges the alternating ±0.3 component is largely removed.
        for i in 20..100 {
            assert!((y[i] - 0.1 * i as f64).abs() < 0.15, "index {i}: {}", y[i]);
        }
    }

    #[test]
    fn test_input_too_short() {
        let x = noisy_ramp(10);
        assert_eq!(
            smooth(&x, 30, WindowKind::Hanning),
            Err(SmoothingError::InputTooShort {
                len: 10,
                window_len: 30
            })
        );
    }

    #[test]
    fn test_invalid_dimension() {
        let x = Array2::<f64>::zeros((4, 40));
        assert_eq!(
            smooth(&x, 5, WindowKind::Flat),
            Err(SmoothingError::InvalidDimension { ndim: 2 })
        );
    }

    #[test]
    fn test_window_parsing() {
        assert_eq!("hanning".parse::<WindowKind>(), Ok(WindowKind::Hanning));
        assert_eq!(" Blackman ".parse::<WindowKind>(), Ok(WindowKind::Blackman));
        assert_eq!(
            "kaiser".parse::<WindowKind>(),
            Err(SmoothingError::InvalidWindow("kaiser".to_string()))
        );
    }

    #[test]
    fn test_window_coefficients() {
        let hann = WindowKind::Hanning.coefficients(5);
        assert_abs_diff_eq!(hann[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hann[2], 1.0, epsilon = 1e-12);
        let bartlett = WindowKind::Bartlett.coefficients(5);
        assert_abs_diff_eq!(bartlett[1], 0.5, epsilon = 1e-12);
        let hamming = WindowKind::Hamming.coefficients(3);
        assert_abs_diff_eq!(hamming[0], 0.08, epsilon = 1e-12);
    }
}

// src/data_analysis/smoothing.rs
