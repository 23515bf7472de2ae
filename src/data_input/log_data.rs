// src/data_input/log_data.rs

/// One odometry observation parsed from a single row of the log.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time_sec: f64,         // Wall-clock receive time (seconds).
    pub seq: u64,              // Message header sequence number.
    pub header_stamp_sec: f64, // Header timestamp (seconds). Time base for all derivatives.
    pub vel_x: f64,            // Linear velocity x [m/s].
    pub vel_y: f64,            // Linear velocity y [m/s].
    pub omega_z: f64,          // Angular velocity around z [rad/s].
    pub pos_x: f64,            // Position x [m].
    pub pos_y: f64,            // Position y [m].
}

impl Sample {
    /// Field names paired with values, in log column order. Used for validation messages.
    pub fn named_fields(&self) -> [(&'static str, f64); 8] {
        [
            ("time", self.time_sec),
            ("seq", self.seq as f64),
            ("header_stamp", self.header_stamp_sec),
            ("vel_x", self.vel_x),
            ("vel_y", self.vel_y),
            ("omega_z", self.omega_z),
            ("pos_x", self.pos_x),
            ("pos_y", self.pos_y),
        ]
    }
}

/// Shifts `time_sec` and `header_stamp_sec` so the first sample sits at zero.
/// Each field is shifted by its own first value.
pub fn normalize_times(samples: &mut [Sample]) {
    let Some(first) = samples.first().copied() else {
        return;
    };
    for sample in samples.iter_mut() {
        sample.time_sec -= first.time_sec;
        sample.header_stamp_sec -= first.header_stamp_sec;
    }
}

/// Header timestamps as a plain vector, the time axis of every derived series.
pub fn header_times(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(|s| s.header_stamp_sec).collect()
}

/// Span between the first and last header timestamp in seconds.
pub fn interval_duration(samples: &[Sample]) -> f64 {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => last.header_stamp_sec - first.header_stamp_sec,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_at(time_sec: f64, header_stamp_sec: f64) -> Sample {
        Sample {
            time_sec,
            header_stamp_sec,
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_times_starts_at_zero() {
        let mut samples = vec![
            sample_at(1_500_000_000.25, 1_500_000_000.125),
            sample_at(1_500_000_000.27, 1_500_000_000.145),
            sample_at(1_500_000_000.29, 1_500_000_000.165),
        ];
        normalize_times(&mut samples);
        assert_eq!(samples[0].time_sec, 0.0);
        assert_eq!(samples[0].header_stamp_sec, 0.0);
        assert!((samples[2].header_stamp_sec - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_fields_independently() {
        let mut samples = vec![sample_at(10.0, 3.0), sample_at(11.0, 5.0)];
        normalize_times(&mut samples);
        assert_eq!(samples[1].time_sec, 1.0);
        assert_eq!(samples[1].header_stamp_sec, 2.0);
    }

    #[test]
    fn test_normalize_empty_is_noop() {
        let mut samples: Vec<Sample> = Vec::new();
        normalize_times(&mut samples);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_interval_duration() {
        let samples = vec![sample_at(0.0, 0.0), sample_at(0.0, 0.5), sample_at(0.0, 2.5)];
        assert_eq!(interval_duration(&samples), 2.5);
        assert_eq!(interval_duration(&[]), 0.0);
    }
}

// src/data_input/log_data.rs
