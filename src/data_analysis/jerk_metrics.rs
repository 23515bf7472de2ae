// src/data_analysis/jerk_metrics.rs

use log::{debug, warn};

/// A single jerk reading located in the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JerkPoint {
    pub index: usize,
    pub value: f64,
    pub time: f64,
}

/// Diagnostics for a run whose jerk reached the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exceedance {
    /// First reading at or above the threshold.
    pub first: JerkPoint,
    /// Reading just before `first`, absent when the series starts above the threshold.
    pub preceding: Option<JerkPoint>,
    /// Global maximum of the whole series, including samples after `first`.
    pub peak: JerkPoint,
}

/// Outcome of comparing a jerk series with the maximum allowed jerk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Jerk stays below the threshold. `peak` is `None` only for an empty series.
    Pass { peak: Option<JerkPoint> },
    Fail(Exceedance),
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass { .. })
    }

    /// Global maximum of the evaluated series.
    pub fn peak(&self) -> Option<JerkPoint> {
        match self {
            Verdict::Pass { peak } => *peak,
            Verdict::Fail(exceedance) => Some(exceedance.peak),
        }
    }
}

/// Compares jerk with the maximum allowed jerk, stopping at the first violation.
///
/// `times[i]` is the time of `smoothed_jerk[i]`; only indices present in both are scanned.
/// A reading equal to `max_jerk` counts as a violation. The global maximum is reported in
/// either case, the first index winning on ties.
pub fn evaluate(smoothed_jerk: &[f64], times: &[f64], max_jerk: f64) -> Verdict {
    let len = smoothed_jerk.len().min(times.len());
    if smoothed_jerk.len() != times.len() {
        warn!(
            "Jerk series ({}) and time axis ({}) differ in length, scanning {} samples",
            smoothed_jerk.len(),
            times.len(),
            len
        );
    }
    let point = |index: usize| JerkPoint {
        index,
        value: smoothed_jerk[index],
        time: times[index],
    };

    let mut peak: Option<JerkPoint> = None;
    for index in 0..len {
        if peak.map_or(true, |p| smoothed_jerk[index] > p.value) {
            peak = Some(point(index));
        }
    }

    let first_violation = (0..len).find(|&index| smoothed_jerk[index] >= max_jerk);
    match (first_violation, peak) {
        (Some(index), Some(peak)) => {
            debug!(
                "Jerk {:.3} reached max jerk {:.3} at index {}",
                smoothed_jerk[index], max_jerk, index
            );
            Verdict::Fail(Exceedance {
                first: point(index),
                preceding: index.checked_sub(1).map(point),
                peak,
            })
        }
        _ => Verdict::Pass { peak },
    }
}

/// Human-readable report lines for a verdict.
pub fn format_report(verdict: &Verdict, max_jerk: f64) -> Vec<String> {
    match verdict {
        Verdict::Fail(exceedance) => {
            let mut lines = vec![format!(
                "Jerk: {:.3} [m/s^3] at time: {:.6} [s] with index [{}] is bigger than max allowed jerk: {:.3} [m/s^3]",
                exceedance.first.value, exceedance.first.time, exceedance.first.index, max_jerk
            )];
            if let Some(preceding) = exceedance.preceding {
                lines.push(format!(
                    "Jerk below: {:.3} [m/s^3] at time: {:.3} [s] is in range",
                    preceding.value, preceding.time
                ));
            }
            lines.push(format!(
                "Max Jerk: {:.4} [m/s^3] at index [{}]",
                exceedance.peak.value, exceedance.peak.index
            ));
            lines
        }
        Verdict::Pass { peak } => {
            let mut lines = vec!["Jerk is in desired range!".to_string()];
            match peak {
                Some(peak) => lines.push(format!("Max Jerk: {:.4} [m/s^3]", peak.value)),
                None => lines.push("Max Jerk: no samples".to_string()),
            }
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times_for(len: usize) -> Vec<f64> {
        (0..len).map(|i| i as f64 * 0.1).collect()
    }

    #[test]
    fn test_first_exceedance_not_global_max() {
        let jerk = [1.0, 2.0, 3.0, 10.0, 2.0, 11.0];
        let times = times_for(jerk.len());
        let verdict = evaluate(&jerk, &times, 5.0);

        let Verdict::Fail(exceedance) = verdict else {
            panic!("expected fail, got {verdict:?}");
        };
        assert_eq!(exceedance.first.index, 3);
        assert_eq!(exceedance.first.value, 10.0);
        assert_eq!(exceedance.first.time, times[3]);
        let preceding = exceedance.preceding.unwrap();
        assert_eq!(preceding.index, 2);
        assert_eq!(preceding.value, 3.0);
        assert_eq!(exceedance.peak.index, 5);
        assert_eq!(exceedance.peak.value, 11.0);
        assert_eq!(exceedance.peak.time, times[5]);
    }

    #[test]
    fn test_pass_reports_exact_maximum() {
        let jerk = [0.5, 3.25, 1.0, 3.99, 0.1];
        let verdict = evaluate(&jerk, &times_for(jerk.len()), 4.0);
        assert!(verdict.passed());
        let peak = verdict.peak().unwrap();
        assert_eq!(peak.value, 3.99);
        assert_eq!(peak.index, 3);
    }

    #[test]
    fn test_value_equal_to_threshold_fails() {
        let jerk = [1.0, 4.0, 2.0];
        let verdict = evaluate(&jerk, &times_for(3), 4.0);
        assert!(!verdict.passed());
    }

    #[test]
    fn test_non_positive_threshold_fails_immediately() {
        let jerk = [0.0, 0.2, 0.1];
        for max_jerk in [0.0, -1.0] {
            let Verdict::Fail(exceedance) = evaluate(&jerk, &times_for(3), max_jerk) else {
                panic!("expected fail for max_jerk={max_jerk}");
            };
            assert_eq!(exceedance.first.index, 0);
            assert_eq!(exceedance.preceding, None);
            assert_eq!(exceedance.peak.index, 1);
        }
    }

    #[test]
    fn test_peak_tie_keeps_first_index() {
        let jerk = [1.0, 7.0, 3.0, 7.0];
        let verdict = evaluate(&jerk, &times_for(4), 10.0);
        assert_eq!(verdict.peak().unwrap().index, 1);
    }

    #[test]
    fn test_empty_series_passes() {
        assert_eq!(evaluate(&[], &[], 4.0), Verdict::Pass { peak: None });
    }

    #[test]
    fn test_report_lines() {
        let jerk = [1.0, 2.0, 3.0, 10.0, 2.0, 11.0];
        let verdict = evaluate(&jerk, &times_for(jerk.len()), 5.0);
        let lines = format_report(&verdict, 5.0);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("index [3]"));
        assert!(lines[1].starts_with("Jerk below: 3.000"));
        assert_eq!(lines[2], "Max Jerk: 11.0000 [m/s^3] at index [5]");

        let pass = format_report(&Verdict::Pass { peak: None }, 4.0);
        assert_eq!(pass[0], "Jerk is in desired range!");
    }
}

// src/data_analysis/jerk_metrics.rs
