// tests/pipeline_integration_test.rs

use jerk_metrics::constants::DEFAULT_MAX_JERK;
use jerk_metrics::data_analysis::jerk_metrics::{format_report, Verdict};
use jerk_metrics::data_input::log_parser::parse_odometry_reader;
use jerk_metrics::pipeline::{run, PipelineConfig};

const HEADER: &str = "%time,field.header.seq,field.header.stamp,field.child_frame_id,\
field.pose.pose.position.x,field.pose.pose.position.y,\
field.twist.twist.linear.x,field.twist.twist.linear.y,field.twist.twist.angular.z";

const START_NS: u64 = 1_500_000_000_000_000_000;
const STEP_NS: u64 = 20_000_000;

/// Odometry export at 50 Hz with nanosecond stamps, velocity given per sample index.
fn odometry_csv(n: usize, velocity: impl Fn(usize) -> f64) -> String {
    let mut csv = String::from(HEADER);
    let mut pos_x = 0.0;
    for i in 0..n {
        let stamp = START_NS + i as u64 * STEP_NS;
        let vel_x = velocity(i);
        csv.push_str(&format!(
            "\n{stamp},{i},{stamp},odom,{pos_x},0.0,{vel_x},0.0,0.0"
        ));
        pos_x += vel_x * 0.02;
    }
    csv.push('\n');
    csv
}

#[test]
fn test_default_config() {
    let config = PipelineConfig::default();
    assert_eq!(config.max_jerk, 4.0);
    assert_eq!(config.max_jerk, DEFAULT_MAX_JERK);
    assert_eq!(PipelineConfig::with_max_jerk(Some(2.5)).max_jerk, 2.5);
    assert_eq!(PipelineConfig::with_max_jerk(None), config);
}

#[test]
fn test_steady_drive_passes() {
    let csv = odometry_csv(200, |_| 0.5);
    let samples = parse_odometry_reader(csv.as_bytes()).unwrap();
    assert_eq!(samples.len(), 200);

    let output = run(&samples, &PipelineConfig::default()).unwrap();
    assert_eq!(output.times.len(), 200);
    assert!((output.derived.sampling_interval - 0.02).abs() < 1e-6);
    assert!(output.verdict.passed());
    assert!(output.verdict.peak().unwrap().value < 1e-6);

    let report = format_report(&output.verdict, 4.0);
    assert_eq!(report[0], "Jerk is in desired range!");
}

#[test]
fn test_velocity_step_fails_before_peak() {
    let csv = odometry_csv(200, |i| if i < 100 { 0.0 } else { 1.0 });
    let samples = parse_odometry_reader(csv.as_bytes()).unwrap();
    let output = run(&samples, &PipelineConfig::default()).unwrap();

    let Verdict::Fail(exceedance) = output.verdict else {
        panic!("expected the velocity step to fail, got {:?}", output.verdict);
    };
    assert!(exceedance.first.value >= 4.0);
    assert!(exceedance.first.index <= exceedance.peak.index);
    assert!((70..=105).contains(&exceedance.first.index));
    let preceding = exceedance.preceding.unwrap();
    assert_eq!(preceding.index + 1, exceedance.first.index);
    assert!(preceding.value < 4.0);
    assert_eq!(exceedance.first.time, output.times[exceedance.first.index]);

    // A threshold above the peak lets the same drive pass.
    let relaxed = PipelineConfig::with_max_jerk(Some(exceedance.peak.value + 1.0));
    assert!(run(&samples, &relaxed).unwrap().verdict.passed());
}

#[test]
fn test_logs_as_long_as_the_window_are_evaluated() {
    let window_len = PipelineConfig::default().smoothing.window_len;
    for n in [window_len, window_len + 1] {
        let csv = odometry_csv(n, |_| 0.5);
        let samples = parse_odometry_reader(csv.as_bytes()).unwrap();
        let output = run(&samples, &PipelineConfig::default()).unwrap();
        assert_eq!(output.derived.smoothed_jerk().len(), n);
        assert!(output.verdict.passed(), "n={n}: {:?}", output.verdict);
    }
}

#[test]
fn test_short_log_is_rejected() {
    let csv = odometry_csv(10, |_| 0.5);
    let samples = parse_odometry_reader(csv.as_bytes()).unwrap();
    assert!(run(&samples, &PipelineConfig::default()).is_err());
}

// tests/pipeline_integration_test.rs
