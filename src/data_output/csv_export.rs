// src/data_output/csv_export.rs

use chrono::Local;
use csv::Writer;
use log::info;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    COL_SMOOTHED_ACC, COL_SMOOTHED_JERK, MAX_OUTPUT_DIR_SUFFIX, ODOMETRY_COLUMNS,
    OUTPUT_TIMESTAMP_FORMAT,
};
use crate::data_input::log_data::{interval_duration, Sample};
use crate::types::DerivedSeries;

/// Current local time formatted for output directory and file names.
pub fn output_timestamp() -> String {
    Local::now().format(OUTPUT_TIMESTAMP_FORMAT).to_string()
}

/// Creates `<base>/<timestamp>`, or the first free `<base>/<timestamp>__<i>` when a run with
/// the same timestamp already exists.
pub fn create_output_dir(base: &Path, timestamp: &str) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(base)?;
    let primary = base.join(timestamp);
    if !primary.exists() {
        fs::create_dir(&primary)?;
        return Ok(primary);
    }
    for i in 1..MAX_OUTPUT_DIR_SUFFIX {
        let candidate = base.join(format!("{timestamp}__{i}"));
        if !candidate.exists() {
            fs::create_dir(&candidate)?;
            return Ok(candidate);
        }
    }
    Err(format!(
        "No free output directory for '{}' after {} attempts",
        primary.display(),
        MAX_OUTPUT_DIR_SUFFIX
    )
    .into())
}

/// Writes the samples together with smoothed acceleration and jerk magnitudes.
///
/// The file is named `<timestamp>_<duration>.csv` with the duration in seconds.
pub fn write_results_csv(
    dir: &Path,
    timestamp: &str,
    samples: &[Sample],
    derived: &DerivedSeries,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(format!(
        "{timestamp}_{:.3}.csv",
        interval_duration(samples)
    ));
    let mut writer = Writer::from_path(&path)?;

    let mut header: Vec<&str> = ODOMETRY_COLUMNS.to_vec();
    header.push(COL_SMOOTHED_ACC);
    header.push(COL_SMOOTHED_JERK);
    writer.write_record(&header)?;

    let smo_acc = derived.smoothed_acceleration();
    let smo_jerk = derived.smoothed_jerk();
    for (i, sample) in samples.iter().enumerate() {
        let mut record: Vec<String> = vec![
            sample.time_sec.to_string(),
            sample.seq.to_string(),
            sample.header_stamp_sec.to_string(),
            sample.vel_x.to_string(),
            sample.vel_y.to_string(),
            sample.omega_z.to_string(),
            sample.pos_x.to_string(),
            sample.pos_y.to_string(),
        ];
        record.push(smo_acc.get(i).map(f64::to_string).unwrap_or_default());
        record.push(smo_jerk.get(i).map(f64::to_string).unwrap_or_default());
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!("Results saved as '{}'", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::differentiation::{differentiate, SmoothingParams};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "jerk_metrics_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_output_dir_gets_suffix_on_collision() {
        let base = scratch_dir("collision");
        let first = create_output_dir(&base, "01_01_2024---10:00").unwrap();
        let second = create_output_dir(&base, "01_01_2024---10:00").unwrap();
        let third = create_output_dir(&base, "01_01_2024---10:00").unwrap();
        assert_eq!(first, base.join("01_01_2024---10:00"));
        assert_eq!(second, base.join("01_01_2024---10:00__1"));
        assert_eq!(third, base.join("01_01_2024---10:00__2"));
        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_results_csv_layout() {
        let samples: Vec<Sample> = (0..40)
            .map(|i| {
                let t = i as f64 * 0.05;
                Sample {
                    time_sec: t,
                    seq: i as u64,
                    header_stamp_sec: t,
                    vel_x: 0.2,
                    pos_x: 0.2 * t,
                    ..Default::default()
                }
            })
            .collect();
        let derived = differentiate(&samples, &SmoothingParams::default()).unwrap();

        let dir = scratch_dir("results");
        fs::create_dir_all(&dir).unwrap();
        let path = write_results_csv(&dir, "stamp", &samples, &derived).unwrap();
        assert_eq!(path.file_name().unwrap(), "stamp_1.950.csv");

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 10);
        assert_eq!(&headers[0], "%time");
        assert_eq!(&headers[9], "smo_jerk");
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), samples.len());
        assert_eq!(&rows[3][1], "3");
        fs::remove_dir_all(&dir).unwrap();
    }
}

// src/data_output/csv_export.rs
