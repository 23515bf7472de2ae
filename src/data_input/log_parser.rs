// src/data_input/log_parser.rs

use csv::ReaderBuilder;
use log::{debug, info, warn};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::{
    COL_TIME, MIN_PLAUSIBLE_SPAN_S, NANOSECONDS_TO_SECONDS, ODOMETRY_COLUMNS,
};
use crate::data_input::log_data::{interval_duration, normalize_times, Sample};

/// Parses an odometry CSV log file into a time-normalized sample sequence.
pub fn parse_odometry_csv(input_file_path: &Path) -> Result<Vec<Sample>, Box<dyn Error>> {
    info!("Reading odometry log '{}'", input_file_path.display());
    let file = File::open(input_file_path)?;
    parse_odometry_reader(BufReader::new(file))
}

/// Parses odometry CSV content from any reader.
///
/// `%time` and `field.header.stamp` are expected in nanoseconds. If the header stamp span
/// after scaling is implausibly short, the stamps were already seconds and the scaling is
/// undone for that column.
pub fn parse_odometry_reader<R: Read>(reader: R) -> Result<Vec<Sample>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // --- Header Index Mapping ---
    let header_record = reader.headers()?.clone();
    debug!("Headers found in CSV: {:?}", header_record);

    let header_indices: Vec<Option<usize>> = ODOMETRY_COLUMNS
        .iter()
        .map(|&target| header_record.iter().position(|h| h.trim() == target))
        .collect();

    let missing: Vec<String> = ODOMETRY_COLUMNS
        .iter()
        .zip(header_indices.iter())
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| format!("'{name}'"))
        .collect();
    if !missing.is_empty() {
        return Err(format!("Missing required odometry columns: {}", missing.join(", ")).into());
    }
    let header_indices: Vec<usize> = header_indices.into_iter().flatten().collect();

    // --- Data Reading ---
    let mut samples: Vec<Sample> = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping row {} due to CSV read error: {}", row_index + 1, e);
                continue;
            }
        };

        // Concatenated exports repeat the header row.
        if record.get(header_indices[0]) == Some(COL_TIME) {
            continue;
        }

        let values: Option<Vec<f64>> = header_indices
            .iter()
            .map(|&csv_idx| record.get(csv_idx).and_then(|v| v.parse::<f64>().ok()))
            .collect();
        let Some(values) = values else {
            warn!("Skipping row {} due to missing or invalid fields", row_index + 1);
            continue;
        };

        samples.push(Sample {
            time_sec: values[0] * NANOSECONDS_TO_SECONDS,
            seq: values[1] as u64,
            header_stamp_sec: values[2] * NANOSECONDS_TO_SECONDS,
            vel_x: values[3],
            vel_y: values[4],
            omega_z: values[5],
            pos_x: values[6],
            pos_y: values[7],
        });
    }

    if samples.is_empty() {
        return Err("No valid data rows found in odometry log".into());
    }
    debug!("Finished reading {} data rows.", samples.len());

    normalize_times(&mut samples);

    if interval_duration(&samples) < MIN_PLAUSIBLE_SPAN_S {
        debug!("Header stamps look like seconds already, undoing nanosecond scaling");
        for sample in samples.iter_mut() {
            sample.header_stamp_sec /= NANOSECONDS_TO_SECONDS;
        }
    }

    info!(
        "Time of Interval: {:.3} [s] ({} samples)",
        interval_duration(&samples),
        samples.len()
    );
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "%time,field.header.seq,field.header.stamp,field.child_frame_id,\
field.pose.pose.position.x,field.pose.pose.position.y,\
field.twist.twist.linear.x,field.twist.twist.linear.y,field.twist.twist.angular.z";

    #[test]
    fn test_parse_scales_and_normalizes() {
        let csv = format!(
            "{HEADER}\n\
1500000000000000000,7,1500000000000000000,base,0.0,0.0,0.1,0.0,0.0\n\
1500000000020000000,8,1500000000020000000,base,0.002,0.0,0.1,0.0,0.0\n\
1500000001000000000,9,1500000001000000000,base,0.1,0.0,0.1,0.0,0.01\n"
        );
        let samples = parse_odometry_reader(csv.as_bytes()).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].time_sec, 0.0);
        assert_eq!(samples[0].header_stamp_sec, 0.0);
        assert_eq!(samples[0].seq, 7);
        assert!((samples[1].header_stamp_sec - 0.02).abs() < 1e-5);
        assert!((samples[2].header_stamp_sec - 1.0).abs() < 1e-5);
        assert_eq!(samples[2].pos_x, 0.1);
        assert_eq!(samples[2].omega_z, 0.01);
    }

    #[test]
    fn test_parse_stamps_already_in_seconds() {
        let csv = format!(
            "{HEADER}\n\
1500000000000000000,1,100.0,base,0.0,0.0,0.0,0.0,0.0\n\
1500000000020000000,2,100.5,base,0.0,0.0,0.0,0.0,0.0\n"
        );
        let samples = parse_odometry_reader(csv.as_bytes()).unwrap();
        assert!((samples[1].header_stamp_sec - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_parse_skips_repeated_header_and_bad_rows() {
        let csv = format!(
            "{HEADER}\n\
1000000000,1,1000000000,base,0.0,0.0,0.0,0.0,0.0\n\
{HEADER}\n\
2000000000,2,oops,base,0.0,0.0,0.0,0.0,0.0\n\
3000000000,3,3000000000,base,0.0,0.0,0.0,0.0,0.0\n"
        );
        let samples = parse_odometry_reader(csv.as_bytes()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].seq, 3);
        assert!((samples[1].header_stamp_sec - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_missing_column() {
        let csv = "%time,field.header.seq\n1,2\n";
        let err = parse_odometry_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("field.header.stamp"));
    }
}

// src/data_input/log_parser.rs
