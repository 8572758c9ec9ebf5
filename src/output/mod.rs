//! Dataset output
//!
//! Writes the results of a run into an output directory:
//!
//! | Dataset       | Rows                        |
//! |---------------|-----------------------------|
//! | `people_log`  | visitor movements           |
//! | `seat_status` | seatings                    |
//! | `wait_log`    | unseated dine-in visits     |
//! | `anomaly_log` | long and short stay labels  |
//! | `seat_info`   | the seat roster             |
//!
//! Each dataset is a `.jsonl` or a `.csv` file depending on [`OutputFormat`].

pub mod csv_writer;
pub mod jsonl;
pub mod writer;

pub use csv_writer::CsvWriter;
pub use jsonl::JsonlWriter;
pub use writer::DatasetWriter;

use crate::simulation::{SimulationOutput, SimulationResult};
use crate::types::OutputFormat;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Write every dataset of `output` into `dir`, creating it if needed
///
/// Returns the written file paths in dataset order.
#[instrument(skip(output, dir), fields(dir = %dir.display(), format = %format))]
pub fn write_simulation_output(
    output: &SimulationOutput,
    dir: &Path,
    format: OutputFormat,
) -> SimulationResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let paths = match format {
        OutputFormat::Json => write_all(&mut JsonlWriter::new(dir), output)?,
        OutputFormat::Csv => write_all(&mut CsvWriter::new(dir), output)?,
    };

    info!("Wrote {} datasets to {}", paths.len(), dir.display());
    Ok(paths)
}

fn write_all<W: DatasetWriter>(writer: &mut W, output: &SimulationOutput) -> SimulationResult<Vec<PathBuf>> {
    Ok(vec![
        writer.write_dataset(&output.logs.people_log)?,
        writer.write_dataset(&output.logs.seat_status)?,
        writer.write_dataset(&output.logs.wait_log)?,
        writer.write_dataset(&output.logs.anomaly_log)?,
        writer.write_dataset(&output.seat_info())?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{PeopleLogEntry, SeatInfoEntry};
    use crate::simulation::SimulationOrchestrator;
    use crate::types::SimulationConfig;
    use chrono::NaiveDate;
    use std::io::{BufRead, BufReader};
    use tempfile::TempDir;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn one_day_output() -> SimulationOutput {
        let day = NaiveDate::from_ymd_opt(2025, 4, 19).unwrap();
        let config = SimulationConfig { start_date: day, end_date: day, seed: Some(3), ..Default::default() };
        SimulationOrchestrator::new(config).unwrap().run().unwrap()
    }

    #[test]
    fn jsonl_files_created() {
        let dir = tmp();
        let output = one_day_output();

        let paths = write_simulation_output(&output, dir.path(), OutputFormat::Json).unwrap();

        let names: Vec<_> = paths.iter().map(|p| p.file_name().unwrap().to_str().unwrap().to_owned()).collect();
        assert_eq!(
            names,
            ["people_log.jsonl", "seat_status.jsonl", "wait_log.jsonl", "anomaly_log.jsonl", "seat_info.jsonl"]
        );
    }

    #[test]
    fn jsonl_people_rows_parse_back() {
        let dir = tmp();
        let output = one_day_output();
        write_simulation_output(&output, dir.path(), OutputFormat::Json).unwrap();

        let file = fs::File::open(dir.path().join("people_log.jsonl")).unwrap();
        let rows: Vec<PeopleLogEntry> = BufReader::new(file)
            .lines()
            .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
            .collect();
        assert_eq!(rows, output.logs.people_log);
    }

    #[test]
    fn csv_headers_correct_even_when_empty() {
        let dir = tmp();
        let mut output = one_day_output();
        output.logs.wait_log.clear();
        write_simulation_output(&output, dir.path(), OutputFormat::Csv).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("wait_log.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["person_id", "start_time", "end_time", "wait_duration", "reason"]);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn csv_seat_info_round_trip() {
        let dir = tmp();
        let output = one_day_output();
        write_simulation_output(&output, dir.path(), OutputFormat::Csv).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("seat_info.csv")).unwrap();
        let rows: Vec<SeatInfoEntry> = rdr.deserialize().map(Result::unwrap).collect();
        assert_eq!(rows, output.seat_info());
        assert_eq!(rows[0].seat_id.as_str(), "S1");
    }

    #[test]
    fn csv_null_columns_are_empty_cells() {
        let dir = tmp();
        let output = one_day_output();
        write_simulation_output(&output, dir.path(), OutputFormat::Csv).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("people_log.csv")).unwrap();
        for (record, row) in rdr.records().zip(&output.logs.people_log) {
            let record = record.unwrap();
            // zone is column 3, duration column 6
            assert_eq!(record[3].is_empty(), row.zone.is_none());
            assert_eq!(record[6].is_empty(), row.duration.is_none());
        }
    }
}
