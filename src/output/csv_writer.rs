//! CSV output backend.
//!
//! Every file starts with its header row, even when the dataset is empty.
//! Missing values are empty cells.

use crate::events::DatasetRow;
use crate::output::writer::DatasetWriter;
use crate::simulation::SimulationResult;
use csv::WriterBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes each dataset as a `.csv` file
#[derive(Debug, Clone)]
pub struct CsvWriter {
    dir: PathBuf,
}

impl CsvWriter {
    /// Writer targeting an existing directory
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf() }
    }
}

impl DatasetWriter for CsvWriter {
    fn write_dataset<T: DatasetRow>(&mut self, rows: &[T]) -> SimulationResult<PathBuf> {
        let path = self.dir.join(format!("{}.csv", T::DATASET));

        // Header is written by hand so empty datasets still get one
        let mut writer = WriterBuilder::new().has_headers(false).from_path(&path)?;
        writer.write_record(T::COLUMNS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(path)
    }
}
