//! JSON Lines output backend.
//!
//! One JSON object per line; missing values are written as `null`.

use crate::events::DatasetRow;
use crate::output::writer::DatasetWriter;
use crate::simulation::SimulationResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes each dataset as a `.jsonl` file
#[derive(Debug, Clone)]
pub struct JsonlWriter {
    dir: PathBuf,
}

impl JsonlWriter {
    /// Writer targeting an existing directory
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf() }
    }
}

impl DatasetWriter for JsonlWriter {
    fn write_dataset<T: DatasetRow>(&mut self, rows: &[T]) -> SimulationResult<PathBuf> {
        let path = self.dir.join(format!("{}.jsonl", T::DATASET));
        let mut writer = BufWriter::new(File::create(&path)?);

        for row in rows {
            serde_json::to_writer(&mut writer, row)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        debug!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(path)
    }
}
