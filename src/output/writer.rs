//! The `DatasetWriter` trait implemented by the output backends.

use crate::events::DatasetRow;
use crate::simulation::SimulationResult;
use std::path::PathBuf;

/// Writes whole datasets, one file per row type
pub trait DatasetWriter {
    /// Write `rows` to `<dir>/<T::DATASET>.<ext>` and return the file path
    ///
    /// An empty slice still creates the file.
    fn write_dataset<T: DatasetRow>(&mut self, rows: &[T]) -> SimulationResult<PathBuf>;
}
