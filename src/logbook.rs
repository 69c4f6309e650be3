mod error;

use log::info;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;

pub use error::{Error, ErrorKind};

/// One persisted record. Field order defines the CSV column order, and both
/// are fixed for the life of the log file.
#[derive(Serialize, Debug, Clone)]
pub struct LogRow {
    pub timestamp: String,
    pub origin: String,
    pub destination: String,
    pub distance_mi: f64,
    pub eta_min: f64,
    pub freeflow_min: f64,
    pub route_description: String,
}

/// Appends a single row, writing the header row only when the file is empty.
///
/// The file is opened in create+append mode before the header decision is
/// made from the open handle's length, so creation itself cannot race a
/// concurrent writer into a duplicate header. Interleaving of data rows from
/// overlapping runs remains the scheduler's responsibility.
pub fn append_row(path: &Path, row: &LogRow) -> Result<(), Error> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let needs_header = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer.serialize(row)?;
    writer.flush()?;

    info!("appended row to {}", path.display());

    Ok(())
}
