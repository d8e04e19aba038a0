//! CSV output.
//!
//! Header row is always written, so an empty result still yields a valid file.

use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::models::{COLUMNS, PaperRecord};

/// Write records as CSV (header + one row per record, no index column).
pub fn write_csv<W: Write>(records: &[PaperRecord], writer: W) -> Result<(), ExportError> {
    let mut wtr = ::csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    write_rows(&mut wtr, records)
}

/// Create (or truncate) `path` and write records as CSV.
pub fn write_csv_file(records: &[PaperRecord], path: &Path) -> Result<(), ExportError> {
    let mut wtr = ::csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    write_rows(&mut wtr, records)
}

fn write_rows<W: Write>(
    wtr: &mut ::csv::Writer<W>,
    records: &[PaperRecord],
) -> Result<(), ExportError> {
    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
