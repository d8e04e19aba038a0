//! Result export: CSV file when a path is given, text table otherwise.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::error::ExportError;
use crate::formatters::{format_table, write_csv_file};
use crate::models::PaperRecord;

/// Export records to `destination`, or print them as a table to stdout.
pub fn export(records: &[PaperRecord], destination: Option<&Path>) -> Result<(), ExportError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    export_to(records, destination, &mut out)
}

/// Export records, sending the table or the confirmation message to `out`.
pub fn export_to<W: Write>(
    records: &[PaperRecord],
    destination: Option<&Path>,
    out: &mut W,
) -> Result<(), ExportError> {
    match destination {
        Some(path) => {
            write_csv_file(records, path)?;
            info!(path = %path.display(), rows = records.len(), "Wrote CSV");
            writeln!(out, "Results saved to {}", path.display())?;
        }
        None => {
            write!(out, "{}", format_table(records))?;
        }
    }
    out.flush()?;
    Ok(())
}
