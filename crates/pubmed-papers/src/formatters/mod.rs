//! Output formatting for exported records.

pub mod csv;
pub mod table;

pub use self::csv::{write_csv, write_csv_file};
pub use self::table::{MAX_CELL_WIDTH, format_table};
