//! Plain-text table for terminal output.

use crate::models::{COLUMNS, PaperRecord};

/// Cells longer than this are truncated with `...`.
pub const MAX_CELL_WIDTH: usize = 50;

const COLUMN_GAP: &str = "  ";

/// Render records as an aligned table with a leading row index.
#[must_use]
pub fn format_table(records: &[PaperRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            std::iter::once(i.to_string())
                .chain(record.values().iter().map(|v| truncate(v)))
                .collect()
        })
        .collect();

    let header: Vec<String> =
        std::iter::once(String::new()).chain(COLUMNS.iter().map(|c| (*c).to_string())).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = format_row(&header, &widths);
    output.push('\n');
    output.push_str(&format_row(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));
    output.push('\n');

    if rows.is_empty() {
        output.push_str("(no rows)\n");
    }
    for row in &rows {
        output.push_str(&format_row(row, &widths));
        output.push('\n');
    }

    output
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_CELL_WIDTH {
        return value.to_string();
    }
    let kept: String = value.chars().take(MAX_CELL_WIDTH - 3).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> PaperRecord {
        PaperRecord {
            pubmed_id: id.into(),
            title: title.into(),
            publication_date: "2020".into(),
            non_academic_authors: String::new(),
            company_affiliations: String::new(),
            corresponding_email: "N/A".into(),
        }
    }

    #[test]
    fn test_table_has_header_separator_and_rows() {
        let table = format_table(&[record("111", "A Study"), record("222", "N/A")]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("PubmedID"));
        assert!(lines[0].contains("Corresponding Author Email"));
        assert!(lines[1].starts_with('-'));
        assert!(lines[2].starts_with("0  111"));
        assert!(lines[3].starts_with("1  222"));
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let table = format_table(&[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "(no rows)");
    }

    #[test]
    fn test_long_cells_are_truncated() {
        let long = "x".repeat(80);
        let table = format_table(&[record("1", &long)]);
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains(&format!("{}...", "x".repeat(MAX_CELL_WIDTH - 3))));
        assert!(!row.contains(&long));
    }

    #[test]
    fn test_columns_are_aligned() {
        let table = format_table(&[record("1", "Short"), record("22222", "Longer title")]);
        let lines: Vec<&str> = table.lines().collect();
        let title_col = lines[0].find("Title").unwrap();
        assert_eq!(lines[2].find("Short"), Some(title_col));
        assert_eq!(lines[3].find("Longer title"), Some(title_col));
    }
}
