//! Fallback format: CSV export of the breakdown spreadsheet.
//!
//! Column layout: row 0 holds one main name per column, every non-blank cell
//! below it is one of that main's subs. Empty header columns are skipped,
//! cells are trimmed, and duplicate subs within a column collapse.

use crate::collate;
use crate::data::source::LoadError;
use crate::index::SourceMapping;

pub fn parse_columns(text: &str, location: &str) -> Result<SourceMapping, LoadError> {
    let csv_err = |e: csv::Error| LoadError::Csv {
        location: location.to_string(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = reader.records();
    let headers: Vec<String> = match rows.next() {
        Some(record) => record.map_err(csv_err)?.iter().map(|h| h.trim().to_string()).collect(),
        None => return Ok(SourceMapping::new()),
    };

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in rows {
        let record = record.map_err(csv_err)?;
        for (col, cell) in record.iter().enumerate().take(headers.len()) {
            let cell = cell.trim();
            if !cell.is_empty() {
                columns[col].push(cell.to_string());
            }
        }
    }

    let mut mapping = SourceMapping::new();
    for (main, mut subs) in headers.into_iter().zip(columns) {
        if main.is_empty() {
            continue;
        }
        collate::sort_dedup(&mut subs);
        mapping.entry(main).or_default().extend(subs);
    }
    Ok(mapping)
}
