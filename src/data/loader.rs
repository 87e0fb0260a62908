use std::path::Path;

use anyhow::{Context, Result};

use super::model::{SalesRecord, SalesTable};

/// Load a sales table from a CSV file.
///
/// The first line is the header; every following line becomes one
/// [`SalesRecord`]. Fields are optionally quoted per standard CSV rules.
/// A row whose field count disagrees with the header is rejected by the
/// reader and aborts the load with the row number attached.
pub fn load_csv(path: &Path) -> Result<SalesTable> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let header: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(SalesRecord {
            fields: record.iter().map(|f| f.to_string()).collect(),
        });
    }

    let table = SalesTable::new(header, records)
        .with_context(|| format!("validating columns of {}", path.display()))?;
    Ok(table)
}
