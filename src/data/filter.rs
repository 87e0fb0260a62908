use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use super::model::{SalesRecord, SalesTable};

// ---------------------------------------------------------------------------
// Filter predicate: which rows survive into the filtered export
// ---------------------------------------------------------------------------

/// Earliest release year kept in the filtered dataset.
pub const MIN_YEAR: i32 = 1985;
/// Latest release year kept in the filtered dataset.
pub const MAX_YEAR: i32 = 2018;

/// Decide whether a row belongs in the filtered output.
///
/// A row passes when:
/// * its `total_sales` field is non-empty (presence check only — the value
///   is never parsed as a number), and
/// * its `release_date` field is non-empty, and
/// * the date's year falls within [`MIN_YEAR`]`..=`[`MAX_YEAR`].
///
/// A non-empty `release_date` that is not a valid `YYYY-MM-DD` calendar
/// date is an error, not a rejection: bad data aborts the run.
pub fn passes_filter(table: &SalesTable, record: &SalesRecord) -> Result<bool> {
    if record.field(table.total_sales_idx()).is_empty() {
        return Ok(false);
    }
    let date = record.field(table.release_date_idx());
    if date.is_empty() {
        return Ok(false);
    }

    let release_year = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("invalid release_date '{date}'"))?
        .year();

    Ok((MIN_YEAR..=MAX_YEAR).contains(&release_year))
}

/// Return indices of records that pass the filter, preserving input order.
///
/// The first malformed date aborts the whole scan with the row number
/// attached.
pub fn filtered_indices(table: &SalesTable) -> Result<Vec<usize>> {
    let mut keep = Vec::new();
    for (i, record) in table.records.iter().enumerate() {
        if passes_filter(table, record).with_context(|| format!("CSV row {i}"))? {
            keep.push(i);
        }
    }
    Ok(keep)
}
