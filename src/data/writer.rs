use std::path::Path;

use anyhow::{Context, Result};

use super::model::SalesTable;

/// Write the header plus the selected rows to a CSV file.
///
/// `indices` holds row positions in ascending input order, as produced by
/// [`super::filter::filtered_indices`]. Fields containing the delimiter,
/// quote character, or newlines are quoted per standard CSV rules.
pub fn write_csv(path: &Path, table: &SalesTable, indices: &[usize]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV {}", path.display()))?;

    writer
        .write_record(&table.header)
        .context("writing CSV header")?;

    for &i in indices {
        writer
            .write_record(&table.records[i].fields)
            .with_context(|| format!("writing CSV row {i}"))?;
    }

    // Flush explicitly so write errors surface here rather than in Drop.
    writer.flush().context("flushing CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv;
    use crate::data::model::SalesRecord;

    fn sample_table() -> SalesTable {
        let header = vec![
            "title".to_string(),
            "total_sales".to_string(),
            "release_date".to_string(),
        ];
        let records = vec![
            SalesRecord {
                fields: vec![
                    "Half-Life 2".to_string(),
                    "6.5".to_string(),
                    "2004-11-16".to_string(),
                ],
            },
            SalesRecord {
                fields: vec![
                    "Tales of Symphonia: \"Chosen\" edition, JP".to_string(),
                    "0.95".to_string(),
                    "2003-08-29".to_string(),
                ],
            },
        ];
        SalesTable::new(header, records).unwrap()
    }

    #[test]
    fn round_trip_preserves_header_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = sample_table();

        write_csv(&path, &table, &[0, 1]).unwrap();
        let reloaded = load_csv(&path).unwrap();

        assert_eq!(reloaded.header, table.header);
        assert_eq!(reloaded.records, table.records);
    }

    #[test]
    fn writes_only_selected_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = sample_table();

        write_csv(&path, &table, &[1]).unwrap();
        let reloaded = load_csv(&path).unwrap();

        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.records[0], table.records[1]);
    }

    #[test]
    fn empty_selection_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = sample_table();

        write_csv(&path, &table, &[]).unwrap();
        let reloaded = load_csv(&path).unwrap();

        assert_eq!(reloaded.header, table.header);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");
        assert!(write_csv(&path, &sample_table(), &[]).is_err());
    }
}
