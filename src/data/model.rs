use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError – typed failures of table construction
// ---------------------------------------------------------------------------

/// Errors raised while assembling a [`SalesTable`] from parsed CSV parts.
#[derive(Debug, Error)]
pub enum TableError {
    /// The header row lacks a column the filter depends on.
    #[error("input is missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// SalesRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single data row. Fields are raw strings, positionally aligned with the
/// table header. Numeric-looking columns (`total_sales` included) are never
/// parsed as numbers anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub fields: Vec<String>,
}

impl SalesRecord {
    /// Field value at a header position. Out-of-range reads as empty.
    pub fn field(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// SalesTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Name of the column carrying the sales figure.
pub const TOTAL_SALES: &str = "total_sales";
/// Name of the column carrying the ISO-8601 release date.
pub const RELEASE_DATE: &str = "release_date";

/// The full parsed dataset with pre-resolved positions of the two columns
/// the filter reads.
#[derive(Debug, Clone)]
pub struct SalesTable {
    /// Column names in file order, reused verbatim when writing output.
    pub header: Vec<String>,
    /// All data rows in file order.
    pub records: Vec<SalesRecord>,
    total_sales_idx: usize,
    release_date_idx: usize,
}

impl SalesTable {
    /// Build a table from a header and its rows, resolving the positions of
    /// the required columns.
    pub fn new(header: Vec<String>, records: Vec<SalesRecord>) -> Result<Self, TableError> {
        let total_sales_idx = header
            .iter()
            .position(|h| h == TOTAL_SALES)
            .ok_or(TableError::MissingColumn(TOTAL_SALES))?;
        let release_date_idx = header
            .iter()
            .position(|h| h == RELEASE_DATE)
            .ok_or(TableError::MissingColumn(RELEASE_DATE))?;

        Ok(SalesTable {
            header,
            records,
            total_sales_idx,
            release_date_idx,
        })
    }

    /// Position of the `total_sales` column.
    pub fn total_sales_idx(&self) -> usize {
        self.total_sales_idx
    }

    /// Position of the `release_date` column.
    pub fn release_date_idx(&self) -> usize {
        self.release_date_idx
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
