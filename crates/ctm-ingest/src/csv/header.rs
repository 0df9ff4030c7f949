//! Header row sanitizing.

use ctm_model::ColumnName;

/// The header row as read and as sanitized, index for index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Cells exactly as they appear in the file (BOM removed).
    pub raw: Vec<String>,
    /// Sanitized column names, one per raw cell.
    pub columns: Vec<ColumnName>,
}

impl CsvHeaders {
    pub fn from_raw(raw: Vec<String>) -> Self {
        let columns = raw.iter().map(|cell| ColumnName::sanitize(cell)).collect();
        Self { raw, columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the original header text for a sanitized column.
    pub fn raw_for(&self, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c.as_str() == column)?;
        self.raw.get(idx).map(String::as_str)
    }
}

/// Drops a UTF-8 byte order mark from the first header cell.
pub(crate) fn strip_bom(cell: &str) -> &str {
    cell.strip_prefix('\u{feff}').unwrap_or(cell)
}
