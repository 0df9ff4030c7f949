//! Whole-file CSV reading.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, strip_bom};

/// A source file split into its header row and data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: CsvHeaders,
    /// Data rows, each exactly as wide as the header.
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads the whole source file.
///
/// Fields follow standard CSV quoting, so a quoted field may contain commas,
/// quotes and line breaks. A data row with a different number of fields
/// than the header is a parse error.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    let file = open_source(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(file);

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?,
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };
    let raw_headers: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            if idx == 0 {
                strip_bom(cell).to_string()
            } else {
                cell.to_string()
            }
        })
        .collect();
    let headers = CsvHeaders::from_raw(raw_headers);

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read source table"
    );
    Ok(SourceTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_header_and_rows() {
        let file = create_temp_csv("Name, Age\nAlice,30\nBob,7\n");
        let table = read_source_table(file.path()).unwrap();

        assert_eq!(table.headers.raw, vec!["Name", " Age"]);
        let columns: Vec<&str> = table.headers.columns.iter().map(|c| c.as_str()).collect();
        assert_eq!(columns, vec!["name", "age"]);
        assert_eq!(table.rows, vec![vec!["Alice", "30"], vec!["Bob", "7"]]);
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn test_quoted_fields_keep_delimiters() {
        let file = create_temp_csv("city,motto\n\"Paris, FR\",\"say \"\"oui\"\"\"\n");
        let table = read_source_table(file.path()).unwrap();

        assert_eq!(table.rows, vec![vec!["Paris, FR", "say \"oui\""]]);
    }

    #[test]
    fn test_cells_are_not_trimmed() {
        let file = create_temp_csv("a,b\n  x , 1\n");
        let table = read_source_table(file.path()).unwrap();

        assert_eq!(table.rows[0], vec!["  x ", " 1"]);
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv("");
        let result = read_source_table(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_header_only() {
        let file = create_temp_csv("a,b\n");
        let table = read_source_table(file.path()).unwrap();

        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 0);
    }

    #[test]
    fn test_bom_is_stripped() {
        let file = create_temp_csv("\u{feff}Name,Age\nAlice,30\n");
        let table = read_source_table(file.path()).unwrap();

        assert_eq!(table.headers.columns[0].as_str(), "name");
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let file = create_temp_csv("a,b\n1,2\n3,4,5\n");
        let result = read_source_table(file.path());

        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_source_table(&dir.path().join("absent.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
