//! Error types for source ingestion.

use std::path::PathBuf;

use ctm_model::LoadError;
use thiserror::Error;

/// Errors that can occur while reading the source file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file does not exist.
    #[error("CSV file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Source file exists but could not be opened.
    #[error("failed to open file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be decoded, including rows whose width differs
    /// from the header.
    #[error("failed to parse CSV {}: {source}", path.display())]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file holds no records at all.
    #[error("CSV file is empty: {}", path.display())]
    EmptyCsv { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

impl From<IngestError> for LoadError {
    fn from(error: IngestError) -> Self {
        match error {
            IngestError::FileNotFound { path } => Self::FileNotFound { path },
            IngestError::FileRead { path, source } => Self::FileUnreadable {
                path,
                message: source.to_string(),
            },
            IngestError::CsvParse { path, source } => Self::FileUnreadable {
                path,
                message: source.to_string(),
            },
            IngestError::EmptyCsv { .. } => Self::EmptyHeader,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn empty_csv_maps_to_empty_header() {
        let err = IngestError::EmptyCsv {
            path: PathBuf::from("empty.csv"),
        };
        assert_eq!(LoadError::from(err), LoadError::EmptyHeader);
    }

    #[test]
    fn open_failure_maps_to_unreadable() {
        let err = IngestError::FileRead {
            path: PathBuf::from("locked.csv"),
            source: std::io::Error::other("permission denied"),
        };
        let load = LoadError::from(err);
        assert_eq!(
            load,
            LoadError::FileUnreadable {
                path: PathBuf::from("locked.csv"),
                message: "permission denied".to_string(),
            }
        );
    }
}
