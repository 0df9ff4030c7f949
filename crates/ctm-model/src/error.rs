//! Load failures and the append-only log that collects them.

use std::path::PathBuf;

use thiserror::Error;

use crate::options::OptionKey;

/// One failure recorded during a load.
///
/// Executor failures carry the executor's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    // === Configuration ===
    #[error("The {key} option is empty")]
    ConfigurationMissing { key: OptionKey },

    #[error("The mysqltablename option '{value}' is not a valid table name")]
    InvalidTableName { value: String },

    // === Source file ===
    #[error("Could not find csvfile {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Could not read csvfile {}: {message}", path.display())]
    FileUnreadable { path: PathBuf, message: String },

    #[error("CSV column header is empty")]
    EmptyHeader,

    #[error("CSV file has a header row but no data rows")]
    NoDataRows,

    // === Schema ===
    #[error("Column {position} has an empty name after sanitizing its header")]
    EmptyColumnName { position: usize },

    #[error("Column name '{name}' appears more than once after sanitizing the header")]
    DuplicateColumn { name: String },

    // === Database ===
    #[error("Could not connect to the database: {message}")]
    Connection { message: String },

    #[error("{message}")]
    SchemaCreationFailed { message: String },

    #[error("{message}")]
    InsertFailed { message: String },
}

/// Result type for loader stages.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Ordered record of every failure in one run.
///
/// Entries are only ever appended; the log is reported verbatim at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    entries: Vec<LoadError>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: LoadError) {
        self.entries.push(error);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LoadError] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoadError> {
        self.entries.iter()
    }

    /// Rendered messages in recording order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl Extend<LoadError> for ErrorLog {
    fn extend<I: IntoIterator<Item = LoadError>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a LoadError;
    type IntoIter = std::slice::Iter<'a, LoadError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::ConfigurationMissing {
            key: OptionKey::DbHost,
        };
        assert_eq!(err.to_string(), "The dbhost option is empty");

        let err = LoadError::FileNotFound {
            path: PathBuf::from("/data/people.csv"),
        };
        assert_eq!(err.to_string(), "Could not find csvfile /data/people.csv");
    }

    #[test]
    fn executor_messages_are_verbatim() {
        let err = LoadError::SchemaCreationFailed {
            message: "Table 'people' already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Table 'people' already exists");
    }

    #[test]
    fn log_appends_in_order() {
        let mut log = ErrorLog::new();
        log.push(LoadError::EmptyHeader);
        log.extend([LoadError::NoDataRows]);
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.messages(),
            vec![
                "CSV column header is empty".to_string(),
                "CSV file has a header row but no data rows".to_string(),
            ]
        );
    }
}
