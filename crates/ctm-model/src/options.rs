//! Loader options and their verification.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::ids::TableName;

/// The six required option keys, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    CsvFile,
    DbHost,
    DbUsername,
    DbPassword,
    DbName,
    TableName,
}

impl OptionKey {
    pub const ALL: [Self; 6] = [
        Self::CsvFile,
        Self::DbHost,
        Self::DbUsername,
        Self::DbPassword,
        Self::DbName,
        Self::TableName,
    ];

    /// Keys needed to read and infer without touching a database.
    pub const SOURCE: [Self; 2] = [Self::CsvFile, Self::TableName];

    /// Name used on the command line and in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CsvFile => "csvfile",
            Self::DbHost => "dbhost",
            Self::DbUsername => "dbusername",
            Self::DbPassword => "dbpassword",
            Self::DbName => "dbname",
            Self::TableName => "mysqltablename",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw loader options as supplied by flags or a configuration file.
///
/// An empty string counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderOptions {
    pub csvfile: Option<String>,
    pub dbhost: Option<String>,
    pub dbusername: Option<String>,
    pub dbpassword: Option<String>,
    pub dbname: Option<String>,
    pub mysqltablename: Option<String>,
}

impl LoaderOptions {
    fn slot(&self, key: OptionKey) -> &Option<String> {
        match key {
            OptionKey::CsvFile => &self.csvfile,
            OptionKey::DbHost => &self.dbhost,
            OptionKey::DbUsername => &self.dbusername,
            OptionKey::DbPassword => &self.dbpassword,
            OptionKey::DbName => &self.dbname,
            OptionKey::TableName => &self.mysqltablename,
        }
    }

    fn slot_mut(&mut self, key: OptionKey) -> &mut Option<String> {
        match key {
            OptionKey::CsvFile => &mut self.csvfile,
            OptionKey::DbHost => &mut self.dbhost,
            OptionKey::DbUsername => &mut self.dbusername,
            OptionKey::DbPassword => &mut self.dbpassword,
            OptionKey::DbName => &mut self.dbname,
            OptionKey::TableName => &mut self.mysqltablename,
        }
    }

    /// Returns the value for `key`, treating empty strings as absent.
    pub fn get(&self, key: OptionKey) -> Option<&str> {
        self.slot(key).as_deref().filter(|value| !value.is_empty())
    }

    pub fn set(&mut self, key: OptionKey, value: impl Into<String>) {
        *self.slot_mut(key) = Some(value.into());
    }

    /// Layers `overrides` on top of `self`.
    ///
    /// A non-empty value in `overrides` wins; otherwise the base value stays.
    #[must_use]
    pub fn overlay(mut self, overrides: &LoaderOptions) -> Self {
        for key in OptionKey::ALL {
            if let Some(value) = overrides.get(key) {
                self.set(key, value);
            }
        }
        self
    }

    /// Verifies every required option.
    ///
    /// Verification is exhaustive: every missing key is reported, in key
    /// order, before giving up.
    pub fn verify(&self) -> Result<VerifiedOptions, Vec<LoadError>> {
        let mut errors = self.missing(&OptionKey::ALL);
        let table = self.check_table_name(&mut errors);
        match (errors.is_empty(), table) {
            (true, Some(table)) => Ok(VerifiedOptions {
                source: SourceOptions {
                    csv_path: PathBuf::from(self.value(OptionKey::CsvFile)),
                    table,
                },
                connection: ConnectionSettings {
                    host: self.value(OptionKey::DbHost).to_string(),
                    username: self.value(OptionKey::DbUsername).to_string(),
                    password: self.value(OptionKey::DbPassword).to_string(),
                    database: self.value(OptionKey::DbName).to_string(),
                },
            }),
            _ => Err(errors),
        }
    }

    /// Verifies only the options needed to read the source and name the table.
    pub fn verify_source(&self) -> Result<SourceOptions, Vec<LoadError>> {
        let mut errors = self.missing(&OptionKey::SOURCE);
        let table = self.check_table_name(&mut errors);
        match (errors.is_empty(), table) {
            (true, Some(table)) => Ok(SourceOptions {
                csv_path: PathBuf::from(self.value(OptionKey::CsvFile)),
                table,
            }),
            _ => Err(errors),
        }
    }

    fn missing(&self, keys: &[OptionKey]) -> Vec<LoadError> {
        keys.iter()
            .filter(|key| self.get(**key).is_none())
            .map(|&key| LoadError::ConfigurationMissing { key })
            .collect()
    }

    fn check_table_name(&self, errors: &mut Vec<LoadError>) -> Option<TableName> {
        let raw = self.get(OptionKey::TableName)?;
        match TableName::parse(raw) {
            Ok(table) => Some(table),
            Err(error) => {
                errors.push(error);
                None
            }
        }
    }

    fn value(&self, key: OptionKey) -> &str {
        self.get(key).unwrap_or_default()
    }
}

/// Where the rows come from and where they go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    pub csv_path: PathBuf,
    pub table: TableName,
}

/// Database connection parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Host name, optionally followed by `:port`.
    pub host: String,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl ConnectionSettings {
    /// Splits `host` into a host name and an optional port.
    pub fn host_and_port(&self) -> (&str, Option<u16>) {
        match self.host.rsplit_once(':') {
            Some((host, port)) => match port.parse::<u16>() {
                Ok(port) => (host, Some(port)),
                Err(_) => (self.host.as_str(), None),
            },
            None => (self.host.as_str(), None),
        }
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .finish()
    }
}

/// Options that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedOptions {
    pub source: SourceOptions,
    pub connection: ConnectionSettings,
}
