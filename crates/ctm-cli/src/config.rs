//! Loader options from a TOML file, layered under the command-line flags.
//!
//! The file uses the same six keys as the flags:
//!
//! ```toml
//! csvfile = "people.csv"
//! dbhost = "localhost:3306"
//! dbusername = "loader"
//! dbpassword = "secret"
//! dbname = "staging"
//! mysqltablename = "people"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ctm_model::LoaderOptions;
use tracing::debug;

/// Parses a TOML options file. Unknown keys are rejected.
pub fn load_options_file(path: &Path) -> Result<LoaderOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let options: LoaderOptions = toml::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    debug!(path = %path.display(), "loaded config file");
    Ok(options)
}

/// Combines the optional config file with the flags; flags win key by key.
pub fn resolve_options(file: Option<&Path>, flags: &LoaderOptions) -> Result<LoaderOptions> {
    let base = match file {
        Some(path) => load_options_file(path)?,
        None => LoaderOptions::default(),
    };
    Ok(base.overlay(flags))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn create_temp_toml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn flags_override_file_values() {
        let file = create_temp_toml(
            "csvfile = \"from-file.csv\"\ndbhost = \"localhost\"\nmysqltablename = \"t\"\n",
        );
        let flags = LoaderOptions {
            csvfile: Some("from-flag.csv".to_string()),
            dbhost: Some(String::new()),
            ..LoaderOptions::default()
        };

        let options = resolve_options(Some(file.path()), &flags).unwrap();

        assert_eq!(options.csvfile.as_deref(), Some("from-flag.csv"));
        assert_eq!(options.dbhost.as_deref(), Some("localhost"));
        assert_eq!(options.mysqltablename.as_deref(), Some("t"));
        assert_eq!(options.dbname, None);
    }

    #[test]
    fn no_file_means_flags_only() {
        let flags = LoaderOptions {
            dbname: Some("staging".to_string()),
            ..LoaderOptions::default()
        };
        assert_eq!(resolve_options(None, &flags).unwrap(), flags);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = create_temp_toml("database = \"staging\"\n");
        let err = load_options_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config file"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_options_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }
}
