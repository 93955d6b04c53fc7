//! Reading and writing `apptainer.conf` on disk.
//!
//! Responsibilities:
//! - Resolve the configuration file location (override, environment, default).
//! - Load a file through the codec, attaching the path to every failure.
//! - Save a configuration, or any rendered output, atomically (temp file in
//!   the target directory + rename).
//!
//! Does NOT handle:
//! - The text format itself (see `codec`).
//! - Installing the loaded value for the process (see `registry`).
//!
//! Invariants:
//! - Empty or whitespace-only overrides and environment values are treated as unset.
//! - A save never leaves a partially written file at the target path.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::codec::{self, Parsed};
use crate::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::error::ConfigFileError;
use crate::types::ApptainerConf;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Resolve the configuration file location.
///
/// Precedence: `override_path`, then `APPTAINER_CONF`, then
/// [`DEFAULT_CONFIG_PATH`].
pub fn config_path(override_path: Option<&str>) -> PathBuf {
    override_path
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .or_else(|| env_var_or_none(CONFIG_PATH_ENV))
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Read and parse the configuration file at `path`.
///
/// # Errors
///
/// Returns [`ConfigFileError::Read`] if the file cannot be read and
/// [`ConfigFileError::Parse`] if its contents are rejected by the parser.
pub fn load_file(path: &Path) -> Result<Parsed, ConfigFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = codec::parse(&text).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        unknown_directives = parsed.warnings.len(),
        "Loaded configuration file"
    );
    Ok(parsed)
}

/// Like [`load_file`], but a missing file yields the catalog defaults.
///
/// # Errors
///
/// Any failure other than the file not existing is returned unchanged.
pub fn load_or_default(path: &Path) -> Result<Parsed, ConfigFileError> {
    match load_file(path) {
        Err(ConfigFileError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            tracing::warn!(
                path = %path.display(),
                "Configuration file not found; using built-in defaults"
            );
            Ok(Parsed {
                config: ApptainerConf::default(),
                warnings: Vec::new(),
            })
        }
        other => other,
    }
}

/// Render `conf` and write it to `path` atomically.
///
/// # Errors
///
/// Returns [`ConfigFileError::Write`] if any step of the write fails.
pub fn save_file(path: &Path, conf: &ApptainerConf) -> Result<(), ConfigFileError> {
    write_atomic(path, &codec::render(conf))?;
    tracing::debug!(path = %path.display(), "Configuration saved");
    Ok(())
}

/// Write `contents` to `path` atomically.
///
/// The parent directory is created if missing. The text goes to a temporary
/// file in the same directory, which is then renamed over `path`.
///
/// # Errors
///
/// Returns [`ConfigFileError::Write`] if any step of the write fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigFileError> {
    let write_error = |source: std::io::Error| ConfigFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_error)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
    temp.write_all(contents.as_bytes()).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "File written atomically");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_config_path_prefers_override() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/srv/env.conf"), || {
            assert_eq!(
                config_path(Some("/srv/flag.conf")),
                PathBuf::from("/srv/flag.conf")
            );
        });
    }

    #[test]
    #[serial]
    fn test_config_path_uses_env_then_default() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("  /srv/env.conf "), || {
            assert_eq!(config_path(None), PathBuf::from("/srv/env.conf"));
        });
        temp_env::with_var(CONFIG_PATH_ENV, Some("   "), || {
            assert_eq!(config_path(Some("")), PathBuf::from(DEFAULT_CONFIG_PATH));
        });
        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            assert_eq!(config_path(None), PathBuf::from(DEFAULT_CONFIG_PATH));
        });
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let parsed = load_or_default(&dir.path().join("absent.conf")).unwrap();
        assert_eq!(parsed.config, ApptainerConf::default());
    }

    #[test]
    fn test_load_file_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_file(&dir.path().join("absent.conf")).unwrap_err();
        assert!(matches!(err, ConfigFileError::Read { .. }));
    }

    #[test]
    fn test_save_creates_parent_and_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("etc").join("apptainer.conf");
        save_file(&path, &ApptainerConf::default()).unwrap();

        let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("apptainer.conf")]);
    }
}
