//! Holder of the process's current configuration.
//!
//! Responsibilities:
//! - Own the single configuration instance installed at startup.
//! - Report the "nothing installed" state explicitly.
//! - Perform the one-time `$PATH:` substitution in `binary path`.
//!
//! Does NOT handle:
//! - Loading or parsing files (see `persistence` and `codec`).
//! - Build-context reduction (see `context`).
//!
//! Invariants:
//! - The registry is created and filled by the composition root and handed to
//!   consumers by reference; there is no global instance.
//! - No locking: mutation needs `&mut Registry`, so installation and path
//!   resolution must finish before the registry is shared.
//! - Only the first `$PATH:` token is ever replaced.

use crate::constants::PATH_TOKEN;
use crate::types::ApptainerConf;

/// The process-wide configuration context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    current: Option<ApptainerConf>,
}

impl Registry {
    /// Create a registry with no configuration installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `conf` as the current configuration, replacing any previous one.
    pub fn set_current(&mut self, conf: ApptainerConf) {
        if self.current.is_some() {
            tracing::debug!("Replacing the installed configuration");
        }
        self.current = Some(conf);
    }

    /// The installed configuration, or `None` if none was ever installed.
    pub fn current(&self) -> Option<&ApptainerConf> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut ApptainerConf> {
        self.current.as_mut()
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// Remove and return the installed configuration.
    pub fn take(&mut self) -> Option<ApptainerConf> {
        self.current.take()
    }

    /// Substitute the caller's `PATH` for `$PATH:` in the installed `binary path`.
    ///
    /// With `include_user_path` false the token is removed. With it true the
    /// token is replaced by the inherited `PATH` followed by `:`, or removed if
    /// `PATH` is empty or unset. A `PATH` that is not valid Unicode is used
    /// with its invalid bytes replaced, and a warning is logged.
    ///
    /// # Panics
    ///
    /// Panics if no configuration is installed: resolving the binary path
    /// before [`Registry::set_current`] is a startup-ordering bug.
    pub fn set_binary_path(&mut self, include_user_path: bool) {
        let user_path = if include_user_path {
            user_search_path()
        } else {
            None
        };

        let Some(conf) = self.current.as_mut() else {
            tracing::error!("Binary path resolved before a configuration was installed");
            panic!("Registry::set_current() must be called before Registry::set_binary_path()");
        };
        substitute_binary_path(conf, user_path.as_deref());
    }
}

/// The inherited `PATH`, lossily converted if it is not valid Unicode.
fn user_search_path() -> Option<String> {
    let raw = std::env::var_os("PATH")?;
    match raw.into_string() {
        Ok(path) => Some(path),
        Err(raw) => {
            let lossy = raw.to_string_lossy().into_owned();
            tracing::warn!(path = %lossy, "PATH is not valid Unicode; invalid bytes replaced");
            Some(lossy)
        }
    }
}

/// Replace the first `$PATH:` in `conf.binary_path`.
///
/// A non-empty `user_path` is substituted followed by `:`; `None` or an empty
/// string removes the token. Calling this again is a no-op once the token is gone.
pub fn substitute_binary_path(conf: &mut ApptainerConf, user_path: Option<&str>) {
    let replacement = match user_path {
        Some(path) if !path.is_empty() => format!("{path}:"),
        _ => String::new(),
    };
    conf.binary_path = conf.binary_path.replacen(PATH_TOKEN, &replacement, 1);
    tracing::debug!(binary_path = %conf.binary_path, "Setting binary path");
}
