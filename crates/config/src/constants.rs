//! Centralized constants for the apptainer.conf workspace.
//!
//! This module contains the textual defaults used by the schema catalog and
//! the fixed strings shared by the codec, the registry and the tooling.

// =============================================================================
// File Location
// =============================================================================

/// Default location of the global configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/usr/local/etc/apptainer/apptainer.conf";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "APPTAINER_CONF";

// =============================================================================
// Canonical Text Grammar
// =============================================================================

/// Separator between a directive name and its value.
pub const DIRECTIVE_SEPARATOR: char = '=';

/// Prefix of a comment line.
pub const COMMENT_PREFIX: char = '#';

/// Separator between elements of a joined-line list.
pub const JOINED_LIST_SEPARATOR: &str = ", ";

/// Literal boolean tokens.
pub const YES: &str = "yes";
pub const NO: &str = "no";

/// Authorized set shared by every boolean directive.
pub const BOOL_VALUES: &[&str] = &[YES, NO];

// =============================================================================
// Binary Path
// =============================================================================

/// Token replaced by the caller's search path, once, at startup.
pub const PATH_TOKEN: &str = "$PATH:";

/// Default binary search path template.
pub const DEFAULT_BINARY_PATH: &str =
    "$PATH:/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin";

// =============================================================================
// Numeric Defaults
// =============================================================================

/// Default maximum number of loop devices.
pub const DEFAULT_MAX_LOOP_DEVICES: u64 = 256;

/// Default session directory size in MB.
pub const DEFAULT_SESSIONDIR_MAX_SIZE: u64 = 16;

/// Default mksquashfs processor count (0 means all CPUs).
pub const DEFAULT_MKSQUASHFS_PROCS: u64 = 0;

/// Default number of concurrent download streams.
pub const DEFAULT_DOWNLOAD_CONCURRENCY: u64 = 3;

/// Default size of each download part in bytes (5 MiB).
pub const DEFAULT_DOWNLOAD_PART_SIZE: u64 = 5_242_880;

/// Default transfer buffer size in bytes (32 KiB).
pub const DEFAULT_DOWNLOAD_BUFFER_SIZE: u64 = 32_768;

// =============================================================================
// List Defaults
// =============================================================================

/// Default `bind path` entries.
pub const DEFAULT_BIND_PATHS: &[&str] = &["/etc/localtime", "/etc/hosts"];
