//! The configuration value and typed field views.
//!
//! Responsibilities:
//! - Define `ApptainerConf`, the flat record holding every option.
//! - Define `FieldView` / `Slot`, the read and write views the catalog hands
//!   out so that codec code never names a field directly.
//! - Build the default value from the schema catalog.
//!
//! Does NOT handle:
//! - Option metadata (directive names, defaults, styles; see `schema`).
//! - Text conversion (see `codec`).
//!
//! Invariants:
//! - `ApptainerConf::default()` is produced by applying every catalog default,
//!   so defaults are declared in exactly one place.
//! - An empty string or list means "unset / feature disabled".

use serde::Serialize;

use crate::choice::{Choice, EnableOverlay, MemoryFsType, MountDev, RootCapabilities};
use crate::schema::CATALOG;

/// The `apptainer.conf` options.
///
/// Field order follows the catalog; see [`crate::schema::CATALOG`] for the
/// directive name and default of each field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApptainerConf {
    pub allow_setuid: bool,
    pub max_loop_devices: u64,
    pub allow_pid_ns: bool,
    pub config_passwd: bool,
    pub config_group: bool,
    pub config_resolv_conf: bool,
    pub mount_proc: bool,
    pub mount_sys: bool,
    pub mount_dev: MountDev,
    pub mount_devpts: bool,
    pub mount_home: bool,
    pub mount_tmp: bool,
    pub mount_hostfs: bool,
    pub bind_path: Vec<String>,
    pub user_bind_control: bool,
    pub enable_fusemount: bool,
    pub enable_overlay: EnableOverlay,
    pub enable_underlay: bool,
    pub mount_slave: bool,
    pub sessiondir_max_size: u64,
    pub limit_container_owners: Vec<String>,
    pub limit_container_groups: Vec<String>,
    pub limit_container_paths: Vec<String>,
    pub allow_container_sif: bool,
    pub allow_container_encrypted: bool,
    pub allow_container_squashfs: bool,
    pub allow_container_extfs: bool,
    pub allow_container_dir: bool,
    pub allow_net_users: Vec<String>,
    pub allow_net_groups: Vec<String>,
    pub allow_net_networks: Vec<String>,
    pub always_use_nv: bool,
    pub use_nvidia_container_cli: bool,
    pub always_use_rocm: bool,
    pub root_default_capabilities: RootCapabilities,
    pub memory_fs_type: MemoryFsType,
    pub cni_conf_path: String,
    pub cni_plugin_path: String,
    pub binary_path: String,
    pub cryptsetup_path: String,
    pub go_path: String,
    pub ldconfig_path: String,
    pub mksquashfs_path: String,
    pub mksquashfs_procs: u64,
    pub mksquashfs_mem: String,
    pub nvidia_container_cli_path: String,
    pub unsquashfs_path: String,
    pub shared_loop_devices: bool,
    pub image_driver: String,
    pub download_concurrency: u64,
    pub download_part_size: u64,
    pub download_buffer_size: u64,
    pub systemd_cgroups: bool,
}

impl Default for ApptainerConf {
    fn default() -> Self {
        let mut conf = Self::zeroed();
        for spec in CATALOG {
            spec.apply_default(&mut conf);
        }
        conf
    }
}

impl ApptainerConf {
    /// Every field at its type's zero value, before catalog defaults apply.
    fn zeroed() -> Self {
        Self {
            allow_setuid: false,
            max_loop_devices: 0,
            allow_pid_ns: false,
            config_passwd: false,
            config_group: false,
            config_resolv_conf: false,
            mount_proc: false,
            mount_sys: false,
            mount_dev: MountDev::default(),
            mount_devpts: false,
            mount_home: false,
            mount_tmp: false,
            mount_hostfs: false,
            bind_path: Vec::new(),
            user_bind_control: false,
            enable_fusemount: false,
            enable_overlay: EnableOverlay::default(),
            enable_underlay: false,
            mount_slave: false,
            sessiondir_max_size: 0,
            limit_container_owners: Vec::new(),
            limit_container_groups: Vec::new(),
            limit_container_paths: Vec::new(),
            allow_container_sif: false,
            allow_container_encrypted: false,
            allow_container_squashfs: false,
            allow_container_extfs: false,
            allow_container_dir: false,
            allow_net_users: Vec::new(),
            allow_net_groups: Vec::new(),
            allow_net_networks: Vec::new(),
            always_use_nv: false,
            use_nvidia_container_cli: false,
            always_use_rocm: false,
            root_default_capabilities: RootCapabilities::default(),
            memory_fs_type: MemoryFsType::default(),
            cni_conf_path: String::new(),
            cni_plugin_path: String::new(),
            binary_path: String::new(),
            cryptsetup_path: String::new(),
            go_path: String::new(),
            ldconfig_path: String::new(),
            mksquashfs_path: String::new(),
            mksquashfs_procs: 0,
            mksquashfs_mem: String::new(),
            nvidia_container_cli_path: String::new(),
            unsquashfs_path: String::new(),
            shared_loop_devices: false,
            image_driver: String::new(),
            download_concurrency: 0,
            download_part_size: 0,
            download_buffer_size: 0,
            systemd_cgroups: false,
        }
    }
}

/// Read-only view of one option's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldView<'a> {
    Bool(bool),
    Uint(u64),
    Choice(&'static str),
    Text(&'a str),
    List(&'a [String]),
}

/// Mutable access to one option's storage.
pub enum Slot<'a> {
    Bool(&'a mut bool),
    Uint(&'a mut u64),
    Choice(&'a mut dyn Choice),
    Text(&'a mut String),
    List(&'a mut Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_BINARY_PATH, DEFAULT_DOWNLOAD_PART_SIZE};

    #[test]
    fn test_default_applies_catalog_defaults() {
        let conf = ApptainerConf::default();
        assert!(conf.allow_setuid);
        assert!(!conf.mount_hostfs);
        assert_eq!(conf.max_loop_devices, 256);
        assert_eq!(conf.sessiondir_max_size, 16);
        assert_eq!(conf.mount_dev, MountDev::Yes);
        assert_eq!(conf.enable_overlay, EnableOverlay::Try);
        assert_eq!(conf.root_default_capabilities, RootCapabilities::Full);
        assert_eq!(conf.memory_fs_type, MemoryFsType::Tmpfs);
        assert_eq!(conf.bind_path, vec!["/etc/localtime", "/etc/hosts"]);
        assert_eq!(conf.binary_path, DEFAULT_BINARY_PATH);
        assert_eq!(conf.download_concurrency, 3);
        assert_eq!(conf.download_part_size, DEFAULT_DOWNLOAD_PART_SIZE);
        assert_eq!(conf.download_buffer_size, 32768);
        assert_eq!(conf.mksquashfs_procs, 0);
        assert!(conf.systemd_cgroups);
    }

    #[test]
    fn test_default_leaves_undeclared_options_empty() {
        let conf = ApptainerConf::default();
        assert!(conf.image_driver.is_empty());
        assert!(conf.mksquashfs_mem.is_empty());
        assert!(conf.cni_conf_path.is_empty());
        assert!(conf.limit_container_owners.is_empty());
        assert!(conf.allow_net_networks.is_empty());
    }
}
