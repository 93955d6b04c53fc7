//! Schema catalog for `apptainer.conf`.
//!
//! Responsibilities:
//! - Declare every option once: field, directive name, kind, default,
//!   authorized set, list style, emission rule and operator commentary.
//! - Hand out typed read/write access to the field an entry describes.
//!
//! Does NOT handle:
//! - Text generation or parsing (see `codec`), which iterate this table.
//!
//! Invariants:
//! - Directive names are unique and matched exactly (case-sensitive).
//! - A declared default is always a member of the option's authorized set.
//! - A list option's serialization style never changes at runtime.
//! - Catalog order is the canonical file order.

use std::fmt;

use crate::choice::{EnableOverlay, MemoryFsType, MountDev, RootCapabilities};
use crate::constants::{
    BOOL_VALUES, DEFAULT_BIND_PATHS, DEFAULT_BINARY_PATH, DEFAULT_DOWNLOAD_BUFFER_SIZE,
    DEFAULT_DOWNLOAD_CONCURRENCY, DEFAULT_DOWNLOAD_PART_SIZE, DEFAULT_MAX_LOOP_DEVICES,
    DEFAULT_MKSQUASHFS_PROCS, DEFAULT_SESSIONDIR_MAX_SIZE, JOINED_LIST_SEPARATOR, NO, YES,
};
use crate::template;
use crate::types::{ApptainerConf, FieldView, Slot};

/// Serialization style of a list option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// One `directive = value` line per element.
    Repeated,
    /// A single `directive = v1, v2, ...` line.
    Joined,
}

/// Semantic type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Uint,
    /// Enumerated string restricted to the given set.
    Choice(&'static [&'static str]),
    /// Free-form scalar string or path.
    Text,
    List(ListStyle),
}

impl Kind {
    /// Short name used in listings and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Uint => "uint",
            Kind::Choice(_) => "enum",
            Kind::Text => "string",
            Kind::List(_) => "list",
        }
    }

    /// The closed set of accepted tokens, if the kind has one.
    pub fn accepted(self) -> Option<&'static [&'static str]> {
        match self {
            Kind::Bool => Some(BOOL_VALUES),
            Kind::Choice(values) => Some(values),
            Kind::Uint | Kind::Text | Kind::List(_) => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a directive line is written when the value is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Always written.
    Always,
    /// Written only for a non-empty value.
    WhenSet,
}

/// Declared default of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    Uint(u64),
    Choice(&'static str),
    Text(&'static str),
    List(&'static [&'static str]),
    /// No default: the option stays empty unless the file sets it.
    Unset,
}

impl DefaultValue {
    /// The default as it would appear in the file, or `None` when unset.
    pub fn to_text(self) -> Option<String> {
        match self {
            DefaultValue::Bool(true) => Some(YES.to_string()),
            DefaultValue::Bool(false) => Some(NO.to_string()),
            DefaultValue::Uint(n) => Some(n.to_string()),
            DefaultValue::Choice(token) | DefaultValue::Text(token) => Some(token.to_string()),
            DefaultValue::List(items) => Some(items.join(JOINED_LIST_SEPARATOR)),
            DefaultValue::Unset => None,
        }
    }
}

/// Descriptor of one configuration option.
pub struct OptionSpec {
    /// Name of the `ApptainerConf` field.
    pub field: &'static str,
    /// External directive name, as written in the file.
    pub directive: &'static str,
    pub kind: Kind,
    pub default: DefaultValue,
    pub emission: Emission,
    /// Commentary rendered before the directive.
    pub doc: &'static str,
    view: fn(&ApptainerConf) -> FieldView<'_>,
    slot: fn(&mut ApptainerConf) -> Slot<'_>,
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("field", &self.field)
            .field("directive", &self.directive)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .field("emission", &self.emission)
            .finish_non_exhaustive()
    }
}

impl OptionSpec {
    /// Current value of this option in `conf`.
    pub fn view<'a>(&self, conf: &'a ApptainerConf) -> FieldView<'a> {
        (self.view)(conf)
    }

    /// Mutable storage of this option in `conf`.
    pub fn slot<'a>(&self, conf: &'a mut ApptainerConf) -> Slot<'a> {
        (self.slot)(conf)
    }

    pub fn accepted(&self) -> Option<&'static [&'static str]> {
        self.kind.accepted()
    }

    pub fn list_style(&self) -> Option<ListStyle> {
        match self.kind {
            Kind::List(style) => Some(style),
            _ => None,
        }
    }

    /// Reset this option in `conf` to its declared default.
    pub fn apply_default(&self, conf: &mut ApptainerConf) {
        match (self.slot(conf), self.default) {
            (Slot::Bool(value), DefaultValue::Bool(default)) => *value = default,
            (Slot::Uint(value), DefaultValue::Uint(default)) => *value = default,
            (Slot::Choice(value), DefaultValue::Choice(token)) => {
                if let Err(e) = value.assign(token) {
                    tracing::error!(
                        directive = self.directive,
                        error = %e,
                        "Catalog default rejected by its own authorized set"
                    );
                }
            }
            (Slot::Text(value), DefaultValue::Text(default)) => *value = default.to_string(),
            (Slot::Text(value), DefaultValue::Unset) => value.clear(),
            (Slot::List(value), DefaultValue::List(default)) => {
                *value = default.iter().map(|s| s.to_string()).collect();
            }
            (Slot::List(value), DefaultValue::Unset) => value.clear(),
            (_, default) => {
                tracing::error!(
                    directive = self.directive,
                    ?default,
                    "Catalog default does not match the option kind"
                );
            }
        }
    }
}

/// Find the catalog entry for an exact directive name.
pub fn lookup(directive: &str) -> Option<&'static OptionSpec> {
    CATALOG.iter().find(|spec| spec.directive == directive)
}

/// Builds one `OptionSpec` with its field accessors.
///
/// # Usage
/// ```ignore
/// option!(allow_setuid, "allow setuid", template::ALLOW_SETUID, Bool(true))
/// option!(mount_dev, "mount dev", template::MOUNT_DEV, Choice(MountDev::Yes))
/// option!(bind_path, "bind path", template::BIND_PATH, Repeated(DEFAULT_BIND_PATHS))
/// option!(image_driver, "image driver", template::IMAGE_DRIVER, Text)
/// ```
macro_rules! option {
    (
        @spec $field:ident, $directive:literal, $doc:expr, $kind:expr, $default:expr, $emission:expr,
        |$c:ident| $view:expr, |$m:ident| $slot:expr
    ) => {
        OptionSpec {
            field: stringify!($field),
            directive: $directive,
            kind: $kind,
            default: $default,
            emission: $emission,
            doc: $doc,
            view: {
                fn view($c: &ApptainerConf) -> FieldView<'_> {
                    $view
                }
                view
            },
            slot: {
                fn slot($m: &mut ApptainerConf) -> Slot<'_> {
                    $slot
                }
                slot
            },
        }
    };
    ($field:ident, $directive:literal, $doc:expr, Bool($default:expr)) => {
        option!(@spec $field, $directive, $doc, Kind::Bool, DefaultValue::Bool($default),
            Emission::Always, |c| FieldView::Bool(c.$field), |c| Slot::Bool(&mut c.$field))
    };
    ($field:ident, $directive:literal, $doc:expr, Uint($default:expr)) => {
        option!(@spec $field, $directive, $doc, Kind::Uint, DefaultValue::Uint($default),
            Emission::Always, |c| FieldView::Uint(c.$field), |c| Slot::Uint(&mut c.$field))
    };
    ($field:ident, $directive:literal, $doc:expr, Choice($ty:ident :: $variant:ident)) => {
        option!(@spec $field, $directive, $doc, Kind::Choice($ty::VALUES),
            DefaultValue::Choice($ty::$variant.as_str()), Emission::Always,
            |c| FieldView::Choice(c.$field.as_str()), |c| Slot::Choice(&mut c.$field))
    };
    ($field:ident, $directive:literal, $doc:expr, Text) => {
        option!(@spec $field, $directive, $doc, Kind::Text, DefaultValue::Unset,
            Emission::WhenSet, |c| FieldView::Text(&c.$field), |c| Slot::Text(&mut c.$field))
    };
    ($field:ident, $directive:literal, $doc:expr, Text($default:expr)) => {
        option!(@spec $field, $directive, $doc, Kind::Text, DefaultValue::Text($default),
            Emission::WhenSet, |c| FieldView::Text(&c.$field), |c| Slot::Text(&mut c.$field))
    };
    ($field:ident, $directive:literal, $doc:expr, Repeated($default:expr)) => {
        option!(@spec $field, $directive, $doc, Kind::List(ListStyle::Repeated),
            DefaultValue::List($default), Emission::WhenSet,
            |c| FieldView::List(&c.$field), |c| Slot::List(&mut c.$field))
    };
    ($field:ident, $directive:literal, $doc:expr, Joined) => {
        option!(@spec $field, $directive, $doc, Kind::List(ListStyle::Joined),
            DefaultValue::Unset, Emission::WhenSet,
            |c| FieldView::List(&c.$field), |c| Slot::List(&mut c.$field))
    };
}

/// Every option, in canonical file order.
#[rustfmt::skip]
pub static CATALOG: &[OptionSpec] = &[
    option!(allow_setuid, "allow setuid", template::ALLOW_SETUID, Bool(true)),
    option!(max_loop_devices, "max loop devices", template::MAX_LOOP_DEVICES, Uint(DEFAULT_MAX_LOOP_DEVICES)),
    option!(allow_pid_ns, "allow pid ns", template::ALLOW_PID_NS, Bool(true)),
    option!(config_passwd, "config passwd", template::CONFIG_PASSWD, Bool(true)),
    option!(config_group, "config group", template::CONFIG_GROUP, Bool(true)),
    option!(config_resolv_conf, "config resolv_conf", template::CONFIG_RESOLV_CONF, Bool(true)),
    option!(mount_proc, "mount proc", template::MOUNT_PROC, Bool(true)),
    option!(mount_sys, "mount sys", template::MOUNT_SYS, Bool(true)),
    option!(mount_dev, "mount dev", template::MOUNT_DEV, Choice(MountDev::Yes)),
    option!(mount_devpts, "mount devpts", template::MOUNT_DEVPTS, Bool(true)),
    option!(mount_home, "mount home", template::MOUNT_HOME, Bool(true)),
    option!(mount_tmp, "mount tmp", template::MOUNT_TMP, Bool(true)),
    option!(mount_hostfs, "mount hostfs", template::MOUNT_HOSTFS, Bool(false)),
    option!(bind_path, "bind path", template::BIND_PATH, Repeated(DEFAULT_BIND_PATHS)),
    option!(user_bind_control, "user bind control", template::USER_BIND_CONTROL, Bool(true)),
    option!(enable_fusemount, "enable fusemount", template::ENABLE_FUSEMOUNT, Bool(true)),
    option!(enable_overlay, "enable overlay", template::ENABLE_OVERLAY, Choice(EnableOverlay::Try)),
    option!(enable_underlay, "enable underlay", template::ENABLE_UNDERLAY, Bool(true)),
    option!(mount_slave, "mount slave", template::MOUNT_SLAVE, Bool(true)),
    option!(sessiondir_max_size, "sessiondir max size", template::SESSIONDIR_MAX_SIZE, Uint(DEFAULT_SESSIONDIR_MAX_SIZE)),
    option!(limit_container_owners, "limit container owners", template::LIMIT_CONTAINER_OWNERS, Joined),
    option!(limit_container_groups, "limit container groups", template::LIMIT_CONTAINER_GROUPS, Joined),
    option!(limit_container_paths, "limit container paths", template::LIMIT_CONTAINER_PATHS, Joined),
    option!(allow_container_sif, "allow container sif", template::ALLOW_CONTAINER_SIF, Bool(true)),
    option!(allow_container_encrypted, "allow container encrypted", template::ALLOW_CONTAINER_ENCRYPTED, Bool(true)),
    option!(allow_container_squashfs, "allow container squashfs", template::ALLOW_CONTAINER_SQUASHFS, Bool(true)),
    option!(allow_container_extfs, "allow container extfs", "", Bool(true)),
    option!(allow_container_dir, "allow container dir", "", Bool(true)),
    option!(allow_net_users, "allow net users", template::ALLOW_NET_USERS, Joined),
    option!(allow_net_groups, "allow net groups", template::ALLOW_NET_GROUPS, Joined),
    option!(allow_net_networks, "allow net networks", template::ALLOW_NET_NETWORKS, Joined),
    option!(always_use_nv, "always use nv", template::ALWAYS_USE_NV, Bool(false)),
    option!(use_nvidia_container_cli, "use nvidia-container-cli", template::USE_NVIDIA_CONTAINER_CLI, Bool(false)),
    option!(always_use_rocm, "always use rocm", template::ALWAYS_USE_ROCM, Bool(false)),
    option!(root_default_capabilities, "root default capabilities", template::ROOT_DEFAULT_CAPABILITIES, Choice(RootCapabilities::Full)),
    option!(memory_fs_type, "memory fs type", template::MEMORY_FS_TYPE, Choice(MemoryFsType::Tmpfs)),
    option!(cni_conf_path, "cni configuration path", template::CNI_CONFIGURATION_PATH, Text),
    option!(cni_plugin_path, "cni plugin path", template::CNI_PLUGIN_PATH, Text),
    option!(binary_path, "binary path", template::BINARY_PATH, Text(DEFAULT_BINARY_PATH)),
    option!(cryptsetup_path, "cryptsetup path", template::CRYPTSETUP_PATH, Text),
    option!(go_path, "go path", template::GO_PATH, Text),
    option!(ldconfig_path, "ldconfig path", template::LDCONFIG_PATH, Text),
    option!(mksquashfs_path, "mksquashfs path", template::MKSQUASHFS_PATH, Text),
    option!(mksquashfs_procs, "mksquashfs procs", template::MKSQUASHFS_PROCS, Uint(DEFAULT_MKSQUASHFS_PROCS)),
    option!(mksquashfs_mem, "mksquashfs mem", template::MKSQUASHFS_MEM, Text),
    option!(nvidia_container_cli_path, "nvidia-container-cli path", template::NVIDIA_CONTAINER_CLI_PATH, Text),
    option!(unsquashfs_path, "unsquashfs path", template::UNSQUASHFS_PATH, Text),
    option!(shared_loop_devices, "shared loop devices", template::SHARED_LOOP_DEVICES, Bool(false)),
    option!(image_driver, "image driver", template::IMAGE_DRIVER, Text),
    option!(download_concurrency, "download concurrency", template::DOWNLOAD_CONCURRENCY, Uint(DEFAULT_DOWNLOAD_CONCURRENCY)),
    option!(download_part_size, "download part size", template::DOWNLOAD_PART_SIZE, Uint(DEFAULT_DOWNLOAD_PART_SIZE)),
    option!(download_buffer_size, "download buffer size", template::DOWNLOAD_BUFFER_SIZE, Uint(DEFAULT_DOWNLOAD_BUFFER_SIZE)),
    option!(systemd_cgroups, "systemd cgroups", template::SYSTEMD_CGROUPS, Bool(true)),
];
