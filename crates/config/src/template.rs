//! Static operator commentary for the canonical configuration file.
//!
//! Every block is rendered verbatim immediately before the directive it
//! documents. A block starting with a newline is separated from the previous
//! directive by a blank line; blocks without one continue the previous group.
//! None of this text has parsing significance: every line starts with `#`.

pub(crate) const PREAMBLE: &str = r#"# APPTAINER.CONF
# This is the global configuration file for Apptainer. This file controls
# what the container is allowed to do on a particular host, and as a result
# this file must be owned by root.
"#;

pub(crate) const ALLOW_SETUID: &str = r#"
# ALLOW SETUID: [BOOL]
# DEFAULT: yes
# Should we allow users to utilize the setuid program flow within Apptainer?
# note1: This is the default mode, and to utilize all features, this option
# must be enabled.  For example, without this option loop mounts of image
# files will not work; only sandbox image directories, which do not need loop
# mounts, will work (subject to note 2).
# note2: If this option is disabled, it will rely on unprivileged user
# namespaces which have not been integrated equally between different Linux
# distributions.
"#;

pub(crate) const MAX_LOOP_DEVICES: &str = r#"
# MAX LOOP DEVICES: [INT]
# DEFAULT: 256
# Set the maximum number of loop devices that Apptainer should ever attempt
# to utilize.
"#;

pub(crate) const ALLOW_PID_NS: &str = r#"
# ALLOW PID NS: [BOOL]
# DEFAULT: yes
# Should we allow users to request the PID namespace? Note that for some HPC
# resources, the PID namespace may confuse the resource manager and break how
# some MPI implementations utilize shared memory. (note, on some older
# systems, the PID namespace is always used)
"#;

pub(crate) const CONFIG_PASSWD: &str = r#"
# CONFIG PASSWD: [BOOL]
# DEFAULT: yes
# If /etc/passwd exists within the container, this will automatically append
# an entry for the calling user.
"#;

pub(crate) const CONFIG_GROUP: &str = r#"
# CONFIG GROUP: [BOOL]
# DEFAULT: yes
# If /etc/group exists within the container, this will automatically append
# group entries for the calling user.
"#;

pub(crate) const CONFIG_RESOLV_CONF: &str = r#"
# CONFIG RESOLV_CONF: [BOOL]
# DEFAULT: yes
# If there is a bind point within the container, use the host's
# /etc/resolv.conf.
"#;

pub(crate) const MOUNT_PROC: &str = r#"
# MOUNT PROC: [BOOL]
# DEFAULT: yes
# Should we automatically bind mount /proc within the container?
"#;

pub(crate) const MOUNT_SYS: &str = r#"
# MOUNT SYS: [BOOL]
# DEFAULT: yes
# Should we automatically bind mount /sys within the container?
"#;

pub(crate) const MOUNT_DEV: &str = r#"
# MOUNT DEV: [yes/no/minimal]
# DEFAULT: yes
# Should we automatically bind mount /dev within the container? If 'minimal'
# is chosen, then only 'null', 'zero', 'random', 'urandom', and 'shm' will
# be included (the same effect as the --contain options)
"#;

pub(crate) const MOUNT_DEVPTS: &str = r#"
# MOUNT DEVPTS: [BOOL]
# DEFAULT: yes
# Should we mount a new instance of devpts if there is a 'minimal'
# /dev, or -C is passed?  Note, this requires that your kernel was
# configured with CONFIG_DEVPTS_MULTIPLE_INSTANCES=y, or that you're
# running kernel 4.7 or newer.
"#;

pub(crate) const MOUNT_HOME: &str = r#"
# MOUNT HOME: [BOOL]
# DEFAULT: yes
# Should we automatically determine the calling user's home directory and
# attempt to mount it's base path into the container? If the --contain option
# is used, the home directory will be created within the session directory or
# can be overridden with the APPTAINER_HOME or APPTAINER_WORKDIR
# environment variables (or their corresponding command line options).
"#;

pub(crate) const MOUNT_TMP: &str = r#"
# MOUNT TMP: [BOOL]
# DEFAULT: yes
# Should we automatically bind mount /tmp and /var/tmp into the container? If
# the --contain option is used, both tmp locations will be created in the
# session directory or can be specified via the  APPTAINER_WORKDIR
# environment variable (or the --workingdir command line option).
"#;

pub(crate) const MOUNT_HOSTFS: &str = r#"
# MOUNT HOSTFS: [BOOL]
# DEFAULT: no
# Probe for all mounted file systems that are mounted on the host, and bind
# those into the container?
"#;

pub(crate) const BIND_PATH: &str = r#"
# BIND PATH: [STRING]
# DEFAULT: Undefined
# Define a list of files/directories that should be made available from within
# the container. The file or directory must exist within the container on
# which to attach to. you can specify a different source and destination
# path (respectively) with a colon; otherwise source and dest are the same.
# NOTE: these are ignored if apptainer is invoked with --contain except
# for /etc/hosts and /etc/localtime. When invoked with --contain and --net,
# /etc/hosts would contain a default generated content for localhost resolution.
#bind path = /etc/apptainer/default-nsswitch.conf:/etc/nsswitch.conf
#bind path = /opt
#bind path = /scratch
"#;

pub(crate) const USER_BIND_CONTROL: &str = r#"
# USER BIND CONTROL: [BOOL]
# DEFAULT: yes
# Allow users to influence and/or define bind points at runtime? This will allow
# users to specify bind points, scratch and tmp locations. (note: User bind
# control is only allowed if the host also supports PR_SET_NO_NEW_PRIVS)
"#;

pub(crate) const ENABLE_FUSEMOUNT: &str = r#"
# ENABLE FUSEMOUNT: [BOOL]
# DEFAULT: yes
# Allow users to mount fuse filesystems inside containers with the --fusemount
# command line option.
"#;

pub(crate) const ENABLE_OVERLAY: &str = r#"
# ENABLE OVERLAY: [yes/no/try/driver]
# DEFAULT: try
# Enabling this option will make it possible to specify bind paths to locations
# that do not currently exist within the container.  If 'try' is chosen,
# overlayfs will be tried but if it is unavailable it will be silently ignored.
# If 'driver' is chosen, overlayfs is handled by the image driver.
"#;

pub(crate) const ENABLE_UNDERLAY: &str = r#"
# ENABLE UNDERLAY: [yes/no]
# DEFAULT: yes
# Enabling this option will make it possible to specify bind paths to locations
# that do not currently exist within the container even if overlay is not
# working.  If overlay is available, it will be tried first.
"#;

pub(crate) const MOUNT_SLAVE: &str = r#"
# MOUNT SLAVE: [BOOL]
# DEFAULT: yes
# Should we automatically propagate file-system changes from the host?
# This should be set to 'yes' when autofs mounts in the system should
# show up in the container.
"#;

pub(crate) const SESSIONDIR_MAX_SIZE: &str = r#"
# SESSIONDIR MAXSIZE: [STRING]
# DEFAULT: 16
# This specifies how large the default sessiondir should be (in MB) and it will
# only affect users who use the "--contain" options and don't also specify a
# location to do default read/writes to (e.g. "--workdir" or "--home").
"#;

pub(crate) const LIMIT_CONTAINER_OWNERS: &str = r#"
# LIMIT CONTAINER OWNERS: [STRING]
# DEFAULT: NULL
# Only allow containers to be used that are owned by a given user. If this
# configuration is undefined (commented or set to NULL), all containers are
# allowed to be used. This feature only applies when Apptainer is running in
# SUID mode and the user is non-root.
#limit container owners = gmk, apptainer, nobody
"#;

pub(crate) const LIMIT_CONTAINER_GROUPS: &str = r#"
# LIMIT CONTAINER GROUPS: [STRING]
# DEFAULT: NULL
# Only allow containers to be used that are owned by a given group. If this
# configuration is undefined (commented or set to NULL), all containers are
# allowed to be used. This feature only applies when Apptainer is running in
# SUID mode and the user is non-root.
#limit container groups = group1, apptainer, nobody
"#;

pub(crate) const LIMIT_CONTAINER_PATHS: &str = r#"
# LIMIT CONTAINER PATHS: [STRING]
# DEFAULT: NULL
# Only allow containers to be used that are located within an allowed path
# prefix. If this configuration is undefined (commented or set to NULL),
# containers will be allowed to run from anywhere on the file system. This
# feature only applies when Apptainer is running in SUID mode and the user is
# non-root.
#limit container paths = /scratch, /tmp, /global
"#;

pub(crate) const ALLOW_CONTAINER_SIF: &str = r#"
# ALLOW CONTAINER ${TYPE}: [BOOL]
# DEFAULT: yes
# This feature limits what kind of containers that Apptainer will allow
# users to use (note this does not apply for root).
#
# Allow use of unencrypted SIF containers
"#;

pub(crate) const ALLOW_CONTAINER_ENCRYPTED: &str = r#"#
# Allow use of encrypted SIF containers
"#;

pub(crate) const ALLOW_CONTAINER_SQUASHFS: &str = r#"#
# Allow use of non-SIF image formats
"#;

pub(crate) const ALLOW_NET_USERS: &str = r#"
# ALLOW NET USERS: [STRING]
# DEFAULT: NULL
# Allow specified root administered CNI network configurations to be used by the
# specified list of users. By default only root may use CNI configuration,
# except in the case of a fakeroot execution where only 40_fakeroot.conflist
# is used. This feature only applies when Apptainer is running in
# SUID mode and the user is non-root.
#allow net users = gmk, apptainer
"#;

pub(crate) const ALLOW_NET_GROUPS: &str = r#"
# ALLOW NET GROUPS: [STRING]
# DEFAULT: NULL
# Allow specified root administered CNI network configurations to be used by the
# specified list of users. By default only root may use CNI configuration,
# except in the case of a fakeroot execution where only 40_fakeroot.conflist
# is used. This feature only applies when Apptainer is running in
# SUID mode and the user is non-root.
#allow net groups = group1, apptainer
"#;

pub(crate) const ALLOW_NET_NETWORKS: &str = r#"
# ALLOW NET NETWORKS: [STRING]
# DEFAULT: NULL
# Specify the names of CNI network configurations that may be used by users and
# groups listed in the allow net users / allow net groups directives. Thus feature
# only applies when Apptainer is running in SUID mode and the user is non-root.
#allow net networks = bridge
"#;

pub(crate) const ALWAYS_USE_NV: &str = r#"
# ALWAYS USE NV ${TYPE}: [BOOL]
# DEFAULT: no
# This feature allows an administrator to determine that every action command
# should be executed implicitly with the --nv option (useful for GPU only
# environments).
"#;

pub(crate) const USE_NVIDIA_CONTAINER_CLI: &str = r#"
# USE NVIDIA-NVIDIA-CONTAINER-CLI ${TYPE}: [BOOL]
# DEFAULT: no
# EXPERIMENTAL
# If set to yes, Apptainer will attempt to use nvidia-container-cli to setup
# GPUs within a container when the --nv flag is enabled.
# If no (default), the legacy binding of entries in nvbliblist.conf will be performed.
"#;

pub(crate) const ALWAYS_USE_ROCM: &str = r#"
# ALWAYS USE ROCM ${TYPE}: [BOOL]
# DEFAULT: no
# This feature allows an administrator to determine that every action command
# should be executed implicitly with the --rocm option (useful for GPU only
# environments).
"#;

pub(crate) const ROOT_DEFAULT_CAPABILITIES: &str = r#"
# ROOT DEFAULT CAPABILITIES: [full/file/no]
# DEFAULT: full
# Define default root capability set kept during runtime
# - full: keep all capabilities (same as --keep-privs)
# - file: keep capabilities configured in ${prefix}/etc/apptainer/capabilities/user.root
# - no: no capabilities (same as --no-privs)
"#;

pub(crate) const MEMORY_FS_TYPE: &str = r#"
# MEMORY FS TYPE: [tmpfs/ramfs]
# DEFAULT: tmpfs
# This feature allow to choose temporary filesystem type used by Apptainer.
# Cray CLE 5 and 6 up to CLE 6.0.UP05 there is an issue (kernel panic) when Apptainer
# use tmpfs, so on affected version it's recommended to set this value to ramfs to avoid
# kernel panic
"#;

pub(crate) const CNI_CONFIGURATION_PATH: &str = r#"
# CNI CONFIGURATION PATH: [STRING]
# DEFAULT: Undefined
# Defines path where CNI configuration files are stored
#cni configuration path =
"#;

pub(crate) const CNI_PLUGIN_PATH: &str = r#"
# CNI PLUGIN PATH: [STRING]
# DEFAULT: Undefined
# Defines path where CNI executable plugins are stored
#cni plugin path =
"#;

pub(crate) const BINARY_PATH: &str = r#"
# BINARY PATH: [STRING]
# DEFAULT: $PATH:/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin
# Colon-separated list of directories to search for many binaries.  May include
# "$PATH:", which will be replaced by the user's PATH only when not running the
# setuid program flow.
"#;

pub(crate) const CRYPTSETUP_PATH: &str = r#"
# CRYPTSETUP PATH: [STRING]
# DEFAULT: Undefined
# DEPRECATED
# Path to the cryptsetup executable, used to work with encrypted containers.
# Executable must be owned by root for security reasons.
# If not set, Apptainer will search the directories set in binary path.
# cryptsetup path =
"#;

pub(crate) const GO_PATH: &str = r#"
# GO PATH: [STRING]
# DEFAULT: Undefined
# DEPRECATED
# Path to the go executable, used to compile plugins.
# If not set, Apptainer will search the directories set in binary path.
# go path =
"#;

pub(crate) const LDCONFIG_PATH: &str = r#"
# LDCONFIG PATH: [STRING]
# DEFAULT: Undefined
# DEPRECATED
# Path to the ldconfig executable, used to find GPU libraries.
# When run as root, executable must be owned by root for security reasons.
# If not set, Apptainer will search the directories set in binary path.
# ldconfig path =
"#;

pub(crate) const MKSQUASHFS_PATH: &str = r#"
# MKSQUASHFS PATH: [STRING]
# DEFAULT: Undefined
# DEPRECATED
# Path to the mksquashfs executable, used to create SIF and SquashFS containers.
# If not set, Apptainer will search the directories set in binary path.
# mksquashfs path =
"#;

pub(crate) const MKSQUASHFS_PROCS: &str = r#"
# MKSQUASHFS PROCS: [UINT]
# DEFAULT: 0 (All CPUs)
# This allows the administrator to specify the number of CPUs for mksquashfs
# to use when building an image.  The fewer processors the longer it takes.
# To enable it to use all available CPU's set this to 0.
# mksquashfs procs = 0
"#;

pub(crate) const MKSQUASHFS_MEM: &str = r#"
# MKSQUASHFS MEM: [STRING]
# DEFAULT: Unlimited
# This allows the administrator to set the maximum amount of memory for mkswapfs
# to use when building an image.  e.g. 1G for 1gb or 500M for 500mb. Restricting memory
# can have a major impact on the time it takes mksquashfs to create the image.
# NOTE: This fuctionality did not exist in squashfs-tools prior to version 4.3
# If using an earlier version you should not set this.
# mksquashfs mem = 1G
"#;

pub(crate) const NVIDIA_CONTAINER_CLI_PATH: &str = r#"
# NVIDIA-CONTAINER-CLI PATH: [STRING]
# DEFAULT: Undefined
# DEPRECATED
# Path to the nvidia-container-cli executable, used to find GPU libraries.
# When run as root, executable must be owned by root for security reasons
# If not set, Apptainer will search the directories set in binary path.
# nvidia-container-cli path =
"#;

pub(crate) const UNSQUASHFS_PATH: &str = r#"
# UNSQUASHFS PATH: [STRING]
# DEFAULT: Undefined
# DEPRECATED
# Path to the unsquashfs executable, used to extract SIF and SquashFS containers
# If not set, Apptainer will search the directories set in binary path.
# unsquashfs path =
"#;

pub(crate) const SHARED_LOOP_DEVICES: &str = r#"
# SHARED LOOP DEVICES: [BOOL]
# DEFAULT: no
# Allow to share same images associated with loop devices to minimize loop
# usage and optimize kernel cache (useful for MPI)
"#;

pub(crate) const IMAGE_DRIVER: &str = r#"
# IMAGE DRIVER: [STRING]
# DEFAULT: Undefined
# This option specifies the name of an image driver provided by a plugin that
# will be used to handle image mounts. If the 'enable overlay' option is set
# to 'driver' the driver name specified here will also be used to handle
# overlay mounts.
# If the driver name specified has not been registered via a plugin installation
# the run-time will abort.
"#;

pub(crate) const DOWNLOAD_CONCURRENCY: &str = r#"
# DOWNLOAD CONCURRENCY: [UINT]
# DEFAULT: 3
# This option specifies how many concurrent streams when downloading (pulling)
# an image from cloud library.
"#;

pub(crate) const DOWNLOAD_PART_SIZE: &str = r#"
# DOWNLOAD PART SIZE: [UINT]
# DEFAULT: 5242880
# This option specifies the size of each part when concurrent downloads are
# enabled.
"#;

pub(crate) const DOWNLOAD_BUFFER_SIZE: &str = r#"
# DOWNLOAD BUFFER SIZE: [UINT]
# DEFAULT: 32768
# This option specifies the transfer buffer size when concurrent downloads
# are enabled.
"#;

pub(crate) const SYSTEMD_CGROUPS: &str = r#"
# SYSTEMD CGROUPS: [BOOL]
# DEFAULT: yes
# Whether to use systemd to manage container cgroups. Required for rootless cgroups
# functionality. 'no' will manage cgroups directly via cgroupfs.
"#;
