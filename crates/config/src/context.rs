//! Build-context reduction of a loaded configuration.
//!
//! Options that only make sense for interactive execution are removed when the
//! same configuration drives an image build: the default bind list and the
//! resolv.conf, home and devpts mounts.

use crate::types::ApptainerConf;

impl ApptainerConf {
    /// Strip execution-only mounts in place for a build.
    ///
    /// Clears `bind path` and disables `config resolv_conf`, `mount home` and
    /// `mount devpts` whatever their previous values. Applying it twice is
    /// the same as applying it once.
    pub fn apply_build_config(&mut self) {
        self.bind_path.clear();
        self.config_resolv_conf = false;
        self.mount_home = false;
        self.mount_devpts = false;
        tracing::debug!("Applied build configuration: default binds and mounts removed");
    }
}
