// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Message-bus role provisioning.
//!
//! Applications ship role-definition files under a fixed directory keyed by
//! their id: `<base>/roles/pub/<id>.json` and `<base>/roles/prv/<id>.json`.
//! Public roles register for every app; private roles only for system-scope
//! apps. Registration failures are logged and never abort the launch.

use std::path::Path;

use log::{info, warn};

use luna_trust::TrustScope;

/// Bus visibility a role definition applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusKind {
    /// The public bus, reachable by every application.
    Public,
    /// The private bus, reserved for system services.
    Private,
}

impl BusKind {
    fn roles_subdir(self) -> &'static str {
        match self {
            Self::Public => "pub",
            Self::Private => "prv",
        }
    }
}

/// Seam to the message-bus client that pushes role definitions to the hub.
pub trait RoleRegistrar {
    /// Registers the role definition at `role_file` on the given bus.
    fn register(&mut self, role_file: &Path, bus: BusKind) -> Result<(), String>;
}

/// Registers the role files present for `app_id` under `base_path`.
///
/// The private role is skipped (with a log line) for apps outside the
/// system trust scope.
pub fn provision_roles<R: RoleRegistrar>(
    registrar: &mut R,
    base_path: &Path,
    app_id: &str,
    scope: TrustScope,
) {
    for bus in [BusKind::Public, BusKind::Private] {
        let role_file =
            base_path.join("roles").join(bus.roles_subdir()).join(format!("{app_id}.json"));
        if !role_file.exists() {
            continue;
        }

        if bus == BusKind::Private && scope != TrustScope::System {
            info!("skipping private role for non-system app {app_id}");
            continue;
        }

        if let Err(err) = registrar.register(&role_file, bus) {
            warn!("failed to register {bus:?} role from {}: {err}", role_file.display());
        }
    }
}
