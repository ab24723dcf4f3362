// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Bin wrapper for the launcher: process environment, positional argument
//! intake, and exit-code mapping.
//!
//! Usage: `luna-qml-launcher <manifest> [parameters]`

use std::env;
use std::path::Path;
use std::process;

use log::{debug, error, info, warn};

use appdesc::ApplicationDescriptor;
use luna_trust::TrustedNamespaces;
use qml_launcher::sandbox::{APP_CACHE_ROOT, APP_DATA_ROOT};
use qml_launcher::{app_data_path, BusKind, EngineHost, LaunchError, RoleRegistrar};

/// Optional override for the trusted-namespace set.
const TRUST_CONFIG: &str = "/etc/luna-qml-launcher/trust.toml";

/// Bridges role registration onto the message-bus hub. The hub connection
/// itself is owned by the platform bus library; this build records the
/// registration so launches stay observable.
struct HubRegistrar;

impl RoleRegistrar for HubRegistrar {
    fn register(&mut self, role_file: &Path, bus: BusKind) -> Result<(), String> {
        info!("pushing {bus:?} role from {}", role_file.display());
        Ok(())
    }
}

/// Hands the validated descriptor to the markup/script engine. Window
/// creation and engine setup are owned by the GUI toolkit integration.
struct QmlEngineHost;

impl EngineHost for QmlEngineHost {
    fn bootstrap(
        &mut self,
        descriptor: &ApplicationDescriptor,
        launch_params: &str,
    ) -> Result<(), String> {
        let entry = descriptor
            .entry_point()
            .ok_or_else(|| "invalid app path".to_string())?;
        info!(
            "booting {} from {entry} (headless: {}, window tag: card)",
            descriptor.id(),
            descriptor.headless()
        );
        debug!("launch parameters: {launch_params}");
        Ok(())
    }
}

fn trusted_namespaces() -> TrustedNamespaces {
    let config = Path::new(TRUST_CONFIG);
    if !config.exists() {
        return TrustedNamespaces::default();
    }
    match TrustedNamespaces::load_file(config) {
        Ok(namespaces) => namespaces,
        Err(err) => {
            warn!("{err}; using built-in trusted namespaces");
            TrustedNamespaces::default()
        }
    }
}

fn main() {
    // Persisted per-application data lives on the encrypted app partition.
    if env::var_os("XDG_DATA_HOME").is_none() {
        env::set_var("XDG_DATA_HOME", APP_DATA_ROOT);
    }
    if env::var_os("XDG_CACHE_HOME").is_none() {
        env::set_var("XDG_CACHE_HOME", APP_CACHE_ROOT);
    }

    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(manifest_path) = args.first() else {
        eprintln!("usage: luna-qml-launcher <manifest> [parameters]");
        process::exit(1);
    };
    let launch_params = args.get(1).cloned().unwrap_or_else(|| "{}".to_string());
    debug!("launching app: {manifest_path}");

    let namespaces = trusted_namespaces();
    let mut registrar = HubRegistrar;
    let mut host = QmlEngineHost;

    match qml_launcher::launch(
        Path::new(manifest_path),
        &launch_params,
        &namespaces,
        &mut registrar,
        &mut host,
    ) {
        Ok(desc) => {
            debug!("app data sandbox at {}", app_data_path(desc.id()).display());
        }
        Err(err @ LaunchError::ManifestRead { .. }) => exit_with(&err, 1),
        Err(err @ LaunchError::InvalidDescriptor { .. }) => exit_with(&err, 2),
        Err(err @ LaunchError::Bootstrap(_)) => exit_with(&err, 3),
    }
}

fn exit_with(err: &LaunchError, code: i32) -> ! {
    error!("{err}");
    process::exit(code);
}
