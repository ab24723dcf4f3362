// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Launch pipeline: manifest bytes to a running application.
//!
//! The pipeline is strictly sequential with no retries. Parsing failures
//! degrade inside the descriptor; only an unreadable manifest, an
//! unlaunchable descriptor, or a host bootstrap failure surface as errors
//! here, and the binary maps each class to its own exit code.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use appdesc::{is_launchable, ApplicationDescriptor};
use luna_trust::TrustedNamespaces;

use crate::roles::{provision_roles, RoleRegistrar};

/// Errors surfaced by the launch pipeline.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The manifest file could not be read.
    #[error("failed to read application manifest {path}: {source}")]
    ManifestRead {
        /// Path of the manifest the launcher was invoked with.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The manifest produced a descriptor that is not launchable.
    #[error("invalid application description for app {id:?}")]
    InvalidDescriptor {
        /// Identifier from the rejected descriptor, possibly empty.
        id: String,
    },
    /// The content engine host refused the descriptor.
    #[error("failed to bootstrap application: {0}")]
    Bootstrap(String),
}

/// Seam to the content-engine bootstrapper.
///
/// The implementation owns window creation, markup/script engine setup, and
/// window-identity tagging (application id plus the "card" window type); it
/// reads entry point, headless flag, plugin, user agent, and the style and
/// engine hints from the descriptor.
pub trait EngineHost {
    /// Boots the hosted content described by `descriptor`, passing the raw
    /// launch parameters blob through to the application.
    fn bootstrap(
        &mut self,
        descriptor: &ApplicationDescriptor,
        launch_params: &str,
    ) -> Result<(), String>;
}

/// Runs the launch pipeline for the manifest at `manifest_path`.
///
/// Reads the manifest, derives the application base directory, builds and
/// validates the descriptor, narrows its trust scope with `namespaces`,
/// provisions bus roles through `registrar`, and hands the descriptor to
/// `host`. Exactly one descriptor is built per invocation.
///
/// # Errors
///
/// Returns [`LaunchError`] when the manifest is unreadable, the descriptor
/// is rejected by the launch validator, or the host fails to boot.
pub fn launch<R: RoleRegistrar, H: EngineHost>(
    manifest_path: &Path,
    launch_params: &str,
    namespaces: &TrustedNamespaces,
    registrar: &mut R,
    host: &mut H,
) -> Result<ApplicationDescriptor, LaunchError> {
    let data = fs::read_to_string(manifest_path).map_err(|source| LaunchError::ManifestRead {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    let base_path = application_base_path(manifest_path);
    debug!("application base path {}", base_path.display());

    let desc = ApplicationDescriptor::from_manifest(&data, &base_path);
    if !is_launchable(&desc) {
        return Err(LaunchError::InvalidDescriptor { id: desc.id().to_string() });
    }

    let trust_scope = namespaces.classify(desc.id());
    let desc = desc.with_trust_scope(trust_scope);
    info!("launching app {} with trust scope {:?}", desc.id(), desc.trust_scope());

    provision_roles(registrar, &base_path, desc.id(), desc.trust_scope());

    host.bootstrap(&desc, launch_params).map_err(LaunchError::Bootstrap)?;

    Ok(desc)
}

/// Absolute directory containing the manifest. The manifest was readable
/// when this runs, so its parent exists; a bare filename resolves through
/// the working directory.
fn application_base_path(manifest_path: &Path) -> PathBuf {
    let parent = match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).unwrap_or_else(|_| parent.to_path_buf())
}
