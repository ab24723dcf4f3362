//! CONTEXT: Single-shot launcher for web-technology applications
//! INTENT: Manifest intake, descriptor validation, bus role provisioning,
//!         hand-off to the content engine host
//! PUBLIC API: launch(), RoleRegistrar, EngineHost, relaunch_channel()
//! DEPENDS_ON: appdesc (descriptor model), trust (privilege classifier)
//! TESTS: Launch pipeline with stub collaborators; role gating; relaunch
// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod launch;
pub mod relaunch;
pub mod roles;
pub mod sandbox;

pub use launch::{launch, EngineHost, LaunchError};
pub use relaunch::{relaunch_channel, RelaunchEvents, RelaunchHandle};
pub use roles::{provision_roles, BusKind, RoleRegistrar};
pub use sandbox::{app_cache_path, app_data_path};
