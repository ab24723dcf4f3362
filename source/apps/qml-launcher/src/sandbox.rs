// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-application data sandboxing.
//!
//! Persisted data is keyed by application id under the XDG data and cache
//! roots so it survives application exit and never leaks across apps. The
//! launcher binary points both roots at the encrypted app partition before
//! anything else runs.

use std::env;
use std::path::PathBuf;

/// Default XDG data root on device.
pub const APP_DATA_ROOT: &str = "/media/cryptofs/app-data";
/// Default XDG cache root on device.
pub const APP_CACHE_ROOT: &str = "/media/cryptofs/app-cache";

/// Directory holding persisted data for `app_id`.
pub fn app_data_path(app_id: &str) -> PathBuf {
    xdg_root("XDG_DATA_HOME", APP_DATA_ROOT).join(app_id)
}

/// Directory holding cached data for `app_id`.
pub fn app_cache_path(app_id: &str) -> PathBuf {
    xdg_root("XDG_CACHE_HOME", APP_CACHE_ROOT).join(app_id)
}

fn xdg_root(var: &str, default: &str) -> PathBuf {
    env::var_os(var).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(default))
}
