// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Launchability gate over an already-constructed descriptor.

use crate::descriptor::ApplicationDescriptor;

/// Decides whether `descriptor` describes a launchable application.
///
/// A launchable descriptor has a non-empty id and a usable entry point:
/// local entry points must exist on disk (the one filesystem probe this
/// predicate performs), remote `http`/`https` entry points are accepted
/// unchecked since their existence is unverifiable locally, and a missing
/// entry point fails.
pub fn is_launchable(descriptor: &ApplicationDescriptor) -> bool {
    if descriptor.id().is_empty() {
        return false;
    }

    match descriptor.entry_point() {
        Some(entry) if entry.scheme() == "file" => {
            entry.to_file_path().map(|path| path.exists()).unwrap_or(false)
        }
        Some(_) => true,
        None => false,
    }
}
