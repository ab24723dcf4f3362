// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Entry point resolution.
//!
//! Manifests may name their entry point as a bare path relative to the
//! application directory, as an explicit `file://` locator, or as remote
//! `http`/`https` content. Any other scheme is an authoring error and
//! resolves to no entry point at all, loudly, so a typo never turns into a
//! path that silently fails to open later. Single-letter pseudo-schemes
//! (Windows drive letters) do not occur on target systems and are not
//! special-cased.

use std::path::Path;

use log::warn;
use url::Url;

/// Resolves a raw manifest `main` value against the application directory.
///
/// Returns `None` for an empty value or an unsupported scheme; the launch
/// validator treats that as "no entry point".
pub fn resolve_entry_point(raw: &str, base_path: &Path, app_id: &str) -> Option<Url> {
    if raw.is_empty() {
        return None;
    }

    match Url::parse(raw) {
        Ok(entry) if matches!(entry.scheme(), "file" | "http" | "https") => Some(entry),
        Ok(entry) => {
            warn!(
                "entry point {raw} for application {app_id} has unsupported scheme {}",
                entry.scheme()
            );
            None
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::from_file_path(base_path.join(raw)).ok()
        }
        Err(err) => {
            warn!("entry point {raw} for application {app_id} is invalid: {err}");
            None
        }
    }
}
