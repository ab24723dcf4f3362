//! CONTEXT: Application descriptor domain library
//! INTENT: Manifest decoding, entry point resolution, launch validation
//! DEPS: serde_json (document tree), url (locators), log (diagnostics)
//! READINESS: Library ready; no service dependencies
//! TESTS: Fail-soft parsing; icon fallback; scheme rules; launch gating
// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod descriptor;
pub mod entrypoint;
pub mod validate;

pub use descriptor::{ApplicationDescriptor, DEFAULT_ICON};
pub use entrypoint::resolve_entry_point;
pub use validate::is_launchable;
