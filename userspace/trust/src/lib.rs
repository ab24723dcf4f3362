//! CONTEXT: Trust classification for application identifiers
//! INTENT: Namespace-prefix policy deciding which apps get system privileges
//! DEPS: serde/toml (override file), std::fs
//! TESTS: Elevated/standard classification; prefix edge; TOML override loading
// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Coarse privilege tier granted to an application by its identifier.
///
/// Descriptors start at [`TrustScope::System`] and are narrowed by
/// [`TrustedNamespaces::classify`] before any collaborator acts on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustScope {
    /// Operated by the platform vendor; may register private bus roles.
    System,
    /// Third-party application with no elevated access.
    Default,
}

/// Errors emitted while loading a trusted-namespace override file.
#[derive(Debug, Error)]
pub enum Error {
    /// The override file could not be read.
    #[error("failed to read trust configuration {path}: {source}")]
    Read {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The override file is not a valid trust document.
    #[error("failed to parse trust configuration {path}: {source}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Ordered list of identifier prefixes that classify as system-operated.
///
/// Matching is a literal substring-at-start test. An identifier that merely
/// begins with a trusted prefix classifies as system even when the vendor
/// does not operate it, so the list is a security boundary that depends on
/// out-of-band enforcement such as package signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedNamespaces {
    prefixes: Vec<String>,
}

/// On-disk shape of the override document.
#[derive(Debug, Deserialize)]
struct RawTrust {
    #[serde(default)]
    system: Vec<String>,
}

impl Default for TrustedNamespaces {
    fn default() -> Self {
        Self {
            prefixes: vec![
                "org.webosports".to_string(),
                "com.palm".to_string(),
                "com.webos".to_string(),
            ],
        }
    }
}

impl TrustedNamespaces {
    /// Builds a policy from an explicit prefix list.
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Loads the prefix list from a TOML document of the form
    /// `system = ["org.webosports", ...]`, replacing the built-in set.
    pub fn load_file(path: &Path) -> Result<Self, Error> {
        let data = fs::read_to_string(path)
            .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
        let raw: RawTrust = toml::from_str(&data)
            .map_err(|source| Error::Parse { path: path.to_path_buf(), source })?;
        Ok(Self { prefixes: raw.system })
    }

    /// Classifies `app_id` against the configured prefixes. Pure, no I/O.
    pub fn classify(&self, app_id: &str) -> TrustScope {
        if self.prefixes.iter().any(|prefix| app_id.starts_with(prefix)) {
            TrustScope::System
        } else {
            TrustScope::Default
        }
    }

    /// Returns the configured prefixes in order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn vendor_namespace_is_system() {
        let namespaces = TrustedNamespaces::default();
        assert_eq!(namespaces.classify("org.webosports.app.browser"), TrustScope::System);
        assert_eq!(namespaces.classify("com.palm.calendar"), TrustScope::System);
    }

    #[test]
    fn third_party_namespace_is_default() {
        let namespaces = TrustedNamespaces::default();
        assert_eq!(namespaces.classify("com.thirdparty.foo"), TrustScope::Default);
        assert_eq!(namespaces.classify(""), TrustScope::Default);
    }

    #[test]
    fn matching_is_literal_prefix() {
        // Known limitation: a squatting namespace that extends a trusted
        // prefix still classifies as system.
        let namespaces = TrustedNamespaces::new(vec!["org.webosports".to_string()]);
        assert_eq!(namespaces.classify("org.webosportsevil.app"), TrustScope::System);
    }

    #[test]
    fn load_file_replaces_builtin_set() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trust.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "system = ['io.example']").unwrap();

        let namespaces = TrustedNamespaces::load_file(&path).unwrap();
        assert_eq!(namespaces.classify("io.example.app"), TrustScope::System);
        assert_eq!(namespaces.classify("org.webosports.app"), TrustScope::Default);
    }

    #[test]
    fn load_file_accepts_empty_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trust.toml");
        std::fs::write(&path, "").unwrap();

        let namespaces = TrustedNamespaces::load_file(&path).unwrap();
        assert!(namespaces.prefixes().is_empty());
        assert_eq!(namespaces.classify("org.webosports.app"), TrustScope::Default);
    }

    #[test]
    fn load_file_reports_parse_failures() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trust.toml");
        std::fs::write(&path, "system = 42").unwrap();

        let err = TrustedNamespaces::load_file(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn load_file_reports_missing_file() {
        let err = TrustedNamespaces::load_file(Path::new("/nonexistent/trust.toml")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
