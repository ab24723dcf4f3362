// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0
//
// CONTEXT: Launch pipeline tests with stub collaborators
// TESTS: happy path, role gating by trust scope, failure classes

use std::fs;
use std::path::{Path, PathBuf};

use appdesc::ApplicationDescriptor;
use luna_trust::{TrustScope, TrustedNamespaces};
use qml_launcher::{launch, BusKind, EngineHost, LaunchError, RoleRegistrar};
use tempfile::TempDir;
use url::Url;

#[derive(Default)]
struct StubRegistrar {
    roles: Vec<(PathBuf, BusKind)>,
}

impl RoleRegistrar for StubRegistrar {
    fn register(&mut self, role_file: &Path, bus: BusKind) -> Result<(), String> {
        self.roles.push((role_file.to_path_buf(), bus));
        Ok(())
    }
}

#[derive(Default)]
struct StubHost {
    booted: Vec<(String, Url, String)>,
    refuse: bool,
}

impl EngineHost for StubHost {
    fn bootstrap(
        &mut self,
        descriptor: &ApplicationDescriptor,
        launch_params: &str,
    ) -> Result<(), String> {
        if self.refuse {
            return Err("engine refused".to_string());
        }
        let entry = descriptor.entry_point().cloned().ok_or("no entry point")?;
        self.booted.push((descriptor.id().to_string(), entry, launch_params.to_string()));
        Ok(())
    }
}

fn write_app(temp: &TempDir, id: &str, with_roles: bool) -> PathBuf {
    fs::write(temp.path().join("index.html"), "<html/>").unwrap();
    if with_roles {
        for subdir in ["pub", "prv"] {
            let dir = temp.path().join("roles").join(subdir);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(format!("{id}.json")), "{}").unwrap();
        }
    }
    let manifest_path = temp.path().join("appinfo.json");
    fs::write(
        &manifest_path,
        format!(r#"{{"id": "{id}", "main": "index.html", "title": "Test"}}"#),
    )
    .unwrap();
    manifest_path
}

#[test]
fn launches_system_app_with_both_roles() {
    let temp = TempDir::new().unwrap();
    let manifest_path = write_app(&temp, "org.webosports.app.test", true);
    let base = fs::canonicalize(temp.path()).unwrap();

    let mut registrar = StubRegistrar::default();
    let mut host = StubHost::default();
    let desc = launch(
        &manifest_path,
        "{}",
        &TrustedNamespaces::default(),
        &mut registrar,
        &mut host,
    )
    .unwrap();

    assert_eq!(desc.trust_scope(), TrustScope::System);
    assert_eq!(
        registrar.roles,
        vec![
            (base.join("roles/pub/org.webosports.app.test.json"), BusKind::Public),
            (base.join("roles/prv/org.webosports.app.test.json"), BusKind::Private),
        ]
    );
    let expected_entry = Url::from_file_path(base.join("index.html")).unwrap();
    assert_eq!(
        host.booted,
        vec![("org.webosports.app.test".to_string(), expected_entry, "{}".to_string())]
    );
}

#[test]
fn third_party_app_gets_public_role_only() {
    let temp = TempDir::new().unwrap();
    let manifest_path = write_app(&temp, "com.thirdparty.app", true);
    let base = fs::canonicalize(temp.path()).unwrap();

    let mut registrar = StubRegistrar::default();
    let mut host = StubHost::default();
    let desc = launch(
        &manifest_path,
        r#"{"page": 2}"#,
        &TrustedNamespaces::default(),
        &mut registrar,
        &mut host,
    )
    .unwrap();

    assert_eq!(desc.trust_scope(), TrustScope::Default);
    assert_eq!(
        registrar.roles,
        vec![(base.join("roles/pub/com.thirdparty.app.json"), BusKind::Public)]
    );
    assert_eq!(host.booted[0].2, r#"{"page": 2}"#);
}

#[test]
fn missing_manifest_is_a_read_error() {
    let temp = TempDir::new().unwrap();
    let mut registrar = StubRegistrar::default();
    let mut host = StubHost::default();

    let err = launch(
        &temp.path().join("appinfo.json"),
        "{}",
        &TrustedNamespaces::default(),
        &mut registrar,
        &mut host,
    )
    .unwrap_err();

    assert!(matches!(err, LaunchError::ManifestRead { .. }));
    assert!(registrar.roles.is_empty());
    assert!(host.booted.is_empty());
}

#[test]
fn empty_id_is_rejected_before_any_side_effect() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("index.html"), "<html/>").unwrap();
    let manifest_path = temp.path().join("appinfo.json");
    fs::write(&manifest_path, r#"{"main": "index.html"}"#).unwrap();

    let mut registrar = StubRegistrar::default();
    let mut host = StubHost::default();
    let err = launch(
        &manifest_path,
        "{}",
        &TrustedNamespaces::default(),
        &mut registrar,
        &mut host,
    )
    .unwrap_err();

    assert!(matches!(err, LaunchError::InvalidDescriptor { id } if id.is_empty()));
    assert!(registrar.roles.is_empty());
    assert!(host.booted.is_empty());
}

#[test]
fn missing_entry_point_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let manifest_path = temp.path().join("appinfo.json");
    fs::write(
        &manifest_path,
        r#"{"id": "com.example.app", "main": "index.html"}"#,
    )
    .unwrap();

    let mut registrar = StubRegistrar::default();
    let mut host = StubHost::default();
    let err = launch(
        &manifest_path,
        "{}",
        &TrustedNamespaces::default(),
        &mut registrar,
        &mut host,
    )
    .unwrap_err();

    assert!(matches!(err, LaunchError::InvalidDescriptor { id } if id == "com.example.app"));
}

#[test]
fn host_refusal_surfaces_as_bootstrap_error() {
    let temp = TempDir::new().unwrap();
    let manifest_path = write_app(&temp, "com.example.app", false);

    let mut registrar = StubRegistrar::default();
    let mut host = StubHost { refuse: true, ..StubHost::default() };
    let err = launch(
        &manifest_path,
        "{}",
        &TrustedNamespaces::default(),
        &mut registrar,
        &mut host,
    )
    .unwrap_err();

    assert!(matches!(err, LaunchError::Bootstrap(message) if message == "engine refused"));
}

#[test]
fn remote_entry_point_launches_without_local_file() {
    let temp = TempDir::new().unwrap();
    let manifest_path = temp.path().join("appinfo.json");
    fs::write(
        &manifest_path,
        r#"{"id": "com.example.app", "main": "https://ex.com/app.qml"}"#,
    )
    .unwrap();

    let mut registrar = StubRegistrar::default();
    let mut host = StubHost::default();
    let desc = launch(
        &manifest_path,
        "{}",
        &TrustedNamespaces::default(),
        &mut registrar,
        &mut host,
    )
    .unwrap();

    assert!(desc.has_remote_entry_point());
    assert_eq!(host.booted[0].1.as_str(), "https://ex.com/app.qml");
}
