// Copyright 2025 LuneOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Manifest decoding into a validated application descriptor.
//!
//! Parsing is total: a document that is not a JSON object, or a recognized
//! key holding a value of the wrong type, degrades to defaults instead of
//! failing. Callers judge usability with [`crate::validate::is_launchable`],
//! never through an error from here.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::{Map, Value};
use url::Url;

use luna_trust::TrustScope;

use crate::entrypoint::resolve_entry_point;

/// Fallback icon shipped with the launcher, substituted whenever the
/// manifest icon is missing, unparseable, or names a file that does not
/// exist on disk.
pub const DEFAULT_ICON: &str = "file:///usr/share/luna-qml-launcher/default-app-icon.png";

/// Read-only description of one application manifest.
///
/// One descriptor is built per launch attempt and never mutated afterwards;
/// the only post-construction refinement is [`Self::with_trust_scope`],
/// which consumes the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDescriptor {
    id: String,
    title: String,
    icon: Url,
    entry_point: Option<Url>,
    headless: bool,
    flickable: bool,
    internet_connectivity_required: bool,
    base_path: PathBuf,
    plugin_name: Option<String>,
    urls_allowed: Vec<String>,
    user_agent: Option<String>,
    use_luneos_style: bool,
    use_web_engine: bool,
    trust_scope: TrustScope,
}

impl ApplicationDescriptor {
    /// Builds an all-default descriptor rooted at `base_path`.
    pub fn empty(base_path: &Path) -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            icon: default_icon(),
            entry_point: None,
            headless: false,
            flickable: false,
            internet_connectivity_required: false,
            base_path: base_path.to_path_buf(),
            plugin_name: None,
            urls_allowed: Vec::new(),
            user_agent: None,
            use_luneos_style: false,
            use_web_engine: false,
            trust_scope: TrustScope::System,
        }
    }

    /// Decodes `data` (a UTF-8 JSON manifest) into a descriptor rooted at
    /// `base_path`, the absolute directory containing the manifest.
    ///
    /// Unknown keys are ignored; recognized keys are adopted only when they
    /// carry the expected JSON type. A document that does not parse as a
    /// JSON object yields an all-default descriptor and a logged warning.
    pub fn from_manifest(data: &str, base_path: &Path) -> Self {
        let mut desc = Self::empty(base_path);

        let root = match serde_json::from_str::<Value>(data) {
            Ok(Value::Object(root)) => root,
            Ok(_) | Err(_) => {
                warn!("failed to parse application manifest");
                return desc;
            }
        };

        if let Some(id) = string_field(&root, "id") {
            desc.id = id.to_string();
        }

        if let Some(main) = string_field(&root, "main") {
            desc.entry_point = resolve_entry_point(main, &desc.base_path, &desc.id);
        }

        if let Some(headless) = bool_field(&root, "noWindow") {
            desc.headless = headless;
        }

        if let Some(title) = string_field(&root, "title") {
            desc.title = title.to_string();
        }

        match string_field(&root, "icon").and_then(|value| locate_icon(value, &desc.base_path)) {
            Some(icon) if icon_file_exists(&icon) => desc.icon = icon,
            Some(icon) => {
                debug!("icon {icon} for application {} is unusable, keeping default", desc.id);
            }
            None => {}
        }

        if let Some(flickable) = bool_field(&root, "flickable") {
            desc.flickable = flickable;
        }

        if let Some(required) = bool_field(&root, "internetConnectivityRequired") {
            desc.internet_connectivity_required = required;
        }

        if let Some(urls) = root.get("urlsAllowed").and_then(Value::as_array) {
            desc.urls_allowed =
                urls.iter().filter_map(Value::as_str).map(str::to_owned).collect();
        }

        if let Some(plugin) = string_field(&root, "plugin") {
            desc.plugin_name = Some(plugin.to_string());
        }

        if let Some(user_agent) = string_field(&root, "userAgent") {
            desc.user_agent = Some(user_agent.to_string());
        }

        if let Some(style) = bool_field(&root, "useLuneOSStyle") {
            desc.use_luneos_style = style;
        }

        if let Some(engine) = bool_field(&root, "useWebEngine") {
            desc.use_web_engine = engine;
        }

        desc
    }

    /// Returns a copy of this descriptor with its trust scope narrowed.
    #[must_use]
    pub fn with_trust_scope(mut self, scope: TrustScope) -> Self {
        self.trust_scope = scope;
        self
    }

    /// Application identifier (reverse-domain namespace), empty when the
    /// manifest did not supply one.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name, may be empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Icon locator; always resolvable, falling back to [`DEFAULT_ICON`].
    pub fn icon(&self) -> &Url {
        &self.icon
    }

    /// Entry point locator, `None` when missing or invalid.
    pub fn entry_point(&self) -> Option<&Url> {
        self.entry_point.as_ref()
    }

    /// True when the entry point is served over http/https.
    pub fn has_remote_entry_point(&self) -> bool {
        self.entry_point
            .as_ref()
            .map(|entry| matches!(entry.scheme(), "http" | "https"))
            .unwrap_or(false)
    }

    /// Whether the application runs without a visible window.
    pub fn headless(&self) -> bool {
        self.headless
    }

    /// Whether the hosted content is flick-scrollable.
    pub fn flickable(&self) -> bool {
        self.flickable
    }

    /// Whether the application requires network connectivity.
    pub fn internet_connectivity_required(&self) -> bool {
        self.internet_connectivity_required
    }

    /// Absolute directory containing the manifest.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Native extension module the hosting engine should load, if any.
    pub fn plugin_name(&self) -> Option<&str> {
        self.plugin_name.as_deref()
    }

    /// URL patterns the hosted content may navigate to, in manifest order.
    pub fn urls_allowed(&self) -> &[String] {
        &self.urls_allowed
    }

    /// User-agent override for network requests, if any.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Whether the platform widget style should be applied.
    pub fn use_luneos_style(&self) -> bool {
        self.use_luneos_style
    }

    /// Whether the alternate web engine renderer is requested.
    pub fn use_web_engine(&self) -> bool {
        self.use_web_engine
    }

    /// Privilege tier; [`TrustScope::System`] until narrowed.
    pub fn trust_scope(&self) -> TrustScope {
        self.trust_scope
    }
}

fn string_field<'a>(root: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    root.get(key).and_then(Value::as_str)
}

fn bool_field(root: &Map<String, Value>, key: &str) -> Option<bool> {
    root.get(key).and_then(Value::as_bool)
}

/// Interprets a manifest icon value as a locator. Only locally stored icons
/// are allowed; a bare path resolves against the application directory
/// before gaining its file scheme.
fn locate_icon(value: &str, base_path: &Path) -> Option<Url> {
    if value.is_empty() {
        return None;
    }
    match Url::parse(value) {
        Ok(icon) => Some(icon),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::from_file_path(base_path.join(value)).ok()
        }
        Err(_) => None,
    }
}

fn icon_file_exists(icon: &Url) -> bool {
    icon.scheme() == "file"
        && icon.to_file_path().map(|path| path.exists()).unwrap_or(false)
}

fn default_icon() -> Url {
    // Parsing a well-formed constant cannot fail.
    Url::parse(DEFAULT_ICON).expect("default icon locator is well-formed")
}
