//! Template sets
//!
//! This module provides:
//! - Template ids for every file a generator can emit
//! - The built-in template set compiled into the binary
//! - Local template directories described by a `template.yaml` manifest
//! - Version compatibility checking

pub mod manifest;
pub mod version;

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

pub use manifest::TemplateManifest;
pub use version::check_compatibility;

/// Environment variable pointing at a local template directory
pub const TEMPLATE_DIR_ENV: &str = "NG_SCAFFOLD_TEMPLATE_DIR";

const EMBEDDED_MANIFEST: &str = include_str!("../../templates/template.yaml");
const EMBEDDED_DIRECTIVE: &str = include_str!("../../templates/directive.tmpl");
const EMBEDDED_STATE: &str = include_str!("../../templates/state.tmpl");
const EMBEDDED_STATE_CSS: &str = include_str!("../../templates/state-css.tmpl");
const EMBEDDED_STATE_HTML: &str = include_str!("../../templates/state-html.tmpl");

/// Every template a generator can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateId {
    Directive,
    State,
    StateStyle,
    StateView,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Directive,
        TemplateId::State,
        TemplateId::StateStyle,
        TemplateId::StateView,
    ];

    /// Key used in `template.yaml`
    pub fn key(&self) -> &'static str {
        match self {
            TemplateId::Directive => "directive",
            TemplateId::State => "state",
            TemplateId::StateStyle => "state-css",
            TemplateId::StateView => "state-html",
        }
    }

    /// Name registered with the template engine
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateId::Directive => "directive.tmpl",
            TemplateId::State => "state.tmpl",
            TemplateId::StateStyle => "state-css.tmpl",
            TemplateId::StateView => "state-html.tmpl",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    fn embedded(&self) -> &'static str {
        match self {
            TemplateId::Directive => EMBEDDED_DIRECTIVE,
            TemplateId::State => EMBEDDED_STATE,
            TemplateId::StateStyle => EMBEDDED_STATE_CSS,
            TemplateId::StateView => EMBEDDED_STATE_HTML,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Where a template set was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Embedded,
    Local(PathBuf),
}

/// Template sources keyed by id, plus the manifest describing them
#[derive(Debug, Clone)]
pub struct TemplateSet {
    origin: TemplateOrigin,
    manifest: TemplateManifest,
    overrides: BTreeMap<TemplateId, String>,
}

impl TemplateSet {
    /// The templates compiled into the binary
    pub fn embedded() -> Result<Self> {
        let manifest: TemplateManifest = serde_yaml::from_str(EMBEDDED_MANIFEST)
            .context("Failed to parse built-in template.yaml")?;
        Ok(Self {
            origin: TemplateOrigin::Embedded,
            manifest,
            overrides: BTreeMap::new(),
        })
    }

    /// Load a local template directory; ids it doesn't declare use the built-ins
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            anyhow::bail!("Template directory not found: {}", dir.display());
        }

        let manifest_path = dir.join("template.yaml");
        let content = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        let manifest: TemplateManifest = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

        let mut overrides = BTreeMap::new();
        for (key, file) in &manifest.templates {
            let id = TemplateId::from_key(key)
                .ok_or_else(|| ScaffoldError::UnknownTemplate(key.clone()))?;
            let path = dir.join(file);
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?;
            overrides.insert(id, source);
        }

        Ok(Self {
            origin: TemplateOrigin::Local(dir.to_path_buf()),
            manifest,
            overrides,
        })
    }

    /// Explicit directory, then `$NG_SCAFFOLD_TEMPLATE_DIR`, then the built-ins
    pub fn from_config(template_dir: Option<PathBuf>) -> Result<Self> {
        let dir = template_dir.or_else(|| std::env::var_os(TEMPLATE_DIR_ENV).map(PathBuf::from));
        match dir {
            Some(dir) => Self::from_dir(&dir),
            None => Self::embedded(),
        }
    }

    pub fn origin(&self) -> &TemplateOrigin {
        &self.origin
    }

    pub fn manifest(&self) -> &TemplateManifest {
        &self.manifest
    }

    /// Source text for a template id
    pub fn source(&self, id: TemplateId) -> &str {
        self.overrides
            .get(&id)
            .map(String::as_str)
            .unwrap_or_else(|| id.embedded())
    }
}
