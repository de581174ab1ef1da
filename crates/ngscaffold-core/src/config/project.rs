//! Project-level defaults read from `.ng-scaffold.yaml`
//!
//! Values here become the pre-set layer of option resolution: they override
//! interactive answers (and so skip their questions) but lose to flags.
//!
//! ```yaml
//! module: consumer
//! location: hf.ecu
//! directive:
//!   restrict: AE
//!   isolate: true
//! state:
//!   abstract: false
//!   templateType: URL
//! ```

use crate::error::ScaffoldError;
use crate::generator::{directive, state, GeneratorKind};
use crate::options::Options;
use crate::validate;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the project directory
pub const CONFIG_FILE: &str = ".ng-scaffold.yaml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "NG_SCAFFOLD_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveDefaults {
    #[serde(default)]
    pub restrict: Option<String>,
    #[serde(default)]
    pub isolate: Option<bool>,
    #[serde(default)]
    pub transclude: Option<bool>,
    #[serde(default)]
    pub template_type: Option<String>,
    #[serde(default)]
    pub link: Option<bool>,
    #[serde(default)]
    pub controller: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDefaults {
    #[serde(default, rename = "abstract")]
    pub is_abstract: Option<bool>,
    #[serde(default)]
    pub template_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Module every generated component registers with
    #[serde(default)]
    pub module: Option<String>,

    /// Default dotted namespace
    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub directive: DirectiveDefaults,

    #[serde(default)]
    pub state: StateDefaults,
}

impl ProjectConfig {
    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ProjectConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Find the config for a project directory, honoring `$NG_SCAFFOLD_CONFIG`
    pub fn discover(dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::discover_in(dir, env_path)
    }

    /// Like [`ProjectConfig::discover`] with the override passed in.
    /// An override must exist; the project file is optional.
    pub fn discover_in(
        dir: &Path,
        override_path: Option<PathBuf>,
    ) -> Result<Option<(PathBuf, Self)>> {
        if let Some(path) = override_path {
            let config = Self::load(&path)?;
            return Ok(Some((path, config)));
        }

        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let config = Self::load(&path)?;
        Ok(Some((path, config)))
    }

    /// Reject values the interactive validators would never have accepted.
    /// `module` is checked against the state rule here; the stricter directive
    /// rule is applied by [`ProjectConfig::presets`].
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        let invalid = |message: String| Err(ScaffoldError::InvalidConfig(message));

        if let Some(module) = &self.module {
            if !validate::is_state_name(module) {
                return invalid(format!(
                    "module '{}' must contain only letters, numbers, and _",
                    module
                ));
            }
        }
        if let Some(location) = &self.location {
            if !validate::is_namespace(location) {
                return invalid(format!(
                    "location '{}' must contain lowercase letters, underscore, and period only",
                    location
                ));
            }
        }
        if let Some(restrict) = &self.directive.restrict {
            if !validate::is_restrict(restrict) {
                return invalid(format!("directive.restrict '{}' must use A, E, or C", restrict));
            }
        }
        if let Some(kind) = &self.directive.template_type {
            if !directive::TEMPLATE_TYPES.iter().any(|c| c.value == kind.as_str()) {
                return invalid(format!("directive.templateType '{}' is not supported", kind));
            }
        }
        if let Some(kind) = &self.state.template_type {
            if !state::TEMPLATE_TYPES.iter().any(|c| c.value == kind.as_str()) {
                return invalid(format!("state.templateType '{}' is not supported", kind));
            }
        }

        Ok(())
    }

    /// Pre-set option layer for one generator
    pub fn presets(&self, kind: GeneratorKind) -> Result<Options, ScaffoldError> {
        if let (GeneratorKind::Directive, Some(module)) = (kind, &self.module) {
            if !validate::is_directive_name(module) {
                return Err(ScaffoldError::InvalidConfig(format!(
                    "module '{}' must contain only letters and _ to generate a directive",
                    module
                )));
            }
        }

        let shared = Options::new()
            .with_opt("module", self.module.clone())
            .with_opt("location", self.location.clone());

        let presets = match kind {
            GeneratorKind::Directive => {
                let d = &self.directive;
                shared
                    .with_opt("restrict", d.restrict.clone())
                    .with_opt("isolate", d.isolate)
                    .with_opt("transclude", d.transclude)
                    .with_opt("templateType", d.template_type.clone())
                    .with_opt("link", d.link)
                    .with_opt("controller", d.controller)
            }
            GeneratorKind::State => {
                let s = &self.state;
                shared
                    .with_opt("abstract", s.is_abstract)
                    .with_opt("templateType", s.template_type.clone())
            }
        };
        Ok(presets)
    }
}
