//! Template set manifest types and parsing

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Template set manifest (`template.yaml` at the root of a template directory)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template set
    pub name: String,

    /// Description of what the template set provides
    #[serde(default)]
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,

    /// Template id (`directive`, `state`, `state-css`, `state-html`) to file,
    /// relative to the manifest. Ids left out fall back to the built-in template.
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
}

impl TemplateManifest {
    /// File declared for a template id, if any
    pub fn file_for(&self, id: &str) -> Option<&str> {
        self.templates.get(id).map(String::as_str)
    }
}
