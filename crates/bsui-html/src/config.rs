//! Helper configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Template overrides, applied over the built-in templates
    pub templates: BTreeMap<String, String>,
    /// Icon set used when an icon call names none
    pub icon_set: String,
    /// Escape attribute values
    pub escape: bool,
}

impl HtmlConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Loading helper config");
        Self::from_json(&raw)
    }

    pub fn with_template(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(name.into(), template.into());
        self
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            templates: BTreeMap::new(),
            icon_set: "glyphicon".to_string(),
            escape: true,
        }
    }
}
