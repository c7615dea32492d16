//! Options for the stateless Bootstrap components
//!
//! Each options record pulls out the keys that steer rendering (tag name,
//! icon set, label type); whatever remains in `attrs` is emitted verbatim.

use serde::{Deserialize, Serialize};

use bsui_template::Attrs;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeOptions {
    /// Wrapping tag, `span` when unset
    #[serde(default)]
    pub tag: Option<String>,
    /// Escape the badge text
    #[serde(default)]
    pub escape: bool,
    #[serde(flatten)]
    pub attrs: Attrs,
}

impl BadgeOptions {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconOptions {
    /// `i` when unset
    #[serde(default)]
    pub tag: Option<String>,
    /// Falls back to the helper's configured icon set
    #[serde(default)]
    pub icon_set: Option<String>,
    #[serde(flatten)]
    pub attrs: Attrs,
}

impl IconOptions {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_icon_set(mut self, icon_set: impl Into<String>) -> Self {
        self.icon_set = Some(icon_set.into());
        self
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOptions {
    /// `span` when unset
    #[serde(default)]
    pub tag: Option<String>,
    /// Label category (`default`, `primary`, `warning`...), `default` when unset
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub escape: bool,
    #[serde(flatten)]
    pub attrs: Attrs,
}

impl LabelOptions {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }
}

/// Second argument of a label: a bare category or a full options record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelType {
    Kind(String),
    Options(LabelOptions),
}

impl LabelType {
    /// Normalize to the options shape
    pub fn into_options(self) -> LabelOptions {
        match self {
            LabelType::Kind(kind) => LabelOptions::default().with_kind(kind),
            LabelType::Options(options) => options,
        }
    }
}

impl Default for LabelType {
    fn default() -> Self {
        LabelType::Options(LabelOptions::default())
    }
}

impl From<&str> for LabelType {
    fn from(kind: &str) -> Self {
        LabelType::Kind(kind.to_string())
    }
}

impl From<String> for LabelType {
    fn from(kind: String) -> Self {
        LabelType::Kind(kind)
    }
}

impl From<LabelOptions> for LabelType {
    fn from(options: LabelOptions) -> Self {
        LabelType::Options(options)
    }
}
