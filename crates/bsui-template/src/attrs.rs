//! Attribute bag
//!
//! Attributes keep their insertion order so rendered markup is stable:
//! replacing a value keeps its slot, new keys are appended.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Text(String),
    /// Rendered joined by a single space (class lists)
    List(Vec<String>),
}

impl AttrValue {
    /// String form used inside the rendered `key="..."`
    pub fn render(&self) -> String {
        match self {
            AttrValue::Bool(true) => "1".to_string(),
            AttrValue::Bool(false) => String::new(),
            AttrValue::Int(n) => n.to_string(),
            AttrValue::Text(s) => s.clone(),
            AttrValue::List(items) => items.join(" "),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(value: Vec<&str>) -> Self {
        AttrValue::List(value.into_iter().map(str::to_string).collect())
    }
}

/// Insertion-ordered mapping of HTML attribute names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attrs(IndexMap<String, AttrValue>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attrs::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    /// Remove a key without disturbing the order of the others
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.shift_remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The `class` attribute split into individual class names
    pub fn classes(&self) -> Vec<String> {
        match self.0.get("class") {
            Some(AttrValue::Text(s)) => s.split_whitespace().map(str::to_string).collect(),
            Some(AttrValue::List(items)) => items
                .iter()
                .flat_map(|s| s.split_whitespace())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// Merge computed classes into the caller's `class`.
    ///
    /// Caller classes stay first; each injected class is appended unless it
    /// is already present.
    pub fn inject_classes<S: AsRef<str>>(mut self, classes: &[S]) -> Self {
        let mut merged = self.classes();
        for class in classes {
            for name in class.as_ref().split_whitespace() {
                if !merged.iter().any(|c| c == name) {
                    merged.push(name.to_string());
                }
            }
        }
        self.0
            .insert("class".to_string(), AttrValue::Text(merged.join(" ")));
        self
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
