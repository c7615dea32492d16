//! Nav item buffer

use serde::{Deserialize, Serialize};

use bsui_template::Attrs;

/// One tab: its header title, its pane body and the header's attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub content: String,
    /// Everything besides title and content; `class` is shared with the pane
    #[serde(flatten)]
    pub attrs: Attrs,
}

impl NavItem {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        class: Option<&str>,
    ) -> Self {
        let mut attrs = Attrs::new();
        if let Some(class) = class {
            attrs.set("class", class);
        }
        Self {
            title: title.into(),
            content: content.into(),
            attrs,
        }
    }

    /// Class names carried over to the content pane
    pub fn classes(&self) -> Vec<String> {
        self.attrs.classes()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavBuffer {
    items: Vec<NavItem>,
}

impl NavBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: NavItem) {
        tracing::trace!(title = %item.title, "Added nav item");
        self.items.push(item);
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
