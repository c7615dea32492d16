//! Breadcrumb trail
//!
//! Crumbs are accumulated on the helper and rendered either as a separated
//! string or as a `ul` list. Rendering does not clear the trail.

use serde::{Deserialize, Serialize};

use bsui_template::Attrs;

use crate::helper::HtmlHelper;
use crate::Result;

const DEFAULT_START_TEXT: &str = "Home";
const DEFAULT_START_URL: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    pub name: String,
    /// Crumbs without a link render as their bare name
    #[serde(default)]
    pub link: Option<String>,
    /// Attributes for the crumb's anchor
    #[serde(default)]
    pub attrs: Attrs,
    /// Escape the name when it is rendered as a link
    #[serde(default = "default_escape")]
    pub escape: bool,
}

fn default_escape() -> bool {
    true
}

impl Crumb {
    pub fn new(name: impl Into<String>, link: Option<&str>, attrs: Attrs) -> Self {
        Self {
            name: name.into(),
            link: link.map(str::to_string),
            attrs,
            escape: true,
        }
    }

    fn render(&self, helper: &HtmlHelper) -> Result<String> {
        match self.link.as_deref().filter(|l| !l.is_empty()) {
            Some(url) => helper.link(&self.name, url, &self.attrs, self.escape),
            None => Ok(self.name.clone()),
        }
    }
}

/// Leading crumb prepended at render time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartCrumb {
    /// Text linking to `/`
    Text(String),
    Link {
        text: Option<String>,
        url: Option<String>,
        attrs: Attrs,
    },
}

impl StartCrumb {
    fn into_crumb(self, escape: bool) -> Crumb {
        let (text, url, attrs) = match self {
            StartCrumb::Text(text) => (text, DEFAULT_START_URL.to_string(), Attrs::new()),
            StartCrumb::Link { text, url, attrs } => (
                text.unwrap_or_else(|| DEFAULT_START_TEXT.to_string()),
                url.unwrap_or_else(|| DEFAULT_START_URL.to_string()),
                attrs,
            ),
        };
        Crumb {
            name: text,
            link: Some(url),
            attrs,
            escape,
        }
    }
}

impl From<&str> for StartCrumb {
    fn from(text: &str) -> Self {
        StartCrumb::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrumbListOptions {
    /// Class of the first `li`, `None` to leave it bare
    pub first_class: Option<String>,
    /// Class of the last `li`, `None` to leave it bare
    pub last_class: Option<String>,
    /// Appended to every item but the last
    pub separator: String,
    /// Escape the start crumb's text
    pub escape: bool,
    /// Attributes of the `ul`
    pub attrs: Attrs,
}

impl CrumbListOptions {
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn without_markers(mut self) -> Self {
        self.first_class = None;
        self.last_class = None;
        self
    }
}

impl Default for CrumbListOptions {
    fn default() -> Self {
        Self {
            first_class: Some("first".to_string()),
            last_class: Some("last".to_string()),
            separator: String::new(),
            escape: true,
            attrs: Attrs::new(),
        }
    }
}

impl HtmlHelper {
    /// Append a crumb to the trail
    pub fn add_crumb(
        &mut self,
        name: impl Into<String>,
        link: Option<&str>,
        attrs: Attrs,
    ) -> &mut Self {
        let crumb = Crumb::new(name, link, attrs);
        tracing::trace!(name = %crumb.name, "Added crumb");
        self.crumbs.push(crumb);
        self
    }

    pub fn crumb_trail(&self) -> &[Crumb] {
        &self.crumbs
    }

    fn prepare_crumbs(&self, start: Option<StartCrumb>, escape: bool) -> Vec<Crumb> {
        let mut crumbs = Vec::with_capacity(self.crumbs.len() + 1);
        if let Some(start) = start {
            crumbs.push(start.into_crumb(escape));
        }
        crumbs.extend(self.crumbs.iter().cloned());
        crumbs
    }

    /// Crumbs joined by `separator`, `None` when the trail is empty
    pub fn crumbs(&self, separator: &str, start: Option<StartCrumb>) -> Result<Option<String>> {
        let crumbs = self.prepare_crumbs(start, true);
        if crumbs.is_empty() {
            return Ok(None);
        }

        let parts = crumbs
            .iter()
            .map(|c| c.render(self))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(parts.join(separator)))
    }

    /// Crumbs as a `ul` list, `None` when the trail is empty
    pub fn crumb_list(
        &self,
        options: CrumbListOptions,
        start: Option<StartCrumb>,
    ) -> Result<Option<String>> {
        let crumbs = self.prepare_crumbs(start, options.escape);
        if crumbs.is_empty() {
            return Ok(None);
        }

        let count = crumbs.len();
        let mut items = String::new();
        for (which, crumb) in crumbs.iter().enumerate() {
            let mut content = crumb.render(self)?;

            // A lone crumb without a first class still takes the last class
            let first = options.first_class.as_deref().filter(|_| which == 0);
            let marker = match first {
                Some(class) => Some(class),
                None if which + 1 == count => options.last_class.as_deref(),
                None => None,
            };
            let item_attrs = match marker {
                Some(class) => Attrs::new().with("class", class),
                None => Attrs::new(),
            };

            if !options.separator.is_empty() && which + 1 < count {
                content.push_str(&options.separator);
            }

            let attrs = self.templater().format_attributes(&item_attrs);
            items.push_str(
                &self.format_template("li", &[("content", &content), ("attrs", &attrs)])?,
            );
        }

        let attrs = self.templater().format_attributes(&options.attrs);
        let list = self.format_template("ul", &[("content", &items), ("attrs", &attrs)])?;
        Ok(Some(list))
    }
}
