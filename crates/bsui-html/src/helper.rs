//! Generic HTML helper
//!
//! Builds tags through the named template registry. Tag bodies are emitted
//! as given; only attribute values (and link titles) are escaped.

use bsui_template::{escape_html, Attrs, StringTemplate};

use crate::config::HtmlConfig;
use crate::crumbs::Crumb;
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct HtmlHelper {
    templater: StringTemplate,
    /// Breadcrumb trail, read but never cleared by the crumb renderers
    pub(crate) crumbs: Vec<Crumb>,
}

impl HtmlHelper {
    pub fn new() -> Self {
        Self::with_templater(StringTemplate::new())
    }

    pub fn with_templater(templater: StringTemplate) -> Self {
        Self {
            templater,
            crumbs: Vec::new(),
        }
    }

    pub fn from_config(config: &HtmlConfig) -> Self {
        let mut helper = Self::new();
        helper.apply_config(config);
        helper
    }

    /// Apply escaping and template overrides from a config
    pub fn apply_config(&mut self, config: &HtmlConfig) {
        self.templater.set_escape(config.escape);
        if !config.templates.is_empty() {
            tracing::debug!(
                overrides = config.templates.len(),
                "Applying template overrides"
            );
            self.templater.add(config.templates.clone());
        }
    }

    pub fn templater(&self) -> &StringTemplate {
        &self.templater
    }

    pub fn templater_mut(&mut self) -> &mut StringTemplate {
        &mut self.templater
    }

    pub fn format_template(&self, name: &str, data: &[(&str, &str)]) -> Result<String> {
        Ok(self.templater.format(name, data)?)
    }

    /// Wrap `text` in `name`; without text only the opening tag is emitted
    pub fn tag(&self, name: &str, text: Option<&str>, attrs: &Attrs) -> Result<String> {
        let attrs = self.templater.format_attributes(attrs);
        match text {
            Some(content) => self.format_template(
                "tag",
                &[("tag", name), ("attrs", &attrs), ("content", content)],
            ),
            None => self.format_template("tagstart", &[("tag", name), ("attrs", &attrs)]),
        }
    }

    /// A `div`, with `class` set when `classes` is non-empty
    pub fn div<S: AsRef<str>>(
        &self,
        classes: &[S],
        text: Option<&str>,
        mut attrs: Attrs,
    ) -> Result<String> {
        let classes: Vec<String> = classes
            .iter()
            .map(|c| c.as_ref().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if !classes.is_empty() {
            attrs.set("class", classes);
        }
        self.tag("div", text, &attrs)
    }

    /// An anchor; the URL is always escaped, the title only when asked
    pub fn link(
        &self,
        title: &str,
        url: &str,
        attrs: &Attrs,
        escape_title: bool,
    ) -> Result<String> {
        let title = if escape_title {
            escape_html(title)
        } else {
            title.to_string()
        };
        let url = escape_html(url);
        let attrs = self.templater.format_attributes(attrs);
        self.format_template(
            "link",
            &[("url", &url), ("attrs", &attrs), ("content", &title)],
        )
    }
}
