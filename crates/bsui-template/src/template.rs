//! Named string templates
//!
//! A template is plain markup with `{{token}}` placeholders:
//! ```text
//! <{{tag}}{{attrs}}>{{content}}</{{tag}}>
//! ```
//! Templates are compiled into literal/token segments when registered, so
//! formatting is a single pass over the segments.

use std::collections::HashMap;

use crate::attrs::{AttrValue, Attrs};
use crate::error::TemplateError;
use crate::escape::escape_html;
use crate::Result;

const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("tag", "<{{tag}}{{attrs}}>{{content}}</{{tag}}>"),
    ("tagstart", "<{{tag}}{{attrs}}>"),
    ("tagend", "</{{tag}}>"),
    ("tagselfclosing", "<{{tag}}{{attrs}}/>"),
    ("link", "<a href=\"{{url}}\"{{attrs}}>{{content}}</a>"),
    ("ul", "<ul{{attrs}}>{{content}}</ul>"),
    ("ol", "<ol{{attrs}}>{{content}}</ol>"),
    ("li", "<li{{attrs}}>{{content}}</li>"),
    ("para", "<p{{attrs}}>{{content}}</p>"),
];

/// Minimized attributes: rendered as `name="name"` when truthy, dropped otherwise
const COMPACT_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "compact",
    "controls",
    "declare",
    "default",
    "defaultchecked",
    "defaultmuted",
    "defaultselected",
    "defer",
    "disabled",
    "enabled",
    "formnovalidate",
    "hidden",
    "indeterminate",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nohref",
    "noresize",
    "noshade",
    "novalidate",
    "nowrap",
    "open",
    "pauseonexit",
    "readonly",
    "required",
    "reversed",
    "scoped",
    "seamless",
    "selected",
    "sortable",
    "truespeed",
    "typemustmatch",
    "visible",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Token(String),
}

#[derive(Debug, Clone)]
struct Compiled {
    source: String,
    segments: Vec<Segment>,
}

impl Compiled {
    fn new(source: String) -> Self {
        let segments = compile(&source);
        Self { source, segments }
    }
}

/// Registry of named templates plus the attribute formatter.
#[derive(Debug, Clone)]
pub struct StringTemplate {
    templates: HashMap<String, Compiled>,
    /// Escape attribute values when formatting
    escape: bool,
}

impl StringTemplate {
    /// Registry preloaded with the default tag templates
    pub fn new() -> Self {
        let mut templater = Self::empty();
        templater.add(DEFAULT_TEMPLATES.iter().copied());
        templater
    }

    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
            escape: true,
        }
    }

    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub fn set_escape(&mut self, escape: bool) {
        self.escape = escape;
    }

    /// Register templates, replacing any existing ones with the same name
    pub fn add<I, K, V>(&mut self, templates: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, source) in templates {
            let name = name.into();
            let compiled = Compiled::new(source.into());
            tracing::trace!(template = %name, source = %compiled.source, "Registered template");
            self.templates.insert(name, compiled);
        }
        self
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.templates.remove(name).is_some()
    }

    /// Raw source of a registered template
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(|c| c.source.as_str())
    }

    /// Substitute `data` into the named template.
    ///
    /// Tokens without a matching entry in `data` render as empty strings.
    pub fn format(&self, name: &str, data: &[(&str, &str)]) -> Result<String> {
        let compiled = self
            .templates
            .get(name)
            .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))?;

        let mut out = String::with_capacity(compiled.source.len());
        for segment in &compiled.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token(token) => {
                    if let Some((_, value)) = data.iter().find(|(k, _)| *k == token.as_str()) {
                        out.push_str(value);
                    }
                }
            }
        }
        Ok(out)
    }

    /// Render an attribute bag as ` key="value" key2="value2"`.
    ///
    /// Returns an empty string when nothing renders, otherwise the result
    /// starts with a single space so it can sit right after the tag name.
    pub fn format_attributes(&self, attrs: &Attrs) -> String {
        let rendered: Vec<String> = attrs
            .iter()
            .filter_map(|(key, value)| format_attribute(key, value, self.escape))
            .collect();

        if rendered.is_empty() {
            String::new()
        } else {
            format!(" {}", rendered.join(" "))
        }
    }
}

impl Default for StringTemplate {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = source;

    while let Some(open) = rest.find("{{") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            break;
        };
        let token = &after_open[..close];
        if is_token_name(token) {
            literal.push_str(&rest[..open]);
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Token(token.to_string()));
        } else {
            literal.push_str(&rest[..open + 2]);
            rest = after_open;
            continue;
        }
        rest = &after_open[close + 2..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

fn is_token_name(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
}

fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '-')
}

fn format_attribute(key: &str, value: &AttrValue, escape: bool) -> Option<String> {
    let name = if is_plain_key(key) {
        key.to_string()
    } else {
        escape_html(key)
    };

    if COMPACT_ATTRIBUTES.contains(&key) {
        let truthy = match value {
            AttrValue::Bool(b) => *b,
            AttrValue::Int(n) => *n == 1,
            AttrValue::Text(s) => s == "1" || s == "true" || s == key,
            AttrValue::List(_) => false,
        };
        return truthy.then(|| format!("{name}=\"{name}\""));
    }

    if let AttrValue::Bool(false) = value {
        return None;
    }

    let rendered = value.render();
    let rendered = if escape {
        escape_html(&rendered)
    } else {
        rendered
    };
    Some(format!("{name}=\"{rendered}\""))
}
