//! Bootstrap markup formatter
//!
//! Badge, icon and label are stateless. Grid and nav accumulate into
//! per-instance buffers and are flushed by their render call:
//! ```text
//! Empty
//!   ↓ add / configure (repeated)
//! Accumulating
//!   ↓ render (emits markup)
//! Empty
//! ```
//! Rendering twice in a row therefore yields an empty container the second
//! time.

use bsui_template::{escape_html, Attrs};

use crate::config::HtmlConfig;
use crate::crumbs::{CrumbListOptions, StartCrumb};
use crate::grid::{GridBuffer, GridConfig};
use crate::helper::HtmlHelper;
use crate::nav::{NavBuffer, NavItem};
use crate::options::{BadgeOptions, IconOptions, LabelType};
use crate::Result;

const GRID_TEMPLATES: &[(&str, &str)] = &[
    ("grid", "<div{{attrs}}>{{content}}</div>"),
    ("gridclass", "col-{{type}}-{{size}}"),
    ("gridoffsetclass", "col-{{type}}-offset-{{size}}"),
];

const DEFAULT_NAV_TYPE: &str = "tabs";

#[derive(Debug, Clone)]
pub struct BootstrapHtml {
    html: HtmlHelper,
    icon_set: String,
    grid: GridBuffer,
    navs: NavBuffer,
}

impl BootstrapHtml {
    pub fn new() -> Self {
        Self::from_config(&HtmlConfig::default())
    }

    pub fn from_config(config: &HtmlConfig) -> Self {
        let mut html = HtmlHelper::new();
        html.templater_mut().add(GRID_TEMPLATES.iter().copied());
        html.apply_config(config);

        Self {
            html,
            icon_set: config.icon_set.clone(),
            grid: GridBuffer::new(),
            navs: NavBuffer::new(),
        }
    }

    /// The generic helper underneath
    pub fn html(&self) -> &HtmlHelper {
        &self.html
    }

    pub fn html_mut(&mut self) -> &mut HtmlHelper {
        &mut self.html
    }

    pub fn grid(&self) -> &GridBuffer {
        &self.grid
    }

    pub fn navs(&self) -> &NavBuffer {
        &self.navs
    }

    /// `<span class="badge">text</span>`
    pub fn badge(&self, text: &str, options: BadgeOptions) -> Result<String> {
        let BadgeOptions { tag, escape, attrs } = options;
        let tag = tag.unwrap_or_else(|| "span".to_string());
        let text = if escape {
            escape_html(text)
        } else {
            text.to_string()
        };

        let attrs = attrs.inject_classes(&["badge"]);
        self.html.tag(&tag, Some(text.as_str()), &attrs)
    }

    /// `<i class="glyphicon glyphicon-name"></i>`
    pub fn icon(&self, name: &str, options: IconOptions) -> Result<String> {
        let IconOptions {
            tag,
            icon_set,
            attrs,
        } = options;
        let tag = tag.unwrap_or_else(|| "i".to_string());
        let icon_set = icon_set.unwrap_or_else(|| self.icon_set.clone());

        let classes = [icon_set.clone(), format!("{icon_set}-{name}")];
        let attrs = self
            .html
            .templater()
            .format_attributes(&attrs.inject_classes(&classes));

        self.html
            .format_template("tag", &[("tag", &tag), ("attrs", &attrs)])
    }

    /// `<span class="label label-type">text</span>`
    pub fn label(&self, text: &str, options: impl Into<LabelType>) -> Result<String> {
        let options = options.into().into_options();
        let tag = options.tag.unwrap_or_else(|| "span".to_string());
        let kind = options.kind.unwrap_or_else(|| "default".to_string());
        let text = if options.escape {
            escape_html(text)
        } else {
            text.to_string()
        };

        let classes = ["label".to_string(), format!("label-{kind}")];
        let attrs = options.attrs.inject_classes(&classes);
        self.html.tag(&tag, Some(text.as_str()), &attrs)
    }

    /// Append a crumb to the trail
    pub fn add_crumb(
        &mut self,
        name: impl Into<String>,
        link: Option<&str>,
        attrs: Attrs,
    ) -> &mut Self {
        self.html.add_crumb(name, link, attrs);
        self
    }

    /// Breadcrumb list styled with the `breadcrumb` class
    pub fn crumb_list(
        &self,
        mut options: CrumbListOptions,
        start: Option<StartCrumb>,
    ) -> Result<Option<String>> {
        options.attrs = options.attrs.inject_classes(&["breadcrumb"]);
        self.html.crumb_list(options, start)
    }

    /// Start a new grid cell
    pub fn add_grid_cell(&mut self, content: impl Into<String>) -> &mut Self {
        self.grid.add_cell(content);
        self
    }

    /// Start a new grid cell and configure it in one go
    pub fn add_grid_cell_with(
        &mut self,
        content: impl Into<String>,
        config: GridConfig,
    ) -> &mut Self {
        self.grid.add_cell(content);
        self.grid.configure(config);
        self
    }

    /// Add a breakpoint config to the most recent cell
    pub fn configure_grid_cell(&mut self, config: GridConfig) -> &mut Self {
        self.grid.configure(config);
        self
    }

    /// Emit the accumulated cells inside a `row` and clear the grid.
    ///
    /// The grid is only cleared once the row has rendered; on a template
    /// error the cells stay queued.
    pub fn render_grid(&mut self) -> Result<String> {
        let mut items = String::new();
        for (content, configs) in self.grid.cells() {
            let mut classes = Vec::with_capacity(configs.len());
            for config in configs {
                let size = config.size.to_string();
                classes.push(self.html.format_template(
                    "gridclass",
                    &[("type", &config.breakpoint), ("size", &size)],
                )?);
                if let Some(offset) = &config.offset {
                    let size = offset.size.to_string();
                    classes.push(self.html.format_template(
                        "gridoffsetclass",
                        &[("type", &offset.breakpoint), ("size", &size)],
                    )?);
                }
            }

            let mut attrs = Attrs::new();
            if !classes.is_empty() {
                attrs.set("class", classes);
            }
            let attrs = self.html.templater().format_attributes(&attrs);
            items.push_str(
                &self
                    .html
                    .format_template("grid", &[("attrs", &attrs), ("content", content)])?,
            );
        }

        let row = self
            .html
            .templater()
            .format_attributes(&Attrs::new().with("class", "row"));
        let out = self
            .html
            .format_template("grid", &[("attrs", &row), ("content", &items)])?;

        tracing::debug!(cells = self.grid.len(), "Rendered grid");
        self.grid.clear();
        Ok(out)
    }

    /// Queue a tab header with its pane body
    pub fn add_nav_item(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        class: Option<&str>,
    ) -> &mut Self {
        self.navs.push(NavItem::new(title, content, class));
        self
    }

    /// Queue a prepared nav item, keeping all its attributes on the header
    pub fn push_nav_item(&mut self, item: NavItem) -> &mut Self {
        self.navs.push(item);
        self
    }

    /// Emit queued items as `nav-tabs` plus their panes and clear the queue
    pub fn render_nav(&mut self) -> Result<String> {
        self.render_nav_as(DEFAULT_NAV_TYPE)
    }

    /// Emit queued items as `nav-<kind>` plus their panes and clear the queue
    pub fn render_nav_as(&mut self, kind: &str) -> Result<String> {
        let mut nav_content = String::new();
        let mut tab_content = String::new();
        for item in self.navs.items() {
            let attrs = self.html.templater().format_attributes(&item.attrs);
            nav_content.push_str(
                &self
                    .html
                    .format_template("li", &[("content", &item.title), ("attrs", &attrs)])?,
            );

            let mut pane_classes = vec!["tab-pane".to_string()];
            pane_classes.extend(item.classes());
            tab_content.push_str(&self.html.div(
                &pane_classes,
                Some(item.content.as_str()),
                Attrs::new(),
            )?);
        }

        let nav_attrs = self
            .html
            .templater()
            .format_attributes(&Attrs::new().with("class", format!("nav nav-{kind}")));
        let mut out = self
            .html
            .format_template("ul", &[("content", &nav_content), ("attrs", &nav_attrs)])?;
        out.push_str(&self.html.div(
            &["tab-content"],
            Some(tab_content.as_str()),
            Attrs::new(),
        )?);

        tracing::debug!(items = self.navs.len(), kind, "Rendered nav");
        self.navs.clear();
        Ok(out)
    }
}

impl Default for BootstrapHtml {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridOffset;
    use crate::options::LabelOptions;
    use scraper::{Html, Selector};

    fn classes_of(markup: &str, selector: &str) -> Vec<Option<String>> {
        let doc = Html::parse_fragment(markup);
        let sel = Selector::parse(selector).unwrap();
        doc.select(&sel)
            .map(|el| el.value().attr("class").map(str::to_string))
            .collect()
    }

    fn texts_of(markup: &str, selector: &str) -> Vec<String> {
        let doc = Html::parse_fragment(markup);
        let sel = Selector::parse(selector).unwrap();
        doc.select(&sel)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    #[test]
    fn test_badge() {
        let bs = BootstrapHtml::new();
        assert_eq!(
            bs.badge("foo", BadgeOptions::default()).unwrap(),
            "<span class=\"badge\">foo</span>"
        );
    }

    #[test]
    fn test_badge_tag_and_caller_classes() {
        let bs = BootstrapHtml::new();
        let options = BadgeOptions::default()
            .with_tag("div")
            .with_attrs(Attrs::new().with("id", "count").with("class", "pull-right"));
        assert_eq!(
            bs.badge("42", options).unwrap(),
            "<div id=\"count\" class=\"pull-right badge\">42</div>"
        );
    }

    #[test]
    fn test_badge_escape() {
        let bs = BootstrapHtml::new();
        let options = BadgeOptions {
            escape: true,
            ..BadgeOptions::default()
        };
        assert_eq!(
            bs.badge("<3", options).unwrap(),
            "<span class=\"badge\">&lt;3</span>"
        );
        assert_eq!(
            bs.badge("<b>3</b>", BadgeOptions::default()).unwrap(),
            "<span class=\"badge\"><b>3</b></span>"
        );
    }

    #[test]
    fn test_icon() {
        let bs = BootstrapHtml::new();
        assert_eq!(
            bs.icon("foo", IconOptions::default()).unwrap(),
            "<i class=\"glyphicon glyphicon-foo\"></i>"
        );
        assert_eq!(
            bs.icon("foo", IconOptions::default().with_icon_set("fa"))
                .unwrap(),
            "<i class=\"fa fa-foo\"></i>"
        );
        assert_eq!(
            bs.icon("foo", IconOptions::default().with_tag("span"))
                .unwrap(),
            "<span class=\"glyphicon glyphicon-foo\"></span>"
        );
    }

    #[test]
    fn test_icon_keeps_attributes() {
        let bs = BootstrapHtml::new();
        let options =
            IconOptions::default().with_attrs(Attrs::new().with("aria-hidden", "true"));
        assert_eq!(
            bs.icon("leaf", options).unwrap(),
            "<i aria-hidden=\"true\" class=\"glyphicon glyphicon-leaf\"></i>"
        );
    }

    #[test]
    fn test_icon_set_from_config() {
        let config = HtmlConfig {
            icon_set: "fa".to_string(),
            ..HtmlConfig::default()
        };
        let bs = BootstrapHtml::from_config(&config);
        assert_eq!(
            bs.icon("search", IconOptions::default()).unwrap(),
            "<i class=\"fa fa-search\"></i>"
        );
    }

    #[test]
    fn test_label() {
        let bs = BootstrapHtml::new();
        assert_eq!(
            bs.label("foo", LabelType::default()).unwrap(),
            "<span class=\"label label-default\">foo</span>"
        );
        assert_eq!(
            bs.label("foo", "warning").unwrap(),
            "<span class=\"label label-warning\">foo</span>"
        );
        assert_eq!(
            bs.label("foo", LabelOptions::default().with_kind("custom"))
                .unwrap(),
            "<span class=\"label label-custom\">foo</span>"
        );
    }

    #[test]
    fn test_label_strips_tag_and_type() {
        let bs = BootstrapHtml::new();
        let options = LabelOptions::default()
            .with_tag("strong")
            .with_kind("info")
            .with_attrs(Attrs::new().with("class", "big"));
        assert_eq!(
            bs.label("new", options).unwrap(),
            "<strong class=\"big label label-info\">new</strong>"
        );
    }

    #[test]
    fn test_crumb_list() {
        let mut bs = BootstrapHtml::new();
        let out = bs
            .add_crumb("jadb", None, Attrs::new())
            .add_crumb("admad", None, Attrs::new())
            .add_crumb("joe", None, Attrs::new())
            .crumb_list(CrumbListOptions::default(), None)
            .unwrap()
            .unwrap();

        assert_eq!(
            out,
            "<ul class=\"breadcrumb\"><li class=\"first\">jadb</li><li>admad</li><li class=\"last\">joe</li></ul>"
        );
    }

    #[test]
    fn test_crumb_list_merges_caller_class() {
        let mut bs = BootstrapHtml::new();
        bs.add_crumb("a", Some("/a"), Attrs::new());
        let options =
            CrumbListOptions::default().with_attrs(Attrs::new().with("class", "small"));
        let out = bs.crumb_list(options, None).unwrap().unwrap();
        assert_eq!(
            classes_of(&out, "ul"),
            vec![Some("small breadcrumb".to_string())]
        );
    }

    #[test]
    fn test_crumb_list_empty_trail() {
        let bs = BootstrapHtml::new();
        assert_eq!(
            bs.crumb_list(CrumbListOptions::default(), None).unwrap(),
            None
        );
    }

    #[test]
    fn test_grid() {
        let mut bs = BootstrapHtml::new();
        let out = bs
            .add_grid_cell_with("test 1", GridConfig::sized(3))
            .configure_grid_cell(GridConfig::at("xs", 12))
            .add_grid_cell_with("test 2", GridConfig::sized(9))
            .configure_grid_cell(
                GridConfig::at("xs", 11).with_offset(GridOffset::new("xs", 1)),
            )
            .render_grid()
            .unwrap();

        assert_eq!(
            out,
            "<div class=\"row\">\
             <div class=\"col-md-3 col-xs-12\">test 1</div>\
             <div class=\"col-md-9 col-xs-11 col-xs-offset-1\">test 2</div>\
             </div>"
        );
    }

    #[test]
    fn test_grid_render_flushes() {
        let mut bs = BootstrapHtml::new();
        bs.add_grid_cell_with("a", GridConfig::sized(6));
        let first = bs.render_grid().unwrap();
        let second = bs.render_grid().unwrap();

        assert_ne!(first, second);
        assert_eq!(second, "<div class=\"row\"></div>");
        assert!(bs.grid().is_empty());
        assert_eq!(bs.grid().current_index(), 0);
    }

    #[test]
    fn test_grid_restarts_numbering_after_render() {
        let mut bs = BootstrapHtml::new();
        bs.add_grid_cell_with("old", GridConfig::sized(4));
        bs.render_grid().unwrap();

        let out = bs
            .add_grid_cell_with("new", GridConfig::at("sm", 8))
            .render_grid()
            .unwrap();
        assert_eq!(
            out,
            "<div class=\"row\"><div class=\"col-sm-8\">new</div></div>"
        );
    }

    #[test]
    fn test_grid_cell_without_config() {
        let mut bs = BootstrapHtml::new();
        let out = bs.add_grid_cell("plain").render_grid().unwrap();
        assert_eq!(out, "<div class=\"row\"><div>plain</div></div>");
    }

    #[test]
    fn test_grid_config_before_cell_is_discarded() {
        let mut bs = BootstrapHtml::new();
        let out = bs
            .configure_grid_cell(GridConfig::sized(2))
            .add_grid_cell_with("a", GridConfig::default())
            .render_grid()
            .unwrap();
        assert_eq!(
            out,
            "<div class=\"row\"><div class=\"col-md-12\">a</div></div>"
        );
    }

    #[test]
    fn test_grid_failed_render_keeps_cells() {
        let mut bs = BootstrapHtml::new();
        let source = bs.html().templater().get("gridclass").unwrap().to_string();
        bs.html_mut().templater_mut().remove("gridclass");
        bs.add_grid_cell_with("a", GridConfig::sized(6))
            .add_grid_cell_with("b", GridConfig::at("xs", 4));

        assert!(bs.render_grid().is_err());
        assert_eq!(bs.grid().len(), 2);
        assert_eq!(bs.grid().current_index(), 2);

        bs.html_mut().templater_mut().add([("gridclass", source)]);
        let out = bs.render_grid().unwrap();
        assert_eq!(
            out,
            "<div class=\"row\">\
             <div class=\"col-md-6\">a</div>\
             <div class=\"col-xs-4\">b</div>\
             </div>"
        );
        assert!(bs.grid().is_empty());
    }

    #[test]
    fn test_grid_empty_offset_from_json() {
        let config: GridConfig =
            serde_json::from_str(r#"{"type":"xs","size":11,"offset":{}}"#).unwrap();
        let mut bs = BootstrapHtml::new();
        let out = bs.add_grid_cell_with("a", config).render_grid().unwrap();
        assert_eq!(out, "<div class=\"row\"><div class=\"col-xs-11\">a</div></div>");
    }

    #[test]
    fn test_grid_template_override() {
        let config = HtmlConfig::default()
            .with_template("gridclass", "col-{{type}}{{size}}")
            .with_template("grid", "<section{{attrs}}>{{content}}</section>");
        let mut bs = BootstrapHtml::from_config(&config);
        let out = bs
            .add_grid_cell_with("x", GridConfig::at("lg", 4))
            .render_grid()
            .unwrap();
        assert_eq!(
            out,
            "<section class=\"row\"><section class=\"col-lg4\">x</section></section>"
        );
    }

    #[test]
    fn test_nav() {
        let mut bs = BootstrapHtml::new();
        let out = bs
            .add_nav_item("test 1", "content 1", Some("active"))
            .add_nav_item("test 2", "content 2", Some("disabled"))
            .add_nav_item("test 3", "content 3", None)
            .render_nav()
            .unwrap();

        assert_eq!(
            out,
            "<ul class=\"nav nav-tabs\">\
             <li class=\"active\">test 1</li>\
             <li class=\"disabled\">test 2</li>\
             <li>test 3</li>\
             </ul>\
             <div class=\"tab-content\">\
             <div class=\"tab-pane active\">content 1</div>\
             <div class=\"tab-pane disabled\">content 2</div>\
             <div class=\"tab-pane\">content 3</div>\
             </div>"
        );
    }

    #[test]
    fn test_nav_structure() {
        let mut bs = BootstrapHtml::new();
        let out = bs
            .add_nav_item("Home", "home body", Some("active"))
            .add_nav_item("Profile", "profile body", None)
            .render_nav_as("pills")
            .unwrap();

        assert_eq!(
            classes_of(&out, "ul"),
            vec![Some("nav nav-pills".to_string())]
        );
        assert_eq!(
            classes_of(&out, "ul > li"),
            vec![Some("active".to_string()), None]
        );
        assert_eq!(texts_of(&out, "ul > li"), vec!["Home", "Profile"]);
        assert_eq!(
            classes_of(&out, "div.tab-content > div"),
            vec![
                Some("tab-pane active".to_string()),
                Some("tab-pane".to_string())
            ]
        );
        assert_eq!(
            texts_of(&out, "div.tab-content > div"),
            vec!["home body", "profile body"]
        );
    }

    #[test]
    fn test_nav_render_flushes() {
        let mut bs = BootstrapHtml::new();
        bs.add_nav_item("a", "b", None);
        let first = bs.render_nav().unwrap();
        let second = bs.render_nav().unwrap();

        assert_ne!(first, second);
        assert_eq!(
            second,
            "<ul class=\"nav nav-tabs\"></ul><div class=\"tab-content\"></div>"
        );
        assert!(bs.navs().is_empty());
    }

    #[test]
    fn test_nav_failed_render_keeps_items() {
        let mut bs = BootstrapHtml::new();
        bs.html_mut().templater_mut().remove("ul");
        bs.add_nav_item("a", "b", None);

        assert!(bs.render_nav().is_err());
        assert_eq!(bs.navs().len(), 1);
    }

    #[test]
    fn test_nav_item_attrs_stay_on_header() {
        let mut bs = BootstrapHtml::new();
        let mut item = NavItem::new("t", "c", Some("active"));
        item.attrs.set("role", "presentation");
        let out = bs.push_nav_item(item).render_nav().unwrap();
        assert!(out.contains("<li class=\"active\" role=\"presentation\">t</li>"));
        assert!(out.contains("<div class=\"tab-pane active\">c</div>"));
    }

    #[test]
    fn test_buffers_are_independent() {
        let mut bs = BootstrapHtml::new();
        bs.add_grid_cell_with("cell", GridConfig::sized(12));
        bs.add_nav_item("tab", "pane", None);

        bs.render_nav().unwrap();
        assert_eq!(bs.grid().len(), 1);

        let grid = bs.render_grid().unwrap();
        assert!(grid.contains("cell"));
    }
}
