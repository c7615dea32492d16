//! Bootstrap UI HTML Helper
//!
//! Emits markup pre-styled for Bootstrap 3 components:
//! - Badges, icons and labels
//! - Breadcrumb lists
//! - Grid rows, accumulated cell by cell then flushed
//! - Tab navigation, accumulated item by item then flushed
//!
//! [`BootstrapHtml`] decorates the generic [`HtmlHelper`], which owns the
//! template registry and the breadcrumb trail.

mod bootstrap;
mod config;
mod crumbs;
mod error;
mod grid;
mod helper;
mod nav;
mod options;

pub use bootstrap::BootstrapHtml;
pub use config::HtmlConfig;
pub use crumbs::{Crumb, CrumbListOptions, StartCrumb};
pub use error::HtmlError;
pub use grid::{GridBuffer, GridConfig, GridOffset};
pub use helper::HtmlHelper;
pub use nav::{NavBuffer, NavItem};
pub use options::{BadgeOptions, IconOptions, LabelOptions, LabelType};

// Re-export the markup layer
pub use bsui_template::{escape_html, AttrValue, Attrs, StringTemplate, TemplateError};

pub type Result<T> = std::result::Result<T, HtmlError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
