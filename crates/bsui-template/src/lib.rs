//! Bootstrap UI Templates
//!
//! The markup layer every helper renders through:
//! - Named string templates with `{{token}}` placeholders
//! - An insertion-ordered attribute bag
//! - Attribute formatting and HTML escaping

mod attrs;
mod error;
mod escape;
mod template;

pub use attrs::{AttrValue, Attrs};
pub use error::TemplateError;
pub use escape::escape_html;
pub use template::StringTemplate;

pub type Result<T> = std::result::Result<T, TemplateError>;
