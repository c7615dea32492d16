//! HTML helper error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HtmlError {
    #[error("Template error: {0}")]
    Template(#[from] bsui_template::TemplateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
