//! Template error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Cannot find template named '{0}'")]
    UnknownTemplate(String),
}
