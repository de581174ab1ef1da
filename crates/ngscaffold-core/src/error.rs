//! Typed failures surfaced by generators and template loading

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaffoldError {
    #[error("Invalid restrict '{0}': you must use options A, E, or C")]
    InvalidRestrict(String),

    #[error("Invalid template type '{value}'. Expected one of: {expected}")]
    InvalidTemplateType { value: String, expected: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidAnswer { field: String, message: String },

    #[error("Missing required value for '{0}'")]
    MissingField(&'static str),

    #[error("Template '{0}' is not defined")]
    UnknownTemplate(String),

    #[error("Invalid project config: {0}")]
    InvalidConfig(String),
}
