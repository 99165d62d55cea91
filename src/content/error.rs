//! Document parsing error types.

use thiserror::Error;

/// Errors raised while parsing a single content document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed front matter: {0}")]
    MalformedMetadata(String),

    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),

    #[error("invalid value for `{field}`: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}
