//! Index error types.

use thiserror::Error;

/// Structural violations across the whole collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("duplicate document path `{0}`")]
    DuplicatePath(String),
}

/// A query named a document that is not in the index.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no document at path `{0}`")]
pub struct NotFoundError(pub String);
