//! Error definitions for all `blueprint_typegen` generation stages.

use thiserror::Error;

use crate::reference::ReferenceError;

#[derive(Debug, Error)]
/// Top-level error type returned by public APIs.
pub enum TypegenError {
    /// Input text is not JSON, or a part of it has the wrong shape.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    /// A field reference did not resolve to a usable leaf type token.
    #[error("malformed reference in definition '{definition}', field '{field}': {source}")]
    MalformedReference {
        definition: String,
        field: String,
        #[source]
        source: ReferenceError,
    },
    /// Generator configuration could not be read or is invalid.
    #[error("config error: {0}")]
    ConfigError(String),
    /// Filesystem or stream I/O error from host collaborators.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
