//! Error types for proposal card rendering
//!
//! A card is either rendered whole or not at all, so every failure
//! surfaces to the caller as a single `RenderError`.

use thiserror::Error;

/// Top-level render error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A required view-model field was absent (or `null`)
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Input was present but could not be decoded (wrong type, negative count, ...)
    #[error("Invalid proposal input: {0}")]
    InvalidInput(String),

    /// Identifier cannot be embedded in an element id
    #[error("Invalid identifier '{0}': expected non-empty [A-Za-z0-9_:.-]")]
    InvalidIdentifier(String),

    /// Two cards in one list render share an identifier
    #[error("Duplicate identifier in card list: {0}")]
    DuplicateIdentifier(String),

    /// Card configuration document could not be parsed
    #[error("Invalid card configuration: {0}")]
    Config(String),

    /// Template failed to compile or render (indicates a bug)
    #[error("Template error: {0}")]
    Template(String),
}

impl From<mustache::Error> for RenderError {
    fn from(err: mustache::Error) -> Self {
        RenderError::Template(err.to_string())
    }
}
