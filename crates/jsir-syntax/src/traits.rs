//! Traits for syntax readers.

use crate::ast::Program;

/// Error that can occur when reading input into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("expected {expected}, got {got}")]
    UnexpectedNode { expected: String, got: String },

    #[error("invalid ESTree document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A reader turns input text into a [`Program`].
pub trait Reader: Send + Sync {
    /// Format identifier (e.g., "javascript", "estree").
    fn language(&self) -> &'static str;

    /// File extensions this reader handles (e.g., &["js", "mjs"]).
    fn extensions(&self) -> &'static [&'static str];

    /// Read input into a syntax tree.
    fn read(&self, source: &str) -> Result<Program, ReadError>;
}
