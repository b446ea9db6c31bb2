//! Errors surfaced by the parser adapter and the command-line host.
//!
//! Candidate extraction itself never fails; everything here concerns reading the document,
//! loading a grammar, and writing output.

use std::io;

/// Failures that stop a pick before any candidates are produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be read or the terminal could not be driven.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The grammar was built against an ABI this tree-sitter runtime does not support.
    #[error("incompatible grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The document's dialect is not on the allow-list.
    #[error("unsupported dialect for {0}")]
    UnsupportedDialect(String),
    /// tree-sitter returned no tree at all.
    #[error("parser produced no tree for {0}")]
    ParseAborted(String),
    /// Candidate output could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
