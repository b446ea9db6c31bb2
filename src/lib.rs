//! Enclosing-expression selection for brace-delimited languages.
//!
//! Given a document and a cursor or selection, [`candidate::fetch_candidates`] returns the chain
//! of expressions around it, innermost first, so a host can widen the selection one semantic
//! step at a time. The [`picker`] module holds the preview-and-commit state a host drives, and
//! [`ui`] renders it in a terminal.

pub mod candidate;
pub mod config;
pub mod dialect;
pub mod error;
pub mod expression;
pub mod picker;
pub mod position;
pub mod source_tree;
pub mod traversal;
pub mod ui;

pub use dialect::Dialect;
pub use error::{Error, Result};
pub use source_tree::SourceTree;
