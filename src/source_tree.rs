//! Parser adapter: one immutable tree-sitter parse of one text snapshot.
//!
//! A `SourceTree` owns the text it was built from, the syntax tree, and the line index over that
//! text, so any node handed out by the tree can be turned back into editor coordinates or text
//! for as long as the tree is alive. tree-sitter recovers from syntax errors, so parsing a
//! half-typed document still yields a tree; broken regions show up as `ERROR` nodes.

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::position::{LineIndex, Position, Range};
use std::ops;
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Immutable parse of a document at one point in time.
pub struct SourceTree {
    document: String,
    dialect: Dialect,
    text: String,
    tree: Tree,
    lines: LineIndex,
}

impl SourceTree {
    /// Parses `text`, choosing the grammar from the extension of `document`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDialect`] if the extension is not on the allow-list, and
    /// propagates the errors of [`SourceTree::parse_with`].
    pub fn parse(document: &str, text: impl Into<String>) -> Result<Self> {
        let dialect = Dialect::from_path(Path::new(document))
            .ok_or_else(|| Error::UnsupportedDialect(document.to_string()))?;
        Self::parse_with(document, dialect, text)
    }

    /// Parses `text` with an explicit dialect. `document` is only used in diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded into the parser or if tree-sitter
    /// gives up without producing a tree.
    pub fn parse_with(document: &str, dialect: Dialect, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let mut parser = Parser::new();
        parser.set_language(&dialect.language())?;

        let tree = parser
            .parse(&text, None)
            .ok_or_else(|| Error::ParseAborted(document.to_string()))?;

        if tree.root_node().has_error() {
            log::debug!("{document}: parsed with syntax errors, using best-effort tree");
        }
        log::trace!("{document}: {}", tree.root_node().to_sexp());

        let lines = LineIndex::new(&text);
        Ok(Self {
            document: document.to_string(),
            dialect,
            text,
            tree,
            lines,
        })
    }

    #[must_use]
    /// Identifier the tree was parsed under.
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    /// Dialect whose grammar produced the tree.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[must_use]
    /// The text snapshot the tree was parsed from.
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    /// Root node of the syntax tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    #[must_use]
    /// Line index over the snapshot.
    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }

    #[must_use]
    /// Byte offset of an editor position, clamped into the text.
    pub fn offset_at(&self, position: Position) -> usize {
        self.lines.offset(&self.text, position)
    }

    #[must_use]
    /// Editor position of a byte offset.
    pub fn position_at(&self, offset: usize) -> Position {
        self.lines.position(&self.text, offset)
    }

    #[must_use]
    /// Byte offsets covered by an editor range.
    pub fn byte_range(&self, range: Range) -> ops::Range<usize> {
        self.lines.byte_range(&self.text, range)
    }

    #[must_use]
    /// Editor range covered by a node.
    pub fn node_range(&self, node: Node<'_>) -> Range {
        self.lines.range(&self.text, node.start_byte(), node.end_byte())
    }

    #[must_use]
    /// Text between two byte offsets, or an empty string if they do not address the snapshot.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        self.text.get(start..end).unwrap_or_default()
    }
}

impl std::fmt::Debug for SourceTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceTree")
            .field("document", &self.document)
            .field("dialect", &self.dialect)
            .field("len", &self.text.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/source_tree.rs"]
mod tests;
