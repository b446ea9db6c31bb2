//! Candidate expressions offered to the user, innermost first.
//!
//! A candidate keeps only its byte offsets and a handle on the shared `SourceTree`; its text is
//! sliced from the snapshot when asked for, since most candidates are never displayed in full.

use crate::expression::is_candidate;
use crate::position::Range;
use crate::source_tree::SourceTree;
use crate::traversal::shortest_node_path;
use serde::Serialize;
use std::sync::Arc;
use tree_sitter::Node;

#[derive(Clone)]
/// One selectable expression.
pub struct Candidate {
    /// Editor range of the expression, derived once from its node.
    pub selection: Range,
    start: usize,
    end: usize,
    kind: &'static str,
    tree: Arc<SourceTree>,
}

impl Candidate {
    fn new(tree: &Arc<SourceTree>, node: Node<'_>) -> Self {
        Self {
            selection: tree.node_range(node),
            start: node.start_byte(),
            end: node.end_byte(),
            kind: node.kind(),
            tree: Arc::clone(tree),
        }
    }

    #[must_use]
    /// Source text of the expression.
    pub fn text(&self) -> &str {
        self.tree.slice(self.start, self.end)
    }

    #[must_use]
    /// Byte offsets of the expression in the snapshot.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    #[must_use]
    /// Grammar kind of the underlying node.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    #[must_use]
    /// Single-line label: whitespace runs collapse to one space, and anything past `max_width`
    /// characters is cut off with an ellipsis. A zero width disables truncation.
    pub fn label(&self, max_width: usize) -> String {
        let collapsed = self.text().split_whitespace().collect::<Vec<_>>().join(" ");
        if max_width == 0 || collapsed.chars().count() <= max_width {
            return collapsed;
        }
        let mut cut: String = collapsed.chars().take(max_width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }

    #[must_use]
    /// Serialisable view handed to hosts that consume JSON.
    pub fn report(&self) -> CandidateReport<'_> {
        CandidateReport {
            selection_range: self.selection,
            kind: self.kind,
            text: self.text(),
        }
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("selection", &self.selection)
            .field("kind", &self.kind)
            .field("text", &self.text())
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
/// JSON shape of a candidate.
pub struct CandidateReport<'a> {
    /// Editor range to select.
    pub selection_range: Range,
    /// Grammar kind of the expression.
    pub kind: &'a str,
    /// Source text of the expression.
    pub text: &'a str,
}

#[must_use]
/// Enclosing expressions of `query`, innermost first.
///
/// The containing-node path is reversed so the index each node sees in the filter is its
/// distance from the innermost node, which is what the parenthesis rule keys on.
pub fn fetch_candidates(tree: &Arc<SourceTree>, query: Range) -> Vec<Candidate> {
    let path = shortest_node_path(tree, query);

    let candidates: Vec<Candidate> = path
        .iter()
        .rev()
        .enumerate()
        .filter(|&(index, &node)| is_candidate(node, index))
        .map(|(_, &node)| Candidate::new(tree, node))
        .collect();

    log::debug!(
        "{}: {} nodes on path, {} candidates",
        tree.document(),
        path.len(),
        candidates.len()
    );
    candidates
}

#[cfg(test)]
#[path = "tests/candidate.rs"]
mod tests;
