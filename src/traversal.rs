//! Shortest chain of syntax nodes containing a query range.

use crate::position::Range;
use crate::source_tree::SourceTree;
use tree_sitter::Node;

#[must_use]
/// Whether a node's half-open byte range covers `[start, end]`.
///
/// Zero-width nodes can still contain a zero-width query sitting on them.
pub fn contains(node: Node<'_>, start: usize, end: usize) -> bool {
    node.start_byte() <= start && end <= node.end_byte()
}

#[must_use]
/// Named nodes containing `query`, outermost first, starting below the root.
///
/// Each node in the path is a child of the one before it, so ranges shrink monotonically. When
/// a cursor sits on the boundary shared by two adjacent siblings both contain it; the earlier
/// sibling wins, which keeps a cursor just after a word on that word.
pub fn shortest_node_path(tree: &SourceTree, query: Range) -> Vec<Node<'_>> {
    let span = tree.byte_range(query);
    let (start, end) = (span.start, span.end);
    log::debug!("query {query} -> bytes {start}..{end}");

    let mut path = Vec::new();
    let mut node = tree.root();
    let mut cursor = node.walk();

    loop {
        let next = node
            .named_children(&mut cursor)
            .take_while(|child| child.start_byte() <= start)
            .find(|&child| contains(child, start, end));
        let Some(child) = next else {
            break;
        };
        log::trace!(
            "  {} {}..{}",
            child.kind(),
            child.start_byte(),
            child.end_byte()
        );
        path.push(child);
        node = child;
    }

    path
}

#[cfg(test)]
#[path = "tests/traversal.rs"]
mod tests;
