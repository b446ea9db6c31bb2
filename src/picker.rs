//! Preview-and-commit state for choosing among candidates.
//!
//! The picker never touches a terminal. A host moves focus with [`Picker::focus_next`] and
//! [`Picker::focus_previous`], shows [`Picker::selection`] as the live selection, and finishes
//! with [`Picker::accept`] or [`Picker::cancel`]:
//!
//! ```text
//! open -> first candidate focused
//!   next/previous -> focus moves, selection previews the focused candidate
//!   previous on first -> no focus, selection reverts to the initial range
//!   accept -> Accepted(previewed range)
//!   cancel -> Cancelled(initial range)
//! ```

use crate::candidate::Candidate;
use crate::position::Range;
use crate::source_tree::SourceTree;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "selection", rename_all = "lowercase")]
/// How the picker was closed and which range the editor should end up with.
pub enum Outcome {
    /// The user committed the previewed range.
    Accepted(Range),
    /// The user backed out; the initial range is restored.
    Cancelled(Range),
}

impl Outcome {
    #[must_use]
    /// The range to leave selected.
    pub fn selection(&self) -> Range {
        match self {
            Self::Accepted(range) | Self::Cancelled(range) => *range,
        }
    }
}

/// Candidate list with a movable focus and the selection it implies.
pub struct Picker {
    tree: Arc<SourceTree>,
    candidates: Vec<Candidate>,
    labels: Vec<String>,
    active: Option<usize>,
    initial: Range,
}

impl Picker {
    #[must_use]
    /// Opens a picker over `candidates`, focusing the first one if there is any.
    pub fn new(
        tree: Arc<SourceTree>,
        candidates: Vec<Candidate>,
        initial: Range,
        max_label_width: usize,
    ) -> Self {
        let labels = candidates
            .iter()
            .map(|c| c.label(max_label_width))
            .collect();
        let active = if candidates.is_empty() { None } else { Some(0) };
        Self {
            tree,
            candidates,
            labels,
            active,
            initial,
        }
    }

    #[must_use]
    /// Snapshot the candidates were extracted from.
    pub fn tree(&self) -> &SourceTree {
        &self.tree
    }

    #[must_use]
    /// Candidates in display order, innermost first.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    /// Whitespace-collapsed labels, one per candidate.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    /// Index of the focused candidate, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    /// The range the editor was showing when the picker opened.
    pub fn initial(&self) -> Range {
        self.initial
    }

    #[must_use]
    /// Range to preview: the focused candidate's, or the initial one without focus.
    pub fn selection(&self) -> Range {
        self.active
            .and_then(|i| self.candidates.get(i))
            .map_or(self.initial, |c| c.selection)
    }

    /// Focuses the next wider candidate, staying on the last one.
    pub fn focus_next(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        let last = self.candidates.len() - 1;
        self.active = Some(self.active.map_or(0, |i| (i + 1).min(last)));
    }

    /// Focuses the next narrower candidate; moving above the first clears focus.
    pub fn focus_previous(&mut self) {
        self.active = match self.active {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    #[must_use]
    /// Commits whatever is currently previewed.
    pub fn accept(&self) -> Outcome {
        Outcome::Accepted(self.selection())
    }

    #[must_use]
    /// Abandons the pick and restores the initial range.
    pub fn cancel(&self) -> Outcome {
        Outcome::Cancelled(self.initial)
    }
}

#[cfg(test)]
#[path = "tests/picker.rs"]
mod tests;
