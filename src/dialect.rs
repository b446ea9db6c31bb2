//! Grammar dialects the expression picker understands.
//!
//! Only brace-delimited languages with expression grammars are supported, plus their component
//! markup variants. A dialect is chosen either from an editor language identifier or from the
//! document's file extension, and yields the tree-sitter grammar that parses it.

use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// One entry of the supported dialect allow-list.
pub enum Dialect {
    /// `.ts`, `.mts`, `.cts`
    TypeScript,
    /// `.tsx`
    TypeScriptReact,
    /// `.js`, `.mjs`, `.cjs`
    JavaScript,
    /// `.jsx`
    JavaScriptReact,
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: [Self; 4] = [
        Self::TypeScript,
        Self::TypeScriptReact,
        Self::JavaScript,
        Self::JavaScriptReact,
    ];

    #[must_use]
    /// Editor language identifier for this dialect.
    pub const fn language_id(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::TypeScriptReact => "typescriptreact",
            Self::JavaScript => "javascript",
            Self::JavaScriptReact => "javascriptreact",
        }
    }

    #[must_use]
    /// Looks up a dialect by editor language identifier.
    pub fn from_language_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.language_id() == id)
    }

    #[must_use]
    /// Picks the dialect from a file name's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::TypeScriptReact),
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::JavaScriptReact),
            _ => None,
        }
    }

    #[must_use]
    /// The tree-sitter grammar for this dialect.
    ///
    /// The JavaScript grammar already accepts JSX, so both JavaScript dialects share it.
    pub fn language(self) -> tree_sitter::Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::TypeScriptReact => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::JavaScript | Self::JavaScriptReact => tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.language_id())
    }
}
