use super::SourceTree;
use crate::dialect::Dialect;
use crate::error::Error;
use crate::position::Position;
use std::path::Path;
use tree_sitter::Node;

fn collect(node: Node<'_>, out: &mut Vec<(String, usize, usize)>) {
    out.push((node.kind().to_string(), node.start_byte(), node.end_byte()));
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, out);
    }
}

#[test]
fn test_dialect_from_extension() {
    assert_eq!(
        Dialect::from_path(Path::new("src/app.ts")),
        Some(Dialect::TypeScript)
    );
    assert_eq!(
        Dialect::from_path(Path::new("View.TSX")),
        Some(Dialect::TypeScriptReact)
    );
    assert_eq!(
        Dialect::from_path(Path::new("index.mjs")),
        Some(Dialect::JavaScript)
    );
    assert_eq!(
        Dialect::from_path(Path::new("App.jsx")),
        Some(Dialect::JavaScriptReact)
    );
    assert_eq!(Dialect::from_path(Path::new("main.rs")), None);
    assert_eq!(Dialect::from_path(Path::new("Makefile")), None);
}

#[test]
fn test_dialect_language_ids_round_trip() {
    for dialect in Dialect::ALL {
        assert_eq!(Dialect::from_language_id(dialect.language_id()), Some(dialect));
    }
    assert_eq!(Dialect::from_language_id("markdown"), None);
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let result = SourceTree::parse("notes.md", "# hi");
    assert!(matches!(result, Err(Error::UnsupportedDialect(doc)) if doc == "notes.md"));
}

#[test]
fn test_parse_is_idempotent() {
    let text = "const total = items.map((x) => x.price * 2).reduce(add, 0);\n";

    let first = SourceTree::parse("a.ts", text).unwrap();
    let second = SourceTree::parse("a.ts", text).unwrap();

    let mut a = Vec::new();
    let mut b = Vec::new();
    collect(first.root(), &mut a);
    collect(second.root(), &mut b);

    assert!(!a.is_empty());
    assert_eq!(a, b, "Same text must produce the same kinds and ranges");
}

#[test]
fn test_invalid_code_still_parses() {
    let tree = SourceTree::parse("broken.js", "foo(1, \nconst = ;").unwrap();

    assert!(tree.root().has_error(), "Errors are recovered, not fatal");
    assert_eq!(tree.root().kind(), "program");
}

#[test]
fn test_node_ranges_use_editor_coordinates() {
    let text = "let s = \"é\";\nlet n = s.length;";
    let tree = SourceTree::parse("a.js", text).unwrap();

    let offset = tree.offset_at(Position::new(1, 8));
    let node = tree
        .root()
        .named_descendant_for_byte_range(offset, offset)
        .unwrap();

    assert_eq!(node.kind(), "identifier");
    assert_eq!(tree.slice(node.start_byte(), node.end_byte()), "s");

    let range = tree.node_range(node);
    assert_eq!(range.start, Position::new(1, 8));
    assert_eq!(range.end, Position::new(1, 9));
    assert_eq!(tree.byte_range(range), node.start_byte()..node.end_byte());
    assert_eq!(tree.position_at(node.start_byte()), range.start);
    // The closing quote follows a two-byte `é` that is one UTF-16 unit.
    assert_eq!(tree.position_at(11), Position::new(0, 10));
}

#[test]
fn test_explicit_dialect_ignores_extension() {
    let tree =
        SourceTree::parse_with("untitled-1", Dialect::TypeScript, "let x: number = 1;").unwrap();

    assert_eq!(tree.dialect(), Dialect::TypeScript);
    assert_eq!(tree.document(), "untitled-1");
    assert!(!tree.root().has_error());
}
