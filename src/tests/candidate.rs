use super::fetch_candidates;
use crate::position::{Position, Range};
use crate::source_tree::SourceTree;
use std::sync::Arc;

fn texts(document: &str, text: &str, query: Range) -> Vec<String> {
    let tree = Arc::new(SourceTree::parse(document, text).unwrap());
    fetch_candidates(&tree, query)
        .iter()
        .map(|c| c.text().to_string())
        .collect()
}

fn at(line: u32, character: u32) -> Range {
    Range::cursor(Position::new(line, character))
}

#[test]
fn test_nested_calls_innermost_first() {
    let found = texts("a.js", "foo(bar(1, 2))", at(0, 8));
    assert_eq!(found, vec!["1", "bar(1, 2)", "foo(bar(1, 2))"]);
}

#[test]
fn test_declarator_is_not_a_candidate() {
    // Cursor on `y`: the wrapper is one step out from the innermost node, so it is dropped.
    let found = texts("a.ts", "const x = (y);", at(0, 11));
    assert_eq!(found, vec!["y"]);
}

#[test]
fn test_wrapper_kept_when_cursor_is_on_it() {
    // Cursor on `(`: the wrapper is the innermost node on the path.
    let found = texts("a.ts", "const x = (y);", at(0, 10));
    assert_eq!(found, vec!["(y)"]);
}

#[test]
fn test_redundant_parentheses_around_sum() {
    assert_eq!(texts("a.js", "(a + b)", at(0, 1)), vec!["a", "a + b"]);
    assert_eq!(texts("a.js", "(a + b)", at(0, 0)), vec!["(a + b)"]);
}

#[test]
fn test_double_parentheses_keep_only_inner_at_index_zero() {
    let found = texts("a.js", "((a + b))", at(0, 1));
    assert_eq!(found, vec!["(a + b)"]);
}

#[test]
fn test_range_query_widens_from_selection() {
    let text = "const area = (width + margin * 2) * height;";
    let query = Range::new(Position::new(0, 22), Position::new(0, 32));

    let found = texts("a.ts", text, query);
    assert_eq!(
        found,
        vec![
            "margin * 2",
            "width + margin * 2",
            "(width + margin * 2) * height",
        ]
    );
}

#[test]
fn test_candidates_are_nested_and_round_trip() {
    let text = "const out = items\r\n  .filter((item) => item.ok)\r\n  .map(render);\r\n";
    let tree = Arc::new(SourceTree::parse("a.ts", text).unwrap());
    let candidates = fetch_candidates(&tree, at(1, 21));

    assert!(candidates.len() >= 3, "{candidates:?}");
    for pair in candidates.windows(2) {
        assert!(
            pair[1].selection.contains(&pair[0].selection),
            "{:?} should enclose {:?}",
            pair[1],
            pair[0]
        );
    }
    for candidate in &candidates {
        assert_eq!(tree.byte_range(candidate.selection), candidate.byte_range());
    }
    assert_eq!(candidates[0].text(), "item");
    assert_eq!(candidates.last().unwrap().selection.end, Position::new(2, 14));
}

#[test]
fn test_empty_document_has_no_candidates() {
    assert!(texts("a.js", "", at(0, 0)).is_empty());
}

#[test]
fn test_statement_condition_only_yields_inner_value() {
    assert_eq!(texts("a.js", "if (ready) { go(); }", at(0, 5)), vec!["ready"]);
    assert!(texts("a.js", "if (ready) { go(); }", at(0, 3)).is_empty());
}

#[test]
fn test_jsx_return_wrapper_and_labels() {
    let text = "function View() {\n  return (\n    <div>\n      hi\n    </div>\n  );\n}\n";
    let tree = Arc::new(SourceTree::parse("View.tsx", text).unwrap());

    let on_paren = fetch_candidates(&tree, at(1, 9));
    assert_eq!(on_paren.len(), 1);
    assert_eq!(on_paren[0].kind(), "parenthesized_expression");
    assert_eq!(on_paren[0].label(0), "( <div> hi </div> )");
    assert_eq!(on_paren[0].label(8), "( <div>…");

    let inside = fetch_candidates(&tree, at(2, 6));
    let kinds: Vec<_> = inside.iter().map(super::Candidate::kind).collect();
    assert_eq!(kinds, vec!["jsx_element"]);
    assert_eq!(inside[0].label(80), "<div> hi </div>");
}

#[test]
fn test_broken_code_still_offers_candidates() {
    let found = texts("a.js", "let v = compute(a, b\nlet w = 1;", at(0, 17));
    assert!(found.contains(&"a".to_string()), "{found:?}");
}

#[test]
fn test_report_serialises_selection_range() {
    let tree = Arc::new(SourceTree::parse("a.js", "f(x)").unwrap());
    let candidates = fetch_candidates(&tree, at(0, 2));
    let json = serde_json::to_value(candidates[0].report()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "selectionRange": {
                "start": { "line": 0, "character": 2 },
                "end": { "line": 0, "character": 3 }
            },
            "kind": "identifier",
            "text": "x"
        })
    );
}

#[test]
fn test_binding_cursor_has_no_candidates() {
    assert!(texts("a.js", "function f(x = 1) {}", at(0, 11)).is_empty());
    assert!(texts("a.js", "function f(...rest) {}", at(0, 15)).is_empty());
    assert!(texts("a.js", "const [a, b] = arr;", at(0, 7)).is_empty());
    assert!(texts("a.js", "for (const k of ks) {}", at(0, 11)).is_empty());
}

#[test]
fn test_spread_argument_widens_through_spread() {
    let found = texts("a.js", "foo(...args);", at(0, 8));
    assert_eq!(found, vec!["args", "...args", "foo(...args)"]);
}

#[test]
fn test_member_property_is_offered_before_access() {
    assert_eq!(texts("a.js", "obj.prop;", at(0, 5)), vec!["prop", "obj.prop"]);
}

#[test]
fn test_syntax_literals_are_skipped() {
    assert!(texts("a.js", "import x from \"mod\";", at(0, 16)).is_empty());
    assert!(texts("a.ts", "type T = \"lit\";", at(0, 11)).is_empty());
    assert_eq!(
        texts("a.js", "const o = {\"key\": 1};", at(0, 13)),
        vec!["{\"key\": 1}"]
    );
    assert_eq!(
        texts("a.jsx", "const e = <a href=\"x\" />;", at(0, 19)),
        vec!["<a href=\"x\" />"]
    );
}
