//! Which syntax nodes count as "select this whole expression" targets.
//!
//! The TypeScript grammar extends the JavaScript one, so a single kind table covers every
//! dialect; kinds that only exist in TypeScript simply never occur in JavaScript trees.

use tree_sitter::Node;

/// Named node kinds that produce a value.
const EXPRESSION_KINDS: &[&str] = &[
    "array",
    "arrow_function",
    "as_expression",
    "assignment_expression",
    "augmented_assignment_expression",
    "await_expression",
    "binary_expression",
    "call_expression",
    "class",
    "false",
    "function_expression",
    "generator_function",
    "identifier",
    "instantiation_expression",
    "jsx_element",
    "jsx_self_closing_element",
    "member_expression",
    "meta_property",
    "new_expression",
    "non_null_expression",
    "null",
    "number",
    "object",
    "parenthesized_expression",
    "regex",
    "satisfies_expression",
    "sequence_expression",
    "spread_element",
    "string",
    "subscript_expression",
    "super",
    "template_string",
    "ternary_expression",
    "this",
    "true",
    "type_assertion",
    "unary_expression",
    "undefined",
    "update_expression",
    "yield_expression",
];

/// Grouping construct whose only role is to wrap one expression.
const PARENTHESIZED: &str = "parenthesized_expression";

/// Fields under which an identifier introduces a binding rather than reading a value.
const BINDING_FIELDS: &[&str] = &["name", "pattern", "parameter", "label"];

/// Parents whose bare identifier children are bindings.
const BINDING_PARENTS: &[&str] = &["formal_parameters", "import_clause", "namespace_import"];

/// Destructuring shapes; an identifier nested in them binds when the outermost one does.
const PATTERNS: &[&str] = &["array_pattern", "object_pattern", "rest_pattern"];

/// Kinds that are plain syntax rather than values when they spell a module path, a property
/// key or a type. Negative number types are spelled as `unary_expression`.
const LITERALS: &[&str] = &[
    "string",
    "number",
    "true",
    "false",
    "null",
    "undefined",
    "unary_expression",
];

/// Parents under which a literal is part of a type or markup rather than a value.
const LITERAL_SYNTAX_PARENTS: &[&str] = &["literal_type", "jsx_attribute"];

/// Fields that hold a literal as syntax: module sources and property keys.
const LITERAL_SYNTAX_FIELDS: &[&str] = &["source", "key"];

/// Statement clauses the grammar spells as a parenthesized node although they are plain syntax.
const STATEMENT_CLAUSES: &[(&str, &str)] = &[
    ("if_statement", "condition"),
    ("while_statement", "condition"),
    ("do_statement", "condition"),
    ("switch_statement", "value"),
    ("with_statement", "object"),
];

#[must_use]
/// Whether `node` is a value-producing expression.
pub fn is_expression(node: Node<'_>) -> bool {
    if !node.is_named() {
        return false;
    }
    match node.kind() {
        "identifier" => !is_binding(node),
        "property_identifier" | "private_property_identifier" => is_member_property(node),
        PARENTHESIZED => !is_statement_clause(node),
        kind if LITERALS.contains(&kind) => is_literal_value(node),
        kind => EXPRESSION_KINDS.contains(&kind),
    }
}

#[must_use]
/// Whether `node` is a parenthesized wrapper.
pub fn is_parenthesized(node: Node<'_>) -> bool {
    node.kind() == PARENTHESIZED
}

#[must_use]
/// Filter applied to the innermost-first node path.
///
/// Parentheses add nothing over the expression they wrap, so a parenthesized node is only kept
/// when it is the innermost node of the path. That is the case when the cursor sits on the
/// parentheses themselves, e.g. around a multi-line JSX value in `return ( ... )`.
pub fn is_candidate(node: Node<'_>, index: usize) -> bool {
    (index == 0 || !is_parenthesized(node)) && is_expression(node)
}

/// An identifier binds when it, or the destructuring pattern it sits in, fills a declaring slot.
/// Default values inside a pattern are read, so only the `left` of a defaulted entry climbs.
fn is_binding(node: Node<'_>) -> bool {
    let mut node = node;
    loop {
        let Some(parent) = node.parent() else {
            return false;
        };
        if BINDING_PARENTS.contains(&parent.kind()) {
            return true;
        }
        let field = field_name(node);
        if !extends_pattern(parent, field) {
            // `for (const k of ks)` declares `k`; `for (k of ks)` assigns to an existing one.
            if parent.kind() == "for_in_statement" && field == Some("left") {
                return parent.child_by_field_name("kind").is_some();
            }
            return field.is_some_and(|field| BINDING_FIELDS.contains(&field));
        }
        node = parent;
    }
}

fn extends_pattern(parent: Node<'_>, field: Option<&str>) -> bool {
    PATTERNS.contains(&parent.kind())
        || matches!(
            (parent.kind(), field),
            ("assignment_pattern" | "object_assignment_pattern", Some("left"))
                | ("pair_pattern", Some("value"))
        )
}

fn is_member_property(node: Node<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| parent.kind() == "member_expression")
        && field_name(node) == Some("property")
}

fn is_literal_value(node: Node<'_>) -> bool {
    let Some(parent) = node.parent() else {
        return true;
    };
    if LITERAL_SYNTAX_PARENTS.contains(&parent.kind()) {
        return false;
    }
    !field_name(node).is_some_and(|field| {
        LITERAL_SYNTAX_FIELDS.contains(&field) || BINDING_FIELDS.contains(&field)
    })
}

fn is_statement_clause(node: Node<'_>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    let Some(field) = field_name(node) else {
        return false;
    };
    STATEMENT_CLAUSES
        .iter()
        .any(|&(kind, clause)| parent.kind() == kind && field == clause)
}

/// Name of the field `node` occupies in its parent, if any.
fn field_name(node: Node<'_>) -> Option<&'static str> {
    let parent = node.parent()?;
    let mut cursor = parent.walk();
    if !cursor.goto_first_child() {
        return None;
    }
    loop {
        if cursor.node().id() == node.id() {
            return cursor.field_name();
        }
        if !cursor.goto_next_sibling() {
            return None;
        }
    }
}

#[cfg(test)]
#[path = "tests/expression.rs"]
mod tests;
