//! Tagged classification of raw tree-sitter node kinds.
//!
//! The rule never matches on raw kind strings directly. Instead every guard
//! dispatches over a closed variant set; any kind the set does not name
//! falls to the default arm and reads as "not applicable". That keeps the
//! rule fail-open: an unexpected tree shape can only suppress a finding,
//! never raise an error.

/// Node kinds the rule's guards care about.
///
/// The JavaScript and TSX grammars agree on these kind names, so a single
/// mapping covers both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    /// A callable expression: arrow function or function expression.
    FunctionLike,
    /// A JSX element, including the self-closing form.
    MarkupElement,
    ReturnStatement,
    StatementBlock,
    /// An object destructuring pattern.
    DestructuringPattern,
    CallExpression,
    Identifier,
    /// A parenthesized expression. ESTree-style tooling never sees these
    /// (the parser erases them); tree-sitter keeps them, so guards strip
    /// them before classifying.
    Parenthesized,
    /// Everything else. Guards treat this as "rule does not apply".
    Other,
}

impl SyntaxKind {
    /// Classify a tree-sitter node.
    pub fn of(node: tree_sitter::Node) -> Self {
        Self::from_raw(node.kind())
    }

    /// Classify a raw tree-sitter kind string.
    pub fn from_raw(kind: &str) -> Self {
        match kind {
            "arrow_function" | "function_expression" => SyntaxKind::FunctionLike,
            "jsx_element" | "jsx_self_closing_element" => SyntaxKind::MarkupElement,
            "return_statement" => SyntaxKind::ReturnStatement,
            "statement_block" => SyntaxKind::StatementBlock,
            "object_pattern" => SyntaxKind::DestructuringPattern,
            "call_expression" => SyntaxKind::CallExpression,
            "identifier" => SyntaxKind::Identifier,
            "parenthesized_expression" => SyntaxKind::Parenthesized,
            _ => SyntaxKind::Other,
        }
    }
}

/// One entry of an object destructuring pattern.
///
/// Only `Shorthand` and `KeyValue` entries can classify as primitive-bound;
/// every other form makes the whole property set non-primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternEntry {
    /// `{ id }` - the key doubles as the bound local name.
    Shorthand,
    /// `{ id: rowId }` - explicit key and bound value.
    KeyValue,
    /// `{ ...rest }`
    Rest,
    /// `{ id = 1 }` - binding with a default value.
    DefaultValued,
    Other,
}

impl PatternEntry {
    /// Classify a child node of an `object_pattern`.
    pub fn of(node: tree_sitter::Node) -> Self {
        Self::from_raw(node.kind())
    }

    /// Classify a raw tree-sitter kind string.
    pub fn from_raw(kind: &str) -> Self {
        match kind {
            "shorthand_property_identifier_pattern" => PatternEntry::Shorthand,
            "pair_pattern" => PatternEntry::KeyValue,
            "rest_pattern" => PatternEntry::Rest,
            "object_assignment_pattern" => PatternEntry::DefaultValued,
            _ => PatternEntry::Other,
        }
    }
}
