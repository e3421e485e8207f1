//! The require-memo-primitives rule.
//!
//! A component whose declared props are all primitive values is an exact
//! candidate for `memo()`: a shallow comparison of its props is a complete
//! equality check, so skipping re-renders is always safe. The rule flags
//! component declarations that fit this shape but are not wrapped.
//!
//! "Primitive" is a naming heuristic, not type inference: a destructured
//! prop counts as primitive when its bound local name starts with a
//! lower-case letter and is not the reserved whole-props name `props`.
//! Upper-case names conventionally carry components, so they suppress the
//! rule. A lower-cased prop that actually holds an object (`data`,
//! `options`) is still classified primitive; that false-positive surface is
//! documented behavior, kept deliberately rather than upgraded to type
//! analysis.
//!
//! The rule is a pure predicate: one declaration node in, zero or one
//! diagnostic out, no state across invocations and no fix payload.

use tree_sitter::Node;

use crate::syntax::{ParsedFile, PatternEntry, SyntaxKind};

use super::{Diagnostic, RuleId, Severity};

/// Stable identifier of the rule's single message.
pub const MISSING_MEMO: &str = "missingMemo";

/// Message bound to [`MISSING_MEMO`].
pub const MISSING_MEMO_MESSAGE: &str =
    "Component with primitive props should be wrapped in React.memo";

/// The memoization helper the wrapper check recognizes. Only a call whose
/// callee is this plain identifier counts as wrapped; `React.memo(...)` and
/// aliases do not.
const MEMO_HELPER: &str = "memo";

/// Local name reserved for the whole props object. A destructured binding
/// with this name holds the object itself, never a primitive.
const PROPS_OBJECT_NAME: &str = "props";

/// Evaluate one variable declarator and report at most one finding.
///
/// The pipeline is a chain of guards, each of which turns a mismatch into
/// "no finding". Malformed or unexpected tree shapes fall through the same
/// way; the rule never errors.
pub fn check_declarator(
    parsed: &ParsedFile,
    declarator: Node,
    severity: Severity,
) -> Option<Diagnostic> {
    let init = strip_parens(declarator.child_by_field_name("value")?);
    let component = resolve_component(init)?;

    if !yields_markup(component) {
        return None;
    }

    let pattern = first_param_pattern(component)?;
    if !all_primitive(parsed, pattern) {
        return None;
    }

    // Wrapper check runs against the declaration's outer initializer, not
    // the component function it may contain.
    if is_memo_call(parsed, init) {
        return None;
    }

    Some(Diagnostic {
        rule: RuleId::RequireMemoPrimitives,
        message_id: MISSING_MEMO.to_string(),
        message: MISSING_MEMO_MESSAGE.to_string(),
        file: parsed.path.clone(),
        line: declarator.start_position().row + 1,
        severity,
    })
}

/// Unwrap parentheses (and nothing else - helper calls stay opaque).
fn strip_parens(mut node: Node) -> Node {
    while SyntaxKind::of(node) == SyntaxKind::Parenthesized {
        let inner = node
            .named_children(&mut node.walk())
            .find(|n| n.kind() != "comment");
        match inner {
            Some(n) => node = n,
            None => break,
        }
    }
    node
}

/// Find the candidate component function inside an initializer.
///
/// Either the initializer is itself function-like, or it is a call wrapping
/// one (the wrapper's first argument). The second form is what lets the
/// wrapper check distinguish `memo(fn)` from `somethingElse(fn)`; a call
/// around a non-function resolves to nothing and the rule does not apply.
fn resolve_component(init: Node) -> Option<Node> {
    match SyntaxKind::of(init) {
        SyntaxKind::FunctionLike => Some(init),
        SyntaxKind::CallExpression => {
            let args = init.child_by_field_name("arguments")?;
            let first = args
                .named_children(&mut args.walk())
                .find(|n| n.kind() != "comment")?;
            let first = strip_parens(first);
            (SyntaxKind::of(first) == SyntaxKind::FunctionLike).then_some(first)
        }
        _ => None,
    }
}

/// Does the function body syntactically yield a markup element?
///
/// True when the body is itself markup, or is a block containing a
/// top-level return of markup. Returns buried in branches of other
/// statements are not seen; this is a surface check by design.
fn yields_markup(component: Node) -> bool {
    let Some(body) = component.child_by_field_name("body") else {
        return false;
    };
    let body = strip_parens(body);

    match SyntaxKind::of(body) {
        SyntaxKind::MarkupElement => true,
        SyntaxKind::StatementBlock => body
            .named_children(&mut body.walk())
            .filter(|stmt| SyntaxKind::of(*stmt) == SyntaxKind::ReturnStatement)
            .any(|stmt| {
                return_argument(stmt)
                    .map(|arg| SyntaxKind::of(strip_parens(arg)) == SyntaxKind::MarkupElement)
                    .unwrap_or(false)
            }),
        _ => false,
    }
}

/// The returned expression of a return statement, if any.
fn return_argument(stmt: Node) -> Option<Node> {
    stmt.named_children(&mut stmt.walk())
        .find(|n| n.kind() != "comment")
}

/// First declared parameter when it is a destructuring pattern.
///
/// Any other first-parameter shape (plain identifier, array pattern,
/// default-valued pattern, no parameters at all) disqualifies the
/// declaration entirely. Parameters past the first are never inspected.
fn first_param_pattern(component: Node) -> Option<Node> {
    // A bare single-identifier arrow (`props => ...`) carries its parameter
    // in a dedicated field.
    if let Some(p) = component.child_by_field_name("parameter") {
        return (SyntaxKind::of(p) == SyntaxKind::DestructuringPattern).then_some(p);
    }

    let params = component.child_by_field_name("parameters")?;
    let first = params
        .named_children(&mut params.walk())
        .find(|n| n.kind() != "comment")?;
    let first = unwrap_ts_parameter(first);
    (SyntaxKind::of(first) == SyntaxKind::DestructuringPattern).then_some(first)
}

/// The TSX grammar wraps each parameter in a `required_parameter` /
/// `optional_parameter` node holding the pattern and its type annotation.
fn unwrap_ts_parameter(node: Node) -> Node {
    match node.kind() {
        "required_parameter" | "optional_parameter" => {
            node.child_by_field_name("pattern").unwrap_or(node)
        }
        _ => node,
    }
}

/// Is every binding in the pattern primitive-bound?
///
/// Vacuously true for an empty pattern. Rest elements, defaults, nested
/// patterns and computed keys each make the whole set non-primitive.
fn all_primitive(parsed: &ParsedFile, pattern: Node) -> bool {
    pattern
        .named_children(&mut pattern.walk())
        .filter(|n| n.kind() != "comment")
        .all(|entry| match PatternEntry::of(entry) {
            PatternEntry::Shorthand => primitive_name(parsed.node_text(entry)),
            PatternEntry::KeyValue => {
                let computed_key = entry
                    .child_by_field_name("key")
                    .map(|k| k.kind() == "computed_property_name")
                    .unwrap_or(true);
                if computed_key {
                    return false;
                }
                match entry.child_by_field_name("value") {
                    Some(v) if SyntaxKind::of(v) == SyntaxKind::Identifier => {
                        primitive_name(parsed.node_text(v))
                    }
                    _ => false,
                }
            }
            PatternEntry::Rest | PatternEntry::DefaultValued | PatternEntry::Other => false,
        })
}

/// Name-shape classifier: not upper-cased, not the reserved props name.
/// Matches the original convention where `_` and `$` prefixes pass.
fn primitive_name(name: &str) -> bool {
    if name == PROPS_OBJECT_NAME {
        return false;
    }
    name.chars().next().map(|c| !c.is_uppercase()).unwrap_or(false)
}

/// Is the outer initializer a call to the bare `memo` identifier?
fn is_memo_call(parsed: &ParsedFile, init: Node) -> bool {
    if SyntaxKind::of(init) != SyntaxKind::CallExpression {
        return false;
    }
    init.child_by_field_name("function")
        .map(|callee| {
            SyntaxKind::of(callee) == SyntaxKind::Identifier
                && parsed.node_text(callee) == MEMO_HELPER
        })
        .unwrap_or(false)
}
