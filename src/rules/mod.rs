//! Lint rules and diagnostic types.

mod require_memo;
mod types;

pub use require_memo::{check_declarator, MISSING_MEMO, MISSING_MEMO_MESSAGE};
pub use types::{meta, Diagnostic, LintOutcome, RuleId, RuleMeta, Severity};
