//! Memocheck - flags React components with primitive props that skip memo().
//!
//! Memocheck lints JavaScript/JSX and TSX sources for component declarations
//! whose destructured props all look primitive (a naming heuristic, not type
//! inference) but which are not wrapped in the `memo()` helper. Such
//! components re-render on every parent render even though a shallow prop
//! comparison would be exact.
//!
//! # Architecture
//!
//! The codebase uses tree-sitter for AST-based analysis:
//!
//! - `syntax`: parsing and tagged node-kind classification
//! - `rules`: the `require-memo-primitives` rule and diagnostic types
//! - `engine`: per-file declaration walk and parallel file linting
//! - `config`: optional YAML host configuration
//! - `report`: output formatting (pretty, JSON, SARIF)
//! - `cli`: command-line front end
//!
//! The rule itself is a pure function from a declaration node to at most one
//! diagnostic; all side effects (file I/O, reporting) live in the host
//! layers, so the rule is unit-testable against source snippets alone.

pub mod cli;
pub mod config;
pub mod engine;
pub mod report;
pub mod rules;
pub mod syntax;

pub use config::Config;
pub use engine::Linter;
pub use rules::{Diagnostic, LintOutcome, RuleId, Severity};
pub use syntax::{ParsedFile, SourceLanguage, SyntaxKind};
