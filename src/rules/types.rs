//! Core types for lint diagnostics.

use serde::{Deserialize, Serialize};

/// Severity levels for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// Identifier of a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "require-memo-primitives")]
    RequireMemoPrimitives,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::RequireMemoPrimitives => "require-memo-primitives",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "require-memo-primitives" => Some(RuleId::RequireMemoPrimitives),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static metadata for a rule, used by the SARIF reporter.
pub struct RuleMeta {
    pub id: RuleId,
    /// PascalCase rule name.
    pub name: &'static str,
    /// "suggestion", "problem", or "layout".
    pub kind: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub recommended: bool,
    /// Whether an automatic fix exists. The engine must not offer a
    /// rewrite when this is false.
    pub fixable: bool,
    pub default_severity: Severity,
}

/// Metadata for a rule id.
pub fn meta(id: RuleId) -> RuleMeta {
    match id {
        RuleId::RequireMemoPrimitives => RuleMeta {
            id,
            name: "RequireMemoPrimitives",
            kind: "suggestion",
            category: "Performance",
            description: "Enforce the use of React.memo for components with primitive props",
            recommended: false,
            fixable: false,
            default_severity: Severity::Warning,
        },
    }
}

/// A single reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule: RuleId,
    /// Stable message identifier (e.g. "missingMemo").
    pub message_id: String,
    /// Human-readable message bound to the message id.
    pub message: String,
    pub file: String,
    pub line: usize,
    pub severity: Severity,
}

/// Accumulated result of a lint run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintOutcome {
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files scanned.
    pub scanned: usize,
}

impl LintOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another outcome into this one.
    pub fn merge(&mut self, other: LintOutcome) {
        self.diagnostics.extend(other.diagnostics);
        self.scanned += other.scanned;
    }

    /// Add a diagnostic to the outcome.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Sort diagnostics by file then line for deterministic output.
    /// Needed because files are linted in parallel.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by(|a, b| a.file.cmp(&b.file).then(a.line.cmp(&b.line)));
    }

    /// Whether the run produced no findings.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether any finding carries error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_round_trip() {
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert!("fatal".parse::<Severity>().is_err());
        assert_eq!(Severity::Info.to_string(), "info");
    }

    #[test]
    fn test_rule_id_round_trip() {
        let id = RuleId::RequireMemoPrimitives;
        assert_eq!(RuleId::parse(id.as_str()), Some(id));
        assert_eq!(RuleId::parse("no-such-rule"), None);
    }

    #[test]
    fn test_rule_meta_declares_no_fix() {
        let m = meta(RuleId::RequireMemoPrimitives);
        assert!(!m.fixable);
        assert_eq!(m.kind, "suggestion");
        assert_eq!(m.default_severity, Severity::Warning);
    }

    #[test]
    fn test_outcome_merge_and_sort() {
        let mut a = LintOutcome {
            diagnostics: vec![Diagnostic {
                rule: RuleId::RequireMemoPrimitives,
                message_id: "missingMemo".to_string(),
                message: "m".to_string(),
                file: "b.jsx".to_string(),
                line: 3,
                severity: Severity::Warning,
            }],
            scanned: 1,
        };
        let b = LintOutcome {
            diagnostics: vec![Diagnostic {
                rule: RuleId::RequireMemoPrimitives,
                message_id: "missingMemo".to_string(),
                message: "m".to_string(),
                file: "a.jsx".to_string(),
                line: 7,
                severity: Severity::Warning,
            }],
            scanned: 1,
        };
        a.merge(b);
        a.sort();
        assert_eq!(a.scanned, 2);
        assert_eq!(a.diagnostics[0].file, "a.jsx");
        assert!(!a.has_errors());
        assert!(!a.is_clean());
    }
}
