//! Lint engine: walks parsed trees and drives the rule over file sets.
//!
//! The walker offers every variable declarator to the rule in document
//! order. Files are independent - the rule keeps no cross-invocation state -
//! so file sets are linted in parallel and the merged outcome is sorted for
//! deterministic output.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use streaming_iterator::StreamingIterator;
use tree_sitter::QueryCursor;

use crate::config::Config;
use crate::rules::{self, Diagnostic, LintOutcome, Severity};
use crate::syntax::{self, ParsedFile, SourceLanguage};

/// Run the rule over every declarator in a parsed file.
///
/// Diagnostics come back in document order.
pub fn check_file(parsed: &ParsedFile, severity: Severity) -> Vec<Diagnostic> {
    let query = parsed.language.declarator_query();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, parsed.root(), &parsed.source[..]);

    let mut diagnostics = Vec::new();
    while let Some(m) = matches.next() {
        for capture in m.captures {
            if let Some(d) = rules::check_declarator(parsed, capture.node, severity) {
                diagnostics.push(d);
            }
        }
    }
    diagnostics
}

/// Lints files and source buffers.
pub struct Linter {
    severity: Severity,
}

impl Linter {
    /// Create a linter from host configuration.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            severity: config.severity()?,
        })
    }

    /// Lint a source buffer in the given language.
    pub fn lint_source(
        &self,
        language: SourceLanguage,
        path: &Path,
        source: &[u8],
    ) -> anyhow::Result<Vec<Diagnostic>> {
        let parsed = syntax::parse(language, path, source)?;
        Ok(check_file(&parsed, self.severity))
    }

    /// Lint a single file. Files with unsupported extensions are skipped
    /// and do not count as scanned.
    pub fn lint_file(&self, path: &Path) -> anyhow::Result<LintOutcome> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let Some(language) = SourceLanguage::from_extension(ext) else {
            return Ok(LintOutcome::new());
        };

        let source = std::fs::read(path)?;
        let diagnostics = self.lint_source(language, path, &source)?;
        Ok(LintOutcome {
            diagnostics,
            scanned: 1,
        })
    }

    /// Lint a set of files in parallel.
    ///
    /// Unreadable or unparseable files are reported to stderr and skipped;
    /// one bad file never aborts the run.
    pub fn lint_files(&self, files: &[PathBuf]) -> LintOutcome {
        let results: Vec<_> = files
            .par_iter()
            .map(|p| (p, self.lint_file(p)))
            .collect();

        let mut outcome = LintOutcome::new();
        for (path, result) in results {
            match result {
                Ok(file_outcome) => outcome.merge(file_outcome),
                Err(e) => {
                    eprintln!("Warning: skipping {}: {}", path.display(), e);
                }
            }
        }

        outcome.sort();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn linter() -> Linter {
        Linter::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_lint_file_counts_scanned() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("row.jsx");
        std::fs::write(&file, "const Row = ({ id }) => <li>{id}</li>;\n").unwrap();

        let outcome = linter().lint_file(&file).unwrap();
        assert_eq!(outcome.scanned, 1);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.diagnostics[0].file.ends_with("row.jsx"));
    }

    #[test]
    fn test_unsupported_extension_skipped() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("main.go");
        std::fs::write(&file, "package main\n").unwrap();

        let outcome = linter().lint_file(&file).unwrap();
        assert_eq!(outcome.scanned, 0);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_broken_file_fails_open() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("broken.jsx");
        std::fs::write(&file, "const = ) => {\n").unwrap();

        let outcome = linter().lint_file(&file).unwrap();
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_lint_files_sorted_and_merged() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.jsx");
        let b = temp.path().join("b.jsx");
        std::fs::write(&a, "const Cell = ({ value }) => <td>{value}</td>;\n").unwrap();
        std::fs::write(&b, "const Row = ({ id }) => <li>{id}</li>;\n").unwrap();

        // Pass in reverse order; output must still be sorted by file.
        let outcome = linter().lint_files(&[b, a]);
        assert_eq!(outcome.scanned, 2);
        assert_eq!(outcome.diagnostics.len(), 2);
        assert!(outcome.diagnostics[0].file.ends_with("a.jsx"));
        assert!(outcome.diagnostics[1].file.ends_with("b.jsx"));
    }

    #[test]
    fn test_missing_file_does_not_abort_run() {
        let temp = TempDir::new().unwrap();
        let present = temp.path().join("row.jsx");
        std::fs::write(&present, "const Row = ({ id }) => <li>{id}</li>;\n").unwrap();
        let missing = temp.path().join("gone.jsx");

        let outcome = linter().lint_files(&[missing, present]);
        assert_eq!(outcome.scanned, 1);
        assert_eq!(outcome.diagnostics.len(), 1);
    }
}
