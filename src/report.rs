//! Output formatting for lint results.
//!
//! Supports three output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use colored::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::rules::{self, Diagnostic, LintOutcome, RuleId, Severity};

// =============================================================================
// JSON Format
// =============================================================================

/// Top-level JSON report.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    pub files_scanned: usize,
    pub diagnostics: Vec<JsonDiagnostic>,
    pub passed: bool,
}

/// One diagnostic in JSON form.
#[derive(Serialize, Deserialize)]
pub struct JsonDiagnostic {
    pub rule: String,
    #[serde(rename = "messageId")]
    pub message_id: String,
    pub severity: String,
    pub file: String,
    pub line: usize,
    pub message: String,
}

/// Build the JSON report structure.
pub fn build_json_report(path: &str, config_path: Option<&str>, outcome: &LintOutcome) -> JsonReport {
    let diagnostics: Vec<JsonDiagnostic> =
        outcome.diagnostics.iter().map(diagnostic_to_json).collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        config: config_path.map(|c| c.to_string()),
        files_scanned: outcome.scanned,
        diagnostics,
        passed: outcome.is_clean(),
    }
}

/// Write results in JSON format.
pub fn write_json(path: &str, config_path: Option<&str>, outcome: &LintOutcome) -> anyhow::Result<()> {
    let report = build_json_report(path, config_path, outcome);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

fn diagnostic_to_json(d: &Diagnostic) -> JsonDiagnostic {
    JsonDiagnostic {
        rule: d.rule.as_str().to_string(),
        message_id: d.message_id.clone(),
        severity: d.severity.to_string(),
        file: d.file.clone(),
        line: d.line,
        message: d.message.clone(),
    }
}

// =============================================================================
// SARIF Format
// =============================================================================

const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const TOOL_NAME: &str = "memocheck";

#[derive(Serialize, Deserialize)]
struct SarifReport {
    version: String,
    #[serde(rename = "$schema")]
    schema: String,
    runs: Vec<SarifRun>,
}

#[derive(Serialize, Deserialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize, Deserialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize, Deserialize)]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize, Deserialize)]
struct SarifRule {
    id: String,
    name: String,
    #[serde(rename = "shortDescription")]
    short_description: SarifMessage,
    #[serde(rename = "defaultConfiguration")]
    default_config: SarifRuleConfig,
}

#[derive(Serialize, Deserialize)]
struct SarifRuleConfig {
    level: String,
}

#[derive(Serialize, Deserialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize, Deserialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize, Deserialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize, Deserialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifact,
    region: SarifRegion,
}

#[derive(Serialize, Deserialize)]
struct SarifArtifact {
    uri: String,
}

#[derive(Serialize, Deserialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: usize,
}

fn map_severity_to_level(severity: &Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "note",
    }
}

fn make_relative_path(file_path: &str, base_path: &Path) -> String {
    if base_path.to_string_lossy().is_empty() {
        return file_path.to_string();
    }

    let file = Path::new(file_path);

    // Single-file scan: report just the filename.
    if file == base_path {
        return file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file_path.to_string());
    }

    file.strip_prefix(base_path)
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_else(|_| file_path.to_string())
}

/// Write results in SARIF format.
pub fn write_sarif(base_path: &Path, outcome: &LintOutcome) -> anyhow::Result<()> {
    // Rule metadata for every rule that fired.
    let rule_ids: BTreeSet<&'static str> = outcome
        .diagnostics
        .iter()
        .map(|d| d.rule.as_str())
        .collect();

    let sarif_rules: Vec<SarifRule> = rule_ids
        .into_iter()
        .filter_map(RuleId::parse)
        .map(|id| {
            let info = rules::meta(id);
            SarifRule {
                id: info.id.as_str().to_string(),
                name: info.name.to_string(),
                short_description: SarifMessage {
                    text: info.description.to_string(),
                },
                default_config: SarifRuleConfig {
                    level: map_severity_to_level(&info.default_severity).to_string(),
                },
            }
        })
        .collect();

    let results: Vec<SarifResult> = outcome
        .diagnostics
        .iter()
        .map(|d| SarifResult {
            rule_id: d.rule.as_str().to_string(),
            level: map_severity_to_level(&d.severity).to_string(),
            message: SarifMessage {
                text: d.message.clone(),
            },
            locations: vec![SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifact {
                        uri: make_relative_path(&d.file, base_path),
                    },
                    region: SarifRegion {
                        start_line: if d.line > 0 { d.line } else { 1 },
                    },
                },
            }],
        })
        .collect();

    let report = SarifReport {
        version: SARIF_VERSION.to_string(),
        schema: SARIF_SCHEMA.to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: TOOL_NAME.to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    rules: sarif_rules,
                },
            },
            results,
        }],
    };

    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(path: &str, config_path: Option<&str>, outcome: &LintOutcome) {
    println!();
    print!("  ");
    print!("{}", "memocheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanning: ".dimmed());
    println!("{}", path);
    if let Some(config) = config_path {
        print!("  {}", "Config:   ".dimmed());
        println!("{}", config);
    }
    println!();

    if !outcome.diagnostics.is_empty() {
        write_diagnostics(&outcome.diagnostics);
        println!();
    }

    write_summary(outcome);
    println!();
}

fn write_diagnostics(diagnostics: &[Diagnostic]) {
    println!("  {} ({}):", "Findings".bold(), diagnostics.len());
    println!();

    for d in diagnostics {
        write_severity_tag(&d.severity);
        print!("   ");
        print!("{:<26}", d.rule.as_str().dimmed());
        print!("{}", d.file.blue());
        if d.line > 0 {
            print!("{}", format!(":{}", d.line).dimmed());
        }
        println!();

        // Message on next line, indented.
        println!("            {}", d.message);
        println!();
    }
}

fn write_severity_tag(severity: &Severity) {
    match severity {
        Severity::Error => print!("    {} ", "ERROR".red()),
        Severity::Warning => print!("    {} ", "WARN ".yellow()),
        Severity::Info => print!("    {} ", "INFO ".blue()),
    }
}

fn write_summary(outcome: &LintOutcome) {
    let plural = if outcome.scanned != 1 { "s" } else { "" };
    if outcome.is_clean() {
        print!("  {}", "✓ PASS".green());
        println!(
            "  {} file{} scanned, no components missing memo()",
            outcome.scanned, plural
        );
    } else {
        print!("  {}", "✗ FAIL".red());
        let count = outcome.diagnostics.len();
        let finding_plural = if count != 1 { "s" } else { "" };
        println!(
            "  {} file{} scanned, {} finding{}",
            outcome.scanned, plural, count, finding_plural
        );
    }
}
