//! Host configuration for memocheck.
//!
//! The rule itself takes no options; configuration governs only the host:
//! which paths to skip and what severity label findings carry. A missing
//! config file is not an error - defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::rules::Severity;

/// Config file names searched in the working directory.
const DEFAULT_CONFIG_NAMES: &[&str] = &["memocheck.yaml", ".memocheck.yaml"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Glob patterns for paths to exclude (e.g. "**/generated/**").
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Severity label for findings: "error", "warning" (default), or "info".
    #[serde(default)]
    pub severity: Option<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Find a config file in the current directory, if any.
    pub fn discover() -> Option<PathBuf> {
        DEFAULT_CONFIG_NAMES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    }

    /// The configured severity, defaulting to warning.
    pub fn severity(&self) -> anyhow::Result<Severity> {
        match &self.severity {
            None => Ok(Severity::Warning),
            Some(s) => s.parse().map_err(anyhow::Error::msg),
        }
    }

    /// Check if a path matches any excluded_paths pattern.
    /// Uses globset, which supports `**` for recursive directory matching.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.severity().unwrap(), Severity::Warning);
        assert!(!config.is_path_excluded(Path::new("src/App.jsx")));
    }

    #[test]
    fn test_parse_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("memocheck.yaml");
        std::fs::write(
            &path,
            "excluded_paths:\n  - \"**/generated/**\"\nseverity: error\n",
        )
        .unwrap();

        let config = Config::parse_file(&path).unwrap();
        assert_eq!(config.severity().unwrap(), Severity::Error);
        assert!(config.is_path_excluded(Path::new("src/generated/Table.jsx")));
        assert!(!config.is_path_excluded(Path::new("src/Table.jsx")));
    }

    #[test]
    fn test_invalid_severity_rejected() {
        let config = Config {
            severity: Some("fatal".to_string()),
            ..Default::default()
        };
        assert!(config.severity().is_err());
    }
}
