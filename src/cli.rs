//! Command-line interface for memocheck.

use clap::Parser;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::engine::Linter;
use crate::report;
use crate::syntax::SourceLanguage;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Flag React components with primitive props that are missing memo().
///
/// Memocheck scans JavaScript/JSX and TSX sources for component
/// declarations whose destructured props all look primitive (by naming
/// convention) but which are not wrapped in the memo() helper, and reports
/// each one. It never rewrites code.
#[derive(Parser)]
#[command(name = "memocheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to check (file or directory)
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover memocheck.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty, json, or sarif
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Directories never worth descending into.
const SKIPPED_DIRS: &[&str] = &["node_modules", "dist", "build", "coverage", "vendor"];

/// Collect lintable files under a root.
fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            // The scan root was chosen by the user; never filter it, even
            // if its own name is hidden.
            if e.depth() == 0 {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            if e.file_type().is_dir() && name.starts_with('.') {
                return false;
            }
            if e.file_type().is_dir() && SKIPPED_DIRS.contains(&name.as_ref()) {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

            if SourceLanguage::from_extension(ext).is_some() && !config.is_path_excluded(path) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Run the linter with the parsed arguments.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    if cli.format != "pretty" && cli.format != "json" && cli.format != "sarif" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty', 'json', or 'sarif'",
            cli.format
        );
        return Ok(EXIT_ERROR);
    }

    // Explicit config must parse; a discovered one is best-effort, and no
    // config at all means defaults.
    let (config, config_path) = match &cli.config {
        Some(p) => match Config::parse_file(p) {
            Ok(c) => (c, Some(p.clone())),
            Err(e) => {
                eprintln!("Error parsing config {}: {}", p.display(), e);
                return Ok(EXIT_ERROR);
            }
        },
        None => match Config::discover() {
            Some(p) => match Config::parse_file(&p) {
                Ok(c) => (c, Some(p)),
                Err(e) => {
                    eprintln!("Error parsing config {}: {}", p.display(), e);
                    return Ok(EXIT_ERROR);
                }
            },
            None => (Config::default(), None),
        },
    };

    let linter = match Linter::new(&config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error: invalid config: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let abs_path = match cli.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", cli.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let metadata = std::fs::metadata(&abs_path)?;
    let files = if metadata.is_dir() {
        collect_files(&abs_path, &config)?
    } else {
        vec![abs_path.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no files to scan");
        return Ok(EXIT_SUCCESS);
    }

    let outcome = linter.lint_files(&files);

    let path_str = cli.path.to_string_lossy().to_string();
    let config_str = config_path.map(|p| p.to_string_lossy().to_string());

    match cli.format.as_str() {
        "json" => {
            report::write_json(&path_str, config_str.as_deref(), &outcome)?;
        }
        "sarif" => {
            report::write_sarif(&abs_path, &outcome)?;
        }
        _ => {
            report::write_pretty(&path_str, config_str.as_deref(), &outcome);
        }
    }

    if outcome.is_clean() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_filters_extensions() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("App.jsx"), "").unwrap();
        std::fs::write(temp.path().join("util.js"), "").unwrap();
        std::fs::write(temp.path().join("Panel.tsx"), "").unwrap();
        std::fs::write(temp.path().join("types.ts"), "").unwrap();
        std::fs::write(temp.path().join("readme.md"), "").unwrap();

        let files = collect_files(temp.path(), &Config::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["App.jsx", "Panel.tsx", "util.js"]);
    }

    #[test]
    fn test_collect_files_skips_node_modules_and_hidden() {
        let temp = TempDir::new().unwrap();
        let nm = temp.path().join("node_modules").join("react");
        std::fs::create_dir_all(&nm).unwrap();
        std::fs::write(nm.join("index.js"), "").unwrap();
        let hidden = temp.path().join(".cache");
        std::fs::create_dir_all(&hidden).unwrap();
        std::fs::write(hidden.join("stale.jsx"), "").unwrap();
        std::fs::write(temp.path().join("App.jsx"), "").unwrap();

        let files = collect_files(temp.path(), &Config::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("App.jsx"));
    }

    #[test]
    fn test_collect_files_honors_excluded_paths() {
        let temp = TempDir::new().unwrap();
        let gen = temp.path().join("generated");
        std::fs::create_dir_all(&gen).unwrap();
        std::fs::write(gen.join("Table.jsx"), "").unwrap();
        std::fs::write(temp.path().join("App.jsx"), "").unwrap();

        let config = Config {
            excluded_paths: vec!["**/generated/**".to_string()],
            ..Default::default()
        };
        let files = collect_files(temp.path(), &config).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("App.jsx"));
    }
}
