//! Parsing and node classification for JavaScript/JSX and TSX sources.
//!
//! Tree-sitter does the heavy lifting; this module picks the grammar for a
//! file extension, owns the parsed tree alongside its source bytes, and
//! caches the compiled declarator query per language.

mod kind;

pub use kind::{PatternEntry, SyntaxKind};

use std::path::Path;

use once_cell::sync::OnceCell;
use tree_sitter::{Language, Parser, Query};

/// Finds every named binding with an initializer. The rule decides
/// per-declarator whether the initializer is component-shaped.
const DECLARATOR_QUERY: &str = r#"
(variable_declarator
  name: (identifier)
  value: (_)) @declarator
"#;

static JS_DECLARATOR_QUERY: OnceCell<Query> = OnceCell::new();
static TSX_DECLARATOR_QUERY: OnceCell<Query> = OnceCell::new();

/// Source language of a file under analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    /// Plain JavaScript with JSX enabled (.js, .jsx, .mjs, .cjs).
    JavaScript,
    /// TSX (.tsx). Plain .ts is skipped: JSX cannot appear there.
    Tsx,
}

impl SourceLanguage {
    /// Pick a language for a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "jsx" | "mjs" | "cjs" => Some(SourceLanguage::JavaScript),
            "tsx" => Some(SourceLanguage::Tsx),
            _ => None,
        }
    }

    /// Language identifier for reports.
    pub fn id(&self) -> &'static str {
        match self {
            SourceLanguage::JavaScript => "javascript",
            SourceLanguage::Tsx => "tsx",
        }
    }

    fn grammar(&self) -> Language {
        match self {
            SourceLanguage::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            SourceLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// The compiled declarator query for this language, built once.
    ///
    /// The query text is valid for both grammars; it is compiled at first
    /// use because `Query::new` needs the concrete `Language`.
    pub fn declarator_query(&self) -> &'static Query {
        let cell = match self {
            SourceLanguage::JavaScript => &JS_DECLARATOR_QUERY,
            SourceLanguage::Tsx => &TSX_DECLARATOR_QUERY,
        };
        cell.get_or_init(|| {
            Query::new(&self.grammar(), DECLARATOR_QUERY)
                .expect("declarator query must compile against the bundled grammar")
        })
    }
}

/// A parsed source file: the tree plus everything needed to read it.
///
/// The source bytes are kept so node text can be extracted without
/// re-reading the file.
pub struct ParsedFile {
    /// The tree-sitter parse tree.
    pub tree: tree_sitter::Tree,
    /// The original source bytes.
    pub source: Vec<u8>,
    /// The file path, for diagnostics.
    pub path: String,
    /// Which grammar produced the tree.
    pub language: SourceLanguage,
}

impl ParsedFile {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: tree_sitter::Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }

    /// Root node of the tree.
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}

/// Parse a source buffer.
///
/// A tree with localized syntax errors still comes back as a valid tree
/// containing ERROR nodes; the rule's guards simply fail to match inside
/// them. Only a total parser failure is an error here.
pub fn parse(language: SourceLanguage, path: &Path, source: &[u8]) -> anyhow::Result<ParsedFile> {
    let mut parser = Parser::new();
    parser.set_language(&language.grammar())?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| anyhow::anyhow!("failed to parse {}", path.display()))?;

    Ok(ParsedFile {
        tree,
        source: source.to_vec(),
        path: path.to_string_lossy().to_string(),
        language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_extension() {
        assert_eq!(
            SourceLanguage::from_extension("jsx"),
            Some(SourceLanguage::JavaScript)
        );
        assert_eq!(SourceLanguage::from_extension("tsx"), Some(SourceLanguage::Tsx));
        assert_eq!(SourceLanguage::from_extension("ts"), None);
        assert_eq!(SourceLanguage::from_extension("go"), None);
    }

    #[test]
    fn test_parse_jsx() {
        let source = b"const Row = ({ id }) => <li>{id}</li>;";
        let parsed = parse(SourceLanguage::JavaScript, Path::new("row.jsx"), source).unwrap();
        assert!(!parsed.root().has_error());
        assert_eq!(parsed.path, "row.jsx");
    }

    #[test]
    fn test_parse_tsx_with_annotation() {
        let source = b"const Row = ({ id }: RowProps) => <li>{id}</li>;";
        let parsed = parse(SourceLanguage::Tsx, Path::new("row.tsx"), source).unwrap();
        assert!(!parsed.root().has_error());
    }

    #[test]
    fn test_declarator_query_compiles_for_both_grammars() {
        assert!(SourceLanguage::JavaScript.declarator_query().pattern_count() > 0);
        assert!(SourceLanguage::Tsx.declarator_query().pattern_count() > 0);
    }

    #[test]
    fn test_broken_source_still_parses() {
        let source = b"const = ) => {";
        let parsed = parse(SourceLanguage::JavaScript, Path::new("bad.js"), source).unwrap();
        assert!(parsed.root().has_error());
    }
}
