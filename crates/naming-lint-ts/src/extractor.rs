//! Language-agnostic extraction types and trait.
//!
//! `LanguageExtractor` is the extension point for adding new languages.
//! Implement it to teach naming-lint how to turn a source file into the
//! named declarations the engine checks.

use naming_lint_core::Declaration;
use std::path::{Path, PathBuf};

/// Result of analyzing a single source file with Tree-sitter.
#[derive(Debug, Clone, Default)]
pub struct FileAnalysis {
    /// Path relative to project root.
    pub file_path: PathBuf,
    /// Every named declaration, in source order.
    pub declarations: Vec<Declaration>,
    /// Whether the parser had to recover from syntax errors.
    pub has_syntax_errors: bool,
}

impl FileAnalysis {
    /// Sets the file path on the analysis and on every declaration location.
    #[must_use]
    pub fn with_file_path(mut self, path: &Path) -> Self {
        self.file_path = path.to_path_buf();
        for declaration in &mut self.declarations {
            declaration.location.file = path.to_path_buf();
        }
        self
    }
}

/// Errors an extractor can hit before producing any declaration.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {language} grammar: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Loader message.
        message: String,
    },

    /// The parser returned no tree.
    #[error("parser produced no tree")]
    NoTree,
}

/// Trait for language-specific Tree-sitter extraction.
///
/// The extractor receives raw source text and returns a [`FileAnalysis`]
/// holding classified declarations with file-relative locations.
pub trait LanguageExtractor: Send + Sync {
    /// Language identifier (e.g., `"typescript"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles (e.g., `&[".ts", ".tsx"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Extracts every named declaration from source code.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser cannot be set up or produces no tree.
    fn analyze(&self, source: &str) -> Result<FileAnalysis, ExtractError>;

    /// Whether this extractor handles `path`, judged by extension.
    fn handles(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        self.extensions().contains(&ext.as_str())
    }
}
