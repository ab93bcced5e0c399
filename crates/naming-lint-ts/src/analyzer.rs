//! File analyzer: discovers TypeScript sources, extracts their declarations
//! and folds the naming engine over them.

use std::path::{Path, PathBuf};

use naming_lint_core::{
    Config, LintResult, LoadConventionsError, NamingConventions, NamingEngine, Preset, TypeInfo,
    Violation,
};
use naming_lint_core::convention::LoadError;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::extractor::{ExtractError, LanguageExtractor};
use crate::typescript::TypeScriptExtractor;

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error resolving the root or reading a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk failed.
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] naming_lint_core::ConfigError),

    /// The default conventions failed validation.
    #[error("Invalid conventions: {0}")]
    Conventions(#[from] LoadConventionsError),

    /// The extractor could not process a file.
    #[error("Failed to analyze {path}: {source}")]
    Extract {
        /// File that failed.
        path: PathBuf,
        /// Extractor error.
        source: ExtractError,
    },

    /// No extractor handles the file's extension.
    #[error("Unsupported file type: {0}")]
    Unsupported(PathBuf),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    engine: Option<NamingEngine>,
    extractors: Vec<Box<dyn LanguageExtractor>>,
    exclude_patterns: Vec<String>,
    respect_gitignore: Option<bool>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the naming engine (default: the recommended preset).
    #[must_use]
    pub fn engine(mut self, engine: NamingEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Adds a language extractor. Without any, TypeScript and TSX are used.
    #[must_use]
    pub fn extractor<E: LanguageExtractor + 'static>(mut self, extractor: E) -> Self {
        self.extractors.push(Box::new(extractor));
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets whether `.gitignore` files are honoured (default: true).
    #[must_use]
    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = Some(respect);
        self
    }

    /// Sets the base configuration (root, excludes, gitignore handling).
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved, an
    /// exclude pattern is not a valid glob, or no engine was given and the
    /// recommended preset does not validate.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            patterns.extend(config.analyzer.exclude.clone());
        }
        let excludes = patterns
            .iter()
            .map(String::as_str)
            .map(glob::Pattern::new)
            .collect::<Result<Vec<_>, _>>()?;

        let respect_gitignore = self
            .respect_gitignore
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.respect_gitignore))
            .unwrap_or(true);

        let extractors = if self.extractors.is_empty() {
            vec![
                Box::new(TypeScriptExtractor::new()) as Box<dyn LanguageExtractor>,
                Box::new(TypeScriptExtractor::tsx()),
            ]
        } else {
            self.extractors
        };

        let engine = match self.engine {
            Some(engine) => engine,
            None => recommended_engine()?,
        };

        Ok(Analyzer {
            root,
            engine,
            extractors,
            excludes,
            respect_gitignore,
        })
    }
}

/// Engine over the recommended preset.
fn recommended_engine() -> Result<NamingEngine, LoadConventionsError> {
    NamingConventions::new(Preset::Recommended.conventions())
        .map(NamingEngine::new)
        .map_err(|e| LoadConventionsError::Load(LoadError::CrossRef(e)))
}

/// Walks a source tree and checks every declaration of every file.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    engine: NamingEngine,
    extractors: Vec<Box<dyn LanguageExtractor>>,
    excludes: Vec<glob::Pattern>,
    respect_gitignore: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the engine used for checking.
    #[must_use]
    pub fn engine(&self) -> &NamingEngine {
        &self.engine
    }

    /// Analyzes all files and returns the results, sorted by location.
    ///
    /// A file that cannot be read or parsed is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {}", self.root.display());

        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        let mut result = LintResult::new();
        for path in &files {
            let rel = path.strip_prefix(&self.root).unwrap_or(path);
            let source = match std::fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping {}: {e}", rel.display());
                    continue;
                }
            };
            match self.check_source(rel, &source) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(e) => warn!("{e}"),
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Checks one file's source. `path` picks the extractor and is recorded
    /// in every violation location.
    ///
    /// # Errors
    ///
    /// Returns an error if no extractor handles `path` or extraction fails.
    pub fn check_source(&self, path: &Path, source: &str) -> Result<Vec<Violation>, AnalyzerError> {
        let extractor = self
            .extractor_for(path)
            .ok_or_else(|| AnalyzerError::Unsupported(path.to_path_buf()))?;

        debug!("Analyzing {} as {}", path.display(), extractor.language_id());
        let analysis = extractor
            .analyze(source)
            .map_err(|source| AnalyzerError::Extract {
                path: path.to_path_buf(),
                source,
            })?
            .with_file_path(path);

        if analysis.has_syntax_errors {
            warn!(
                "{}: syntax errors, checking recovered declarations only",
                path.display()
            );
        }

        for declaration in &analysis.declarations {
            if matches!(declaration.ty, TypeInfo::Unavailable)
                && self.engine.needs_type_info(declaration.kind)
            {
                debug!(
                    "{}:{}: no syntactic type for {} `{}`",
                    path.display(),
                    declaration.location.line,
                    declaration.kind,
                    declaration.name
                );
            }
        }

        Ok(self.engine.violations(&analysis.declarations))
    }

    fn extractor_for(&self, path: &Path) -> Option<&dyn LanguageExtractor> {
        self.extractors
            .iter()
            .find(|e| e.handles(path))
            .map(|e| &**e)
    }

    /// Discovers source files handled by some extractor, in path order.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .require_git(false);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || self.extractor_for(path).is_none() {
                continue;
            }
            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks an exclude pattern against the path relative to the root.
    fn should_exclude(&self, path: &Path) -> bool {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        self.excludes.iter().any(|pattern| pattern.matches_path(rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let analyzer = Analyzer::builder()
            .root(".")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.root().is_absolute());
        assert!(analyzer.respect_gitignore);
        assert_eq!(analyzer.extractors.len(), 2);
    }

    #[test]
    fn default_engine_is_the_validated_recommended_preset() {
        let engine = recommended_engine().expect("recommended preset should validate");
        assert!(!engine.conventions().is_empty());

        let analyzer = Analyzer::builder()
            .root(".")
            .build()
            .expect("Failed to build analyzer");
        assert_eq!(
            analyzer.engine().conventions().len(),
            engine.conventions().len()
        );
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = Analyzer::builder()
            .root("/project")
            .exclude("**/node_modules/**")
            .exclude("**/*.d.ts")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.should_exclude(Path::new("/project/node_modules/lib/index.ts")));
        assert!(analyzer.should_exclude(Path::new("/project/src/types/global.d.ts")));
        assert!(!analyzer.should_exclude(Path::new("/project/src/app.ts")));
    }

    #[test]
    fn test_invalid_glob() {
        let result = Analyzer::builder().root("/project").exclude("[").build();
        assert!(matches!(result, Err(AnalyzerError::Glob(_))));
    }

    #[test]
    fn test_config_supplies_root_and_gitignore() {
        let mut config = Config::default();
        config.analyzer.root = PathBuf::from("/srv/app");
        config.analyzer.respect_gitignore = false;

        let analyzer = Analyzer::builder()
            .config(config)
            .build()
            .expect("Failed to build analyzer");
        assert_eq!(analyzer.root(), Path::new("/srv/app"));
        assert!(!analyzer.respect_gitignore);
        assert!(analyzer.should_exclude(Path::new("/srv/app/dist/index.ts")));
    }

    #[test]
    fn test_unsupported_extension() {
        let analyzer = Analyzer::builder()
            .root("/project")
            .build()
            .expect("Failed to build analyzer");
        let result = analyzer.check_source(Path::new("main.rs"), "fn main() {}");
        assert!(matches!(result, Err(AnalyzerError::Unsupported(_))));
    }
}
