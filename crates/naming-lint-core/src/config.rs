//! Base configuration for naming-lint.
//!
//! The `[[naming]]` entries of the same file are loaded separately through
//! [`crate::convention::load_conventions_from_toml`].

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for naming-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use when no `[[naming]]` entry exists
    /// ("recommended" or "strict").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for a failing exit code (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the failing severity threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `fail_on` is not a known severity.
    pub fn fail_on_severity(&self) -> Result<Severity, ConfigError> {
        match self.fail_on.as_deref() {
            None => Ok(Severity::Error),
            Some(value) => Severity::parse(value).ok_or_else(|| ConfigError::UnknownSeverity {
                value: value.to_string(),
            }),
        }
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_excludes(),
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_excludes() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
}

fn default_true() -> bool {
    true
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// `fail_on` is not a severity.
    #[error("unknown fail_on severity `{value}`, expected: error, warning, info")]
    UnknownSeverity {
        /// The invalid value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert_eq!(config.fail_on_severity().unwrap(), Severity::Error);
        assert!(config
            .analyzer
            .exclude
            .contains(&"**/node_modules/**".to_string()));
    }

    #[test]
    fn test_parse_config_alongside_naming_entries() {
        let toml = r#"
preset = "strict"
fail_on = "warning"

[analyzer]
root = "./src"
exclude = ["**/generated/**"]
respect_gitignore = false

[[naming]]
selector = "variable"
format = "camelCase"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./src"));
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**".to_string()]);
        assert!(!config.analyzer.respect_gitignore);
        assert_eq!(config.preset.as_deref(), Some("strict"));
        assert_eq!(config.fail_on_severity().unwrap(), Severity::Warning);
    }

    #[test]
    fn test_unknown_fail_on() {
        let config = Config::parse(r#"fail_on = "fatal""#).unwrap();
        assert!(matches!(
            config.fail_on_severity(),
            Err(ConfigError::UnknownSeverity { .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::parse("fail_on = ["),
            Err(ConfigError::Parse { .. })
        ));
    }
}
