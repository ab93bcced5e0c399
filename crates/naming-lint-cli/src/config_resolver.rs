//! Configuration file resolution with global fallback.
//!
//! The configuration path is resolved in a fixed priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/naming-lint.toml` or `.naming-lint.toml`
//! 3. `$NAMING_LINT_CONFIG_DIR/config.toml` or `~/.naming-lint/config.toml`
//! 4. No config found → recommended preset
//!
//! One file holds both the base settings and the `[[naming]]` entries, so
//! [`load`] reads it once and parses it twice.

use anyhow::{Context, Result};
use naming_lint_core::{load_conventions_from_toml, Config, NamingConventions};
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Loaded from the global config directory.
    Global(PathBuf),
    /// No config found; the recommended preset applies.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Project-level config file names, checked in order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["naming-lint.toml", ".naming-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_in(project_dir, explicit, global_config_dir())
}

fn resolve_in(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.map(|dir| dir.join(GLOBAL_CONFIG_NAME)) {
        Some(candidate) if candidate.is_file() => {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        }
        _ => ConfigSource::Default,
    }
}

/// Returns the global config directory path.
///
/// Resolution: `$NAMING_LINT_CONFIG_DIR` > `~/.naming-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("NAMING_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".naming-lint"))
}

/// Base settings plus validated conventions from one resolved source.
#[derive(Debug)]
pub struct LoadedConfig {
    /// `[analyzer]`, `preset` and `fail_on`.
    pub config: Config,
    /// `[[naming]]` entries, or the preset when there are none.
    pub conventions: NamingConventions,
}

/// Reads and validates the configuration behind `source`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// holds an invalid convention entry.
pub fn load(source: &ConfigSource) -> Result<LoadedConfig> {
    let Some(path) = source.path() else {
        return from_str("").context("Failed to load the built-in preset");
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    from_str(&content).with_context(|| format!("Invalid config: {}", path.display()))
}

fn from_str(content: &str) -> Result<LoadedConfig> {
    let config = Config::parse(content)?;
    let conventions = load_conventions_from_toml(content)?;
    Ok(LoadedConfig {
        config,
        conventions,
    })
}
