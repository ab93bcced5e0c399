//! Naming conventions driven by TOML configuration.
//!
//! # Architecture
//!
//! ```text
//! TOML text
//!   ↓ serde (DTO layer)
//! config_dto types
//!   ↓ validate + convert (one convention per selector)
//! NamingConventions (pure domain model, priority order)
//!   ↓ NamingEngine::new()
//! resolution + validation per declaration
//! ```

pub mod config_dto;
pub mod loader;
pub mod model;

pub use loader::LoadError;
pub use model::{Convention, FormatSpec, ModelError, NamePattern, NamingConventions};

/// Errors from parsing TOML and loading naming conventions.
#[derive(Debug, thiserror::Error)]
pub enum LoadConventionsError {
    /// TOML deserialization failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Domain model validation failed.
    #[error("{0}")]
    Load(#[from] LoadError),
}

/// Parses TOML content and builds the validated convention set.
///
/// Falls back to the configured preset (or `recommended`) when no
/// `[[naming]]` entry is present.
///
/// # Errors
///
/// Returns an error if TOML parsing or model validation fails.
pub fn load_conventions_from_toml(content: &str) -> Result<NamingConventions, LoadConventionsError> {
    let dto: config_dto::NamingConfigDto = toml::from_str(content)?;
    Ok(loader::load(dto)?)
}
