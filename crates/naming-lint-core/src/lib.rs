//! # naming-lint-core
//!
//! Parser-agnostic naming-convention engine.
//!
//! A host classifies every named declaration into a [`Declaration`]
//! (kind, name, modifiers, optional type, name location). The
//! [`NamingEngine`] picks the single most specific [`Convention`] that
//! applies, runs the underscore / affix / custom / format stages, and
//! reports at most one [`Diagnostic`] per declaration.
//!
//! ## Example
//!
//! ```
//! use naming_lint_core::{
//!     load_conventions_from_toml, Declaration, DeclarationKind, Location, NamingEngine,
//! };
//!
//! let conventions = load_conventions_from_toml(
//!     r#"
//! [[naming]]
//! selector = "variable"
//! format = "camelCase"
//! "#,
//! )?;
//! let engine = NamingEngine::new(conventions);
//!
//! let declaration = Declaration::new(DeclarationKind::Variable, "snake_case", Location::default());
//! let diagnostic = engine.check(&declaration).expect("snake_case is not camelCase");
//! assert_eq!(diagnostic.message_id().as_str(), "doesNotMatchFormat");
//! # Ok::<(), naming_lint_core::convention::LoadConventionsError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod affix;
mod config;
pub mod convention;
mod declaration;
pub mod diagnostic;
mod engine;
pub mod format;
pub mod presets;
pub mod selector;
mod types;
pub mod validate;

pub use config::{AnalyzerConfig, Config, ConfigError};
pub use convention::{
    load_conventions_from_toml, Convention, FormatSpec, LoadConventionsError, NamePattern,
    NamingConventions,
};
pub use declaration::{Declaration, DeclaredType, TypeClass, TypeInfo};
pub use diagnostic::{Diagnostic, MessageId, NamingFailure, RULE_NAME};
pub use engine::NamingEngine;
pub use format::PredefinedFormat;
pub use presets::Preset;
pub use selector::{DeclarationKind, MetaSelector, Modifier, ModifierSet, Selector, TypeModifier};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
