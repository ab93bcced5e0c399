//! # naming-lint-ts
//!
//! Tree-sitter based host for the naming-lint engine.
//!
//! This crate turns TypeScript sources into the classified declarations
//! `naming-lint-core` checks, and reuses its types (`Declaration`,
//! `Violation`, `LintResult`). It adds:
//!
//! - [`LanguageExtractor`] trait for pluggable language support
//! - [`TypeScriptExtractor`] for `.ts` / `.mts` / `.cts` and `.tsx` files
//! - [`Analyzer`] for walking a source tree and checking every declaration

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
mod classify;
pub mod extractor;
mod types;
pub mod typescript;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use extractor::{ExtractError, FileAnalysis, LanguageExtractor};
pub use typescript::TypeScriptExtractor;
