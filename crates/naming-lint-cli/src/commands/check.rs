//! Check command implementation.

use anyhow::{Context, Result};
use naming_lint_core::NamingEngine;
use naming_lint_ts::Analyzer;
use std::path::Path;

use crate::config_resolver::{self, ConfigSource};
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let loaded = config_resolver::load(source)?;
    let fail_on = loaded
        .config
        .fail_on_severity()
        .context("Invalid fail_on setting")?;

    // The configured root is relative to the checked path.
    let root = path.join(&loaded.config.analyzer.root);
    let engine = NamingEngine::new(loaded.conventions);
    tracing::debug!("Loaded {} conventions", engine.conventions().len());

    let analyzer = Analyzer::builder()
        .root(root)
        .config(loaded.config)
        .engine(engine)
        .excludes(exclude)
        .build()
        .context("Failed to build analyzer")?;

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, analyzer.root())?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}
