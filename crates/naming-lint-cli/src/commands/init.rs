//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# naming-lint configuration
# Run `naming-lint list-selectors` for every accepted token.

# Used only when no [[naming]] entry is present: "recommended" or "strict".
preset = "recommended"

# Exit with status 1 when a violation at or above this severity is found.
fail_on = "error"

[analyzer]
# Root directory to analyze, relative to the checked path
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/*.d.ts",
]

# Respect .gitignore files
respect_gitignore = true

# Conventions. The most specific matching entry governs each name:
# a concrete kind beats variableLike/memberLike/typeLike, which beat default.

[[naming]]
selector = "default"
format = ["camelCase"]
leading-underscore = "allow"
trailing-underscore = "allow"

[[naming]]
selector = "variable"
format = ["camelCase", "UPPER_CASE"]
leading-underscore = "allow"
trailing-underscore = "allow"

[[naming]]
selector = "typeLike"
format = ["PascalCase"]

# [[naming]]
# selector = "variable"
# types = ["boolean"]
# format = ["PascalCase"]
# prefix = ["is", "should", "has", "can", "did", "will"]

# [[naming]]
# selector = "interface"
# format = ["PascalCase"]
# custom = { regex = "^I[A-Z]", match = false }
# severity = "warning"
# doc = "STYLEGUIDE.md#interfaces"

# [[naming]]
# selector = "property"
# modifiers = ["requiresQuotes"]
# format = "none"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(crate::config_resolver::PROJECT_CONFIG_NAMES[0]);
    write_config(config_path, force)?;

    println!("Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} to adjust the conventions", config_path.display());
    println!("  2. Run: naming-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }
    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use naming_lint_core::{load_conventions_from_toml, Config};
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset.as_deref(), Some("recommended"));
        assert!(config.fail_on_severity().is_ok());
        assert_eq!(load_conventions_from_toml(DEFAULT_CONFIG).unwrap().len(), 3);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("naming-lint.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
