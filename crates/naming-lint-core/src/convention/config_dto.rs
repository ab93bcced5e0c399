//! TOML deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization.
//! They are converted to domain model types via the loader.

use serde::Deserialize;

/// Raw TOML representation of the naming section of a config file.
///
/// Other top-level keys (`fail_on`, `[analyzer]`) belong to the base
/// `Config` and are ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamingConfigDto {
    /// Preset used when no `[[naming]]` entry is present.
    #[serde(default)]
    pub preset: Option<String>,

    /// Convention entries, in declaration order.
    #[serde(default)]
    pub naming: Vec<ConventionDto>,
}

/// TOML representation of one `[[naming]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConventionDto {
    /// Selector token or list of tokens.
    pub selector: OneOrMany,
    /// Required modifier tokens.
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Type constraint tokens.
    #[serde(default)]
    pub types: Vec<String>,
    /// Format list, single token, `"none"`, or a custom pattern.
    #[serde(default)]
    pub format: Option<FormatDto>,
    /// Leading underscore policy token.
    #[serde(rename = "leading-underscore", default)]
    pub leading_underscore: Option<String>,
    /// Trailing underscore policy token.
    #[serde(rename = "trailing-underscore", default)]
    pub trailing_underscore: Option<String>,
    /// Accepted prefixes.
    #[serde(default)]
    pub prefix: Vec<String>,
    /// Accepted suffixes.
    #[serde(default)]
    pub suffix: Vec<String>,
    /// Name filter.
    #[serde(default)]
    pub filter: Option<FilterDto>,
    /// Custom pattern over the full name.
    #[serde(default)]
    pub custom: Option<RegexDto>,
    /// Severity (default: "error").
    #[serde(default = "default_severity_str")]
    pub severity: String,
    /// Document reference.
    #[serde(default)]
    pub doc: Option<String>,
}

/// A single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// `selector = "variable"`
    One(String),
    /// `selector = ["variable", "function"]`
    Many(Vec<String>),
}

impl OneOrMany {
    /// Flattens into a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// TOML representation of `format`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FormatDto {
    /// A single token, or `"none"`.
    Token(String),
    /// A list of predefined format tokens.
    List(Vec<String>),
    /// `{ regex = "...", match = true }`
    Custom(RegexDto),
}

/// TOML representation of `filter`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilterDto {
    /// Names matching this regex are skipped.
    Exclude(String),
    /// Explicit polarity.
    Pattern(RegexDto),
}

/// A regex with explicit polarity.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegexDto {
    /// Regex source.
    pub regex: String,
    /// Whether names must match (`true`) or must not match (`false`).
    #[serde(rename = "match")]
    pub must_match: bool,
}

fn default_severity_str() -> String {
    "error".to_string()
}
