//! DTO → Domain model conversion with validation.

use crate::affix::UnderscorePolicy;
use crate::format::PredefinedFormat;
use crate::presets::Preset;
use crate::selector::{Modifier, ModifierSet, Selector, TypeModifier};
use crate::types::Severity;

use super::config_dto::{ConventionDto, FilterDto, FormatDto, NamingConfigDto};
use super::model::{Convention, FormatSpec, ModelError, NamePattern, NamingConventions};

/// Errors during DTO → Domain conversion.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A field-level validation error.
    #[error("{context}: {source}")]
    Validation {
        /// Where the error occurred (e.g., "naming[2].modifiers[0]").
        context: String,
        /// The underlying model error.
        source: ModelError,
    },

    /// Unknown severity string.
    #[error("{context}: unknown severity `{value}`, expected: error, warning, info")]
    UnknownSeverity {
        /// Where the error occurred.
        context: String,
        /// The invalid value.
        value: String,
    },

    /// Unknown preset name.
    #[error("unknown preset `{0}`, expected: recommended, strict")]
    UnknownPreset(String),

    /// Whole-list errors from aggregate root construction.
    #[error("configuration validation errors:\n{}", format_errors(.0))]
    CrossRef(Vec<ModelError>),
}

fn format_errors(errors: &[ModelError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Converts a `NamingConfigDto` to validated `NamingConventions`.
///
/// Without any `[[naming]]` entry the configured preset applies, or the
/// recommended one if none is named.
///
/// # Errors
///
/// Returns the first field error encountered, or all whole-list errors.
pub fn load(dto: NamingConfigDto) -> Result<NamingConventions, LoadError> {
    if dto.naming.is_empty() {
        let preset = match dto.preset.as_deref() {
            None => Preset::Recommended,
            Some(name) => {
                Preset::parse(name).ok_or_else(|| LoadError::UnknownPreset(name.to_string()))?
            }
        };
        return NamingConventions::new(preset.conventions()).map_err(LoadError::CrossRef);
    }

    let mut conventions = Vec::new();
    for (index, entry) in dto.naming.into_iter().enumerate() {
        conventions.extend(convert_convention(entry, index)?);
    }

    NamingConventions::new(conventions).map_err(LoadError::CrossRef)
}

/// Converts one entry, expanding a selector list into one convention per
/// selector.
fn convert_convention(dto: ConventionDto, index: usize) -> Result<Vec<Convention>, LoadError> {
    let ctx = format!("naming[{index}]");
    let validation = |field: String| move |source: ModelError| LoadError::Validation {
        context: field,
        source,
    };

    let selector_tokens = dto.selector.into_vec();
    if selector_tokens.is_empty() {
        return Err(validation(format!("{ctx}.selector"))(
            ModelError::EmptySelectorList,
        ));
    }
    let selectors = selector_tokens
        .iter()
        .enumerate()
        .map(|(j, token)| {
            Selector::parse(token)
                .ok_or_else(|| ModelError::UnknownSelector {
                    token: token.clone(),
                })
                .map_err(validation(format!("{ctx}.selector[{j}]")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let modifiers = dto
        .modifiers
        .iter()
        .enumerate()
        .map(|(j, token)| {
            Modifier::parse(token)
                .ok_or_else(|| ModelError::UnknownModifier {
                    token: token.clone(),
                })
                .map_err(validation(format!("{ctx}.modifiers[{j}]")))
        })
        .collect::<Result<ModifierSet, _>>()?;

    let types = dto
        .types
        .iter()
        .enumerate()
        .map(|(j, token)| {
            TypeModifier::parse(token)
                .ok_or_else(|| ModelError::UnknownType {
                    token: token.clone(),
                })
                .map_err(validation(format!("{ctx}.types[{j}]")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let format = convert_format(dto.format).map_err(validation(format!("{ctx}.format")))?;

    let leading = dto
        .leading_underscore
        .as_deref()
        .map(parse_policy)
        .transpose()
        .map_err(validation(format!("{ctx}.leading-underscore")))?;
    let trailing = dto
        .trailing_underscore
        .as_deref()
        .map(parse_policy)
        .transpose()
        .map_err(validation(format!("{ctx}.trailing-underscore")))?;

    let prefix = check_affixes(dto.prefix).map_err(validation(format!("{ctx}.prefix")))?;
    let suffix = check_affixes(dto.suffix).map_err(validation(format!("{ctx}.suffix")))?;

    let filter = dto
        .filter
        .map(|filter| match filter {
            FilterDto::Exclude(regex) => NamePattern::new(&regex, false),
            FilterDto::Pattern(p) => NamePattern::new(&p.regex, p.must_match),
        })
        .transpose()
        .map_err(validation(format!("{ctx}.filter")))?;

    let custom = dto
        .custom
        .map(|c| NamePattern::new(&c.regex, c.must_match))
        .transpose()
        .map_err(validation(format!("{ctx}.custom")))?;

    let severity = parse_severity(&dto.severity, &ctx)?;

    Ok(selectors
        .into_iter()
        .map(|selector| {
            let mut convention = Convention::new(selector, format.clone())
                .with_index(index)
                .with_modifiers(modifiers)
                .with_types(types.clone())
                .with_prefix(prefix.clone())
                .with_suffix(suffix.clone())
                .with_severity(severity);
            if let Some(policy) = leading {
                convention = convention.with_leading_underscore(policy);
            }
            if let Some(policy) = trailing {
                convention = convention.with_trailing_underscore(policy);
            }
            if let Some(filter) = &filter {
                convention = convention.with_filter(filter.clone());
            }
            if let Some(custom) = &custom {
                convention = convention.with_custom(custom.clone());
            }
            if let Some(doc) = &dto.doc {
                convention = convention.with_doc_ref(doc.clone());
            }
            convention
        })
        .collect())
}

fn convert_format(dto: Option<FormatDto>) -> Result<FormatSpec, ModelError> {
    match dto {
        None => Err(ModelError::MissingFormat),
        Some(FormatDto::Token(token)) if token == "none" => Ok(FormatSpec::None),
        Some(FormatDto::Token(token)) => {
            parse_format(&token).map(|format| FormatSpec::Predefined(vec![format]))
        }
        Some(FormatDto::List(tokens)) => {
            let formats = tokens
                .iter()
                .map(|t| parse_format(t))
                .collect::<Result<Vec<_>, _>>()?;
            FormatSpec::predefined(formats)
        }
        Some(FormatDto::Custom(custom)) => {
            NamePattern::new(&custom.regex, custom.must_match).map(FormatSpec::Custom)
        }
    }
}

fn parse_format(token: &str) -> Result<PredefinedFormat, ModelError> {
    PredefinedFormat::parse(token).ok_or_else(|| ModelError::UnknownFormat {
        token: token.to_string(),
    })
}

fn parse_policy(token: &str) -> Result<UnderscorePolicy, ModelError> {
    UnderscorePolicy::parse(token).ok_or_else(|| ModelError::UnknownUnderscorePolicy {
        token: token.to_string(),
    })
}

fn check_affixes(affixes: Vec<String>) -> Result<Vec<String>, ModelError> {
    if affixes.iter().any(String::is_empty) {
        return Err(ModelError::EmptyAffix);
    }
    Ok(affixes)
}

fn parse_severity(value: &str, context: &str) -> Result<Severity, LoadError> {
    Severity::parse(value).ok_or_else(|| LoadError::UnknownSeverity {
        context: context.to_string(),
        value: value.to_string(),
    })
}
