//! Name validation pipeline for a governing convention.
//!
//! Stages run in a fixed order and the first failure wins:
//! leading underscore, trailing underscore, prefix, suffix, custom pattern
//! (on the original name), then format (on the residual).

use crate::affix::{apply_affix, apply_underscore_policy, AffixPosition, UnderscorePosition};
use crate::convention::{Convention, FormatSpec};
use crate::diagnostic::NamingFailure;

/// Validates `name` against `convention`.
///
/// # Errors
///
/// Returns the failure of the first stage that rejects the name.
pub fn validate_name(convention: &Convention, name: &str) -> Result<(), NamingFailure> {
    let residual = apply_underscore_policy(
        name,
        convention.leading_underscore(),
        UnderscorePosition::Leading,
    )?;
    let residual = apply_underscore_policy(
        residual,
        convention.trailing_underscore(),
        UnderscorePosition::Trailing,
    )?;
    let residual = apply_affix(residual, convention.prefix(), AffixPosition::Prefix)?;
    let residual = apply_affix(residual, convention.suffix(), AffixPosition::Suffix)?;

    if let Some(custom) = convention.custom() {
        if !custom.accepts(name) {
            return Err(NamingFailure::SatisfyCustom {
                regex: custom.source().to_string(),
                must_match: custom.must_match(),
            });
        }
    }

    check_format(convention.format(), name, residual)
}

/// Checks the residual against a format spec.
///
/// # Errors
///
/// Returns [`NamingFailure::DoesNotMatchFormat`] when no predefined format
/// matches, or [`NamingFailure::SatisfyCustom`] for a failed custom format.
pub fn check_format(spec: &FormatSpec, original: &str, residual: &str) -> Result<(), NamingFailure> {
    match spec {
        FormatSpec::None => Ok(()),
        FormatSpec::Predefined(formats) => {
            if formats.iter().any(|f| f.matches(residual)) {
                return Ok(());
            }
            let processed_name = (residual != original).then(|| residual.to_string());
            Err(NamingFailure::DoesNotMatchFormat {
                formats: formats.clone(),
                processed_name,
            })
        }
        FormatSpec::Custom(pattern) => {
            if pattern.accepts(residual) {
                Ok(())
            } else {
                Err(NamingFailure::SatisfyCustom {
                    regex: pattern.source().to_string(),
                    must_match: pattern.must_match(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affix::{UnderscoreCount, UnderscorePolicy};
    use crate::convention::NamePattern;
    use crate::format::PredefinedFormat;
    use crate::selector::{DeclarationKind, Selector};

    fn convention(formats: &[PredefinedFormat]) -> Convention {
        Convention::new(
            Selector::Kind(DeclarationKind::Variable),
            FormatSpec::Predefined(formats.to_vec()),
        )
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn predefined_formats_are_or_ed() {
        let conv = convention(&[PredefinedFormat::CamelCase, PredefinedFormat::UpperCase]);
        assert_eq!(validate_name(&conv, "fooBar"), Ok(()));
        assert_eq!(validate_name(&conv, "FOO_BAR"), Ok(()));
        assert_eq!(
            validate_name(&conv, "Foo_bar"),
            Err(NamingFailure::DoesNotMatchFormat {
                formats: vec![PredefinedFormat::CamelCase, PredefinedFormat::UpperCase],
                processed_name: None,
            })
        );
    }

    #[test]
    fn format_none_always_passes() {
        let conv = Convention::new(Selector::Kind(DeclarationKind::Variable), FormatSpec::None);
        assert_eq!(validate_name(&conv, "Any_Thing-at all"), Ok(()));
    }

    #[test]
    fn residual_is_reported_when_stripped() {
        let conv = convention(&[PredefinedFormat::CamelCase])
            .with_leading_underscore(UnderscorePolicy::Allow)
            .with_prefix(strings(&["is"]));
        assert_eq!(
            validate_name(&conv, "_isReady_x"),
            Err(NamingFailure::DoesNotMatchFormat {
                formats: vec![PredefinedFormat::CamelCase],
                processed_name: Some("Ready_x".to_string()),
            })
        );
    }

    #[test]
    fn underscore_stage_runs_before_affix_stage() {
        let conv = convention(&[PredefinedFormat::CamelCase])
            .with_leading_underscore(UnderscorePolicy::Require)
            .with_prefix(strings(&["my"]));
        assert_eq!(
            validate_name(&conv, "myValue"),
            Err(NamingFailure::MissingUnderscore {
                position: UnderscorePosition::Leading,
                count: UnderscoreCount::One,
            })
        );
        assert_eq!(validate_name(&conv, "_myValue"), Ok(()));
    }

    #[test]
    fn prefix_then_suffix() {
        let conv = convention(&[PredefinedFormat::PascalCase])
            .with_prefix(strings(&["I"]))
            .with_suffix(strings(&["Props"]));
        assert_eq!(validate_name(&conv, "IButtonProps"), Ok(()));
        assert!(matches!(
            validate_name(&conv, "IButton"),
            Err(NamingFailure::MissingAffix {
                position: AffixPosition::Suffix,
                ..
            })
        ));
    }

    #[test]
    fn custom_checks_original_name() {
        let conv = convention(&[PredefinedFormat::CamelCase])
            .with_leading_underscore(UnderscorePolicy::Allow)
            .with_custom(NamePattern::new("^_", false).unwrap());
        assert_eq!(
            validate_name(&conv, "_hidden"),
            Err(NamingFailure::SatisfyCustom {
                regex: "^_".to_string(),
                must_match: false,
            })
        );
        assert_eq!(validate_name(&conv, "shown"), Ok(()));
    }

    #[test]
    fn custom_runs_before_format() {
        let conv = convention(&[PredefinedFormat::CamelCase])
            .with_custom(NamePattern::new("^[a-z]", true).unwrap());
        assert!(matches!(
            validate_name(&conv, "Bad_name"),
            Err(NamingFailure::SatisfyCustom { .. })
        ));
    }

    #[test]
    fn custom_format_checks_residual() {
        let conv = Convention::new(
            Selector::Kind(DeclarationKind::Interface),
            FormatSpec::Custom(NamePattern::new("^[A-Z][a-z]+$", true).unwrap()),
        )
        .with_prefix(strings(&["I"]));
        assert_eq!(validate_name(&conv, "IShape"), Ok(()));
        assert_eq!(
            validate_name(&conv, "IShapeX"),
            Err(NamingFailure::SatisfyCustom {
                regex: "^[A-Z][a-z]+$".to_string(),
                must_match: true,
            })
        );
    }

    #[test]
    fn name_consumed_entirely_passes_format() {
        let conv = convention(&[PredefinedFormat::PascalCase])
            .with_leading_underscore(UnderscorePolicy::AllowSingleOrDouble);
        assert_eq!(validate_name(&conv, "__"), Ok(()));
    }
}
