//! Built-in convention sets used when a config names no `[[naming]]` entry.

use crate::affix::UnderscorePolicy;
use crate::convention::{Convention, FormatSpec};
use crate::format::PredefinedFormat;
use crate::selector::{DeclarationKind, MetaSelector, Selector};

/// Preset convention sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// camelCase by default, UPPER_CASE also allowed for variables,
    /// PascalCase for types; single leading or trailing underscores allowed.
    Recommended,
    /// Like `Recommended` with the strict formats and no underscores.
    Strict,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Self; 2] = [Self::Recommended, Self::Strict];

    /// Returns the preset name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
        }
    }

    /// Parses a preset name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// Returns the conventions for this preset, in declaration order.
    #[must_use]
    pub fn conventions(self) -> Vec<Convention> {
        match self {
            Self::Recommended => recommended(),
            Self::Strict => strict(),
        }
    }
}

fn predefined(formats: &[PredefinedFormat]) -> FormatSpec {
    FormatSpec::Predefined(formats.to_vec())
}

fn recommended() -> Vec<Convention> {
    use PredefinedFormat::{CamelCase, PascalCase, UpperCase};
    vec![
        Convention::new(Selector::Meta(MetaSelector::Default), predefined(&[CamelCase]))
            .with_leading_underscore(UnderscorePolicy::Allow)
            .with_trailing_underscore(UnderscorePolicy::Allow),
        Convention::new(
            Selector::Kind(DeclarationKind::Variable),
            predefined(&[CamelCase, UpperCase]),
        )
        .with_leading_underscore(UnderscorePolicy::Allow)
        .with_trailing_underscore(UnderscorePolicy::Allow),
        Convention::new(Selector::Meta(MetaSelector::TypeLike), predefined(&[PascalCase])),
    ]
}

fn strict() -> Vec<Convention> {
    use PredefinedFormat::{StrictCamelCase, StrictPascalCase, UpperCase};
    vec![
        Convention::new(
            Selector::Meta(MetaSelector::Default),
            predefined(&[StrictCamelCase]),
        )
        .with_leading_underscore(UnderscorePolicy::Forbid)
        .with_trailing_underscore(UnderscorePolicy::Forbid),
        Convention::new(
            Selector::Kind(DeclarationKind::Variable),
            predefined(&[StrictCamelCase, UpperCase]),
        )
        .with_leading_underscore(UnderscorePolicy::Forbid)
        .with_trailing_underscore(UnderscorePolicy::Forbid),
        Convention::new(
            Selector::Meta(MetaSelector::TypeLike),
            predefined(&[StrictPascalCase]),
        )
        .with_leading_underscore(UnderscorePolicy::Forbid)
        .with_trailing_underscore(UnderscorePolicy::Forbid),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::NamingConventions;

    #[test]
    fn presets_validate() {
        for preset in Preset::ALL {
            assert!(
                NamingConventions::new(preset.conventions()).is_ok(),
                "{} should validate",
                preset.as_str()
            );
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!(Preset::parse("strict"), Some(Preset::Strict));
        assert_eq!(Preset::parse("minimal"), None);
    }
}
