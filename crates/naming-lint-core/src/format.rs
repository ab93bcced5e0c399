//! Predefined name formats.
//!
//! Every predicate accepts the empty string: a name that was entirely
//! consumed by underscore or affix stripping has nothing left to violate.
//! Case tests use Unicode case properties and never consult a locale.

use std::fmt;

/// A predefined format a residual name can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedFormat {
    /// `camelCase`, acronym runs allowed.
    CamelCase,
    /// `strictCamelCase`, no consecutive capitals.
    StrictCamelCase,
    /// `PascalCase`, acronym runs allowed.
    PascalCase,
    /// `StrictPascalCase`, no consecutive capitals.
    StrictPascalCase,
    /// `snake_case`.
    SnakeCase,
    /// `UPPER_CASE`.
    UpperCase,
}

impl PredefinedFormat {
    /// Every predefined format.
    pub const ALL: [Self; 6] = [
        Self::CamelCase,
        Self::StrictCamelCase,
        Self::PascalCase,
        Self::StrictPascalCase,
        Self::SnakeCase,
        Self::UpperCase,
    ];

    /// Returns the configuration token, which doubles as the message text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::StrictCamelCase => "strictCamelCase",
            Self::PascalCase => "PascalCase",
            Self::StrictPascalCase => "StrictPascalCase",
            Self::SnakeCase => "snake_case",
            Self::UpperCase => "UPPER_CASE",
        }
    }

    /// Parses a configuration token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == token)
    }

    /// Whether `name` has this format.
    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        match self {
            Self::CamelCase => is_camel_case(name),
            Self::StrictCamelCase => is_strict_camel_case(name),
            Self::PascalCase => is_pascal_case(name),
            Self::StrictPascalCase => is_strict_pascal_case(name),
            Self::SnakeCase => is_snake_case(name),
            Self::UpperCase => is_upper_case(name),
        }
    }
}

impl fmt::Display for PredefinedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins formats the way messages list them: `camelCase, UPPER_CASE`.
#[must_use]
pub fn join_formats(formats: &[PredefinedFormat]) -> String {
    formats
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

fn first_char(name: &str) -> Option<char> {
    name.chars().next()
}

/// Loose camelCase: first character is not an uppercase letter and no
/// `_`/`-` separators appear.
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    match first_char(name) {
        None => true,
        Some(first) => !first.is_uppercase() && !name.contains(is_separator),
    }
}

/// camelCase without runs of two or more capitals.
#[must_use]
pub fn is_strict_camel_case(name: &str) -> bool {
    match first_char(name) {
        None => true,
        Some(first) => !first.is_uppercase() && has_strict_humps(name, false),
    }
}

/// Loose PascalCase: first character is not a lowercase letter and no
/// `_`/`-` separators appear.
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    match first_char(name) {
        None => true,
        Some(first) => !first.is_lowercase() && !name.contains(is_separator),
    }
}

/// PascalCase without runs of two or more capitals.
#[must_use]
pub fn is_strict_pascal_case(name: &str) -> bool {
    match first_char(name) {
        None => true,
        Some(first) => !first.is_lowercase() && has_strict_humps(name, true),
    }
}

/// No uppercase letters; words joined by single underscores.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    name.is_empty() || (!name.chars().any(char::is_uppercase) && has_single_underscores(name))
}

/// No lowercase letters; words joined by single underscores.
#[must_use]
pub fn is_upper_case(name: &str) -> bool {
    name.is_empty() || (!name.chars().any(char::is_lowercase) && has_single_underscores(name))
}

/// Walks the name tracking whether the previous character was a capital.
/// Two capitals in a row, or any separator, fail.
fn has_strict_humps(name: &str, starts_upper: bool) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => return true,
        Some(c) if is_separator(c) => return false,
        Some(_) => {}
    }

    let mut prev_upper = starts_upper;
    for c in chars {
        if is_separator(c) {
            return false;
        }
        let upper = c.is_uppercase();
        if upper && prev_upper {
            return false;
        }
        prev_upper = upper;
    }
    true
}

/// Underscores may only separate words: none leading, none trailing, never
/// doubled. Hyphens are not separators in either underscore format.
fn has_single_underscores(name: &str) -> bool {
    if name.starts_with('_') || name.ends_with('_') || name.contains('-') {
        return false;
    }
    !name.contains("__")
}
