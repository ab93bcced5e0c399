//! Underscore and affix stages of the name pipeline.
//!
//! Each stage takes the name produced by the previous one and either returns
//! a (possibly shorter) residual or the failure that stops the pipeline.

use crate::diagnostic::NamingFailure;
use std::fmt;

// ────────────────────────────────────────────
// Policies and positions
// ────────────────────────────────────────────

/// Contract for underscores at one end of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnderscorePolicy {
    /// No underscore allowed.
    Forbid,
    /// Exactly one underscore.
    Require,
    /// Exactly two underscores.
    RequireDouble,
    /// One underscore is stripped if present.
    Allow,
    /// Two underscores are stripped if present.
    AllowDouble,
    /// Two underscores, else one, are stripped if present.
    AllowSingleOrDouble,
}

impl UnderscorePolicy {
    /// Every policy.
    pub const ALL: [Self; 6] = [
        Self::Forbid,
        Self::Require,
        Self::RequireDouble,
        Self::Allow,
        Self::AllowDouble,
        Self::AllowSingleOrDouble,
    ];

    /// Returns the configuration token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forbid => "forbid",
            Self::Require => "require",
            Self::RequireDouble => "requireDouble",
            Self::Allow => "allow",
            Self::AllowDouble => "allowDouble",
            Self::AllowSingleOrDouble => "allowSingleOrDouble",
        }
    }

    /// Parses a configuration token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == token)
    }
}

impl fmt::Display for UnderscorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// End of the name an underscore stage inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnderscorePosition {
    /// Start of the name.
    Leading,
    /// End of the name.
    Trailing,
}

impl UnderscorePosition {
    /// Returns the word used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Leading => "leading",
            Self::Trailing => "trailing",
        }
    }
}

/// How many underscores a `require` policy asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnderscoreCount {
    /// A single underscore.
    One,
    /// A double underscore.
    Two,
}

impl UnderscoreCount {
    /// Returns the word used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Two => "two",
        }
    }
}

/// End of the name an affix stage inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixPosition {
    /// Literal at the start of the name.
    Prefix,
    /// Literal at the end of the name.
    Suffix,
}

impl AffixPosition {
    /// Returns the word used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
        }
    }
}

// ────────────────────────────────────────────
// Stages
// ────────────────────────────────────────────

/// Counts consecutive `_` at the given end of `name`.
#[must_use]
pub fn count_underscores(name: &str, position: UnderscorePosition) -> usize {
    match position {
        UnderscorePosition::Leading => name.bytes().take_while(|b| *b == b'_').count(),
        UnderscorePosition::Trailing => name.bytes().rev().take_while(|b| *b == b'_').count(),
    }
}

/// Removes `count` underscores from the given end. `_` is a single byte, so
/// the slice always lands on a character boundary.
fn strip_underscores(name: &str, position: UnderscorePosition, count: usize) -> &str {
    match position {
        UnderscorePosition::Leading => &name[count..],
        UnderscorePosition::Trailing => &name[..name.len() - count],
    }
}

/// Applies an underscore policy to one end of `name`.
///
/// A missing policy leaves the name untouched.
///
/// # Errors
///
/// Returns [`NamingFailure::UnexpectedUnderscore`] or
/// [`NamingFailure::MissingUnderscore`] when the count breaks the contract.
pub fn apply_underscore_policy(
    name: &str,
    policy: Option<UnderscorePolicy>,
    position: UnderscorePosition,
) -> Result<&str, NamingFailure> {
    let Some(policy) = policy else {
        return Ok(name);
    };
    let found = count_underscores(name, position);
    let unexpected = || NamingFailure::UnexpectedUnderscore { position };
    let missing = |count| NamingFailure::MissingUnderscore { position, count };

    let strip = match policy {
        UnderscorePolicy::Forbid => {
            if found > 0 {
                return Err(unexpected());
            }
            0
        }
        UnderscorePolicy::Require => match found {
            0 => return Err(missing(UnderscoreCount::One)),
            1 => 1,
            _ => return Err(unexpected()),
        },
        UnderscorePolicy::RequireDouble => match found {
            0 | 1 => return Err(missing(UnderscoreCount::Two)),
            2 => 2,
            _ => return Err(unexpected()),
        },
        UnderscorePolicy::Allow => found.min(1),
        UnderscorePolicy::AllowDouble => {
            if found >= 2 {
                2
            } else {
                0
            }
        }
        UnderscorePolicy::AllowSingleOrDouble => found.min(2),
    };

    Ok(strip_underscores(name, position, strip))
}

/// Strips the first configured affix found at the given end of `name`.
///
/// An empty affix list passes the name through.
///
/// # Errors
///
/// Returns [`NamingFailure::MissingAffix`] when no affix matches.
pub fn apply_affix<'a>(
    name: &'a str,
    affixes: &[String],
    position: AffixPosition,
) -> Result<&'a str, NamingFailure> {
    if affixes.is_empty() {
        return Ok(name);
    }
    let stripped = affixes.iter().find_map(|affix| match position {
        AffixPosition::Prefix => name.strip_prefix(affix.as_str()),
        AffixPosition::Suffix => name.strip_suffix(affix.as_str()),
    });
    stripped.ok_or_else(|| NamingFailure::MissingAffix {
        position,
        affixes: affixes.to_vec(),
    })
}
