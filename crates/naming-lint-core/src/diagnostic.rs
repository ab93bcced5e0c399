//! Validation failures and the diagnostics reported for them.

use crate::affix::{AffixPosition, UnderscoreCount, UnderscorePosition};
use crate::convention::Convention;
use crate::declaration::Declaration;
use crate::format::{join_formats, PredefinedFormat};
use crate::selector::DeclarationKind;
use crate::types::{Location, Severity, Suggestion, Violation};
use std::collections::BTreeMap;
use std::fmt;

/// Rule name attached to every violation the engine produces.
pub const RULE_NAME: &str = "naming-convention";

/// Why a name failed its governing convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingFailure {
    /// The residual name matched none of the predefined formats.
    DoesNotMatchFormat {
        /// Configured formats, in configuration order.
        formats: Vec<PredefinedFormat>,
        /// Residual after stripping, when it differs from the name.
        processed_name: Option<String>,
    },
    /// Underscores were present where the policy forbids them or too many
    /// were present for a `require` policy.
    UnexpectedUnderscore {
        /// End of the name.
        position: UnderscorePosition,
    },
    /// A `require` policy found too few underscores.
    MissingUnderscore {
        /// End of the name.
        position: UnderscorePosition,
        /// How many were required.
        count: UnderscoreCount,
    },
    /// None of the configured prefixes or suffixes was present.
    MissingAffix {
        /// Prefix or suffix.
        position: AffixPosition,
        /// Configured affixes, in configuration order.
        affixes: Vec<String>,
    },
    /// A custom pattern did not (or did) match.
    SatisfyCustom {
        /// Pattern source.
        regex: String,
        /// Whether the pattern had to match.
        must_match: bool,
    },
}

impl NamingFailure {
    /// Returns the message id for this failure.
    #[must_use]
    pub fn message_id(&self) -> MessageId {
        match self {
            Self::DoesNotMatchFormat { .. } => MessageId::DoesNotMatchFormat,
            Self::UnexpectedUnderscore { .. } => MessageId::UnexpectedUnderscore,
            Self::MissingUnderscore { .. } => MessageId::MissingUnderscore,
            Self::MissingAffix { .. } => MessageId::MissingAffix,
            Self::SatisfyCustom { .. } => MessageId::SatisfyCustom,
        }
    }
}

/// Stable identifier of a failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageId {
    /// `doesNotMatchFormat`
    DoesNotMatchFormat,
    /// `unexpectedUnderscore`
    UnexpectedUnderscore,
    /// `missingUnderscore`
    MissingUnderscore,
    /// `missingAffix`
    MissingAffix,
    /// `satisfyCustom`
    SatisfyCustom,
}

impl MessageId {
    /// Every message id.
    pub const ALL: [Self; 5] = [
        Self::DoesNotMatchFormat,
        Self::UnexpectedUnderscore,
        Self::MissingUnderscore,
        Self::MissingAffix,
        Self::SatisfyCustom,
    ];

    /// Returns the message id string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DoesNotMatchFormat => "doesNotMatchFormat",
            Self::UnexpectedUnderscore => "unexpectedUnderscore",
            Self::MissingUnderscore => "missingUnderscore",
            Self::MissingAffix => "missingAffix",
            Self::SatisfyCustom => "satisfyCustom",
        }
    }

    /// Returns the violation code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::DoesNotMatchFormat => "NC001",
            Self::UnexpectedUnderscore => "NC002",
            Self::MissingUnderscore => "NC003",
            Self::MissingAffix => "NC004",
            Self::SatisfyCustom => "NC005",
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure bound to the declaration it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    failure: NamingFailure,
    kind: DeclarationKind,
    label: Option<&'static str>,
    name: String,
    location: Location,
    severity: Severity,
    doc_ref: Option<String>,
}

impl Diagnostic {
    /// Reports `failure` for `declaration` under `convention`.
    ///
    /// The kind label is dropped when the convention was written against a
    /// meta selector.
    #[must_use]
    pub fn new(failure: NamingFailure, convention: &Convention, declaration: &Declaration) -> Self {
        let label = if convention.selector().is_meta() {
            None
        } else {
            Some(declaration.kind.label())
        };
        Self {
            failure,
            kind: declaration.kind,
            label,
            name: declaration.name.clone(),
            location: declaration.location.clone(),
            severity: convention.severity(),
            doc_ref: convention.doc_ref().map(str::to_string),
        }
    }

    /// Returns the failure.
    #[must_use]
    pub fn failure(&self) -> &NamingFailure {
        &self.failure
    }

    /// Returns the message id.
    #[must_use]
    pub fn message_id(&self) -> MessageId {
        self.failure.message_id()
    }

    /// Returns the declaration kind.
    #[must_use]
    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// Returns the original name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name token location.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the severity of the governing convention.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Interpolation data, keyed by placeholder name.
    #[must_use]
    pub fn data(&self) -> BTreeMap<&'static str, String> {
        let mut data = BTreeMap::new();
        if let Some(label) = self.label {
            data.insert("type", label.to_string());
        }
        data.insert("name", self.name.clone());

        match &self.failure {
            NamingFailure::DoesNotMatchFormat {
                formats,
                processed_name,
            } => {
                data.insert("formats", join_formats(formats));
                if let Some(processed) = processed_name {
                    data.insert("processedName", processed.clone());
                }
            }
            NamingFailure::UnexpectedUnderscore { position } => {
                data.insert("position", position.as_str().to_string());
            }
            NamingFailure::MissingUnderscore { position, count } => {
                data.insert("position", position.as_str().to_string());
                data.insert("count", count.as_str().to_string());
            }
            NamingFailure::MissingAffix { position, affixes } => {
                data.insert("position", position.as_str().to_string());
                data.insert("affixes", affixes.join(", "));
            }
            NamingFailure::SatisfyCustom { regex, must_match } => {
                data.insert("regex", regex.clone());
                data.insert("regexMatch", regex_match_word(*must_match).to_string());
            }
        }
        data
    }

    /// Renders the human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        let subject = match self.label {
            Some(label) => format!("{label} name `{}`", self.name),
            None => format!("Name `{}`", self.name),
        };
        match &self.failure {
            NamingFailure::DoesNotMatchFormat {
                formats,
                processed_name: Some(processed),
            } => format!(
                "{subject} trimmed as `{processed}` must match one of the following formats: {}",
                join_formats(formats)
            ),
            NamingFailure::DoesNotMatchFormat { formats, .. } => format!(
                "{subject} must match one of the following formats: {}",
                join_formats(formats)
            ),
            NamingFailure::UnexpectedUnderscore { position } => format!(
                "{subject} must not have a {} underscore.",
                position.as_str()
            ),
            NamingFailure::MissingUnderscore { position, count } => format!(
                "{subject} must have {} {} underscore(s).",
                count.as_str(),
                position.as_str()
            ),
            NamingFailure::MissingAffix { position, affixes } => format!(
                "{subject} must have one of the following {}es: {}",
                position.as_str(),
                affixes.join(", ")
            ),
            NamingFailure::SatisfyCustom { regex, must_match } => format!(
                "{subject} must {} the RegExp: {regex}",
                regex_match_word(*must_match)
            ),
        }
    }

    fn suggestion(&self) -> Option<Suggestion> {
        match &self.failure {
            NamingFailure::DoesNotMatchFormat { formats, .. } if formats.len() == 1 => Some(
                Suggestion::new(format!("rename to {} form", formats[0].as_str())),
            ),
            NamingFailure::MissingAffix { position, affixes } if affixes.len() == 1 => Some(
                Suggestion::new(format!("add the {} `{}`", position.as_str(), affixes[0])),
            ),
            _ => None,
        }
    }
}

fn regex_match_word(must_match: bool) -> &'static str {
    if must_match {
        "match"
    } else {
        "not match"
    }
}

impl From<Diagnostic> for Violation {
    fn from(diagnostic: Diagnostic) -> Self {
        let message_id = diagnostic.message_id();
        let mut violation = Violation::new(
            message_id.code(),
            RULE_NAME,
            diagnostic.severity,
            diagnostic.location.clone(),
            diagnostic.message(),
        )
        .with_message_id(message_id.as_str());
        if let Some(suggestion) = diagnostic.suggestion() {
            violation = violation.with_suggestion(suggestion);
        }
        if let Some(doc_ref) = diagnostic.doc_ref {
            violation = violation.with_doc_ref(doc_ref);
        }
        violation
    }
}
