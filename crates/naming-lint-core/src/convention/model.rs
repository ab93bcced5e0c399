//! Pure domain model for naming conventions.
//!
//! No serde and no I/O here. Field invariants are enforced by the
//! constructors; whole-list invariants by [`NamingConventions::new`].

use crate::affix::UnderscorePolicy;
use crate::declaration::TypeInfo;
use crate::format::PredefinedFormat;
use crate::selector::{DeclarationKind, Modifier, ModifierSet, Selector, Tier, TypeModifier};
use crate::types::Severity;
use regex::Regex;
use std::cmp::Reverse;
use std::fmt;
use tracing::debug;

// ────────────────────────────────────────────
// Newtypes with validation
// ────────────────────────────────────────────

/// A compiled regular expression plus the polarity it is applied with.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
    must_match: bool,
}

impl NamePattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is not a valid regular expression.
    pub fn new(source: &str, must_match: bool) -> Result<Self, ModelError> {
        let regex = Regex::new(source).map_err(|e| ModelError::InvalidRegex {
            pattern: source.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex, must_match })
    }

    /// Whether `name` satisfies the pattern under its polarity.
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        self.regex.is_match(name) == self.must_match
    }

    /// Returns the pattern source.
    #[must_use]
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns whether the pattern has to match.
    #[must_use]
    pub fn must_match(&self) -> bool {
        self.must_match
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source() && self.must_match == other.must_match
    }
}

impl Eq for NamePattern {}

/// What the residual name is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec {
    /// No format is enforced.
    None,
    /// The residual must match at least one of these formats.
    Predefined(Vec<PredefinedFormat>),
    /// The residual must satisfy a custom pattern.
    Custom(NamePattern),
}

impl FormatSpec {
    /// Creates a predefined format set.
    ///
    /// # Errors
    ///
    /// Returns error if `formats` is empty.
    pub fn predefined(formats: Vec<PredefinedFormat>) -> Result<Self, ModelError> {
        if formats.is_empty() {
            return Err(ModelError::EmptyFormatList);
        }
        Ok(Self::Predefined(formats))
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Predefined(formats) => {
                f.write_str(&crate::format::join_formats(formats))
            }
            Self::Custom(pattern) if pattern.must_match() => write!(f, "/{}/", pattern.source()),
            Self::Custom(pattern) => write!(f, "!/{}/", pattern.source()),
        }
    }
}

// ────────────────────────────────────────────
// Domain entities
// ────────────────────────────────────────────

/// One normalized convention: a single selector with its constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convention {
    index: Option<usize>,
    selector: Selector,
    modifiers: ModifierSet,
    types: Vec<TypeModifier>,
    filter: Option<NamePattern>,
    format: FormatSpec,
    leading_underscore: Option<UnderscorePolicy>,
    trailing_underscore: Option<UnderscorePolicy>,
    prefix: Vec<String>,
    suffix: Vec<String>,
    custom: Option<NamePattern>,
    severity: Severity,
    doc_ref: Option<String>,
}

impl Convention {
    /// Creates a convention with no constraints besides `format`.
    #[must_use]
    pub fn new(selector: Selector, format: FormatSpec) -> Self {
        Self {
            index: None,
            selector,
            modifiers: ModifierSet::empty(),
            types: Vec::new(),
            filter: None,
            format,
            leading_underscore: None,
            trailing_underscore: None,
            prefix: Vec::new(),
            suffix: Vec::new(),
            custom: None,
            severity: Severity::Error,
            doc_ref: None,
        }
    }

    /// Sets the position of the configuration entry this came from.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Sets the required modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierSet) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Adds one required modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Sets the type constraint.
    #[must_use]
    pub fn with_types(mut self, types: Vec<TypeModifier>) -> Self {
        self.types = types;
        self
    }

    /// Sets the name filter.
    #[must_use]
    pub fn with_filter(mut self, filter: NamePattern) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the leading underscore policy.
    #[must_use]
    pub fn with_leading_underscore(mut self, policy: UnderscorePolicy) -> Self {
        self.leading_underscore = Some(policy);
        self
    }

    /// Sets the trailing underscore policy.
    #[must_use]
    pub fn with_trailing_underscore(mut self, policy: UnderscorePolicy) -> Self {
        self.trailing_underscore = Some(policy);
        self
    }

    /// Sets the accepted prefixes.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Vec<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Sets the accepted suffixes.
    #[must_use]
    pub fn with_suffix(mut self, suffix: Vec<String>) -> Self {
        self.suffix = suffix;
        self
    }

    /// Sets the custom pattern checked against the full name.
    #[must_use]
    pub fn with_custom(mut self, custom: NamePattern) -> Self {
        self.custom = Some(custom);
        self
    }

    /// Sets the severity of violations.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the style-guide reference.
    #[must_use]
    pub fn with_doc_ref(mut self, doc_ref: impl Into<String>) -> Self {
        self.doc_ref = Some(doc_ref.into());
        self
    }

    /// Position of the originating configuration entry.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index.unwrap_or_default()
    }

    /// Returns the selector.
    #[must_use]
    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Returns the required modifiers.
    #[must_use]
    pub fn modifiers(&self) -> ModifierSet {
        self.modifiers
    }

    /// Returns the type constraint; empty means unconstrained.
    #[must_use]
    pub fn types(&self) -> &[TypeModifier] {
        &self.types
    }

    /// Returns the name filter.
    #[must_use]
    pub fn filter(&self) -> Option<&NamePattern> {
        self.filter.as_ref()
    }

    /// Returns the format spec.
    #[must_use]
    pub fn format(&self) -> &FormatSpec {
        &self.format
    }

    /// Returns the leading underscore policy.
    #[must_use]
    pub fn leading_underscore(&self) -> Option<UnderscorePolicy> {
        self.leading_underscore
    }

    /// Returns the trailing underscore policy.
    #[must_use]
    pub fn trailing_underscore(&self) -> Option<UnderscorePolicy> {
        self.trailing_underscore
    }

    /// Returns the accepted prefixes.
    #[must_use]
    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }

    /// Returns the accepted suffixes.
    #[must_use]
    pub fn suffix(&self) -> &[String] {
        &self.suffix
    }

    /// Returns the custom pattern.
    #[must_use]
    pub fn custom(&self) -> Option<&NamePattern> {
        self.custom.as_ref()
    }

    /// Returns the severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the style-guide reference.
    #[must_use]
    pub fn doc_ref(&self) -> Option<&str> {
        self.doc_ref.as_deref()
    }

    /// Whether the selector applies to `kind`.
    #[must_use]
    pub fn covers(&self, kind: DeclarationKind) -> bool {
        self.selector.covers(kind)
    }

    /// Whether every required modifier is present.
    #[must_use]
    pub fn modifiers_satisfied(&self, present: ModifierSet) -> bool {
        present.is_superset_of(self.modifiers)
    }

    /// Whether the declaration's type satisfies the constraint.
    ///
    /// Unresolved or failed types never satisfy a non-empty constraint.
    #[must_use]
    pub fn types_satisfied(&self, ty: &TypeInfo) -> bool {
        if self.types.is_empty() {
            return true;
        }
        match ty {
            TypeInfo::Resolved(declared) => self.types.iter().any(|t| declared.satisfies(*t)),
            TypeInfo::Failed(reason) => {
                debug!(
                    "naming[{}]: type resolution failed ({reason}), skipping",
                    self.index()
                );
                false
            }
            TypeInfo::Unavailable => false,
        }
    }

    /// Whether the filter lets `name` through. No filter accepts everything.
    #[must_use]
    pub fn filter_accepts(&self, name: &str) -> bool {
        self.filter.as_ref().map_or(true, |f| f.accepts(name))
    }

    /// Ordering weight within a tier: a type constraint outweighs any
    /// number of modifiers.
    fn weight(&self) -> usize {
        let types = if self.types.is_empty() { 0 } else { 1 << 8 };
        types + self.modifiers.len()
    }

    fn priority(&self) -> (Tier, Reverse<usize>) {
        (self.selector.tier(), Reverse(self.weight()))
    }

    fn same_constraints(&self, other: &Self) -> bool {
        let mut mine = self.types.clone();
        let mut theirs = other.types.clone();
        mine.sort_unstable();
        mine.dedup();
        theirs.sort_unstable();
        theirs.dedup();
        self.selector == other.selector && self.modifiers == other.modifiers && mine == theirs
    }
}

// ────────────────────────────────────────────
// Aggregate root
// ────────────────────────────────────────────

/// Validated conventions, held in resolution priority order.
#[derive(Debug, Clone, Default)]
pub struct NamingConventions {
    conventions: Vec<Convention>,
}

impl NamingConventions {
    /// Validates conventions given in declaration order and sorts them by
    /// priority.
    ///
    /// Conventions without an explicit index are numbered by position.
    ///
    /// # Errors
    ///
    /// Returns every modifier or type constraint that no covered kind can
    /// carry, and every convention fully shadowed by an earlier one.
    pub fn new(mut conventions: Vec<Convention>) -> Result<Self, Vec<ModelError>> {
        for (position, convention) in conventions.iter_mut().enumerate() {
            convention.index.get_or_insert(position);
        }

        let mut errors = Vec::new();
        for convention in &conventions {
            let allowed = convention.selector.allowed_modifiers();
            for modifier in convention.modifiers.iter() {
                if !allowed.contains(modifier) {
                    errors.push(ModelError::InapplicableModifier {
                        index: convention.index(),
                        modifier: modifier.as_str(),
                        selector: convention.selector.as_str(),
                    });
                }
            }
            if !convention.types.is_empty() && !convention.selector.carries_type() {
                errors.push(ModelError::UntypedSelector {
                    index: convention.index(),
                    selector: convention.selector.as_str(),
                });
            }
        }

        for (later_pos, later) in conventions.iter().enumerate() {
            let shadowing = conventions[..later_pos]
                .iter()
                .find(|earlier| earlier.filter.is_none() && earlier.same_constraints(later));
            if let Some(earlier) = shadowing {
                errors.push(ModelError::ShadowedConvention {
                    index: later.index(),
                    by: earlier.index(),
                    selector: later.selector.as_str(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // Stable: declaration order breaks the remaining ties.
        conventions.sort_by_key(Convention::priority);
        Ok(Self { conventions })
    }

    /// Creates an empty set; every declaration is unchecked.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns conventions in priority order.
    #[must_use]
    pub fn conventions(&self) -> &[Convention] {
        &self.conventions
    }

    /// Returns the number of normalized conventions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    /// Returns true if no convention is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }

    /// Conventions that could govern `kind`, in priority order.
    pub fn candidates(&self, kind: DeclarationKind) -> impl Iterator<Item = &Convention> {
        self.conventions.iter().filter(move |c| c.covers(kind))
    }

    /// Whether any convention covering `kind` has a type constraint.
    #[must_use]
    pub fn needs_type_info(&self, kind: DeclarationKind) -> bool {
        self.candidates(kind).any(|c| !c.types.is_empty())
    }
}

// ────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────

/// Errors in domain model construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// `selector` is an empty list.
    #[error("selector list must not be empty")]
    EmptySelectorList,

    /// Unknown selector token.
    #[error("unknown selector `{token}`")]
    UnknownSelector {
        /// The invalid token.
        token: String,
    },

    /// Unknown modifier token.
    #[error("unknown modifier `{token}`")]
    UnknownModifier {
        /// The invalid token.
        token: String,
    },

    /// Unknown type token.
    #[error("unknown type `{token}`, expected: boolean, string, number, function, array")]
    UnknownType {
        /// The invalid token.
        token: String,
    },

    /// Unknown format token.
    #[error("unknown format `{token}`")]
    UnknownFormat {
        /// The invalid token.
        token: String,
    },

    /// `format` is missing.
    #[error("`format` is required (use \"none\" to disable format checking)")]
    MissingFormat,

    /// `format` is an empty list.
    #[error("format list must not be empty")]
    EmptyFormatList,

    /// Unknown underscore policy token.
    #[error("unknown underscore policy `{token}`")]
    UnknownUnderscorePolicy {
        /// The invalid token.
        token: String,
    },

    /// A prefix or suffix is the empty string.
    #[error("affix must not be empty")]
    EmptyAffix,

    /// Pattern has invalid regex syntax.
    #[error("invalid regex `{pattern}`: {reason}")]
    InvalidRegex {
        /// The invalid pattern.
        pattern: String,
        /// Why it's invalid.
        reason: String,
    },

    /// A required modifier cannot appear on any covered kind.
    #[error("naming[{index}]: modifier `{modifier}` cannot apply to selector `{selector}`")]
    InapplicableModifier {
        /// Entry position.
        index: usize,
        /// The modifier.
        modifier: &'static str,
        /// The selector.
        selector: &'static str,
    },

    /// `types` on a selector whose kinds carry no type.
    #[error("naming[{index}]: `types` cannot apply to selector `{selector}`")]
    UntypedSelector {
        /// Entry position.
        index: usize,
        /// The selector.
        selector: &'static str,
    },

    /// An earlier unfiltered entry with identical constraints always wins.
    #[error("naming[{index}]: `{selector}` convention is shadowed by naming[{by}] and can never apply")]
    ShadowedConvention {
        /// Entry position of the shadowed convention.
        index: usize,
        /// Entry position of the shadowing convention.
        by: usize,
        /// The shared selector.
        selector: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{DeclaredType, TypeClass};
    use crate::selector::MetaSelector;

    fn camel(selector: Selector) -> Convention {
        Convention::new(
            selector,
            FormatSpec::Predefined(vec![PredefinedFormat::CamelCase]),
        )
    }

    fn property() -> Selector {
        Selector::Kind(DeclarationKind::Property)
    }

    #[test]
    fn pattern_polarity() {
        let exclude = NamePattern::new("^[iI]gnored", false).unwrap();
        assert!(!exclude.accepts("ignoredName"));
        assert!(exclude.accepts("kept"));

        let include = NamePattern::new("^[iI]gnored", true).unwrap();
        assert!(include.accepts("IgnoredName"));
        assert!(!include.accepts("kept"));
    }

    #[test]
    fn invalid_regex_is_rejected() {
        assert!(matches!(
            NamePattern::new("(", true),
            Err(ModelError::InvalidRegex { .. })
        ));
    }

    #[test]
    fn empty_predefined_list_is_rejected() {
        assert_eq!(FormatSpec::predefined(vec![]), Err(ModelError::EmptyFormatList));
    }

    #[test]
    fn sorted_by_tier_then_weight_then_order() {
        let conventions = NamingConventions::new(vec![
            camel(Selector::Meta(MetaSelector::Default)),
            camel(Selector::Meta(MetaSelector::MemberLike)),
            camel(property()),
            camel(property()).with_modifier(Modifier::Static),
            camel(property()).with_types(vec![TypeModifier::Boolean]),
        ])
        .unwrap();

        let order: Vec<usize> = conventions.conventions().iter().map(Convention::index).collect();
        assert_eq!(order, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn equal_priority_keeps_declaration_order() {
        let conventions = NamingConventions::new(vec![
            camel(property()).with_modifier(Modifier::Static),
            camel(property()).with_modifier(Modifier::Readonly),
        ])
        .unwrap();
        let order: Vec<usize> = conventions.conventions().iter().map(Convention::index).collect();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn inapplicable_modifier_is_rejected() {
        let errors = NamingConventions::new(vec![
            camel(Selector::Kind(DeclarationKind::Variable)).with_modifier(Modifier::Static),
        ])
        .unwrap_err();
        assert_eq!(
            errors,
            vec![ModelError::InapplicableModifier {
                index: 0,
                modifier: "static",
                selector: "variable",
            }]
        );
    }

    #[test]
    fn types_on_untyped_selector_are_rejected() {
        let errors = NamingConventions::new(vec![
            camel(Selector::Meta(MetaSelector::TypeLike)).with_types(vec![TypeModifier::String]),
        ])
        .unwrap_err();
        assert!(matches!(errors[0], ModelError::UntypedSelector { index: 0, .. }));
    }

    #[test]
    fn shadowed_convention_is_rejected() {
        let errors = NamingConventions::new(vec![
            camel(property()).with_index(0),
            camel(property()).with_index(3),
        ])
        .unwrap_err();
        assert_eq!(
            errors,
            vec![ModelError::ShadowedConvention {
                index: 3,
                by: 0,
                selector: "property",
            }]
        );
    }

    #[test]
    fn filtered_convention_does_not_shadow() {
        let filter = NamePattern::new("^_", false).unwrap();
        let result = NamingConventions::new(vec![
            camel(property()).with_filter(filter),
            camel(property()),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn types_constraint_requires_resolved_type() {
        let conv = camel(Selector::Kind(DeclarationKind::Variable))
            .with_types(vec![TypeModifier::Boolean]);
        assert!(conv.types_satisfied(&TypeInfo::Resolved(DeclaredType::single(
            TypeClass::Boolean
        ))));
        assert!(!conv.types_satisfied(&TypeInfo::Unavailable));
        assert!(!conv.types_satisfied(&TypeInfo::Failed("checker crashed".to_string())));
        assert!(camel(property()).types_satisfied(&TypeInfo::Unavailable));
    }

    #[test]
    fn needs_type_info_only_for_typed_candidates() {
        let conventions = NamingConventions::new(vec![
            camel(Selector::Kind(DeclarationKind::Variable))
                .with_types(vec![TypeModifier::Boolean]),
            camel(Selector::Meta(MetaSelector::Default)),
        ])
        .unwrap();
        assert!(conventions.needs_type_info(DeclarationKind::Variable));
        assert!(!conventions.needs_type_info(DeclarationKind::Parameter));
    }

    #[test]
    fn format_spec_display() {
        assert_eq!(FormatSpec::None.to_string(), "none");
        let custom = FormatSpec::Custom(NamePattern::new("^x", false).unwrap());
        assert_eq!(custom.to_string(), "!/^x/");
    }
}
