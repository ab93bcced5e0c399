//! Declaration kinds, selectors, modifiers and type constraints.
//!
//! Kinds are a closed enumeration. Meta selectors expand to a fixed set of
//! concrete kinds through static coverage tables; there is no hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;

// ────────────────────────────────────────────
// Declaration kinds
// ────────────────────────────────────────────

/// The concrete kind of a named declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    /// `const x`, `let x`, `var x`, including destructured bindings.
    Variable,
    /// `function f() {}` and named function expressions.
    Function,
    /// A function or method parameter.
    Parameter,
    /// Class field, object-literal property, or type member property.
    Property,
    /// Constructor parameter with an accessibility or `readonly` modifier.
    ParameterProperty,
    /// Class method, object-literal method, or type member method.
    Method,
    /// `get`/`set` accessor.
    Accessor,
    /// Member of an enum.
    EnumMember,
    /// Class declaration or expression.
    Class,
    /// Interface declaration.
    Interface,
    /// Type alias declaration.
    TypeAlias,
    /// Enum declaration.
    Enum,
    /// Generic type parameter.
    TypeParameter,
}

impl DeclarationKind {
    /// Every concrete kind, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Variable,
        Self::Function,
        Self::Parameter,
        Self::Property,
        Self::ParameterProperty,
        Self::Method,
        Self::Accessor,
        Self::EnumMember,
        Self::Class,
        Self::Interface,
        Self::TypeAlias,
        Self::Enum,
        Self::TypeParameter,
    ];

    /// Returns the configuration token (e.g. `parameterProperty`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Parameter => "parameter",
            Self::Property => "property",
            Self::ParameterProperty => "parameterProperty",
            Self::Method => "method",
            Self::Accessor => "accessor",
            Self::EnumMember => "enumMember",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::TypeAlias => "typeAlias",
            Self::Enum => "enum",
            Self::TypeParameter => "typeParameter",
        }
    }

    /// Returns the human label used in messages (e.g. `Parameter Property`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Variable => "Variable",
            Self::Function => "Function",
            Self::Parameter => "Parameter",
            Self::Property => "Property",
            Self::ParameterProperty => "Parameter Property",
            Self::Method => "Method",
            Self::Accessor => "Accessor",
            Self::EnumMember => "Enum Member",
            Self::Class => "Class",
            Self::Interface => "Interface",
            Self::TypeAlias => "Type Alias",
            Self::Enum => "Enum",
            Self::TypeParameter => "Type Parameter",
        }
    }

    /// Parses a configuration token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == token)
    }

    /// Modifiers a declaration of this kind can carry.
    #[must_use]
    pub fn allowed_modifiers(self) -> &'static [Modifier] {
        use Modifier::{
            Abstract, Async, Const, Destructured, Exported, Global, Override, Private, Protected,
            Public, Readonly, RequiresQuotes, Static, Unused,
        };
        match self {
            Self::Variable => &[Const, Destructured, Exported, Global, Unused, Async],
            Self::Function => &[Exported, Global, Unused, Async],
            Self::Parameter => &[Destructured, Unused],
            Self::Property => &[
                Private,
                Protected,
                Public,
                Static,
                Readonly,
                Abstract,
                Override,
                RequiresQuotes,
            ],
            Self::ParameterProperty => &[Private, Protected, Public, Readonly],
            Self::Method => &[
                Private,
                Protected,
                Public,
                Static,
                Abstract,
                Override,
                Async,
                RequiresQuotes,
            ],
            Self::Accessor => &[
                Private,
                Protected,
                Public,
                Static,
                Abstract,
                Override,
                RequiresQuotes,
            ],
            Self::EnumMember => &[RequiresQuotes],
            Self::Class => &[Abstract, Exported, Unused],
            Self::Interface | Self::TypeAlias | Self::Enum => &[Exported, Unused],
            Self::TypeParameter => &[Unused],
        }
    }

    /// Whether a `types` constraint can apply to this kind.
    #[must_use]
    pub fn carries_type(self) -> bool {
        matches!(
            self,
            Self::Variable
                | Self::Parameter
                | Self::Property
                | Self::ParameterProperty
                | Self::Accessor
        )
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────
// Selectors
// ────────────────────────────────────────────

/// A selector covering several concrete kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaSelector {
    /// Every kind.
    Default,
    /// `variable`, `function`, `parameter`.
    VariableLike,
    /// `property`, `parameterProperty`, `method`, `accessor`, `enumMember`.
    MemberLike,
    /// `class`, `interface`, `typeAlias`, `enum`, `typeParameter`.
    TypeLike,
}

impl MetaSelector {
    /// Every meta selector.
    pub const ALL: [Self; 4] = [
        Self::Default,
        Self::VariableLike,
        Self::MemberLike,
        Self::TypeLike,
    ];

    /// Returns the configuration token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::VariableLike => "variableLike",
            Self::MemberLike => "memberLike",
            Self::TypeLike => "typeLike",
        }
    }

    /// The concrete kinds this meta selector expands to.
    #[must_use]
    pub fn covers(self) -> &'static [DeclarationKind] {
        use DeclarationKind::{
            Accessor, Class, Enum, EnumMember, Function, Interface, Method, Parameter,
            ParameterProperty, Property, TypeAlias, TypeParameter, Variable,
        };
        match self {
            Self::Default => &DeclarationKind::ALL,
            Self::VariableLike => &[Variable, Function, Parameter],
            Self::MemberLike => &[Property, ParameterProperty, Method, Accessor, EnumMember],
            Self::TypeLike => &[Class, Interface, TypeAlias, Enum, TypeParameter],
        }
    }
}

/// Specificity tier of a selector. Lower tiers win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Names a single concrete kind.
    Exact = 1,
    /// Names `variableLike`, `memberLike` or `typeLike`.
    Meta = 2,
    /// Names `default`.
    Default = 3,
}

/// What a convention entry applies to: one concrete kind or a meta selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A single concrete kind.
    Kind(DeclarationKind),
    /// A meta selector covering several kinds.
    Meta(MetaSelector),
}

impl Selector {
    /// Parses a configuration token such as `memberLike` or `enumMember`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(kind) = DeclarationKind::parse(token) {
            return Some(Self::Kind(kind));
        }
        MetaSelector::ALL
            .into_iter()
            .find(|m| m.as_str() == token)
            .map(Self::Meta)
    }

    /// Returns the configuration token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kind(kind) => kind.as_str(),
            Self::Meta(meta) => meta.as_str(),
        }
    }

    /// The concrete kinds this selector applies to.
    #[must_use]
    pub fn covered_kinds(self) -> &'static [DeclarationKind] {
        match self {
            Self::Kind(kind) => {
                let index = kind as usize;
                &KINDS[index..=index]
            }
            Self::Meta(meta) => meta.covers(),
        }
    }

    /// Whether this selector applies to `kind`.
    #[must_use]
    pub fn covers(self, kind: DeclarationKind) -> bool {
        match self {
            Self::Kind(own) => own == kind,
            Self::Meta(meta) => meta.covers().contains(&kind),
        }
    }

    /// Returns the specificity tier.
    #[must_use]
    pub fn tier(self) -> Tier {
        match self {
            Self::Kind(_) => Tier::Exact,
            Self::Meta(MetaSelector::Default) => Tier::Default,
            Self::Meta(_) => Tier::Meta,
        }
    }

    /// Whether this is a meta selector (`default` included).
    #[must_use]
    pub fn is_meta(self) -> bool {
        matches!(self, Self::Meta(_))
    }

    /// Union of the modifiers allowed on the covered kinds.
    #[must_use]
    pub fn allowed_modifiers(self) -> ModifierSet {
        self.covered_kinds()
            .iter()
            .flat_map(|k| k.allowed_modifiers().iter().copied())
            .collect()
    }

    /// Whether any covered kind can carry a `types` constraint.
    #[must_use]
    pub fn carries_type(self) -> bool {
        self.covered_kinds().iter().any(|k| k.carries_type())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds indexed by discriminant.
static KINDS: [DeclarationKind; 13] = DeclarationKind::ALL;

// ────────────────────────────────────────────
// Modifiers
// ────────────────────────────────────────────

/// A modifier a declaration may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    /// `const` variable binding.
    Const,
    /// `readonly` member.
    Readonly,
    /// `static` member.
    Static,
    /// `public` accessibility.
    Public,
    /// `protected` accessibility.
    Protected,
    /// `private` accessibility.
    Private,
    /// `abstract` class or member.
    Abstract,
    /// `override` member.
    Override,
    /// `async` function or method.
    Async,
    /// Bound through object or array destructuring.
    Destructured,
    /// Exported from its module.
    Exported,
    /// Declared in the module's top-level scope.
    Global,
    /// Never referenced after its declaration.
    Unused,
    /// Name is only expressible as a quoted string.
    RequiresQuotes,
}

impl Modifier {
    /// Every modifier.
    pub const ALL: [Self; 14] = [
        Self::Const,
        Self::Readonly,
        Self::Static,
        Self::Public,
        Self::Protected,
        Self::Private,
        Self::Abstract,
        Self::Override,
        Self::Async,
        Self::Destructured,
        Self::Exported,
        Self::Global,
        Self::Unused,
        Self::RequiresQuotes,
    ];

    /// Returns the configuration token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Readonly => "readonly",
            Self::Static => "static",
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Override => "override",
            Self::Async => "async",
            Self::Destructured => "destructured",
            Self::Exported => "exported",
            Self::Global => "global",
            Self::Unused => "unused",
            Self::RequiresQuotes => "requiresQuotes",
        }
    }

    /// Parses a configuration token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == token)
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet(u16);

impl ModifierSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns a copy with `modifier` added.
    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.insert(modifier);
        self
    }

    /// Adds a modifier.
    pub fn insert(&mut self, modifier: Modifier) {
        self.0 |= modifier.bit();
    }

    /// Whether `modifier` is present.
    #[must_use]
    pub fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    /// Whether every modifier in `other` is also in `self`.
    #[must_use]
    pub fn is_superset_of(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of modifiers in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates modifiers in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = Self::empty();
        for modifier in iter {
            set.insert(modifier);
        }
        set
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.iter().map(Modifier::as_str).collect();
        write!(f, "[{}]", tokens.join(", "))
    }
}

// ────────────────────────────────────────────
// Type constraints
// ────────────────────────────────────────────

/// A primitive type a `types` constraint can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeModifier {
    /// `boolean`, `true`, `false`.
    Boolean,
    /// `string` and string literals.
    String,
    /// `number` and numeric literals.
    Number,
    /// Callable types.
    Function,
    /// Array and tuple types.
    Array,
}

impl TypeModifier {
    /// Every type constraint.
    pub const ALL: [Self; 5] = [
        Self::Boolean,
        Self::String,
        Self::Number,
        Self::Function,
        Self::Array,
    ];

    /// Returns the configuration token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number => "number",
            Self::Function => "function",
            Self::Array => "array",
        }
    }

    /// Parses a configuration token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == token)
    }
}

impl fmt::Display for TypeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_tokens_round_trip() {
        for kind in DeclarationKind::ALL {
            assert_eq!(Selector::parse(kind.as_str()), Some(Selector::Kind(kind)));
        }
        assert_eq!(
            Selector::parse("memberLike"),
            Some(Selector::Meta(MetaSelector::MemberLike))
        );
        assert_eq!(Selector::parse("Variable"), None);
        assert_eq!(Selector::parse(""), None);
    }

    #[test]
    fn meta_coverage_tables() {
        let member = Selector::Meta(MetaSelector::MemberLike);
        assert!(member.covers(DeclarationKind::Property));
        assert!(member.covers(DeclarationKind::EnumMember));
        assert!(!member.covers(DeclarationKind::Variable));

        let default = Selector::Meta(MetaSelector::Default);
        assert!(DeclarationKind::ALL.iter().all(|k| default.covers(*k)));

        let variable_like = MetaSelector::VariableLike.covers();
        let member_like = MetaSelector::MemberLike.covers();
        let type_like = MetaSelector::TypeLike.covers();
        assert_eq!(
            variable_like.len() + member_like.len() + type_like.len(),
            DeclarationKind::ALL.len()
        );
    }

    #[test]
    fn tiers_order_exact_before_meta_before_default() {
        let exact = Selector::Kind(DeclarationKind::Property).tier();
        let meta = Selector::Meta(MetaSelector::MemberLike).tier();
        let default = Selector::Meta(MetaSelector::Default).tier();
        assert!(exact < meta);
        assert!(meta < default);
    }

    #[test]
    fn concrete_selector_covers_only_itself() {
        let sel = Selector::Kind(DeclarationKind::Accessor);
        assert_eq!(sel.covered_kinds(), &[DeclarationKind::Accessor]);
        assert!(!sel.covers(DeclarationKind::Method));
    }

    #[test]
    fn modifier_set_subset() {
        let required: ModifierSet = [Modifier::Static, Modifier::Readonly].into_iter().collect();
        let actual = ModifierSet::empty()
            .with(Modifier::Private)
            .with(Modifier::Static)
            .with(Modifier::Readonly);
        assert!(actual.is_superset_of(required));
        assert!(!required.is_superset_of(actual));
        assert!(actual.is_superset_of(ModifierSet::empty()));
        assert_eq!(actual.len(), 3);
        assert_eq!(actual.to_string(), "[readonly, static, private]");
    }

    #[test]
    fn allowed_modifiers_union_for_meta() {
        let allowed = Selector::Meta(MetaSelector::VariableLike).allowed_modifiers();
        assert!(allowed.contains(Modifier::Const));
        assert!(allowed.contains(Modifier::Async));
        assert!(!allowed.contains(Modifier::Static));

        let class_only = Selector::Kind(DeclarationKind::Class).allowed_modifiers();
        assert!(class_only.contains(Modifier::Abstract));
        assert!(!class_only.contains(Modifier::Readonly));
    }

    #[test]
    fn labels_are_spaced_words() {
        assert_eq!(DeclarationKind::ParameterProperty.label(), "Parameter Property");
        assert_eq!(DeclarationKind::TypeParameter.label(), "Type Parameter");
        assert_eq!(DeclarationKind::Variable.label(), "Variable");
    }

    #[test]
    fn typed_kinds() {
        assert!(Selector::Kind(DeclarationKind::Variable).carries_type());
        assert!(!Selector::Kind(DeclarationKind::Class).carries_type());
        assert!(Selector::Meta(MetaSelector::MemberLike).carries_type());
        assert!(!Selector::Meta(MetaSelector::TypeLike).carries_type());
    }
}
