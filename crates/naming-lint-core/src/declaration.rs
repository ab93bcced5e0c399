//! Declaration occurrences handed to the engine by a host.

use crate::selector::{DeclarationKind, Modifier, ModifierSet, TypeModifier};
use crate::types::Location;

/// Classification of one constituent of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// `boolean` or a boolean literal.
    Boolean,
    /// `string`, a string literal or a template literal.
    String,
    /// `number`, `bigint` or a numeric literal.
    Number,
    /// Any callable type.
    Function,
    /// Arrays and tuples.
    Array,
    /// `null` or `undefined`.
    Nullish,
    /// Anything else.
    Other,
}

impl TypeClass {
    fn as_modifier(self) -> Option<TypeModifier> {
        match self {
            Self::Boolean => Some(TypeModifier::Boolean),
            Self::String => Some(TypeModifier::String),
            Self::Number => Some(TypeModifier::Number),
            Self::Function => Some(TypeModifier::Function),
            Self::Array => Some(TypeModifier::Array),
            Self::Nullish | Self::Other => None,
        }
    }
}

/// A resolved type, seen as the union of its constituents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredType {
    constituents: Vec<TypeClass>,
}

impl DeclaredType {
    /// Creates a union type.
    pub fn union(constituents: impl IntoIterator<Item = TypeClass>) -> Self {
        Self {
            constituents: constituents.into_iter().collect(),
        }
    }

    /// Creates a single, non-union type.
    #[must_use]
    pub fn single(class: TypeClass) -> Self {
        Self {
            constituents: vec![class],
        }
    }

    /// Returns the union constituents.
    #[must_use]
    pub fn constituents(&self) -> &[TypeClass] {
        &self.constituents
    }

    /// Whether this type is a `ty`.
    ///
    /// Nullish constituents are ignored. At least one constituent must
    /// remain, and all that remain must be `ty`.
    #[must_use]
    pub fn satisfies(&self, ty: TypeModifier) -> bool {
        let mut relevant = self
            .constituents
            .iter()
            .filter(|c| **c != TypeClass::Nullish)
            .peekable();
        relevant.peek().is_some() && relevant.all(|c| c.as_modifier() == Some(ty))
    }
}

/// What the host knows about a declaration's type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeInfo {
    /// No type was resolved, usually because no convention needed it.
    #[default]
    Unavailable,
    /// The type checker produced a type.
    Resolved(DeclaredType),
    /// The type checker failed; the reason is kept for logging. Only hosts
    /// backed by a type checker produce this; the tree-sitter host never does.
    Failed(String),
}

/// One named declaration, as classified by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Concrete kind.
    pub kind: DeclarationKind,
    /// Name as written, without quotes.
    pub name: String,
    /// Modifiers present on the declaration.
    pub modifiers: ModifierSet,
    /// Resolved type, if any.
    pub ty: TypeInfo,
    /// Location of the name token.
    pub location: Location,
}

impl Declaration {
    /// Creates a declaration with no modifiers and no type.
    #[must_use]
    pub fn new(kind: DeclarationKind, name: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: ModifierSet::empty(),
            ty: TypeInfo::Unavailable,
            location,
        }
    }

    /// Adds a modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Replaces the modifier set.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierSet) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Attaches a resolved type.
    #[must_use]
    pub fn with_type(mut self, ty: DeclaredType) -> Self {
        self.ty = TypeInfo::Resolved(ty);
        self
    }

    /// Attaches raw type information.
    #[must_use]
    pub fn with_type_info(mut self, ty: TypeInfo) -> Self {
        self.ty = ty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullish_constituents_are_ignored() {
        let ty = DeclaredType::union([TypeClass::String, TypeClass::Nullish]);
        assert!(ty.satisfies(TypeModifier::String));
        assert!(!ty.satisfies(TypeModifier::Number));
    }

    #[test]
    fn mixed_unions_satisfy_nothing() {
        let ty = DeclaredType::union([TypeClass::String, TypeClass::Number]);
        assert!(!ty.satisfies(TypeModifier::String));
        assert!(!ty.satisfies(TypeModifier::Number));
    }

    #[test]
    fn only_nullish_satisfies_nothing() {
        let ty = DeclaredType::union([TypeClass::Nullish, TypeClass::Nullish]);
        assert!(!ty.satisfies(TypeModifier::Boolean));
        assert!(!DeclaredType::union([]).satisfies(TypeModifier::Boolean));
    }

    #[test]
    fn other_never_satisfies() {
        assert!(!DeclaredType::single(TypeClass::Other).satisfies(TypeModifier::Function));
        assert!(DeclaredType::single(TypeClass::Array).satisfies(TypeModifier::Array));
    }

    #[test]
    fn builder_sets_fields() {
        let decl = Declaration::new(DeclarationKind::Property, "x", Location::default())
            .with_modifier(Modifier::Static)
            .with_type(DeclaredType::single(TypeClass::Boolean));
        assert!(decl.modifiers.contains(Modifier::Static));
        assert!(matches!(decl.ty, TypeInfo::Resolved(_)));
    }
}
