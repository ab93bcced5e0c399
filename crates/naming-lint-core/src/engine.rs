//! Selector resolution and per-declaration checking.

use crate::convention::{Convention, NamingConventions};
use crate::declaration::Declaration;
use crate::diagnostic::Diagnostic;
use crate::selector::DeclarationKind;
use crate::types::Violation;
use crate::validate::validate_name;
use tracing::debug;

/// Checks declarations against an immutable set of conventions.
///
/// Holds no per-declaration state, so one engine can be shared across
/// threads checking different files.
#[derive(Debug, Clone, Default)]
pub struct NamingEngine {
    conventions: NamingConventions,
}

impl NamingEngine {
    /// Creates an engine over validated conventions.
    #[must_use]
    pub fn new(conventions: NamingConventions) -> Self {
        Self { conventions }
    }

    /// Returns the conventions in priority order.
    #[must_use]
    pub fn conventions(&self) -> &NamingConventions {
        &self.conventions
    }

    /// Whether resolving `kind` may consult a declaration's type.
    ///
    /// Hosts can skip type resolution when this is false.
    #[must_use]
    pub fn needs_type_info(&self, kind: DeclarationKind) -> bool {
        self.conventions.needs_type_info(kind)
    }

    /// Picks the convention governing `declaration`, if any.
    ///
    /// Candidates are visited in priority order (tier, then type and
    /// modifier weight, then declaration order). The first one whose
    /// modifiers, types and filter all accept the declaration governs.
    #[must_use]
    pub fn resolve(&self, declaration: &Declaration) -> Option<&Convention> {
        let resolved = self.conventions.candidates(declaration.kind).find(|c| {
            c.modifiers_satisfied(declaration.modifiers)
                && c.types_satisfied(&declaration.ty)
                && c.filter_accepts(&declaration.name)
        });
        match resolved {
            Some(c) => debug!(
                "{} `{}` governed by naming[{}] ({})",
                declaration.kind,
                declaration.name,
                c.index(),
                c.selector()
            ),
            None => debug!("{} `{}` unchecked", declaration.kind, declaration.name),
        }
        resolved
    }

    /// Checks one declaration. Returns at most one diagnostic.
    #[must_use]
    pub fn check(&self, declaration: &Declaration) -> Option<Diagnostic> {
        let convention = self.resolve(declaration)?;
        validate_name(convention, &declaration.name)
            .err()
            .map(|failure| Diagnostic::new(failure, convention, declaration))
    }

    /// Checks every declaration, in order.
    pub fn check_all<'a, I>(&self, declarations: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = &'a Declaration>,
    {
        declarations
            .into_iter()
            .filter_map(|d| self.check(d))
            .collect()
    }

    /// Checks every declaration and converts failures into violations.
    pub fn violations<'a, I>(&self, declarations: I) -> Vec<Violation>
    where
        I: IntoIterator<Item = &'a Declaration>,
    {
        self.check_all(declarations)
            .into_iter()
            .map(Violation::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::FormatSpec;
    use crate::format::PredefinedFormat;
    use crate::selector::{MetaSelector, Modifier, Selector};
    use crate::types::Location;

    fn camel(selector: Selector) -> Convention {
        Convention::new(
            selector,
            FormatSpec::Predefined(vec![PredefinedFormat::CamelCase]),
        )
    }

    fn decl(kind: DeclarationKind, name: &str) -> Declaration {
        Declaration::new(kind, name, Location::default())
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NamingEngine>();
    }

    #[test]
    fn empty_engine_checks_nothing() {
        let engine = NamingEngine::default();
        assert!(engine.check(&decl(DeclarationKind::Variable, "Bad_Name")).is_none());
    }

    #[test]
    fn modifier_subset_required() {
        let engine = NamingEngine::new(
            NamingConventions::new(vec![
                camel(Selector::Kind(DeclarationKind::Property)).with_modifier(Modifier::Static),
            ])
            .unwrap(),
        );
        let plain = decl(DeclarationKind::Property, "x");
        let static_readonly = decl(DeclarationKind::Property, "x")
            .with_modifier(Modifier::Static)
            .with_modifier(Modifier::Readonly);
        assert!(engine.resolve(&plain).is_none());
        assert!(engine.resolve(&static_readonly).is_some());
    }

    #[test]
    fn more_modifiers_win_within_tier() {
        let engine = NamingEngine::new(
            NamingConventions::new(vec![
                camel(Selector::Kind(DeclarationKind::Property)).with_modifier(Modifier::Static),
                camel(Selector::Kind(DeclarationKind::Property))
                    .with_modifier(Modifier::Static)
                    .with_modifier(Modifier::Readonly),
            ])
            .unwrap(),
        );
        let declaration = decl(DeclarationKind::Property, "x")
            .with_modifier(Modifier::Static)
            .with_modifier(Modifier::Readonly);
        assert_eq!(engine.resolve(&declaration).map(Convention::index), Some(1));
    }

    #[test]
    fn exact_tier_beats_more_modifiers_on_meta() {
        let engine = NamingEngine::new(
            NamingConventions::new(vec![
                camel(Selector::Meta(MetaSelector::MemberLike)).with_modifier(Modifier::Static),
                camel(Selector::Kind(DeclarationKind::Method)),
            ])
            .unwrap(),
        );
        let declaration = decl(DeclarationKind::Method, "run").with_modifier(Modifier::Static);
        assert_eq!(engine.resolve(&declaration).map(Convention::index), Some(1));
    }

    #[test]
    fn check_all_keeps_order() {
        let engine = NamingEngine::new(
            NamingConventions::new(vec![camel(Selector::Meta(MetaSelector::Default))]).unwrap(),
        );
        let declarations = [
            decl(DeclarationKind::Variable, "Bad"),
            decl(DeclarationKind::Variable, "good"),
            decl(DeclarationKind::Function, "Worse"),
        ];
        let names: Vec<String> = engine
            .check_all(&declarations)
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["Bad".to_string(), "Worse".to_string()]);
    }
}
