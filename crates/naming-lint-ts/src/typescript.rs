//! TypeScript language extractor using Tree-sitter.

use std::path::PathBuf;

use naming_lint_core::{Declaration, DeclarationKind, DeclaredType, Modifier, ModifierSet};
use tree_sitter::{Language, Node, Parser};

use crate::classify::{
    accessibility, has_child, has_export_keyword, is_async, is_program_level, key_name, location,
    text, FileFacts,
};
use crate::extractor::{ExtractError, FileAnalysis, LanguageExtractor};
use crate::types;

/// Signatures whose parameters only describe a type and declare nothing.
const TYPE_ONLY_SIGNATURES: &[&str] = &[
    "function_type",
    "constructor_type",
    "method_signature",
    "call_signature",
    "construct_signature",
];

/// Extracts every named declaration from TypeScript (or TSX) source.
pub struct TypeScriptExtractor {
    language: Language,
    language_id: &'static str,
    extensions: &'static [&'static str],
}

impl TypeScriptExtractor {
    /// Creates an extractor for `.ts`, `.mts` and `.cts` files.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            language_id: "typescript",
            extensions: &[".ts", ".mts", ".cts"],
        }
    }

    /// Creates an extractor for `.tsx` files.
    #[must_use]
    pub fn tsx() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TSX.into(),
            language_id: "tsx",
            extensions: &[".tsx"],
        }
    }
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for TypeScriptExtractor {
    fn language_id(&self) -> &'static str {
        self.language_id
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    fn analyze(&self, source: &str) -> Result<FileAnalysis, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ExtractError::Language {
                language: self.language_id,
                message: e.to_string(),
            })?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ExtractError::NoTree)?;
        let root = tree.root_node();

        let mut visitor = Visitor {
            src,
            facts: FileFacts::collect(&root, src),
            declarations: Vec::new(),
        };
        visitor.walk(root);

        Ok(FileAnalysis {
            file_path: PathBuf::new(),
            declarations: visitor.declarations,
            has_syntax_errors: root.has_error(),
        })
    }
}

// ────────────────────────────────────────────
// Visitor
// ────────────────────────────────────────────

struct Visitor<'s> {
    src: &'s [u8],
    facts: FileFacts,
    declarations: Vec<Declaration>,
}

impl Visitor<'_> {
    /// Pre-order walk, so declarations come out in source order.
    fn walk(&mut self, root: Node<'_>) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            self.visit(&node);
            let mut cursor = node.walk();
            let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }
    }

    fn visit(&mut self, node: &Node<'_>) {
        match node.kind() {
            "variable_declarator" => self.variable(node),
            "for_in_statement" => self.loop_binding(node),
            "function_declaration" | "generator_function_declaration" | "function_signature" => {
                self.function_declaration(node);
            }
            "function_expression" | "function" | "generator_function" if node.is_named() => {
                self.function_expression(node);
            }
            "required_parameter" | "optional_parameter" => self.parameter(node),
            "arrow_function" => self.arrow_parameter(node),
            "class_declaration" | "abstract_class_declaration" => self.class(node, true),
            "class" if node.is_named() => self.class(node, false),
            "method_definition" => self.method(node),
            "public_field_definition" => self.field(node),
            "abstract_method_signature" => self.class_signature(node),
            "property_signature" => self.property_signature(node),
            "method_signature" => self.method_signature(node),
            "pair" => self.pair(node),
            "shorthand_property_identifier" => self.shorthand_property(node),
            "enum_declaration" => self.enumeration(node),
            "interface_declaration" => self.type_declaration(node, DeclarationKind::Interface),
            "type_alias_declaration" => self.type_declaration(node, DeclarationKind::TypeAlias),
            "type_parameter" => self.type_parameter(node),
            _ => {}
        }
    }

    /// Records a declaration. Modifiers the kind cannot carry are dropped,
    /// and name-derived modifiers (`#private`, quoted keys, `unused`) are
    /// added here.
    fn push(
        &mut self,
        kind: DeclarationKind,
        name_node: &Node<'_>,
        mut modifiers: ModifierSet,
        ty: Option<DeclaredType>,
    ) {
        let Some(key) = key_name(name_node, self.src) else {
            return;
        };
        if key.private {
            modifiers.insert(Modifier::Private);
            modifiers = modifiers.iter().filter(|m| *m != Modifier::Public).collect();
        }
        if key.requires_quotes {
            modifiers.insert(Modifier::RequiresQuotes);
        }
        if !modifiers.contains(Modifier::Exported) && self.facts.is_unreferenced(name_node, self.src)
        {
            modifiers.insert(Modifier::Unused);
        }

        let allowed = kind.allowed_modifiers();
        let modifiers: ModifierSet = modifiers.iter().filter(|m| allowed.contains(m)).collect();

        let mut declaration =
            Declaration::new(kind, key.name, location(name_node)).with_modifiers(modifiers);
        if let Some(ty) = ty {
            declaration = declaration.with_type(ty);
        }
        self.declarations.push(declaration);
    }

    /// Pushes every binding of a destructuring pattern. Only shorthand
    /// object bindings (`{ a }`, `{ a = 1 }`) count as `destructured`.
    fn pattern(&mut self, kind: DeclarationKind, pattern: &Node<'_>, modifiers: ModifierSet) {
        match pattern.kind() {
            "identifier" => self.push(kind, pattern, modifiers, None),
            "shorthand_property_identifier_pattern" => {
                self.push(kind, pattern, modifiers.with(Modifier::Destructured), None);
            }
            "object_assignment_pattern" | "assignment_pattern" => {
                if let Some(left) = pattern.child_by_field_name("left") {
                    self.pattern(kind, &left, modifiers);
                }
            }
            "pair_pattern" => {
                if let Some(value) = pattern.child_by_field_name("value") {
                    self.pattern(kind, &value, modifiers);
                }
            }
            "object_pattern" | "array_pattern" | "rest_pattern" => {
                let mut cursor = pattern.walk();
                let children: Vec<Node<'_>> = pattern.named_children(&mut cursor).collect();
                for child in children {
                    self.pattern(kind, &child, modifiers);
                }
            }
            _ => {}
        }
    }

    /// `export` keyword on the statement, or a later `export { name }`.
    fn is_exported(&self, statement: &Node<'_>, name_node: &Node<'_>) -> bool {
        has_export_keyword(statement)
            || (is_program_level(statement) && self.facts.is_exported(text(name_node, self.src)))
    }

    // ── Variables and functions ──

    fn variable(&mut self, declarator: &Node<'_>) {
        let (Some(name), Some(statement)) =
            (declarator.child_by_field_name("name"), declarator.parent())
        else {
            return;
        };

        let mut modifiers = ModifierSet::empty();
        let is_const = statement.kind() == "lexical_declaration"
            && statement
                .child_by_field_name("kind")
                .is_some_and(|kind| text(&kind, self.src) == "const");
        if is_const {
            modifiers.insert(Modifier::Const);
        }
        if is_program_level(&statement) {
            modifiers.insert(Modifier::Global);
        }
        if self.is_exported(&statement, &name) {
            modifiers.insert(Modifier::Exported);
        }

        if name.kind() == "identifier" {
            let value = declarator.child_by_field_name("value");
            if value.is_some_and(|v| types::is_function_value(&v, self.src) && is_async(&v)) {
                modifiers.insert(Modifier::Async);
            }
            let ty = types::resolve(declarator, self.src);
            self.push(DeclarationKind::Variable, &name, modifiers, ty);
        } else {
            self.pattern(DeclarationKind::Variable, &name, modifiers);
        }
    }

    /// `for (const x of xs)` and `for (let k in obj)`.
    fn loop_binding(&mut self, statement: &Node<'_>) {
        let (Some(kind), Some(left)) = (
            statement.child_by_field_name("kind"),
            statement.child_by_field_name("left"),
        ) else {
            return;
        };
        let mut modifiers = ModifierSet::empty();
        if text(&kind, self.src) == "const" {
            modifiers.insert(Modifier::Const);
        }
        self.pattern(DeclarationKind::Variable, &left, modifiers);
    }

    fn function_declaration(&mut self, node: &Node<'_>) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let mut modifiers = ModifierSet::empty();
        if is_program_level(node) {
            modifiers.insert(Modifier::Global);
        }
        if self.is_exported(node, &name) {
            modifiers.insert(Modifier::Exported);
        }
        if is_async(node) {
            modifiers.insert(Modifier::Async);
        }
        self.push(DeclarationKind::Function, &name, modifiers, None);
    }

    fn function_expression(&mut self, node: &Node<'_>) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let mut modifiers = ModifierSet::empty();
        if is_async(node) {
            modifiers.insert(Modifier::Async);
        }
        self.push(DeclarationKind::Function, &name, modifiers, None);
    }

    // ── Parameters ──

    fn parameter(&mut self, node: &Node<'_>) {
        let owner = node.parent().and_then(|params| params.parent());
        if owner.is_some_and(|o| TYPE_ONLY_SIGNATURES.contains(&o.kind())) {
            return;
        }
        let Some(pattern) = node.child_by_field_name("pattern") else {
            return;
        };

        let access = accessibility(node, self.src);
        let readonly = has_child(node, "readonly");
        if access.is_some() || readonly || has_child(node, "override_modifier") {
            let mut modifiers = ModifierSet::empty().with(access.unwrap_or(Modifier::Public));
            if readonly {
                modifiers.insert(Modifier::Readonly);
            }
            let ty = types::resolve(node, self.src);
            self.push(DeclarationKind::ParameterProperty, &pattern, modifiers, ty);
            return;
        }

        match pattern.kind() {
            "this" => {}
            "identifier" => {
                let ty = types::resolve(node, self.src);
                self.push(DeclarationKind::Parameter, &pattern, ModifierSet::empty(), ty);
            }
            "rest_pattern" => match pattern.named_child(0) {
                Some(inner) if inner.kind() == "identifier" => {
                    let ty = types::resolve(node, self.src);
                    self.push(DeclarationKind::Parameter, &inner, ModifierSet::empty(), ty);
                }
                Some(inner) => self.pattern(DeclarationKind::Parameter, &inner, ModifierSet::empty()),
                None => {}
            },
            _ => self.pattern(DeclarationKind::Parameter, &pattern, ModifierSet::empty()),
        }
    }

    /// `x => x + 1`: a lone parameter without parentheses.
    fn arrow_parameter(&mut self, node: &Node<'_>) {
        if let Some(param) = node.child_by_field_name("parameter") {
            self.push(DeclarationKind::Parameter, &param, ModifierSet::empty(), None);
        }
    }

    // ── Classes and members ──

    fn class(&mut self, node: &Node<'_>, is_declaration: bool) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let mut modifiers = ModifierSet::empty();
        if node.kind() == "abstract_class_declaration" {
            modifiers.insert(Modifier::Abstract);
        }
        if is_declaration && self.is_exported(node, &name) {
            modifiers.insert(Modifier::Exported);
        }
        self.push(DeclarationKind::Class, &name, modifiers, None);
    }

    /// Modifiers spelled on a class member. Members without an explicit
    /// accessibility keyword are `public`.
    fn member_modifiers(&self, node: &Node<'_>) -> ModifierSet {
        let mut modifiers =
            ModifierSet::empty().with(accessibility(node, self.src).unwrap_or(Modifier::Public));
        for (token, modifier) in [
            ("static", Modifier::Static),
            ("readonly", Modifier::Readonly),
            ("abstract", Modifier::Abstract),
            ("override_modifier", Modifier::Override),
        ] {
            if has_child(node, token) {
                modifiers.insert(modifier);
            }
        }
        modifiers
    }

    fn method(&mut self, node: &Node<'_>) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let kind = accessor_or_method(node);
        let in_class = node.parent().is_some_and(|p| p.kind() == "class_body");
        if in_class && text(&name, self.src) == "constructor" {
            return;
        }

        let mut modifiers = if in_class {
            self.member_modifiers(node)
        } else {
            ModifierSet::empty()
        };
        if is_async(node) {
            modifiers.insert(Modifier::Async);
        }
        self.push(kind, &name, modifiers, None);
    }

    fn field(&mut self, node: &Node<'_>) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let mut modifiers = self.member_modifiers(node);

        match node.child_by_field_name("value") {
            Some(value) if types::is_function_value(&value, self.src) => {
                if is_async(&value) {
                    modifiers.insert(Modifier::Async);
                }
                self.push(DeclarationKind::Method, &name, modifiers, None);
            }
            _ => {
                let kind = if has_child(node, "accessor") {
                    DeclarationKind::Accessor
                } else {
                    DeclarationKind::Property
                };
                let ty = types::resolve(node, self.src);
                self.push(kind, &name, modifiers, ty);
            }
        }
    }

    /// `abstract foo(): void;` inside a class body.
    fn class_signature(&mut self, node: &Node<'_>) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let modifiers = self.member_modifiers(node).with(Modifier::Abstract);
        self.push(accessor_or_method(node), &name, modifiers, None);
    }

    // ── Type members ──

    fn property_signature(&mut self, node: &Node<'_>) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let mut modifiers = ModifierSet::empty();
        if has_child(node, "readonly") {
            modifiers.insert(Modifier::Readonly);
        }
        let ty = types::resolve(node, self.src);
        self.push(DeclarationKind::Property, &name, modifiers, ty);
    }

    /// Interface and type-literal methods. Inside a class body the same node
    /// is an overload signature, reported through its implementation.
    fn method_signature(&mut self, node: &Node<'_>) {
        if node.parent().is_some_and(|p| p.kind() == "class_body") {
            return;
        }
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        self.push(accessor_or_method(node), &name, ModifierSet::empty(), None);
    }

    /// Object literal `key: value`.
    fn pair(&mut self, node: &Node<'_>) {
        let (Some(key), Some(value)) = (
            node.child_by_field_name("key"),
            node.child_by_field_name("value"),
        ) else {
            return;
        };
        if types::is_function_value(&value, self.src) {
            let mut modifiers = ModifierSet::empty();
            if is_async(&value) {
                modifiers.insert(Modifier::Async);
            }
            self.push(DeclarationKind::Method, &key, modifiers, None);
        } else {
            let ty = types::from_value(&value, self.src).map(DeclaredType::single);
            self.push(DeclarationKind::Property, &key, ModifierSet::empty(), ty);
        }
    }

    /// Object literal `{ key }`.
    fn shorthand_property(&mut self, node: &Node<'_>) {
        if node.parent().is_some_and(|p| p.kind() == "object") {
            self.push(DeclarationKind::Property, node, ModifierSet::empty(), None);
        }
    }

    // ── Type-like declarations ──

    fn enumeration(&mut self, node: &Node<'_>) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let mut modifiers = ModifierSet::empty();
        if self.is_exported(node, &name) {
            modifiers.insert(Modifier::Exported);
        }
        self.push(DeclarationKind::Enum, &name, modifiers, None);

        let Some(body) = node.child_by_field_name("body") else {
            return;
        };
        let mut cursor = body.walk();
        let members: Vec<Node<'_>> = body.named_children(&mut cursor).collect();
        for member in members {
            let member_name = if member.kind() == "enum_assignment" {
                member.child_by_field_name("name")
            } else {
                Some(member)
            };
            if let Some(member_name) = member_name {
                self.push(
                    DeclarationKind::EnumMember,
                    &member_name,
                    ModifierSet::empty(),
                    None,
                );
            }
        }
    }

    fn type_declaration(&mut self, node: &Node<'_>, kind: DeclarationKind) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let mut modifiers = ModifierSet::empty();
        if self.is_exported(node, &name) {
            modifiers.insert(Modifier::Exported);
        }
        self.push(kind, &name, modifiers, None);
    }

    fn type_parameter(&mut self, node: &Node<'_>) {
        if let Some(name) = node.child_by_field_name("name") {
            self.push(DeclarationKind::TypeParameter, &name, ModifierSet::empty(), None);
        }
    }
}

fn accessor_or_method(node: &Node<'_>) -> DeclarationKind {
    if has_child(node, "get") || has_child(node, "set") {
        DeclarationKind::Accessor
    } else {
        DeclarationKind::Method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use naming_lint_core::{TypeClass, TypeInfo, TypeModifier};

    fn analyze(src: &str) -> FileAnalysis {
        TypeScriptExtractor::new()
            .analyze(src)
            .expect("typescript grammar should load")
    }

    fn find<'a>(analysis: &'a FileAnalysis, name: &str) -> &'a Declaration {
        analysis
            .declarations
            .iter()
            .find(|d| d.name == name)
            .unwrap_or_else(|| panic!("no declaration named {name}"))
    }

    fn has(declaration: &Declaration, modifier: Modifier) -> bool {
        declaration.modifiers.contains(modifier)
    }

    fn satisfies(declaration: &Declaration, ty: TypeModifier) -> bool {
        match &declaration.ty {
            TypeInfo::Resolved(declared) => declared.satisfies(ty),
            _ => false,
        }
    }

    #[test]
    fn variables_carry_scope_and_const() {
        let a = analyze(
            "export const MAX_SIZE = 10;\nlet counter = 0;\nfunction run() { const local = counter; return local; }\n",
        );
        let max = find(&a, "MAX_SIZE");
        assert_eq!(max.kind, DeclarationKind::Variable);
        assert!(has(max, Modifier::Const));
        assert!(has(max, Modifier::Global));
        assert!(has(max, Modifier::Exported));
        assert!(!has(max, Modifier::Unused));

        let counter = find(&a, "counter");
        assert!(!has(counter, Modifier::Const));
        assert!(has(counter, Modifier::Global));

        let local = find(&a, "local");
        assert!(has(local, Modifier::Const));
        assert!(!has(local, Modifier::Global));
    }

    #[test]
    fn name_location_is_one_based() {
        let a = analyze("const value = 1;\n  let other = value;\n");
        let other = find(&a, "other");
        assert_eq!(other.location.line, 2);
        assert_eq!(other.location.column, 7);
        assert_eq!(other.location.offset, 23);
        assert_eq!(other.location.length, 5);
    }

    #[test]
    fn destructured_only_for_shorthand_bindings() {
        let a = analyze("const { a, b: renamed, c = 1, ...rest } = obj;\nconst [first] = list;\n");
        assert!(has(find(&a, "a"), Modifier::Destructured));
        assert!(has(find(&a, "c"), Modifier::Destructured));
        assert!(!has(find(&a, "renamed"), Modifier::Destructured));
        assert!(!has(find(&a, "rest"), Modifier::Destructured));
        assert!(!has(find(&a, "first"), Modifier::Destructured));
        assert!(a.declarations.iter().all(|d| d.name != "b"));
    }

    #[test]
    fn literal_initializers_resolve_types() {
        let a = analyze(
            "const ready = true;\nconst label = 'x';\nconst total = -1;\nconst items = [];\nconst handler = () => 1;\nconst other = compute();\n",
        );
        assert!(satisfies(find(&a, "ready"), TypeModifier::Boolean));
        assert!(satisfies(find(&a, "label"), TypeModifier::String));
        assert!(satisfies(find(&a, "total"), TypeModifier::Number));
        assert!(satisfies(find(&a, "items"), TypeModifier::Array));
        assert!(satisfies(find(&a, "handler"), TypeModifier::Function));
        assert_eq!(find(&a, "other").ty, TypeInfo::Unavailable);
    }

    #[test]
    fn annotations_resolve_unions() {
        let a = analyze(
            "let name: string | null = null;\nlet flags: boolean[] = [];\nlet mixed: string | number = 1;\n",
        );
        assert!(satisfies(find(&a, "name"), TypeModifier::String));
        assert!(satisfies(find(&a, "flags"), TypeModifier::Array));
        let mixed = find(&a, "mixed");
        assert!(!satisfies(mixed, TypeModifier::String));
        assert!(!satisfies(mixed, TypeModifier::Number));
    }

    #[test]
    fn named_type_references_satisfy_no_type_modifier() {
        let a = analyze("declare const shape: Shape;\ndeclare const maybe: Shape | null;\n");
        for name in ["shape", "maybe"] {
            let declaration = find(&a, name);
            assert!(matches!(declaration.ty, TypeInfo::Resolved(_)));
            assert!(TypeModifier::ALL.iter().all(|ty| !satisfies(declaration, *ty)));
        }
    }

    #[test]
    fn functions_and_parameters() {
        let a = analyze(
            "export async function loadData(userId: number, { verbose }, ...rest: string[]) {}\nconst fn = (x) => x;\nconst g = y => y;\n",
        );
        let load = find(&a, "loadData");
        assert_eq!(load.kind, DeclarationKind::Function);
        assert!(has(load, Modifier::Async));
        assert!(has(load, Modifier::Exported));
        assert!(has(load, Modifier::Global));

        let user = find(&a, "userId");
        assert_eq!(user.kind, DeclarationKind::Parameter);
        assert!(satisfies(user, TypeModifier::Number));
        assert!(has(user, Modifier::Unused));

        assert!(has(find(&a, "verbose"), Modifier::Destructured));
        assert!(satisfies(find(&a, "rest"), TypeModifier::Array));
        assert_eq!(find(&a, "x").kind, DeclarationKind::Parameter);
        assert_eq!(find(&a, "y").kind, DeclarationKind::Parameter);
        assert!(!has(find(&a, "y"), Modifier::Unused));
    }

    #[test]
    fn function_type_parameters_are_skipped() {
        let a = analyze("type Handler = (event_name: string) => void;\n");
        assert!(a.declarations.iter().all(|d| d.name != "event_name"));
        assert_eq!(find(&a, "Handler").kind, DeclarationKind::TypeAlias);
    }

    #[test]
    fn class_members() {
        let a = analyze(
            r"export abstract class Widget<TProps> {
  static readonly DEFAULT_SIZE = 10;
  #secret = 1;
  protected label: string;
  private handler = () => {};
  constructor(private readonly service: Service, plain: number) {}
  get size() { return 1; }
  async refresh() {}
  abstract render(): void;
  override toString() { return ''; }
}
",
        );
        let widget = find(&a, "Widget");
        assert_eq!(widget.kind, DeclarationKind::Class);
        assert!(has(widget, Modifier::Abstract));
        assert!(has(widget, Modifier::Exported));
        assert_eq!(find(&a, "TProps").kind, DeclarationKind::TypeParameter);

        let size = find(&a, "DEFAULT_SIZE");
        assert_eq!(size.kind, DeclarationKind::Property);
        assert!(has(size, Modifier::Static));
        assert!(has(size, Modifier::Readonly));
        assert!(has(size, Modifier::Public));

        let secret = find(&a, "secret");
        assert!(has(secret, Modifier::Private));
        assert!(!has(secret, Modifier::Public));

        assert!(has(find(&a, "label"), Modifier::Protected));
        assert!(satisfies(find(&a, "label"), TypeModifier::String));

        let handler = find(&a, "handler");
        assert_eq!(handler.kind, DeclarationKind::Method);
        assert!(has(handler, Modifier::Private));

        let service = find(&a, "service");
        assert_eq!(service.kind, DeclarationKind::ParameterProperty);
        assert!(has(service, Modifier::Private));
        assert!(has(service, Modifier::Readonly));
        assert_eq!(find(&a, "plain").kind, DeclarationKind::Parameter);

        assert_eq!(find(&a, "size").kind, DeclarationKind::Accessor);
        assert!(has(find(&a, "refresh"), Modifier::Async));

        let render = find(&a, "render");
        assert_eq!(render.kind, DeclarationKind::Method);
        assert!(has(render, Modifier::Abstract));

        assert!(has(find(&a, "toString"), Modifier::Override));
        assert!(a.declarations.iter().all(|d| d.name != "constructor"));
    }

    #[test]
    fn object_literal_members() {
        let a = analyze(
            "const headers = { 'content-type': 'json', retry: 3, onLoad() {}, handle: function () {} };\n",
        );
        let content = find(&a, "content-type");
        assert_eq!(content.kind, DeclarationKind::Property);
        assert!(has(content, Modifier::RequiresQuotes));
        assert!(satisfies(content, TypeModifier::String));

        assert!(satisfies(find(&a, "retry"), TypeModifier::Number));
        assert_eq!(find(&a, "onLoad").kind, DeclarationKind::Method);
        assert_eq!(find(&a, "handle").kind, DeclarationKind::Method);
    }

    #[test]
    fn shorthand_object_properties() {
        let a = analyze("const snake_case = 1;\nconst holder = { snake_case };\nconst { picked } = holder;\n");
        let properties: Vec<&Declaration> = a
            .declarations
            .iter()
            .filter(|d| d.kind == DeclarationKind::Property)
            .collect();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].name, "snake_case");
        assert_eq!(properties[0].location.line, 2);
        assert!(!has(properties[0], Modifier::RequiresQuotes));
        assert_eq!(find(&a, "picked").kind, DeclarationKind::Variable);
    }

    #[test]
    fn interfaces_enums_and_aliases() {
        let a = analyze(
            r"interface Shape {
  readonly sides: number;
  area(): number;
}
enum Color { Red, 'dark-blue' = 2 }
type Point = { x: number };
export { Color };
",
        );
        assert_eq!(find(&a, "Shape").kind, DeclarationKind::Interface);
        let sides = find(&a, "sides");
        assert_eq!(sides.kind, DeclarationKind::Property);
        assert!(has(sides, Modifier::Readonly));
        assert!(satisfies(sides, TypeModifier::Number));
        assert_eq!(find(&a, "area").kind, DeclarationKind::Method);

        let color = find(&a, "Color");
        assert_eq!(color.kind, DeclarationKind::Enum);
        assert!(has(color, Modifier::Exported));
        assert_eq!(find(&a, "Red").kind, DeclarationKind::EnumMember);
        assert!(has(find(&a, "dark-blue"), Modifier::RequiresQuotes));

        assert_eq!(find(&a, "Point").kind, DeclarationKind::TypeAlias);
        assert!(has(find(&a, "Point"), Modifier::Unused));
        assert_eq!(find(&a, "x").kind, DeclarationKind::Property);
    }

    #[test]
    fn modifiers_are_limited_to_the_kind() {
        let a = analyze("export const config = { debug: true };\n");
        let debug = find(&a, "debug");
        assert!(debug.modifiers.is_empty());
        assert_eq!(
            debug.ty,
            TypeInfo::Resolved(DeclaredType::single(TypeClass::Boolean))
        );
    }

    #[test]
    fn syntax_errors_are_flagged_not_fatal() {
        let a = analyze("const ok = 1;\nconst = ;\n");
        assert!(a.has_syntax_errors);
        assert!(a.declarations.iter().any(|d| d.name == "ok"));
    }

    #[test]
    fn tsx_extractor_handles_jsx() {
        let a = TypeScriptExtractor::tsx()
            .analyze("export const App = () => <div className=\"x\" />;\n")
            .expect("tsx grammar should load");
        assert!(!a.has_syntax_errors);
        assert_eq!(find(&a, "App").kind, DeclarationKind::Variable);
    }

    #[test]
    fn extension_routing() {
        let ts = TypeScriptExtractor::new();
        let tsx = TypeScriptExtractor::tsx();
        assert!(ts.handles(std::path::Path::new("src/a.ts")));
        assert!(ts.handles(std::path::Path::new("src/a.mts")));
        assert!(!ts.handles(std::path::Path::new("src/a.tsx")));
        assert!(tsx.handles(std::path::Path::new("src/a.tsx")));
        assert!(!tsx.handles(std::path::Path::new("src/a.js")));
    }
}
