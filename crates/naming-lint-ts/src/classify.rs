//! Syntax helpers shared by the TypeScript extractor: name tokens, modifier
//! tokens, scope and file-wide facts (exports, identifier occurrences).

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use naming_lint_core::{Location, Modifier};
use tree_sitter::Node;

/// Text of `node`.
pub(crate) fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
}

/// Location of a name token. The file is filled in by the analyzer.
pub(crate) fn location(node: &Node<'_>) -> Location {
    let start = node.start_position();
    Location::new(PathBuf::new(), start.row + 1, start.column + 1)
        .with_span(node.start_byte(), node.end_byte() - node.start_byte())
}

/// Whether `name` can be written as a bare identifier.
pub(crate) fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

// ────────────────────────────────────────────
// Names
// ────────────────────────────────────────────

/// A declared name with the modifiers implied by how it is spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyName {
    pub name: String,
    /// `#name`.
    pub private: bool,
    /// Quoted or numeric key that is not a valid identifier.
    pub requires_quotes: bool,
}

impl KeyName {
    fn plain(name: &str) -> Self {
        Self {
            name: name.to_string(),
            private: false,
            requires_quotes: false,
        }
    }
}

/// Reads the name of a declaration or member key.
///
/// Computed keys (`[expr]`) have no static name and yield `None`.
pub(crate) fn key_name(node: &Node<'_>, src: &[u8]) -> Option<KeyName> {
    let raw = text(node, src);
    match node.kind() {
        "identifier"
        | "property_identifier"
        | "type_identifier"
        | "shorthand_property_identifier"
        | "shorthand_property_identifier_pattern" => Some(KeyName::plain(raw)),
        "private_property_identifier" => Some(KeyName {
            name: raw.trim_start_matches('#').to_string(),
            private: true,
            requires_quotes: false,
        }),
        "string" => {
            let name = unquote(raw);
            Some(KeyName {
                requires_quotes: !is_valid_identifier(name),
                name: name.to_string(),
                private: false,
            })
        }
        "number" => Some(KeyName {
            name: raw.to_string(),
            private: false,
            requires_quotes: !is_valid_identifier(raw),
        }),
        _ => None,
    }
}

fn unquote(raw: &str) -> &str {
    let mut chars = raw.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open @ ('"' | '\'')), Some(close)) if open == close => chars.as_str(),
        _ => raw,
    }
}

// ────────────────────────────────────────────
// Modifier tokens
// ────────────────────────────────────────────

/// Whether `node` has a direct child of the given kind (keyword tokens
/// such as `static`, `async`, `get`, `readonly`).
pub(crate) fn has_child(node: &Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == kind);
    found
}

/// Explicit `public` / `protected` / `private` keyword on a member.
pub(crate) fn accessibility(node: &Node<'_>, src: &[u8]) -> Option<Modifier> {
    let mut cursor = node.walk();
    let modifier = node
        .children(&mut cursor)
        .find(|child| child.kind() == "accessibility_modifier")
        .and_then(|child| match text(&child, src) {
            "public" => Some(Modifier::Public),
            "protected" => Some(Modifier::Protected),
            "private" => Some(Modifier::Private),
            _ => None,
        });
    modifier
}

/// Whether a function value is declared `async`.
pub(crate) fn is_async(node: &Node<'_>) -> bool {
    has_child(node, "async")
}

// ────────────────────────────────────────────
// Scope
// ────────────────────────────────────────────

/// The statement that owns `node` once `export` / `declare` wrappers are
/// skipped, together with whether an `export` wrapper was seen.
fn unwrap_statement<'t>(node: Node<'t>) -> (Option<Node<'t>>, bool) {
    let mut exported = false;
    let mut parent = node.parent();
    while let Some(p) = parent {
        match p.kind() {
            "export_statement" => exported = true,
            "ambient_declaration" => {}
            _ => return (Some(p), exported),
        }
        parent = p.parent();
    }
    (None, exported)
}

/// Whether a declaration statement sits directly at program level.
pub(crate) fn is_program_level(statement: &Node<'_>) -> bool {
    matches!(unwrap_statement(*statement).0, Some(p) if p.kind() == "program")
}

/// Whether a declaration statement is wrapped in `export`.
pub(crate) fn has_export_keyword(statement: &Node<'_>) -> bool {
    unwrap_statement(*statement).1
}

// ────────────────────────────────────────────
// File-wide facts
// ────────────────────────────────────────────

const REFERENCE_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "property_identifier",
    "private_property_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
];

/// Facts that need the whole file: names exported through `export { .. }`
/// or `export default name`, and how often each identifier appears.
#[derive(Debug, Default)]
pub(crate) struct FileFacts {
    exported: HashSet<String>,
    occurrences: HashMap<String, usize>,
}

impl FileFacts {
    pub(crate) fn collect(root: &Node<'_>, src: &[u8]) -> Self {
        let mut facts = Self::default();
        let mut stack = vec![*root];
        while let Some(node) = stack.pop() {
            if REFERENCE_KINDS.contains(&node.kind()) {
                *facts
                    .occurrences
                    .entry(text(&node, src).to_string())
                    .or_insert(0) += 1;
            }
            if node.kind() == "export_statement" {
                facts.collect_export(&node, src);
            }
            let mut cursor = node.walk();
            stack.extend(node.children(&mut cursor));
        }
        facts
    }

    fn collect_export(&mut self, statement: &Node<'_>, src: &[u8]) {
        // `export { a } from "./mod"` re-exports another module's binding.
        if statement.child_by_field_name("source").is_some() {
            return;
        }
        if let Some(value) = statement.child_by_field_name("value") {
            if value.kind() == "identifier" {
                self.exported.insert(text(&value, src).to_string());
            }
        }
        let mut cursor = statement.walk();
        for clause in statement.named_children(&mut cursor) {
            if clause.kind() != "export_clause" {
                continue;
            }
            let mut inner = clause.walk();
            for specifier in clause.named_children(&mut inner) {
                if let Some(name) = specifier.child_by_field_name("name") {
                    self.exported.insert(text(&name, src).to_string());
                }
            }
        }
    }

    /// Whether `name` is exported by a separate export statement.
    pub(crate) fn is_exported(&self, name: &str) -> bool {
        self.exported.contains(name)
    }

    /// Whether the identifier spelled by `name_node` appears nowhere else.
    pub(crate) fn is_unreferenced(&self, name_node: &Node<'_>, src: &[u8]) -> bool {
        self.occurrences
            .get(text(name_node, src))
            .map_or(true, |count| *count <= 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_identifiers() {
        assert!(is_valid_identifier("fooBar"));
        assert!(is_valid_identifier("$el"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("café"));
        assert!(!is_valid_identifier("content-type"));
        assert!(!is_valid_identifier("1st"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("a b"));
    }

    #[test]
    fn unquote_strips_matching_quotes_only() {
        assert_eq!(unquote("\"a-b\""), "a-b");
        assert_eq!(unquote("'x'"), "x");
        assert_eq!(unquote("''"), "");
        assert_eq!(unquote("\"a'"), "\"a'");
        assert_eq!(unquote("plain"), "plain");
    }
}
