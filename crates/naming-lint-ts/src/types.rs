//! Syntactic type resolution.
//!
//! There is no type checker behind this: a declaration's type comes from its
//! annotation, or else from a literal initializer. Anything else stays
//! unresolved and never satisfies a `types` constraint.

use naming_lint_core::{DeclaredType, TypeClass};
use tree_sitter::Node;

use crate::classify::text;

/// Resolves the type of a declaration from its `type` annotation and
/// `value` initializer fields.
pub(crate) fn resolve(node: &Node<'_>, src: &[u8]) -> Option<DeclaredType> {
    if let Some(annotation) = node.child_by_field_name("type") {
        return from_annotation(&annotation, src);
    }
    node.child_by_field_name("value")
        .and_then(|value| from_value(&value, src))
        .map(DeclaredType::single)
}

/// Resolves a `type_annotation` node (`: T`).
pub(crate) fn from_annotation(annotation: &Node<'_>, src: &[u8]) -> Option<DeclaredType> {
    let ty = annotation.named_child(0)?;
    let mut constituents = Vec::new();
    collect(&ty, src, &mut constituents);
    Some(DeclaredType::union(constituents))
}

fn collect(ty: &Node<'_>, src: &[u8], out: &mut Vec<TypeClass>) {
    match ty.kind() {
        "union_type" | "parenthesized_type" => {
            let mut cursor = ty.walk();
            for child in ty.named_children(&mut cursor) {
                collect(&child, src, out);
            }
        }
        "readonly_type" => match ty.named_child(0) {
            Some(inner) => collect(&inner, src, out),
            None => out.push(TypeClass::Other),
        },
        "predefined_type" => out.push(from_keyword(text(ty, src))),
        "literal_type" => out.push(
            ty.named_child(0)
                .map_or(TypeClass::Other, |lit| from_literal_kind(&lit, src)),
        ),
        "template_literal_type" => out.push(TypeClass::String),
        "array_type" | "tuple_type" => out.push(TypeClass::Array),
        "function_type" => out.push(TypeClass::Function),
        "generic_type" => {
            let name = ty
                .child_by_field_name("name")
                .map_or("", |name| text(&name, src));
            out.push(match name {
                "Array" | "ReadonlyArray" => TypeClass::Array,
                _ => TypeClass::Other,
            });
        }
        _ => out.push(TypeClass::Other),
    }
}

fn from_keyword(keyword: &str) -> TypeClass {
    match keyword {
        "string" => TypeClass::String,
        "number" | "bigint" => TypeClass::Number,
        "boolean" => TypeClass::Boolean,
        "null" | "undefined" => TypeClass::Nullish,
        _ => TypeClass::Other,
    }
}

fn from_literal_kind(literal: &Node<'_>, src: &[u8]) -> TypeClass {
    match literal.kind() {
        "string" | "template_string" => TypeClass::String,
        "number" => TypeClass::Number,
        "true" | "false" => TypeClass::Boolean,
        "null" | "undefined" => TypeClass::Nullish,
        "unary_expression" => {
            if text(literal, src).starts_with('-') {
                TypeClass::Number
            } else {
                TypeClass::Other
            }
        }
        _ => TypeClass::Other,
    }
}

/// Resolves the type of an initializer expression, when it is a literal.
pub(crate) fn from_value(value: &Node<'_>, src: &[u8]) -> Option<TypeClass> {
    match value.kind() {
        "string" | "template_string" => Some(TypeClass::String),
        "number" => Some(TypeClass::Number),
        "true" | "false" => Some(TypeClass::Boolean),
        "null" | "undefined" => Some(TypeClass::Nullish),
        "array" => Some(TypeClass::Array),
        "arrow_function" | "function_expression" | "function" | "generator_function" => {
            Some(TypeClass::Function)
        }
        "parenthesized_expression" => value
            .named_child(0)
            .and_then(|inner| from_value(&inner, src)),
        "unary_expression" => {
            let operator = value
                .child_by_field_name("operator")
                .map_or("", |op| text(&op, src));
            match operator {
                "!" => Some(TypeClass::Boolean),
                "-" | "+" | "~" => Some(TypeClass::Number),
                "typeof" => Some(TypeClass::String),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Whether an initializer is a function value, for classifying class fields
/// and object pairs as methods.
pub(crate) fn is_function_value(value: &Node<'_>, src: &[u8]) -> bool {
    from_value(value, src) == Some(TypeClass::Function)
}
