//! Tree-building helpers for the node model and visitor tests.
//!
//! Test trees use `'static` borrows of string literals so no source text
//! needs to be kept alive, and default to [`NodeOptions::none()`] since
//! most tests don't care about locations or comments.

use std::borrow::Cow;

use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Directives;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Name;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::ScalarTypeDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::NodeMeta;
use crate::NodeOptions;
use crate::SourceSpan;

/// Minimal [`NodeMeta`] for a tree built with `options`. All test nodes
/// share the default (empty) span.
pub fn meta(options: &NodeOptions) -> NodeMeta<'static> {
    NodeMeta::new(SourceSpan::default(), options)
}

pub fn name(value: &'static str, options: &NodeOptions) -> Name<'static> {
    Name {
        value: Cow::Borrowed(value),
        meta: meta(options),
    }
}

/// A leaf field with no alias, arguments, directives, or subselection.
pub fn leaf_field(field_name: &'static str, options: &NodeOptions) -> Field<'static> {
    Field {
        alias: None,
        name: name(field_name, options),
        arguments: None,
        directives: None,
        selection_set: None,
        meta: meta(options),
    }
}

/// A field selecting deeper into the tree.
pub fn nested_field(
    field_name: &'static str,
    selection_set: SelectionSet<'static>,
    options: &NodeOptions,
) -> Field<'static> {
    Field {
        selection_set: Some(selection_set),
        ..leaf_field(field_name, options)
    }
}

pub fn selection_set(
    fields: Vec<Field<'static>>,
    options: &NodeOptions,
) -> SelectionSet<'static> {
    SelectionSet {
        selections: fields.into_iter().map(Selection::Field).collect(),
        meta: meta(options),
    }
}

/// A named query operation over `selection_set`.
pub fn query(
    operation_name: Option<&'static str>,
    selection_set: SelectionSet<'static>,
    options: &NodeOptions,
) -> OperationDefinition<'static> {
    OperationDefinition {
        operation: OperationKind::Query,
        name: operation_name.map(|n| name(n, options)),
        variable_definitions: None,
        directives: None,
        selection_set,
        meta: meta(options),
    }
}

pub fn scalar_def(
    scalar_name: &'static str,
    directives: Option<Directives<'static>>,
    options: &NodeOptions,
) -> ScalarTypeDefinition<'static> {
    ScalarTypeDefinition {
        description: None,
        name: name(scalar_name, options),
        directives,
        meta: meta(options),
    }
}

/// A directive list holding one argument-less directive per name given.
pub fn directives(names: &[&'static str], options: &NodeOptions) -> Directives<'static> {
    Directives {
        items: names
            .iter()
            .map(|directive_name| Directive {
                name: name(directive_name, options),
                arguments: None,
                meta: meta(options),
            })
            .collect(),
        meta: meta(options),
    }
}

pub fn document(
    definitions: Vec<Definition<'static>>,
    options: &NodeOptions,
) -> Document<'static> {
    Document {
        definitions,
        meta: meta(options),
    }
}

/// `{ a { a { ... } } }` nested `levels` fields deep, as an anonymous
/// query document.
pub fn nested_query_document(levels: usize, options: &NodeOptions) -> Document<'static> {
    assert!(levels > 0, "need at least one field");
    let mut set = selection_set(vec![leaf_field("a", options)], options);
    for _ in 1..levels {
        set = selection_set(vec![nested_field("a", set, options)], options);
    }
    document(
        vec![Definition::OperationDefinition(query(None, set, options))],
        options,
    )
}
