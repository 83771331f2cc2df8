use crate::ast::ast_node::impl_ast_node;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::NodeMeta;

// =========================================================
// Document
// =========================================================

/// Root AST node for any GraphQL document.
///
/// A document contains a flat, document-ordered list of [`Definition`]s
/// which may be type-system definitions, type-system extensions, or
/// executable definitions (operations and fragments).
///
/// The spec's
/// [`Document`](https://spec.graphql.org/September2025/#sec-Document)
/// grammar production allows both executable and type-system definitions
/// to coexist; which definition kinds are *permitted* in a given setting
/// is a validation concern left to downstream consumers. The convenience
/// methods [`executable_definitions()`](Document::executable_definitions)
/// and
/// [`type_system_definitions()`](Document::type_system_definitions)
/// provide easy filtering when needed.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub meta: NodeMeta<'src>,
}

impl<'src> Document<'src> {
    /// Iterate over only the executable definitions (operations and
    /// fragments) in this document.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| {
            matches!(
                d,
                Definition::OperationDefinition(_) | Definition::FragmentDefinition(_)
            )
        })
    }

    /// Iterate over only the type-system definitions and extensions in
    /// this document.
    pub fn type_system_definitions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| {
            !matches!(
                d,
                Definition::OperationDefinition(_) | Definition::FragmentDefinition(_)
            )
        })
    }
}

// =========================================================
// Definition
// =========================================================

/// A top-level definition in a GraphQL document.
///
/// Covers both executable definitions (operations, fragments) and
/// type-system definitions (schema, types, directives, extensions).
/// This is a dispatch enum, not a node itself: each variant carries the
/// node, and traversal descends directly into it.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    OperationDefinition(OperationDefinition<'src>),
    FragmentDefinition(FragmentDefinition<'src>),
    SchemaDefinition(SchemaDefinition<'src>),
    ScalarTypeDefinition(ScalarTypeDefinition<'src>),
    ObjectTypeDefinition(ObjectTypeDefinition<'src>),
    InterfaceTypeDefinition(InterfaceTypeDefinition<'src>),
    UnionTypeDefinition(UnionTypeDefinition<'src>),
    EnumTypeDefinition(EnumTypeDefinition<'src>),
    InputObjectTypeDefinition(InputObjectTypeDefinition<'src>),
    DirectiveDefinition(DirectiveDefinition<'src>),
    SchemaExtension(SchemaExtension<'src>),
    ScalarTypeExtension(ScalarTypeExtension<'src>),
    ObjectTypeExtension(ObjectTypeExtension<'src>),
    InterfaceTypeExtension(InterfaceTypeExtension<'src>),
    UnionTypeExtension(UnionTypeExtension<'src>),
    EnumTypeExtension(EnumTypeExtension<'src>),
    InputObjectTypeExtension(InputObjectTypeExtension<'src>),
}

impl_ast_node!(Document);
