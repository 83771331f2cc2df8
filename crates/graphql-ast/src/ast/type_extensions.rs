use crate::ast::ast_node::impl_ast_node;
use crate::ast::Directives;
use crate::ast::EnumValuesDefinition;
use crate::ast::FieldsDefinition;
use crate::ast::ImplementsInterfaces;
use crate::ast::InputFieldsDefinition;
use crate::ast::Name;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::UnionMemberTypes;
use crate::NodeMeta;

// =========================================================
// Schema extension
// =========================================================

/// A schema extension: `extend schema @dir { subscription: Sub }`.
///
/// See
/// [Schema Extension](https://spec.graphql.org/September2025/#sec-Schema-Extension)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension<'src> {
    pub directives: Option<Directives<'src>>,
    pub operation_types: Vec<RootOperationTypeDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

// =========================================================
// Type extensions
// =========================================================

/// A scalar type extension: `extend scalar DateTime @dir`.
///
/// See
/// [Type Extensions](https://spec.graphql.org/September2025/#sec-Type-Extensions)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An object type extension: `extend type User { nickname: String }`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub name: Name<'src>,
    pub interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<FieldsDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An interface type extension: `extend interface Node @dir`.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension<'src> {
    pub name: Name<'src>,
    pub interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<FieldsDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A union type extension: `extend union Pet = Bird`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub member_types: Option<UnionMemberTypes<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An enum type extension: `extend enum Episode { ROGUE_ONE }`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub values: Option<EnumValuesDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An input object type extension: `extend input Point { z: Float }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<InputFieldsDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

impl_ast_node!(SchemaExtension);
impl_ast_node!(ScalarTypeExtension);
impl_ast_node!(ObjectTypeExtension);
impl_ast_node!(InterfaceTypeExtension);
impl_ast_node!(UnionTypeExtension);
impl_ast_node!(EnumTypeExtension);
impl_ast_node!(InputObjectTypeExtension);
