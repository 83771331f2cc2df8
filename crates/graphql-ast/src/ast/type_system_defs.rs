use crate::ast::ast_node::impl_ast_node;
use crate::ast::Arguments;
use crate::ast::Description;
use crate::ast::DirectiveLocation;
use crate::ast::Directives;
use crate::ast::EnumValue;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationKind;
use crate::ast::TypeReference;
use crate::ast::Value;
use crate::NodeMeta;

// =========================================================
// Schema definition
// =========================================================

/// A schema definition: `schema { query: Query, mutation: Mutation }`.
///
/// See
/// [Schema](https://spec.graphql.org/September2025/#sec-Schema)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub directives: Option<Directives<'src>>,
    pub operation_types: Vec<RootOperationTypeDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A root operation type binding within a schema definition or extension:
/// `query: Query`.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'src> {
    pub operation: OperationKind,
    pub named_type: NamedType<'src>,
    pub meta: NodeMeta<'src>,
}

// =========================================================
// Type definitions
// =========================================================

/// A scalar type definition: `scalar DateTime @specifiedBy(url: "...")`.
///
/// See
/// [Scalars](https://spec.graphql.org/September2025/#sec-Scalars)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An object type definition: `type User implements Node { ... }`.
///
/// See
/// [Objects](https://spec.graphql.org/September2025/#sec-Objects)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<FieldsDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An interface type definition: `interface Node { id: ID! }`.
///
/// See
/// [Interfaces](https://spec.graphql.org/September2025/#sec-Interfaces)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<FieldsDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A union type definition: `union Pet = Cat | Dog`.
///
/// See
/// [Unions](https://spec.graphql.org/September2025/#sec-Unions)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub member_types: Option<UnionMemberTypes<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An enum type definition: `enum Episode { NEWHOPE EMPIRE JEDI }`.
///
/// See
/// [Enums](https://spec.graphql.org/September2025/#sec-Enums)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub values: Option<EnumValuesDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An input object type definition: `input Point { x: Float y: Float }`.
///
/// See
/// [Input Objects](https://spec.graphql.org/September2025/#sec-Input-Objects)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<InputFieldsDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

// =========================================================
// Member definitions and list wrappers
// =========================================================

/// The braced list of field definitions on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldsDefinition<'src> {
    pub items: Vec<FieldDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A field definition within an object or interface type:
/// `name(arg: Int): String @deprecated`.
///
/// See
/// [FieldsDefinition](https://spec.graphql.org/September2025/#FieldsDefinition)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub arguments: Option<ArgumentsDefinition<'src>>,
    pub field_type: TypeReference<'src>,
    pub directives: Option<Directives<'src>>,
    pub meta: NodeMeta<'src>,
}

/// The parenthesized list of argument definitions on a field or
/// directive definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentsDefinition<'src> {
    pub items: Vec<InputValueDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// The braced list of input field definitions on an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldsDefinition<'src> {
    pub items: Vec<InputValueDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An input value definition — an argument of a field or directive, or a
/// field of an input object type: `first: Int = 10 @directive`.
///
/// See
/// [InputValueDefinition](https://spec.graphql.org/September2025/#InputValueDefinition)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub value_type: TypeReference<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Option<Directives<'src>>,
    pub meta: NodeMeta<'src>,
}

/// The braced list of enum value definitions on an enum type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValuesDefinition<'src> {
    pub items: Vec<EnumValueDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A single enum value definition: `NEWHOPE @deprecated`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub enum_value: EnumValue<'src>,
    pub directives: Option<Directives<'src>>,
    pub meta: NodeMeta<'src>,
}

/// The `implements` clause of an object or interface type:
/// `implements Node & Timestamped`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImplementsInterfaces<'src> {
    pub items: Vec<NamedType<'src>>,
    pub meta: NodeMeta<'src>,
}

/// The member list of a union type: the `Cat | Dog` in
/// `union Pet = Cat | Dog`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionMemberTypes<'src> {
    pub items: Vec<NamedType<'src>>,
    pub meta: NodeMeta<'src>,
}

// =========================================================
// Directive definitions
// =========================================================

/// A directive definition:
/// `directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD`.
///
/// See
/// [Type System Directives](https://spec.graphql.org/September2025/#sec-Type-System.Directives)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub arguments: Option<ArgumentsDefinition<'src>>,
    pub repeatable: bool,
    pub locations: DirectiveLocations<'src>,
    pub meta: NodeMeta<'src>,
}

/// The `on` clause of a directive definition. A leaf node: the locations
/// themselves are plain [`DirectiveLocation`] values, not nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveLocations<'src> {
    pub items: Vec<DirectiveLocation>,
    pub meta: NodeMeta<'src>,
}

impl_ast_node!(SchemaDefinition);
impl_ast_node!(RootOperationTypeDefinition);
impl_ast_node!(ScalarTypeDefinition);
impl_ast_node!(ObjectTypeDefinition);
impl_ast_node!(InterfaceTypeDefinition);
impl_ast_node!(UnionTypeDefinition);
impl_ast_node!(EnumTypeDefinition);
impl_ast_node!(InputObjectTypeDefinition);
impl_ast_node!(FieldsDefinition);
impl_ast_node!(FieldDefinition);
impl_ast_node!(ArgumentsDefinition);
impl_ast_node!(InputFieldsDefinition);
impl_ast_node!(InputValueDefinition);
impl_ast_node!(EnumValuesDefinition);
impl_ast_node!(EnumValueDefinition);
impl_ast_node!(ImplementsInterfaces);
impl_ast_node!(UnionMemberTypes);
impl_ast_node!(DirectiveDefinition);
impl_ast_node!(DirectiveLocations);
