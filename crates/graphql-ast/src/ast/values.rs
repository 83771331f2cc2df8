use crate::ast::ast_node::impl_ast_node;
use crate::ast::Name;
use crate::ast::Variable;
use crate::NodeMeta;
use std::borrow::Cow;

// =========================================================
// Value enum
// =========================================================

/// A GraphQL input value.
///
/// Represents all possible GraphQL value literals as defined in the
/// [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values)
/// section of the spec. Dispatch enum, not a node: each variant carries
/// the node.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Int(IntValue<'src>),
    Float(FloatValue<'src>),
    String(StringValue<'src>),
    Boolean(BooleanValue<'src>),
    Null(NullValue<'src>),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
    Variable(Variable<'src>),
}

// =========================================================
// Scalar value nodes
// =========================================================

/// A GraphQL integer literal.
///
/// The raw source text is kept rather than a decoded integer: the grammar
/// places no range on IntValue, and leaving interpretation to consumers
/// keeps the node lossless.
///
/// See [Int Value](https://spec.graphql.org/September2025/#sec-Int-Value)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'src> {
    pub value: Cow<'src, str>,
    pub meta: NodeMeta<'src>,
}

/// A GraphQL float literal, kept as raw source text (see [`IntValue`]).
///
/// See
/// [Float Value](https://spec.graphql.org/September2025/#sec-Float-Value)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'src> {
    pub value: Cow<'src, str>,
    pub meta: NodeMeta<'src>,
}

/// A GraphQL string literal.
///
/// See
/// [String Value](https://spec.graphql.org/September2025/#sec-String-Value)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    /// The decoded string value (escape sequences resolved, block-string
    /// indentation stripped).
    pub value: Cow<'src, str>,

    /// Whether the literal was written as a block string (`"""..."""`).
    pub block: bool,

    pub meta: NodeMeta<'src>,
}

/// A `true` or `false` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue<'src> {
    pub value: bool,
    pub meta: NodeMeta<'src>,
}

/// A `null` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue<'src> {
    pub meta: NodeMeta<'src>,
}

/// An enum value literal: a name that is not `true`, `false`, or `null`.
///
/// See
/// [Enum Value](https://spec.graphql.org/September2025/#sec-Enum-Value)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub name: Name<'src>,
    pub meta: NodeMeta<'src>,
}

// =========================================================
// Composite value nodes
// =========================================================

/// A list literal: `[1, 2, 3]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub values: Vec<Value<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An input object literal: `{lon: 12.43, lat: -53.211}`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A single `name: value` entry within an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub meta: NodeMeta<'src>,
}

impl_ast_node!(IntValue);
impl_ast_node!(FloatValue);
impl_ast_node!(StringValue);
impl_ast_node!(BooleanValue);
impl_ast_node!(NullValue);
impl_ast_node!(EnumValue);
impl_ast_node!(ListValue);
impl_ast_node!(ObjectValue);
impl_ast_node!(ObjectField);
