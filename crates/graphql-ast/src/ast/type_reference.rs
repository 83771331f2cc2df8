use crate::ast::ast_node::impl_ast_node;
use crate::ast::Name;
use crate::NodeMeta;

/// A reference to a type, as written in a variable definition, field
/// definition, or input value definition. Dispatch enum, not a node.
///
/// See
/// [Type References](https://spec.graphql.org/September2025/#sec-Type-References)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeReference<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
    NonNull(NonNullType<'src>),
}

/// A named type reference: `User`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
    pub meta: NodeMeta<'src>,
}

/// A list type reference: `[User]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'src> {
    pub item_type: Box<TypeReference<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A non-null type reference: `User!` or `[User]!`.
///
/// The grammar forbids nesting a non-null directly inside a non-null
/// (`User!!`); the inner reference is a named or list type.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType<'src> {
    pub inner_type: Box<TypeReference<'src>>,
    pub meta: NodeMeta<'src>,
}

impl_ast_node!(NamedType);
impl_ast_node!(ListType);
impl_ast_node!(NonNullType);
