use crate::ast::ast_node::impl_ast_node;
use crate::ast::Name;
use crate::ast::Value;
use crate::NodeMeta;

/// The parenthesized argument list on a field or directive:
/// `(first: 10, after: $cursor)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Arguments<'src> {
    pub items: Vec<Argument<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A single argument: `name: value`.
///
/// See
/// [Arguments](https://spec.graphql.org/September2025/#sec-Language.Arguments)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub meta: NodeMeta<'src>,
}

impl_ast_node!(Arguments);
impl_ast_node!(Argument);
