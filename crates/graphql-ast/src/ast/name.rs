use crate::ast::ast_node::impl_ast_node;
use crate::NodeMeta;
use std::borrow::Cow;

/// A GraphQL [name](https://spec.graphql.org/September2025/#sec-Names)
/// (identifier).
///
/// Names are used for type names, field names, argument names, directive
/// names, enum values, and more. The `value` field borrows from the
/// source text when possible (`Cow::Borrowed`) or owns the string when
/// the source is not available (`Cow::Owned`).
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub meta: NodeMeta<'src>,
}

impl std::fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A field alias: the `total:` in `total: count`.
///
/// See
/// [Field Alias](https://spec.graphql.org/September2025/#sec-Field-Alias)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Alias<'src> {
    pub name: Name<'src>,
    pub meta: NodeMeta<'src>,
}

/// The name of a fragment, as it appears in a fragment definition or a
/// fragment spread. Distinct from a plain [`Name`] because the grammar
/// excludes `on` as a fragment name.
///
/// See
/// [FragmentName](https://spec.graphql.org/September2025/#FragmentName)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentName<'src> {
    pub name: Name<'src>,
    pub meta: NodeMeta<'src>,
}

impl_ast_node!(Name);
impl_ast_node!(Alias);
impl_ast_node!(FragmentName);
