use crate::ast::ast_node::impl_ast_node;
use crate::ast::Arguments;
use crate::ast::Name;
use crate::NodeMeta;

/// The ordered list of directive annotations applied to a definition,
/// field, or other element: `@a @b(x: 1)`.
///
/// This wrapper is itself a node: tooling that reasons about "the
/// directives of X" (location-aware linters, printers) addresses the list
/// as a whole, not just its members.
#[derive(Clone, Debug, PartialEq)]
pub struct Directives<'src> {
    pub items: Vec<Directive<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A single applied directive (an annotation), e.g.
/// `@deprecated(reason: "Use newField")`.
///
/// See
/// [Directives](https://spec.graphql.org/September2025/#sec-Language.Directives)
/// in the spec. Note: this represents an *applied* directive, not a
/// directive *definition*.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub name: Name<'src>,
    pub arguments: Option<Arguments<'src>>,
    pub meta: NodeMeta<'src>,
}

impl_ast_node!(Directives);
impl_ast_node!(Directive);
