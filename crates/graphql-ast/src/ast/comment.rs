use crate::ast::ast_node::impl_ast_node;
use crate::NodeMeta;
use std::borrow::Cow;

/// A single-line `# ...` comment.
///
/// Comments are lexical trivia: they carry no semantics, and most callers
/// never need them. When a document is built with
/// `preserve_comments: true`, each comment token is attached to the
/// significant node that immediately follows it in source (see
/// [`AstNode::attach_comment`](crate::ast::AstNode::attach_comment)).
///
/// `value` is the comment text after the leading `#`, not including the
/// line terminator.
#[derive(Clone, Debug, PartialEq)]
pub struct Comment<'src> {
    pub value: Cow<'src, str>,
    pub meta: NodeMeta<'src>,
}

/// A description attached to a type-system definition: a string literal
/// immediately preceding the definition.
///
/// See
/// [Descriptions](https://spec.graphql.org/September2025/#sec-Descriptions)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Description<'src> {
    /// The decoded string value (escape sequences resolved, block-string
    /// indentation stripped).
    pub value: Cow<'src, str>,

    /// Whether the description was written as a block string (`"""..."""`).
    pub block: bool,

    pub meta: NodeMeta<'src>,
}

impl_ast_node!(Comment);
impl_ast_node!(Description);
