use crate::ast::Comment;
use crate::ConfigurationError;
use crate::NodeKind;
use crate::NodeMeta;
use crate::SourceSpan;

/// Trait implemented by all AST node types: the common node contract that
/// generic tooling (the visitor framework, printers, linters) is written
/// against.
///
/// All AST node types implement this trait via
/// `#[inherent] impl AstNode`, giving each node both inherent methods (no
/// trait import needed) and a trait bound for generic utilities.
///
/// A node's [`kind`](AstNode::kind) is a pure function of its concrete
/// type and never changes after construction. The optional cross-cutting
/// fields (location, comments) are probed through accessors that read as
/// `None`, never an error, when the node's storage configuration omits
/// them, so generic code can probe uniformly without branching on how the
/// document was built.
pub trait AstNode<'src> {
    /// The kind discriminant for this node. Constant per concrete type.
    fn kind(&self) -> NodeKind;

    /// The node's opt-in metadata storage (location, comments).
    fn meta(&self) -> &NodeMeta<'src>;

    /// Mutable access to the node's metadata, for post-construction
    /// passes such as comment attachment.
    fn meta_mut(&mut self) -> &mut NodeMeta<'src>;

    /// The node's source span, or `None` when the document was built
    /// without location tracking.
    fn location(&self) -> Option<&SourceSpan>;

    /// Comments immediately preceding this node in source, or `None` when
    /// the document was built without comment preservation.
    fn comments(&self) -> Option<&[Comment<'src>]>;

    /// Overwrites the node's source span. Errors if the node has no
    /// location slot.
    fn set_location(&mut self, span: SourceSpan) -> Result<(), ConfigurationError>;

    /// Appends a comment to the node. Errors if the node has no comment
    /// slot.
    fn attach_comment(&mut self, comment: Comment<'src>) -> Result<(), ConfigurationError>;
}

/// Implements [`AstNode`] for a node struct whose type name matches its
/// [`NodeKind`] variant and whose metadata field is named `meta`.
macro_rules! impl_ast_node {
    ($ty:ident) => {
        #[::inherent::inherent]
        impl<'src> $crate::ast::AstNode<'src> for $ty<'src> {
            pub fn kind(&self) -> $crate::NodeKind {
                $crate::NodeKind::$ty
            }

            pub fn meta(&self) -> &$crate::NodeMeta<'src> {
                &self.meta
            }

            pub fn meta_mut(&mut self) -> &mut $crate::NodeMeta<'src> {
                &mut self.meta
            }

            pub fn location(&self) -> Option<&$crate::SourceSpan> {
                self.meta.location()
            }

            pub fn comments(&self) -> Option<&[$crate::ast::Comment<'src>]> {
                self.meta.comments()
            }

            pub fn set_location(
                &mut self,
                span: $crate::SourceSpan,
            ) -> Result<(), $crate::ConfigurationError> {
                self.meta.set_location(span)
            }

            pub fn attach_comment(
                &mut self,
                comment: $crate::ast::Comment<'src>,
            ) -> Result<(), $crate::ConfigurationError> {
                self.meta.attach_comment(comment)
            }
        }
    };
}

pub(crate) use impl_ast_node;
