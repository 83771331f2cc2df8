//! Maximum-nesting-depth analysis.

use crate::ast::Document;
use crate::ast::NodeRef;
use crate::visitor::visit;
use crate::visitor::DepthContext;
use crate::visitor::VisitFlow;
use crate::visitor::Visitor;
use crate::visitor::VisitorContext;

/// A [`Visitor`] that records the deepest nesting level reached during a
/// traversal in the context's `max_depth` watermark.
///
/// Every node counts toward depth uniformly, including attached comments
/// and punctuation-only wrappers like argument and directive lists; the
/// root sits at depth 1. The watermark is monotone: re-running the same
/// visitor over a shallower subtree with a reused context never lowers
/// it.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxDepthVisitor;

impl<C: VisitorContext> Visitor<C> for MaxDepthVisitor {
    fn enter_node(&mut self, _node: NodeRef<'_, '_>, ctx: &mut C) -> VisitFlow {
        if ctx.current_depth() > ctx.max_depth() {
            ctx.set_max_depth(ctx.current_depth());
        }
        VisitFlow::Next
    }
}

/// Computes the maximum nesting depth of `document`.
///
/// A document with no definitions has depth 1 (the document itself).
///
/// ```
/// use graphql_ast::ast::Document;
/// use graphql_ast::visitor::max_nested_depth;
/// use graphql_ast::NodeMeta;
/// use graphql_ast::NodeOptions;
/// use graphql_ast::SourceSpan;
///
/// let document = Document {
///     definitions: vec![],
///     meta: NodeMeta::new(SourceSpan::default(), &NodeOptions::none()),
/// };
/// assert_eq!(max_nested_depth(&document), 1);
/// ```
pub fn max_nested_depth(document: &Document<'_>) -> usize {
    let mut ctx = DepthContext::new();
    visit(NodeRef::Document(document), &mut MaxDepthVisitor, &mut ctx);
    ctx.max_depth()
}
