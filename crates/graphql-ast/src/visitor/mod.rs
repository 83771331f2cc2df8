//! A generic, cancellable, depth-aware traversal framework for the AST.
//!
//! Traversal is pre-order, depth-first, in document order: a node is
//! *entered* (depth incremented, [`Visitor::enter_node`] invoked) before
//! any of its children are visited, and *left* ([`Visitor::leave_node`]
//! invoked, depth decremented) after the last child returns. Children of
//! a sequence field are visited in the order they appear; fields are
//! visited in the order of the grammar production they come from.
//!
//! Concrete analyses implement [`Visitor`] and override the hooks they
//! care about. Per-kind hooks default to recursing into the node's
//! structurally-required children via the matching `walk_*` function; an
//! override that still wants deeper traversal is responsible for calling
//! `walk_*` itself.
//!
//! Before entering each node the engine polls the context's cancellation
//! signal. Once signalled, no further nodes are entered; hook state
//! already accumulated in the context is retained, not rolled back, and
//! the traversal reports [`VisitOutcome::Cancelled`], a recognized
//! outcome distinct from both completion and a hook-requested
//! [`VisitFlow::Break`].
//!
//! The walk itself is read-only: the framework never mutates the tree,
//! so any number of traversals may run over the same immutable tree from
//! different threads, as long as each owns its context exclusively.

mod context;
mod max_depth;
mod walk;

pub use context::CancellationToken;
pub use context::DepthContext;
pub use context::VisitorContext;
pub use max_depth::max_nested_depth;
pub use max_depth::MaxDepthVisitor;
pub use walk::*;

use crate::ast::*;

/// A signal returned from [`Visitor`] hooks to alter the flow of
/// traversal.
///
/// The default hooks all return `VisitFlow::Next`, which continues the
/// depth-first traversal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VisitFlow {
    /// Continue visiting nodes as usual.
    Next,
    /// Skip over the current node without any deeper traversal.
    /// (Meaningful from [`Visitor::enter_node`]; elsewhere it is
    /// equivalent to `Next`.)
    Skip,
    /// Abort the traversal without visiting any more nodes.
    Break,
}

/// How a traversal ended.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VisitOutcome {
    /// Every reachable node was visited.
    Completed,
    /// A hook returned [`VisitFlow::Break`].
    Stopped,
    /// The context's cancellation signal was observed. Partial results
    /// accumulated in the context remain valid.
    Cancelled,
}

impl VisitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, VisitOutcome::Completed)
    }
}

/// Visits `root` and everything beneath it, dispatching to `visitor`'s
/// hooks with `ctx` threaded through the whole traversal.
///
/// This is the single entry point of the framework; analyses usually
/// expose a convenience wrapper around it (see
/// [`max_nested_depth`](crate::visitor::max_nested_depth)).
pub fn visit<C, V>(root: NodeRef<'_, '_>, visitor: &mut V, ctx: &mut C) -> VisitOutcome
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    match visit_node(visitor, root, ctx) {
        VisitFlow::Break if ctx.is_cancelled() => VisitOutcome::Cancelled,
        VisitFlow::Break => VisitOutcome::Stopped,
        _ => VisitOutcome::Completed,
    }
}

/// The per-node checkpoint every entry funnels through: cancellation
/// poll, depth bookkeeping, generic hooks, per-kind dispatch.
///
/// Returns only `Next` or `Break` — `Skip` is consumed here.
pub(crate) fn visit_node<C, V>(visitor: &mut V, node: NodeRef<'_, '_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if ctx.is_cancelled() {
        return VisitFlow::Break;
    }

    let depth = ctx.current_depth() + 1;
    ctx.set_current_depth(depth);

    let mut aborted = false;
    match visitor.enter_node(node, ctx) {
        VisitFlow::Break => aborted = true,
        VisitFlow::Skip => {},
        VisitFlow::Next => {
            // Attached comments precede the node's own children in
            // document order.
            if let Some(comments) = node.comments() {
                for comment in comments {
                    if visit_node(visitor, NodeRef::Comment(comment), ctx) == VisitFlow::Break {
                        aborted = true;
                        break;
                    }
                }
            }
            if !aborted {
                aborted = dispatch(visitor, node, ctx) == VisitFlow::Break;
            }
        },
    }

    if !aborted && visitor.leave_node(node, ctx) == VisitFlow::Break {
        aborted = true;
    }

    // The depth counter unwinds symmetrically even when aborting, so a
    // caller that reuses the context can rely on it.
    ctx.set_current_depth(depth - 1);

    if aborted {
        VisitFlow::Break
    } else {
        VisitFlow::Next
    }
}

fn dispatch<C, V>(visitor: &mut V, node: NodeRef<'_, '_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    match node {
        NodeRef::Alias(n) => visitor.visit_alias(n, ctx),
        NodeRef::Argument(n) => visitor.visit_argument(n, ctx),
        NodeRef::Arguments(n) => visitor.visit_arguments(n, ctx),
        NodeRef::ArgumentsDefinition(n) => visitor.visit_arguments_definition(n, ctx),
        NodeRef::BooleanValue(n) => visitor.visit_boolean_value(n, ctx),
        NodeRef::Comment(n) => visitor.visit_comment(n, ctx),
        NodeRef::Description(n) => visitor.visit_description(n, ctx),
        NodeRef::Directive(n) => visitor.visit_directive(n, ctx),
        NodeRef::DirectiveDefinition(n) => visitor.visit_directive_definition(n, ctx),
        NodeRef::DirectiveLocations(n) => visitor.visit_directive_locations(n, ctx),
        NodeRef::Directives(n) => visitor.visit_directives(n, ctx),
        NodeRef::Document(n) => visitor.visit_document(n, ctx),
        NodeRef::EnumTypeDefinition(n) => visitor.visit_enum_type_definition(n, ctx),
        NodeRef::EnumTypeExtension(n) => visitor.visit_enum_type_extension(n, ctx),
        NodeRef::EnumValue(n) => visitor.visit_enum_value(n, ctx),
        NodeRef::EnumValueDefinition(n) => visitor.visit_enum_value_definition(n, ctx),
        NodeRef::EnumValuesDefinition(n) => visitor.visit_enum_values_definition(n, ctx),
        NodeRef::Field(n) => visitor.visit_field(n, ctx),
        NodeRef::FieldDefinition(n) => visitor.visit_field_definition(n, ctx),
        NodeRef::FieldsDefinition(n) => visitor.visit_fields_definition(n, ctx),
        NodeRef::FloatValue(n) => visitor.visit_float_value(n, ctx),
        NodeRef::FragmentDefinition(n) => visitor.visit_fragment_definition(n, ctx),
        NodeRef::FragmentName(n) => visitor.visit_fragment_name(n, ctx),
        NodeRef::FragmentSpread(n) => visitor.visit_fragment_spread(n, ctx),
        NodeRef::ImplementsInterfaces(n) => visitor.visit_implements_interfaces(n, ctx),
        NodeRef::InlineFragment(n) => visitor.visit_inline_fragment(n, ctx),
        NodeRef::InputFieldsDefinition(n) => visitor.visit_input_fields_definition(n, ctx),
        NodeRef::InputObjectTypeDefinition(n) => visitor.visit_input_object_type_definition(n, ctx),
        NodeRef::InputObjectTypeExtension(n) => visitor.visit_input_object_type_extension(n, ctx),
        NodeRef::InputValueDefinition(n) => visitor.visit_input_value_definition(n, ctx),
        NodeRef::IntValue(n) => visitor.visit_int_value(n, ctx),
        NodeRef::InterfaceTypeDefinition(n) => visitor.visit_interface_type_definition(n, ctx),
        NodeRef::InterfaceTypeExtension(n) => visitor.visit_interface_type_extension(n, ctx),
        NodeRef::ListType(n) => visitor.visit_list_type(n, ctx),
        NodeRef::ListValue(n) => visitor.visit_list_value(n, ctx),
        NodeRef::Name(n) => visitor.visit_name(n, ctx),
        NodeRef::NamedType(n) => visitor.visit_named_type(n, ctx),
        NodeRef::NonNullType(n) => visitor.visit_non_null_type(n, ctx),
        NodeRef::NullValue(n) => visitor.visit_null_value(n, ctx),
        NodeRef::ObjectField(n) => visitor.visit_object_field(n, ctx),
        NodeRef::ObjectTypeDefinition(n) => visitor.visit_object_type_definition(n, ctx),
        NodeRef::ObjectTypeExtension(n) => visitor.visit_object_type_extension(n, ctx),
        NodeRef::ObjectValue(n) => visitor.visit_object_value(n, ctx),
        NodeRef::OperationDefinition(n) => visitor.visit_operation_definition(n, ctx),
        NodeRef::RootOperationTypeDefinition(n) => {
            visitor.visit_root_operation_type_definition(n, ctx)
        },
        NodeRef::ScalarTypeDefinition(n) => visitor.visit_scalar_type_definition(n, ctx),
        NodeRef::ScalarTypeExtension(n) => visitor.visit_scalar_type_extension(n, ctx),
        NodeRef::SchemaDefinition(n) => visitor.visit_schema_definition(n, ctx),
        NodeRef::SchemaExtension(n) => visitor.visit_schema_extension(n, ctx),
        NodeRef::SelectionSet(n) => visitor.visit_selection_set(n, ctx),
        NodeRef::StringValue(n) => visitor.visit_string_value(n, ctx),
        NodeRef::TypeCondition(n) => visitor.visit_type_condition(n, ctx),
        NodeRef::UnionMemberTypes(n) => visitor.visit_union_member_types(n, ctx),
        NodeRef::UnionTypeDefinition(n) => visitor.visit_union_type_definition(n, ctx),
        NodeRef::UnionTypeExtension(n) => visitor.visit_union_type_extension(n, ctx),
        NodeRef::Variable(n) => visitor.visit_variable(n, ctx),
        NodeRef::VariableDefinition(n) => visitor.visit_variable_definition(n, ctx),
        NodeRef::VariablesDefinition(n) => visitor.visit_variables_definition(n, ctx),
    }
}

/// Trait for analyses that traverse the AST.
///
/// Hooks come in two layers:
///
/// - **Generic hooks** — [`enter_node`](Visitor::enter_node) /
///   [`leave_node`](Visitor::leave_node) fire for *every* node, with the
///   context's depth counter already updated. Depth-style analyses
///   usually only need these.
///
/// - **Per-kind hooks** — `visit_document`, `visit_field`, … fire between
///   enter and leave for the matching node kind. Their default bodies
///   call the corresponding free `walk_*` function, which recurses into
///   the node's children in grammar order; an override that still wants
///   the children visited must call `walk_*` itself. Leaf kinds' walks
///   are no-ops.
///
/// All hooks return a [`VisitFlow`] to continue (`Next`), prune (`Skip`),
/// or abort (`Break`) the traversal.
#[allow(unused_variables)]
pub trait Visitor<C: VisitorContext> {
    /// Fires when any node is entered, before its children. The
    /// context's `current_depth` already counts this node.
    fn enter_node(&mut self, node: NodeRef<'_, '_>, ctx: &mut C) -> VisitFlow {
        VisitFlow::Next
    }

    /// Fires when any node is left, after its last child.
    fn leave_node(&mut self, node: NodeRef<'_, '_>, ctx: &mut C) -> VisitFlow {
        VisitFlow::Next
    }

    fn visit_alias(&mut self, node: &Alias<'_>, ctx: &mut C) -> VisitFlow {
        walk_alias(self, node, ctx)
    }

    fn visit_argument(&mut self, node: &Argument<'_>, ctx: &mut C) -> VisitFlow {
        walk_argument(self, node, ctx)
    }

    fn visit_arguments(&mut self, node: &Arguments<'_>, ctx: &mut C) -> VisitFlow {
        walk_arguments(self, node, ctx)
    }

    fn visit_arguments_definition(
        &mut self,
        node: &ArgumentsDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_arguments_definition(self, node, ctx)
    }

    fn visit_boolean_value(&mut self, node: &BooleanValue<'_>, ctx: &mut C) -> VisitFlow {
        walk_boolean_value(self, node, ctx)
    }

    fn visit_comment(&mut self, node: &Comment<'_>, ctx: &mut C) -> VisitFlow {
        walk_comment(self, node, ctx)
    }

    fn visit_description(&mut self, node: &Description<'_>, ctx: &mut C) -> VisitFlow {
        walk_description(self, node, ctx)
    }

    fn visit_directive(&mut self, node: &Directive<'_>, ctx: &mut C) -> VisitFlow {
        walk_directive(self, node, ctx)
    }

    fn visit_directive_definition(
        &mut self,
        node: &DirectiveDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_directive_definition(self, node, ctx)
    }

    fn visit_directive_locations(
        &mut self,
        node: &DirectiveLocations<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_directive_locations(self, node, ctx)
    }

    fn visit_directives(&mut self, node: &Directives<'_>, ctx: &mut C) -> VisitFlow {
        walk_directives(self, node, ctx)
    }

    fn visit_document(&mut self, node: &Document<'_>, ctx: &mut C) -> VisitFlow {
        walk_document(self, node, ctx)
    }

    fn visit_enum_type_definition(
        &mut self,
        node: &EnumTypeDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_enum_type_definition(self, node, ctx)
    }

    fn visit_enum_type_extension(
        &mut self,
        node: &EnumTypeExtension<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_enum_type_extension(self, node, ctx)
    }

    fn visit_enum_value(&mut self, node: &EnumValue<'_>, ctx: &mut C) -> VisitFlow {
        walk_enum_value(self, node, ctx)
    }

    fn visit_enum_value_definition(
        &mut self,
        node: &EnumValueDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_enum_value_definition(self, node, ctx)
    }

    fn visit_enum_values_definition(
        &mut self,
        node: &EnumValuesDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_enum_values_definition(self, node, ctx)
    }

    fn visit_field(&mut self, node: &Field<'_>, ctx: &mut C) -> VisitFlow {
        walk_field(self, node, ctx)
    }

    fn visit_field_definition(&mut self, node: &FieldDefinition<'_>, ctx: &mut C) -> VisitFlow {
        walk_field_definition(self, node, ctx)
    }

    fn visit_fields_definition(&mut self, node: &FieldsDefinition<'_>, ctx: &mut C) -> VisitFlow {
        walk_fields_definition(self, node, ctx)
    }

    fn visit_float_value(&mut self, node: &FloatValue<'_>, ctx: &mut C) -> VisitFlow {
        walk_float_value(self, node, ctx)
    }

    fn visit_fragment_definition(
        &mut self,
        node: &FragmentDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_fragment_definition(self, node, ctx)
    }

    fn visit_fragment_name(&mut self, node: &FragmentName<'_>, ctx: &mut C) -> VisitFlow {
        walk_fragment_name(self, node, ctx)
    }

    fn visit_fragment_spread(&mut self, node: &FragmentSpread<'_>, ctx: &mut C) -> VisitFlow {
        walk_fragment_spread(self, node, ctx)
    }

    fn visit_implements_interfaces(
        &mut self,
        node: &ImplementsInterfaces<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_implements_interfaces(self, node, ctx)
    }

    fn visit_inline_fragment(&mut self, node: &InlineFragment<'_>, ctx: &mut C) -> VisitFlow {
        walk_inline_fragment(self, node, ctx)
    }

    fn visit_input_fields_definition(
        &mut self,
        node: &InputFieldsDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_input_fields_definition(self, node, ctx)
    }

    fn visit_input_object_type_definition(
        &mut self,
        node: &InputObjectTypeDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_input_object_type_definition(self, node, ctx)
    }

    fn visit_input_object_type_extension(
        &mut self,
        node: &InputObjectTypeExtension<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_input_object_type_extension(self, node, ctx)
    }

    fn visit_input_value_definition(
        &mut self,
        node: &InputValueDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_input_value_definition(self, node, ctx)
    }

    fn visit_int_value(&mut self, node: &IntValue<'_>, ctx: &mut C) -> VisitFlow {
        walk_int_value(self, node, ctx)
    }

    fn visit_interface_type_definition(
        &mut self,
        node: &InterfaceTypeDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_interface_type_definition(self, node, ctx)
    }

    fn visit_interface_type_extension(
        &mut self,
        node: &InterfaceTypeExtension<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_interface_type_extension(self, node, ctx)
    }

    fn visit_list_type(&mut self, node: &ListType<'_>, ctx: &mut C) -> VisitFlow {
        walk_list_type(self, node, ctx)
    }

    fn visit_list_value(&mut self, node: &ListValue<'_>, ctx: &mut C) -> VisitFlow {
        walk_list_value(self, node, ctx)
    }

    fn visit_name(&mut self, node: &Name<'_>, ctx: &mut C) -> VisitFlow {
        walk_name(self, node, ctx)
    }

    fn visit_named_type(&mut self, node: &NamedType<'_>, ctx: &mut C) -> VisitFlow {
        walk_named_type(self, node, ctx)
    }

    fn visit_non_null_type(&mut self, node: &NonNullType<'_>, ctx: &mut C) -> VisitFlow {
        walk_non_null_type(self, node, ctx)
    }

    fn visit_null_value(&mut self, node: &NullValue<'_>, ctx: &mut C) -> VisitFlow {
        walk_null_value(self, node, ctx)
    }

    fn visit_object_field(&mut self, node: &ObjectField<'_>, ctx: &mut C) -> VisitFlow {
        walk_object_field(self, node, ctx)
    }

    fn visit_object_type_definition(
        &mut self,
        node: &ObjectTypeDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_object_type_definition(self, node, ctx)
    }

    fn visit_object_type_extension(
        &mut self,
        node: &ObjectTypeExtension<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_object_type_extension(self, node, ctx)
    }

    fn visit_object_value(&mut self, node: &ObjectValue<'_>, ctx: &mut C) -> VisitFlow {
        walk_object_value(self, node, ctx)
    }

    fn visit_operation_definition(
        &mut self,
        node: &OperationDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_operation_definition(self, node, ctx)
    }

    fn visit_root_operation_type_definition(
        &mut self,
        node: &RootOperationTypeDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_root_operation_type_definition(self, node, ctx)
    }

    fn visit_scalar_type_definition(
        &mut self,
        node: &ScalarTypeDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_scalar_type_definition(self, node, ctx)
    }

    fn visit_scalar_type_extension(
        &mut self,
        node: &ScalarTypeExtension<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_scalar_type_extension(self, node, ctx)
    }

    fn visit_schema_definition(&mut self, node: &SchemaDefinition<'_>, ctx: &mut C) -> VisitFlow {
        walk_schema_definition(self, node, ctx)
    }

    fn visit_schema_extension(&mut self, node: &SchemaExtension<'_>, ctx: &mut C) -> VisitFlow {
        walk_schema_extension(self, node, ctx)
    }

    fn visit_selection_set(&mut self, node: &SelectionSet<'_>, ctx: &mut C) -> VisitFlow {
        walk_selection_set(self, node, ctx)
    }

    fn visit_string_value(&mut self, node: &StringValue<'_>, ctx: &mut C) -> VisitFlow {
        walk_string_value(self, node, ctx)
    }

    fn visit_type_condition(&mut self, node: &TypeCondition<'_>, ctx: &mut C) -> VisitFlow {
        walk_type_condition(self, node, ctx)
    }

    fn visit_union_member_types(&mut self, node: &UnionMemberTypes<'_>, ctx: &mut C) -> VisitFlow {
        walk_union_member_types(self, node, ctx)
    }

    fn visit_union_type_definition(
        &mut self,
        node: &UnionTypeDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_union_type_definition(self, node, ctx)
    }

    fn visit_union_type_extension(
        &mut self,
        node: &UnionTypeExtension<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_union_type_extension(self, node, ctx)
    }

    fn visit_variable(&mut self, node: &Variable<'_>, ctx: &mut C) -> VisitFlow {
        walk_variable(self, node, ctx)
    }

    fn visit_variable_definition(
        &mut self,
        node: &VariableDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_variable_definition(self, node, ctx)
    }

    fn visit_variables_definition(
        &mut self,
        node: &VariablesDefinition<'_>,
        ctx: &mut C,
    ) -> VisitFlow {
        walk_variables_definition(self, node, ctx)
    }
}
