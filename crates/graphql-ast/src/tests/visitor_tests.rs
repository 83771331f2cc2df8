//! Tests for the traversal engine: hook firing order, flow control
//! (`Next`/`Skip`/`Break`), cancellation, and depth bookkeeping.

use std::borrow::Cow;

use crate::ast::Comment;
use crate::ast::Definition;
use crate::ast::NodeRef;
use crate::visitor::visit;
use crate::visitor::CancellationToken;
use crate::visitor::DepthContext;
use crate::visitor::VisitFlow;
use crate::visitor::VisitOutcome;
use crate::visitor::Visitor;
use crate::visitor::VisitorContext;
use crate::NodeKind;
use crate::NodeOptions;

use super::utils;

#[derive(Debug, Eq, PartialEq)]
enum Event {
    Enter(NodeKind),
    Leave(NodeKind),
}

/// Records every generic hook firing, optionally answering `Skip` or
/// `Break` when entering a configured kind.
#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
    skip_on_enter: Option<NodeKind>,
    break_on_enter: Option<NodeKind>,
    break_on_leave: Option<NodeKind>,
}

impl<C: VisitorContext> Visitor<C> for Recorder {
    fn enter_node(&mut self, node: NodeRef<'_, '_>, _ctx: &mut C) -> VisitFlow {
        self.events.push(Event::Enter(node.kind()));
        if self.break_on_enter == Some(node.kind()) {
            VisitFlow::Break
        } else if self.skip_on_enter == Some(node.kind()) {
            VisitFlow::Skip
        } else {
            VisitFlow::Next
        }
    }

    fn leave_node(&mut self, node: NodeRef<'_, '_>, _ctx: &mut C) -> VisitFlow {
        self.events.push(Event::Leave(node.kind()));
        if self.break_on_leave == Some(node.kind()) {
            VisitFlow::Break
        } else {
            VisitFlow::Next
        }
    }
}

/// `query a { name age }` built by hand.
fn two_field_query_document() -> crate::ast::Document<'static> {
    let options = NodeOptions::none();
    let set = utils::selection_set(
        vec![
            utils::leaf_field("name", &options),
            utils::leaf_field("age", &options),
        ],
        &options,
    );
    utils::document(
        vec![Definition::OperationDefinition(utils::query(
            Some("a"),
            set,
            &options,
        ))],
        &options,
    )
}

// =============================================================================
// Traversal order
// =============================================================================

/// Verify that hooks fire pre-order, in document order: a node is
/// entered before its children, left after them, and sibling fields are
/// visited in the order they appear.
#[test]
fn test_hooks_fire_in_document_order() {
    let document = two_field_query_document();
    let mut recorder = Recorder::default();
    let mut ctx = DepthContext::new();

    let outcome = visit(NodeRef::Document(&document), &mut recorder, &mut ctx);

    assert_eq!(outcome, VisitOutcome::Completed);
    assert_eq!(
        recorder.events,
        vec![
            Event::Enter(NodeKind::Document),
            Event::Enter(NodeKind::OperationDefinition),
            Event::Enter(NodeKind::Name),
            Event::Leave(NodeKind::Name),
            Event::Enter(NodeKind::SelectionSet),
            Event::Enter(NodeKind::Field),
            Event::Enter(NodeKind::Name),
            Event::Leave(NodeKind::Name),
            Event::Leave(NodeKind::Field),
            Event::Enter(NodeKind::Field),
            Event::Enter(NodeKind::Name),
            Event::Leave(NodeKind::Name),
            Event::Leave(NodeKind::Field),
            Event::Leave(NodeKind::SelectionSet),
            Event::Leave(NodeKind::OperationDefinition),
            Event::Leave(NodeKind::Document),
        ]
    );
}

/// Verify that attached comments are visited as nodes, before the
/// owning node's own children.
#[test]
fn test_attached_comments_visited_before_children() {
    let options = NodeOptions {
        track_locations: false,
        preserve_comments: true,
    };
    let mut field = utils::leaf_field("name", &options);
    field
        .attach_comment(Comment {
            value: Cow::Borrowed(" the user's name"),
            meta: utils::meta(&options),
        })
        .unwrap();
    let document = utils::document(
        vec![Definition::OperationDefinition(utils::query(
            None,
            utils::selection_set(vec![field], &options),
            &options,
        ))],
        &options,
    );

    let mut recorder = Recorder::default();
    visit(
        NodeRef::Document(&document),
        &mut recorder,
        &mut DepthContext::new(),
    );

    let field_enter = recorder
        .events
        .iter()
        .position(|e| *e == Event::Enter(NodeKind::Field))
        .unwrap();
    let comment_enter = recorder
        .events
        .iter()
        .position(|e| *e == Event::Enter(NodeKind::Comment))
        .unwrap();
    let name_enter = recorder
        .events
        .iter()
        .rposition(|e| *e == Event::Enter(NodeKind::Name))
        .unwrap();
    assert!(
        field_enter < comment_enter && comment_enter < name_enter,
        "comment must come after its owner's enter and before its children: {:?}",
        recorder.events
    );
}

// =============================================================================
// Flow control
// =============================================================================

/// Verify that `Skip` from `enter_node` prunes the subtree but still
/// fires `leave_node` for the skipped node and continues with siblings.
#[test]
fn test_skip_prunes_subtree_but_continues() {
    let document = two_field_query_document();
    let mut recorder = Recorder {
        skip_on_enter: Some(NodeKind::SelectionSet),
        ..Recorder::default()
    };

    let outcome = visit(
        NodeRef::Document(&document),
        &mut recorder,
        &mut DepthContext::new(),
    );

    assert_eq!(outcome, VisitOutcome::Completed);
    assert!(
        !recorder
            .events
            .contains(&Event::Enter(NodeKind::Field)),
        "fields under a skipped selection set must not be entered"
    );
    assert!(
        recorder
            .events
            .contains(&Event::Leave(NodeKind::SelectionSet)),
        "a skipped node is still left"
    );
    assert_eq!(
        recorder.events.last(),
        Some(&Event::Leave(NodeKind::Document))
    );
}

/// Verify that `Break` from `enter_node` aborts the whole traversal:
/// no further nodes are entered, no pending `leave_node` hooks fire,
/// and the outcome is `Stopped`.
#[test]
fn test_break_on_enter_aborts_traversal() {
    let document = two_field_query_document();
    let mut recorder = Recorder {
        break_on_enter: Some(NodeKind::Field),
        ..Recorder::default()
    };

    let outcome = visit(
        NodeRef::Document(&document),
        &mut recorder,
        &mut DepthContext::new(),
    );

    assert_eq!(outcome, VisitOutcome::Stopped);
    let field_enters = recorder
        .events
        .iter()
        .filter(|e| **e == Event::Enter(NodeKind::Field))
        .count();
    assert_eq!(field_enters, 1, "the second sibling field must not be entered");
    assert!(!recorder.events.contains(&Event::Leave(NodeKind::Document)));
}

/// Verify that `Break` from `leave_node` also aborts, with outcome
/// `Stopped`.
#[test]
fn test_break_on_leave_aborts_traversal() {
    let document = two_field_query_document();
    let mut recorder = Recorder {
        break_on_leave: Some(NodeKind::Name),
        ..Recorder::default()
    };

    let outcome = visit(
        NodeRef::Document(&document),
        &mut recorder,
        &mut DepthContext::new(),
    );

    assert_eq!(outcome, VisitOutcome::Stopped);
    assert!(!recorder.events.contains(&Event::Enter(NodeKind::SelectionSet)));
}

// =============================================================================
// Cancellation
// =============================================================================

/// Verify that a traversal over an already-cancelled context visits
/// nothing and reports `Cancelled`.
#[test]
fn test_pre_cancelled_context_visits_nothing() {
    let document = two_field_query_document();
    let token = CancellationToken::new();
    token.cancel();

    let mut recorder = Recorder::default();
    let mut ctx = DepthContext::with_cancellation(token);
    let outcome = visit(NodeRef::Document(&document), &mut recorder, &mut ctx);

    assert_eq!(outcome, VisitOutcome::Cancelled);
    assert!(recorder.events.is_empty(), "no node may be entered");
    assert_eq!(ctx.max_depth(), 0);
}

/// A visitor that pulls its own plug upon entering the first field.
struct SelfCancelling {
    token: CancellationToken,
    fields_entered: usize,
}

impl<C: VisitorContext> Visitor<C> for SelfCancelling {
    fn enter_node(&mut self, node: NodeRef<'_, '_>, _ctx: &mut C) -> VisitFlow {
        if node.kind() == NodeKind::Field {
            self.fields_entered += 1;
            self.token.cancel();
        }
        VisitFlow::Next
    }
}

/// Verify that cancellation observed mid-walk stops before the next
/// node, reports `Cancelled`, and retains state accumulated so far.
#[test]
fn test_mid_walk_cancellation_is_checkpointed() {
    let document = two_field_query_document();
    let token = CancellationToken::new();
    let mut visitor = SelfCancelling {
        token: token.clone(),
        fields_entered: 0,
    };

    let mut ctx = DepthContext::with_cancellation(token);
    let outcome = visit(NodeRef::Document(&document), &mut visitor, &mut ctx);

    assert_eq!(outcome, VisitOutcome::Cancelled);
    assert_eq!(
        visitor.fields_entered, 1,
        "the sibling field must not be entered after cancellation"
    );
}

// =============================================================================
// Depth bookkeeping
// =============================================================================

/// Verify that `current_depth` unwinds back to zero however the
/// traversal ends.
#[test]
fn test_depth_unwinds_to_zero() {
    let document = two_field_query_document();

    let mut ctx = DepthContext::new();
    visit(
        NodeRef::Document(&document),
        &mut Recorder::default(),
        &mut ctx,
    );
    assert_eq!(ctx.current_depth(), 0, "completed traversal must unwind");

    let mut ctx = DepthContext::new();
    visit(
        NodeRef::Document(&document),
        &mut Recorder {
            break_on_enter: Some(NodeKind::Field),
            ..Recorder::default()
        },
        &mut ctx,
    );
    assert_eq!(ctx.current_depth(), 0, "aborted traversal must unwind");
}

/// Verify that `enter_node` observes the entered node's own depth, with
/// the root at depth 1.
struct DepthProbe {
    seen: Vec<(NodeKind, usize)>,
}

impl<C: VisitorContext> Visitor<C> for DepthProbe {
    fn enter_node(&mut self, node: NodeRef<'_, '_>, ctx: &mut C) -> VisitFlow {
        self.seen.push((node.kind(), ctx.current_depth()));
        VisitFlow::Next
    }
}

#[test]
fn test_enter_node_sees_own_depth() {
    let document = two_field_query_document();
    let mut probe = DepthProbe { seen: vec![] };
    visit(
        NodeRef::Document(&document),
        &mut probe,
        &mut DepthContext::new(),
    );

    assert_eq!(probe.seen[0], (NodeKind::Document, 1));
    assert!(probe.seen.contains(&(NodeKind::OperationDefinition, 2)));
    assert!(probe.seen.contains(&(NodeKind::SelectionSet, 3)));
    assert!(probe.seen.contains(&(NodeKind::Field, 4)));
    assert!(probe.seen.contains(&(NodeKind::Name, 5)));
}
