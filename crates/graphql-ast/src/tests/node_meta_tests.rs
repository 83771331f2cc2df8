//! Tests for `NodeOptions`, `NodeMeta`, and the per-node accessors the
//! `AstNode` impls expose.
//!
//! These tests verify:
//! - Which slots `NodeMeta::new` allocates for each option combination
//! - Accessors read `None` for unallocated slots without failing
//! - Mutators report a `ConfigurationError` for unallocated slots
//! - The two concerns are independent of each other

use std::borrow::Cow;

use crate::ast::Comment;
use crate::ConfigurationError;
use crate::NodeKind;
use crate::NodeMeta;
use crate::NodeOptions;
use crate::SourcePosition;
use crate::SourceSpan;

use super::utils;

fn sample_span() -> SourceSpan {
    SourceSpan::new(
        SourcePosition::new(0, 0, 0),
        SourcePosition::new(0, 5, 5),
    )
}

fn sample_comment() -> Comment<'static> {
    Comment {
        value: Cow::Borrowed(" a comment"),
        meta: NodeMeta::new(SourceSpan::default(), &NodeOptions::none()),
    }
}

// =============================================================================
// Slot allocation
// =============================================================================

/// Verify that `NodeOptions::none()` allocates neither slot: both
/// accessors read `None`.
#[test]
fn test_no_options_allocates_nothing() {
    let meta = NodeMeta::new(sample_span(), &NodeOptions::none());
    assert_eq!(meta.location(), None, "location should not be stored");
    assert!(meta.comments().is_none(), "comment slot should not exist");
}

/// Verify that `NodeOptions::all()` stores the span and allocates an
/// empty comment list.
#[test]
fn test_all_options_allocates_both_slots() {
    let meta = NodeMeta::new(sample_span(), &NodeOptions::all());
    assert_eq!(meta.location(), Some(&sample_span()));
    assert_eq!(
        meta.comments(),
        Some(&[][..]),
        "comment slot should exist but start empty"
    );
}

/// Verify that the two concerns are independent: tracking locations does
/// not allocate a comment slot, and vice versa.
#[test]
fn test_options_are_independent() {
    let locations_only = NodeMeta::new(
        sample_span(),
        &NodeOptions {
            track_locations: true,
            preserve_comments: false,
        },
    );
    assert!(locations_only.location().is_some());
    assert!(locations_only.comments().is_none());

    let comments_only = NodeMeta::new(
        sample_span(),
        &NodeOptions {
            track_locations: false,
            preserve_comments: true,
        },
    );
    assert!(comments_only.location().is_none());
    assert!(comments_only.comments().is_some());
}

// =============================================================================
// Mutators
// =============================================================================

/// Verify that `set_location` overwrites the stored span when the slot
/// exists.
#[test]
fn test_set_location_overwrites_tracked_span() {
    let mut meta = NodeMeta::new(SourceSpan::default(), &NodeOptions::all());
    meta.set_location(sample_span()).unwrap();
    assert_eq!(meta.location(), Some(&sample_span()));
}

/// Verify that `set_location` on an untracked node reports
/// `LocationNotTracked` and leaves the slot unallocated.
#[test]
fn test_set_location_untracked_is_an_error() {
    let mut meta = NodeMeta::new(sample_span(), &NodeOptions::none());
    assert_eq!(
        meta.set_location(sample_span()),
        Err(ConfigurationError::LocationNotTracked)
    );
    assert_eq!(meta.location(), None, "failed mutation must not allocate");
}

/// Verify that `attach_comment` appends in order when the slot exists.
#[test]
fn test_attach_comment_appends_in_order() {
    let mut meta = NodeMeta::new(SourceSpan::default(), &NodeOptions::all());
    meta.attach_comment(Comment {
        value: Cow::Borrowed(" first"),
        ..sample_comment()
    })
    .unwrap();
    meta.attach_comment(Comment {
        value: Cow::Borrowed(" second"),
        ..sample_comment()
    })
    .unwrap();

    let comments = meta.comments().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].value, " first");
    assert_eq!(comments[1].value, " second");
}

/// Verify that `attach_comment` on a node without a comment slot reports
/// `CommentsNotPreserved`.
#[test]
fn test_attach_comment_unpreserved_is_an_error() {
    let mut meta = NodeMeta::new(SourceSpan::default(), &NodeOptions::none());
    assert_eq!(
        meta.attach_comment(sample_comment()),
        Err(ConfigurationError::CommentsNotPreserved)
    );
    assert!(meta.comments().is_none());
}

/// Verify the error messages name the missing configuration.
#[test]
fn test_configuration_error_messages() {
    assert_eq!(
        ConfigurationError::LocationNotTracked.to_string(),
        "cannot set location: node was built without location tracking"
    );
    assert_eq!(
        ConfigurationError::CommentsNotPreserved.to_string(),
        "cannot attach comment: node was built without comment preservation"
    );
}

// =============================================================================
// AstNode delegation
// =============================================================================

/// Verify that a node's inherent accessors delegate to its `NodeMeta`
/// and that `kind()` reports the matching `NodeKind`.
#[test]
fn test_node_accessors_delegate_to_meta() {
    let options = NodeOptions::all();
    let mut field = utils::leaf_field("id", &options);

    assert_eq!(field.kind(), NodeKind::Field);
    assert_eq!(field.name.kind(), NodeKind::Name);
    assert_eq!(field.location(), Some(&SourceSpan::default()));

    field.set_location(sample_span()).unwrap();
    assert_eq!(field.location(), Some(&sample_span()));

    field.attach_comment(sample_comment()).unwrap();
    assert_eq!(field.comments().map(<[_]>::len), Some(1));
}

/// Verify that a node built without the optional concerns still answers
/// every read accessor, with `None`.
#[test]
fn test_bare_node_reads_none_everywhere() {
    let field = utils::leaf_field("id", &NodeOptions::none());
    assert_eq!(field.location(), None);
    assert!(field.comments().is_none());
}
