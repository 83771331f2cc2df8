//! Tests for the maximum-nesting-depth analysis.
//!
//! Depth counts every node uniformly with the document at depth 1, so
//! even a bare `{a}` reaches 5: document, operation, selection set,
//! field, name.

use std::borrow::Cow;

use proptest::prelude::*;

use crate::ast::Comment;
use crate::ast::Definition;
use crate::visitor::max_nested_depth;
use crate::NodeOptions;

use super::utils;

// =============================================================================
// Executable documents
// =============================================================================

/// `query a { name age }`: the fields are siblings, so the deepest
/// chain is document > operation > selection set > field > name.
#[test]
fn test_depth_of_flat_named_query() {
    let options = NodeOptions::none();
    let set = utils::selection_set(
        vec![
            utils::leaf_field("name", &options),
            utils::leaf_field("age", &options),
        ],
        &options,
    );
    let document = utils::document(
        vec![Definition::OperationDefinition(utils::query(
            Some("a"),
            set,
            &options,
        ))],
        &options,
    );
    assert_eq!(max_nested_depth(&document), 5);
}

/// `{a}`: an anonymous operation is no shallower, its name is simply
/// absent.
#[test]
fn test_depth_of_minimal_anonymous_query() {
    let document = utils::nested_query_document(1, &NodeOptions::none());
    assert_eq!(max_nested_depth(&document), 5);
}

/// `{ a { b { c } d { e { f } } g { h { i { k } } } } }`: the deepest
/// branch is a > g > h > i > k, each field adding a selection-set level
/// on the way down.
#[test]
fn test_depth_follows_the_deepest_branch() {
    let options = NodeOptions::none();
    let inner = utils::selection_set(
        vec![
            utils::nested_field(
                "b",
                utils::selection_set(vec![utils::leaf_field("c", &options)], &options),
                &options,
            ),
            utils::nested_field(
                "d",
                utils::selection_set(
                    vec![utils::nested_field(
                        "e",
                        utils::selection_set(vec![utils::leaf_field("f", &options)], &options),
                        &options,
                    )],
                    &options,
                ),
                &options,
            ),
            utils::nested_field(
                "g",
                utils::selection_set(
                    vec![utils::nested_field(
                        "h",
                        utils::selection_set(
                            vec![utils::nested_field(
                                "i",
                                utils::selection_set(
                                    vec![utils::leaf_field("k", &options)],
                                    &options,
                                ),
                                &options,
                            )],
                            &options,
                        ),
                        &options,
                    )],
                    &options,
                ),
                &options,
            ),
        ],
        &options,
    );
    let document = utils::document(
        vec![Definition::OperationDefinition(utils::query(
            None,
            utils::selection_set(vec![utils::nested_field("a", inner, &options)], &options),
            &options,
        ))],
        &options,
    );
    assert_eq!(max_nested_depth(&document), 13);
}

// =============================================================================
// Schema documents
// =============================================================================

/// `scalar Test`: document > scalar definition > name.
#[test]
fn test_depth_of_bare_scalar_definition() {
    let options = NodeOptions::none();
    let document = utils::document(
        vec![Definition::ScalarTypeDefinition(utils::scalar_def(
            "Test", None, &options,
        ))],
        &options,
    );
    assert_eq!(max_nested_depth(&document), 3);
}

/// `scalar JSON @exportable`: the directive list and the directive each
/// add a level, so the directive's name ends up at depth 5.
#[test]
fn test_depth_counts_directive_list_levels() {
    let options = NodeOptions::none();
    let document = utils::document(
        vec![Definition::ScalarTypeDefinition(utils::scalar_def(
            "JSON",
            Some(utils::directives(&["exportable"], &options)),
            &options,
        ))],
        &options,
    );
    assert_eq!(max_nested_depth(&document), 5);
}

// =============================================================================
// Edge cases
// =============================================================================

/// An empty document still counts itself.
#[test]
fn test_depth_of_empty_document() {
    let document = utils::document(vec![], &NodeOptions::none());
    assert_eq!(max_nested_depth(&document), 1);
}

/// Attached comments are nodes too: one hanging off a depth-3 name
/// pushes the maximum to 4.
#[test]
fn test_depth_counts_attached_comments() {
    let options = NodeOptions {
        track_locations: false,
        preserve_comments: true,
    };
    let mut scalar = utils::scalar_def("Test", None, &options);
    scalar
        .name
        .attach_comment(Comment {
            value: Cow::Borrowed(" custom scalar"),
            meta: utils::meta(&options),
        })
        .unwrap();
    let document = utils::document(
        vec![Definition::ScalarTypeDefinition(scalar)],
        &options,
    );
    assert_eq!(max_nested_depth(&document), 4);
}

proptest! {
    /// Each extra level of field nesting adds exactly two to the
    /// maximum depth (the field and its selection set), on top of the
    /// three fixed levels above the first field.
    #[test]
    fn test_depth_grows_two_per_nesting_level(levels in 1usize..32) {
        let document = utils::nested_query_document(levels, &NodeOptions::none());
        prop_assert_eq!(max_nested_depth(&document), 2 * levels + 3);
    }
}
