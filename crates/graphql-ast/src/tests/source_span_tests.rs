//! Tests for the `SourceSpan` struct.
//!
//! These tests verify:
//! - `byte_range`/`len`/`is_empty` agree on well-formed spans
//! - An inverted span reads as empty instead of panicking

use crate::SourcePosition;
use crate::SourceSpan;

fn pos(line: usize, column: usize, byte_offset: usize) -> SourcePosition {
    SourcePosition::new(line, column, byte_offset)
}

/// Verify that a span over bytes `[3, 10)` reports its range, length,
/// and non-emptiness consistently.
#[test]
fn test_well_formed_span_accessors_agree() {
    let span = SourceSpan::new(pos(0, 3, 3), pos(0, 10, 10));
    assert_eq!(span.byte_range(), 3..10);
    assert_eq!(span.len(), 7);
    assert!(!span.is_empty());
}

/// Verify that a zero-width span (a position) is empty.
#[test]
fn test_zero_width_span_is_empty() {
    let span = SourceSpan::new(pos(2, 0, 14), pos(2, 0, 14));
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
}

/// Verify that a span whose end precedes its start reads as empty
/// rather than underflowing.
#[test]
fn test_inverted_span_reads_as_empty() {
    let span = SourceSpan::new(pos(0, 10, 10), pos(0, 3, 3));
    assert_eq!(span.len(), 0, "length must saturate, not underflow");
    assert!(span.is_empty());
}
