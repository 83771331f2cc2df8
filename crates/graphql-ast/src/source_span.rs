use crate::SourcePosition;
use std::ops::Range;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl SourceSpan {
    /// Creates a span from a start (inclusive) and end (exclusive) position.
    ///
    /// Callers are expected to supply `start <= end`; the accessors below
    /// treat an inverted span as empty rather than panicking.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// The byte range `[start, end)` covered by this span, suitable for
    /// slicing directly into the source text.
    pub fn byte_range(&self) -> Range<usize> {
        self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset()
    }

    /// Returns the length of this span in bytes. An inverted span reads
    /// as length zero.
    pub fn len(&self) -> usize {
        self.end_exclusive
            .byte_offset()
            .saturating_sub(self.start_inclusive.byte_offset())
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
