/// A position within a source document.
///
/// This is a pure data struct with no mutation methods. The constructing
/// collaborator (a lexer/parser) is responsible for computing position
/// values as it scans input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `column`: UTF-8 character count within the current line (0-based).
///   Increments by 1 for each character regardless of its byte
///   representation, matching what most text editors display as "column".
/// - `byte_offset`: byte offset within the whole document (0-based)
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// UTF-8 character count within current line (0-based)
    column: usize,

    /// Byte offset from start of document (0-based: first byte is 0)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new `SourcePosition`.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `column`: 0-based UTF-8 character count within the current line
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    ///
    /// This increments by 1 for each character regardless of byte
    /// representation. For example, both 'a' (1 byte) and '🎉' (4 bytes)
    /// each add 1 to this count.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
