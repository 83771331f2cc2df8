use crate::ast::Comment;
use crate::ConfigurationError;
use crate::SourceSpan;
use smallvec::SmallVec;

/// Document-wide node construction options.
///
/// Decided once, at the start of parsing, and applied uniformly to every
/// node built for that document. Both concerns are independent and off by
/// default, so a caller that needs neither pays for neither.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NodeOptions {
    /// Store the source span of every node.
    pub track_locations: bool,

    /// Allocate a comment slot on every node so that comment tokens can be
    /// attached to the node that follows them in source.
    pub preserve_comments: bool,
}

impl NodeOptions {
    /// Neither locations nor comments are stored. Equivalent to
    /// `NodeOptions::default()`.
    pub fn none() -> Self {
        Self::default()
    }

    /// Both locations and comments are stored.
    pub fn all() -> Self {
        Self {
            track_locations: true,
            preserve_comments: true,
        }
    }
}

/// Per-node storage for the two opt-in cross-cutting concerns: source
/// location and attached comments.
///
/// Every node type owns a `NodeMeta`. Both slots are boxed so a node built
/// with a concern disabled pays one pointer of overhead for it, nothing
/// more. Which slots exist is fixed at construction from the document's
/// [`NodeOptions`]; the slot *contents* may be mutated by later passes
/// (comment attachment happens after node creation, once trailing comments
/// are known).
///
/// Accessors never fail: probing a slot that was never allocated reads as
/// `None`. Mutating such a slot is a [`ConfigurationError`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeMeta<'src> {
    location: Option<Box<SourceSpan>>,
    comments: Option<Box<SmallVec<[Comment<'src>; 2]>>>,
}

impl<'src> NodeMeta<'src> {
    /// Builds the minimal storage satisfying `options`.
    ///
    /// The span is stored only when `options.track_locations` is set; the
    /// comment slot is allocated (empty) only when
    /// `options.preserve_comments` is set. Never fails.
    pub fn new(span: SourceSpan, options: &NodeOptions) -> Self {
        Self {
            location: options.track_locations.then(|| Box::new(span)),
            comments: options
                .preserve_comments
                .then(|| Box::new(SmallVec::new())),
        }
    }

    /// The node's source span, or `None` if the document was built without
    /// location tracking.
    pub fn location(&self) -> Option<&SourceSpan> {
        self.location.as_deref()
    }

    /// The comments immediately preceding this node in source, in document
    /// order. `None` if the document was built without comment
    /// preservation.
    pub fn comments(&self) -> Option<&[Comment<'src>]> {
        self.comments.as_ref().map(|list| list.as_slice())
    }

    /// Overwrites the node's source span.
    ///
    /// Errors if the node was built with `track_locations: false`.
    pub fn set_location(&mut self, span: SourceSpan) -> Result<(), ConfigurationError> {
        match &mut self.location {
            Some(slot) => {
                **slot = span;
                Ok(())
            },
            None => Err(ConfigurationError::LocationNotTracked),
        }
    }

    /// Appends a comment to the node's comment list.
    ///
    /// Errors if the node was built with `preserve_comments: false`.
    pub fn attach_comment(&mut self, comment: Comment<'src>) -> Result<(), ConfigurationError> {
        match &mut self.comments {
            Some(list) => {
                list.push(comment);
                Ok(())
            },
            None => Err(ConfigurationError::CommentsNotPreserved),
        }
    }
}
