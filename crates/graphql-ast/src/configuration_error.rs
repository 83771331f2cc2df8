/// Error raised when a mutation is requested that the node's storage
/// configuration cannot satisfy.
///
/// Location and comment storage are opt-in per document (see
/// [`NodeOptions`](crate::NodeOptions)); a node built without a slot for
/// one of them cannot have that field attached later. The data is never
/// silently dropped.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// A location was supplied to a node built with
    /// `track_locations: false`.
    #[error("cannot set location: node was built without location tracking")]
    LocationNotTracked,

    /// A comment was attached to a node built with
    /// `preserve_comments: false`.
    #[error("cannot attach comment: node was built without comment preservation")]
    CommentsNotPreserved,
}
