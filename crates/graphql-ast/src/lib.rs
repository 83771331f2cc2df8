//! A GraphQL AST node model covering executable documents, schema
//! documents, and documents that mix both together, plus a generic
//! cancellable traversal framework over it.
//!
//! The tree borrows from its source text where one exists
//! ([`std::borrow::Cow`] throughout), while per-node location and
//! comment storage is opt-in via [`NodeOptions`] so trees built without
//! them pay a single `None` slot per concern. Analyses are written
//! against the [`visitor`] framework; [`visitor::max_nested_depth`] is
//! the bundled example.

pub mod ast;
mod configuration_error;
mod node_kind;
mod node_meta;
mod source_position;
mod source_span;
pub mod visitor;

pub use configuration_error::ConfigurationError;
pub use node_kind::NodeKind;
pub use node_meta::NodeMeta;
pub use node_meta::NodeOptions;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use source_span::SourceSpan;

#[cfg(test)]
mod tests;
