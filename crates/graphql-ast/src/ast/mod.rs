//! AST types for representing parsed GraphQL documents.
//!
//! This module provides a zero-copy AST for GraphQL documents. All node
//! types are parameterized over a `'src` lifetime that borrows strings
//! from the source text via [`Cow<'src, str>`].
//!
//! Every node type owns a [`NodeMeta`] carrying the two opt-in
//! cross-cutting concerns (source location and attached comments), whose
//! storage is decided once per document by [`NodeOptions`] at
//! construction time. Nodes are built bottom-up by a parsing collaborator
//! (children fully constructed before their parent) with ordinary struct
//! literals:
//!
//! ```rust
//! use graphql_ast::ast::Name;
//! use graphql_ast::NodeMeta;
//! use graphql_ast::NodeOptions;
//! use graphql_ast::SourceSpan;
//!
//! let options = NodeOptions::none();
//! let name = Name {
//!     value: "hero".into(),
//!     meta: NodeMeta::new(SourceSpan::default(), &options),
//! };
//! assert!(name.location().is_none());
//! ```
//!
//! The structurally-required fields of each node are plain struct fields
//! (never optional), so a malformed tree is unrepresentable. Child
//! sequences preserve document order.
//!
//! [`Cow<'src, str>`]: std::borrow::Cow
//! [`NodeMeta`]: crate::NodeMeta
//! [`NodeOptions`]: crate::NodeOptions

mod arguments;
mod ast_node;
mod comment;
mod directive_location;
mod directives;
mod document;
mod executable_defs;
mod name;
mod node_ref;
mod operation_kind;
mod type_extensions;
mod type_reference;
mod type_system_defs;
mod values;

pub use arguments::Argument;
pub use arguments::Arguments;
pub use ast_node::AstNode;
pub(crate) use ast_node::impl_ast_node;
pub use comment::Comment;
pub use comment::Description;
pub use directive_location::DirectiveLocation;
pub use directives::Directive;
pub use directives::Directives;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::TypeCondition;
pub use executable_defs::Variable;
pub use executable_defs::VariableDefinition;
pub use executable_defs::VariablesDefinition;
pub use name::Alias;
pub use name::FragmentName;
pub use name::Name;
pub use node_ref::NodeRef;
pub use operation_kind::OperationKind;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::SchemaExtension;
pub use type_extensions::UnionTypeExtension;
pub use type_reference::ListType;
pub use type_reference::NamedType;
pub use type_reference::NonNullType;
pub use type_reference::TypeReference;
pub use type_system_defs::ArgumentsDefinition;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::DirectiveLocations;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::EnumValuesDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::FieldsDefinition;
pub use type_system_defs::ImplementsInterfaces;
pub use type_system_defs::InputFieldsDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::UnionMemberTypes;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
