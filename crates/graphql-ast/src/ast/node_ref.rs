use crate::ast::*;
use crate::NodeKind;
use crate::SourceSpan;

/// A borrowed reference to any AST node.
///
/// This is the uniform node abstraction the visitor framework traverses:
/// a closed sum over every node kind, carrying a shared reference to the
/// concrete node. Being two pointers wide it is `Copy` and cheap to pass
/// around.
///
/// The common node contract ([`kind`](NodeRef::kind),
/// [`location`](NodeRef::location), [`comments`](NodeRef::comments)) is
/// available without matching on the concrete variant.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a, 'src> {
    Alias(&'a Alias<'src>),
    Argument(&'a Argument<'src>),
    Arguments(&'a Arguments<'src>),
    ArgumentsDefinition(&'a ArgumentsDefinition<'src>),
    BooleanValue(&'a BooleanValue<'src>),
    Comment(&'a Comment<'src>),
    Description(&'a Description<'src>),
    Directive(&'a Directive<'src>),
    DirectiveDefinition(&'a DirectiveDefinition<'src>),
    DirectiveLocations(&'a DirectiveLocations<'src>),
    Directives(&'a Directives<'src>),
    Document(&'a Document<'src>),
    EnumTypeDefinition(&'a EnumTypeDefinition<'src>),
    EnumTypeExtension(&'a EnumTypeExtension<'src>),
    EnumValue(&'a EnumValue<'src>),
    EnumValueDefinition(&'a EnumValueDefinition<'src>),
    EnumValuesDefinition(&'a EnumValuesDefinition<'src>),
    Field(&'a Field<'src>),
    FieldDefinition(&'a FieldDefinition<'src>),
    FieldsDefinition(&'a FieldsDefinition<'src>),
    FloatValue(&'a FloatValue<'src>),
    FragmentDefinition(&'a FragmentDefinition<'src>),
    FragmentName(&'a FragmentName<'src>),
    FragmentSpread(&'a FragmentSpread<'src>),
    ImplementsInterfaces(&'a ImplementsInterfaces<'src>),
    InlineFragment(&'a InlineFragment<'src>),
    InputFieldsDefinition(&'a InputFieldsDefinition<'src>),
    InputObjectTypeDefinition(&'a InputObjectTypeDefinition<'src>),
    InputObjectTypeExtension(&'a InputObjectTypeExtension<'src>),
    InputValueDefinition(&'a InputValueDefinition<'src>),
    IntValue(&'a IntValue<'src>),
    InterfaceTypeDefinition(&'a InterfaceTypeDefinition<'src>),
    InterfaceTypeExtension(&'a InterfaceTypeExtension<'src>),
    ListType(&'a ListType<'src>),
    ListValue(&'a ListValue<'src>),
    Name(&'a Name<'src>),
    NamedType(&'a NamedType<'src>),
    NonNullType(&'a NonNullType<'src>),
    NullValue(&'a NullValue<'src>),
    ObjectField(&'a ObjectField<'src>),
    ObjectTypeDefinition(&'a ObjectTypeDefinition<'src>),
    ObjectTypeExtension(&'a ObjectTypeExtension<'src>),
    ObjectValue(&'a ObjectValue<'src>),
    OperationDefinition(&'a OperationDefinition<'src>),
    RootOperationTypeDefinition(&'a RootOperationTypeDefinition<'src>),
    ScalarTypeDefinition(&'a ScalarTypeDefinition<'src>),
    ScalarTypeExtension(&'a ScalarTypeExtension<'src>),
    SchemaDefinition(&'a SchemaDefinition<'src>),
    SchemaExtension(&'a SchemaExtension<'src>),
    SelectionSet(&'a SelectionSet<'src>),
    StringValue(&'a StringValue<'src>),
    TypeCondition(&'a TypeCondition<'src>),
    UnionMemberTypes(&'a UnionMemberTypes<'src>),
    UnionTypeDefinition(&'a UnionTypeDefinition<'src>),
    UnionTypeExtension(&'a UnionTypeExtension<'src>),
    Variable(&'a Variable<'src>),
    VariableDefinition(&'a VariableDefinition<'src>),
    VariablesDefinition(&'a VariablesDefinition<'src>),
}

/// Expands `$body` once per [`NodeRef`] variant, with `$node` bound to the
/// inner `&'a` node reference.
macro_rules! with_node_ref {
    ($value:expr, $node:ident => $body:expr) => {
        match $value {
            NodeRef::Alias($node) => $body,
            NodeRef::Argument($node) => $body,
            NodeRef::Arguments($node) => $body,
            NodeRef::ArgumentsDefinition($node) => $body,
            NodeRef::BooleanValue($node) => $body,
            NodeRef::Comment($node) => $body,
            NodeRef::Description($node) => $body,
            NodeRef::Directive($node) => $body,
            NodeRef::DirectiveDefinition($node) => $body,
            NodeRef::DirectiveLocations($node) => $body,
            NodeRef::Directives($node) => $body,
            NodeRef::Document($node) => $body,
            NodeRef::EnumTypeDefinition($node) => $body,
            NodeRef::EnumTypeExtension($node) => $body,
            NodeRef::EnumValue($node) => $body,
            NodeRef::EnumValueDefinition($node) => $body,
            NodeRef::EnumValuesDefinition($node) => $body,
            NodeRef::Field($node) => $body,
            NodeRef::FieldDefinition($node) => $body,
            NodeRef::FieldsDefinition($node) => $body,
            NodeRef::FloatValue($node) => $body,
            NodeRef::FragmentDefinition($node) => $body,
            NodeRef::FragmentName($node) => $body,
            NodeRef::FragmentSpread($node) => $body,
            NodeRef::ImplementsInterfaces($node) => $body,
            NodeRef::InlineFragment($node) => $body,
            NodeRef::InputFieldsDefinition($node) => $body,
            NodeRef::InputObjectTypeDefinition($node) => $body,
            NodeRef::InputObjectTypeExtension($node) => $body,
            NodeRef::InputValueDefinition($node) => $body,
            NodeRef::IntValue($node) => $body,
            NodeRef::InterfaceTypeDefinition($node) => $body,
            NodeRef::InterfaceTypeExtension($node) => $body,
            NodeRef::ListType($node) => $body,
            NodeRef::ListValue($node) => $body,
            NodeRef::Name($node) => $body,
            NodeRef::NamedType($node) => $body,
            NodeRef::NonNullType($node) => $body,
            NodeRef::NullValue($node) => $body,
            NodeRef::ObjectField($node) => $body,
            NodeRef::ObjectTypeDefinition($node) => $body,
            NodeRef::ObjectTypeExtension($node) => $body,
            NodeRef::ObjectValue($node) => $body,
            NodeRef::OperationDefinition($node) => $body,
            NodeRef::RootOperationTypeDefinition($node) => $body,
            NodeRef::ScalarTypeDefinition($node) => $body,
            NodeRef::ScalarTypeExtension($node) => $body,
            NodeRef::SchemaDefinition($node) => $body,
            NodeRef::SchemaExtension($node) => $body,
            NodeRef::SelectionSet($node) => $body,
            NodeRef::StringValue($node) => $body,
            NodeRef::TypeCondition($node) => $body,
            NodeRef::UnionMemberTypes($node) => $body,
            NodeRef::UnionTypeDefinition($node) => $body,
            NodeRef::UnionTypeExtension($node) => $body,
            NodeRef::Variable($node) => $body,
            NodeRef::VariableDefinition($node) => $body,
            NodeRef::VariablesDefinition($node) => $body,
        }
    };
}

impl<'a, 'src> NodeRef<'a, 'src> {
    /// The kind discriminant of the referenced node.
    pub fn kind(&self) -> NodeKind {
        with_node_ref!(*self, node => node.kind())
    }

    /// The referenced node's source span, if the document tracks
    /// locations.
    pub fn location(&self) -> Option<&'a SourceSpan> {
        with_node_ref!(*self, node => node.location())
    }

    /// The comments preceding the referenced node, if the document
    /// preserves comments.
    pub fn comments(&self) -> Option<&'a [Comment<'src>]> {
        with_node_ref!(*self, node => node.comments())
    }
}
