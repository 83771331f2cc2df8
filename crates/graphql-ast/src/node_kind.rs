/// The closed set of AST node kinds.
///
/// Every concrete node type maps to exactly one `NodeKind`, and a node's
/// kind never changes after construction. Generic tooling (visitors, error
/// formatters, structure printers) uses the kind as the dispatch
/// discriminant instead of inspecting concrete types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum NodeKind {
    Alias,
    Argument,
    Arguments,
    ArgumentsDefinition,
    BooleanValue,
    Comment,
    Description,
    Directive,
    DirectiveDefinition,
    DirectiveLocations,
    Directives,
    Document,
    EnumTypeDefinition,
    EnumTypeExtension,
    EnumValue,
    EnumValueDefinition,
    EnumValuesDefinition,
    Field,
    FieldDefinition,
    FieldsDefinition,
    FloatValue,
    FragmentDefinition,
    FragmentName,
    FragmentSpread,
    ImplementsInterfaces,
    InlineFragment,
    InputFieldsDefinition,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    InputValueDefinition,
    IntValue,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    ListType,
    ListValue,
    Name,
    NamedType,
    NonNullType,
    NullValue,
    ObjectField,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    ObjectValue,
    OperationDefinition,
    RootOperationTypeDefinition,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    SchemaDefinition,
    SchemaExtension,
    SelectionSet,
    StringValue,
    TypeCondition,
    UnionMemberTypes,
    UnionTypeDefinition,
    UnionTypeExtension,
    Variable,
    VariableDefinition,
    VariablesDefinition,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
