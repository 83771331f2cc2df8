//! Free `walk_*` functions: the default recursion behind each per-kind
//! [`Visitor`] hook.
//!
//! Each function visits the node's structurally-required children in
//! grammar order, threading every child entry through the engine's
//! per-node checkpoint (cancellation poll, depth bookkeeping, generic
//! hooks). A hook override calls its `walk_*` to resume the default
//! recursion; leaf kinds' walks are no-ops.

use crate::ast::*;
use crate::visitor::visit_node;
use crate::visitor::VisitFlow;
use crate::visitor::Visitor;
use crate::visitor::VisitorContext;

/// Propagates `Break` out of the enclosing walk.
macro_rules! try_flow {
    ($flow:expr) => {
        if let VisitFlow::Break = $flow {
            return VisitFlow::Break;
        }
    };
}

// =========================================================
// Dispatch helpers for non-node sum types
// =========================================================

/// Routes a [`Definition`] to the visit of the node it carries.
pub fn visit_definition<C, V>(
    visitor: &mut V,
    definition: &Definition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    match definition {
        Definition::OperationDefinition(n) => {
            visit_node(visitor, NodeRef::OperationDefinition(n), ctx)
        },
        Definition::FragmentDefinition(n) => {
            visit_node(visitor, NodeRef::FragmentDefinition(n), ctx)
        },
        Definition::SchemaDefinition(n) => visit_node(visitor, NodeRef::SchemaDefinition(n), ctx),
        Definition::ScalarTypeDefinition(n) => {
            visit_node(visitor, NodeRef::ScalarTypeDefinition(n), ctx)
        },
        Definition::ObjectTypeDefinition(n) => {
            visit_node(visitor, NodeRef::ObjectTypeDefinition(n), ctx)
        },
        Definition::InterfaceTypeDefinition(n) => {
            visit_node(visitor, NodeRef::InterfaceTypeDefinition(n), ctx)
        },
        Definition::UnionTypeDefinition(n) => {
            visit_node(visitor, NodeRef::UnionTypeDefinition(n), ctx)
        },
        Definition::EnumTypeDefinition(n) => {
            visit_node(visitor, NodeRef::EnumTypeDefinition(n), ctx)
        },
        Definition::InputObjectTypeDefinition(n) => {
            visit_node(visitor, NodeRef::InputObjectTypeDefinition(n), ctx)
        },
        Definition::DirectiveDefinition(n) => {
            visit_node(visitor, NodeRef::DirectiveDefinition(n), ctx)
        },
        Definition::SchemaExtension(n) => visit_node(visitor, NodeRef::SchemaExtension(n), ctx),
        Definition::ScalarTypeExtension(n) => {
            visit_node(visitor, NodeRef::ScalarTypeExtension(n), ctx)
        },
        Definition::ObjectTypeExtension(n) => {
            visit_node(visitor, NodeRef::ObjectTypeExtension(n), ctx)
        },
        Definition::InterfaceTypeExtension(n) => {
            visit_node(visitor, NodeRef::InterfaceTypeExtension(n), ctx)
        },
        Definition::UnionTypeExtension(n) => {
            visit_node(visitor, NodeRef::UnionTypeExtension(n), ctx)
        },
        Definition::EnumTypeExtension(n) => visit_node(visitor, NodeRef::EnumTypeExtension(n), ctx),
        Definition::InputObjectTypeExtension(n) => {
            visit_node(visitor, NodeRef::InputObjectTypeExtension(n), ctx)
        },
    }
}

/// Routes a [`Selection`] to the visit of the node it carries.
pub fn visit_selection<C, V>(visitor: &mut V, selection: &Selection<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    match selection {
        Selection::Field(n) => visit_node(visitor, NodeRef::Field(n), ctx),
        Selection::FragmentSpread(n) => visit_node(visitor, NodeRef::FragmentSpread(n), ctx),
        Selection::InlineFragment(n) => visit_node(visitor, NodeRef::InlineFragment(n), ctx),
    }
}

/// Routes a [`Value`] to the visit of the node it carries.
pub fn visit_value<C, V>(visitor: &mut V, value: &Value<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    match value {
        Value::Int(n) => visit_node(visitor, NodeRef::IntValue(n), ctx),
        Value::Float(n) => visit_node(visitor, NodeRef::FloatValue(n), ctx),
        Value::String(n) => visit_node(visitor, NodeRef::StringValue(n), ctx),
        Value::Boolean(n) => visit_node(visitor, NodeRef::BooleanValue(n), ctx),
        Value::Null(n) => visit_node(visitor, NodeRef::NullValue(n), ctx),
        Value::Enum(n) => visit_node(visitor, NodeRef::EnumValue(n), ctx),
        Value::List(n) => visit_node(visitor, NodeRef::ListValue(n), ctx),
        Value::Object(n) => visit_node(visitor, NodeRef::ObjectValue(n), ctx),
        Value::Variable(n) => visit_node(visitor, NodeRef::Variable(n), ctx),
    }
}

/// Routes a [`TypeReference`] to the visit of the node it carries.
pub fn visit_type_reference<C, V>(
    visitor: &mut V,
    type_ref: &TypeReference<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    match type_ref {
        TypeReference::Named(n) => visit_node(visitor, NodeRef::NamedType(n), ctx),
        TypeReference::List(n) => visit_node(visitor, NodeRef::ListType(n), ctx),
        TypeReference::NonNull(n) => visit_node(visitor, NodeRef::NonNullType(n), ctx),
    }
}

// =========================================================
// Document
// =========================================================

pub fn walk_document<C, V>(visitor: &mut V, document: &Document<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for definition in &document.definitions {
        try_flow!(visit_definition(visitor, definition, ctx));
    }
    VisitFlow::Next
}

// =========================================================
// Executable definitions
// =========================================================

pub fn walk_operation_definition<C, V>(
    visitor: &mut V,
    operation: &OperationDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(name) = &operation.name {
        try_flow!(visit_node(visitor, NodeRef::Name(name), ctx));
    }
    if let Some(variable_definitions) = &operation.variable_definitions {
        try_flow!(visit_node(
            visitor,
            NodeRef::VariablesDefinition(variable_definitions),
            ctx,
        ));
    }
    if let Some(directives) = &operation.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    visit_node(visitor, NodeRef::SelectionSet(&operation.selection_set), ctx)
}

pub fn walk_variables_definition<C, V>(
    visitor: &mut V,
    variables: &VariablesDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for item in &variables.items {
        try_flow!(visit_node(visitor, NodeRef::VariableDefinition(item), ctx));
    }
    VisitFlow::Next
}

pub fn walk_variable_definition<C, V>(
    visitor: &mut V,
    variable_definition: &VariableDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(
        visitor,
        NodeRef::Variable(&variable_definition.variable),
        ctx,
    ));
    try_flow!(visit_type_reference(
        visitor,
        &variable_definition.var_type,
        ctx,
    ));
    if let Some(default_value) = &variable_definition.default_value {
        try_flow!(visit_value(visitor, default_value, ctx));
    }
    if let Some(directives) = &variable_definition.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    VisitFlow::Next
}

pub fn walk_variable<C, V>(visitor: &mut V, variable: &Variable<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    visit_node(visitor, NodeRef::Name(&variable.name), ctx)
}

pub fn walk_selection_set<C, V>(
    visitor: &mut V,
    selection_set: &SelectionSet<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for selection in &selection_set.selections {
        try_flow!(visit_selection(visitor, selection, ctx));
    }
    VisitFlow::Next
}

pub fn walk_field<C, V>(visitor: &mut V, field: &Field<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(alias) = &field.alias {
        try_flow!(visit_node(visitor, NodeRef::Alias(alias), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::Name(&field.name), ctx));
    if let Some(arguments) = &field.arguments {
        try_flow!(visit_node(visitor, NodeRef::Arguments(arguments), ctx));
    }
    if let Some(directives) = &field.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(selection_set) = &field.selection_set {
        try_flow!(visit_node(visitor, NodeRef::SelectionSet(selection_set), ctx));
    }
    VisitFlow::Next
}

pub fn walk_alias<C, V>(visitor: &mut V, alias: &Alias<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    visit_node(visitor, NodeRef::Name(&alias.name), ctx)
}

pub fn walk_fragment_spread<C, V>(
    visitor: &mut V,
    spread: &FragmentSpread<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(
        visitor,
        NodeRef::FragmentName(&spread.fragment_name),
        ctx,
    ));
    if let Some(directives) = &spread.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    VisitFlow::Next
}

pub fn walk_inline_fragment<C, V>(
    visitor: &mut V,
    fragment: &InlineFragment<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(type_condition) = &fragment.type_condition {
        try_flow!(visit_node(visitor, NodeRef::TypeCondition(type_condition), ctx));
    }
    if let Some(directives) = &fragment.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    visit_node(visitor, NodeRef::SelectionSet(&fragment.selection_set), ctx)
}

pub fn walk_fragment_definition<C, V>(
    visitor: &mut V,
    fragment: &FragmentDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(
        visitor,
        NodeRef::FragmentName(&fragment.fragment_name),
        ctx,
    ));
    try_flow!(visit_node(
        visitor,
        NodeRef::TypeCondition(&fragment.type_condition),
        ctx,
    ));
    if let Some(directives) = &fragment.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    visit_node(visitor, NodeRef::SelectionSet(&fragment.selection_set), ctx)
}

pub fn walk_fragment_name<C, V>(
    visitor: &mut V,
    fragment_name: &FragmentName<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    visit_node(visitor, NodeRef::Name(&fragment_name.name), ctx)
}

pub fn walk_type_condition<C, V>(
    visitor: &mut V,
    type_condition: &TypeCondition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    visit_node(visitor, NodeRef::NamedType(&type_condition.named_type), ctx)
}

// =========================================================
// Arguments & directives
// =========================================================

pub fn walk_arguments<C, V>(visitor: &mut V, arguments: &Arguments<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for item in &arguments.items {
        try_flow!(visit_node(visitor, NodeRef::Argument(item), ctx));
    }
    VisitFlow::Next
}

pub fn walk_argument<C, V>(visitor: &mut V, argument: &Argument<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(visitor, NodeRef::Name(&argument.name), ctx));
    visit_value(visitor, &argument.value, ctx)
}

pub fn walk_directives<C, V>(visitor: &mut V, directives: &Directives<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for item in &directives.items {
        try_flow!(visit_node(visitor, NodeRef::Directive(item), ctx));
    }
    VisitFlow::Next
}

pub fn walk_directive<C, V>(visitor: &mut V, directive: &Directive<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(visitor, NodeRef::Name(&directive.name), ctx));
    if let Some(arguments) = &directive.arguments {
        try_flow!(visit_node(visitor, NodeRef::Arguments(arguments), ctx));
    }
    VisitFlow::Next
}

// =========================================================
// Values
// =========================================================

pub fn walk_enum_value<C, V>(visitor: &mut V, value: &EnumValue<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    visit_node(visitor, NodeRef::Name(&value.name), ctx)
}

pub fn walk_list_value<C, V>(visitor: &mut V, list: &ListValue<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for value in &list.values {
        try_flow!(visit_value(visitor, value, ctx));
    }
    VisitFlow::Next
}

pub fn walk_object_value<C, V>(visitor: &mut V, object: &ObjectValue<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for field in &object.fields {
        try_flow!(visit_node(visitor, NodeRef::ObjectField(field), ctx));
    }
    VisitFlow::Next
}

pub fn walk_object_field<C, V>(visitor: &mut V, field: &ObjectField<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(visitor, NodeRef::Name(&field.name), ctx));
    visit_value(visitor, &field.value, ctx)
}

// =========================================================
// Type references
// =========================================================

pub fn walk_named_type<C, V>(visitor: &mut V, named_type: &NamedType<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    visit_node(visitor, NodeRef::Name(&named_type.name), ctx)
}

pub fn walk_list_type<C, V>(visitor: &mut V, list_type: &ListType<'_>, ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    visit_type_reference(visitor, &list_type.item_type, ctx)
}

pub fn walk_non_null_type<C, V>(
    visitor: &mut V,
    non_null_type: &NonNullType<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    visit_type_reference(visitor, &non_null_type.inner_type, ctx)
}

// =========================================================
// Type system definitions
// =========================================================

pub fn walk_schema_definition<C, V>(
    visitor: &mut V,
    schema: &SchemaDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &schema.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    if let Some(directives) = &schema.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    for operation_type in &schema.operation_types {
        try_flow!(visit_node(
            visitor,
            NodeRef::RootOperationTypeDefinition(operation_type),
            ctx,
        ));
    }
    VisitFlow::Next
}

pub fn walk_root_operation_type_definition<C, V>(
    visitor: &mut V,
    root_operation: &RootOperationTypeDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    visit_node(visitor, NodeRef::NamedType(&root_operation.named_type), ctx)
}

pub fn walk_scalar_type_definition<C, V>(
    visitor: &mut V,
    scalar: &ScalarTypeDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &scalar.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::Name(&scalar.name), ctx));
    if let Some(directives) = &scalar.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    VisitFlow::Next
}

pub fn walk_object_type_definition<C, V>(
    visitor: &mut V,
    object: &ObjectTypeDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &object.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::Name(&object.name), ctx));
    if let Some(interfaces) = &object.interfaces {
        try_flow!(visit_node(visitor, NodeRef::ImplementsInterfaces(interfaces), ctx));
    }
    if let Some(directives) = &object.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(fields) = &object.fields {
        try_flow!(visit_node(visitor, NodeRef::FieldsDefinition(fields), ctx));
    }
    VisitFlow::Next
}

pub fn walk_interface_type_definition<C, V>(
    visitor: &mut V,
    interface: &InterfaceTypeDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &interface.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::Name(&interface.name), ctx));
    if let Some(interfaces) = &interface.interfaces {
        try_flow!(visit_node(visitor, NodeRef::ImplementsInterfaces(interfaces), ctx));
    }
    if let Some(directives) = &interface.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(fields) = &interface.fields {
        try_flow!(visit_node(visitor, NodeRef::FieldsDefinition(fields), ctx));
    }
    VisitFlow::Next
}

pub fn walk_union_type_definition<C, V>(
    visitor: &mut V,
    union_type: &UnionTypeDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &union_type.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::Name(&union_type.name), ctx));
    if let Some(directives) = &union_type.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(member_types) = &union_type.member_types {
        try_flow!(visit_node(visitor, NodeRef::UnionMemberTypes(member_types), ctx));
    }
    VisitFlow::Next
}

pub fn walk_enum_type_definition<C, V>(
    visitor: &mut V,
    enum_type: &EnumTypeDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &enum_type.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::Name(&enum_type.name), ctx));
    if let Some(directives) = &enum_type.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(values) = &enum_type.values {
        try_flow!(visit_node(visitor, NodeRef::EnumValuesDefinition(values), ctx));
    }
    VisitFlow::Next
}

pub fn walk_input_object_type_definition<C, V>(
    visitor: &mut V,
    input_object: &InputObjectTypeDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &input_object.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::Name(&input_object.name), ctx));
    if let Some(directives) = &input_object.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(fields) = &input_object.fields {
        try_flow!(visit_node(visitor, NodeRef::InputFieldsDefinition(fields), ctx));
    }
    VisitFlow::Next
}

pub fn walk_fields_definition<C, V>(
    visitor: &mut V,
    fields: &FieldsDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for item in &fields.items {
        try_flow!(visit_node(visitor, NodeRef::FieldDefinition(item), ctx));
    }
    VisitFlow::Next
}

pub fn walk_field_definition<C, V>(
    visitor: &mut V,
    field: &FieldDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &field.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::Name(&field.name), ctx));
    if let Some(arguments) = &field.arguments {
        try_flow!(visit_node(visitor, NodeRef::ArgumentsDefinition(arguments), ctx));
    }
    try_flow!(visit_type_reference(visitor, &field.field_type, ctx));
    if let Some(directives) = &field.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    VisitFlow::Next
}

pub fn walk_arguments_definition<C, V>(
    visitor: &mut V,
    arguments: &ArgumentsDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for item in &arguments.items {
        try_flow!(visit_node(visitor, NodeRef::InputValueDefinition(item), ctx));
    }
    VisitFlow::Next
}

pub fn walk_input_fields_definition<C, V>(
    visitor: &mut V,
    fields: &InputFieldsDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for item in &fields.items {
        try_flow!(visit_node(visitor, NodeRef::InputValueDefinition(item), ctx));
    }
    VisitFlow::Next
}

pub fn walk_input_value_definition<C, V>(
    visitor: &mut V,
    input_value: &InputValueDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &input_value.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::Name(&input_value.name), ctx));
    try_flow!(visit_type_reference(visitor, &input_value.value_type, ctx));
    if let Some(default_value) = &input_value.default_value {
        try_flow!(visit_value(visitor, default_value, ctx));
    }
    if let Some(directives) = &input_value.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    VisitFlow::Next
}

pub fn walk_enum_values_definition<C, V>(
    visitor: &mut V,
    values: &EnumValuesDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for item in &values.items {
        try_flow!(visit_node(visitor, NodeRef::EnumValueDefinition(item), ctx));
    }
    VisitFlow::Next
}

pub fn walk_enum_value_definition<C, V>(
    visitor: &mut V,
    value: &EnumValueDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &value.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::EnumValue(&value.enum_value), ctx));
    if let Some(directives) = &value.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    VisitFlow::Next
}

pub fn walk_implements_interfaces<C, V>(
    visitor: &mut V,
    interfaces: &ImplementsInterfaces<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for item in &interfaces.items {
        try_flow!(visit_node(visitor, NodeRef::NamedType(item), ctx));
    }
    VisitFlow::Next
}

pub fn walk_union_member_types<C, V>(
    visitor: &mut V,
    members: &UnionMemberTypes<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    for item in &members.items {
        try_flow!(visit_node(visitor, NodeRef::NamedType(item), ctx));
    }
    VisitFlow::Next
}

pub fn walk_directive_definition<C, V>(
    visitor: &mut V,
    directive: &DirectiveDefinition<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(description) = &directive.description {
        try_flow!(visit_node(visitor, NodeRef::Description(description), ctx));
    }
    try_flow!(visit_node(visitor, NodeRef::Name(&directive.name), ctx));
    if let Some(arguments) = &directive.arguments {
        try_flow!(visit_node(visitor, NodeRef::ArgumentsDefinition(arguments), ctx));
    }
    visit_node(visitor, NodeRef::DirectiveLocations(&directive.locations), ctx)
}

// =========================================================
// Type system extensions
// =========================================================

pub fn walk_schema_extension<C, V>(
    visitor: &mut V,
    schema: &SchemaExtension<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    if let Some(directives) = &schema.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    for operation_type in &schema.operation_types {
        try_flow!(visit_node(
            visitor,
            NodeRef::RootOperationTypeDefinition(operation_type),
            ctx,
        ));
    }
    VisitFlow::Next
}

pub fn walk_scalar_type_extension<C, V>(
    visitor: &mut V,
    scalar: &ScalarTypeExtension<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(visitor, NodeRef::Name(&scalar.name), ctx));
    if let Some(directives) = &scalar.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    VisitFlow::Next
}

pub fn walk_object_type_extension<C, V>(
    visitor: &mut V,
    object: &ObjectTypeExtension<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(visitor, NodeRef::Name(&object.name), ctx));
    if let Some(interfaces) = &object.interfaces {
        try_flow!(visit_node(visitor, NodeRef::ImplementsInterfaces(interfaces), ctx));
    }
    if let Some(directives) = &object.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(fields) = &object.fields {
        try_flow!(visit_node(visitor, NodeRef::FieldsDefinition(fields), ctx));
    }
    VisitFlow::Next
}

pub fn walk_interface_type_extension<C, V>(
    visitor: &mut V,
    interface: &InterfaceTypeExtension<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(visitor, NodeRef::Name(&interface.name), ctx));
    if let Some(interfaces) = &interface.interfaces {
        try_flow!(visit_node(visitor, NodeRef::ImplementsInterfaces(interfaces), ctx));
    }
    if let Some(directives) = &interface.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(fields) = &interface.fields {
        try_flow!(visit_node(visitor, NodeRef::FieldsDefinition(fields), ctx));
    }
    VisitFlow::Next
}

pub fn walk_union_type_extension<C, V>(
    visitor: &mut V,
    union_type: &UnionTypeExtension<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(visitor, NodeRef::Name(&union_type.name), ctx));
    if let Some(directives) = &union_type.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(member_types) = &union_type.member_types {
        try_flow!(visit_node(visitor, NodeRef::UnionMemberTypes(member_types), ctx));
    }
    VisitFlow::Next
}

pub fn walk_enum_type_extension<C, V>(
    visitor: &mut V,
    enum_type: &EnumTypeExtension<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(visitor, NodeRef::Name(&enum_type.name), ctx));
    if let Some(directives) = &enum_type.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(values) = &enum_type.values {
        try_flow!(visit_node(visitor, NodeRef::EnumValuesDefinition(values), ctx));
    }
    VisitFlow::Next
}

pub fn walk_input_object_type_extension<C, V>(
    visitor: &mut V,
    input_object: &InputObjectTypeExtension<'_>,
    ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    try_flow!(visit_node(visitor, NodeRef::Name(&input_object.name), ctx));
    if let Some(directives) = &input_object.directives {
        try_flow!(visit_node(visitor, NodeRef::Directives(directives), ctx));
    }
    if let Some(fields) = &input_object.fields {
        try_flow!(visit_node(visitor, NodeRef::InputFieldsDefinition(fields), ctx));
    }
    VisitFlow::Next
}

// =========================================================
// Leaf kinds
// =========================================================

pub fn walk_name<C, V>(_visitor: &mut V, _name: &Name<'_>, _ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    VisitFlow::Next
}

pub fn walk_comment<C, V>(_visitor: &mut V, _comment: &Comment<'_>, _ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    VisitFlow::Next
}

pub fn walk_description<C, V>(
    _visitor: &mut V,
    _description: &Description<'_>,
    _ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    VisitFlow::Next
}

pub fn walk_int_value<C, V>(_visitor: &mut V, _value: &IntValue<'_>, _ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    VisitFlow::Next
}

pub fn walk_float_value<C, V>(_visitor: &mut V, _value: &FloatValue<'_>, _ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    VisitFlow::Next
}

pub fn walk_string_value<C, V>(
    _visitor: &mut V,
    _value: &StringValue<'_>,
    _ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    VisitFlow::Next
}

pub fn walk_boolean_value<C, V>(
    _visitor: &mut V,
    _value: &BooleanValue<'_>,
    _ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    VisitFlow::Next
}

pub fn walk_null_value<C, V>(_visitor: &mut V, _value: &NullValue<'_>, _ctx: &mut C) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    VisitFlow::Next
}

pub fn walk_directive_locations<C, V>(
    _visitor: &mut V,
    _locations: &DirectiveLocations<'_>,
    _ctx: &mut C,
) -> VisitFlow
where
    C: VisitorContext,
    V: Visitor<C> + ?Sized,
{
    VisitFlow::Next
}
