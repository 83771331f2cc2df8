use crate::ast::ast_node::impl_ast_node;
use crate::ast::Alias;
use crate::ast::Arguments;
use crate::ast::Directives;
use crate::ast::FragmentName;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationKind;
use crate::ast::TypeReference;
use crate::ast::Value;
use crate::NodeMeta;

// =========================================================
// Operations
// =========================================================

/// An operation definition: a query, mutation, or subscription, in either
/// full or shorthand (`{ ... }`) form.
///
/// Shorthand operations have `operation == OperationKind::Query`, no name, no
/// variable definitions, and no directives.
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub operation: OperationKind,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Option<VariablesDefinition<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub meta: NodeMeta<'src>,
}

/// The parenthesized list of variable definitions on an operation:
/// `($id: ID!, $first: Int = 10)`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariablesDefinition<'src> {
    pub items: Vec<VariableDefinition<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A single variable definition: `$id: ID! = "0" @directive`.
///
/// See
/// [Variables](https://spec.graphql.org/September2025/#sec-Language.Variables)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub variable: Variable<'src>,
    pub var_type: TypeReference<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Option<Directives<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A variable: `$name`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'src> {
    pub name: Name<'src>,
    pub meta: NodeMeta<'src>,
}

// =========================================================
// Selections
// =========================================================

/// A selection set — the fields and fragments selected within braces
/// `{ ... }`.
///
/// Selections preserve document order; order is semantically significant
/// and round-trips through printing.
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub meta: NodeMeta<'src>,
}

/// A single selection within a selection set. Dispatch enum, not a node.
///
/// See
/// [Selections](https://spec.graphql.org/September2025/#Selection)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

/// A field selection within a selection set, optionally aliased, with
/// arguments, directives, and a nested selection set.
///
/// See
/// [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Alias<'src>>,
    pub name: Name<'src>,
    pub arguments: Option<Arguments<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub meta: NodeMeta<'src>,
}

impl<'src> Field<'src> {
    /// The key under which this field appears in a response: the alias
    /// name when aliased, the field name otherwise.
    ///
    /// See
    /// [Response Key](https://spec.graphql.org/September2025/#sec-Field-Alias)
    /// in the spec.
    pub fn response_key(&self) -> &Name<'src> {
        match &self.alias {
            Some(alias) => &alias.name,
            None => &self.name,
        }
    }
}

// =========================================================
// Fragments
// =========================================================

/// A named fragment spread: `...friendFields @include(if: $flag)`.
///
/// See
/// [Fragments](https://spec.graphql.org/September2025/#sec-Language.Fragments)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub fragment_name: FragmentName<'src>,
    pub directives: Option<Directives<'src>>,
    pub meta: NodeMeta<'src>,
}

/// An inline fragment: `... on User { name }`.
///
/// See
/// [Inline Fragments](https://spec.graphql.org/September2025/#sec-Inline-Fragments)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub meta: NodeMeta<'src>,
}

/// A fragment definition: `fragment friendFields on User { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub fragment_name: FragmentName<'src>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub meta: NodeMeta<'src>,
}

/// A type condition: the `on User` in a fragment definition or inline
/// fragment.
///
/// See
/// [Type Conditions](https://spec.graphql.org/September2025/#sec-Type-Conditions)
/// in the spec.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCondition<'src> {
    pub named_type: NamedType<'src>,
    pub meta: NodeMeta<'src>,
}

impl_ast_node!(OperationDefinition);
impl_ast_node!(VariablesDefinition);
impl_ast_node!(VariableDefinition);
impl_ast_node!(Variable);
impl_ast_node!(SelectionSet);
impl_ast_node!(Field);
impl_ast_node!(FragmentSpread);
impl_ast_node!(InlineFragment);
impl_ast_node!(FragmentDefinition);
impl_ast_node!(TypeCondition);
