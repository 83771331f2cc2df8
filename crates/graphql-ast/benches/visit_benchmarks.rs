use std::borrow::Cow;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use graphql_ast::ast::Definition;
use graphql_ast::ast::Document;
use graphql_ast::ast::Field;
use graphql_ast::ast::Name;
use graphql_ast::ast::NodeRef;
use graphql_ast::ast::OperationDefinition;
use graphql_ast::ast::OperationKind;
use graphql_ast::ast::Selection;
use graphql_ast::ast::SelectionSet;
use graphql_ast::visitor::max_nested_depth;
use graphql_ast::visitor::visit;
use graphql_ast::visitor::DepthContext;
use graphql_ast::visitor::VisitFlow;
use graphql_ast::visitor::Visitor;
use graphql_ast::visitor::VisitorContext;
use graphql_ast::NodeMeta;
use graphql_ast::NodeOptions;
use graphql_ast::SourceSpan;

// ─── Fixtures ────────────────────────────────────────────

fn meta() -> NodeMeta<'static> {
    NodeMeta::new(SourceSpan::default(), &NodeOptions::none())
}

fn field(name: &'static str, selection_set: Option<SelectionSet<'static>>) -> Field<'static> {
    Field {
        alias: None,
        name: Name {
            value: Cow::Borrowed(name),
            meta: meta(),
        },
        arguments: None,
        directives: None,
        selection_set,
        meta: meta(),
    }
}

fn query_document(selection_set: SelectionSet<'static>) -> Document<'static> {
    Document {
        definitions: vec![Definition::OperationDefinition(OperationDefinition {
            operation: OperationKind::Query,
            name: None,
            variable_definitions: None,
            directives: None,
            selection_set,
            meta: meta(),
        })],
        meta: meta(),
    }
}

/// A single chain of fields nested `levels` deep.
fn deeply_nested(levels: usize) -> Document<'static> {
    let mut set = SelectionSet {
        selections: vec![Selection::Field(field("id", None))],
        meta: meta(),
    };
    for _ in 1..levels {
        set = SelectionSet {
            selections: vec![Selection::Field(field("child", Some(set)))],
            meta: meta(),
        };
    }
    query_document(set)
}

/// A flat selection of `count` sibling leaf fields.
fn wide_flat(count: usize) -> Document<'static> {
    query_document(SelectionSet {
        selections: (0..count)
            .map(|_| Selection::Field(field("id", None)))
            .collect(),
        meta: meta(),
    })
}

// ─── Group 1: Full-Tree Traversal ────────────────────────

struct CountingVisitor {
    nodes: usize,
}

impl<C: VisitorContext> Visitor<C> for CountingVisitor {
    fn enter_node(&mut self, _node: NodeRef<'_, '_>, _ctx: &mut C) -> VisitFlow {
        self.nodes += 1;
        VisitFlow::Next
    }
}

fn traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");

    for count in [100, 1_000, 10_000] {
        let document = wide_flat(count);
        group.bench_with_input(BenchmarkId::new("wide_flat", count), &document, |b, doc| {
            b.iter(|| {
                let mut visitor = CountingVisitor { nodes: 0 };
                let mut ctx = DepthContext::new();
                visit(NodeRef::Document(black_box(doc)), &mut visitor, &mut ctx);
                black_box(visitor.nodes)
            })
        });
    }

    group.finish();
}

// ─── Group 2: Max-Depth Analysis ─────────────────────────

fn max_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_depth");

    for levels in [10, 100, 1_000] {
        let document = deeply_nested(levels);
        group.bench_with_input(
            BenchmarkId::new("deeply_nested", levels),
            &document,
            |b, doc| b.iter(|| black_box(max_nested_depth(black_box(doc)))),
        );
    }

    group.finish();
}

criterion_group!(benches, traverse, max_depth);
criterion_main!(benches);
