//! End-to-End Path Compiler Benchmarks
//!
//! This benchmark suite measures the two phases of the compiler across
//! representative path shapes:
//!
//! - **Parse**: reconstructing `PathExpr` trees from shapes graphs
//! - **Flatten**: clause emission at varying unroll depths
//! - **End-to-end**: the `path_to_sparql_pattern` wrapper
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark group
//! cargo bench parse
//! cargo bench flatten
//! cargo bench end_to_end
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxrdf::vocab::rdf;
use oxrdf::{BlankNode, Graph, NamedNode, Term, TripleRef};
use shacl_path_compiler::{PathExpr, flatten_path, parse_path, path_to_sparql_pattern, vocab};

fn named(iri: &str) -> NamedNode {
    NamedNode::new(iri).unwrap()
}

fn insert_list(graph: &mut Graph, elements: &[Term]) -> Term {
    let mut head = Term::from(rdf::NIL.into_owned());
    for element in elements.iter().rev() {
        let cell = BlankNode::default();
        graph.insert(TripleRef::new(cell.as_ref(), rdf::FIRST, element.as_ref()));
        graph.insert(TripleRef::new(cell.as_ref(), rdf::REST, head.as_ref()));
        head = Term::from(cell);
    }
    head
}

fn insert_wrapper(graph: &mut Graph, property: oxrdf::NamedNodeRef<'_>, object: &Term) -> Term {
    let wrapper = BlankNode::default();
    graph.insert(TripleRef::new(wrapper.as_ref(), property, object.as_ref()));
    Term::from(wrapper)
}

/// A sequence of `len` predicates.
fn sequence_graph(len: usize) -> (Graph, Term) {
    let mut graph = Graph::new();
    let elements: Vec<Term> = (0..len)
        .map(|i| Term::from(named(&format!("http://example.org/p{i}"))))
        .collect();
    let head = insert_list(&mut graph, &elements);
    (graph, head)
}

/// Alternation over `width` branches, each a two-step sequence wrapped in a
/// repetition, exercising every parser branch.
fn mixed_graph(width: usize) -> (Graph, Term) {
    let mut graph = Graph::new();
    let branches: Vec<Term> = (0..width)
        .map(|i| {
            let seq = insert_list(
                &mut graph,
                &[
                    Term::from(named(&format!("http://example.org/a{i}"))),
                    Term::from(named(&format!("http://example.org/b{i}"))),
                ],
            );
            let repeated = insert_wrapper(&mut graph, vocab::ZERO_OR_MORE_PATH, &seq);
            insert_wrapper(&mut graph, vocab::INVERSE_PATH, &repeated)
        })
        .collect();
    let branch_list = insert_list(&mut graph, &branches);
    let head = insert_wrapper(&mut graph, vocab::ALTERNATIVE_PATH, &branch_list);
    (graph, head)
}

// ============================================================================
// Parse Benchmarks
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for len in [2, 8, 32] {
        let (graph, head) = sequence_graph(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("sequence", len), &len, |b, _| {
            b.iter(|| parse_path(black_box(&graph), black_box(&head)));
        });
    }

    for width in [2, 8] {
        let (graph, head) = mixed_graph(width);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::new("mixed", width), &width, |b, _| {
            b.iter(|| parse_path(black_box(&graph), black_box(&head)));
        });
    }

    group.finish();
}

// ============================================================================
// Flatten Benchmarks
// ============================================================================

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    let chain = PathExpr::OneOrMore(Box::new(PathExpr::Sequence(vec![
        PathExpr::predicate("http://example.org/p1"),
        PathExpr::predicate("http://example.org/p2"),
    ])));
    for depth in [1, 3, 8, 16] {
        group.bench_with_input(
            BenchmarkId::new("one_or_more_sequence", depth),
            &depth,
            |b, &depth| {
                b.iter(|| flatten_path(black_box(&chain), "?s", "?o", depth, 0));
            },
        );
    }

    let wide = PathExpr::Alternative(
        (0..16)
            .map(|i| PathExpr::predicate(format!("http://example.org/p{i}")))
            .collect(),
    );
    group.throughput(Throughput::Elements(16));
    group.bench_with_input(BenchmarkId::from_parameter("alternative_16"), &wide, |b, expr| {
        b.iter(|| flatten_path(black_box(expr), "?s", "?o", 3, 0));
    });

    group.finish();
}

// ============================================================================
// End-to-End Benchmarks
// ============================================================================

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");

    let (graph, head) = mixed_graph(4);
    for depth in [3, 8] {
        group.bench_with_input(
            BenchmarkId::new("mixed_4", depth),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    path_to_sparql_pattern(black_box(&graph), black_box(&head), "?s", "?o", depth)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_flatten, bench_end_to_end);
criterion_main!(benches);
