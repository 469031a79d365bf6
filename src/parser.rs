//! Recursive parser for SHACL property path descriptions.
//!
//! The parser reconstructs a [`PathExpr`] tree from a path node anchored in
//! a shapes graph. Its recursion mirrors the shape of the graph region it
//! reads rather than a fixed grammar depth: every compound node is
//! dispatched by the properties it carries, and sub-paths are parsed
//! left-to-right in list order.
//!
//! Dispatch order (first match wins):
//!
//! 1. a predicate IRI (no store access),
//! 2. an `rdf:first`/`rdf:rest` list (a sequence path),
//! 3. `sh:alternativePath`, 4. `sh:zeroOrMorePath`, 5. `sh:oneOrMorePath`,
//! 6. `sh:zeroOrOnePath`, 7. `sh:inversePath`,
//! 8. anything else fails with [`PathParseError::UnrecognizedNode`].
//!
//! Parsing fails fast with no partial results. Shape graphs are assumed
//! acyclic; cycle detection is the caller's responsibility.

use crate::ast::PathExpr;
use crate::diag::PathParseError;
use crate::store::PathSource;
use crate::vocab;
use oxrdf::vocab::rdf;
use oxrdf::{NamedNodeRef, SubjectRef, Term};
use smol_str::SmolStr;

/// Parses the SHACL path description anchored at `node` into a [`PathExpr`].
///
/// `node` is typically the object of an `sh:path` triple. A named node is
/// an atomic predicate path; a blank node is dispatched by the properties
/// it carries in `store`; a literal matches no shape.
pub fn parse_path<S: PathSource>(store: &S, node: &Term) -> Result<PathExpr, PathParseError> {
    match node {
        Term::NamedNode(iri) => Ok(PathExpr::Predicate(SmolStr::new(iri.as_str()))),
        Term::BlankNode(bnode) => parse_compound(store, node, bnode.as_ref().into()),
        Term::Literal(_) => Err(PathParseError::UnrecognizedNode { node: node.clone() }),
    }
}

/// Dispatches a blank path node on the properties it carries.
fn parse_compound<S: PathSource>(
    store: &S,
    node: &Term,
    subject: SubjectRef<'_>,
) -> Result<PathExpr, PathParseError> {
    // The node itself heads an RDF list: a sequence path. Guaranteed
    // non-empty, since recognition requires a present rdf:first.
    if store.value_of(subject, rdf::FIRST).is_some() {
        let items = parse_list(store, node)?;
        return Ok(PathExpr::Sequence(items));
    }

    if let Some(head) = store.value_of(subject, vocab::ALTERNATIVE_PATH) {
        let branches = parse_list(store, &head)?;
        if branches.is_empty() {
            return Err(PathParseError::EmptyAlternative { node: node.clone() });
        }
        return Ok(PathExpr::Alternative(branches));
    }

    if let Some(inner) = store.value_of(subject, vocab::ZERO_OR_MORE_PATH) {
        return Ok(PathExpr::ZeroOrMore(Box::new(parse_path(store, &inner)?)));
    }

    if let Some(inner) = store.value_of(subject, vocab::ONE_OR_MORE_PATH) {
        return Ok(PathExpr::OneOrMore(Box::new(parse_path(store, &inner)?)));
    }

    if let Some(inner) = store.value_of(subject, vocab::ZERO_OR_ONE_PATH) {
        return Ok(PathExpr::ZeroOrOne(Box::new(parse_path(store, &inner)?)));
    }

    if let Some(inner) = store.value_of(subject, vocab::INVERSE_PATH) {
        return Ok(PathExpr::Inverse(Box::new(parse_path(store, &inner)?)));
    }

    Err(PathParseError::UnrecognizedNode { node: node.clone() })
}

/// Walks an `rdf:first`/`rdf:rest` chain from `head` to `rdf:nil`, parsing
/// every element in list order.
fn parse_list<S: PathSource>(store: &S, head: &Term) -> Result<Vec<PathExpr>, PathParseError> {
    let mut items = Vec::new();
    let mut cursor = head.clone();
    while !is_nil(&cursor) {
        let (first, rest) = {
            let cell = as_list_cell(&cursor)?;
            let first = must_value(store, cell, rdf::FIRST, &cursor)?;
            let rest = must_value(store, cell, rdf::REST, &cursor)?;
            (first, rest)
        };
        items.push(parse_path(store, &first)?);
        cursor = rest;
    }
    Ok(items)
}

fn is_nil(term: &Term) -> bool {
    matches!(term, Term::NamedNode(iri) if iri.as_ref() == rdf::NIL)
}

/// A list cell must be addressable as a triple subject.
fn as_list_cell(term: &Term) -> Result<SubjectRef<'_>, PathParseError> {
    match term {
        Term::NamedNode(iri) => Ok(iri.as_ref().into()),
        Term::BlankNode(bnode) => Ok(bnode.as_ref().into()),
        Term::Literal(_) => Err(PathParseError::MalformedList { node: term.clone() }),
    }
}

/// Looks up a property that the matched shape structurally requires.
fn must_value<S: PathSource>(
    store: &S,
    subject: SubjectRef<'_>,
    property: NamedNodeRef<'_>,
    node: &Term,
) -> Result<Term, PathParseError> {
    store
        .value_of(subject, property)
        .ok_or_else(|| PathParseError::MissingValue {
            property: property.into_owned(),
            node: node.clone(),
        })
}
