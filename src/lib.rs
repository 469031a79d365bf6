//! SHACL property path compiler with rich diagnostics.
//!
//! This library parses SHACL property path descriptions out of an RDF
//! shapes graph and compiles them into bounded SPARQL graph-pattern
//! fragments, letting a query engine evaluate path-shaped constraints
//! without native support for unbounded path operators. Repetition
//! (`sh:oneOrMorePath`, `sh:zeroOrMorePath`) is approximated by unrolling
//! to a fixed depth.
//!
//! The two phases are independent: [`parse_path`] turns a graph-anchored
//! path node into a [`PathExpr`] tree, and [`flatten_path`] turns a tree
//! plus an endpoint variable pair into an ordered clause list.
//! [`path_to_sparql_pattern`] wires them together.
//!
//! # Example
//!
//! ```
//! use oxrdf::{BlankNode, Graph, NamedNode, Term, TripleRef};
//! use shacl_path_compiler::{path_to_sparql_pattern, vocab};
//!
//! // _:path sh:inversePath ex:knows
//! let mut shapes = Graph::new();
//! let path_node = BlankNode::new("path").unwrap();
//! let knows = NamedNode::new("http://example.org/knows").unwrap();
//! shapes.insert(TripleRef::new(
//!     path_node.as_ref(),
//!     vocab::INVERSE_PATH,
//!     knows.as_ref(),
//! ));
//!
//! let pattern =
//!     path_to_sparql_pattern(&shapes, &Term::from(path_node), "?s", "?o", 3).unwrap();
//! assert_eq!(pattern, "?o <http://example.org/knows> ?s .");
//! ```

pub mod ast;
pub mod diag;
pub mod flatten;
pub mod parser;
pub mod store;
pub mod vocab;

// Re-export the whole public surface at the crate root.
pub use ast::PathExpr;
pub use diag::PathParseError;
pub use flatten::{FRESH_VAR_PREFIX, flatten_path};
pub use parser::parse_path;
pub use store::PathSource;

use oxrdf::Term;
use tracing::debug;

/// Default unroll depth for the repetition modifiers.
pub const DEFAULT_DEPTH: usize = 3;

/// Parses the path anchored at `path_node` and flattens it into a single
/// SPARQL pattern body between `source_var` and `target_var`.
///
/// Clauses are newline-joined; the caller embeds the result in a complete
/// query. Fresh variables start at counter 0; callers compiling several
/// paths into one query should use [`parse_path`] and [`flatten_path`]
/// directly and thread the counter across calls.
pub fn path_to_sparql_pattern<S: PathSource>(
    store: &S,
    path_node: &Term,
    source_var: &str,
    target_var: &str,
    depth: usize,
) -> Result<String, PathParseError> {
    debug!(node = %path_node, source_var, target_var, depth, "compiling SHACL path");
    let expr = parse_path(store, path_node)?;
    let (clauses, _) = flatten_path(&expr, source_var, target_var, depth, 0);
    Ok(clauses.join("\n"))
}
