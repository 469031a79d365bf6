//! Diagnostic model for SHACL path parse failures.
//!
//! Parse failures are reported through [`PathParseError`], which implements
//! [`miette::Diagnostic`] so callers get stable diagnostic codes and help
//! text alongside the plain [`std::error::Error`] surface. There are no
//! source-text spans to label: the offending location is a graph node, and
//! every variant carries it.

use miette::{Diagnostic, Severity};
use oxrdf::{NamedNode, Term};
use std::fmt;

/// Error raised when a node does not describe a well-formed SHACL path.
///
/// The parser fails fast: the first malformed node encountered aborts the
/// whole parse, and no partial tree is returned. Each variant names the
/// offending node in N-Triples form so the caller can point back into the
/// shapes graph.
#[derive(Debug, Clone, PartialEq)]
pub enum PathParseError {
    /// A property that is structurally required by a matched shape resolved
    /// to no value (e.g. a list cell without `rdf:first` or `rdf:rest`).
    MissingValue {
        /// The absent property.
        property: NamedNode,
        /// The node the property was required on.
        node: Term,
    },

    /// A node that cannot head a list cell (a literal) appeared inside an
    /// `rdf:first`/`rdf:rest` chain.
    MalformedList {
        /// The offending list cell.
        node: Term,
    },

    /// An `sh:alternativePath` list with no branches. Alternations must
    /// carry at least one sub-path.
    EmptyAlternative {
        /// The node carrying the empty alternation.
        node: Term,
    },

    /// The node matches none of the recognized SHACL path shapes.
    UnrecognizedNode {
        /// The unparseable node.
        node: Term,
    },
}

impl PathParseError {
    /// Returns the graph node this error is anchored at.
    pub fn node(&self) -> &Term {
        match self {
            PathParseError::MissingValue { node, .. } => node,
            PathParseError::MalformedList { node } => node,
            PathParseError::EmptyAlternative { node } => node,
            PathParseError::UnrecognizedNode { node } => node,
        }
    }

    /// Stable diagnostic code for this error, under the `shacl::` prefix.
    fn diagnostic_code(&self) -> &'static str {
        match self {
            PathParseError::MissingValue { .. } => "shacl::missing_value",
            PathParseError::MalformedList { .. } => "shacl::malformed_list",
            PathParseError::EmptyAlternative { .. } => "shacl::empty_alternative",
            PathParseError::UnrecognizedNode { .. } => "shacl::unrecognized_node",
        }
    }

    fn help_text(&self) -> &'static str {
        match self {
            PathParseError::MissingValue { .. } => {
                "every cell of a SHACL path list needs both rdf:first and rdf:rest"
            }
            PathParseError::MalformedList { .. } => {
                "list cells must be IRIs or blank nodes, never literals"
            }
            PathParseError::EmptyAlternative { .. } => {
                "sh:alternativePath must point at a non-empty RDF list of sub-paths"
            }
            PathParseError::UnrecognizedNode { .. } => {
                "a path node must be a predicate IRI, an RDF list, or carry one of \
                 sh:alternativePath, sh:zeroOrMorePath, sh:oneOrMorePath, \
                 sh:zeroOrOnePath, sh:inversePath"
            }
        }
    }
}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathParseError::MissingValue { property, node } => {
                write!(f, "missing {property} value for node {node}")
            }
            PathParseError::MalformedList { node } => {
                write!(f, "malformed RDF list: {node} cannot be a list cell")
            }
            PathParseError::EmptyAlternative { node } => {
                write!(f, "empty sh:alternativePath list at node {node}")
            }
            PathParseError::UnrecognizedNode { node } => {
                write!(f, "unknown SHACL path expression at node {node}")
            }
        }
    }
}

impl std::error::Error for PathParseError {}

impl Diagnostic for PathParseError {
    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.diagnostic_code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.help_text()))
    }
}
