//! Graph-store lookup seam consumed by the path parser.
//!
//! The parser never implements triple storage. Everything it needs from the
//! shapes graph is the single capability captured by [`PathSource`]; list
//! enumeration is derived from it by walking `rdf:first`/`rdf:rest` chains.
//! Any in-memory [`oxrdf::Graph`] works out of the box.

use oxrdf::{Graph, NamedNodeRef, SubjectRef, Term};

/// Read access to a frozen shapes graph region.
///
/// Implementations are assumed synchronous and side-effect-free; the parser
/// may call [`value_of`](PathSource::value_of) any number of times for the
/// same pair during one parse.
pub trait PathSource {
    /// Returns the object of `(subject, predicate, ?object)`, or `None`
    /// when the graph holds no such triple.
    ///
    /// When a malformed graph carries several objects for the pair, the
    /// first one found wins; ambiguity is not detected.
    fn value_of(&self, subject: SubjectRef<'_>, predicate: NamedNodeRef<'_>) -> Option<Term>;
}

impl PathSource for Graph {
    fn value_of(&self, subject: SubjectRef<'_>, predicate: NamedNodeRef<'_>) -> Option<Term> {
        self.object_for_subject_predicate(subject, predicate)
            .map(|object| object.into_owned())
    }
}
