//! SHACL vocabulary constants consumed by the path parser.
//!
//! Only the path-structuring predicates of the
//! [`http://www.w3.org/ns/shacl#`](http://www.w3.org/ns/shacl#) namespace
//! are defined here; the RDF collection vocabulary (`rdf:first`,
//! `rdf:rest`, `rdf:nil`) comes from [`oxrdf::vocab::rdf`].

use oxrdf::NamedNodeRef;

/// `sh:path`: links a property shape to its path node. Not consumed by the
/// parser itself, exposed for callers resolving the anchor node.
pub const PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#path");

/// `sh:alternativePath`: the object heads a list of alternative sub-paths.
pub const ALTERNATIVE_PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#alternativePath");

/// `sh:zeroOrMorePath`: zero or more traversals of the object sub-path.
pub const ZERO_OR_MORE_PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#zeroOrMorePath");

/// `sh:oneOrMorePath`: one or more traversals of the object sub-path.
pub const ONE_OR_MORE_PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#oneOrMorePath");

/// `sh:zeroOrOnePath`: an optional traversal of the object sub-path.
pub const ZERO_OR_ONE_PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#zeroOrOnePath");

/// `sh:inversePath`: the object sub-path traversed in reverse.
pub const INVERSE_PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#inversePath");
