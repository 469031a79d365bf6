//! AST foundation types for SHACL property paths.

mod path;

// Re-export the path expression tree
pub use path::PathExpr;
