//! Depth-bounded flattening of path expressions into SPARQL patterns.
//!
//! [`flatten_path`] walks a [`PathExpr`] tree and emits an ordered list of
//! SPARQL pattern fragments between a source and a destination variable.
//! Atomic fragments are triple patterns (`?s <p> ?o .`); alternation and
//! the zero-width repetition variants produce single composite fragments:
//! braced group blocks joined by `UNION`, with `FILTER(?s = ?o)` as the
//! identity constraint.
//!
//! Unbounded repetition is approximated by finite unrolling: `OneOrMore`
//! expands to a chain of exactly `depth` hops. A pair reachable in fewer
//! hops is therefore not matched, a known semantic gap accepted in
//! exchange for a disjunction-free chain.
//!
//! Output is fully deterministic: for a fixed tree, endpoint pair, depth,
//! and starting counter, the clause list and final counter are exactly
//! reproducible.

use crate::ast::PathExpr;

/// Prefix of flattener-introduced intermediate variables (`?v0`, `?v1`, …).
pub const FRESH_VAR_PREFIX: &str = "?v";

/// Sequential allocator for fresh intermediate variables.
///
/// Threading this allocator through the recursion guarantees every fresh
/// variable is unique within one top-level [`flatten_path`] call; sibling
/// sub-trees never collide because each allocation advances the shared
/// counter.
struct FreshVars {
    next: u32,
}

impl FreshVars {
    fn starting_at(counter: u32) -> Self {
        Self { next: counter }
    }

    fn fresh(&mut self) -> String {
        let var = format!("{FRESH_VAR_PREFIX}{}", self.next);
        self.next += 1;
        var
    }
}

/// Flattens `expr` into SPARQL pattern fragments between `src` and `dst`.
///
/// `depth` bounds the unrolling of `OneOrMore`/`ZeroOrMore` and must be at
/// least 1 for those variants to emit any hops. `counter` seeds fresh
/// variable naming; the updated counter is returned so callers can chain
/// further flattening without variable collisions. Callers running several
/// top-level flattenings in parallel partition counter ranges themselves.
///
/// The returned fragments are newline-joined by the caller to form one
/// group-graph-pattern body.
pub fn flatten_path(
    expr: &PathExpr,
    src: &str,
    dst: &str,
    depth: usize,
    counter: u32,
) -> (Vec<String>, u32) {
    let mut vars = FreshVars::starting_at(counter);
    let clauses = flatten_with(&mut vars, expr, src, dst, depth);
    (clauses, vars.next)
}

fn flatten_with(
    vars: &mut FreshVars,
    expr: &PathExpr,
    src: &str,
    dst: &str,
    depth: usize,
) -> Vec<String> {
    match expr {
        PathExpr::Predicate(label) => vec![format!("{src} <{label}> {dst} .")],

        // Swap the endpoints and recurse; the inverse case introduces
        // nothing of its own.
        PathExpr::Inverse(inner) => flatten_with(vars, inner, dst, src, depth),

        PathExpr::Sequence(items) => {
            // Allocate the full endpoint chain up front, then flatten each
            // item between its consecutive endpoints.
            let mut endpoints = Vec::with_capacity(items.len() + 1);
            endpoints.push(src.to_owned());
            for _ in 1..items.len() {
                endpoints.push(vars.fresh());
            }
            endpoints.push(dst.to_owned());

            let mut clauses = Vec::new();
            for (i, item) in items.iter().enumerate() {
                clauses.extend(flatten_with(vars, item, &endpoints[i], &endpoints[i + 1], depth));
            }
            clauses
        }

        PathExpr::Alternative(branches) => {
            let blocks: Vec<String> = branches
                .iter()
                .map(|branch| {
                    let clauses = flatten_with(vars, branch, src, dst, depth);
                    format!("{{\n  {}\n}}", clauses.join("\n  "))
                })
                .collect();
            vec![format!("{{ {} }}", blocks.join(" UNION "))]
        }

        PathExpr::ZeroOrOne(inner) => {
            let traversal = flatten_with(vars, inner, src, dst, depth);
            vec![format!(
                "{{ {{ {} }} UNION {{ {} }} }}",
                traversal.join("\n  "),
                identity_filter(src, dst)
            )]
        }

        PathExpr::OneOrMore(inner) => flatten_chain(vars, inner, src, dst, depth),

        PathExpr::ZeroOrMore(inner) => {
            let chain = flatten_chain(vars, inner, src, dst, depth);
            vec![format!(
                "{{ {{ {} }} UNION {{ {} }} }}",
                identity_filter(src, dst),
                chain.join("\n  ")
            )]
        }
    }
}

/// Unrolls `inner` to a chain of exactly `depth` hops from `src` to `dst`.
///
/// Every hop lands on a fresh variable except the last, which lands on
/// `dst`. Shared by the `OneOrMore` case and the traversal half of
/// `ZeroOrMore`.
fn flatten_chain(
    vars: &mut FreshVars,
    inner: &PathExpr,
    src: &str,
    dst: &str,
    depth: usize,
) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut hop_src = src.to_owned();
    for hop in 0..depth {
        let hop_dst = if hop < depth - 1 {
            vars.fresh()
        } else {
            dst.to_owned()
        };
        clauses.extend(flatten_with(vars, inner, &hop_src, &hop_dst, depth));
        hop_src = hop_dst;
    }
    clauses
}

fn identity_filter(src: &str, dst: &str) -> String {
    format!("FILTER({src} = {dst})")
}
