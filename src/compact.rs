//! Normalizes a freshly-built [`Ast`] by fusing adjacent literals,
//! flattening nested alternations, and eliding single-child scopes.
//!
//! `compact` is idempotent: running it twice produces the same tree as
//! running it once. It never changes the set of strings a node enumerates,
//! only the shape of the tree, so it can run unconditionally after
//! [`crate::builder::Builder`] without changing observable behavior.

use tracing::trace;

use crate::ast::Ast;

/// Compact the root of a freshly-parsed tree.
///
/// The root is treated as if its parent were a scope/or, so a
/// single-child root (e.g. the whole parse of `"a"`) collapses to that
/// child directly rather than staying wrapped in an empty-context `Scope`.
pub fn compact(node: Ast) -> Ast {
    compact_node(node, true)
}

fn compact_node(node: Ast, parent_is_scope_or_or: bool) -> Ast {
    match node {
        Ast::Scope(children) => {
            let compacted: Vec<Ast> = children.into_iter().map(|c| compact_node(c, true)).collect();
            let fused = fuse_literals(compacted);
            if parent_is_scope_or_or && fused.len() == 1 {
                trace!("scope elision");
                fused.into_iter().next().expect("len checked above")
            } else {
                Ast::Scope(fused)
            }
        }
        Ast::Or(children) => {
            let compacted: Vec<Ast> = children.into_iter().map(|c| compact_node(c, true)).collect();
            let mut flat = Vec::with_capacity(compacted.len());
            for child in compacted {
                match child {
                    Ast::Or(inner) => {
                        trace!(count = inner.len(), "or splice");
                        flat.extend(inner);
                    }
                    other => flat.push(other),
                }
            }
            Ast::Or(flat)
        }
        Ast::Repeat(min, max, child) => Ast::Repeat(min, max, Box::new(compact_node(*child, false))),
        other => other,
    }
}

fn fuse_literals(children: Vec<Ast>) -> Vec<Ast> {
    let mut out: Vec<Ast> = Vec::with_capacity(children.len());
    for child in children {
        match (out.last_mut(), &child) {
            (Some(Ast::Literal(prev)), Ast::Literal(cur)) => prev.push_str(cur),
            _ => out.push(child),
        }
    }
    out
}
