//! The openness guard.
//!
//! An *open* subtree is one whose contents are unknowable at build time; the
//! catalog declares it with a `Dynamic` node, and in type space it shows up
//! as the `any` intrinsic. Every structural answer derived from an open
//! subtree would be a guess, so both walkers consult this guard at every
//! node they reach and short-circuit to the fallback on `Open`.
//!
//! The guard is deliberately re-applied per step, not just at the root:
//! a closed parent can contain an open child, and the walk must stop at the
//! child, not after it.
//!
//! All "is this open and what does it swallow" questions live here; the
//! resolver, the enumerator, and union normalization all ask this module
//! instead of re-deriving the answer locally.

use packtree_catalog::{Catalog, NodeId, NodeKind};

use crate::types::TypeId;

/// Two-valued openness classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Openness {
    /// Fully unconstrained: every derived answer must be the fallback.
    Open,
    /// Structurally known: walking may continue.
    Closed,
}

impl Openness {
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Openness::Open)
    }
}

/// Classify a catalog node.
///
/// `Dynamic` nodes are open. So is anything the catalog cannot vouch for
/// (an invalid id): structure we cannot inspect gets no structural answers.
#[inline]
pub fn node_openness(catalog: &Catalog, node: NodeId) -> Openness {
    match catalog.kind(node) {
        Some(NodeKind::Package) | Some(NodeKind::Class) => Openness::Closed,
        Some(NodeKind::Dynamic) | None => Openness::Open,
    }
}

/// Classify a type.
///
/// Only `any` is open. `unknown` is a *closed* failure marker; it taints
/// results by substitution, not by re-opening the walk.
#[inline]
pub fn type_openness(id: TypeId) -> Openness {
    if id == TypeId::ANY {
        Openness::Open
    } else {
        Openness::Closed
    }
}

#[cfg(test)]
#[path = "../tests/openness_tests.rs"]
mod tests;
