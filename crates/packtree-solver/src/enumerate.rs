//! Path enumeration: every dotted path that lands on a class entity.
//!
//! Three views of the same depth-first walk:
//!
//! - [`PathSolver::class_paths`]: the paths as strings, in catalog
//!   declaration order;
//! - [`PathSolver::valid_paths`]: the paths as a union of string literal
//!   types, with the free-form `string` member unioned in;
//! - [`PathSolver::path_index`]: a flat path -> node table for O(1)
//!   repeated lookups, materialized once instead of re-walking per query.
//!
//! Open subtrees contribute nothing to any view; the guard is applied at
//! every node, so an open child prunes exactly its own subtree.

use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::trace;

use packtree_catalog::NodeId;
use packtree_common::limits::{CLASS_PATH_CAPACITY, MAX_TREE_DEPTH};

use crate::openness::node_openness;
use crate::solver::PathSolver;
use crate::types::TypeId;

impl<'a> PathSolver<'a> {
    /// All dotted paths terminating at class entities, in declaration
    /// order.
    pub fn class_paths(&self) -> Vec<String> {
        let mut paths = Vec::with_capacity(CLASS_PATH_CAPACITY);
        self.for_each_class_path(|path, _| paths.push(path.to_string()));
        paths
    }

    /// The valid-path union: one string literal per enumerated path, plus
    /// the unconstrained `string` member so free-form strings stay
    /// acceptable resolver inputs.
    ///
    /// A catalog with no class entities still yields `string` (the literal
    /// set collapses to `never` and drops out of the union).
    pub fn valid_paths(&self) -> TypeId {
        let mut members = Vec::with_capacity(CLASS_PATH_CAPACITY + 1);
        members.push(TypeId::STRING);
        for path in self.class_paths() {
            members.push(self.types.literal_string_owned(path));
        }
        self.types.union(members)
    }

    /// Materialize the flat path -> node lookup table.
    pub fn path_index(&self) -> PathIndex {
        let mut map = FxHashMap::default();
        let mut paths = Vec::with_capacity(CLASS_PATH_CAPACITY);
        self.for_each_class_path(|path, node| {
            let key: Arc<str> = Arc::from(path);
            map.insert(key.clone(), node);
            paths.push((key, node));
        });
        trace!(entries = paths.len(), "path_index built");
        PathIndex { map, paths }
    }

    /// Depth-first visit of every class entity, calling `f` with the full
    /// dotted path and the node.
    fn for_each_class_path(&self, mut f: impl FnMut(&str, NodeId)) {
        let mut prefix = String::new();
        self.visit_classes(self.catalog.root(), &mut prefix, 0, &mut f);
    }

    fn visit_classes(
        &self,
        node: NodeId,
        prefix: &mut String,
        depth: u32,
        f: &mut impl FnMut(&str, NodeId),
    ) {
        if depth > MAX_TREE_DEPTH {
            trace!(depth, "enumerate: tree depth limit hit");
            return;
        }
        // Same guard as the resolver, applied at every node: an open
        // subtree contributes no paths at all
        if node_openness(self.catalog, node).is_open() {
            return;
        }
        let Some(data) = self.catalog.node(node) else {
            return;
        };

        // Entity leaf test, not a has-children test
        if data.entity.is_some() {
            f(prefix, node);
            return;
        }

        for (atom, child) in &data.children {
            let segment = self.catalog.interner().resolve(*atom);
            let saved = prefix.len();
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(&segment);
            self.visit_classes(*child, prefix, depth + 1, f);
            prefix.truncate(saved);
        }
    }
}

// =============================================================================
// PathIndex - Flat Lookup Table
// =============================================================================

/// Flat path -> class node table, built by one catalog walk.
///
/// Agrees with [`PathSolver::resolve_node`] by construction: a path is a
/// key here iff the resolver maps it to a class entity (separator-exact
/// spellings only; the index does not model the resolver's tolerance for a
/// trailing separator).
pub struct PathIndex {
    map: FxHashMap<Arc<str>, NodeId>,
    paths: Vec<(Arc<str>, NodeId)>,
}

impl PathIndex {
    /// Look a path up. O(1); no catalog walk.
    #[inline]
    pub fn get(&self, path: &str) -> Option<NodeId> {
        self.map.get(path).copied()
    }

    /// Whether the exact path is a valid class path.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.map.contains_key(path)
    }

    /// All (path, node) entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.paths.iter().map(|(path, node)| (&**path, *node))
    }

    /// Number of class paths in the table.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/enumerate_tests.rs"]
mod tests;
