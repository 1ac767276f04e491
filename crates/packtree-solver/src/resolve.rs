//! Path resolution: dotted path string -> entity type or fallback.
//!
//! The walk mirrors the guard-split-descend loop described in the catalog
//! crate docs:
//!
//! 1. apply the openness guard to the current node; open means fallback.
//! 2. if the remaining path is empty, the current node is the answer iff
//!    it carries an entity record.
//! 3. otherwise split at the *first* separator, look the head up as a child
//!    key, and continue with the tail. A missing child means fallback.
//!
//! Nothing in here errors. Malformed paths (leading/doubled separators)
//! produce empty head segments, which simply never match a child key, and
//! so fall out of the same missing-child rule. A trailing separator leaves
//! an empty tail, which the empty-path rule then tests: `"a.b.C."` walks
//! exactly like `"a.b.C"`, which is how the host bridge has always read
//! such strings.

use memchr::memchr;
use tracing::trace;

use packtree_catalog::NodeId;
use packtree_common::limits::MAX_PATH_DEPTH;

use crate::openness::node_openness;
use crate::solver::PathSolver;
use crate::types::TypeId;

impl<'a> PathSolver<'a> {
    /// Resolve a dotted path to the entity type it names, or
    /// [`TypeId::UNKNOWN`] when the walk cannot be proven to land on a
    /// class entity.
    pub fn resolve(&self, path: &str) -> TypeId {
        match self.resolve_node(path) {
            Some(node) => self.types.class_type(node),
            None => TypeId::UNKNOWN,
        }
    }

    /// Resolve a dotted path to the class node it names, `None` on any
    /// failure. This is the raw form of [`resolve`](Self::resolve); the
    /// flat path index and the CLI both build on it.
    pub fn resolve_node(&self, path: &str) -> Option<NodeId> {
        let mut node = self.catalog.root();
        let mut rest = path;
        let mut depth: u32 = 0;

        loop {
            if depth > MAX_PATH_DEPTH {
                trace!(path, depth, "resolve: path depth limit hit");
                return None;
            }
            // Guard every node on the way, the last one included: an open
            // subtree yields no structural answers
            if node_openness(self.catalog, node).is_open() {
                trace!(path, "resolve: open subtree");
                return None;
            }

            if rest.is_empty() {
                // Leaf test: only entity records are valid terminals;
                // intermediate packages are not results
                return self.catalog.entity(node).is_some().then_some(node);
            }

            let segment = match memchr(b'.', rest.as_bytes()) {
                Some(dot) => {
                    let head = &rest[..dot];
                    rest = &rest[dot + 1..];
                    head
                }
                None => {
                    let head = rest;
                    rest = "";
                    head
                }
            };

            node = match self.catalog.child_named(node, segment) {
                Some(child) => child,
                None => {
                    trace!(path, segment, "resolve: no such child");
                    return None;
                }
            };
            depth += 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/resolve_tests.rs"]
mod tests;
