//! The path solver: one catalog plus one type interner, queried together.
//!
//! `PathSolver` is a cheap borrow-pair, constructed per query batch; the
//! expensive state (catalog arena, interned types) lives in the borrowed
//! halves and is shared freely. The resolver half lives in `resolve.rs`,
//! the enumerator half in `enumerate.rs`.

use packtree_catalog::Catalog;

use crate::intern::TypeInterner;

/// Answers path questions against one catalog.
///
/// ```
/// use packtree_catalog::jvm_core;
/// use packtree_solver::{PathSolver, TypeInterner, TypeId};
///
/// let types = TypeInterner::new();
/// let solver = PathSolver::new(jvm_core(), &types);
/// assert_ne!(solver.resolve("java.io.File"), TypeId::UNKNOWN);
/// assert_eq!(solver.resolve("java.io"), TypeId::UNKNOWN);
/// ```
pub struct PathSolver<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) types: &'a TypeInterner,
}

impl<'a> PathSolver<'a> {
    pub fn new(catalog: &'a Catalog, types: &'a TypeInterner) -> Self {
        PathSolver { catalog, types }
    }

    /// The catalog this solver answers for.
    #[inline]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The type interner results are allocated in.
    #[inline]
    pub fn types(&self) -> &'a TypeInterner {
        self.types
    }
}
