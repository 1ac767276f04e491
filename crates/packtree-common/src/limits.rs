//! Centralized limits and thresholds for the packtree resolver.
//!
//! This module provides shared constants for recursion depths and capacity
//! limits used throughout the codebase. Centralizing these values:
//! - Prevents duplicate definitions with inconsistent values
//! - Documents the rationale for each limit
//!
//! None of these limits are semantics: a well-formed catalog never comes
//! close to them. They exist so hostile or corrupted inputs degrade into the
//! fallback type (or a build error) instead of a stack overflow.

// =============================================================================
// Recursion Depth Limits (Resolver / Enumerator)
// =============================================================================

/// Maximum number of segments in a resolvable path.
///
/// The resolver recurses once per `.`-separated segment, so this bounds its
/// stack depth. Real catalogs are a handful of levels deep (`java.lang.Class`
/// is three); a path beyond this limit resolves to the fallback type.
///
/// # Example
///
/// ```text
/// java.util.concurrent.atomic.AtomicLong   // 5 segments, fine
/// a.a.a.a.a.a.a.a /* ... 64+ segments */   // resolves to `unknown`
/// ```
pub const MAX_PATH_DEPTH: u32 = 64;

/// Maximum catalog tree depth the enumerator will descend.
///
/// The catalog builder only ever attaches children to existing package
/// nodes, so the tree is acyclic by construction and this limit is pure
/// defense. It matches [`MAX_PATH_DEPTH`]: a deeper node could never be
/// named by a resolvable path anyway.
pub const MAX_TREE_DEPTH: u32 = MAX_PATH_DEPTH;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Maximum number of nodes in one catalog.
///
/// Node ids are `u32` arena indices; this cap keeps them far from overflow
/// and turns a runaway builder loop into a `CatalogError` instead of an
/// ever-growing arena. Sixteen million nodes is orders of magnitude beyond
/// any real host surface.
pub const MAX_CATALOG_NODES: usize = 1 << 24;

/// Pre-allocation size for the enumerated class-path list.
///
/// The bundled catalog lands around a dozen class entities; synthetic test
/// catalogs are smaller. 64 avoids reallocation for anything realistic
/// without wasting memory on tiny tables.
pub const CLASS_PATH_CAPACITY: usize = 64;
