//! Static package-path resolution for scripting-host class catalogs.
//!
//! A scripting host that bridges into a class library exposes the library
//! as dotted paths (`java.io.File`). This crate answers, ahead of any
//! runtime lookup, the two questions such a host keeps asking:
//!
//! - which dotted paths are valid? ([`PathSolver::valid_paths`],
//!   [`PathSolver::class_paths`])
//! - what does one path name? ([`PathSolver::resolve`])
//!
//! The root crate is a facade over the three workspace crates plus the
//! `packtree` binary:
//!
//! | Crate | Role |
//! |-------|------|
//! | `packtree-common` | string interner, shared limits |
//! | `packtree-catalog` | the namespace tree: builder, JSON loader, bundled JVM core catalog |
//! | `packtree-solver` | resolution, enumeration, openness, type display |
//!
//! ```
//! use packtree::{PathSolver, TypeId, TypeInterner, jvm_core};
//!
//! let types = TypeInterner::new();
//! let solver = PathSolver::new(jvm_core(), &types);
//!
//! assert_ne!(solver.resolve("java.io.File"), TypeId::UNKNOWN);
//! assert_eq!(solver.resolve("java.io"), TypeId::UNKNOWN);
//! ```

pub use packtree_catalog::{
    Catalog, CatalogError, ClassEntity, ClassFlags, CtorSignature, NodeData, NodeId, NodeKind,
    ParamDecl, dump_catalog, dump_catalog_json, jvm_core, load_catalog_str,
};
pub use packtree_common::{Atom, ShardedInterner};
pub use packtree_solver::{
    Openness, PathIndex, PathSolver, TypeData, TypeFormatter, TypeId, TypeInterner, node_openness,
    type_openness,
};

#[cfg(feature = "cli")]
pub mod cli;
pub mod tracing_config;
