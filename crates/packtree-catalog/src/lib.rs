//! Catalog of host packages and class entities.
//!
//! This crate owns the namespace table the resolver walks:
//!
//! - **Node arena** (`Catalog`, `NodeId`, `NodeData`) with package, class,
//!   and dynamic (open) node kinds
//! - **Builder operations** for declaring tables programmatically
//! - **JSON loader/dumper** for catalog files
//! - **Bundled default catalog** covering the core host surface
//!
//! The catalog is explicit configuration: it is built once, then passed by
//! reference into every query. Open subtrees are a first-class node kind,
//! not a property recovered by inspecting types.

pub mod catalog;
pub use catalog::{Catalog, FxIndexMap};

pub mod node;
pub use node::{ClassEntity, ClassFlags, CtorSignature, NodeData, NodeId, NodeKind, ParamDecl};

pub mod error;
pub use error::CatalogError;

pub mod loader;
pub use loader::{
    CatalogDecl, ClassDecl, CtorDecl, NodeDecl, ParamSpec, build_catalog, dump_catalog,
    dump_catalog_json, load_catalog_str,
};

pub mod embedded;
pub use embedded::{JVM_CORE_JSON, jvm_core};
