//! Bundled default catalog.
//!
//! Ships a small core of the host class surface directly in the binary via
//! `include_str!`, so the CLI and tests work without any catalog file on
//! disk. The JSON is parsed once, on first use.
//!
//! The bundled tree covers the classes every embedder ends up touching
//! (`java.lang`, `java.util`, `java.io`, `java.net`) plus one deliberately
//! open subtree (`net.minecraft`) whose contents are remapped per
//! installation and therefore unknowable at build time.

use once_cell::sync::Lazy;

use crate::catalog::Catalog;
use crate::loader::load_catalog_str;

/// Raw JSON of the bundled catalog.
pub const JVM_CORE_JSON: &str = include_str!("../data/jvm_core.json");

static JVM_CORE: Lazy<Catalog> = Lazy::new(|| {
    // Compile-time data; the loader round-trip test keeps it well-formed
    load_catalog_str(JVM_CORE_JSON).expect("bundled jvm_core.json must load")
});

/// The bundled catalog, parsed on first use.
pub fn jvm_core() -> &'static Catalog {
    &JVM_CORE
}
