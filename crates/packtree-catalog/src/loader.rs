//! JSON catalog declarations: load and dump.
//!
//! The wire shape mirrors the tree itself. Every node declares exactly one
//! of three keys:
//!
//! ```json
//! {
//!   "packages": {
//!     "java": {
//!       "packages": {
//!         "io": {
//!           "packages": {
//!             "File": {
//!               "class": {
//!                 "constructible": true,
//!                 "ctors": [ { "params": [ { "name": "pathname", "type": "string" } ] } ]
//!               }
//!             }
//!           }
//!         }
//!       }
//!     },
//!     "net": { "packages": { "minecraft": { "dynamic": true } } }
//!   }
//! }
//! ```
//!
//! Declaration order in the JSON becomes declaration order in the catalog,
//! which in turn is the order the path enumerator emits.
//!
//! Malformed structure is a `Parse` error from serde; structurally valid
//! JSON that declares something contradictory is a `Decl` error carrying
//! the dotted path of the offending node.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, FxIndexMap};
use crate::error::CatalogError;
use crate::node::{ClassEntity, ClassFlags, CtorSignature, NodeId, NodeKind, ParamDecl};

// =============================================================================
// Declaration Model
// =============================================================================

/// Top-level catalog declaration: the root's children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDecl {
    #[serde(default)]
    pub packages: FxIndexMap<String, NodeDecl>,
}

/// One declared node. Exactly one of the three keys must be present;
/// the loader rejects anything else with the node's path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<FxIndexMap<String, NodeDecl>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ClassDecl>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<bool>,
}

/// Declared class entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassDecl {
    #[serde(default)]
    pub constructible: bool,

    #[serde(default)]
    pub interface: bool,

    #[serde(default)]
    pub ctors: Vec<CtorDecl>,
}

/// Declared constructor overload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CtorDecl {
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

/// Declared constructor parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

// =============================================================================
// Loading
// =============================================================================

/// Parse a JSON catalog declaration and build the catalog.
pub fn load_catalog_str(json: &str) -> Result<Catalog, CatalogError> {
    let decl: CatalogDecl = serde_json::from_str(json)?;
    build_catalog(&decl)
}

/// Build a catalog from an already-parsed declaration.
pub fn build_catalog(decl: &CatalogDecl) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    let root = catalog.root();
    build_children(&mut catalog, root, "", &decl.packages)?;
    Ok(catalog)
}

fn build_children(
    catalog: &mut Catalog,
    parent: NodeId,
    parent_path: &str,
    children: &FxIndexMap<String, NodeDecl>,
) -> Result<(), CatalogError> {
    for (name, decl) in children {
        let path = join_path(parent_path, name);
        build_node(catalog, parent, &path, name, decl)?;
    }
    Ok(())
}

fn build_node(
    catalog: &mut Catalog,
    parent: NodeId,
    path: &str,
    name: &str,
    decl: &NodeDecl,
) -> Result<(), CatalogError> {
    let declared = usize::from(decl.packages.is_some())
        + usize::from(decl.class.is_some())
        + usize::from(decl.dynamic.is_some());
    if declared != 1 {
        return Err(CatalogError::Decl {
            path: path.to_string(),
            message: "declare exactly one of `packages`, `class`, `dynamic`".to_string(),
        });
    }

    if let Some(children) = &decl.packages {
        let id = catalog.add_package(parent, name)?;
        return build_children(catalog, id, path, children);
    }

    if let Some(class) = &decl.class {
        let entity = convert_class(catalog, path, class)?;
        catalog.add_class(parent, name, entity)?;
        return Ok(());
    }

    // dynamic is the only key left
    if decl.dynamic != Some(true) {
        return Err(CatalogError::Decl {
            path: path.to_string(),
            message: "`dynamic` must be `true` when present; omit the key otherwise".to_string(),
        });
    }
    catalog.add_dynamic(parent, name)?;
    Ok(())
}

fn convert_class(
    catalog: &Catalog,
    path: &str,
    decl: &ClassDecl,
) -> Result<ClassEntity, CatalogError> {
    if !decl.constructible && !decl.ctors.is_empty() {
        return Err(CatalogError::Decl {
            path: path.to_string(),
            message: "non-constructible class cannot declare constructors".to_string(),
        });
    }

    let mut flags = ClassFlags::empty();
    if decl.constructible {
        flags |= ClassFlags::CONSTRUCTIBLE;
    }
    if decl.interface {
        flags |= ClassFlags::INTERFACE;
    }

    let interner = catalog.interner();
    let ctors = decl
        .ctors
        .iter()
        .map(|ctor| CtorSignature {
            params: ctor
                .params
                .iter()
                .map(|p| ParamDecl {
                    name: interner.intern(&p.name),
                    type_name: interner.intern(&p.type_name),
                })
                .collect(),
        })
        .collect();

    Ok(ClassEntity { flags, ctors })
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

// =============================================================================
// Dumping
// =============================================================================

/// Rebuild the declaration for an existing catalog (for `dump` /
/// normalization of hand-written files).
pub fn dump_catalog(catalog: &Catalog) -> CatalogDecl {
    CatalogDecl {
        packages: dump_children(catalog, catalog.root()),
    }
}

/// Serialize a catalog declaration as pretty JSON.
pub fn dump_catalog_json(catalog: &Catalog) -> Result<String, CatalogError> {
    let decl = dump_catalog(catalog);
    Ok(serde_json::to_string_pretty(&decl)?)
}

fn dump_children(catalog: &Catalog, id: NodeId) -> FxIndexMap<String, NodeDecl> {
    let mut out = FxIndexMap::default();
    let Some(data) = catalog.node(id) else {
        return out;
    };
    for (atom, child) in &data.children {
        let name = catalog.interner().resolve(*atom).to_string();
        out.insert(name, dump_node(catalog, *child));
    }
    out
}

fn dump_node(catalog: &Catalog, id: NodeId) -> NodeDecl {
    match catalog.kind(id) {
        Some(NodeKind::Package) => NodeDecl {
            packages: Some(dump_children(catalog, id)),
            ..NodeDecl::default()
        },
        Some(NodeKind::Class) => {
            let class = catalog
                .entity(id)
                .map(|entity| dump_class(catalog, entity))
                .unwrap_or_default();
            NodeDecl {
                class: Some(class),
                ..NodeDecl::default()
            }
        }
        Some(NodeKind::Dynamic) | None => NodeDecl {
            dynamic: Some(true),
            ..NodeDecl::default()
        },
    }
}

fn dump_class(catalog: &Catalog, entity: &ClassEntity) -> ClassDecl {
    let interner = catalog.interner();
    ClassDecl {
        constructible: entity.is_constructible(),
        interface: entity.flags.contains(ClassFlags::INTERFACE),
        ctors: entity
            .ctors
            .iter()
            .map(|ctor| CtorDecl {
                params: ctor
                    .params
                    .iter()
                    .map(|p| ParamSpec {
                        name: interner.resolve(p.name).to_string(),
                        type_name: interner.resolve(p.type_name).to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "../tests/loader_tests.rs"]
mod tests;
