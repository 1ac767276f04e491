//! The catalog: an explicit, immutable-once-built namespace table.
//!
//! The catalog is the single input every resolver query runs against. It is
//! built up front (programmatically or from JSON), then shared by reference;
//! nothing in the query path mutates it. There is deliberately no ambient
//! global table: whoever asks a question supplies the catalog it is asking
//! about.
//!
//! Nodes live in a flat arena indexed by `NodeId`, with slot 0 reserved so
//! `NodeId::INVALID` never aliases a live node. Children hang off their
//! parent in declaration order, keyed by interned segment atoms, so one
//! lookup step is one hash probe on a u32.

use indexmap::IndexMap;
use packtree_common::interner::{Atom, ShardedInterner};
use packtree_common::limits::{MAX_CATALOG_NODES, MAX_TREE_DEPTH};
use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::error::CatalogError;
use crate::node::{ClassEntity, NodeData, NodeId, NodeKind};

/// Declaration-order-preserving map with the fast hasher used everywhere
/// else in packtree.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

// =============================================================================
// Catalog - Node Arena
// =============================================================================

/// A host package tree: packages, class entities, and open subtrees.
///
/// ## Usage
///
/// ```
/// use packtree_catalog::{Catalog, ClassEntity};
///
/// let mut catalog = Catalog::new();
/// let root = catalog.root();
/// let java = catalog.add_package(root, "java").unwrap();
/// let io = catalog.add_package(java, "io").unwrap();
/// catalog
///     .add_class(io, "File", ClassEntity::constructible(vec![]))
///     .unwrap();
///
/// let io_again = catalog.child_named(java, "io").unwrap();
/// assert_eq!(io, io_again);
/// ```
#[derive(Debug)]
pub struct Catalog {
    /// Node arena. Slot 0 is reserved (`NodeId::INVALID`); the root lives
    /// at `NodeId::FIRST_VALID`.
    nodes: Vec<NodeData>,

    /// The root package. Its name is `Atom::NONE`; it is never itself a
    /// path target.
    root: NodeId,

    /// Segment interner, shared with every solver querying this catalog.
    interner: ShardedInterner,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog containing only the root package.
    pub fn new() -> Self {
        let interner = ShardedInterner::new();
        interner.intern_common();

        let root = NodeId(NodeId::FIRST_VALID);
        let nodes = vec![
            // Reserved slot so NodeId::INVALID never indexes a live node
            NodeData::package(Atom::NONE, NodeId::INVALID, 0),
            NodeData::package(Atom::NONE, NodeId::INVALID, 0),
        ];
        trace!("Catalog::new");
        Catalog {
            nodes,
            root,
            interner,
        }
    }

    /// The root package node.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The segment interner backing this catalog.
    #[inline]
    pub fn interner(&self) -> &ShardedInterner {
        &self.interner
    }

    /// Number of live nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the catalog holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    // =========================================================================
    // Builder Operations
    // =========================================================================

    /// Add a package under `parent`.
    pub fn add_package(&mut self, parent: NodeId, name: &str) -> Result<NodeId, CatalogError> {
        let (atom, depth) = self.validate_insert(parent, name)?;
        let id = self.allocate(NodeData::package(atom, parent, depth))?;
        self.attach(parent, atom, id);
        trace!(parent = parent.0, name, id = id.0, "Catalog::add_package");
        Ok(id)
    }

    /// Add a class entity under `parent`.
    pub fn add_class(
        &mut self,
        parent: NodeId,
        name: &str,
        entity: ClassEntity,
    ) -> Result<NodeId, CatalogError> {
        let (atom, depth) = self.validate_insert(parent, name)?;
        let id = self.allocate(NodeData::class(atom, parent, depth, entity))?;
        self.attach(parent, atom, id);
        trace!(parent = parent.0, name, id = id.0, "Catalog::add_class");
        Ok(id)
    }

    /// Add a dynamic (open) subtree under `parent`.
    pub fn add_dynamic(&mut self, parent: NodeId, name: &str) -> Result<NodeId, CatalogError> {
        let (atom, depth) = self.validate_insert(parent, name)?;
        let id = self.allocate(NodeData::dynamic(atom, parent, depth))?;
        self.attach(parent, atom, id);
        trace!(parent = parent.0, name, id = id.0, "Catalog::add_dynamic");
        Ok(id)
    }

    /// Walk a dotted package path from the root, creating missing packages.
    ///
    /// `ensure_package_path("java.util")` returns the `java.util` node,
    /// creating `java` and `java.util` as needed. Errors if an existing
    /// segment on the way is not a package.
    pub fn ensure_package_path(&mut self, path: &str) -> Result<NodeId, CatalogError> {
        let mut current = self.root;
        if path.is_empty() {
            return Ok(current);
        }
        for segment in path.split('.') {
            let atom = self.interner.intern(segment);
            match self.child(current, atom) {
                Some(existing) => {
                    if self.kind(existing) != Some(NodeKind::Package) {
                        return Err(CatalogError::NotAPackage {
                            parent: self.path_of(existing),
                        });
                    }
                    current = existing;
                }
                None => {
                    current = self.add_package(current, segment)?;
                }
            }
        }
        Ok(current)
    }

    fn validate_insert(
        &self,
        parent: NodeId,
        name: &str,
    ) -> Result<(Atom, u32), CatalogError> {
        let parent_data = self
            .node(parent)
            .ok_or(CatalogError::InvalidParent)?;

        if name.is_empty() || name.contains('.') {
            return Err(CatalogError::InvalidSegment {
                name: name.to_string(),
            });
        }
        if parent_data.kind != NodeKind::Package {
            return Err(CatalogError::NotAPackage {
                parent: self.path_of(parent),
            });
        }

        let atom = self.interner.intern(name);
        if parent_data.children.contains_key(&atom) {
            return Err(CatalogError::DuplicateChild {
                parent: self.path_of(parent),
                name: name.to_string(),
            });
        }

        let depth = parent_data.depth + 1;
        if depth > MAX_TREE_DEPTH {
            return Err(CatalogError::TooDeep {
                parent: self.path_of(parent),
            });
        }

        Ok((atom, depth))
    }

    fn allocate(&mut self, data: NodeData) -> Result<NodeId, CatalogError> {
        if self.nodes.len() >= MAX_CATALOG_NODES {
            return Err(CatalogError::Full);
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(data);
        Ok(id)
    }

    fn attach(&mut self, parent: NodeId, atom: Atom, child: NodeId) {
        // validate_insert already proved the parent live and a package
        if let Some(parent_data) = self.nodes.get_mut(parent.0 as usize) {
            parent_data.children.insert(atom, child);
        }
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// Get node data by id. `None` for `INVALID` and out-of-range ids.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get the kind of a node.
    #[inline]
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(|n| n.kind)
    }

    /// Look up a child by interned segment.
    #[inline]
    pub fn child(&self, id: NodeId, segment: Atom) -> Option<NodeId> {
        self.node(id)?.children.get(&segment).copied()
    }

    /// Look up a child by segment text without interning it.
    ///
    /// A segment that was never interned cannot key any child, so unknown
    /// text short-circuits to `None` without growing the interner.
    #[inline]
    pub fn child_named(&self, id: NodeId, segment: &str) -> Option<NodeId> {
        let atom = self.interner.get(segment)?;
        self.child(id, atom)
    }

    /// Get the entity record of a class node.
    #[inline]
    pub fn entity(&self, id: NodeId) -> Option<&ClassEntity> {
        self.node(id)?.entity.as_ref()
    }

    /// Rebuild the dotted path of a node (`"java.io.File"`).
    /// The root (and anything invalid) renders as the empty string.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut segments: Vec<Atom> = Vec::new();
        let mut current = id;
        while let Some(data) = self.node(current) {
            if data.name.is_none() {
                break;
            }
            segments.push(data.name);
            current = data.parent;
        }
        segments.reverse();

        let mut path = String::new();
        for (i, atom) in segments.iter().enumerate() {
            if i > 0 {
                path.push('.');
            }
            path.push_str(&self.interner.resolve(*atom));
        }
        path
    }
}

#[cfg(test)]
#[path = "../tests/catalog_tests.rs"]
mod tests;
