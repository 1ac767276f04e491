//! Node identifiers and per-node data for the catalog tree.
//!
//! The catalog is an arena of nodes addressed by `NodeId`. Three node kinds
//! cover everything a host package tree contains:
//!
//! | Kind | Children | Entity record | Resolves to |
//! |---------|----------|---------------|-------------|
//! | Package | Yes | No | fallback (`unknown`) |
//! | Class | No | Yes | the class entity type |
//! | Dynamic | No | No | fallback, and poisons the whole subtree |
//!
//! The walkers never ask "does this node have children" to decide whether a
//! path has terminated; they ask "does this node carry an entity record".
//! That keeps non-constructible class statics (interface holders like
//! `java.util.List`) valid path targets even though nothing can be `new`ed
//! from them.

use bitflags::bitflags;
use packtree_common::interner::Atom;

use crate::catalog::FxIndexMap;

// =============================================================================
// NodeId - Catalog-Owned Node Identifier
// =============================================================================

/// Catalog-owned node identifier.
///
/// A plain arena index: cheap to copy, meaningful only together with the
/// `Catalog` that allocated it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value for invalid `NodeId`.
    pub const INVALID: Self = Self(0);

    /// First valid `NodeId` (the root).
    pub const FIRST_VALID: u32 = 1;

    /// Check if this `NodeId` is valid.
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

// =============================================================================
// NodeKind - Node Kind
// =============================================================================

/// Kind of catalog node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Namespace level: a keyed collection of child nodes.
    /// `java`, `java.lang`
    Package,

    /// Class entity: a terminal the resolver can return.
    /// `java.io.File`
    Class,

    /// Open subtree: contents unknowable at build time.
    /// Walking into one always produces the fallback type.
    Dynamic,
}

// =============================================================================
// Class Entities
// =============================================================================

bitflags! {
    /// Properties of a class entity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClassFlags: u8 {
        /// The entity can actually be constructed. Entities without this
        /// flag (interface statics, `java.lang.Class`) still resolve and
        /// still appear in path enumeration; they just advertise no usable
        /// construction signature.
        const CONSTRUCTIBLE = 1 << 0;
        /// The host-side declaration is an interface.
        const INTERFACE = 1 << 1;
    }
}

/// One parameter of a construction signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDecl {
    /// Parameter name (for display only).
    pub name: Atom,
    /// Host-side type name, uninterpreted. The resolver treats these as
    /// opaque labels; it never looks the name back up in the catalog.
    pub type_name: Atom,
}

/// One construction signature (one constructor overload).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CtorSignature {
    pub params: Vec<ParamDecl>,
}

/// The entity record attached to every `Class` node.
///
/// Presence of this record is what makes a node a valid path target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassEntity {
    pub flags: ClassFlags,
    /// Constructor overloads, in declaration order. Empty for
    /// non-constructible entities.
    pub ctors: Vec<CtorSignature>,
}

impl ClassEntity {
    /// An entity with no usable construction signature.
    pub const fn opaque(flags: ClassFlags) -> Self {
        Self {
            flags,
            ctors: Vec::new(),
        }
    }

    /// A constructible entity with the given overloads.
    pub fn constructible(ctors: Vec<CtorSignature>) -> Self {
        Self {
            flags: ClassFlags::CONSTRUCTIBLE,
            ctors,
        }
    }

    /// Whether construction is allowed at all.
    pub fn is_constructible(&self) -> bool {
        self.flags.contains(ClassFlags::CONSTRUCTIBLE)
    }
}

// =============================================================================
// NodeData - Stored Node Data
// =============================================================================

/// Complete information about one catalog node.
///
/// Stored in the `Catalog` arena and retrieved by `NodeId`.
#[derive(Clone, Debug)]
pub struct NodeData {
    /// Kind of node (drives walker behavior)
    pub kind: NodeKind,

    /// Last path segment naming this node (`File` for `java.io.File`).
    /// `Atom::NONE` for the root.
    pub name: Atom,

    /// Parent node, `NodeId::INVALID` for the root. Used to rebuild dotted
    /// paths for display and errors.
    pub parent: NodeId,

    /// Distance from the root (root is 0).
    pub depth: u32,

    /// Children keyed by segment atom, in declaration order.
    /// Always empty for class and dynamic nodes.
    pub children: FxIndexMap<Atom, NodeId>,

    /// The entity record. `Some` exactly for `Class` nodes.
    pub entity: Option<ClassEntity>,
}

impl NodeData {
    /// Create a package node.
    pub fn package(name: Atom, parent: NodeId, depth: u32) -> Self {
        Self {
            kind: NodeKind::Package,
            name,
            parent,
            depth,
            children: FxIndexMap::default(),
            entity: None,
        }
    }

    /// Create a class node carrying its entity record.
    pub fn class(name: Atom, parent: NodeId, depth: u32, entity: ClassEntity) -> Self {
        Self {
            kind: NodeKind::Class,
            name,
            parent,
            depth,
            children: FxIndexMap::default(),
            entity: Some(entity),
        }
    }

    /// Create a dynamic (open) node.
    pub fn dynamic(name: Atom, parent: NodeId, depth: u32) -> Self {
        Self {
            kind: NodeKind::Dynamic,
            name,
            parent,
            depth,
            children: FxIndexMap::default(),
            entity: None,
        }
    }
}
