//! Type representation for path resolution results.
//!
//! Every type the solver can produce is interned and addressed by `TypeId`,
//! so equality is one u32 comparison and the same structural type is never
//! stored twice. The universe here is deliberately tiny: four intrinsics,
//! string literals, unions, and class entity types:
//!
//! | Type | Produced by |
//! |-----------------|-------------------------------------------------|
//! | `any` | open subtrees (the poisoning intrinsic) |
//! | `unknown` | every failed resolution (the fallback) |
//! | `never` | the empty union |
//! | `string` | the free-form member of the valid-path union |
//! | string literal | one enumerated dotted path |
//! | union | the valid-path set |
//! | class | one successfully resolved entity |

use packtree_catalog::NodeId;
use packtree_common::interner::Atom;

// =============================================================================
// TypeId - Interned Type Handle
// =============================================================================

/// Interned type handle. Compare with `==`; resolve structure through
/// [`crate::intern::TypeInterner::lookup`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// The fully unconstrained type. This is what an open subtree "contains";
    /// it absorbs everything it is unioned with.
    pub const ANY: TypeId = TypeId(0);

    /// The fallback type: the one safe answer for every resolution that
    /// cannot be proven to land on a class entity.
    pub const UNKNOWN: TypeId = TypeId(1);

    /// The uninhabited type: what an empty enumeration collapses to.
    pub const NEVER: TypeId = TypeId(2);

    /// The unconstrained string type: the ergonomic extra member of the
    /// valid-path union.
    pub const STRING: TypeId = TypeId(3);

    /// Number of pre-registered intrinsic ids.
    pub const INTRINSIC_COUNT: u32 = 4;

    /// Whether this id is one of the pre-registered intrinsics.
    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        self.0 < Self::INTRINSIC_COUNT
    }
}

// =============================================================================
// TypeData - Structural Type Representation
// =============================================================================

/// Interned handle to a normalized union member list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeListId(pub u32);

/// The intrinsic (non-structural) types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    Never,
    String,
}

/// Structural payload behind a `TypeId`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    /// One of the four intrinsics.
    Intrinsic(IntrinsicKind),

    /// A single string literal type, e.g. `"java.io.File"`.
    StringLiteral(Atom),

    /// A union of two or more distinct member types. Normalization
    /// guarantees the list is sorted, deduplicated, and free of `never`,
    /// `any`, and `unknown` members.
    Union(TypeListId),

    /// The type of a resolved class entity. The `NodeId` points back into
    /// the catalog the type was resolved against.
    Class(NodeId),
}
