//! Structural type interner.
//!
//! O(1) type equality: every `TypeData` is stored once and addressed by
//! `TypeId`. Union member lists are interned separately (`TypeListId`) so a
//! union is itself a single comparable id.
//!
//! The interner is `&self`-threaded behind an `RwLock`; a catalog and its
//! interner can be shared across threads and queried concurrently. Lock
//! poisoning degrades to the fallback type instead of panicking, same
//! policy as the string interner.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::{Arc, RwLock};

use packtree_catalog::NodeId;
use packtree_common::interner::{Atom, ShardedInterner};

use crate::openness::{Openness, type_openness};
use crate::types::{IntrinsicKind, TypeData, TypeId, TypeListId};

#[derive(Default)]
struct InternState {
    /// `TypeId` -> `TypeData`, indexed by id.
    types: Vec<TypeData>,
    /// `TypeData` -> `TypeId`, the dedup map.
    type_map: FxHashMap<TypeData, TypeId>,
    /// `TypeListId` -> member list, indexed by id.
    lists: Vec<Arc<[TypeId]>>,
    /// Member list -> `TypeListId`, the dedup map.
    list_map: FxHashMap<Arc<[TypeId]>, TypeListId>,
}

/// Interner for the solver's type universe.
///
/// Pre-registers the four intrinsics at fixed ids so `TypeId::ANY`,
/// `TypeId::UNKNOWN`, `TypeId::NEVER`, and `TypeId::STRING` are always
/// valid without touching the lock.
pub struct TypeInterner {
    /// Atom pool for literal path strings.
    atoms: ShardedInterner,
    state: RwLock<InternState>,
}

impl TypeInterner {
    pub fn new() -> Self {
        let mut state = InternState::default();
        for (id, kind) in [
            (TypeId::ANY, IntrinsicKind::Any),
            (TypeId::UNKNOWN, IntrinsicKind::Unknown),
            (TypeId::NEVER, IntrinsicKind::Never),
            (TypeId::STRING, IntrinsicKind::String),
        ] {
            let data = TypeData::Intrinsic(kind);
            debug_assert_eq!(state.types.len(), id.0 as usize);
            state.types.push(data);
            state.type_map.insert(data, id);
        }

        TypeInterner {
            atoms: ShardedInterner::new(),
            state: RwLock::new(state),
        }
    }

    /// Resolve a `TypeId` to its structural payload.
    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        let state = self.state.read().ok()?;
        state.types.get(id.0 as usize).copied()
    }

    /// Number of distinct interned types (including the intrinsics).
    pub fn type_count(&self) -> usize {
        self.state
            .read()
            .map(|state| state.types.len())
            .unwrap_or(TypeId::INTRINSIC_COUNT as usize)
    }

    /// Intern arbitrary type data, deduplicating structurally.
    pub fn intern(&self, data: TypeData) -> TypeId {
        // Fast path: already interned
        if let Ok(state) = self.state.read() {
            if let Some(&id) = state.type_map.get(&data) {
                return id;
            }
        }

        let Ok(mut state) = self.state.write() else {
            return TypeId::UNKNOWN;
        };
        if let Some(&id) = state.type_map.get(&data) {
            return id;
        }
        let id = TypeId(state.types.len() as u32);
        state.types.push(data);
        state.type_map.insert(data, id);
        id
    }

    /// The string literal type for `s`.
    pub fn literal_string(&self, s: &str) -> TypeId {
        self.intern(TypeData::StringLiteral(self.atoms.intern(s)))
    }

    /// The string literal type for an already-built `String`.
    pub fn literal_string_owned(&self, s: String) -> TypeId {
        self.intern(TypeData::StringLiteral(self.atoms.intern_owned(s)))
    }

    /// The class entity type for a catalog node.
    pub fn class_type(&self, node: NodeId) -> TypeId {
        self.intern(TypeData::Class(node))
    }

    /// Intern a raw string into the literal atom pool.
    pub fn intern_string(&self, s: &str) -> Atom {
        self.atoms.intern(s)
    }

    /// Resolve a literal atom back to its text.
    pub fn resolve_atom_ref(&self, atom: Atom) -> Arc<str> {
        self.atoms.resolve(atom)
    }

    /// Build a union, normalizing as it goes:
    ///
    /// - nested unions are flattened
    /// - `never` members vanish
    /// - `any` absorbs the whole union
    /// - `unknown` absorbs everything except `any`
    /// - duplicates collapse; member order is canonical (sorted by id)
    /// - the empty union is `never`; a single survivor is returned bare
    ///
    /// String literals are **not** widened into `string`: the valid-path
    /// union carries both its exact literal members and the free-form
    /// `string` member, and both must remain observable.
    pub fn union(&self, members: Vec<TypeId>) -> TypeId {
        let mut flat: SmallVec<[TypeId; 8]> = SmallVec::new();
        let mut work: SmallVec<[TypeId; 8]> = SmallVec::from_iter(members);
        let mut saw_unknown = false;

        while let Some(id) = work.pop() {
            if type_openness(id) == Openness::Open {
                // `any` wins over everything, including `unknown`
                return TypeId::ANY;
            }
            if id == TypeId::NEVER {
                continue;
            }
            if id == TypeId::UNKNOWN {
                saw_unknown = true;
                continue;
            }
            match self.lookup(id) {
                Some(TypeData::Union(list_id)) => {
                    if let Some(list) = self.list(list_id) {
                        work.extend(list.iter().copied());
                    }
                }
                _ => flat.push(id),
            }
        }

        if saw_unknown {
            return TypeId::UNKNOWN;
        }

        flat.sort_unstable();
        flat.dedup();

        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => {
                let list_id = self.intern_list(&flat);
                self.intern(TypeData::Union(list_id))
            }
        }
    }

    /// Member list of a union type, `None` for non-unions.
    pub fn union_members(&self, id: TypeId) -> Option<Arc<[TypeId]>> {
        match self.lookup(id)? {
            TypeData::Union(list_id) => self.list(list_id),
            _ => None,
        }
    }

    fn list(&self, id: TypeListId) -> Option<Arc<[TypeId]>> {
        let state = self.state.read().ok()?;
        state.lists.get(id.0 as usize).cloned()
    }

    fn intern_list(&self, members: &[TypeId]) -> TypeListId {
        let key: Arc<[TypeId]> = Arc::from(members);

        if let Ok(state) = self.state.read() {
            if let Some(&id) = state.list_map.get(&key) {
                return id;
            }
        }

        let Ok(mut state) = self.state.write() else {
            return TypeListId(0);
        };
        if let Some(&id) = state.list_map.get(&key) {
            return id;
        }
        let id = TypeListId(state.lists.len() as u32);
        state.lists.push(key.clone());
        state.list_map.insert(key, id);
        id
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/intern_tests.rs"]
mod tests;
