//! String interner for path-segment deduplication.
//!
//! Catalog keys repeat constantly: every class under `java.lang` shares the
//! segments `java` and `lang`, and a resolver walking thousands of paths
//! touches the same handful of package names over and over. Interning turns
//! each distinct segment into a u32 handle (an [`Atom`]) so child lookup and
//! segment comparison become integer comparisons instead of string
//! comparisons.
//!
//! The interner is sharded so a catalog shared between threads can be queried
//! without funnelling every lookup through one lock.

use rustc_hash::{FxHashMap, FxHasher};
use serde::Serialize;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

/// An interned string handle.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string back, use [`ShardedInterner::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

const SHARD_BITS: u32 = 6;
const SHARD_COUNT: usize = 1 << SHARD_BITS;
const SHARD_MASK: u32 = (SHARD_COUNT as u32) - 1;

/// Segments and declaration keys that show up in virtually every catalog.
/// Pre-interning them keeps the hot lookups in the first cache lines of each
/// shard.
const COMMON_STRINGS: &[&str] = &[
    // Package segments
    "java",
    "lang",
    "util",
    "io",
    "net",
    "nio",
    "reflect",
    "concurrent",
    "function",
    "stream",
    "file",
    "minecraft",
    "client",
    "server",
    // Class segments
    "Class",
    "Object",
    "String",
    "Integer",
    "Long",
    "Boolean",
    "Double",
    "Float",
    "Character",
    "Number",
    "List",
    "Map",
    "Set",
    "Collection",
    "Iterator",
    "Optional",
    "File",
    "URL",
    "URI",
    "Path",
    "Thread",
    "Runnable",
    "Throwable",
    "Exception",
    "Error",
    "StackTraceElement",
    "System",
    "Math",
    // Declaration keys
    "packages",
    "class",
    "dynamic",
    "constructible",
    "interface",
    "ctors",
    "params",
    "name",
    "type",
    // Parameter type names
    "boolean",
    "int",
    "long",
    "double",
    "string",
];

#[derive(Debug, Default)]
struct ShardState {
    map: FxHashMap<Arc<str>, Atom>,
    strings: Vec<Arc<str>>,
}

#[derive(Debug)]
struct InternerShard {
    state: RwLock<ShardState>,
}

impl InternerShard {
    fn new() -> Self {
        InternerShard {
            state: RwLock::new(ShardState::default()),
        }
    }
}

/// Sharded string interner for concurrent use.
///
/// Uses fixed buckets to reduce lock contention while keeping Atom lookups
/// O(1). The shard index lives in the low bits of the atom so resolution
/// never has to search.
///
/// # Example
/// ```
/// use packtree_common::interner::ShardedInterner;
/// let interner = ShardedInterner::new();
/// let a1 = interner.intern("java");
/// let a2 = interner.intern("java");
/// assert_eq!(a1, a2); // Same atom for same string
/// assert_eq!(&*interner.resolve(a1), "java");
/// ```
#[derive(Debug)]
pub struct ShardedInterner {
    shards: [InternerShard; SHARD_COUNT],
}

impl ShardedInterner {
    /// Create a new sharded interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|_| InternerShard::new());

        // Initialize empty string in shard 0 with safe lock handling
        if let Ok(mut state) = shards[0].state.write() {
            let empty: Arc<str> = Arc::from("");
            state.strings.push(empty.clone());
            state.map.insert(empty, Atom::NONE);
        }

        ShardedInterner { shards }
    }

    /// Intern a string, returning its Atom handle.
    /// If the string was already interned, returns the existing Atom.
    #[inline]
    pub fn intern(&self, s: &str) -> Atom {
        if s.is_empty() {
            return Atom::NONE;
        }

        let shard_idx = Self::shard_for(s);
        let shard = &self.shards[shard_idx];
        let Ok(mut state) = shard.state.write() else {
            // If the lock is poisoned, return a fallback atom so lookups keep
            // working even with corrupted internal state
            return Atom::NONE;
        };

        if let Some(&atom) = state.map.get(s) {
            return atom;
        }

        let local_index = state.strings.len() as u32;
        if local_index > (u32::MAX >> SHARD_BITS) {
            // Return empty atom on overflow instead of panicking
            return Atom::NONE;
        }

        let atom = Self::make_atom(local_index, shard_idx as u32);
        let owned: Arc<str> = Arc::from(s);
        state.strings.push(owned.clone());
        state.map.insert(owned, atom);
        atom
    }

    /// Intern an owned String, avoiding a copy when the string is new.
    ///
    /// Path enumeration builds full dotted paths as `String`s and hands them
    /// straight in here.
    #[inline]
    pub fn intern_owned(&self, s: String) -> Atom {
        if s.is_empty() {
            return Atom::NONE;
        }

        let shard_idx = Self::shard_for(&s);
        let shard = &self.shards[shard_idx];
        let Ok(mut state) = shard.state.write() else {
            return Atom::NONE;
        };

        if let Some(&atom) = state.map.get(s.as_str()) {
            return atom;
        }

        let local_index = state.strings.len() as u32;
        if local_index > (u32::MAX >> SHARD_BITS) {
            return Atom::NONE;
        }

        let atom = Self::make_atom(local_index, shard_idx as u32);
        let owned: Arc<str> = Arc::from(s.into_boxed_str());
        state.strings.push(owned.clone());
        state.map.insert(owned, atom);
        atom
    }

    /// Look up a string without interning it.
    ///
    /// Resolution walks use this for path segments: a segment that was never
    /// interned cannot name any catalog child, so a `None` here is already a
    /// failed lookup.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Atom> {
        if s.is_empty() {
            return Some(Atom::NONE);
        }

        let shard_idx = Self::shard_for(s);
        let shard = self.shards.get(shard_idx)?;
        let state = shard.state.read().ok()?;
        state.map.get(s).copied()
    }

    /// Resolve an Atom back to its string value.
    /// Returns empty string if atom is out of bounds (safety for error recovery).
    #[inline]
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        self.try_resolve(atom).unwrap_or_else(|| Arc::from(""))
    }

    /// Try to resolve an Atom, returning None if invalid.
    #[inline]
    pub fn try_resolve(&self, atom: Atom) -> Option<Arc<str>> {
        let (shard_idx, local_index) = Self::split_atom(atom)?;
        let shard = self.shards.get(shard_idx)?;
        let state = shard.state.read().ok()?; // Return None if lock is poisoned
        state.strings.get(local_index).cloned()
    }

    /// Get the number of interned strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| {
                shard
                    .state
                    .read()
                    .map(|state| state.strings.len())
                    .unwrap_or(0)
            })
            .sum()
    }

    /// Check if the interner is empty (only has the empty string).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Pre-intern common package segments and declaration keys.
    /// Call this after creating the interner for better cache locality.
    pub fn intern_common(&self) {
        for s in COMMON_STRINGS {
            self.intern(s);
        }
    }

    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hasher = FxHasher::default();
        s.hash(&mut hasher);
        (hasher.finish() as usize) & (SHARD_COUNT - 1)
    }

    #[inline]
    fn make_atom(local_index: u32, shard_idx: u32) -> Atom {
        Atom((local_index << SHARD_BITS) | (shard_idx & SHARD_MASK))
    }

    #[inline]
    fn split_atom(atom: Atom) -> Option<(usize, usize)> {
        if atom == Atom::NONE {
            return Some((0, 0));
        }

        let raw = atom.0;
        let shard_idx = (raw & SHARD_MASK) as usize;
        let local_index = (raw >> SHARD_BITS) as usize;
        Some((shard_idx, local_index))
    }
}

impl Default for ShardedInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/interner_tests.rs"]
mod tests;
