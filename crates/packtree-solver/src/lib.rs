//! Path resolution and enumeration over packtree catalogs.
//!
//! The solver answers two symmetric questions about one catalog:
//!
//! - **resolve**: what type does this dotted path name? (`PathSolver::resolve`)
//! - **enumerate**: which dotted paths name class entities?
//!   (`PathSolver::class_paths` / `valid_paths` / `path_index`)
//!
//! Both walks consult the openness guard at every node, so declared-open
//! subtrees degrade to the fallback type instead of leaking structural
//! guesses. Results live in an interned type universe:
//!
//! - O(1) type equality via interning (`TypeId` comparison)
//! - Union normalization with `any`-absorption and `unknown`-domination
//! - String literal members kept distinct from `string`

pub mod types;
pub use types::{IntrinsicKind, TypeData, TypeId, TypeListId};

pub mod intern;
pub use intern::TypeInterner;

pub mod openness;
pub use openness::{Openness, node_openness, type_openness};

pub mod solver;
pub use solver::PathSolver;

mod resolve;

pub mod enumerate;
pub use enumerate::PathIndex;

pub mod format;
pub use format::TypeFormatter;
