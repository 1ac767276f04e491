//! Errors raised while building or loading a catalog.
//!
//! These cover the *construction* surface only. Path resolution never
//! errors: an unresolvable path degrades to the fallback type instead.

/// Error raised by catalog builder operations and the JSON loader.
#[derive(Debug)]
pub enum CatalogError {
    /// A child with this name already exists under the parent.
    DuplicateChild { parent: String, name: String },

    /// A node name was empty or contained a `.` separator.
    InvalidSegment { name: String },

    /// Children can only be attached to package nodes.
    NotAPackage { parent: String },

    /// The parent node id does not name a live node.
    InvalidParent,

    /// Adding the node would exceed the catalog depth limit.
    TooDeep { parent: String },

    /// The catalog node arena is at capacity.
    Full,

    /// The catalog JSON did not parse.
    Parse(serde_json::Error),

    /// The catalog JSON parsed but declared something invalid.
    /// `path` is the dotted path of the offending declaration.
    Decl { path: String, message: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::DuplicateChild { parent, name } => {
                write!(f, "duplicate child `{name}` under `{parent}`")
            }
            CatalogError::InvalidSegment { name } => {
                write!(f, "invalid segment name `{name}` (must be non-empty, without `.`)")
            }
            CatalogError::NotAPackage { parent } => {
                write!(f, "`{parent}` is not a package; only packages can have children")
            }
            CatalogError::InvalidParent => {
                write!(f, "parent node id does not name a live node")
            }
            CatalogError::TooDeep { parent } => {
                write!(f, "catalog depth limit reached under `{parent}`")
            }
            CatalogError::Full => {
                write!(f, "catalog node arena is full")
            }
            CatalogError::Parse(err) => {
                write!(f, "catalog JSON did not parse: {err}")
            }
            CatalogError::Decl { path, message } => {
                if path.is_empty() {
                    write!(f, "invalid catalog declaration at root: {message}")
                } else {
                    write!(f, "invalid catalog declaration at `{path}`: {message}")
                }
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}
