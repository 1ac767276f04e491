//! Human-readable rendering of solver types.
//!
//! Used by the CLI and by test failure output. Rendering needs both halves
//! of the solver: the interner for structure and atoms, the catalog for
//! rebuilding class paths and constructor signatures.

use packtree_catalog::{Catalog, CtorSignature};

use crate::intern::TypeInterner;
use crate::types::{TypeData, TypeId};

/// Renders `TypeId`s as display strings.
pub struct TypeFormatter<'a> {
    catalog: &'a Catalog,
    types: &'a TypeInterner,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(catalog: &'a Catalog, types: &'a TypeInterner) -> Self {
        TypeFormatter { catalog, types }
    }

    /// Render a type:
    ///
    /// - intrinsics by name (`unknown`, `string`, ...)
    /// - string literals quoted (`"java.io.File"`)
    /// - class entities as `class <dotted path>`, with the overload count
    ///   appended when the entity is constructible (`class java.io.File
    ///   (4 ctors)`)
    /// - unions as ` | `-joined members
    pub fn format(&self, id: TypeId) -> String {
        // The reserved ids render without touching the interner.
        if id.is_intrinsic() {
            return match id {
                TypeId::ANY => "any",
                TypeId::UNKNOWN => "unknown",
                TypeId::NEVER => "never",
                _ => "string",
            }
            .to_string();
        }

        match self.types.lookup(id) {
            Some(TypeData::StringLiteral(atom)) => {
                format!("\"{}\"", self.types.resolve_atom_ref(atom))
            }
            Some(TypeData::Class(node)) => {
                let path = self.catalog.path_of(node);
                match self.catalog.entity(node) {
                    Some(entity) if entity.ctors.len() == 1 => {
                        format!("class {path} (1 ctor)")
                    }
                    Some(entity) if !entity.ctors.is_empty() => {
                        format!("class {path} ({} ctors)", entity.ctors.len())
                    }
                    _ => format!("class {path}"),
                }
            }
            Some(TypeData::Union(_)) => {
                let members = self.types.union_members(id).unwrap_or_default();
                let rendered: Vec<String> =
                    members.iter().map(|member| self.format(*member)).collect();
                rendered.join(" | ")
            }
            // Intrinsic data only lives at the reserved ids handled above;
            // ids from a foreign interner have no structure here.
            Some(TypeData::Intrinsic(_)) | None => "unknown".to_string(),
        }
    }

    /// Render one construction signature: `new(pathName: string)`.
    pub fn format_ctor(&self, ctor: &CtorSignature) -> String {
        let interner = self.catalog.interner();
        let params: Vec<String> = ctor
            .params
            .iter()
            .map(|p| {
                format!(
                    "{}: {}",
                    interner.resolve(p.name),
                    interner.resolve(p.type_name)
                )
            })
            .collect();
        format!("new({})", params.join(", "))
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
