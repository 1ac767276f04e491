use super::*;
use crate::intern::TypeInterner;
use crate::types::TypeData;
use packtree_catalog::{Catalog, ClassEntity, ClassFlags, CtorSignature, jvm_core};

fn ctor_entity() -> ClassEntity {
    ClassEntity::constructible(vec![CtorSignature::default()])
}

/// `{ a: { b: { C: <constructible> } }, x: { y: <constructible> } }`
fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    let root = catalog.root();
    let a = catalog.add_package(root, "a").expect("add a");
    let b = catalog.add_package(a, "b").expect("add b");
    catalog.add_class(b, "C", ctor_entity()).expect("add C");
    let x = catalog.add_package(root, "x").expect("add x");
    catalog.add_class(x, "y", ctor_entity()).expect("add y");
    catalog
}

/// Literal texts of a union's string-literal members, in member order.
fn literal_texts(types: &TypeInterner, id: TypeId) -> Vec<String> {
    let members = types.union_members(id).expect("expected a union type");
    members
        .iter()
        .filter_map(|&member| match types.lookup(member) {
            Some(TypeData::StringLiteral(atom)) => {
                Some(types.resolve_atom_ref(atom).to_string())
            }
            _ => None,
        })
        .collect()
}

#[test]
fn test_class_paths_in_declaration_order() {
    let catalog = sample_catalog();
    let types = TypeInterner::new();
    let solver = PathSolver::new(&catalog, &types);

    assert_eq!(solver.class_paths(), vec!["a.b.C", "x.y"]);
}

#[test]
fn test_valid_paths_union_shape() {
    let catalog = sample_catalog();
    let types = TypeInterner::new();
    let solver = PathSolver::new(&catalog, &types);

    let valid = solver.valid_paths();
    let members = types.union_members(valid).expect("union");

    // One literal per class path, plus the free-form string member;
    // the literals stay distinct alongside `string`.
    assert_eq!(members.len(), 3);
    assert!(members.contains(&TypeId::STRING));
    assert_eq!(literal_texts(&types, valid), vec!["a.b.C", "x.y"]);
}

#[test]
fn test_valid_paths_of_empty_catalog() {
    let catalog = Catalog::new();
    let types = TypeInterner::new();
    let solver = PathSolver::new(&catalog, &types);

    assert!(solver.class_paths().is_empty());
    // No literals to union in: the result is plain `string`
    assert_eq!(solver.valid_paths(), TypeId::STRING);
}

#[test]
fn test_open_subtree_contributes_no_paths() {
    // `{ a: open, x: { y: <constructible> } }`
    let mut catalog = Catalog::new();
    let root = catalog.root();
    catalog.add_dynamic(root, "a").expect("add dynamic");
    let x = catalog.add_package(root, "x").expect("add x");
    catalog.add_class(x, "y", ctor_entity()).expect("add y");
    let types = TypeInterner::new();
    let solver = PathSolver::new(&catalog, &types);

    assert_eq!(solver.class_paths(), vec!["x.y"]);
    assert_eq!(literal_texts(&types, solver.valid_paths()), vec!["x.y"]);
}

#[test]
fn test_only_open_subtrees_yield_bare_string() {
    let mut catalog = Catalog::new();
    let root = catalog.root();
    catalog.add_dynamic(root, "a").expect("add a");
    catalog.add_dynamic(root, "b").expect("add b");
    let types = TypeInterner::new();
    let solver = PathSolver::new(&catalog, &types);

    assert!(solver.class_paths().is_empty());
    assert_eq!(solver.valid_paths(), TypeId::STRING);
}

#[test]
fn test_open_child_prunes_only_its_subtree() {
    let mut catalog = Catalog::new();
    let root = catalog.root();
    let p = catalog.add_package(root, "p").expect("add p");
    catalog.add_dynamic(p, "open").expect("add open");
    catalog.add_class(p, "C", ctor_entity()).expect("add C");
    let types = TypeInterner::new();
    let solver = PathSolver::new(&catalog, &types);

    assert_eq!(solver.class_paths(), vec!["p.C"]);
}

#[test]
fn test_non_constructible_entities_are_enumerated() {
    let mut catalog = Catalog::new();
    let util = catalog.ensure_package_path("java.util").expect("path");
    catalog
        .add_class(util, "List", ClassEntity::opaque(ClassFlags::INTERFACE))
        .expect("add List");
    let types = TypeInterner::new();
    let solver = PathSolver::new(&catalog, &types);

    assert_eq!(solver.class_paths(), vec!["java.util.List"]);
}

#[test]
fn test_path_index_agrees_with_resolver() {
    let catalog = sample_catalog();
    let types = TypeInterner::new();
    let solver = PathSolver::new(&catalog, &types);

    let index = solver.path_index();
    assert_eq!(index.len(), 2);
    assert!(!index.is_empty());

    for (path, node) in index.iter() {
        assert_eq!(solver.resolve_node(path), Some(node));
    }

    assert!(index.contains("a.b.C"));
    assert!(index.contains("x.y"));
    assert_eq!(index.get("a.b"), None);
    assert_eq!(index.get("a.b.Z"), None);
    assert_eq!(index.get(""), None);
}

#[test]
fn test_path_index_order_matches_class_paths() {
    let catalog = sample_catalog();
    let types = TypeInterner::new();
    let solver = PathSolver::new(&catalog, &types);

    let ordered: Vec<String> = solver
        .path_index()
        .iter()
        .map(|(path, _)| path.to_string())
        .collect();
    assert_eq!(ordered, solver.class_paths());
}

#[test]
fn test_bundled_catalog_paths_all_resolve() {
    let catalog = jvm_core();
    let types = TypeInterner::new();
    let solver = PathSolver::new(catalog, &types);

    let paths = solver.class_paths();
    assert!(paths.contains(&"java.lang.Class".to_string()));
    assert!(paths.contains(&"java.io.File".to_string()));
    assert!(paths.contains(&"java.net.URI".to_string()));

    // Every enumerated path resolves to the node the walk visited
    let index = solver.path_index();
    assert_eq!(index.len(), paths.len());
    for path in &paths {
        let node = index.get(path).expect("indexed path");
        assert_eq!(solver.resolve(path), types.class_type(node));
    }

    // Namespaces and the open net.minecraft subtree stay unresolved
    assert_eq!(solver.resolve("java"), TypeId::UNKNOWN);
    assert_eq!(solver.resolve("java.util"), TypeId::UNKNOWN);
    assert_eq!(solver.resolve("net.minecraft"), TypeId::UNKNOWN);
    assert_eq!(solver.resolve("net.minecraft.Block"), TypeId::UNKNOWN);
    assert!(!paths.iter().any(|p| p.starts_with("net.minecraft")));
}
