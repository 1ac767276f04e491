use super::*;

#[test]
fn test_interner_intrinsics() {
    let interner = TypeInterner::new();

    // Intrinsics are pre-registered at fixed ids
    assert_eq!(
        interner.lookup(TypeId::ANY),
        Some(TypeData::Intrinsic(IntrinsicKind::Any))
    );
    assert_eq!(
        interner.lookup(TypeId::UNKNOWN),
        Some(TypeData::Intrinsic(IntrinsicKind::Unknown))
    );
    assert_eq!(
        interner.lookup(TypeId::NEVER),
        Some(TypeData::Intrinsic(IntrinsicKind::Never))
    );
    assert_eq!(
        interner.lookup(TypeId::STRING),
        Some(TypeData::Intrinsic(IntrinsicKind::String))
    );
    assert_eq!(interner.type_count(), TypeId::INTRINSIC_COUNT as usize);
}

#[test]
fn test_interner_deduplication() {
    let interner = TypeInterner::new();

    let id1 = interner.literal_string("java.io.File");
    let id2 = interner.literal_string("java.io.File");
    let id3 = interner.literal_string("java.net.URL");

    assert_eq!(id1, id2);
    assert_ne!(id1, id3);
}

#[test]
fn test_literal_string_owned_matches_borrowed() {
    let interner = TypeInterner::new();

    let borrowed = interner.literal_string("x.y");
    let owned = interner.literal_string_owned(String::from("x.y"));
    assert_eq!(borrowed, owned);
}

#[test]
fn test_class_type_deduplication() {
    let interner = TypeInterner::new();

    let id1 = interner.class_type(NodeId(7));
    let id2 = interner.class_type(NodeId(7));
    let id3 = interner.class_type(NodeId(8));

    assert_eq!(id1, id2);
    assert_ne!(id1, id3);
    assert_eq!(interner.lookup(id1), Some(TypeData::Class(NodeId(7))));
}

#[test]
fn test_atom_round_trip() {
    let interner = TypeInterner::new();

    let atom = interner.intern_string("a.b.C");
    assert_eq!(&*interner.resolve_atom_ref(atom), "a.b.C");
}

#[test]
fn test_union_normalization() {
    let interner = TypeInterner::new();

    // Union with single member returns that member
    let single = interner.union(vec![TypeId::STRING]);
    assert_eq!(single, TypeId::STRING);

    // Union with `any` is `any`
    let with_any = interner.union(vec![TypeId::STRING, TypeId::ANY]);
    assert_eq!(with_any, TypeId::ANY);

    // Union with `never` excludes `never`
    let with_never = interner.union(vec![TypeId::STRING, TypeId::NEVER]);
    assert_eq!(with_never, TypeId::STRING);

    // Empty union is `never`
    let empty = interner.union(vec![]);
    assert_eq!(empty, TypeId::NEVER);

    // `unknown` dominates everything that is not `any`
    let lit = interner.literal_string("a.b.C");
    let with_unknown = interner.union(vec![lit, TypeId::UNKNOWN, TypeId::STRING]);
    assert_eq!(with_unknown, TypeId::UNKNOWN);

    // ... but `any` beats `unknown`
    let any_unknown = interner.union(vec![TypeId::UNKNOWN, TypeId::ANY]);
    assert_eq!(any_unknown, TypeId::ANY);
}

#[test]
fn test_union_deduplicates_and_is_order_independent() {
    let interner = TypeInterner::new();

    let a = interner.literal_string("a.b.C");
    let b = interner.literal_string("x.y");

    let u1 = interner.union(vec![a, b, a, b]);
    let u2 = interner.union(vec![b, a]);
    assert_eq!(u1, u2);

    let members = interner.union_members(u1).expect("union members");
    assert_eq!(members.len(), 2);
}

#[test]
fn test_union_flattens_nested_unions() {
    let interner = TypeInterner::new();

    let a = interner.literal_string("a.b.C");
    let b = interner.literal_string("x.y");
    let inner = interner.union(vec![a, b]);

    let c = interner.literal_string("p.Q");
    let outer = interner.union(vec![inner, c]);

    let members = interner.union_members(outer).expect("union members");
    assert_eq!(members.len(), 3);
    assert!(members.contains(&a));
    assert!(members.contains(&b));
    assert!(members.contains(&c));

    // Flattening is canonical: building it flat gives the same id
    assert_eq!(outer, interner.union(vec![a, b, c]));
}

#[test]
fn test_union_keeps_literals_next_to_string() {
    let interner = TypeInterner::new();

    let a = interner.literal_string("a.b.C");
    let b = interner.literal_string("x.y");
    let union = interner.union(vec![TypeId::STRING, a, b]);

    // `string` must not swallow its literal co-members
    assert_ne!(union, TypeId::STRING);
    let members = interner.union_members(union).expect("union members");
    assert_eq!(members.len(), 3);
    assert!(members.contains(&TypeId::STRING));
    assert!(members.contains(&a));
    assert!(members.contains(&b));
}

#[test]
fn test_union_list_interned_once() {
    let interner = TypeInterner::new();

    let a = interner.literal_string("a.b.C");
    let b = interner.literal_string("x.y");

    let u1 = interner.union(vec![a, b]);
    let u2 = interner.union(vec![b, a, b]);
    assert_eq!(u1, u2);

    let before = interner.type_count();
    let _ = interner.union(vec![a, b]);
    assert_eq!(interner.type_count(), before);
}

#[test]
fn test_intrinsic_id_range() {
    let interner = TypeInterner::new();

    assert!(TypeId::ANY.is_intrinsic());
    assert!(TypeId::UNKNOWN.is_intrinsic());
    assert!(TypeId::NEVER.is_intrinsic());
    assert!(TypeId::STRING.is_intrinsic());

    // Everything the interner mints afterwards falls outside the range
    assert!(!interner.literal_string("a.b.C").is_intrinsic());
    assert!(!interner.class_type(NodeId(7)).is_intrinsic());
}
