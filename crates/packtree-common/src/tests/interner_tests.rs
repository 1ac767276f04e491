use super::*;

#[test]
fn test_intern_deduplication() {
    let interner = ShardedInterner::new();

    let a1 = interner.intern("java");
    let a2 = interner.intern("java");
    let a3 = interner.intern("lang");

    assert_eq!(a1, a2);
    assert_ne!(a1, a3);
    assert_eq!(&*interner.resolve(a1), "java");
    assert_eq!(&*interner.resolve(a3), "lang");
}

#[test]
fn test_intern_empty_is_none() {
    let interner = ShardedInterner::new();

    assert_eq!(interner.intern(""), Atom::NONE);
    assert!(interner.intern("").is_none());
    assert_eq!(&*interner.resolve(Atom::NONE), "");
}

#[test]
fn test_intern_owned_matches_borrowed() {
    let interner = ShardedInterner::new();

    let borrowed = interner.intern("java.io.File");
    let owned = interner.intern_owned(String::from("java.io.File"));
    assert_eq!(borrowed, owned);
}

#[test]
fn test_get_does_not_intern() {
    let interner = ShardedInterner::new();

    assert_eq!(interner.get("NoSuchSegment"), None);
    let before = interner.len();
    assert_eq!(interner.get("NoSuchSegment"), None);
    assert_eq!(interner.len(), before);

    let atom = interner.intern("NoSuchSegment");
    assert_eq!(interner.get("NoSuchSegment"), Some(atom));
}

#[test]
fn test_get_empty_is_none_atom() {
    let interner = ShardedInterner::new();
    assert_eq!(interner.get(""), Some(Atom::NONE));
}

#[test]
fn test_try_resolve_out_of_bounds() {
    let interner = ShardedInterner::new();
    // An atom from a local index no shard has reached yet
    assert_eq!(interner.try_resolve(Atom(u32::MAX)), None);
}

#[test]
fn test_intern_common_round_trips() {
    let interner = ShardedInterner::new();
    interner.intern_common();

    for s in ["java", "util", "Class", "packages", "dynamic"] {
        let atom = interner.get(s).unwrap_or(Atom::NONE);
        assert!(!atom.is_none(), "{s} should be pre-interned");
        assert_eq!(&*interner.resolve(atom), s);
    }
}

#[test]
fn test_concurrent_interning_agrees() {
    use std::sync::Arc;

    let interner = Arc::new(ShardedInterner::new());
    let segments: Vec<String> = (0..64).map(|i| format!("segment{i}")).collect();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let interner = Arc::clone(&interner);
        let segments = segments.clone();
        handles.push(std::thread::spawn(move || {
            segments.iter().map(|s| interner.intern(s)).collect::<Vec<_>>()
        }));
    }

    let results: Vec<Vec<Atom>> = handles
        .into_iter()
        .map(|h| h.join().expect("interner thread panicked"))
        .collect();

    // Every thread must observe the same atom for the same string
    for atoms in &results[1..] {
        assert_eq!(atoms, &results[0]);
    }
    for (i, atom) in results[0].iter().enumerate() {
        assert_eq!(&*interner.resolve(*atom), segments[i].as_str());
    }
}
