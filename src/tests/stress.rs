use crate::hash::hash_str;
use crate::{HashTable, Value, serialized_len, to_bytes};

/// 1000 entries: insert all, verify all, remove all.
#[test]
fn thousand_entries() {
    let mut table = HashTable::new();
    for i in 0_u32..1000 {
        assert!(table.put(i, i * 3).is_inserted());
    }
    assert_eq!(table.len(), 1000);

    for i in 0_u32..1000 {
        assert_eq!(table.get(i), Some(&(i * 3)), "missing hash {i}");
    }

    for i in 0_u32..1000 {
        assert!(table.remove(i).is_some(), "failed to remove hash {i}");
    }
    assert!(table.is_empty());
}

/// Hashes sharing low bits crowd the same buckets and force spills.
#[test]
fn clustered_hashes() {
    let mut table = HashTable::new();
    for i in 0_u32..500 {
        assert!(table.put(i << 10, i).is_inserted());
    }
    assert_eq!(table.len(), 500);
    for i in 0_u32..500 {
        assert_eq!(table.get(i << 10), Some(&i));
    }
}

/// Insert + remove + reinsert interleaved.
#[test]
fn interleaved_operations() {
    let mut table = HashTable::new();
    for i in 0_u32..200 {
        let _ = table.put(i, i);
    }
    for i in (1_u32..200).step_by(2) {
        assert!(table.remove(i).is_some());
    }
    for i in (1_u32..200).step_by(2) {
        assert!(table.put(i, i + 1000).is_inserted(), "reinsert {i}");
    }
    for i in (0_u32..200).step_by(2) {
        assert!(!table.put(i, 0).is_inserted(), "duplicate {i} accepted");
    }
    assert_eq!(table.len(), 200);
    for i in 0_u32..200 {
        let expected = if i % 2 == 1 { i + 1000 } else { i };
        assert_eq!(table.get(i), Some(&expected));
    }
}

/// Iteration visits every stored entry exactly once.
#[test]
fn iteration_is_complete() {
    let mut table = HashTable::new();
    let mut stored = Vec::new();
    for i in 0..3000 {
        let hash = hash_str(&i.to_string());
        if table.put(hash, i).is_inserted() {
            stored.push(hash);
        }
    }
    let mut seen: Vec<u32> = table.iter().map(|(h, _)| h).collect();
    seen.sort_unstable();
    stored.sort_unstable();
    assert_eq!(seen, stored);
}

/// A wide object round-trips through the serializer with every pair present.
#[test]
fn wide_object_serializes_every_pair() {
    let mut root = Value::object();
    let object = root.as_object_mut().unwrap();
    for i in 0..300 {
        let _ = object.put(&format!("k{i}"), Value::number(f64::from(i)));
    }
    let text = String::from_utf8(to_bytes(&root).unwrap()).unwrap();
    for i in 0..300 {
        assert!(text.contains(&format!("\"k{i}\": {i}")), "missing k{i}");
    }
    assert_eq!(text.matches(", ").count(), 299);
}

/// A long chain of nested arrays drops without trouble.
#[test]
fn deep_nesting() {
    let mut value = Value::null();
    for _ in 0..1000 {
        value = Value::from(vec![value]);
    }
    assert_eq!(serialized_len(&value), Ok(2000 + 4));
}
