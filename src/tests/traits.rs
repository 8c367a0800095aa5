use crate::{HashTable, InsertResult, Object, Value};

#[test]
fn default_is_empty() {
    let table: HashTable<i32> = HashTable::default();
    assert!(table.is_empty());
    assert!(Object::default().is_empty());
}

#[test]
fn debug_format() {
    let table: HashTable<i32> = HashTable::new();
    let dbg = format!("{table:?}");
    assert!(dbg.contains("HashTable"));
    assert!(dbg.contains("len"));
    assert!(dbg.contains("capacity"));
}

#[test]
fn entry_debug_shows_hash_in_hex() {
    let mut table = HashTable::new();
    let _ = table.put(0xAB, 1);
    let dbg = format!("{:?}", table.find(0xAB).unwrap().entry);
    assert!(dbg.contains("0x000000ab"), "{dbg}");
}

#[test]
fn table_into_iterator() {
    let mut table = HashTable::new();
    let _ = table.put(1, 'a');
    let _ = table.put(2, 'b');
    let mut count = 0;
    for (_, value) in &table {
        assert!(matches!(value, 'a' | 'b'));
        count += 1;
    }
    assert_eq!(count, 2);
}

#[test]
fn object_into_iterator() {
    let object: Object = [("x", Value::null())].into_iter().collect();
    let keys: Vec<&str> = (&object).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["x"]);
}

#[test]
fn object_extend() {
    let mut object = Object::new();
    let _ = object.put("a", Value::null());
    object.extend(vec![
        (String::from("a"), Value::boolean(true)),
        (String::from("b"), Value::null()),
    ]);
    assert_eq!(object.len(), 2);
    assert_eq!(object.get("a"), Some(&Value::Null));
}

#[test]
fn insert_result_helpers() {
    let inserted: InsertResult<i32> = InsertResult::Inserted;
    assert!(inserted.is_inserted());
    assert_eq!(inserted.rejected(), None);

    let exists = InsertResult::Exists(5);
    assert!(!exists.is_inserted());
    assert_eq!(exists.rejected(), Some(5));
}
