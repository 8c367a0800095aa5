use crate::{Error, HashTable, Object, TableConfig};

#[test]
fn default_config() {
    let config = TableConfig::default();
    assert_eq!(config, TableConfig::new());
    assert_eq!(config.initial_capacity(), 8);
    assert_eq!(config.chain_ceiling(), 4);
}

#[test]
fn capacity_rounded_up() {
    let table: HashTable<()> =
        HashTable::with_config(TableConfig::new().with_initial_capacity(5)).unwrap();
    assert_eq!(table.capacity(), 8);

    let table: HashTable<()> =
        HashTable::with_config(TableConfig::new().with_initial_capacity(1)).unwrap();
    assert_eq!(table.capacity(), 1);
}

#[test]
fn zero_capacity_rejected() {
    let err = HashTable::<()>::with_config(TableConfig::new().with_initial_capacity(0)).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidConfig {
            field: "initial_capacity",
            reason: "must be at least 1",
        }
    );
}

#[test]
fn zero_ceiling_rejected() {
    let err = Object::with_config(TableConfig::new().with_chain_ceiling(0)).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { field: "chain_ceiling", .. }));
    assert_eq!(err.to_string(), "invalid table config: chain_ceiling must be at least 1");
}

#[test]
fn oversized_capacity_rejected() {
    let err = HashTable::<()>::with_config(TableConfig::new().with_initial_capacity(usize::MAX))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { field: "initial_capacity", .. }));
}

#[test]
fn single_bucket_table_grows() {
    let mut table = HashTable::with_config(TableConfig::new().with_initial_capacity(1)).unwrap();
    for i in 0..20 {
        assert!(table.put(i, i).is_inserted());
    }
    assert!(table.capacity() > 1);
    for i in 0..20 {
        assert_eq!(table.get(i), Some(&i));
    }
}
