use super::*;
use crate::catalog::{Catalog, MAX_PRICE};
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use std::sync::Arc;
use std::time::Duration;

/// Store whose reads and writes always fail, as on a full or unreadable disk
struct FailingKeyValueStore;

impl KeyValueStore for FailingKeyValueStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(std::io::Error::other("disk unreadable").into())
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(std::io::Error::other("disk full").into())
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(std::io::Error::other("disk full").into())
    }
}

fn failing_store() -> BasketStore {
    BasketStore::restore_with(
        Arc::new(FailingKeyValueStore),
        Arc::new(ManualClock::new()),
        Duration::from_millis(DEFAULT_ANIMATION_MS),
    )
}

fn catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

fn store_with(storage: Arc<MemoryKeyValueStore>) -> (BasketStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let store = BasketStore::restore_with(
        storage,
        clock.clone(),
        Duration::from_millis(DEFAULT_ANIMATION_MS),
    );
    (store, clock)
}

fn empty_store() -> (BasketStore, Arc<MemoryKeyValueStore>, Arc<ManualClock>) {
    let storage = Arc::new(MemoryKeyValueStore::new());
    let (store, clock) = store_with(storage.clone());
    (store, storage, clock)
}

fn stored_lines(storage: &MemoryKeyValueStore) -> Option<serde_json::Value> {
    storage
        .get(BASKET_STORAGE_KEY)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

#[test]
fn test_totals_follow_set_quantity() {
    let catalog = catalog();
    let (mut basket, _, _) = empty_store();

    basket.set_quantity("alaska-a5", 3).unwrap();
    basket.set_quantity("blue-dream-b3", 2).unwrap();
    assert_eq!(basket.total_units(), 5);
    assert_eq!(basket.total_price(&catalog), Decimal::from(1457)); // 3*299 + 2*280

    basket.set_quantity("alaska-a5", 0).unwrap();
    assert_eq!(basket.total_units(), 2);
    assert_eq!(basket.total_price(&catalog), Decimal::from(560));
}

#[test]
fn test_set_quantity_is_not_additive() {
    let (mut basket, _, _) = empty_store();
    basket.set_quantity("og-kush-k1", 4).unwrap();
    basket.set_quantity("og-kush-k1", 7).unwrap();
    assert_eq!(basket.quantity("og-kush-k1"), 7);
    assert_eq!(basket.len(), 1);
}

#[test]
fn test_non_positive_quantity_deletes_entry() {
    let (mut basket, storage, _) = empty_store();
    basket.set_quantity("alaska-a5", 2).unwrap();
    basket.set_quantity("alaska-a5", -5).unwrap();

    assert_eq!(basket.quantity("alaska-a5"), 0);
    assert!(basket.is_empty());
    assert_eq!(stored_lines(&storage), Some(serde_json::json!({})));
}

#[test]
fn test_no_entry_ever_below_one() {
    let (mut basket, _, _) = empty_store();
    let ops: [(&str, i64); 8] = [
        ("a", 3),
        ("b", 0),
        ("a", -1),
        ("c", 1),
        ("b", 2),
        ("c", 0),
        ("b", -100),
        ("d", 9),
    ];
    for (id, qty) in ops {
        basket.set_quantity(id, qty).unwrap();
        assert!(basket.lines().all(|(_, q)| q >= 1));
    }
    assert_eq!(basket.lines().collect::<Vec<_>>(), vec![("d", 9)]);
}

#[test]
fn test_quantity_above_limit_is_rejected() {
    let (mut basket, storage, _) = empty_store();
    basket.set_quantity("alaska-a5", 2).unwrap();

    let err = basket.set_quantity("alaska-a5", 5_000_000_000).unwrap_err();
    assert!(matches!(
        err,
        BasketError::QuantityOutOfRange { got: 5_000_000_000, max: MAX_QUANTITY }
    ));
    assert_eq!(AppError::from(err).code, ErrorCode::InvalidQuantity);
    assert!(basket.set_quantity("og-kush-k1", MAX_QUANTITY + 1).is_err());

    // Nothing changed, in memory or in storage
    assert_eq!(basket.lines().collect::<Vec<_>>(), vec![("alaska-a5", 2)]);
    assert_eq!(stored_lines(&storage), Some(serde_json::json!({"alaska-a5": 2})));
}

#[test]
fn test_increment_stops_at_limit() {
    let (mut basket, _, _) = empty_store();
    basket.set_quantity("og-kush-k1", MAX_QUANTITY).unwrap();

    let err = basket.increment("og-kush-k1").unwrap_err();
    assert!(matches!(err, BasketError::QuantityOutOfRange { .. }));
    assert_eq!(i64::from(basket.quantity("og-kush-k1")), MAX_QUANTITY);
}

#[test]
fn test_total_units_is_exact_sum() {
    let (mut basket, _, _) = empty_store();
    let ids = ["a", "b", "c", "d", "e"];
    for id in ids {
        basket.set_quantity(id, MAX_QUANTITY).unwrap();
    }
    let expected: u64 = basket.lines().map(|(_, q)| u64::from(q)).sum();
    assert_eq!(basket.total_units(), expected);
    assert_eq!(basket.total_units(), 5 * MAX_QUANTITY as u64);
}

#[test]
fn test_total_price_at_catalog_limits() {
    let mut products = catalog().products().to_vec();
    products[0].pack_price = Decimal::from(MAX_PRICE);
    let catalog = Catalog::new(products).unwrap();

    let (mut basket, _, _) = empty_store();
    basket.set_quantity("alaska-a5", MAX_QUANTITY).unwrap();
    basket.set_quantity("og-kush-k1", MAX_QUANTITY).unwrap();

    let expected = Decimal::from(MAX_PRICE) * Decimal::from(MAX_QUANTITY)
        + Decimal::from(320) * Decimal::from(MAX_QUANTITY);
    assert_eq!(basket.total_price(&catalog), expected);
}

#[test]
fn test_lines_are_ordered_by_id_not_insertion() {
    let (mut basket, storage, _) = empty_store();
    basket.set_quantity("og-kush-k1", 1).unwrap();
    basket.set_quantity("alaska-a5", 2).unwrap();
    basket.set_quantity("blue-dream-b3", 3).unwrap();

    let ids: Vec<&str> = basket.lines().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["alaska-a5", "blue-dream-b3", "og-kush-k1"]);

    let raw = storage.get(BASKET_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"alaska-a5":2,"blue-dream-b3":3,"og-kush-k1":1}"#);
}

#[test]
fn test_failed_write_keeps_in_memory_change() {
    let catalog = catalog();
    let mut basket = failing_store();

    let err = basket.set_quantity("alaska-a5", 3).unwrap_err();
    assert!(matches!(err, BasketError::Storage(StorageError::Io(_))));
    assert_eq!(AppError::from(err).code, ErrorCode::DatabaseError);

    // The basket stays usable for the rest of the session
    assert_eq!(basket.quantity("alaska-a5"), 3);
    assert_eq!(basket.total_units(), 3);
    assert_eq!(basket.total_price(&catalog), Decimal::from(897));
    assert!(basket.is_animating());

    assert!(basket.increment("alaska-a5").is_err());
    assert_eq!(basket.quantity("alaska-a5"), 4);
}

#[test]
fn test_failed_clear_still_empties_basket() {
    let mut basket = failing_store();
    let _ = basket.set_quantity("og-kush-k1", 2);

    assert!(matches!(basket.clear(), Err(BasketError::Storage(_))));
    assert!(basket.is_empty());
}

#[test]
fn test_failed_read_restores_empty() {
    let basket = failing_store();
    assert!(basket.is_empty());
    assert_eq!(basket.total_units(), 0);
}

#[test]
fn test_unknown_ids_are_kept_but_priced_at_zero() {
    let catalog = catalog();
    let (mut basket, _, _) = empty_store();
    basket.set_quantity("retired-strain", 4).unwrap();
    basket.set_quantity("og-kush-k1", 1).unwrap();

    assert_eq!(basket.total_units(), 5);
    assert_eq!(basket.total_price(&catalog), Decimal::from(320));
    assert_eq!(basket.stale_ids(&catalog), vec!["retired-strain"]);
}

#[test]
fn test_increment_then_decrement_restores_quantity() {
    let (mut basket, _, _) = empty_store();
    basket.set_quantity("alaska-a5", 3).unwrap();

    assert_eq!(basket.increment("alaska-a5").unwrap(), 4);
    assert_eq!(basket.decrement("alaska-a5").unwrap(), 3);
    assert_eq!(basket.quantity("alaska-a5"), 3);
}

#[test]
fn test_increment_then_decrement_from_absent_removes_entry() {
    let (mut basket, storage, _) = empty_store();

    assert_eq!(basket.increment("eran-almog").unwrap(), 1);
    assert_eq!(basket.decrement("eran-almog").unwrap(), 0);
    assert!(basket.is_empty());
    assert_eq!(stored_lines(&storage), Some(serde_json::json!({})));
}

#[test]
fn test_decrement_absent_is_noop() {
    let (mut basket, storage, _) = empty_store();
    assert_eq!(basket.decrement("alaska-a5").unwrap(), 0);
    assert!(basket.is_empty());
    // Nothing was written and no feedback started
    assert!(!storage.contains_key(BASKET_STORAGE_KEY));
    assert!(!basket.is_animating());
}

#[test]
fn test_every_mutation_rewrites_whole_mapping() {
    let (mut basket, storage, _) = empty_store();
    basket.set_quantity("alaska-a5", 3).unwrap();
    basket.set_quantity("blue-dream-b3", 2).unwrap();
    assert_eq!(
        stored_lines(&storage),
        Some(serde_json::json!({"alaska-a5": 3, "blue-dream-b3": 2}))
    );

    basket.increment("blue-dream-b3").unwrap();
    assert_eq!(
        stored_lines(&storage),
        Some(serde_json::json!({"alaska-a5": 3, "blue-dream-b3": 3}))
    );
}

#[test]
fn test_clear_empties_and_removes_key() {
    let catalog = catalog();
    let (mut basket, storage, _) = empty_store();
    basket.set_quantity("alaska-a5", 3).unwrap();
    assert!(storage.contains_key(BASKET_STORAGE_KEY));

    basket.clear().unwrap();
    assert_eq!(basket.total_units(), 0);
    assert_eq!(basket.total_price(&catalog), Decimal::ZERO);
    assert!(!storage.contains_key(BASKET_STORAGE_KEY));
}

#[test]
fn test_restore_reads_persisted_mapping() {
    let storage = Arc::new(MemoryKeyValueStore::with_entry(
        BASKET_STORAGE_KEY,
        r#"{"alaska-a5":3,"blue-dream-b3":2}"#,
    ));
    let (basket, _) = store_with(storage);
    assert_eq!(basket.quantity("alaska-a5"), 3);
    assert_eq!(basket.quantity("blue-dream-b3"), 2);
    assert_eq!(basket.total_units(), 5);
}

#[test]
fn test_restore_malformed_value_falls_back_to_empty() {
    for raw in ["{not json", "[1,2,3]", r#"{"alaska-a5":"three"}"#, ""] {
        let storage = Arc::new(MemoryKeyValueStore::with_entry(BASKET_STORAGE_KEY, raw));
        let (basket, _) = store_with(storage);
        assert!(basket.is_empty(), "expected empty basket for {:?}", raw);
    }
}

#[test]
fn test_restore_drops_non_positive_entries() {
    let storage = Arc::new(MemoryKeyValueStore::with_entry(
        BASKET_STORAGE_KEY,
        r#"{"alaska-a5":0,"blue-dream-b3":-2,"og-kush-k1":5}"#,
    ));
    let (basket, _) = store_with(storage);
    assert_eq!(basket.lines().collect::<Vec<_>>(), vec![("og-kush-k1", 5)]);
}

#[test]
fn test_restore_drops_entries_above_limit() {
    let storage = Arc::new(MemoryKeyValueStore::with_entry(
        BASKET_STORAGE_KEY,
        r#"{"alaska-a5":5000000000,"blue-dream-b3":10000,"og-kush-k1":9999}"#,
    ));
    let (basket, _) = store_with(storage);
    assert_eq!(basket.lines().collect::<Vec<_>>(), vec![("og-kush-k1", 9999)]);
    assert_eq!(basket.total_units(), 9999);
}

#[test]
fn test_animation_window_expires() {
    let (mut basket, _, clock) = empty_store();
    assert!(!basket.is_animating());

    basket.set_quantity("alaska-a5", 1).unwrap();
    assert!(basket.is_animating());

    clock.advance(Duration::from_millis(2999));
    assert!(basket.is_animating());

    clock.advance(Duration::from_millis(1));
    assert!(!basket.is_animating());
}

#[test]
fn test_later_mutation_restarts_animation_window() {
    let (mut basket, _, clock) = empty_store();
    basket.set_quantity("alaska-a5", 1).unwrap();
    clock.advance(Duration::from_millis(2000));

    basket.increment("alaska-a5").unwrap();
    clock.advance(Duration::from_millis(2000));
    // 4000ms after the first mutation, 2000ms after the second
    assert!(basket.is_animating());

    clock.advance(Duration::from_millis(1000));
    assert!(!basket.is_animating());
}

#[test]
fn test_redb_backed_store_roundtrip() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(RedbKeyValueStore::open_in_memory().unwrap());
    {
        let mut basket = BasketStore::restore(storage.clone());
        basket.set_quantity("og-kush-k1", 6).unwrap();
    }
    let basket = BasketStore::restore(storage);
    assert_eq!(basket.quantity("og-kush-k1"), 6);
}
