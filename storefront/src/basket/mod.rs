//! Basket
//!
//! - [`BasketStore`] - quantity per product id with derived totals
//! - [`KeyValueStore`] - persistence port (redb file or in-memory)
//! - [`Clock`] - time source for the transient "animating" flag

mod clock;
mod storage;
mod store;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, RedbKeyValueStore, StorageError, StorageResult,
};
pub use store::{BasketError, BasketResult, BasketStore};

/// Local storage key holding the JSON-encoded basket
pub const BASKET_STORAGE_KEY: &str = "pharmacy_basket";

/// Largest quantity a single basket line may hold
pub const MAX_QUANTITY: i64 = 9999;

/// Basket feedback window after a mutation (ms)
pub const DEFAULT_ANIMATION_MS: u64 = 3000;
