//! Basket store - quantity per product id, mirrored to local storage

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

use super::clock::{Clock, SystemClock};
use super::storage::{KeyValueStore, StorageError};
use super::{BASKET_STORAGE_KEY, DEFAULT_ANIMATION_MS, MAX_QUANTITY};
use crate::catalog::Catalog;

/// Basket mutation errors
#[derive(Debug, Error)]
pub enum BasketError {
    #[error("quantity must be at most {max}, got {got}")]
    QuantityOutOfRange { got: i64, max: i64 },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type BasketResult<T> = Result<T, BasketError>;

impl From<BasketError> for AppError {
    fn from(err: BasketError) -> Self {
        let message = err.to_string();
        match err {
            BasketError::QuantityOutOfRange { got, .. } => {
                AppError::with_message(ErrorCode::InvalidQuantity, message)
                    .with_detail("quantity", got)
            }
            BasketError::Storage(e) => e.into(),
        }
    }
}

/// Client-held mapping of product id to order quantity
///
/// # Invariant
///
/// Every stored quantity is within `1..=MAX_QUANTITY`. Setting a quantity of
/// zero or less deletes the entry instead of storing it; a quantity above
/// [`MAX_QUANTITY`] is rejected and leaves the basket unchanged.
///
/// # Ordering
///
/// Lines are kept sorted by product id, not in the order they were first
/// added. [`lines`](Self::lines), the persisted JSON object and order
/// summaries all follow that order.
///
/// # Persistence
///
/// The whole mapping is written to the key-value store after every mutation
/// as a JSON object (`{"alaska-a5": 3}`) under [`BASKET_STORAGE_KEY`].
/// The in-memory mapping is updated first, so a failed write leaves the
/// basket usable and only the persisted mirror stale.
pub struct BasketStore {
    lines: BTreeMap<String, u32>,
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    animation_window: Duration,
    animating_until: Option<Instant>,
}

impl BasketStore {
    /// Restore the basket from storage using the wall clock and the default
    /// animation window
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::restore_with(
            storage,
            Arc::new(SystemClock),
            Duration::from_millis(DEFAULT_ANIMATION_MS),
        )
    }

    /// Restore the basket from storage
    ///
    /// An absent key yields an empty basket. A read failure or a value that
    /// does not parse as an id-to-quantity object also yields an empty basket;
    /// the problem is logged and never surfaced. Stored entries with a
    /// quantity outside `1..=MAX_QUANTITY` are dropped.
    pub fn restore_with(
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        animation_window: Duration,
    ) -> Self {
        let lines = match storage.get(BASKET_STORAGE_KEY) {
            Ok(Some(raw)) => parse_lines(&raw),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored basket, starting empty");
                BTreeMap::new()
            }
        };
        tracing::debug!(lines = lines.len(), "Basket restored");

        Self {
            lines,
            storage,
            clock,
            animation_window,
            animating_until: None,
        }
    }

    // ========== Mutations ==========

    /// Set the quantity of `product_id` exactly (not additive)
    ///
    /// `quantity <= 0` removes the entry and `quantity > MAX_QUANTITY` fails
    /// with [`BasketError::QuantityOutOfRange`] before anything changes. The
    /// id is not checked against any catalog. Restarts the animation window
    /// and persists the mapping.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> BasketResult<()> {
        if quantity > MAX_QUANTITY {
            return Err(BasketError::QuantityOutOfRange {
                got: quantity,
                max: MAX_QUANTITY,
            });
        }
        if quantity <= 0 {
            self.lines.remove(product_id);
        } else {
            // 1..=MAX_QUANTITY fits in u32
            self.lines.insert(product_id.to_string(), quantity as u32);
        }
        self.animating_until = Some(self.clock.now() + self.animation_window);
        Ok(self.persist()?)
    }

    /// Add one unit; returns the new quantity
    ///
    /// Fails at [`MAX_QUANTITY`] without changing the line.
    pub fn increment(&mut self, product_id: &str) -> BasketResult<u32> {
        let next = i64::from(self.quantity(product_id)) + 1;
        self.set_quantity(product_id, next)?;
        Ok(self.quantity(product_id))
    }

    /// Remove one unit; returns the new quantity
    ///
    /// Does nothing for an absent id, so a quantity never goes below zero.
    /// Decrementing a quantity of 1 removes the entry.
    pub fn decrement(&mut self, product_id: &str) -> BasketResult<u32> {
        let current = self.quantity(product_id);
        if current < 1 {
            return Ok(0);
        }
        self.set_quantity(product_id, i64::from(current) - 1)?;
        Ok(self.quantity(product_id))
    }

    /// Empty the basket and delete the persisted key
    pub fn clear(&mut self) -> BasketResult<()> {
        self.lines.clear();
        Ok(self.storage.remove(BASKET_STORAGE_KEY)?)
    }

    // ========== Readers ==========

    /// Quantity of one product, 0 when absent
    pub fn quantity(&self, product_id: &str) -> u32 {
        self.lines.get(product_id).copied().unwrap_or(0)
    }

    /// Basket lines ordered by product id
    pub fn lines(&self) -> impl Iterator<Item = (&str, u32)> {
        self.lines.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all quantities
    pub fn total_units(&self) -> u64 {
        self.lines.values().map(|&qty| u64::from(qty)).sum()
    }

    /// Sum of pack price × quantity over lines the catalog can resolve
    ///
    /// Ids the catalog does not know contribute nothing. Catalog prices and
    /// line quantities are both bounded, so the sum stays far inside the
    /// `Decimal` range.
    pub fn total_price(&self, catalog: &Catalog) -> Decimal {
        self.lines
            .iter()
            .filter_map(|(id, qty)| {
                if qty > MAX_QUANTITY {
                    tracing::warn!(
                        product_id = %id,
                        quantity = qty,
                        "Stored quantity exceeds the line limit, dropping line"
                    );
                    return None;
                }
                (qty > 0).then_some((id, qty as u32))
            })
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored basket is malformed, starting empty");
            BTreeMap::new()
        }
    }
}
