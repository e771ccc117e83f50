//! Order actions
//!
//! - [`order_product`] - the card's "add to order" action, validated against
//!   the catalog before it reaches the basket
//! - [`submit_order`] - prices the basket into an [`OrderSummary`] and clears
//!   it. Nothing is transmitted anywhere.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::order::{OrderLine, OrderSummary};
use shared::util::now_millis;
use thiserror::Error;

use crate::basket::{BasketError, BasketStore, MAX_QUANTITY};
use crate::catalog::Catalog;

/// Default quantity offered by the card's order action
pub const DEFAULT_ORDER_QUANTITY: u32 = 10;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Basket is empty")]
    Empty,

    #[error("Product {0} not found")]
    ProductNotFound(String),

    #[error("Product {0} is out of stock")]
    OutOfStock(String),

    #[error("quantity must be between 1 and {max}, got {got}")]
    InvalidQuantity { got: i64, max: i64 },

    #[error(transparent)]
    Basket(#[from] BasketError),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::Empty => AppError::new(ErrorCode::OrderEmpty),
            OrderError::ProductNotFound(id) => AppError::product_not_found(id),
            OrderError::OutOfStock(id) => {
                AppError::with_message(ErrorCode::ProductOutOfStock, message)
                    .with_detail("product_id", id)
            }
            OrderError::InvalidQuantity { got, .. } => {
                AppError::with_message(ErrorCode::InvalidQuantity, message)
                    .with_detail("quantity", got)
            }
            OrderError::Basket(e) => e.into(),
        }
    }
}

/// Put `quantity` units of a product in the basket
///
/// The product must exist and be in stock, and the quantity must be within
/// `1..=MAX_QUANTITY`. The basket quantity is set, not added to. Returns the
/// confirmation shown to the user.
pub fn order_product(
    basket: &mut BasketStore,
    catalog: &Catalog,
    product_id: &str,
    quantity: i64,
) -> OrderResult<String> {
    let product = catalog
        .get(product_id)
        .ok_or_else(|| OrderError::ProductNotFound(product_id.to_string()))?;
    if !product.in_stock {
        return Err(OrderError::OutOfStock(product_id.to_string()));
    }
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(OrderError::InvalidQuantity {
            got: quantity,
            max: MAX_QUANTITY,
        });
    }

    basket.set_quantity(product_id, quantity)?;
    tracing::info!(product_id = %product_id, quantity, "Product ordered");
    Ok(confirmation(quantity, &product.name))
}

fn confirmation(quantity: i64, name: &str) -> String {
    format!("נוסף לסל: {} יחידות של {}", quantity, name)
}

/// Price the basket into an order summary, then clear it
///
/// Ids the catalog cannot resolve are kept as lines with a zero price. Lines
/// follow basket order.
pub fn submit_order(basket: &mut BasketStore, catalog: &Catalog) -> OrderResult<OrderSummary> {
    if basket.is_empty() {
        return Err(OrderError::Empty);
    }

    let lines: Vec<OrderLine> = basket
        .lines()
        .map(|(id, quantity)| {
            let product = catalog.get(id);
            let unit_price = product.map(|p| p.pack_price).unwrap_or(Decimal::ZERO);
            OrderLine {
                product_id: id.to_string(),
                name: product.map(|p| p.name.clone()),
                quantity,
                unit_price,
                line_total: unit_price * Decimal::from(quantity),
            }
        })
        .collect();

    let summary = OrderSummary {
        reference: uuid::Uuid::new_v4().to_string(),
        submitted_at: now_millis(),
        total_units: basket.total_units(),
        total_price: lines.iter().map(|line| line.line_total).sum(),
        lines,
    };

    basket.clear()?;
    tracing::info!(
        reference = %summary.reference,
        lines = summary.lines.len(),
        total_units = summary.total_units,
        total_price = %summary.total_price,
        "Order submitted"
    );
    Ok(summary)
}
