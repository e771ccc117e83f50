//! Order summary types
//!
//! Submitting an order is a stub: the basket is turned into an
//! [`OrderSummary`] and cleared. Nothing is transmitted.

pub mod summary;

// Re-exports
pub use summary::{OrderLine, OrderSummary};
