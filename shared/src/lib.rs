//! Shared types for the pharmacy storefront
//!
//! Catalog data model, the derived THC/CBD profile, order summary types,
//! display helpers and the unified error system.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Badge, Product, ProductSummary, Profile, Terpene};
pub use order::{OrderLine, OrderSummary};
pub use serde::{Deserialize, Serialize};
