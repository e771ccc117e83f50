//! Unified error system for the pharmacy storefront
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified response format for machine-readable output
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order / basket errors
//! - 6xxx: Product and catalog errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::OrderEmpty);
//!
//! // Create an error with details
//! let err = AppError::with_message(ErrorCode::InvalidQuantity, "Quantity must be positive")
//!     .with_detail("field", "quantity");
//!
//! // Convert to a response
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(4010));
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
