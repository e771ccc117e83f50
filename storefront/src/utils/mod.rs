//! Utilities
//!
//! - [`AppError`] / [`AppResult`] - re-exported from `shared::error`
//! - logging setup

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
