//! Unified error codes for the pharmacy storefront
//!
//! This module defines all error codes used by the storefront library and its
//! command-line front end. Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / basket errors
//! - 6xxx: Product and catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the web front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 4xxx: Order ====================
    /// Nothing to submit
    OrderEmpty = 4007,
    /// Quantity is outside 1..=9999 units
    InvalidQuantity = 4010,

    // ==================== 6xxx: Product ====================
    ProductNotFound = 6001,
    ProductInvalidPrice = 6002,
    ProductOutOfStock = 6003,
    /// Two catalog records share an id
    ProductDuplicateId = 6004,
    /// Catalog file could not be read or parsed
    CatalogLoadFailed = 6010,
    PageNotFound = 6020,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    DatabaseError = 9002,

    // ==================== 94xx: Storage ====================
    StorageCorrupted = 9403,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidFormat => "Invalid format",

            // Order
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::InvalidQuantity => "Quantity must be between 1 and 9999 units",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::ProductOutOfStock => "Product is out of stock",
            ErrorCode::ProductDuplicateId => "Product id is used more than once",
            ErrorCode::CatalogLoadFailed => "Catalog could not be loaded",
            ErrorCode::PageNotFound => "Page not found",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::DatabaseError => "Database error",

            // Storage
            ErrorCode::StorageCorrupted => "Storage corrupted (data file damaged)",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            6 => Ok(ErrorCode::InvalidFormat),

            // Order
            4007 => Ok(ErrorCode::OrderEmpty),
            4010 => Ok(ErrorCode::InvalidQuantity),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6003 => Ok(ErrorCode::ProductOutOfStock),
            6004 => Ok(ErrorCode::ProductDuplicateId),
            6010 => Ok(ErrorCode::CatalogLoadFailed),
            6020 => Ok(ErrorCode::PageNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
