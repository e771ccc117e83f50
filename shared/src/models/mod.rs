//! Data models
//!
//! Shared between the storefront library, its command-line front end and the
//! assistant widget (via JSON). Catalog records use camelCase field names.

pub mod product;
pub mod profile;

// Re-exports
pub use product::*;
pub use profile::*;
