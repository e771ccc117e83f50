//! Core - configuration and page state
//!
//! - [`Config`] - environment-driven configuration
//! - [`StorefrontState`] - catalog, filters, cards, basket and assistant panel

pub mod config;
pub mod state;

pub use config::Config;
pub use state::StorefrontState;
