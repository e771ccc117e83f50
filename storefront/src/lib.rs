//! Pharmacy Storefront - B2B ordering storefront for licensed pharmacies
//!
//! # Module layout
//!
//! ```text
//! storefront/src/
//! ├── core/        # Config, page state
//! ├── catalog/     # Product catalog (built-in or JSON file)
//! ├── basket/      # Basket store, key-value persistence, clock
//! ├── filter/      # Strain / serving type / profile filters
//! ├── card/        # Card view state and display model
//! ├── order/       # Order action and submission stub
//! ├── assistant/   # Assistant panel props contract
//! ├── pages/       # Privacy policy and terms of use
//! ├── cli.rs       # Command line
//! └── utils/       # Logging, error re-exports
//! ```

pub mod assistant;
pub mod basket;
pub mod card;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod filter;
pub mod order;
pub mod pages;
pub mod utils;

pub use basket::{BASKET_STORAGE_KEY, BasketStore, KeyValueStore};
pub use catalog::Catalog;
pub use core::{Config, StorefrontState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    tracing::debug!(
        work_dir = %config.work_dir.display(),
        environment = %config.environment,
        "Environment ready"
    );
    config
}
