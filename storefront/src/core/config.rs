use std::path::PathBuf;

use crate::basket::DEFAULT_ANIMATION_MS;

/// Default work directory (relative to the process working directory)
const DEFAULT_WORK_DIR: &str = ".pharmacy";

/// File name of the local key-value store inside the work directory
const LOCAL_STORE_FILE: &str = "local-storage.redb";

/// Storefront configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | .pharmacy | Holds the local key-value store |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | Daily rolling log files when set |
/// | CATALOG_PATH | (unset) | JSON catalog replacing the built-in one |
/// | BASKET_ANIMATION_MS | 3000 | Basket "animating" window |
/// | ELEVENLABS_BOUTIQUE_AGENT_ID | (unset) | External voice agent id |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/tmp/pharmacy CATALOG_PATH=./catalog.json storefront catalog
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the local key-value store
    pub work_dir: PathBuf,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Catalog file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// How long the basket stays in the "animating" state after a mutation
    pub basket_animation_ms: u64,
    /// Agent id of the external voice service, passed through to the assistant panel
    pub assistant_agent_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| DEFAULT_WORK_DIR.into())
                .into(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            basket_animation_ms: std::env::var("BASKET_ANIMATION_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ANIMATION_MS),
            assistant_agent_id: std::env::var("ELEVENLABS_BOUTIQUE_AGENT_ID")
                .ok()
                .filter(|id| !id.is_empty()),
        }
    }

    /// Override the work directory, keeping everything else from the environment
    ///
    /// Used by tests
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Path of the local key-value store file
    pub fn local_store_path(&self) -> PathBuf {
        self.work_dir.join(LOCAL_STORE_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
