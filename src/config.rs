/// Session engine configuration from environment variables
///
/// Controls the indexer endpoint, the session storage location and the
/// rewards eligibility threshold.

use std::env;
use std::path::PathBuf;

/// Public indexer instance used when no override is given
pub const DEFAULT_INDEXER_URL: &str = "https://algoindexer.algoexplorerapi.io";

/// Default eligibility threshold in micro-units (100 whole units)
pub const DEFAULT_MIN_REWARDS_BALANCE: u64 = 100_000_000;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Indexer API base URL
    pub indexer_url: String,
    /// Directory holding the persisted session slots
    pub storage_dir: PathBuf,
    /// Bind address for the API server
    pub bind_address: String,
    /// Minimum balance in micro-units for rewards eligibility
    pub min_rewards_balance: u64,
}

impl SessionConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `INDEXER_URL`: indexer API endpoint (optional, defaults to the public instance)
    /// - `STORAGE_DIR`: session storage directory (default "./session-data")
    /// - `BIND_ADDRESS`: server bind address (default "0.0.0.0:3000")
    /// - `MIN_REWARDS_BALANCE`: eligibility threshold in micro-units (default 100000000)
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Use the public indexer (default)
    /// cargo run
    ///
    /// # Point at a local mock indexer
    /// INDEXER_URL=http://localhost:3200 cargo run
    /// ```
    pub fn from_env() -> Self {
        let indexer_url =
            env::var("INDEXER_URL").unwrap_or_else(|_| DEFAULT_INDEXER_URL.to_string());
        log::info!("📡 Indexer URL: {}", indexer_url);

        let storage_dir = env::var("STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./session-data"));
        log::info!("🗂️  Session storage: {}", storage_dir.display());

        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let min_rewards_balance = match env::var("MIN_REWARDS_BALANCE") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!(
                    "⚠️  Invalid MIN_REWARDS_BALANCE '{}', using default {}",
                    raw,
                    DEFAULT_MIN_REWARDS_BALANCE
                );
                DEFAULT_MIN_REWARDS_BALANCE
            }),
            Err(_) => DEFAULT_MIN_REWARDS_BALANCE,
        };

        Self {
            indexer_url,
            storage_dir,
            bind_address,
            min_rewards_balance,
        }
    }
}

impl Default for SessionConfig {
    /// Default configuration (public indexer, local storage directory)
    fn default() -> Self {
        Self {
            indexer_url: DEFAULT_INDEXER_URL.to_string(),
            storage_dir: PathBuf::from("./session-data"),
            bind_address: "0.0.0.0:3000".to_string(),
            min_rewards_balance: DEFAULT_MIN_REWARDS_BALANCE,
        }
    }
}
