//! Ledger indexer integration
//!
//! Account lookups against the chain indexer. The client fetches one record
//! per linked address and the types capture the indexer's account format,
//! including fields this crate never interprets itself.

mod client;
mod types;

pub use client::{FetchError, IndexerClient, IndexerError};
pub use types::{AccountInfo, AccountLookup, AccountStatus, AssetHolding};
