//! Rewards wallet session engine
//!
//! Keeps a dashboard's linked wallet addresses, their on-chain account
//! records, and the active wallet selection consistent across provider
//! connects, disconnects, refreshes, and server restarts.
//!
//! # Architecture
//!
//! - **Providers**: adapters for the browser extension and the
//!   WalletConnect bridge, reporting addresses only
//! - **Indexer**: ledger lookups that enrich every linked address with its
//!   full account record
//! - **Session**: the reconciliation engine merging provider batches into
//!   one ordered, persisted wallet list
//! - **Storage**: file-backed slots for the wallet list and the active
//!   selection, committed before any in-memory swap

pub mod api;
pub mod config;
pub mod error;
pub mod indexer;
pub mod providers;
pub mod session;
pub mod storage;

pub use config::SessionConfig;
pub use error::{SessionError, StorageError};
pub use session::{SessionManager, SessionSnapshot};
