//! Session persistence
//!
//! File-backed storage for the linked wallet list and the active wallet
//! selection. The store is the durability boundary: reconciliation commits
//! here before swapping anything in memory.

mod file_system;
mod models;

pub use file_system::SessionStore;
pub use models::{SessionState, WalletRecord};
