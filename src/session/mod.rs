/// Session orchestration
///
/// This module contains the reconciliation engine:
/// - manager.rs: SessionManager orchestrating providers, indexer, and storage
/// - reconcile.rs: pure merge and active-selection helpers

pub mod manager;
pub mod reconcile;

pub use manager::{SessionManager, SessionSnapshot};
