/// In-memory ledger backing the mock indexer
///
/// Accounts are stored as raw JSON objects so tests can shape records freely,
/// including extra fields the real indexer would return.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

pub struct LedgerState {
    accounts: RwLock<HashMap<String, Value>>,
    round: AtomicU64,
    outage: AtomicBool,
}

impl LedgerState {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            round: AtomicU64::new(1),
            outage: AtomicBool::new(false),
        }
    }

    /// Insert or replace an account record
    ///
    /// Advances the ledger round and fills in the `address` field when the
    /// record omits it. Returns the round at which the record became visible.
    pub async fn put_account(&self, address: &str, mut account: Value) -> u64 {
        if let Value::Object(ref mut fields) = account {
            fields
                .entry("address".to_string())
                .or_insert_with(|| Value::String(address.to_string()));
        }
        self.accounts
            .write()
            .await
            .insert(address.to_string(), account);
        self.advance_round()
    }

    /// Remove an account so later lookups return 404
    pub async fn remove_account(&self, address: &str) -> bool {
        let removed = self.accounts.write().await.remove(address).is_some();
        if removed {
            self.advance_round();
        }
        removed
    }

    pub async fn account(&self, address: &str) -> Option<Value> {
        self.accounts.read().await.get(address).cloned()
    }

    pub fn current_round(&self) -> u64 {
        self.round.load(Ordering::SeqCst)
    }

    pub fn advance_round(&self) -> u64 {
        self.round.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Toggle simulated downtime. While active every lookup fails with 500.
    pub fn set_outage(&self, active: bool) {
        self.outage.store(active, Ordering::SeqCst);
    }

    pub fn outage(&self) -> bool {
        self.outage.load(Ordering::SeqCst)
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new()
    }
}
