/// Indexer account types
///
/// These mirror the indexer's account lookup format. Known fields are typed;
/// everything else the indexer sends rides along in `extra` so no ledger
/// data is dropped between fetch and persistence.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Consensus participation status reported by the ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Online,
    #[default]
    Offline,
    NotParticipating,
}

/// A single asset holding on an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetHolding {
    #[serde(rename = "asset-id")]
    pub asset_id: u64,
    pub amount: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-chain account record, with balances in micro-units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(rename = "amount-without-pending-rewards", default)]
    pub amount_without_pending_rewards: u64,
    #[serde(rename = "pending-rewards", default)]
    pub pending_rewards: u64,
    #[serde(default)]
    pub rewards: u64,
    #[serde(default)]
    pub round: i64,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default)]
    pub assets: Vec<AssetHolding>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AccountInfo {
    /// Placeholder record for an address the ledger has never seen
    ///
    /// Carries the same field layout as a real lookup, with zeroed balances
    /// and empty app/asset collections. `round` is -1 to mark the record as
    /// synthetic.
    pub fn absent(address: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("apps-local-state".to_string(), json!([]));
        extra.insert(
            "apps-total-schema".to_string(),
            json!({ "num-byte-slice": 0, "num-uint": 0 }),
        );
        extra.insert("created-apps".to_string(), json!([]));
        extra.insert("created-assets".to_string(), json!([]));
        extra.insert("reward-base".to_string(), json!(0));

        Self {
            address: address.into(),
            amount: 0,
            amount_without_pending_rewards: 0,
            pending_rewards: 0,
            rewards: 0,
            round: -1,
            status: AccountStatus::Offline,
            assets: Vec::new(),
            extra,
        }
    }

    /// Whether this record is an `absent` placeholder rather than a real
    /// lookup result
    pub fn is_absent(&self) -> bool {
        self.round < 0
    }
}

/// Envelope returned by the account lookup endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AccountLookup {
    pub account: AccountInfo,
    #[serde(rename = "current-round", default)]
    pub current_round: u64,
}
