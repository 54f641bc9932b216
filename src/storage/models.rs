use serde::{Deserialize, Serialize};

use crate::indexer::AccountInfo;
use crate::providers::ProviderKind;

/// A linked wallet: the provider it came through plus its ledger record
///
/// Serializes flat, so on disk and over the API a record looks like an
/// indexer account with one extra `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletRecord {
    #[serde(rename = "type")]
    pub provider: ProviderKind,
    #[serde(flatten)]
    pub account: AccountInfo,
}

impl WalletRecord {
    pub fn new(provider: ProviderKind, account: AccountInfo) -> Self {
        Self { provider, account }
    }

    pub fn address(&self) -> &str {
        &self.account.address
    }

    /// Whether this wallet's balance clears the rewards eligibility floor
    pub fn is_eligible(&self, min_balance: u64) -> bool {
        self.account.amount >= min_balance
    }
}

/// The persisted session: ordered wallet list plus the active selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub addresses: Vec<WalletRecord>,
    pub active_address: Option<String>,
}

impl SessionState {
    pub fn active_record(&self) -> Option<&WalletRecord> {
        let active = self.active_address.as_deref()?;
        self.addresses.iter().find(|record| record.address() == active)
    }
}
