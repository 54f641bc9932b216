/// Wallet provider adapters
///
/// This module contains the provider abstraction and its adapters:
/// - mod.rs: Provider trait, registry, and shared wire types
/// - extension.rs: Browser extension adapter (keys stay in the extension)
/// - walletconnect.rs: WalletConnect bridge adapter (per-address sessions)

pub mod extension;
pub mod walletconnect;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::WalletRecord;

pub use extension::ExtensionProvider;
pub use walletconnect::WalletConnectProvider;

/// Which adapter a wallet was linked through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    Extension,
    WalletConnect,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Extension => write!(f, "extension"),
            ProviderKind::WalletConnect => write!(f, "wallet-connect"),
        }
    }
}

/// Address as reported by a provider, before any ledger enrichment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWallet {
    #[serde(default)]
    pub address: String,
}

impl RawWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider backend error: {0}")]
    Backend(String),
}

/// A connected wallet backend
///
/// Adapters own their transport state (granted addresses, bridge sessions)
/// and report addresses only; ledger data comes from the indexer.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Establish the provider connection and return the wallets it exposes
    async fn connect(&self) -> Result<Vec<RawWallet>, ProviderError>;

    /// Tear down provider state for one address
    async fn disconnect(&self, address: &str) -> Result<(), ProviderError>;

    /// Whether a persisted record needs this adapter reconnected on startup
    fn rehydrate(&self, record: &WalletRecord) -> bool;
}

/// Lookup table from provider kind to adapter
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn WalletProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: Arc<dyn WalletProvider>) {
        self.providers.insert(provider.kind(), provider);
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn WalletProvider>> {
        self.providers.get(&kind).cloned()
    }
}
