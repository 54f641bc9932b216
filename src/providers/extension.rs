/// Browser extension provider adapter
///
/// The extension holds keys in the user's browser and announces which
/// addresses it has granted to the dashboard. This adapter tracks that
/// grant list; there is no transport to tear down on disconnect.

use std::sync::RwLock;

use async_trait::async_trait;
use log::{debug, info};

use crate::providers::{ProviderError, ProviderKind, RawWallet, WalletProvider};
use crate::storage::WalletRecord;

#[derive(Default)]
pub struct ExtensionProvider {
    granted: RwLock<Vec<String>>,
}

impl ExtensionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the addresses the extension reported in a connect request
    ///
    /// Blank entries are dropped and repeats keep their first position, so
    /// `connect` hands back a clean grant list.
    pub fn announce(&self, wallets: &[RawWallet]) {
        let mut granted = self.granted.write().unwrap_or_else(|e| e.into_inner());
        for wallet in wallets {
            let address = wallet.address.trim();
            if address.is_empty() {
                continue;
            }
            if !granted.iter().any(|existing| existing == address) {
                granted.push(address.to_string());
            }
        }
        debug!("Extension grant list now has {} address(es)", granted.len());
    }
}

#[async_trait]
impl WalletProvider for ExtensionProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Extension
    }

    async fn connect(&self) -> Result<Vec<RawWallet>, ProviderError> {
        let granted = self.granted.read().unwrap_or_else(|e| e.into_inner());
        info!("Extension connected with {} address(es)", granted.len());
        Ok(granted.iter().cloned().map(RawWallet::new).collect())
    }

    async fn disconnect(&self, address: &str) -> Result<(), ProviderError> {
        let mut granted = self.granted.write().unwrap_or_else(|e| e.into_inner());
        granted.retain(|existing| existing != address);
        Ok(())
    }

    fn rehydrate(&self, _record: &WalletRecord) -> bool {
        // Keys live in the extension; nothing to re-establish on startup
        false
    }
}
