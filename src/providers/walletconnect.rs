/// WalletConnect bridge provider adapter
///
/// Each linked address rides on its own bridge session. Sessions carry a
/// topic id and a connect timestamp; disconnecting an address closes its
/// session so the bridge stops relaying for it.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use uuid::Uuid;

use crate::providers::{ProviderError, ProviderKind, RawWallet, WalletProvider};
use crate::storage::WalletRecord;

#[derive(Debug, Clone)]
pub struct BridgeSession {
    pub address: String,
    pub topic: Uuid,
    pub connected_at: DateTime<Utc>,
}

impl BridgeSession {
    fn open(address: &str) -> Self {
        Self {
            address: address.to_string(),
            topic: Uuid::new_v4(),
            connected_at: Utc::now(),
        }
    }
}

#[derive(Default)]
pub struct WalletConnectProvider {
    // Vec keeps sessions in link order so connect() reports addresses the
    // way the user approved them
    sessions: RwLock<Vec<BridgeSession>>,
}

impl WalletConnectProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open bridge sessions for the addresses in a connect request
    ///
    /// Addresses that already have a session keep it; blanks are dropped.
    pub fn announce(&self, wallets: &[RawWallet]) {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        for wallet in wallets {
            let address = wallet.address.trim();
            if address.is_empty() {
                continue;
            }
            if !sessions.iter().any(|session| session.address == address) {
                let session = BridgeSession::open(address);
                debug!("Opened bridge session {} for {}", session.topic, address);
                sessions.push(session);
            }
        }
    }

    pub fn has_session(&self, address: &str) -> bool {
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        sessions.iter().any(|session| session.address == address)
    }
}

#[async_trait]
impl WalletProvider for WalletConnectProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::WalletConnect
    }

    async fn connect(&self) -> Result<Vec<RawWallet>, ProviderError> {
        let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
        info!(
            "WalletConnect bridge has {} open session(s)",
            sessions.len()
        );
        Ok(sessions
            .iter()
            .map(|session| RawWallet::new(session.address.clone()))
            .collect())
    }

    async fn disconnect(&self, address: &str) -> Result<(), ProviderError> {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        if let Some(index) = sessions.iter().position(|session| session.address == address) {
            let session = sessions.remove(index);
            info!("Closed bridge session {} for {}", session.topic, address);
        }
        Ok(())
    }

    fn rehydrate(&self, record: &WalletRecord) -> bool {
        // Bridge sessions do not survive a restart, so any persisted
        // wallet-connect record without a live session needs reconnecting
        record.provider == ProviderKind::WalletConnect && !self.has_session(record.address())
    }
}
