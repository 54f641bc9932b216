/// Session Manager - Main Orchestrator
///
/// Coordinates provider adapters, ledger enrichment, and persistence behind
/// one serialized session state. Every mutation follows the same shape:
/// merge, enrich, settle the active selection, commit to disk, then swap
/// the in-memory state. A failed enrichment leaves the previous state
/// untouched.

use log::{info, warn};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::indexer::IndexerClient;
use crate::providers::{ProviderKind, ProviderRegistry, RawWallet};
use crate::session::reconcile;
use crate::storage::{SessionState, SessionStore, WalletRecord};

/// Read model handed to the API: the reconciled list, the resolved active
/// record, and the eligibility floor the dashboard compares balances against
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub addresses: Vec<WalletRecord>,
    #[serde(rename = "active-wallet")]
    pub active_wallet: Option<WalletRecord>,
    #[serde(rename = "min-rewards-balance")]
    pub min_rewards_balance: u64,
}

pub struct SessionManager {
    config: SessionConfig,
    store: SessionStore,
    indexer: IndexerClient,
    providers: ProviderRegistry,
    // Single writer: held across fetch and commit so concurrent mutations
    // serialize instead of interleaving
    state: Mutex<SessionState>,
}

impl SessionManager {
    // ============================================================================
    // Constructor
    // ============================================================================

    pub fn new(config: SessionConfig, providers: ProviderRegistry) -> Self {
        let store = SessionStore::new_with_base_dir(config.storage_dir.clone());
        let indexer = IndexerClient::new(&config.indexer_url);

        Self {
            config,
            store,
            indexer,
            providers,
            state: Mutex::new(SessionState::default()),
        }
    }

    // ============================================================================
    // Startup
    // ============================================================================

    /// Hydrate from disk, then bring the session back to live ledger data
    ///
    /// Infallible: a dead indexer or provider at boot downgrades to serving
    /// the persisted state, it never stops the server.
    pub async fn start(&self) {
        let persisted = self.store.load();
        info!(
            "Hydrated session with {} linked wallet(s), active: {}",
            persisted.addresses.len(),
            persisted.active_address.as_deref().unwrap_or("none")
        );
        {
            let mut state = self.state.lock().await;
            *state = persisted;
        }

        let result = match self.rehydrate_active().await {
            Some((provider, batch)) => self.reconcile(provider, batch).await,
            None => self.refresh().await,
        };
        if let Err(e) = result {
            warn!("Startup reconciliation failed, serving persisted state: {}", e);
        }
    }

    /// Reconnect the active wallet's provider if its transport needs it
    ///
    /// Only the wallet-connect bridge does today; extension grants survive
    /// without us. Returns the reconnected batch, or None when a plain
    /// refresh is enough.
    async fn rehydrate_active(&self) -> Option<(ProviderKind, Vec<RawWallet>)> {
        let (kind, provider) = {
            let state = self.state.lock().await;
            let record = state.active_record()?;
            let provider = self.providers.get(record.provider)?;
            if !provider.rehydrate(record) {
                return None;
            }
            (record.provider, provider)
        };

        match provider.connect().await {
            Ok(batch) if !batch.is_empty() => {
                info!("Re-established {} session with {} wallet(s)", kind, batch.len());
                Some((kind, batch))
            }
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to re-establish {} session: {}", kind, e);
                None
            }
        }
    }

    // ============================================================================
    // Reconciliation
    // ============================================================================

    /// Link a provider batch into the session
    pub async fn reconcile(
        &self,
        provider: ProviderKind,
        accounts: Vec<RawWallet>,
    ) -> Result<SessionSnapshot, SessionError> {
        self.reconcile_inner(Some((provider, accounts))).await
    }

    /// Re-enrich the current list without membership changes
    pub async fn refresh(&self) -> Result<SessionSnapshot, SessionError> {
        self.reconcile_inner(None).await
    }

    async fn reconcile_inner(
        &self,
        incoming: Option<(ProviderKind, Vec<RawWallet>)>,
    ) -> Result<SessionSnapshot, SessionError> {
        let mut state = self.state.lock().await;

        let pending = match &incoming {
            Some((provider, accounts)) => {
                reconcile::merge_addresses(&state.addresses, *provider, accounts)
            }
            None => reconcile::existing_entries(&state.addresses),
        };

        if pending.is_empty() {
            return Ok(snapshot_of(&state, &self.config));
        }

        let addresses: Vec<String> = pending.iter().map(|entry| entry.address.clone()).collect();
        let accounts = self.indexer.lookup_accounts(&addresses).await?;

        let mut merged: Vec<WalletRecord> = pending
            .into_iter()
            .zip(accounts)
            .map(|(entry, account)| WalletRecord::new(entry.provider, account))
            .collect();

        let active_address = reconcile::select_active(state.active_address.as_deref(), &merged);
        if let Some(active) = &active_address {
            reconcile::promote_active(&mut merged, active);
        }

        let next = SessionState {
            addresses: merged,
            active_address,
        };
        self.store.commit(&next)?;
        *state = next;

        info!(
            "Session reconciled: {} wallet(s), active: {}",
            state.addresses.len(),
            state.active_address.as_deref().unwrap_or("none")
        );
        Ok(snapshot_of(&state, &self.config))
    }

    // ============================================================================
    // Disconnect
    // ============================================================================

    /// Unlink one wallet, handing the active selection to a survivor
    ///
    /// Removing the last wallet clears the whole session. Provider teardown
    /// is best-effort: a dead bridge must not pin a wallet in the session.
    pub async fn disconnect(&self, address: &str) -> Result<SessionSnapshot, SessionError> {
        let mut state = self.state.lock().await;

        let record = state
            .addresses
            .iter()
            .find(|record| record.address() == address)
            .cloned()
            .ok_or_else(|| SessionError::AddressNotLinked(address.to_string()))?;

        match self.providers.get(record.provider) {
            Some(provider) => {
                if let Err(e) = provider.disconnect(address).await {
                    warn!("Provider teardown failed for {}: {}", address, e);
                }
            }
            None => warn!(
                "No adapter registered for {}, skipping teardown",
                record.provider
            ),
        }

        let next = if state.addresses.len() > 1 {
            let remaining: Vec<WalletRecord> = state
                .addresses
                .iter()
                .filter(|record| record.address() != address)
                .cloned()
                .collect();
            let active_address = match state.active_address.as_deref() {
                Some(current) if current != address => Some(current.to_string()),
                _ => remaining.first().map(|record| record.address().to_string()),
            };
            SessionState {
                addresses: remaining,
                active_address,
            }
        } else {
            info!("Last wallet disconnected, clearing session");
            SessionState::default()
        };

        self.store.commit(&next)?;
        *state = next;

        info!(
            "Disconnected {}: {} wallet(s) remain, active: {}",
            address,
            state.addresses.len(),
            state.active_address.as_deref().unwrap_or("none")
        );
        Ok(snapshot_of(&state, &self.config))
    }

    // ============================================================================
    // Read model
    // ============================================================================

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        snapshot_of(&state, &self.config)
    }
}

fn snapshot_of(state: &SessionState, config: &SessionConfig) -> SessionSnapshot {
    SessionSnapshot {
        addresses: state.addresses.clone(),
        active_wallet: state.active_record().cloned(),
        min_rewards_balance: config.min_rewards_balance,
    }
}
