/// Common test utilities for session engine integration tests
///
/// This module provides shared test infrastructure including:
/// - An in-process mock indexer bound to an ephemeral port
/// - Test environment setup with temp storage and both provider adapters
/// - A scripted provider for rehydration and teardown-failure scenarios

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;
use tokio::task::JoinHandle;

use indexer_mock::LedgerState;
use rewards_wallet::config::SessionConfig;
use rewards_wallet::providers::{
    ExtensionProvider, ProviderError, ProviderKind, ProviderRegistry, RawWallet,
    WalletConnectProvider, WalletProvider,
};
use rewards_wallet::session::SessionManager;
use rewards_wallet::storage::WalletRecord;

pub fn init_logs() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

/// Mock indexer listening on an ephemeral local port
pub struct TestIndexer {
    pub base_url: String,
    pub ledger: Arc<LedgerState>,
    handle: JoinHandle<()>,
}

impl TestIndexer {
    pub async fn spawn() -> anyhow::Result<Self> {
        let ledger = Arc::new(LedgerState::new());
        let router = indexer_mock::create_router(ledger.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                log::warn!("Mock indexer stopped: {}", e);
            }
        });

        log::info!("📒 Mock indexer listening on http://{}", addr);
        Ok(Self {
            base_url: format!("http://{}", addr),
            ledger,
            handle,
        })
    }

    /// Seed a ledger account with a balance and asset holdings
    pub async fn seed_account(&self, address: &str, amount: u64, assets: &[(u64, u64)]) {
        let assets: Vec<_> = assets
            .iter()
            .map(|(asset_id, amount)| {
                json!({ "asset-id": asset_id, "amount": amount, "is-frozen": false })
            })
            .collect();
        let account = json!({
            "address": address,
            "amount": amount,
            "amount-without-pending-rewards": amount,
            "pending-rewards": 0,
            "rewards": 0,
            "round": 1000,
            "status": "Online",
            "assets": assets,
        });
        self.ledger.put_account(address, account).await;
    }

    pub async fn remove_account(&self, address: &str) -> bool {
        self.ledger.remove_account(address).await
    }

    pub fn set_outage(&self, active: bool) {
        self.ledger.set_outage(active);
    }
}

impl Drop for TestIndexer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn wallets(addresses: &[&str]) -> Vec<RawWallet> {
    addresses.iter().map(|address| RawWallet::new(*address)).collect()
}

pub fn test_config(indexer_url: &str, storage_dir: PathBuf) -> SessionConfig {
    SessionConfig {
        indexer_url: indexer_url.to_string(),
        storage_dir,
        bind_address: "127.0.0.1:0".to_string(),
        min_rewards_balance: 1_000_000,
    }
}

/// Test environment with automatic cleanup
pub struct TestEnvironment {
    pub indexer: TestIndexer,
    pub temp_dir: TempDir,
    pub extension: Arc<ExtensionProvider>,
    pub walletconnect: Arc<WalletConnectProvider>,
    pub manager: SessionManager,
}

impl TestEnvironment {
    pub async fn new() -> anyhow::Result<Self> {
        let indexer = TestIndexer::spawn().await?;
        let temp_dir = TempDir::new()?;
        log::info!("📁 Test directory: {:?}", temp_dir.path());

        let extension = Arc::new(ExtensionProvider::new());
        let walletconnect = Arc::new(WalletConnectProvider::new());

        let mut registry = ProviderRegistry::new();
        registry.register(extension.clone());
        registry.register(walletconnect.clone());

        let config = test_config(&indexer.base_url, temp_dir.path().to_path_buf());
        let manager = SessionManager::new(config, registry);

        Ok(Self {
            indexer,
            temp_dir,
            extension,
            walletconnect,
            manager,
        })
    }

    /// Build a fresh manager over the same storage directory, as if the
    /// server restarted with clean adapters
    pub fn restarted_manager(&self) -> SessionManager {
        let extension = Arc::new(ExtensionProvider::new());
        let walletconnect = Arc::new(WalletConnectProvider::new());

        let mut registry = ProviderRegistry::new();
        registry.register(extension);
        registry.register(walletconnect);

        let config = test_config(&self.indexer.base_url, self.temp_dir.path().to_path_buf());
        SessionManager::new(config, registry)
    }

    /// Restarted manager with a single scripted adapter standing in for a
    /// real provider
    pub fn restarted_manager_with(&self, provider: Arc<dyn WalletProvider>) -> SessionManager {
        let mut registry = ProviderRegistry::new();
        registry.register(provider);

        let config = test_config(&self.indexer.base_url, self.temp_dir.path().to_path_buf());
        SessionManager::new(config, registry)
    }
}

/// Provider stub with scripted behavior for startup and teardown scenarios
pub struct ScriptedProvider {
    kind: ProviderKind,
    batch: Vec<RawWallet>,
    rehydrates: bool,
    fail_disconnect: bool,
    disconnected: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            batch: Vec::new(),
            rehydrates: false,
            fail_disconnect: false,
            disconnected: Mutex::new(Vec::new()),
        }
    }

    pub fn with_batch(mut self, addresses: &[&str]) -> Self {
        self.batch = addresses.iter().map(|address| RawWallet::new(*address)).collect();
        self
    }

    pub fn rehydrating(mut self) -> Self {
        self.rehydrates = true;
        self
    }

    pub fn failing_disconnect(mut self) -> Self {
        self.fail_disconnect = true;
        self
    }

    pub fn disconnected_addresses(&self) -> Vec<String> {
        self.disconnected.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletProvider for ScriptedProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn connect(&self) -> Result<Vec<RawWallet>, ProviderError> {
        Ok(self.batch.clone())
    }

    async fn disconnect(&self, address: &str) -> Result<(), ProviderError> {
        self.disconnected.lock().unwrap().push(address.to_string());
        if self.fail_disconnect {
            return Err(ProviderError::Backend("scripted teardown failure".to_string()));
        }
        Ok(())
    }

    fn rehydrate(&self, _record: &WalletRecord) -> bool {
        self.rehydrates
    }
}
