use std::fs;

use serde_json::json;
use tempfile::TempDir;

use rewards_wallet::indexer::AccountInfo;
use rewards_wallet::providers::ProviderKind;
use rewards_wallet::storage::{SessionState, SessionStore, WalletRecord};

const ADDR_ALICE: &str = "ADDR-ALICE";
const ADDR_BOB: &str = "ADDR-BOB";

fn init_logs() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

fn record(provider: ProviderKind, address: &str, amount: u64) -> WalletRecord {
    let mut account = AccountInfo::absent(address);
    account.amount = amount;
    WalletRecord::new(provider, account)
}

fn store(temp_dir: &TempDir) -> SessionStore {
    SessionStore::new_with_base_dir(temp_dir.path().to_path_buf())
}

#[test]
fn test_load_from_missing_directory_returns_empty() {
    init_logs();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SessionStore::new_with_base_dir(temp_dir.path().join("never-written"));

    let state = store.load();
    assert!(state.addresses.is_empty());
    assert!(state.active_address.is_none());
}

#[test]
fn test_commit_then_load_round_trip() {
    init_logs();
    log::info!("=== Starting Storage Round Trip Test ===");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = store(&temp_dir);

    let mut account = AccountInfo::absent(ADDR_ALICE);
    account.amount = 5_000_000;
    account.extra.insert("sig-type".to_string(), json!("sig"));
    let alice = WalletRecord::new(ProviderKind::Extension, account);
    let bob = record(ProviderKind::WalletConnect, ADDR_BOB, 1_000_000);

    let state = SessionState {
        addresses: vec![alice, bob],
        active_address: Some(ADDR_BOB.to_string()),
    };
    store.commit(&state).expect("Commit should succeed");

    let loaded = store.load();
    assert_eq!(loaded.addresses.len(), 2);
    assert_eq!(loaded.addresses[0].address(), ADDR_ALICE);
    assert_eq!(loaded.addresses[0].provider, ProviderKind::Extension);
    assert_eq!(loaded.addresses[0].account.extra["sig-type"], json!("sig"));
    assert_eq!(loaded.addresses[1].provider, ProviderKind::WalletConnect);
    assert_eq!(loaded.active_address.as_deref(), Some(ADDR_BOB));
}

#[test]
fn test_corrupt_list_starts_empty() {
    init_logs();
    log::info!("=== Starting Corrupt List Test ===");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = store(&temp_dir);

    fs::write(
        temp_dir.path().join("wallet-address-list.json"),
        "{ not valid json",
    )
    .expect("Failed to write fixture");

    let state = store.load();
    assert!(state.addresses.is_empty());
    assert!(state.active_address.is_none());
}

#[test]
fn test_corrupt_active_slot_keeps_list() {
    init_logs();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = store(&temp_dir);

    let state = SessionState {
        addresses: vec![record(ProviderKind::Extension, ADDR_ALICE, 1)],
        active_address: Some(ADDR_ALICE.to_string()),
    };
    store.commit(&state).expect("Commit should succeed");

    fs::write(temp_dir.path().join("active-wallet.json"), "garbage")
        .expect("Failed to corrupt fixture");

    let loaded = store.load();
    assert_eq!(loaded.addresses.len(), 1);
    assert!(loaded.active_address.is_none());
}

#[test]
fn test_dangling_active_slot_cleared() {
    init_logs();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = store(&temp_dir);

    let state = SessionState {
        addresses: vec![record(ProviderKind::Extension, ADDR_ALICE, 1)],
        active_address: Some(ADDR_ALICE.to_string()),
    };
    store.commit(&state).expect("Commit should succeed");

    // Overwrite the active slot with a wallet the list does not contain
    let stray = record(ProviderKind::Extension, ADDR_BOB, 2);
    fs::write(
        temp_dir.path().join("active-wallet.json"),
        serde_json::to_string_pretty(&stray).expect("Serialize fixture"),
    )
    .expect("Failed to write fixture");

    let loaded = store.load();
    assert_eq!(loaded.addresses.len(), 1);
    assert!(loaded.active_address.is_none());
}

#[test]
fn test_duplicate_records_keep_first() {
    init_logs();
    log::info!("=== Starting Duplicate Record Test ===");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = store(&temp_dir);

    let records = vec![
        record(ProviderKind::Extension, ADDR_ALICE, 1),
        record(ProviderKind::WalletConnect, ADDR_BOB, 2),
        record(ProviderKind::WalletConnect, ADDR_ALICE, 3),
    ];
    fs::write(
        temp_dir.path().join("wallet-address-list.json"),
        serde_json::to_string_pretty(&records).expect("Serialize fixture"),
    )
    .expect("Failed to write fixture");

    let loaded = store.load();
    assert_eq!(loaded.addresses.len(), 2);
    assert_eq!(loaded.addresses[0].address(), ADDR_ALICE);
    assert_eq!(loaded.addresses[0].provider, ProviderKind::Extension);
    assert_eq!(loaded.addresses[0].account.amount, 1);
    assert_eq!(loaded.addresses[1].address(), ADDR_BOB);
}

#[test]
fn test_commit_empty_state_erases_files() {
    init_logs();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = store(&temp_dir);

    let state = SessionState {
        addresses: vec![record(ProviderKind::Extension, ADDR_ALICE, 1)],
        active_address: Some(ADDR_ALICE.to_string()),
    };
    store.commit(&state).expect("Commit should succeed");
    assert!(temp_dir.path().join("wallet-address-list.json").exists());
    assert!(temp_dir.path().join("active-wallet.json").exists());

    store.commit(&SessionState::default()).expect("Empty commit should succeed");
    assert!(!temp_dir.path().join("wallet-address-list.json").exists());
    assert!(!temp_dir.path().join("active-wallet.json").exists());
}

#[test]
fn test_commit_without_active_removes_stale_slot() {
    init_logs();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = store(&temp_dir);

    let with_active = SessionState {
        addresses: vec![record(ProviderKind::Extension, ADDR_ALICE, 1)],
        active_address: Some(ADDR_ALICE.to_string()),
    };
    store.commit(&with_active).expect("Commit should succeed");
    assert!(temp_dir.path().join("active-wallet.json").exists());

    let without_active = SessionState {
        addresses: with_active.addresses.clone(),
        active_address: None,
    };
    store.commit(&without_active).expect("Commit should succeed");

    assert!(temp_dir.path().join("wallet-address-list.json").exists());
    assert!(!temp_dir.path().join("active-wallet.json").exists());
}
