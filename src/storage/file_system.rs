use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::StorageError;
use crate::storage::models::{SessionState, WalletRecord};

const ADDRESS_LIST_FILE: &str = "wallet-address-list.json";
const ACTIVE_WALLET_FILE: &str = "active-wallet.json";

/// File-backed session store
///
/// Two slots under one directory: the ordered wallet list and the active
/// wallet record. `load` never fails; a corrupt or missing slot degrades to
/// its empty value so a damaged disk can't keep the engine from starting.
pub struct SessionStore {
    base_dir: PathBuf,
}

impl SessionStore {
    pub fn new_with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn address_list_path(&self) -> PathBuf {
        self.base_dir.join(ADDRESS_LIST_FILE)
    }

    fn active_wallet_path(&self) -> PathBuf {
        self.base_dir.join(ACTIVE_WALLET_FILE)
    }

    /// Read persisted session state, healing whatever is damaged
    ///
    /// Duplicate addresses keep their first occurrence, an active slot that
    /// points at no listed wallet is dropped, and an empty list clears the
    /// active selection.
    pub fn load(&self) -> SessionState {
        let addresses = match fs::read_to_string(self.address_list_path()) {
            Ok(raw) => match serde_json::from_str::<Vec<WalletRecord>>(&raw) {
                Ok(records) => dedup_records(records),
                Err(e) => {
                    warn!("⚠️ Corrupt wallet list, starting empty: {}", e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        let mut active_address = match fs::read_to_string(self.active_wallet_path()) {
            Ok(raw) => match serde_json::from_str::<WalletRecord>(&raw) {
                Ok(record) => Some(record.address().to_string()),
                Err(e) => {
                    warn!("⚠️ Corrupt active wallet slot, ignoring: {}", e);
                    None
                }
            },
            Err(_) => None,
        };

        if let Some(active) = &active_address {
            if !addresses.iter().any(|record| record.address() == active) {
                warn!("⚠️ Active wallet {} not in list, clearing selection", active);
                active_address = None;
            }
        }
        if addresses.is_empty() {
            active_address = None;
        }

        SessionState {
            addresses,
            active_address,
        }
    }

    /// Write both slots to disk
    ///
    /// An empty wallet list erases the store entirely instead of leaving a
    /// `[]` file behind.
    pub fn commit(&self, state: &SessionState) -> Result<(), StorageError> {
        if state.addresses.is_empty() {
            return self.erase();
        }

        fs::create_dir_all(&self.base_dir)?;

        let list_json = serde_json::to_string_pretty(&state.addresses)?;
        fs::write(self.address_list_path(), list_json)?;

        match state.active_record() {
            Some(record) => {
                let active_json = serde_json::to_string_pretty(record)?;
                fs::write(self.active_wallet_path(), active_json)?;
            }
            None => remove_if_present(&self.active_wallet_path())?,
        }

        debug!(
            "Committed {} wallet record(s) to {:?}",
            state.addresses.len(),
            self.base_dir
        );
        Ok(())
    }

    /// Remove both slots from disk
    pub fn erase(&self) -> Result<(), StorageError> {
        remove_if_present(&self.address_list_path())?;
        remove_if_present(&self.active_wallet_path())?;
        Ok(())
    }
}

fn remove_if_present(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Drop repeated addresses, keeping the earliest record for each
fn dedup_records(records: Vec<WalletRecord>) -> Vec<WalletRecord> {
    let mut seen: Vec<WalletRecord> = Vec::with_capacity(records.len());
    for record in records {
        if !seen.iter().any(|kept| kept.address() == record.address()) {
            seen.push(record);
        }
    }
    seen
}
