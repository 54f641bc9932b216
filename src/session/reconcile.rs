/// Reconciliation primitives
///
/// Pure helpers for merging provider-reported addresses into the linked
/// list and carrying the active selection across membership changes. The
/// manager owns the I/O; everything here is deterministic list surgery.

use crate::providers::{ProviderKind, RawWallet};
use crate::storage::WalletRecord;

/// An address queued for ledger enrichment, tagged with the provider it
/// belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    pub address: String,
    pub provider: ProviderKind,
}

/// Merge a provider batch into the existing linked list
///
/// Existing wallets keep their position and provider tag. New addresses are
/// appended in the order the provider reported them; blanks and repeats are
/// dropped.
pub fn merge_addresses(
    existing: &[WalletRecord],
    provider: ProviderKind,
    incoming: &[RawWallet],
) -> Vec<PendingEntry> {
    let mut entries = existing_entries(existing);

    for wallet in incoming {
        let address = wallet.address.trim();
        if address.is_empty() {
            continue;
        }
        if !entries.iter().any(|entry| entry.address == address) {
            entries.push(PendingEntry {
                address: address.to_string(),
                provider,
            });
        }
    }

    entries
}

/// Re-queue the current linked list without membership changes
pub fn existing_entries(existing: &[WalletRecord]) -> Vec<PendingEntry> {
    existing
        .iter()
        .map(|record| PendingEntry {
            address: record.address().to_string(),
            provider: record.provider,
        })
        .collect()
}

/// Pick the active wallet for a reconciled list
///
/// The previous selection survives if its address is still linked;
/// otherwise the first wallet takes over, and an empty list clears the
/// selection.
pub fn select_active(previous: Option<&str>, records: &[WalletRecord]) -> Option<String> {
    if let Some(previous) = previous {
        if records.iter().any(|record| record.address() == previous) {
            return Some(previous.to_string());
        }
    }
    records.first().map(|record| record.address().to_string())
}

/// Move the active wallet's record to the front of the list
pub fn promote_active(records: &mut Vec<WalletRecord>, active: &str) {
    if let Some(index) = records.iter().position(|record| record.address() == active) {
        if index > 0 {
            let record = records.remove(index);
            records.insert(0, record);
        }
    }
}
