/// Ledger indexer HTTP client
///
/// Thin reqwest wrapper over the indexer's account lookup endpoint. Lookups
/// always pass `include-all=true` so closed-out accounts still resolve, and
/// a 404 becomes a placeholder record instead of an error: an address the
/// ledger has never seen is still a linkable wallet.

use log::{debug, warn};
use thiserror::Error;

use crate::indexer::types::{AccountInfo, AccountLookup};

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Indexer returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Malformed indexer response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Lookup failure tagged with the address that triggered it
#[derive(Error, Debug)]
#[error("Account lookup failed for {address}: {source}")]
pub struct FetchError {
    pub address: String,
    #[source]
    pub source: IndexerError,
}

#[derive(Debug, Clone)]
pub struct IndexerClient {
    base_url: String,
    client: reqwest::Client,
}

impl IndexerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the full account record for one address
    ///
    /// Returns a placeholder (`AccountInfo::absent`) when the indexer has no
    /// record of the address.
    pub async fn lookup_account(&self, address: &str) -> Result<AccountInfo, IndexerError> {
        let url = format!("{}/v2/accounts/{}?include-all=true", self.base_url, address);
        debug!("Looking up account {}", address);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            warn!("Address {} not found on ledger, using placeholder", address);
            return Ok(AccountInfo::absent(address));
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(IndexerError::Status { status, body });
        }

        let lookup: AccountLookup = serde_json::from_str(&body)?;
        let mut account = lookup.account;
        if account.address.is_empty() {
            // Some indexer deployments omit the address from the envelope
            account.address = address.to_string();
        }
        Ok(account)
    }

    /// Fetch records for every address, preserving input order
    ///
    /// Fails fast on the first lookup error so callers never commit a
    /// half-enriched batch.
    pub async fn lookup_accounts(&self, addresses: &[String]) -> Result<Vec<AccountInfo>, FetchError> {
        let lookups = addresses.iter().map(|address| async move {
            self.lookup_account(address)
                .await
                .map_err(|source| FetchError {
                    address: address.clone(),
                    source,
                })
        });

        futures::future::try_join_all(lookups).await
    }
}
