use serde::Deserialize;

use crate::providers::{ProviderKind, RawWallet};

#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    pub provider: ProviderKind,
    #[serde(default)]
    pub accounts: Vec<RawWallet>,
}

#[derive(Debug, Deserialize)]
pub struct DisconnectRequest {
    pub address: String,
}
