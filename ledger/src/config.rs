use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One supported network and the symbol of its native gas token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub network: String,
    pub token_symbol: String,
}

/// Bring-up configuration: the initial supported-network set.
///
/// Duplicate identifiers collapse through the idempotent network-addition
/// path; the first token symbol wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub networks: Vec<NetworkConfig>,
}

impl LedgerConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

impl Default for LedgerConfig {
    /// The fixed bring-up set of six networks.
    fn default() -> Self {
        let networks = [
            ("ethereum", "ETH"),
            ("base", "ETH"),
            ("arbitrum", "ETH"),
            ("polygon", "MATIC"),
            ("optimism", "ETH"),
            ("arc", "USDC"),
        ]
        .into_iter()
        .map(|(network, token_symbol)| NetworkConfig {
            network: network.to_string(),
            token_symbol: token_symbol.to_string(),
        })
        .collect();

        Self { networks }
    }
}
