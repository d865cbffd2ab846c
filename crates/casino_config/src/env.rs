//! Environment inputs, read once at startup.
//!
//! Environment:
//! - `.env` values loaded first when present
//! - `RPC_ENDPOINT` — Solana JSON-RPC endpoint, defaults to the public mainnet RPC
//! - `HELIUS_API_KEY` — optional credential enabling the metadata fetcher

use url::Url;

use crate::errors::{ConfigError, ConfigResult};

pub const ENV_RPC_ENDPOINT: &str = "RPC_ENDPOINT";
pub const ENV_HELIUS_API_KEY: &str = "HELIUS_API_KEY";

pub const DEFAULT_RPC_ENDPOINT: &str = "https://api.mainnet-beta.solana.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformEnv {
    pub rpc_endpoint: Url,
    /// Metadata API credential. `None` disables dynamic metadata.
    pub metadata_api_key: Option<String>,
}

impl PlatformEnv {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads variables through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let rpc_endpoint = read(ENV_RPC_ENDPOINT).unwrap_or_else(|| DEFAULT_RPC_ENDPOINT.to_string());
        let rpc_endpoint = Url::parse(&rpc_endpoint).map_err(|source| ConfigError::InvalidRpcEndpoint {
            value: rpc_endpoint.clone(),
            source,
        })?;

        Ok(Self {
            rpc_endpoint,
            metadata_api_key: read(ENV_HELIUS_API_KEY),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> ConfigResult<PlatformEnv> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlatformEnv::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_public_rpc() {
        let env = env_from(&[]).unwrap();
        assert_eq!(env.rpc_endpoint.as_str(), "https://api.mainnet-beta.solana.com/");
        assert_eq!(env.metadata_api_key, None);
    }

    #[test]
    fn reads_both_variables() {
        let env = env_from(&[
            (ENV_RPC_ENDPOINT, "https://rpc.example.com"),
            (ENV_HELIUS_API_KEY, "abc123"),
        ])
        .unwrap();
        assert_eq!(env.rpc_endpoint.host_str(), Some("rpc.example.com"));
        assert_eq!(env.metadata_api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn blank_api_key_is_absent() {
        let env = env_from(&[(ENV_HELIUS_API_KEY, "  ")]).unwrap();
        assert_eq!(env.metadata_api_key, None);
    }

    #[test]
    fn malformed_rpc_endpoint_is_fatal() {
        let err = env_from(&[(ENV_RPC_ENDPOINT, "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRpcEndpoint { .. }));
    }
}
