//! The platform configuration handed to the wagering front-end.
//!
//! A [`PlatformConfig`] is assembled once through [`PlatformConfigBuilder`],
//! validated as a whole, and shared read-only for the rest of the process.

use std::collections::HashSet;
use std::fmt;

use anchor_lang::prelude::Pubkey;
use serde::Serialize;
use url::Url;

use crate::env::PlatformEnv;
use crate::errors::{ConfigError, ConfigResult};
use crate::fetcher::SharedMetadataFetcher;
use crate::state::{FeeParameters, PlatformIdentity, PoolDescriptor, TokenMetadata};

#[derive(Clone, Serialize)]
pub struct PlatformConfig {
    rpc_endpoint: Url,
    identity: PlatformIdentity,
    fees: FeeParameters,
    /// Order matters: the first pool is the default selection.
    pools: Vec<PoolDescriptor>,
    token_metadata: Vec<TokenMetadata>,
    #[serde(rename = "metadata_fetcher_enabled", serialize_with = "serialize_fetcher")]
    metadata_fetcher: Option<SharedMetadataFetcher>,
}

impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("rpc_endpoint", &self.rpc_endpoint.as_str())
            .field("identity", &self.identity)
            .field("fees", &self.fees)
            .field("pools", &self.pools)
            .field("token_metadata", &self.token_metadata)
            .field("metadata_fetcher", &self.metadata_fetcher.is_some())
            .finish()
    }
}

impl PlatformConfig {
    pub fn builder(identity: PlatformIdentity, fees: FeeParameters) -> PlatformConfigBuilder {
        PlatformConfigBuilder::new(identity, fees)
    }

    pub fn rpc_endpoint(&self) -> &Url {
        &self.rpc_endpoint
    }

    pub fn identity(&self) -> &PlatformIdentity {
        &self.identity
    }

    pub fn fees(&self) -> &FeeParameters {
        &self.fees
    }

    pub fn pools(&self) -> &[PoolDescriptor] {
        &self.pools
    }

    /// Pool selected for new sessions.
    pub fn default_pool(&self) -> &PoolDescriptor {
        // `build` rejects an empty pool list.
        &self.pools[0]
    }

    pub fn token_metadata(&self) -> &[TokenMetadata] {
        &self.token_metadata
    }

    /// `None` means no dynamic metadata is available; it is not an error.
    pub fn metadata_fetcher(&self) -> Option<&SharedMetadataFetcher> {
        self.metadata_fetcher.as_ref()
    }

    /// First pool listed for `mint`, public or private.
    pub fn pool_for_token(&self, mint: &Pubkey) -> Option<&PoolDescriptor> {
        self.pools.iter().find(|pool| pool.token == *mint)
    }

    pub fn static_metadata(&self, mint: &Pubkey) -> Option<&TokenMetadata> {
        self.token_metadata.iter().find(|token| token.mint == *mint)
    }

    /// Static metadata for `mint`, completed by the fetcher when one is
    /// configured. Fetch failures are logged and the static record (or an
    /// empty one) is returned.
    pub async fn resolve_metadata(&self, mint: &Pubkey) -> TokenMetadata {
        let known = self
            .static_metadata(mint)
            .cloned()
            .unwrap_or_else(|| TokenMetadata::for_mint(*mint));

        let Some(fetcher) = &self.metadata_fetcher else {
            return known;
        };

        match fetcher.fetch(mint).await {
            Ok(fetched) => known.merge(fetched),
            Err(e) => {
                tracing::warn!(%mint, error = %e, "Failed to fetch token metadata");
                known
            }
        }
    }
}

/// Collects the tables of a [`PlatformConfig`] and validates them together.
pub struct PlatformConfigBuilder {
    rpc_endpoint: Option<Url>,
    identity: PlatformIdentity,
    fees: FeeParameters,
    pools: Vec<PoolDescriptor>,
    token_metadata: Vec<TokenMetadata>,
    metadata_fetcher: Option<SharedMetadataFetcher>,
}

impl PlatformConfigBuilder {
    pub fn new(identity: PlatformIdentity, fees: FeeParameters) -> Self {
        Self {
            rpc_endpoint: None,
            identity,
            fees,
            pools: Vec::new(),
            token_metadata: Vec::new(),
            metadata_fetcher: None,
        }
    }

    /// Takes the RPC endpoint from `env`. The fetcher is chosen separately
    /// with [`crate::fetcher::select_fetcher`].
    pub fn env(mut self, env: &PlatformEnv) -> Self {
        self.rpc_endpoint = Some(env.rpc_endpoint.clone());
        self
    }

    pub fn rpc_endpoint(mut self, rpc_endpoint: Url) -> Self {
        self.rpc_endpoint = Some(rpc_endpoint);
        self
    }

    pub fn pool(mut self, pool: PoolDescriptor) -> Self {
        self.pools.push(pool);
        self
    }

    pub fn pools(mut self, pools: impl IntoIterator<Item = PoolDescriptor>) -> Self {
        self.pools.extend(pools);
        self
    }

    pub fn token(mut self, token: TokenMetadata) -> Self {
        self.token_metadata.push(token);
        self
    }

    pub fn tokens(mut self, tokens: impl IntoIterator<Item = TokenMetadata>) -> Self {
        self.token_metadata.extend(tokens);
        self
    }

    pub fn metadata_fetcher(mut self, fetcher: Option<SharedMetadataFetcher>) -> Self {
        self.metadata_fetcher = fetcher;
        self
    }

    pub fn build(self) -> ConfigResult<PlatformConfig> {
        self.fees.validate()?;

        if self.pools.is_empty() {
            return Err(ConfigError::EmptyPoolList);
        }
        let mut seen_pools = HashSet::new();
        for pool in &self.pools {
            if !seen_pools.insert((pool.token, pool.authority)) {
                return Err(ConfigError::DuplicatePool {
                    token: pool.token,
                    authority: pool.authority,
                });
            }
        }

        let mut seen_mints = HashSet::new();
        for token in &self.token_metadata {
            token.validate()?;
            if !seen_mints.insert(token.mint) {
                return Err(ConfigError::DuplicateTokenMetadata(token.mint));
            }
        }

        let rpc_endpoint = match self.rpc_endpoint {
            Some(url) => url,
            None => Url::parse(crate::env::DEFAULT_RPC_ENDPOINT).map_err(|source| {
                ConfigError::InvalidRpcEndpoint {
                    value: crate::env::DEFAULT_RPC_ENDPOINT.to_string(),
                    source,
                }
            })?,
        };

        let config = PlatformConfig {
            rpc_endpoint,
            identity: self.identity,
            fees: self.fees,
            pools: self.pools,
            token_metadata: self.token_metadata,
            metadata_fetcher: self.metadata_fetcher,
        };

        tracing::info!(
            creator = %config.identity.creator,
            pools = config.pools.len(),
            tokens = config.token_metadata.len(),
            default_pool = %config.default_pool().token,
            creator_fee_bps = config.fees.creator_fee_bps(),
            metadata_fetcher = config.metadata_fetcher.is_some(),
            "Platform configuration loaded"
        );

        Ok(config)
    }
}

fn serialize_fetcher<S: serde::Serializer>(
    fetcher: &Option<SharedMetadataFetcher>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(fetcher.is_some())
}
