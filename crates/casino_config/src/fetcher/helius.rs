//! Token metadata from the Helius DAS API (`getAsset`).
//!
//! Results are cached per mint for [`HeliusTokenFetcher::TTL`] so repeated
//! lookups from the UI do not hit the API.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use anchor_lang::prelude::Pubkey;
use anchor_spl::token::spl_token::native_mint;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::TokenMetadataFetcher;
use crate::errors::FetchError;
use crate::state::TokenMetadata;

pub const HELIUS_MAINNET_RPC: &str = "https://mainnet.helius-rpc.com/";

#[derive(Clone, Debug)]
struct CachedMetadata {
    metadata: TokenMetadata,
    cached_at: Instant,
}

impl CachedMetadata {
    fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > HeliusTokenFetcher::TTL
    }
}

pub struct HeliusTokenFetcher {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    dollar_base_wager: f64,
    cache: Arc<RwLock<HashMap<Pubkey, CachedMetadata>>>,
}

impl fmt::Debug for HeliusTokenFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeliusTokenFetcher")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("dollar_base_wager", &self.dollar_base_wager)
            .finish()
    }
}

impl HeliusTokenFetcher {
    /// Token prices move; names and images rarely do.
    pub const TTL: Duration = Duration::from_secs(300);

    pub fn new(api_key: impl Into<String>, dollar_base_wager: f64) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: HELIUS_MAINNET_RPC.to_string(),
            api_key: api_key.into(),
            dollar_base_wager,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Points the fetcher at another DAS-compatible endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn dollar_base_wager(&self) -> f64 {
        self.dollar_base_wager
    }

    async fn cached(&self, mint: &Pubkey) -> Option<TokenMetadata> {
        let cache = self.cache.read().await;
        cache
            .get(mint)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.metadata.clone())
    }

    async fn store(&self, metadata: TokenMetadata) {
        let mut cache = self.cache.write().await;
        cache.retain(|_, entry| !entry.is_expired());
        cache.insert(
            metadata.mint,
            CachedMetadata {
                metadata,
                cached_at: Instant::now(),
            },
        );
    }

    async fn request_asset(&self, mint: &Pubkey) -> Result<Asset, FetchError> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": "casino-config",
            "method": "getAsset",
            "params": { "id": mint.to_string() },
        });

        let response: RpcResponse = self
            .client
            .post(&self.endpoint)
            .query(&[("api-key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(FetchError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response.result.ok_or(FetchError::AssetNotFound(*mint))
    }

    /// Converts a DAS asset into partial metadata for `mint`.
    fn to_metadata(&self, mint: &Pubkey, asset: Asset) -> Result<TokenMetadata, FetchError> {
        if asset.id != mint.to_string() {
            return Err(FetchError::MintMismatch {
                requested: *mint,
                returned: asset.id,
            });
        }

        let token_info = asset.token_info.unwrap_or_default();
        let decimals = token_info
            .decimals
            .or_else(|| (*mint == native_mint::ID).then_some(native_mint::DECIMALS));
        let usd_price = token_info.price_info.and_then(|price| price.price_per_token);
        let content = asset.content.unwrap_or_default();
        let metadata = content.metadata.unwrap_or_default();

        let mut token = TokenMetadata::for_mint(*mint);
        token.name = metadata.name.filter(|name| !name.is_empty());
        token.symbol = token_info
            .symbol
            .or(metadata.symbol)
            .filter(|symbol| !symbol.is_empty());
        token.image = content.links.and_then(|links| links.image);
        token.decimals = decimals;
        token.usd_price = usd_price;
        token.base_wager = match (usd_price, decimals) {
            (Some(price), Some(decimals)) => base_wager(self.dollar_base_wager, price, decimals),
            _ => None,
        };
        Ok(token)
    }
}

/// Smallest-unit amount worth `dollars` at `usd_price`. `None` when the
/// price is unusable.
fn base_wager(dollars: f64, usd_price: f64, decimals: u8) -> Option<u64> {
    if !usd_price.is_finite() || usd_price <= 0.0 {
        return None;
    }
    let amount = (dollars / usd_price * 10f64.powi(i32::from(decimals))).floor();
    (amount.is_finite() && amount >= 1.0 && amount <= u64::MAX as f64).then_some(amount as u64)
}

#[async_trait]
impl TokenMetadataFetcher for HeliusTokenFetcher {
    async fn fetch(&self, mint: &Pubkey) -> Result<TokenMetadata, FetchError> {
        if let Some(metadata) = self.cached(mint).await {
            tracing::debug!(%mint, "Token metadata cache hit");
            return Ok(metadata);
        }

        let asset = self.request_asset(mint).await?;
        let metadata = self.to_metadata(mint, asset)?;
        tracing::debug!(%mint, name = ?metadata.name, usd_price = ?metadata.usd_price, "Fetched token metadata");
        self.store(metadata.clone()).await;
        Ok(metadata)
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Asset>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct Asset {
    id: String,
    content: Option<AssetContent>,
    token_info: Option<TokenInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct AssetContent {
    metadata: Option<ContentMetadata>,
    links: Option<ContentLinks>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentMetadata {
    name: Option<String>,
    symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentLinks {
    image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TokenInfo {
    symbol: Option<String>,
    decimals: Option<u8>,
    price_info: Option<PriceInfo>,
}

#[derive(Debug, Deserialize)]
struct PriceInfo {
    price_per_token: Option<f64>,
}
