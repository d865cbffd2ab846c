//! Dynamic token metadata.
//!
//! Tokens missing from the static metadata list can be looked up through a
//! [`TokenMetadataFetcher`]. The platform only gets one when a metadata API
//! credential is configured; otherwise the capability is absent and callers
//! fall back to static or placeholder metadata.

use std::sync::Arc;

use anchor_lang::prelude::Pubkey;
use async_trait::async_trait;

use crate::env::PlatformEnv;
use crate::errors::FetchError;
use crate::state::TokenMetadata;

pub mod helius;

pub use helius::HeliusTokenFetcher;

/// Dollar value of the default wager derived by fetchers.
pub const DEFAULT_DOLLAR_BASE_WAGER: f64 = 1.0;

/// Looks up metadata for a mint. May be called concurrently for many mints.
#[async_trait]
pub trait TokenMetadataFetcher: Send + Sync {
    async fn fetch(&self, mint: &Pubkey) -> Result<TokenMetadata, FetchError>;
}

pub type SharedMetadataFetcher = Arc<dyn TokenMetadataFetcher>;

/// Builds the Helius fetcher when `env` carries an API key.
pub fn select_fetcher(env: &PlatformEnv, dollar_base_wager: f64) -> Option<SharedMetadataFetcher> {
    match env.metadata_api_key.as_deref() {
        Some(api_key) => {
            tracing::info!(dollar_base_wager, "Token metadata fetcher enabled (Helius)");
            Some(Arc::new(HeliusTokenFetcher::new(api_key, dollar_base_wager)))
        }
        None => {
            tracing::info!("No metadata API key configured, using static token metadata only");
            None
        }
    }
}
