use anchor_lang::prelude::Pubkey;
use serde::Serialize;

use crate::address::{pubkey_string, IntoAddress};
use crate::errors::{ConfigError, ConfigResult};

/// Decimals assumed when neither the static list nor the fetcher knows them.
pub const DEFAULT_DECIMALS: u8 = 9;

/// Display and default-wager information for one token. Only `mint` is
/// required; missing fields come from the metadata fetcher or from
/// [`TokenMetadata::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMetadata {
    #[serde(with = "pubkey_string")]
    pub mint: Pubkey,
    pub name: Option<String>,
    pub symbol: Option<String>,
    /// Absolute URL or a path served by the front-end.
    pub image: Option<String>,
    /// Default wager in the token's smallest unit.
    pub base_wager: Option<u64>,
    pub decimals: Option<u8>,
    pub usd_price: Option<f64>,
}

impl TokenMetadata {
    pub fn new<M: IntoAddress>(mint: M) -> ConfigResult<Self> {
        Ok(Self::for_mint(mint.into_address("token mint")?))
    }

    pub fn for_mint(mint: Pubkey) -> Self {
        Self {
            mint,
            name: None,
            symbol: None,
            image: None,
            base_wager: None,
            decimals: None,
            usd_price: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_base_wager(mut self, base_wager: u64) -> Self {
        self.base_wager = Some(base_wager);
        self
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn with_usd_price(mut self, usd_price: f64) -> Self {
        self.usd_price = Some(usd_price);
        self
    }

    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if let Some(value) = self.usd_price {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidUsdPrice {
                    mint: self.mint,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Fills every field this record leaves empty from `fallback`.
    /// Fields already set here win.
    pub fn merge(self, fallback: TokenMetadata) -> Self {
        Self {
            mint: self.mint,
            name: self.name.or(fallback.name),
            symbol: self.symbol.or(fallback.symbol),
            image: self.image.or(fallback.image),
            base_wager: self.base_wager.or(fallback.base_wager),
            decimals: self.decimals.or(fallback.decimals),
            usd_price: self.usd_price.or(fallback.usd_price),
        }
    }

    /// Produces a complete record, using placeholder values for anything
    /// still unknown.
    pub fn resolve(&self) -> ResolvedTokenMetadata {
        let decimals = self.decimals.unwrap_or(DEFAULT_DECIMALS);
        let mint = self.mint.to_string();
        ResolvedTokenMetadata {
            mint: self.mint,
            name: self.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            symbol: self
                .symbol
                .clone()
                .unwrap_or_else(|| mint.chars().take(4).collect()),
            image: self.image.clone().unwrap_or_default(),
            base_wager: self
                .base_wager
                .unwrap_or_else(|| 10u64.saturating_pow(u32::from(decimals))),
            decimals,
            usd_price: self.usd_price.unwrap_or(0.0),
        }
    }
}

/// A [`TokenMetadata`] with every field populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTokenMetadata {
    #[serde(with = "pubkey_string")]
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub base_wager: u64,
    pub decimals: u8,
    pub usd_price: f64,
}
