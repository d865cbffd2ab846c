use anchor_lang::solana_program::pubkey::{ParsePubkeyError, Pubkey};
use thiserror::Error;

/// Errors raised while assembling the platform configuration.
///
/// All of them are fatal: the platform cannot run with a malformed pool,
/// token or fee table.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid address for {field}: '{value}' ({source}).")]
    InvalidAddress {
        field: &'static str,
        value: String,
        #[source]
        source: ParsePubkeyError,
    },
    #[error("Invalid URL for {field}: '{value}' ({source}).")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid RPC endpoint '{value}' ({source}).")]
    InvalidRpcEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("The {fee} fee must be a fraction in [0, 1), got {value}.")]
    FeeOutOfRange { fee: &'static str, value: f64 },
    #[error("Creator fee {value} exceeds the maximum of {ceiling}.")]
    CreatorFeeTooHigh { value: f64, ceiling: f64 },
    #[error("Combined fees must stay below 1, got {total}.")]
    FeeSumTooHigh { total: f64 },
    #[error("At least one pool must be configured.")]
    EmptyPoolList,
    #[error("Pool for token {token} (authority {authority:?}) is listed twice.")]
    DuplicatePool {
        token: Pubkey,
        authority: Option<Pubkey>,
    },
    #[error("Token metadata for mint {0} is listed twice.")]
    DuplicateTokenMetadata(Pubkey),
    #[error("USD price for mint {mint} must be a non-negative number, got {value}.")]
    InvalidUsdPrice { mint: Pubkey, value: f64 },
}

/// Errors returned by a metadata fetcher. Never raised while loading the
/// configuration itself.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Metadata request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Metadata API returned error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("No asset found for mint {0}.")]
    AssetNotFound(Pubkey),
    #[error("Metadata API returned an asset for {returned} when {requested} was requested.")]
    MintMismatch { requested: Pubkey, returned: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
