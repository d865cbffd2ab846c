//! The Casino of Bonk deployment.

use crate::env::PlatformEnv;
use crate::errors::ConfigResult;
use crate::fetcher::{select_fetcher, DEFAULT_DOLLAR_BASE_WAGER};
use crate::registry::PlatformConfig;
use crate::state::{FeeParameters, PlatformIdentity, PoolDescriptor, TokenMetadata};

/// Wallet that receives the creator fee for plays on this platform.
pub const PLATFORM_CREATOR_ADDRESS: &str = "cobw9YgxENUhGCLZ3TsEpXCtyJCBKNWFV72b8K973zx";

/// Linked from recent plays.
pub const EXPLORER_URL: &str = "https://explorer.gamba.so";

/// Shown in the share dialog.
pub const PLATFORM_SHARABLE_URL: &str = "play.casinoofbonk.fun";

/// 1.25%. Must not exceed [`crate::state::CREATOR_FEE_CEILING`].
pub const PLATFORM_CREATOR_FEE: f64 = 0.0125;
/// 0.1%
pub const PLATFORM_JACKPOT_FEE: f64 = 0.001;
/// 0.25%
pub const PLATFORM_REFERRAL_FEE: f64 = 0.0025;

pub const PLATFORM_ALLOW_REFERRER_REMOVAL: bool = true;
pub const ENABLE_LEADERBOARD: bool = true;
/// Needs the chat backend deployed alongside the front-end.
pub const ENABLE_TROLLBOX: bool = true;

/// Play-money token used by the protocol's fake pool.
pub const FAKE_TOKEN_MINT: &str = "FakeCDoCX1NWywV9m63fk7gmV9S4seMoyqzcNYEmRYjy";
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const BONK_MINT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const W_MINT: &str = "85VBFQZC9TZkfaptBWjvUw7YbZjy52A6mjtPGjstQAmQ";

pub const TOS_HTML: &str = r#"
  <p><b>1. Age Requirement:</b> Must be at least 18 years old.</p>
  <p><b>2. Legal Compliance:</b> Follow local laws responsibly.</p>
  <p><b>3. Risk Acknowledgement:</b> Games involve risk; no guaranteed winnings.</p>
  <p><b>4. No Warranty:</b> Games provided "as is"; operate randomly.</p>
  <p><b>5. Limitation of Liability:</b> We're not liable for damages.</p>
  <p><b>6. Licensing Disclaimer:</b> Not a licensed casino.</p>
  <p><b>7. Fair Play:</b> Games are conducted fairly and transparently.</p>
  <p><b>8. Data Privacy:</b> Your privacy is important to us.</p>
  <p><b>9. Responsible Gaming:</b> Play responsibly; seek help if needed.</p>
"#;

pub fn identity() -> ConfigResult<PlatformIdentity> {
    Ok(
        PlatformIdentity::new(PLATFORM_CREATOR_ADDRESS, EXPLORER_URL, PLATFORM_SHARABLE_URL)?
            .with_terms_of_service(TOS_HTML)
            .with_leaderboard(ENABLE_LEADERBOARD)
            .with_trollbox(ENABLE_TROLLBOX)
            .with_referrer_removal(PLATFORM_ALLOW_REFERRER_REMOVAL),
    )
}

pub fn fees() -> ConfigResult<FeeParameters> {
    FeeParameters::new(PLATFORM_CREATOR_FEE, PLATFORM_JACKPOT_FEE, PLATFORM_REFERRAL_FEE)
}

/// Supported pools, default first. Each token needs a matching pool on the
/// Gamba explorer; private pools also name their creator.
pub fn pools() -> ConfigResult<Vec<PoolDescriptor>> {
    Ok(vec![
        PoolDescriptor::public(FAKE_TOKEN_MINT)?,
        PoolDescriptor::public(SOL_MINT)?,
        PoolDescriptor::public(BONK_MINT)?,
        PoolDescriptor::public(USDC_MINT)?,
    ])
}

/// Static metadata. Tokens missing here are looked up by the fetcher.
pub fn token_metadata() -> ConfigResult<Vec<TokenMetadata>> {
    Ok(vec![
        TokenMetadata::new(FAKE_TOKEN_MINT)?
            .with_name("TCOB")
            .with_symbol("TCOB")
            .with_image("/fakemoney.png")
            .with_base_wager(1_000_000_000)
            .with_decimals(9)
            .with_usd_price(0.0),
        TokenMetadata::new(W_MINT)?
            .with_name("W")
            .with_symbol("Wormhole")
            .with_image("https://wormhole.com/token.png")
            .with_base_wager(1_000_000)
            .with_decimals(6)
            .with_usd_price(0.0),
        TokenMetadata::new(BONK_MINT)?
            .with_name("BONK")
            .with_symbol("BONK")
            .with_image(
                "https://quei6zhlcfsxdfyes577gy7bkxmuz7qqakyt72xlbkyh7fysmoza.arweave.net/hQiPZOsRZXGXBJd_82PhVdlM_hACsT_q6wqwf5cSY7I",
            )
            .with_base_wager(1_000_000)
            .with_decimals(6)
            .with_usd_price(0.0),
    ])
}

/// Builds the full platform configuration for `env`.
pub fn casino_of_bonk(env: &PlatformEnv) -> ConfigResult<PlatformConfig> {
    PlatformConfig::builder(identity()?, fees()?)
        .env(env)
        .pools(pools()?)
        .tokens(token_metadata()?)
        .metadata_fetcher(select_fetcher(env, DEFAULT_DOLLAR_BASE_WAGER))
        .build()
}
