use std::collections::HashMap;

use casino_config::deployment::{self, casino_of_bonk};
use casino_config::env::{ENV_HELIUS_API_KEY, ENV_RPC_ENDPOINT};
use casino_config::{
    parse_address, ConfigError, PlatformConfig, PlatformEnv, PoolDescriptor, CREATOR_FEE_CEILING,
};

fn env_with(pairs: &[(&str, &str)]) -> PlatformEnv {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    PlatformEnv::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

fn shipped() -> PlatformConfig {
    casino_of_bonk(&env_with(&[])).unwrap()
}

#[test]
fn shipped_creator_fee_respects_ceiling() {
    let fees = *shipped().fees();
    assert!(fees.creator_fee <= CREATOR_FEE_CEILING, "creator fee {} too high", fees.creator_fee);
    assert_eq!(fees.creator_fee_bps(), 125);
}

#[test]
fn shipped_fees_sum_below_one() {
    let fees = *shipped().fees();
    assert!(fees.creator_fee + fees.jackpot_fee + fees.referral_fee < 1.0);
}

#[test]
fn shipped_pool_addresses_parse() {
    let config = shipped();
    for pool in config.pools() {
        assert_eq!(parse_address("pool token", &pool.token.to_string()).unwrap(), pool.token);
        if let Some(authority) = pool.authority {
            assert_eq!(parse_address("pool authority", &authority.to_string()).unwrap(), authority);
        }
    }
}

#[test]
fn shipped_token_mints_use_pool_validation() {
    let config = shipped();
    for token in config.token_metadata() {
        let pool = PoolDescriptor::public(token.mint.to_string()).unwrap();
        assert_eq!(pool.token, token.mint);
    }
}

#[test]
fn shipped_default_pool_is_fake_token() {
    let config = shipped();
    assert_eq!(config.default_pool(), &config.pools()[0]);
    assert_eq!(config.default_pool().token.to_string(), deployment::FAKE_TOKEN_MINT);
    assert_eq!(config.pools().len(), 4);
    assert!(config.pools().iter().all(|pool| !pool.is_private()));
}

#[test]
fn shipped_identity() {
    let config = shipped();
    let identity = config.identity();
    assert_eq!(identity.creator.to_string(), deployment::PLATFORM_CREATOR_ADDRESS);
    assert_eq!(identity.explorer_url.as_str(), "https://explorer.gamba.so/");
    assert_eq!(identity.sharable_url, "play.casinoofbonk.fun");
    assert!(identity.enable_leaderboard);
    assert!(identity.enable_trollbox);
    assert!(identity.allow_referrer_removal);
    assert_eq!(identity.terms_of_service_html.matches("<p>").count(), 9);
}

#[test]
fn shipped_static_metadata() {
    let config = shipped();
    let bonk = parse_address("mint", deployment::BONK_MINT).unwrap();
    let meta = config.static_metadata(&bonk).unwrap();
    assert_eq!(meta.symbol.as_deref(), Some("BONK"));
    assert_eq!(meta.decimals, Some(6));
    assert_eq!(meta.base_wager, Some(1_000_000));

    let usdc = parse_address("mint", deployment::USDC_MINT).unwrap();
    assert!(config.pool_for_token(&usdc).is_some());
    assert!(config.static_metadata(&usdc).is_none());
}

#[test]
fn fetcher_absent_without_credential() {
    let config = shipped();
    assert!(config.metadata_fetcher().is_none());
}

#[test]
fn fetcher_present_with_credential() {
    let config = casino_of_bonk(&env_with(&[
        (ENV_RPC_ENDPOINT, "https://rpc.example.com"),
        (ENV_HELIUS_API_KEY, "test-key"),
    ]))
    .unwrap();
    assert!(config.metadata_fetcher().is_some());
    assert_eq!(config.rpc_endpoint().host_str(), Some("rpc.example.com"));
}

#[tokio::test]
async fn resolves_static_metadata_without_fetcher() {
    let config = shipped();
    let fake = config.default_pool().token;
    let resolved = config.resolve_metadata(&fake).await.resolve();
    assert_eq!(resolved.symbol, "TCOB");
    assert_eq!(resolved.image, "/fakemoney.png");
    assert_eq!(resolved.base_wager, 1_000_000_000);
}

#[test]
fn sol_pool_scenario() {
    let pool = PoolDescriptor::public("So11111111111111111111111111111111111111112").unwrap();
    assert_eq!(pool.token, anchor_spl::token::spl_token::native_mint::ID);
    assert_eq!(pool.authority, None);
}

#[test]
fn bonk_private_pool_scenario() {
    let pool = PoolDescriptor::private(deployment::BONK_MINT, deployment::PLATFORM_CREATOR_ADDRESS).unwrap();
    assert_eq!(pool.token.to_string(), deployment::BONK_MINT);
    assert_eq!(
        pool.authority.map(|key| key.to_string()).as_deref(),
        Some(deployment::PLATFORM_CREATOR_ADDRESS)
    );
}

#[test]
fn malformed_pool_literal_is_fatal() {
    assert!(matches!(
        PoolDescriptor::public("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB260"),
        Err(ConfigError::InvalidAddress { .. })
    ));
}
