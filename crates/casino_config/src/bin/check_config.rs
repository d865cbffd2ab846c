//! Builds the platform configuration and reports whether it is valid.
//!
//! Run in CI so a bad address literal or a fee above the creator ceiling
//! fails the pipeline instead of reaching players.

use std::process::ExitCode;

use casino_config::PlatformConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "check_config", about = "Validate the platform configuration")]
struct Args {
    /// Print the validated configuration as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match casino_config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid platform configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    report(&config);

    if args.json {
        match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to serialize configuration: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn report(config: &PlatformConfig) {
    let fees = config.fees();
    tracing::info!(
        creator_bps = fees.creator_fee_bps(),
        jackpot_bps = fees.jackpot_fee_bps(),
        referral_bps = fees.referral_fee_bps(),
        "Fees"
    );
    for (index, pool) in config.pools().iter().enumerate() {
        let symbol = config
            .static_metadata(&pool.token)
            .and_then(|token| token.symbol.as_deref())
            .unwrap_or("?");
        tracing::info!(
            index,
            token = %pool.token,
            symbol,
            private = pool.is_private(),
            "Pool"
        );
    }
}
