//! Platform configuration for the Casino of Bonk wagering front-end.
//!
//! The crate describes which pools can be played, how tokens are displayed,
//! which fees the platform takes and how the platform presents itself. The
//! wagering library consumes a single validated [`PlatformConfig`].

pub mod address;
pub mod deployment;
pub mod env;
pub mod errors;
pub mod fetcher;
pub mod registry;
pub mod state;

pub use address::{parse_address, IntoAddress};
pub use env::PlatformEnv;
pub use errors::{ConfigError, ConfigResult, FetchError};
pub use fetcher::{select_fetcher, SharedMetadataFetcher, TokenMetadataFetcher};
pub use registry::{PlatformConfig, PlatformConfigBuilder};
pub use state::*;

/// Loads the environment and builds the shipped configuration.
pub fn load() -> ConfigResult<PlatformConfig> {
    let env = PlatformEnv::from_env()?;
    deployment::casino_of_bonk(&env)
}
