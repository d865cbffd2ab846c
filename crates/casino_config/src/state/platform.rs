use anchor_lang::prelude::Pubkey;
use serde::Serialize;
use url::Url;

use crate::address::{pubkey_string, IntoAddress};
use crate::errors::{ConfigError, ConfigResult};

/// Who runs the platform and how it presents itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformIdentity {
    /// Wallet that receives the creator fee.
    #[serde(with = "pubkey_string")]
    pub creator: Pubkey,
    /// Explorer linked from recent plays.
    pub explorer_url: Url,
    /// Address shown in the share dialog. Usually a bare host.
    pub sharable_url: String,
    /// Terms the player must accept before playing.
    pub terms_of_service_html: String,
    pub enable_leaderboard: bool,
    /// Trollbox chat.
    pub enable_trollbox: bool,
    /// Whether a player may revoke a referrer after accepting an invite.
    pub allow_referrer_removal: bool,
}

impl PlatformIdentity {
    /// Identity with every feature toggle switched off and no terms.
    pub fn new<C: IntoAddress>(
        creator: C,
        explorer_url: &str,
        sharable_url: impl Into<String>,
    ) -> ConfigResult<Self> {
        let explorer_url = Url::parse(explorer_url).map_err(|source| ConfigError::InvalidUrl {
            field: "explorer URL",
            value: explorer_url.to_string(),
            source,
        })?;

        Ok(Self {
            creator: creator.into_address("platform creator")?,
            explorer_url,
            sharable_url: sharable_url.into(),
            terms_of_service_html: String::new(),
            enable_leaderboard: false,
            enable_trollbox: false,
            allow_referrer_removal: false,
        })
    }

    pub fn with_terms_of_service(mut self, html: impl Into<String>) -> Self {
        self.terms_of_service_html = html.into();
        self
    }

    pub fn with_leaderboard(mut self, enabled: bool) -> Self {
        self.enable_leaderboard = enabled;
        self
    }

    pub fn with_trollbox(mut self, enabled: bool) -> Self {
        self.enable_trollbox = enabled;
        self
    }

    pub fn with_referrer_removal(mut self, allowed: bool) -> Self {
        self.allow_referrer_removal = allowed;
        self
    }
}
