use anchor_lang::prelude::Pubkey;
use serde::Serialize;

use crate::address::{pubkey_string, IntoAddress};
use crate::errors::ConfigResult;

/// A liquidity pool the platform lets players wager against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PoolDescriptor {
    /// Mint of the token backing the pool.
    #[serde(with = "pubkey_string")]
    pub token: Pubkey,
    /// Creator of a private pool. `None` selects the public pool for `token`.
    #[serde(with = "pubkey_string::option")]
    pub authority: Option<Pubkey>,
}

impl PoolDescriptor {
    pub fn new<T: IntoAddress, A: IntoAddress>(token: T, authority: Option<A>) -> ConfigResult<Self> {
        Ok(Self {
            token: token.into_address("pool token")?,
            authority: authority
                .map(|authority| authority.into_address("pool authority"))
                .transpose()?,
        })
    }

    /// Public pool for `token`.
    pub fn public<T: IntoAddress>(token: T) -> ConfigResult<Self> {
        Self::new(token, None::<Pubkey>)
    }

    /// Private pool for `token` created by `authority`.
    pub fn private<T: IntoAddress, A: IntoAddress>(token: T, authority: A) -> ConfigResult<Self> {
        Self::new(token, Some(authority))
    }

    pub fn is_private(&self) -> bool {
        self.authority.is_some()
    }
}
