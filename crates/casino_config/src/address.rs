//! Address parsing shared by every table in the registry.
//!
//! Pool tokens, pool authorities, token mints and the creator address all go
//! through [`parse_address`], so a literal accepted in one table is accepted
//! in all of them.

use std::str::FromStr;

use anchor_lang::prelude::Pubkey;

use crate::errors::{ConfigError, ConfigResult};

/// Parses a base58 account address. `field` names the table entry in the
/// error so a bad literal can be found quickly.
pub fn parse_address(field: &'static str, value: &str) -> ConfigResult<Pubkey> {
    Pubkey::from_str(value).map_err(|source| ConfigError::InvalidAddress {
        field,
        value: value.to_string(),
        source,
    })
}

/// Anything that can name an account: an already parsed key or a literal.
pub trait IntoAddress {
    fn into_address(self, field: &'static str) -> ConfigResult<Pubkey>;
}

impl IntoAddress for Pubkey {
    fn into_address(self, _field: &'static str) -> ConfigResult<Pubkey> {
        Ok(self)
    }
}

impl IntoAddress for &Pubkey {
    fn into_address(self, _field: &'static str) -> ConfigResult<Pubkey> {
        Ok(*self)
    }
}

impl IntoAddress for &str {
    fn into_address(self, field: &'static str) -> ConfigResult<Pubkey> {
        parse_address(field, self)
    }
}

impl IntoAddress for String {
    fn into_address(self, field: &'static str) -> ConfigResult<Pubkey> {
        parse_address(field, &self)
    }
}

impl IntoAddress for &String {
    fn into_address(self, field: &'static str) -> ConfigResult<Pubkey> {
        parse_address(field, self)
    }
}

/// Serializes keys as base58 strings instead of raw byte arrays.
pub(crate) mod pubkey_string {
    use anchor_lang::prelude::Pubkey;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(key)
    }

    pub mod option {
        use anchor_lang::prelude::Pubkey;
        use serde::Serializer;

        pub fn serialize<S: Serializer>(
            key: &Option<Pubkey>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match key {
                Some(key) => serializer.collect_str(key),
                None => serializer.serialize_none(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_native_mint() {
        let key = parse_address("pool token", "So11111111111111111111111111111111111111112").unwrap();
        assert_eq!(key, anchor_spl::token::spl_token::native_mint::ID);
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["", "not-an-address", "0OIl0OIl", "So1111111111111111111111111111111111111111111112"] {
            match parse_address("pool token", bad) {
                Err(ConfigError::InvalidAddress { field, value, .. }) => {
                    assert_eq!(field, "pool token");
                    assert_eq!(value, bad);
                }
                other => panic!("expected InvalidAddress for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn key_and_literal_agree() {
        let literal = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
        let parsed = literal.into_address("mint").unwrap();
        assert_eq!(parsed.into_address("mint").unwrap(), parsed);
        assert_eq!(parsed.to_string().into_address("mint").unwrap(), parsed);
    }
}
