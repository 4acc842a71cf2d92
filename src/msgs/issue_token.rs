// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token issuance request

use serde::{Deserialize, Serialize};

use crate::config::AssetConfig;
use crate::errors::ValidationError;
use crate::patterns::{is_alpha_numeric, is_begin_with_alpha};
use crate::types::account::AccountId;
use crate::types::asset::{AssetFamily, AssetSource};
use crate::types::coin::Coin;

use super::{fold_in_place, run_checks, trim_in_place, Msg};

/// Request to issue a new token
///
/// Built with [`new`](Self::new) plus chained setters for the optional parts.
///
/// # Examples
///
/// ```
/// use assetgate::{AssetConfig, AssetSource, Msg, MsgIssueToken};
///
/// let mut msg = MsgIssueToken::new(AssetSource::Gateway, "BTC", "Bitcoin", "owner1")
///     .gateway("GDEX")
///     .symbol_at_source("btc")
///     .decimal(8)
///     .supply(500, 0);
///
/// msg.validate_basic(&AssetConfig::default()).unwrap();
/// assert_eq!(msg.gateway, "gdex");
/// assert_eq!(msg.max_supply, 500); // not mintable: capped at the initial supply
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgIssueToken {
    pub family: AssetFamily,
    pub source: AssetSource,
    /// Moniker of the issuing gateway, for gateway assets
    pub gateway: String,
    pub symbol: String,
    /// Symbol on the originating chain; ignored for native assets
    pub symbol_at_source: String,
    pub name: String,
    pub decimal: u8,
    /// Name of the minimal unit
    pub symbol_min_alias: String,
    pub initial_supply: u64,
    /// Zero means "use the default for this asset"
    pub max_supply: u64,
    pub mintable: bool,
    pub owner: AccountId,
    pub fee: Vec<Coin>,
}

impl MsgIssueToken {
    /// A fungible, non-mintable token with no supply, decimal 0 and no fee
    pub fn new(
        source: AssetSource,
        symbol: impl Into<String>,
        name: impl Into<String>,
        owner: impl Into<AccountId>,
    ) -> Self {
        Self {
            family: AssetFamily::Fungible,
            source,
            gateway: String::new(),
            symbol: symbol.into(),
            symbol_at_source: String::new(),
            name: name.into(),
            decimal: 0,
            symbol_min_alias: String::new(),
            initial_supply: 0,
            max_supply: 0,
            mintable: false,
            owner: owner.into(),
            fee: Vec::new(),
        }
    }

    pub fn family(mut self, family: AssetFamily) -> Self {
        self.family = family;
        self
    }

    pub fn gateway(mut self, moniker: impl Into<String>) -> Self {
        self.gateway = moniker.into();
        self
    }

    pub fn symbol_at_source(mut self, symbol: impl Into<String>) -> Self {
        self.symbol_at_source = symbol.into();
        self
    }

    pub fn symbol_min_alias(mut self, alias: impl Into<String>) -> Self {
        self.symbol_min_alias = alias.into();
        self
    }

    pub fn decimal(mut self, decimal: u8) -> Self {
        self.decimal = decimal;
        self
    }

    pub fn supply(mut self, initial: u64, max: u64) -> Self {
        self.initial_supply = initial;
        self.max_supply = max;
        self
    }

    pub fn mintable(mut self, mintable: bool) -> Self {
        self.mintable = mintable;
        self
    }

    pub fn fee(mut self, fee: Vec<Coin>) -> Self {
        self.fee = fee;
        self
    }

    /// Trim every string field and lower-case the symbolic ones
    pub fn normalize(&mut self) {
        fold_in_place(&mut self.gateway);
        fold_in_place(&mut self.symbol);
        fold_in_place(&mut self.symbol_at_source);
        fold_in_place(&mut self.symbol_min_alias);
        trim_in_place(&mut self.name);
        self.owner = self.owner.trimmed();
    }

    /// Fill in an unset max supply: the ceiling if mintable, else the initial supply
    fn fill_max_supply(&mut self, config: &AssetConfig) {
        if self.max_supply == 0 {
            self.max_supply = if self.mintable {
                config.limits.maximum_max_supply
            } else {
                self.initial_supply
            };
        }
    }

    fn check(&mut self, config: &AssetConfig) -> Result<(), ValidationError> {
        let limits = &config.limits;

        match &self.source {
            AssetSource::Native => {
                if self.owner.is_empty() {
                    return Err(ValidationError::invalid_owner(
                        "the owner of the asset must be specified",
                    ));
                }
                self.symbol_at_source.clear();
            }
            AssetSource::Gateway => {
                if !limits.moniker_size.contains(self.gateway.len()) {
                    return Err(ValidationError::invalid_moniker(format!(
                        "invalid gateway moniker {}, length {}",
                        self.gateway, limits.moniker_size
                    )));
                }
            }
            AssetSource::External => {
                return Err(ValidationError::invalid_asset_source(format!(
                    "invalid source type {}",
                    self.source
                )));
            }
            AssetSource::Unrecognized(raw) => {
                return Err(ValidationError::invalid_asset_source(format!(
                    "invalid asset source type {raw}"
                )));
            }
        }

        if !self.family.is_known() {
            return Err(ValidationError::invalid_asset_family(format!(
                "invalid asset family type {}",
                self.family
            )));
        }

        let name_len = self.name.len();
        if name_len == 0 || name_len > limits.maximum_name_size {
            return Err(ValidationError::invalid_asset_name(format!(
                "invalid token name {}, only accepts length (0, {}]",
                self.name, limits.maximum_name_size
            )));
        }

        if !limits.symbol_size.contains(self.symbol.len())
            || !is_begin_with_alpha(&self.symbol)
            || !is_alpha_numeric(&self.symbol)
        {
            return Err(ValidationError::invalid_asset_symbol(format!(
                "invalid token symbol {}, only accepts alphanumeric characters, and begin with an english letter, length {}",
                self.symbol, limits.symbol_size
            )));
        }

        if self
            .symbol
            .to_lowercase()
            .contains(config.native_token_name.as_str())
        {
            return Err(ValidationError::invalid_asset_symbol(format!(
                "invalid token symbol {}, can not contain native token symbol {}",
                self.symbol, config.native_token_name
            )));
        }

        let at_source_len = self.symbol_at_source.len();
        if at_source_len > 0
            && (!limits.symbol_size.contains(at_source_len)
                || !is_alpha_numeric(&self.symbol_at_source))
        {
            return Err(ValidationError::invalid_asset_symbol_at_source(format!(
                "invalid token symbol_at_source {}, only accepts alphanumeric characters, length {}",
                self.symbol_at_source, limits.symbol_size
            )));
        }

        // The leading-letter rule is checked on `symbol`, not on the alias
        let alias_len = self.symbol_min_alias.len();
        if (alias_len > 0
            && (!limits.symbol_min_alias_size.contains(alias_len)
                || !is_alpha_numeric(&self.symbol_min_alias)))
            || !is_begin_with_alpha(&self.symbol)
        {
            return Err(ValidationError::invalid_asset_symbol_min_alias(format!(
                "invalid token symbol_min_alias {}, only accepts alphanumeric characters, and begin with an english letter, length {}",
                self.symbol_min_alias, limits.symbol_min_alias_size
            )));
        }

        if self.initial_supply > limits.maximum_init_supply {
            return Err(ValidationError::invalid_initial_supply(format!(
                "invalid token initial supply {}, only accepts value [0, {}]",
                self.initial_supply, limits.maximum_init_supply
            )));
        }

        if self.max_supply < self.initial_supply || self.max_supply > limits.maximum_max_supply {
            return Err(ValidationError::invalid_max_supply(format!(
                "invalid token max supply {}, only accepts value [{}, {}]",
                self.max_supply, self.initial_supply, limits.maximum_max_supply
            )));
        }

        if self.decimal > limits.maximum_decimal {
            return Err(ValidationError::invalid_decimal(format!(
                "invalid token decimal {}, only accepts value [0, {}]",
                self.decimal, limits.maximum_decimal
            )));
        }

        Ok(())
    }
}

impl Msg for MsgIssueToken {
    fn msg_type(&self) -> &'static str {
        "issue_token"
    }

    fn validate_basic(&mut self, config: &AssetConfig) -> Result<(), ValidationError> {
        run_checks(self.msg_type(), || {
            self.normalize();
            self.fill_max_supply(config);
            self.check(config)
        })
    }

    fn signers(&self) -> Vec<AccountId> {
        vec![self.owner.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native() -> MsgIssueToken {
        MsgIssueToken::new(AssetSource::Native, "btc", "Bitcoin", "owner1").supply(1_000, 0)
    }

    fn validate(mut msg: MsgIssueToken) -> Result<MsgIssueToken, ValidationError> {
        msg.validate_basic(&AssetConfig::default())?;
        Ok(msg)
    }

    #[test]
    fn test_valid_native_token() {
        let msg = validate(native()).unwrap();
        assert_eq!(msg.max_supply, 1_000);
    }

    #[test]
    fn test_native_requires_owner_and_drops_symbol_at_source() {
        let msg = validate(native().symbol_at_source("$$")).unwrap();
        assert_eq!(msg.symbol_at_source, "");

        let mut no_owner = native();
        no_owner.owner = AccountId::from("  ");
        assert_eq!(validate(no_owner).unwrap_err().code(), "invalid_owner");
    }

    #[test]
    fn test_gateway_moniker_length() {
        let mut msg = native().gateway("gd");
        msg.source = AssetSource::Gateway;
        assert_eq!(validate(msg).unwrap_err().code(), "invalid_moniker");

        let mut msg = native().gateway(" GDEX ");
        msg.source = AssetSource::Gateway;
        assert_eq!(validate(msg).unwrap().gateway, "gdex");
    }

    #[test]
    fn test_external_and_unknown_sources_rejected() {
        for source in [AssetSource::External, AssetSource::from("pegged")] {
            let mut msg = native();
            msg.source = source;
            assert_eq!(validate(msg).unwrap_err().code(), "invalid_asset_source");
        }
    }

    #[test]
    fn test_source_checked_before_family() {
        let mut msg = native().family(AssetFamily::from("unknown"));
        msg.source = AssetSource::External;
        assert_eq!(validate(msg).unwrap_err().code(), "invalid_asset_source");
    }

    #[test]
    fn test_unknown_family_rejected() {
        let msg = native().family(AssetFamily::from_code(9));
        assert_eq!(validate(msg).unwrap_err().code(), "invalid_asset_family");
        assert!(validate(native().family(AssetFamily::NonFungible)).is_ok());
    }

    #[test]
    fn test_name_length() {
        let mut msg = native();
        msg.name = "   ".to_string();
        assert_eq!(validate(msg).unwrap_err().code(), "invalid_asset_name");

        let mut msg = native();
        msg.name = "n".repeat(33);
        assert_eq!(validate(msg).unwrap_err().code(), "invalid_asset_name");

        let mut msg = native();
        msg.name = format!(" {} ", "n".repeat(32));
        assert_eq!(validate(msg).unwrap().name.len(), 32);
    }

    #[test]
    fn test_symbol_rules() {
        for symbol in ["bt", "bitcoin12", "1btc", "bt-c", "xiris", "IRISX"] {
            let mut msg = native();
            msg.symbol = symbol.to_string();
            assert_eq!(
                validate(msg).unwrap_err().code(),
                "invalid_asset_symbol",
                "{symbol} should be rejected"
            );
        }
    }

    #[test]
    fn test_symbol_at_source_rules() {
        let mut msg = native().symbol_at_source("b-c");
        msg.source = AssetSource::Gateway;
        msg.gateway = "gdex".to_string();
        assert_eq!(
            validate(msg).unwrap_err().code(),
            "invalid_asset_symbol_at_source"
        );
    }

    #[test]
    fn test_symbol_min_alias_rules() {
        assert!(validate(native().symbol_min_alias("satoshi")).is_ok());
        // Aliases may begin with a digit: only the symbol's first letter is checked
        assert!(validate(native().symbol_min_alias("1sat")).is_ok());

        for alias in ["sa", "satoshisato", "sat-1"] {
            assert_eq!(
                validate(native().symbol_min_alias(alias))
                    .unwrap_err()
                    .code(),
                "invalid_asset_symbol_min_alias",
                "{alias} should be rejected"
            );
        }
    }

    #[test]
    fn test_supply_limits() {
        let err = validate(native().supply(100_000_000_001, 0)).unwrap_err();
        assert_eq!(err.code(), "invalid_initial_supply");

        let err = validate(native().supply(1_000, 999)).unwrap_err();
        assert_eq!(err.code(), "invalid_max_supply");

        let err = validate(native().supply(1_000, 1_000_000_000_001)).unwrap_err();
        assert_eq!(err.code(), "invalid_max_supply");
    }

    #[test]
    fn test_max_supply_default_fill() {
        let msg = validate(native().supply(1_000, 0).mintable(true)).unwrap();
        assert_eq!(msg.max_supply, 1_000_000_000_000);

        let msg = validate(native().supply(500, 0).mintable(false)).unwrap();
        assert_eq!(msg.max_supply, 500);
    }

    #[test]
    fn test_decimal_limit() {
        assert!(validate(native().decimal(18)).is_ok());
        let err = validate(native().decimal(19)).unwrap_err();
        assert_eq!(err.code(), "invalid_decimal");
        assert!(err.details().contains("[0, 18]"));
    }

    #[test]
    fn test_signers() {
        assert_eq!(native().signers(), vec![AccountId::from("owner1")]);
    }
}
