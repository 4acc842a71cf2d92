// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Gateway requests: create, edit, transfer ownership

use serde::{Deserialize, Serialize};

use crate::config::AssetConfig;
use crate::errors::ValidationError;
use crate::patterns::is_alpha;
use crate::tracing::spans;
use crate::types::account::AccountId;
use crate::types::coin::Coin;
use crate::types::field::FieldUpdate;

use super::{fold_in_place, run_checks, trim_in_place, Msg};

/// Check a gateway moniker: bounded length, letters only, no native coin symbol
///
/// # Examples
///
/// ```
/// use assetgate::{validate_moniker, AssetConfig};
///
/// let config = AssetConfig::default();
/// assert!(validate_moniker("gdex", &config).is_ok());
/// assert!(validate_moniker("gdex2", &config).is_err());
/// assert!(validate_moniker("myiris", &config).is_err());
/// ```
pub fn validate_moniker(moniker: &str, config: &AssetConfig) -> Result<(), ValidationError> {
    let span = spans::validate_moniker(moniker);
    let _guard = span.enter();

    let size = config.limits.moniker_size;
    if !size.contains(moniker.len()) {
        return Err(ValidationError::invalid_moniker(format!(
            "invalid moniker {moniker}, only accepts length {size}"
        )));
    }

    if !is_alpha(moniker) {
        return Err(ValidationError::invalid_moniker(format!(
            "invalid moniker {moniker}, only accepts letters ^[A-Za-z]+$"
        )));
    }

    if moniker
        .to_lowercase()
        .contains(config.native_token_name.as_str())
    {
        return Err(ValidationError::invalid_moniker(format!(
            "invalid moniker {moniker}, can not contain native token name {}",
            config.native_token_name
        )));
    }

    Ok(())
}

fn check_owner(owner: &AccountId) -> Result<(), ValidationError> {
    if owner.is_empty() {
        return Err(ValidationError::invalid_owner(
            "the owner of the gateway must be specified",
        ));
    }
    Ok(())
}

fn check_details(details: &str, config: &AssetConfig) -> Result<(), ValidationError> {
    let max = config.limits.maximum_details_size;
    if details.len() > max {
        return Err(ValidationError::invalid_details(format!(
            "the length of the details must be between [0, {max}], got {}",
            details.len()
        )));
    }
    Ok(())
}

fn check_website(website: &str, config: &AssetConfig) -> Result<(), ValidationError> {
    let max = config.limits.maximum_website_size;
    if website.len() > max {
        return Err(ValidationError::invalid_website(format!(
            "the length of the website must be between [0, {max}], got {}",
            website.len()
        )));
    }
    Ok(())
}

/// Request to register a new gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateGateway {
    pub owner: AccountId,
    /// Globally unique name of the gateway
    pub moniker: String,
    pub identity: String,
    pub details: String,
    pub website: String,
    /// Creation fee, in the native coin's minimal denomination
    pub fee: Coin,
}

impl MsgCreateGateway {
    pub fn new(
        owner: impl Into<AccountId>,
        moniker: impl Into<String>,
        identity: impl Into<String>,
        details: impl Into<String>,
        website: impl Into<String>,
        fee: Coin,
    ) -> Self {
        Self {
            owner: owner.into(),
            moniker: moniker.into(),
            identity: identity.into(),
            details: details.into(),
            website: website.into(),
            fee,
        }
    }

    pub fn normalize(&mut self) {
        self.owner = self.owner.trimmed();
        fold_in_place(&mut self.moniker);
        trim_in_place(&mut self.identity);
        trim_in_place(&mut self.details);
        trim_in_place(&mut self.website);
    }

    fn check(&self, config: &AssetConfig) -> Result<(), ValidationError> {
        check_owner(&self.owner)?;
        validate_moniker(&self.moniker, config)?;
        check_details(&self.details, config)?;
        check_website(&self.website, config)?;

        if self.fee.denom != config.native_min_denom {
            return Err(ValidationError::incorrect_fee_denom(format!(
                "incorrect fee denom: expected {}, got {}",
                config.native_min_denom, self.fee.denom
            )));
        }

        if self.fee.is_negative() {
            return Err(ValidationError::negative_fee(format!(
                "the fee must not be negative, got {}",
                self.fee
            )));
        }

        Ok(())
    }
}

impl Msg for MsgCreateGateway {
    fn msg_type(&self) -> &'static str {
        "create_gateway"
    }

    fn validate_basic(&mut self, config: &AssetConfig) -> Result<(), ValidationError> {
        run_checks(self.msg_type(), || {
            self.normalize();
            self.check(config)
        })
    }

    fn signers(&self) -> Vec<AccountId> {
        vec![self.owner.clone()]
    }
}

impl std::fmt::Display for MsgCreateGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MsgCreateGateway:\n  Owner:             {}\n  Moniker:           {}\n  Identity:          {}\n  Details:           {}\n  Website:           {}",
            self.owner, self.moniker, self.identity, self.details, self.website
        )
    }
}

/// Request to update the descriptive fields of a gateway
///
/// Only the fields that are [`FieldUpdate::Set`] change; at least one must be.
///
/// # Examples
///
/// ```
/// use assetgate::{AssetConfig, Msg, MsgEditGateway, ValidationError};
///
/// let config = AssetConfig::default();
///
/// let mut msg = MsgEditGateway::new("owner1", "gdex");
/// assert!(matches!(
///     msg.validate_basic(&config),
///     Err(ValidationError::NoUpdatesProvided { .. })
/// ));
///
/// let mut msg = MsgEditGateway::new("owner1", "gdex").website("");
/// assert!(msg.validate_basic(&config).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgEditGateway {
    pub owner: AccountId,
    pub moniker: String,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unset")]
    pub identity: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unset")]
    pub details: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unset")]
    pub website: FieldUpdate<String>,
}

impl MsgEditGateway {
    /// An edit that changes nothing yet; chain setters to add updates
    pub fn new(owner: impl Into<AccountId>, moniker: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            moniker: moniker.into(),
            identity: FieldUpdate::Unset,
            details: FieldUpdate::Unset,
            website: FieldUpdate::Unset,
        }
    }

    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = FieldUpdate::Set(identity.into());
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = FieldUpdate::Set(details.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = FieldUpdate::Set(website.into());
        self
    }

    pub fn normalize(&mut self) {
        self.owner = self.owner.trimmed();
        fold_in_place(&mut self.moniker);
        for field in [&mut self.identity, &mut self.details, &mut self.website] {
            if let Some(value) = field.as_set_mut() {
                trim_in_place(value);
            }
        }
    }

    fn check(&self, config: &AssetConfig) -> Result<(), ValidationError> {
        check_owner(&self.owner)?;
        validate_moniker(&self.moniker, config)?;
        if let Some(details) = self.details.as_set() {
            check_details(details, config)?;
        }
        if let Some(website) = self.website.as_set() {
            check_website(website, config)?;
        }

        if self.identity.is_unset() && self.details.is_unset() && self.website.is_unset() {
            return Err(ValidationError::no_updates_provided(
                "no updated values provided",
            ));
        }

        Ok(())
    }
}

impl Msg for MsgEditGateway {
    fn msg_type(&self) -> &'static str {
        "edit_gateway"
    }

    fn validate_basic(&mut self, config: &AssetConfig) -> Result<(), ValidationError> {
        run_checks(self.msg_type(), || {
            self.normalize();
            self.check(config)
        })
    }

    fn signers(&self) -> Vec<AccountId> {
        vec![self.owner.clone()]
    }
}

impl std::fmt::Display for MsgEditGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |field: &FieldUpdate<String>| {
            field
                .as_set()
                .map_or_else(|| "<unchanged>".to_string(), Clone::clone)
        };
        write!(
            f,
            "MsgEditGateway:\n  Owner:             {}\n  Moniker:           {}\n  Identity:          {}\n  Details:           {}\n  Website:           {}",
            self.owner,
            self.moniker,
            show(&self.identity),
            show(&self.details),
            show(&self.website)
        )
    }
}

/// Request to hand a gateway over to a new owner
///
/// Both the current and the new owner must sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTransferGatewayOwner {
    pub owner: AccountId,
    pub moniker: String,
    pub to: AccountId,
}

impl MsgTransferGatewayOwner {
    pub fn new(
        owner: impl Into<AccountId>,
        moniker: impl Into<String>,
        to: impl Into<AccountId>,
    ) -> Self {
        Self {
            owner: owner.into(),
            moniker: moniker.into(),
            to: to.into(),
        }
    }

    pub fn normalize(&mut self) {
        self.owner = self.owner.trimmed();
        self.to = self.to.trimmed();
        fold_in_place(&mut self.moniker);
    }

    fn check(&self, config: &AssetConfig) -> Result<(), ValidationError> {
        check_owner(&self.owner)?;

        if self.to.is_empty() {
            return Err(ValidationError::invalid_to_address(
                "the new owner of the gateway must be specified",
            ));
        }

        if self.to == self.owner {
            return Err(ValidationError::invalid_to_address(format!(
                "the new owner must not be same as the origin owner {}",
                self.owner
            )));
        }

        validate_moniker(&self.moniker, config)
    }
}

impl Msg for MsgTransferGatewayOwner {
    fn msg_type(&self) -> &'static str {
        "transfer_gateway_owner"
    }

    fn validate_basic(&mut self, config: &AssetConfig) -> Result<(), ValidationError> {
        run_checks(self.msg_type(), || {
            self.normalize();
            self.check(config)
        })
    }

    fn signers(&self) -> Vec<AccountId> {
        vec![self.owner.clone(), self.to.clone()]
    }
}

impl std::fmt::Display for MsgTransferGatewayOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MsgTransferGatewayOwner:\n  Owner:             {}\n  Moniker:           {}\n  To:                {}",
            self.owner, self.moniker, self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AssetConfig {
        AssetConfig::default()
    }

    fn fee(amount: i64) -> Coin {
        Coin::new("iris-atto", amount)
    }

    #[test]
    fn test_validate_moniker() {
        let config = config();
        assert!(validate_moniker("abc", &config).is_ok());
        assert!(validate_moniker("GateWay", &config).is_ok());
        for moniker in ["ab", "abcdefghi", "gd3x", "g-dex", "irisgw", "xIRIS"] {
            let err = validate_moniker(moniker, &config).unwrap_err();
            assert_eq!(err.code(), "invalid_moniker", "{moniker} rejected");
            assert!(
                err.details().contains(moniker),
                "{moniker} missing from {}",
                err.details()
            );
        }
    }

    #[test]
    fn test_validate_moniker_messages_name_the_rule() {
        let config = config();
        let err = validate_moniker("ab", &config).unwrap_err();
        assert!(err.details().contains("[3, 8]"));

        let err = validate_moniker("g1x", &config).unwrap_err();
        assert!(err.details().contains("^[A-Za-z]+$"));

        let err = validate_moniker("irisgw", &config).unwrap_err();
        assert!(err.details().contains("iris"));
    }

    #[test]
    fn test_create_gateway_rejects_digit_moniker_by_value() {
        let mut msg = MsgCreateGateway::new("owner1", "g1x", "", "", "", fee(0));
        let details = "invalid moniker g1x, only accepts letters ^[A-Za-z]+$";
        let err = msg.validate_basic(&config()).unwrap_err();
        assert_eq!(err, ValidationError::invalid_moniker(details));
    }

    #[test]
    fn test_create_gateway_valid_and_normalized() {
        let mut msg = MsgCreateGateway::new(
            "owner1",
            " GDEX ",
            " id ",
            " a gateway ",
            " https://gdex.io ",
            fee(100),
        );
        msg.validate_basic(&config()).unwrap();
        assert_eq!(msg.moniker, "gdex");
        assert_eq!(msg.identity, "id");
        assert_eq!(msg.details, "a gateway");
        assert_eq!(msg.website, "https://gdex.io");
    }

    #[test]
    fn test_create_gateway_checks() {
        let base = MsgCreateGateway::new("owner1", "gdex", "", "", "", fee(0));

        let mut msg = base.clone();
        msg.owner = AccountId::default();
        assert_eq!(
            msg.validate_basic(&config()).unwrap_err().code(),
            "invalid_owner"
        );

        let mut msg = base.clone();
        msg.details = "d".repeat(281);
        assert_eq!(
            msg.validate_basic(&config()).unwrap_err().code(),
            "invalid_details"
        );

        let mut msg = base.clone();
        msg.website = "w".repeat(129);
        assert_eq!(
            msg.validate_basic(&config()).unwrap_err().code(),
            "invalid_website"
        );

        let mut msg = base.clone();
        msg.fee = Coin::new("iris", 1);
        assert_eq!(
            msg.validate_basic(&config()).unwrap_err().code(),
            "incorrect_fee_denom"
        );

        let mut msg = base;
        msg.fee = fee(-1);
        assert_eq!(
            msg.validate_basic(&config()).unwrap_err().code(),
            "negative_fee"
        );
    }

    #[test]
    fn test_edit_gateway_checks() {
        let mut msg = MsgEditGateway::new("owner1", "gdex").details("d".repeat(281));
        assert_eq!(
            msg.validate_basic(&config()).unwrap_err().code(),
            "invalid_details"
        );

        let mut msg = MsgEditGateway::new("owner1", "gdex").website("w".repeat(129));
        assert_eq!(
            msg.validate_basic(&config()).unwrap_err().code(),
            "invalid_website"
        );

        let mut msg = MsgEditGateway::new("owner1", "gdex").identity(" new id ");
        msg.validate_basic(&config()).unwrap();
        assert_eq!(msg.identity, FieldUpdate::Set("new id".to_string()));
        assert!(msg.details.is_unset());
    }

    #[test]
    fn test_edit_gateway_moniker_checked_before_updates() {
        let mut msg = MsgEditGateway::new("owner1", "g1");
        assert_eq!(
            msg.validate_basic(&config()).unwrap_err().code(),
            "invalid_moniker"
        );
    }

    #[test]
    fn test_transfer_gateway_owner_checks() {
        let mut msg = MsgTransferGatewayOwner::new("owner1", "gdex", "");
        assert_eq!(
            msg.validate_basic(&config()).unwrap_err().code(),
            "invalid_to_address"
        );

        // Self-transfer is rejected before the moniker is looked at
        let mut msg = MsgTransferGatewayOwner::new("owner1", "x", " owner1 ");
        assert_eq!(
            msg.validate_basic(&config()).unwrap_err().code(),
            "invalid_to_address"
        );

        let mut msg = MsgTransferGatewayOwner::new("owner1", "gdex", "owner2");
        assert!(msg.validate_basic(&config()).is_ok());
        assert_eq!(
            msg.signers(),
            vec![AccountId::from("owner1"), AccountId::from("owner2")]
        );
    }

    #[test]
    fn test_display() {
        let msg = MsgEditGateway::new("owner1", "gdex").website("https://gdex.io");
        let rendered = msg.to_string();
        assert!(rendered.contains("Identity:          <unchanged>"));
        assert!(rendered.contains("Website:           https://gdex.io"));

        let msg = MsgTransferGatewayOwner::new("owner1", "gdex", "owner2");
        assert!(msg.to_string().ends_with("To:                owner2"));
    }

    #[test]
    fn test_edit_gateway_serialization_skips_unset() {
        let msg = MsgEditGateway::new("owner1", "gdex").details("");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"owner":"owner1","moniker":"gdex","details":""}"#);
        let back: MsgEditGateway = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
