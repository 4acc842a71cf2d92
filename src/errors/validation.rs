//! Error types for request validation.
//!
//! This module provides the error returned by [`Msg::validate_basic`](crate::Msg::validate_basic).
//! Validation stops at the first violated rule, so a single error is returned per request.

/// Errors that can occur while validating an asset or gateway request.
///
/// Every variant carries a human-readable `details` string naming the offending
/// value and the accepted range or pattern. Use [`code`](Self::code) for a stable,
/// machine-readable kind.
///
/// # Examples
///
/// ```rust
/// use assetgate::{AssetConfig, Msg, MsgTransferGatewayOwner, ValidationError};
///
/// let mut msg = MsgTransferGatewayOwner::new("owner1", "gateway", "owner1");
///
/// match msg.validate_basic(&AssetConfig::default()) {
///     Err(ValidationError::InvalidToAddress { details }) => {
///         assert!(details.contains("same as the origin owner"));
///     }
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid owner: {details}")]
    InvalidOwner { details: String },

    #[error("Invalid asset source: {details}")]
    InvalidAssetSource { details: String },

    #[error("Invalid asset family: {details}")]
    InvalidAssetFamily { details: String },

    #[error("Invalid asset name: {details}")]
    InvalidAssetName { details: String },

    #[error("Invalid asset symbol: {details}")]
    InvalidAssetSymbol { details: String },

    #[error("Invalid asset symbol_at_source: {details}")]
    InvalidAssetSymbolAtSource { details: String },

    #[error("Invalid asset symbol_min_alias: {details}")]
    InvalidAssetSymbolMinAlias { details: String },

    #[error("Invalid initial supply: {details}")]
    InvalidInitialSupply { details: String },

    #[error("Invalid max supply: {details}")]
    InvalidMaxSupply { details: String },

    #[error("Invalid decimal: {details}")]
    InvalidDecimal { details: String },

    #[error("Invalid moniker: {details}")]
    InvalidMoniker { details: String },

    #[error("Invalid details: {details}")]
    InvalidDetails { details: String },

    #[error("Invalid website: {details}")]
    InvalidWebsite { details: String },

    #[error("Incorrect fee denom: {details}")]
    IncorrectFeeDenom { details: String },

    /// The fee amount is below zero.
    #[error("Negative fee: {details}")]
    NegativeFee { details: String },

    /// An edit request that would change nothing.
    #[error("No updates provided: {details}")]
    NoUpdatesProvided { details: String },

    /// The recipient of a gateway transfer is missing or equals the current owner.
    #[error("Invalid to address: {details}")]
    InvalidToAddress { details: String },
}

macro_rules! constructors {
    ($($fn_name:ident => $variant:ident),* $(,)?) => {
        impl ValidationError {
            $(
                #[doc = concat!("Create an `", stringify!($variant), "` error with details.")]
                pub fn $fn_name(details: impl Into<String>) -> Self {
                    ValidationError::$variant {
                        details: details.into(),
                    }
                }
            )*
        }
    };
}

constructors! {
    invalid_owner => InvalidOwner,
    invalid_asset_source => InvalidAssetSource,
    invalid_asset_family => InvalidAssetFamily,
    invalid_asset_name => InvalidAssetName,
    invalid_asset_symbol => InvalidAssetSymbol,
    invalid_asset_symbol_at_source => InvalidAssetSymbolAtSource,
    invalid_asset_symbol_min_alias => InvalidAssetSymbolMinAlias,
    invalid_initial_supply => InvalidInitialSupply,
    invalid_max_supply => InvalidMaxSupply,
    invalid_decimal => InvalidDecimal,
    invalid_moniker => InvalidMoniker,
    invalid_details => InvalidDetails,
    invalid_website => InvalidWebsite,
    incorrect_fee_denom => IncorrectFeeDenom,
    negative_fee => NegativeFee,
    no_updates_provided => NoUpdatesProvided,
    invalid_to_address => InvalidToAddress,
}

impl ValidationError {
    /// Stable snake_case name of the error kind
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidOwner { .. } => "invalid_owner",
            ValidationError::InvalidAssetSource { .. } => "invalid_asset_source",
            ValidationError::InvalidAssetFamily { .. } => "invalid_asset_family",
            ValidationError::InvalidAssetName { .. } => "invalid_asset_name",
            ValidationError::InvalidAssetSymbol { .. } => "invalid_asset_symbol",
            ValidationError::InvalidAssetSymbolAtSource { .. } => "invalid_asset_symbol_at_source",
            ValidationError::InvalidAssetSymbolMinAlias { .. } => "invalid_asset_symbol_min_alias",
            ValidationError::InvalidInitialSupply { .. } => "invalid_initial_supply",
            ValidationError::InvalidMaxSupply { .. } => "invalid_max_supply",
            ValidationError::InvalidDecimal { .. } => "invalid_decimal",
            ValidationError::InvalidMoniker { .. } => "invalid_moniker",
            ValidationError::InvalidDetails { .. } => "invalid_details",
            ValidationError::InvalidWebsite { .. } => "invalid_website",
            ValidationError::IncorrectFeeDenom { .. } => "incorrect_fee_denom",
            ValidationError::NegativeFee { .. } => "negative_fee",
            ValidationError::NoUpdatesProvided { .. } => "no_updates_provided",
            ValidationError::InvalidToAddress { .. } => "invalid_to_address",
        }
    }

    /// The human-readable detail carried by every variant
    pub fn details(&self) -> &str {
        match self {
            ValidationError::InvalidOwner { details }
            | ValidationError::InvalidAssetSource { details }
            | ValidationError::InvalidAssetFamily { details }
            | ValidationError::InvalidAssetName { details }
            | ValidationError::InvalidAssetSymbol { details }
            | ValidationError::InvalidAssetSymbolAtSource { details }
            | ValidationError::InvalidAssetSymbolMinAlias { details }
            | ValidationError::InvalidInitialSupply { details }
            | ValidationError::InvalidMaxSupply { details }
            | ValidationError::InvalidDecimal { details }
            | ValidationError::InvalidMoniker { details }
            | ValidationError::InvalidDetails { details }
            | ValidationError::InvalidWebsite { details }
            | ValidationError::IncorrectFeeDenom { details }
            | ValidationError::NegativeFee { details }
            | ValidationError::NoUpdatesProvided { details }
            | ValidationError::InvalidToAddress { details } => details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_sets_details() {
        let err = ValidationError::invalid_moniker("too short");
        assert_eq!(
            err,
            ValidationError::InvalidMoniker {
                details: "too short".to_string()
            }
        );
        assert_eq!(err.details(), "too short");
    }

    #[test]
    fn test_code_and_display() {
        let err = ValidationError::no_updates_provided("no updated values provided");
        assert_eq!(err.code(), "no_updates_provided");
        assert_eq!(
            err.to_string(),
            "No updates provided: no updated values provided"
        );
    }
}
