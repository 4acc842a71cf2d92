// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for denomination lookup and amount conversion.

/// Errors that can occur when resolving units or converting amounts.
///
/// # Examples
///
/// ```rust
/// use assetgate::{native_coin_type, DenomError};
///
/// match native_coin_type().get_unit("doesnotexist") {
///     Err(DenomError::UnitNotFound { denom }) => assert_eq!(denom, "doesnotexist"),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DenomError {
    /// The denomination is not a unit of the coin family.
    #[error("Unit not found: {denom}")]
    UnitNotFound {
        /// The denomination that was looked up
        denom: String,
    },

    /// The amount string is not `<decimal-digits>[.<decimal-digits>]<denom>`.
    #[error("Failed to parse amount {input:?}: {reason}")]
    AmountParse {
        /// The rejected input
        input: String,
        /// Why parsing failed
        reason: String,
    },

    /// The denomination does not name a coin.
    ///
    /// Returned by the coin-name helpers when a denom is neither a unit of the
    /// native family nor a well-formed minimal denomination.
    #[error("Invalid denom {denom:?}: {reason}")]
    InvalidDenom {
        /// The rejected denomination
        denom: String,
        /// Why the denomination was rejected
        reason: String,
    },
}

impl DenomError {
    /// Create a `UnitNotFound` error for a denomination.
    pub fn unit_not_found(denom: impl Into<String>) -> Self {
        DenomError::UnitNotFound {
            denom: denom.into(),
        }
    }

    /// Create an `AmountParse` error for an input string.
    pub fn amount_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        DenomError::AmountParse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an `InvalidDenom` error for a denomination.
    pub fn invalid_denom(denom: impl Into<String>, reason: impl Into<String>) -> Self {
        DenomError::InvalidDenom {
            denom: denom.into(),
            reason: reason.into(),
        }
    }

    /// Stable snake_case name of the error kind
    pub fn code(&self) -> &'static str {
        match self {
            DenomError::UnitNotFound { .. } => "unit_not_found",
            DenomError::AmountParse { .. } => "amount_parse_error",
            DenomError::InvalidDenom { .. } => "invalid_denom",
        }
    }
}
