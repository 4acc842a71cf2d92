// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integer coin type

use bigdecimal::num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::DenomError;
use crate::patterns::split_dec_amount;

/// A whole-number amount of a single denomination
///
/// Fees and balances are held as `Coin`s in the minimal unit of their family.
/// The amount is signed so that malformed requests carrying a negative fee can
/// be represented and rejected by validation.
///
/// # Examples
///
/// ```
/// use assetgate::Coin;
///
/// let fee: Coin = "1000iris-atto".parse().unwrap();
/// assert_eq!(fee.denom, "iris-atto");
/// assert_eq!(fee.to_string(), "1000iris-atto");
/// assert!(!fee.is_negative());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "amount_string")]
    pub amount: BigInt,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<BigInt>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.amount.sign() == Sign::Minus
    }

    pub fn is_zero(&self) -> bool {
        self.amount.sign() == Sign::NoSign
    }

    /// Parse `<digits><denom>`; the denomination is lower-cased
    pub fn parse(input: &str) -> Result<Self, DenomError> {
        let (number, denom) = split_dec_amount(input.trim())
            .ok_or_else(|| DenomError::amount_parse(input, "expected <digits><denom>"))?;
        if number.contains('.') {
            return Err(DenomError::amount_parse(input, "coin amounts must be whole numbers"));
        }
        let amount = BigInt::from_str(number)
            .map_err(|e| DenomError::amount_parse(input, e.to_string()))?;
        Ok(Self::new(denom.to_lowercase(), amount))
    }
}

impl FromStr for Coin {
    type Err = DenomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coin::parse(s)
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Amounts travel as decimal strings so that values beyond 2^53 survive JSON
mod amount_string {
    use bigdecimal::num_bigint::BigInt;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(amount: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let raw = String::deserialize(deserializer)?;
        BigInt::from_str(&raw).map_err(D::Error::custom)
    }
}
