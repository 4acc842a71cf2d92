// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denomination unit type

use bigdecimal::num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// One denomination of a coin family
///
/// `decimal` is the power of ten relating this unit to the family's base unit:
/// one base unit equals `10^decimal` of this unit.
///
/// # Examples
///
/// ```
/// use assetgate::Unit;
///
/// let milli = Unit::new("iris-milli", 3);
/// assert_eq!(milli.scale_factor().to_string(), "1000");
/// assert_eq!(milli.to_string(), "iris-milli: 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub denom: String,
    pub decimal: u8,
}

impl Unit {
    pub fn new(denom: impl Into<String>, decimal: u8) -> Self {
        Self {
            denom: denom.into(),
            decimal,
        }
    }

    /// Scale factor `10^decimal` as an exact integer
    pub fn scale_factor(&self) -> BigInt {
        BigInt::from(10u32).pow(u32::from(self.decimal))
    }

    /// Case-insensitive denomination match
    pub fn matches(&self, denom: &str) -> bool {
        self.denom.eq_ignore_ascii_case(denom)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.denom, self.decimal)
    }
}
