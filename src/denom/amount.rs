//! Decimal amount parsing and formatting

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::errors::DenomError;
use crate::patterns::split_dec_amount;

use super::Unit;

/// An exact decimal quantity of a denomination, parsed from `"<decimal-number><denom>"`
///
/// # Examples
///
/// ```
/// use assetgate::DecAmount;
///
/// let amount: DecAmount = "1.500iris".parse().unwrap();
/// assert_eq!(amount.denom, "iris");
/// assert_eq!(amount.to_string(), "1.5iris");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecAmount {
    pub value: BigDecimal,
    pub denom: String,
}

impl DecAmount {
    pub fn new(value: BigDecimal, denom: impl Into<String>) -> Self {
        Self {
            value,
            denom: denom.into(),
        }
    }

    /// Parse `<digits>[.<digits>]<denom>`; surrounding whitespace is ignored
    pub fn parse(input: &str) -> Result<Self, DenomError> {
        let (number, denom) = split_dec_amount(input.trim()).ok_or_else(|| {
            DenomError::amount_parse(input, "expected <digits>[.<digits>]<denom>")
        })?;
        let value = BigDecimal::from_str(number)
            .map_err(|e| DenomError::amount_parse(input, e.to_string()))?;
        Ok(Self::new(value, denom))
    }

    /// Re-express the value from `src` units in `dest` units
    ///
    /// `value * 10^dest.decimal / 10^src.decimal`, computed by moving the decimal
    /// point so no digit is ever lost.
    pub fn rescale(&self, src: &Unit, dest: &Unit) -> Self {
        let (digits, scale) = self.value.as_bigint_and_exponent();
        let scale = scale - i64::from(dest.decimal) + i64::from(src.decimal);
        Self::new(BigDecimal::new(digits, scale), dest.denom.clone())
    }

    /// Whether the value has no fractional part
    pub fn is_integer(&self) -> bool {
        self.value.is_integer()
    }
}

impl FromStr for DecAmount {
    type Err = DenomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecAmount::parse(s)
    }
}

impl std::fmt::Display for DecAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", format_plain(&self.value), self.denom)
    }
}

/// Positional notation without trailing zeros or exponent, e.g. `1500`, `0.001`
pub(crate) fn format_plain(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}
