// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Coin family registry and exact unit conversion

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::config::constants::{units, MIN_DENOM_SUFFIX, NATIVE_TOKEN_NAME};
use crate::errors::DenomError;
use crate::patterns::is_coin_min_denom;
use crate::tracing::spans;
use crate::types::coin::Coin;

use super::{DecAmount, Unit};

/// The set of known denominations of one coin family
///
/// `units` is ordered by ascending decimal exponent and `min_unit` is the
/// smallest (highest-decimal) of them. A `CoinType` never changes after
/// construction, so one instance can be shared by every caller.
///
/// # Examples
///
/// ```
/// use assetgate::CoinType;
///
/// let iris = CoinType::native();
/// assert_eq!(
///     iris.convert("1iris", "iris-atto").unwrap(),
///     "1000000000000000000iris-atto"
/// );
/// assert_eq!(
///     iris.convert("1000000000000000000iris-atto", "iris").unwrap(),
///     "1iris"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinType {
    pub name: String,
    pub min_unit: Unit,
    pub units: Vec<Unit>,
    pub desc: String,
}

impl CoinType {
    /// Build a coin family from its units
    ///
    /// Units are sorted by ascending decimal. Fails if two units share a
    /// denomination (case-insensitively) or if `min_denom` is not one of them.
    pub fn new(
        name: impl Into<String>,
        mut units: Vec<Unit>,
        min_denom: &str,
        desc: impl Into<String>,
    ) -> Result<Self, DenomError> {
        let mut seen = HashSet::new();
        for unit in &units {
            if !seen.insert(unit.denom.to_lowercase()) {
                return Err(DenomError::invalid_denom(
                    &unit.denom,
                    "duplicate unit in coin family",
                ));
            }
        }
        units.sort_by_key(|unit| unit.decimal);

        let min_unit = units
            .iter()
            .find(|unit| unit.matches(min_denom))
            .cloned()
            .ok_or_else(|| DenomError::unit_not_found(min_denom))?;

        Ok(Self {
            name: name.into(),
            min_unit,
            units,
            desc: desc.into(),
        })
    }

    /// The ledger's native coin: `iris` down to `iris-atto` in steps of 10^3
    pub fn native() -> Self {
        let mut family = Vec::with_capacity(units::SUB_UNITS.len() + 1);
        family.push(Unit::new(NATIVE_TOKEN_NAME, 0));
        for (suffix, decimal) in units::SUB_UNITS.iter() {
            let denom = format!("{NATIVE_TOKEN_NAME}-{suffix}");
            family.push(Unit::new(denom, *decimal));
        }
        let min_unit = family[family.len() - 1].clone();

        Self {
            name: NATIVE_TOKEN_NAME.to_string(),
            min_unit,
            units: family,
            desc: "IRIS Network".to_string(),
        }
    }

    /// Look up a unit by denomination, ignoring case
    pub fn get_unit(&self, denom: &str) -> Result<&Unit, DenomError> {
        self.units
            .iter()
            .find(|unit| unit.matches(denom))
            .ok_or_else(|| DenomError::unit_not_found(denom))
    }

    /// The unit named after the family itself (decimal 0 for the native coin)
    pub fn main_unit(&self) -> Option<&Unit> {
        self.get_unit(&self.name).ok()
    }

    /// Convert `"<decimal><denom>"` into `dest_denom`
    ///
    /// The result is `value * 10^dest.decimal / 10^src.decimal`, computed
    /// exactly and printed without trailing zeros. Converting to the unit the
    /// amount is already in returns the input unchanged.
    pub fn convert(&self, amount: &str, dest_denom: &str) -> Result<String, DenomError> {
        let span = spans::convert_amount(&self.name, amount, dest_denom);
        let _guard = span.enter();

        let src = DecAmount::parse(amount)?;
        let dest_unit = self.get_unit(dest_denom).inspect_err(|_| {
            debug!(denom = dest_denom, "Destination unit not defined");
        })?;
        let src_unit = self.get_unit(&src.denom).inspect_err(|_| {
            debug!(denom = %src.denom, "Source unit not defined");
        })?;

        if src_unit == dest_unit {
            return Ok(amount.to_string());
        }

        let converted = src.rescale(src_unit, dest_unit).to_string();
        trace!(converted = %converted, "Converted amount");
        Ok(converted)
    }

    /// Convert an amount into the family's minimal unit
    pub fn convert_to_min_denom(&self, amount: &str) -> Result<String, DenomError> {
        self.convert(amount, &self.min_unit.denom)
    }

    /// Convert an amount into a whole-number [`Coin`] of the minimal unit
    ///
    /// Fails with [`DenomError::AmountParse`] when the amount is finer than the
    /// minimal unit, since that remainder cannot be held on-chain.
    pub fn convert_to_min_coin(&self, amount: &str) -> Result<Coin, DenomError> {
        let converted = self.convert_to_min_denom(amount)?;
        let min_amount = DecAmount::parse(&converted)?;
        if !min_amount.is_integer() {
            let min = &self.min_unit.denom;
            return Err(DenomError::amount_parse(
                amount,
                format!("amount is finer than the minimal unit {min}"),
            ));
        }
        Coin::parse(&min_amount.to_string())
    }

    /// Bare coin name for a denomination
    ///
    /// Units of this family resolve to the family name; any other denomination
    /// must be a minimal denomination (`<name>-min`) and resolves to `<name>`.
    pub fn coin_name_by_denom(&self, denom: &str) -> Result<String, DenomError> {
        let span = spans::coin_name_by_denom(denom);
        let _guard = span.enter();

        let denom = denom.to_lowercase();
        if denom.starts_with(&format!("{}-", self.name)) {
            return match self.get_unit(&denom) {
                Ok(_) => Ok(self.name.clone()),
                Err(_) => Err(DenomError::invalid_denom(
                    denom,
                    "not a unit of the native coin",
                )),
            };
        }

        if !is_coin_min_denom(&denom) {
            return Err(DenomError::invalid_denom(
                denom,
                "invalid denom for getting coin name",
            ));
        }
        match denom.strip_suffix(MIN_DENOM_SUFFIX) {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(DenomError::invalid_denom(denom, "coin name is empty")),
        }
    }

    /// Minimal denomination for a bare coin name
    ///
    /// This family's own name maps to its minimal unit; every other coin uses
    /// the generic `<name>-min` form.
    pub fn coin_min_denom(&self, coin_name: &str) -> String {
        let coin_name = coin_name.trim().to_lowercase();
        if coin_name == self.name {
            return self.min_unit.denom.clone();
        }
        format!("{coin_name}{MIN_DENOM_SUFFIX}")
    }
}

impl std::fmt::Display for CoinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units = self
            .units
            .iter()
            .map(Unit::to_string)
            .collect::<Vec<_>>()
            .join(",  ");
        write!(
            f,
            "CoinType:\n Name:     {}\n MinUnit:  {}\n Units:    {}\n Desc:     {}",
            self.name, self.min_unit, units, self.desc
        )
    }
}
