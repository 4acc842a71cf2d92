// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for denomination conversion
//!
//! Conversion uses exact decimal arithmetic, so going from one unit to another
//! and back must reproduce the original amount digit for digit.

use assetgate::{native_coin_type, CoinType, DenomError, Unit};
use proptest::prelude::*;

fn arb_unit() -> impl Strategy<Value = Unit> {
    proptest::sample::select(native_coin_type().units.clone())
}

// Canonical amounts: no leading zeros, no trailing fractional zeros
fn arb_amount() -> impl Strategy<Value = String> {
    let fraction = proptest::option::of("[0-9]{0,17}[1-9]");
    (0u64..=10_000_000_000, fraction).prop_map(|(whole, fraction)| match fraction {
        Some(fraction) => format!("{whole}.{fraction}"),
        None => whole.to_string(),
    })
}

#[test]
fn test_one_iris_to_atto_and_back() {
    let iris = native_coin_type();
    let atto = iris.convert("1iris", "iris-atto").unwrap();
    assert_eq!(atto, "1000000000000000000iris-atto");
    assert_eq!(iris.convert(&atto, "iris").unwrap(), "1iris");
}

#[test]
fn test_unknown_unit_lookup_fails() {
    assert_eq!(
        native_coin_type().get_unit("doesnotexist").unwrap_err(),
        DenomError::UnitNotFound {
            denom: "doesnotexist".to_string()
        }
    );
}

#[test]
fn test_injected_registry() {
    let btc = CoinType::new(
        "btc",
        vec![Unit::new("btc", 0), Unit::new("btc-sat", 8)],
        "btc-sat",
        "Pegged bitcoin",
    )
    .unwrap();
    assert_eq!(
        btc.convert_to_min_denom("0.5btc").unwrap(),
        "50000000btc-sat"
    );
    assert!(btc.convert("1iris", "btc").is_err());
}

proptest! {
    /// Property: U1 -> U2 -> U1 reproduces the amount exactly
    #[test]
    fn prop_round_trip_exact(amount in arb_amount(), from in arb_unit(), to in arb_unit()) {
        let iris = native_coin_type();
        let original = format!("{amount}{}", from.denom);

        let there = iris.convert(&original, &to.denom).unwrap();
        let back = iris.convert(&there, &from.denom).unwrap();
        prop_assert_eq!(back, original);
    }

    /// Property: the converted amount always carries the destination denomination
    #[test]
    fn prop_result_in_destination_denom(amount in arb_amount(), from in arb_unit(), to in arb_unit()) {
        let converted = native_coin_type()
            .convert(&format!("{amount}{}", from.denom), &to.denom)
            .unwrap();
        let number = converted.strip_suffix(to.denom.as_str());
        prop_assert!(number.is_some(), "{} lacks {}", converted, to.denom);
        // Plain positional notation, never an exponent
        prop_assert!(number.unwrap().chars().all(|c| c.is_ascii_digit() || c == '.'));
    }

    /// Property: conversion to the minimal unit never yields a fraction for whole base amounts
    #[test]
    fn prop_whole_amounts_have_integer_min_denom(whole in 0u64..=1_000_000_000_000, from in arb_unit()) {
        let coin = native_coin_type()
            .convert_to_min_coin(&format!("{whole}{}", from.denom))
            .unwrap();
        prop_assert_eq!(coin.denom, "iris-atto");
    }

    /// Property: unknown denominations fail with UnitNotFound, never panic
    #[test]
    fn prop_unknown_denom_not_found(denom in "[a-z]{3,10}") {
        prop_assume!(native_coin_type().units.iter().all(|u| !u.matches(&denom)));
        prop_assert_eq!(
            native_coin_type().get_unit(&denom).unwrap_err(),
            DenomError::unit_not_found(denom.clone())
        );
    }
}
