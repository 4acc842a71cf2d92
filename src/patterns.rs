// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Compiled text patterns shared by request validation and amount parsing

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    // Patterns are literals in this module; a failure is a programming error
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

static ALPHA: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z]+$"));

static ALPHA_NUMERIC: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z0-9]+$"));

static BEGIN_WITH_ALPHA: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z].*"));

/// `<decimal-digits>[.<decimal-digits>]<denom>`, whitespace allowed between the parts
static DEC_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([0-9]+(?:\.[0-9]+)?)[[:space:]]*([a-zA-Z][a-zA-Z0-9.\-]{2,31})$"));

/// Minimal denomination of a non-native coin, optionally gateway-prefixed
static COIN_MIN_DENOM: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([a-z][a-z0-9]{2,7}\.)?[a-z][a-z0-9]{2,7}-min$"));

/// Only ASCII letters
pub(crate) fn is_alpha(s: &str) -> bool {
    ALPHA.is_match(s)
}

/// Only ASCII letters and digits
pub(crate) fn is_alpha_numeric(s: &str) -> bool {
    ALPHA_NUMERIC.is_match(s)
}

pub(crate) fn is_begin_with_alpha(s: &str) -> bool {
    BEGIN_WITH_ALPHA.is_match(s)
}

pub(crate) fn is_coin_min_denom(s: &str) -> bool {
    COIN_MIN_DENOM.is_match(s)
}

/// Split an amount string into its number and denomination parts
pub(crate) fn split_dec_amount(s: &str) -> Option<(&str, &str)> {
    let caps = DEC_AMOUNT.captures(s)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha() {
        assert!(is_alpha("gateway"));
        assert!(is_alpha("GateWay"));
        assert!(!is_alpha("gate1"));
        assert!(!is_alpha(""));
    }

    #[test]
    fn test_alpha_numeric() {
        assert!(is_alpha_numeric("btc1"));
        assert!(!is_alpha_numeric("btc-1"));
        assert!(!is_alpha_numeric(""));
    }

    #[test]
    fn test_begin_with_alpha() {
        assert!(is_begin_with_alpha("a1"));
        assert!(!is_begin_with_alpha("1a"));
    }

    #[test]
    fn test_coin_min_denom() {
        assert!(is_coin_min_denom("btc-min"));
        assert!(is_coin_min_denom("gdex.btc-min"));
        assert!(!is_coin_min_denom("-min"));
        assert!(!is_coin_min_denom("btc"));
        assert!(!is_coin_min_denom("bt-min"));
    }

    #[test]
    fn test_split_dec_amount() {
        assert_eq!(split_dec_amount("1iris"), Some(("1", "iris")));
        assert_eq!(
            split_dec_amount("1.25 iris-milli"),
            Some(("1.25", "iris-milli"))
        );
        assert_eq!(split_dec_amount("1.iris"), None);
        assert_eq!(split_dec_amount("-1iris"), None);
        assert_eq!(split_dec_amount("iris"), None);
    }
}
