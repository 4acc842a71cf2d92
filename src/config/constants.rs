// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ledger-wide limits and native coin literals
//!
//! This module centralizes the numeric limits enforced on asset and gateway
//! requests, together with the denomination literals of the ledger's own coin.

/// Route shared by every asset message
pub const MSG_ROUTE: &str = "asset";

/// Symbol of the ledger's native coin
pub const NATIVE_TOKEN_NAME: &str = "iris";

/// Minimal denomination of the ledger's native coin
pub const NATIVE_TOKEN_MIN_DENOM: &str = "iris-atto";

/// Suffix marking the minimal denomination of a non-native coin
pub const MIN_DENOM_SUFFIX: &str = "-min";

/// Asset supply and formatting limits
pub mod asset {
    /// Maximal max supply of an asset (1000 billion)
    pub const MAXIMUM_MAX_SUPPLY: u64 = 1_000_000_000_000;

    /// Maximal initial supply of an asset (100 billion)
    pub const MAXIMUM_INIT_SUPPLY: u64 = 100_000_000_000;

    /// Maximal decimal of an asset
    pub const MAXIMUM_DECIMAL: u8 = 18;

    /// Length bounds of `symbol` and `symbol_at_source`
    pub const MINIMUM_SYMBOL_SIZE: usize = 3;
    pub const MAXIMUM_SYMBOL_SIZE: usize = 8;

    /// Length bounds of `symbol_min_alias`
    pub const MINIMUM_SYMBOL_MIN_ALIAS_SIZE: usize = 3;
    pub const MAXIMUM_SYMBOL_MIN_ALIAS_SIZE: usize = 10;

    /// Maximal length of the asset name
    pub const MAXIMUM_NAME_SIZE: usize = 32;
}

/// Gateway field limits
pub mod gateway {
    pub const MINIMUM_MONIKER_SIZE: usize = 3;
    pub const MAXIMUM_MONIKER_SIZE: usize = 8;
    pub const MAXIMUM_DETAILS_SIZE: usize = 280;
    pub const MAXIMUM_WEBSITE_SIZE: usize = 128;
}

/// Unit names and decimal exponents of the native coin family
pub mod units {
    /// 1 iris = 10^3 iris-milli
    pub const MILLI: (&str, u8) = ("milli", 3);
    /// 1 iris = 10^6 iris-micro
    pub const MICRO: (&str, u8) = ("micro", 6);
    /// 1 iris = 10^9 iris-nano
    pub const NANO: (&str, u8) = ("nano", 9);
    /// 1 iris = 10^12 iris-pico
    pub const PICO: (&str, u8) = ("pico", 12);
    /// 1 iris = 10^15 iris-femto
    pub const FEMTO: (&str, u8) = ("femto", 15);
    /// 1 iris = 10^18 iris-atto
    pub const ATTO: (&str, u8) = ("atto", 18);

    /// Sub-units in ascending decimal order
    pub const SUB_UNITS: [(&str, u8); 6] = [MILLI, MICRO, NANO, PICO, FEMTO, ATTO];
}
