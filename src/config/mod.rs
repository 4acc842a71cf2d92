// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for request validation
//!
//! This module provides the limits and native-coin literals that the
//! validation pipeline checks requests against.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use assetgate::AssetConfig;
//!
//! // Ledger limits: 1000 billion max supply, 18 decimals, "iris" native coin
//! let config = AssetConfig::default();
//! assert_eq!(config.native_token_name, "iris");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use assetgate::AssetConfigBuilder;
//!
//! let config = AssetConfigBuilder::with_defaults()
//!     .maximum_decimal(8)
//!     .native_token("atom", "uatom")
//!     .build();
//! assert_eq!(config.limits.maximum_decimal, 8);
//! ```

pub mod constants;

use constants::{asset, gateway, NATIVE_TOKEN_MIN_DENOM, NATIVE_TOKEN_NAME};

/// Inclusive length bounds for a string field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub min: usize,
    pub max: usize,
}

impl SizeRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check if `len` lies within `[min, max]`
    pub const fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

impl std::fmt::Display for SizeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Numeric limits enforced on asset and gateway requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLimits {
    /// Upper bound for max supply, and the default max supply of mintable assets
    pub maximum_max_supply: u64,
    pub maximum_init_supply: u64,
    pub maximum_decimal: u8,
    pub symbol_size: SizeRange,
    pub symbol_min_alias_size: SizeRange,
    pub maximum_name_size: usize,
    pub moniker_size: SizeRange,
    pub maximum_details_size: usize,
    pub maximum_website_size: usize,
}

impl Default for AssetLimits {
    fn default() -> Self {
        Self {
            maximum_max_supply: asset::MAXIMUM_MAX_SUPPLY,
            maximum_init_supply: asset::MAXIMUM_INIT_SUPPLY,
            maximum_decimal: asset::MAXIMUM_DECIMAL,
            symbol_size: SizeRange::new(asset::MINIMUM_SYMBOL_SIZE, asset::MAXIMUM_SYMBOL_SIZE),
            symbol_min_alias_size: SizeRange::new(
                asset::MINIMUM_SYMBOL_MIN_ALIAS_SIZE,
                asset::MAXIMUM_SYMBOL_MIN_ALIAS_SIZE,
            ),
            maximum_name_size: asset::MAXIMUM_NAME_SIZE,
            moniker_size: SizeRange::new(
                gateway::MINIMUM_MONIKER_SIZE,
                gateway::MAXIMUM_MONIKER_SIZE,
            ),
            maximum_details_size: gateway::MAXIMUM_DETAILS_SIZE,
            maximum_website_size: gateway::MAXIMUM_WEBSITE_SIZE,
        }
    }
}

/// Configuration read by the validation pipeline
///
/// Use [`AssetConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    pub limits: AssetLimits,

    /// Symbol of the native coin; asset symbols and gateway monikers must not contain it
    pub native_token_name: String,

    /// Only denomination accepted for gateway creation fees
    pub native_min_denom: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            limits: AssetLimits::default(),
            native_token_name: NATIVE_TOKEN_NAME.to_string(),
            native_min_denom: NATIVE_TOKEN_MIN_DENOM.to_string(),
        }
    }
}

/// Builder for [`AssetConfig`]
///
/// # Example
///
/// ```rust
/// use assetgate::AssetConfigBuilder;
///
/// let config = AssetConfigBuilder::new()
///     .maximum_max_supply(5_000)
///     .maximum_init_supply(1_000)
///     .build();
/// assert_eq!(config.limits.maximum_max_supply, 5_000);
/// ```
#[derive(Debug, Default)]
pub struct AssetConfigBuilder {
    config: AssetConfig,
}

impl AssetConfigBuilder {
    /// Create a new builder seeded with the ledger defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`new`](Self::new), spelled for readability at call sites
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn maximum_max_supply(mut self, max: u64) -> Self {
        self.config.limits.maximum_max_supply = max;
        self
    }

    pub fn maximum_init_supply(mut self, max: u64) -> Self {
        self.config.limits.maximum_init_supply = max;
        self
    }

    pub fn maximum_decimal(mut self, max: u8) -> Self {
        self.config.limits.maximum_decimal = max;
        self
    }

    pub fn symbol_size(mut self, min: usize, max: usize) -> Self {
        self.config.limits.symbol_size = SizeRange::new(min, max);
        self
    }

    pub fn symbol_min_alias_size(mut self, min: usize, max: usize) -> Self {
        self.config.limits.symbol_min_alias_size = SizeRange::new(min, max);
        self
    }

    pub fn maximum_name_size(mut self, max: usize) -> Self {
        self.config.limits.maximum_name_size = max;
        self
    }

    pub fn moniker_size(mut self, min: usize, max: usize) -> Self {
        self.config.limits.moniker_size = SizeRange::new(min, max);
        self
    }

    pub fn maximum_details_size(mut self, max: usize) -> Self {
        self.config.limits.maximum_details_size = max;
        self
    }

    pub fn maximum_website_size(mut self, max: usize) -> Self {
        self.config.limits.maximum_website_size = max;
        self
    }

    /// Set the native coin symbol and its minimal denomination
    pub fn native_token(mut self, name: impl Into<String>, min_denom: impl Into<String>) -> Self {
        self.config.native_token_name = name.into().to_lowercase();
        self.config.native_min_denom = min_denom.into();
        self
    }

    pub fn build(self) -> AssetConfig {
        self.config
    }
}
