// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the assetgate library.
//!
//! This module provides strongly-typed errors for all public APIs in assetgate.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   ([`ValidationError`], [`DenomError`])
//! - **Unified error type** ([`AssetError`]) for convenience when you don't need
//!   to distinguish between error sources
//!
//! No error is ever recovered internally: a validation failure rejects the request,
//! a conversion failure aborts that conversion, and the caller decides what to do next.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use assetgate::{native_coin_type, DenomError};
//!
//! match native_coin_type().convert("1.5iris", "iris-milli") {
//!     Ok(amount) => assert_eq!(amount, "1500iris-milli"),
//!     Err(DenomError::UnitNotFound { denom }) => eprintln!("unknown unit {}", denom),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust
//! use assetgate::{native_coin_type, AssetConfig, AssetError, Msg, MsgCreateGateway};
//!
//! fn create_gateway_with_fee(fee: &str) -> Result<MsgCreateGateway, AssetError> {
//!     let fee = native_coin_type().convert_to_min_coin(fee)?;
//!     let mut msg = MsgCreateGateway::new("owner1", "gateway", "", "", "", fee);
//!     msg.validate_basic(&AssetConfig::default())?;
//!     Ok(msg)
//! }
//!
//! assert!(create_gateway_with_fee("10iris").is_ok());
//! ```

mod denom;
mod validation;

pub use denom::DenomError;
pub use validation::ValidationError;

/// Unified error type for all assetgate operations.
///
/// All module-specific error types automatically convert to `AssetError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    /// Error from request validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error from denomination lookup or conversion.
    #[error("Denomination error: {0}")]
    Denom(#[from] DenomError),
}

impl AssetError {
    /// Stable snake_case name of the underlying error kind
    pub fn code(&self) -> &'static str {
        match self {
            AssetError::Validation(e) => e.code(),
            AssetError::Denom(e) => e.code(),
        }
    }
}
