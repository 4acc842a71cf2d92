// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Request validation and exact denomination conversion for a ledger's asset subsystem.
//!
//! Two independent components:
//!
//! - **Validation**: [`MsgIssueToken`], [`MsgCreateGateway`], [`MsgEditGateway`] and
//!   [`MsgTransferGatewayOwner`] (or the tagged [`AssetMsg`]) normalize themselves and
//!   check every structural and business rule through [`Msg::validate_basic`].
//! - **Denominations**: [`CoinType`] holds the units of a coin family and converts
//!   amounts between them with exact decimal arithmetic. [`native_coin_type`] returns
//!   the ledger's own coin family.
//!
//! Both are pure functions of their inputs and of immutable tables, so they can be
//! called concurrently without coordination.
//!
//! # Example
//!
//! ```rust
//! use assetgate::{native_coin_type, AssetConfig, Msg, MsgCreateGateway};
//!
//! let fee = native_coin_type().convert_to_min_coin("0.5iris")?;
//! let mut msg = MsgCreateGateway::new("owner1", "GDEX", "", "Gateway DEX", "", fee);
//! msg.validate_basic(&AssetConfig::default())?;
//! assert_eq!(msg.moniker, "gdex");
//! # Ok::<(), assetgate::AssetError>(())
//! ```

pub mod config;
pub mod denom;
pub mod errors;
pub mod msgs;
mod patterns;
mod tracing;
pub mod types;

pub use config::{AssetConfig, AssetConfigBuilder, AssetLimits, SizeRange};
pub use denom::{native_coin_type, CoinType, DecAmount, Unit};
pub use errors::{AssetError, DenomError, ValidationError};
pub use msgs::{
    validate_moniker, AssetMsg, Msg, MsgCreateGateway, MsgEditGateway, MsgIssueToken,
    MsgTransferGatewayOwner,
};
pub use types::account::AccountId;
pub use types::asset::{AssetFamily, AssetSource};
pub use types::coin::Coin;
pub use types::field::FieldUpdate;
