// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denomination registry and exact conversion
//!
//! # Type Relationships
//!
//! ```text
//! CoinType (registry of one coin family)
//!     |
//!     | get_unit(denom)
//!     ↓
//! Unit (denom, decimal)
//!     |
//!     | DecAmount::rescale(src, dest)
//!     ↓
//! DecAmount in the destination unit
//! ```
//!
//! The native coin family is built once on first use and shared read-only;
//! every operation takes the `CoinType` it works on explicitly, so callers and
//! tests may use any other registry in its place.

mod amount;
mod coin_type;
mod unit;

use std::sync::LazyLock;

pub use amount::DecAmount;
pub use coin_type::CoinType;
pub use unit::Unit;

static NATIVE_COIN_TYPE: LazyLock<CoinType> = LazyLock::new(CoinType::native);

/// The ledger's native coin family, shared by the whole process
///
/// # Examples
///
/// ```
/// use assetgate::native_coin_type;
///
/// let iris = native_coin_type();
/// assert_eq!(iris.min_unit.denom, "iris-atto");
/// assert_eq!(iris.units.len(), 7);
/// ```
pub fn native_coin_type() -> &'static CoinType {
    &NATIVE_COIN_TYPE
}
