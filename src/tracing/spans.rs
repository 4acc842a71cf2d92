// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for assetgate operations.
//!
//! Telemetry concerns are kept apart from business logic: instead of using
//! `#[instrument]` attributes directly on functions, each instrumented operation
//! has a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::{Level, Span};

/// Create span for validating one request.
///
/// Parent: None (root span for this operation)
/// Children: validate_moniker span for gateway requests
#[inline]
pub(crate) fn validate_msg(route: &str, msg_type: &str) -> Span {
    tracing::span!(
        Level::DEBUG,
        "assetgate.validate_msg",
        route = route,
        msg_type = msg_type,
    )
}

/// Create span for validating a gateway moniker.
///
/// Parent: validate_msg span
#[inline]
pub(crate) fn validate_moniker(moniker: &str) -> Span {
    tracing::trace_span!("assetgate.validate_moniker", moniker = moniker)
}

/// Create span for converting an amount between units of one coin family.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn convert_amount(coin: &str, amount: &str, dest_denom: &str) -> Span {
    tracing::debug_span!(
        "assetgate.convert_amount",
        coin = coin,
        amount = amount,
        dest_denom = dest_denom,
    )
}

/// Create span for resolving a coin name from a denomination.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn coin_name_by_denom(denom: &str) -> Span {
    tracing::trace_span!("assetgate.coin_name_by_denom", denom = denom)
}
