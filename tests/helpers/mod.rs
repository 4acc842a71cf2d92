// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for assetgate integration tests
//!
//! Provides request fixtures that pass validation, so each test only changes
//! the field it is about.

#![allow(dead_code)]

use assetgate::{AssetSource, Coin, MsgCreateGateway, MsgIssueToken, MsgTransferGatewayOwner};

pub const OWNER: &str = "iaa1owner";
pub const NEW_OWNER: &str = "iaa1newowner";

/// A native, non-mintable token request that passes validation
pub fn native_issue(symbol: &str) -> MsgIssueToken {
    MsgIssueToken::new(AssetSource::Native, symbol, "Test Token", OWNER).supply(1_000, 0)
}

/// A gateway token request that passes validation
pub fn gateway_issue(moniker: &str, symbol: &str) -> MsgIssueToken {
    MsgIssueToken::new(AssetSource::Gateway, symbol, "Pegged Token", OWNER)
        .gateway(moniker)
        .symbol_at_source(symbol)
        .supply(1_000, 10_000)
}

/// A gateway creation request that passes validation
pub fn create_gateway(moniker: &str) -> MsgCreateGateway {
    MsgCreateGateway::new(
        OWNER,
        moniker,
        "keybase-id",
        "A test gateway",
        "https://gateway.example",
        Coin::new("iris-atto", 1_000_000_000_000_000_000u64),
    )
}

pub fn transfer_gateway(moniker: &str) -> MsgTransferGatewayOwner {
    MsgTransferGatewayOwner::new(OWNER, moniker, NEW_OWNER)
}

/// Install a test-writer tracing subscriber once; honors `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
