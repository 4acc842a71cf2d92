// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset and gateway requests and their validation
//!
//! Every request kind implements [`Msg`]. Validation normalizes the request in
//! place (trimming, lower-casing) and then checks its rules in a fixed order,
//! stopping at the first violation. The normalized request is what a caller
//! should persist.
//!
//! # Example
//!
//! ```rust
//! use assetgate::{AccountId, AssetConfig, AssetMsg, Msg, MsgIssueToken, AssetSource};
//!
//! let config = AssetConfig::default();
//! let mut msg = AssetMsg::IssueToken(
//!     MsgIssueToken::new(AssetSource::Native, " BTC ", "Bitcoin", "owner1")
//!         .supply(21_000_000, 0)
//!         .mintable(true),
//! );
//!
//! msg.validate_basic(&config).unwrap();
//! assert_eq!(msg.signers(), vec![AccountId::from("owner1")]);
//!
//! if let AssetMsg::IssueToken(issue) = &msg {
//!     assert_eq!(issue.symbol, "btc");
//!     assert_eq!(issue.max_supply, 1_000_000_000_000);
//! }
//! ```

mod gateway;
mod issue_token;

pub use gateway::{validate_moniker, MsgCreateGateway, MsgEditGateway, MsgTransferGatewayOwner};
pub use issue_token::MsgIssueToken;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::constants::MSG_ROUTE;
use crate::config::AssetConfig;
use crate::errors::ValidationError;
use crate::tracing::spans;
use crate::types::account::AccountId;

/// A request handled by the asset subsystem
pub trait Msg {
    /// Route shared by all asset requests
    fn route(&self) -> &'static str {
        MSG_ROUTE
    }

    /// Request kind, e.g. `issue_token`
    fn msg_type(&self) -> &'static str;

    /// Normalize the request in place, then check every rule
    ///
    /// Returns the first violated rule. On success the request holds the
    /// normalized values.
    fn validate_basic(&mut self, config: &AssetConfig) -> Result<(), ValidationError>;

    /// Accounts that must have signed the request, in order
    fn signers(&self) -> Vec<AccountId>;

    /// Canonical bytes to sign: the request as JSON with object keys sorted
    fn sign_bytes(&self) -> serde_json::Result<Vec<u8>>
    where
        Self: Serialize + Sized,
    {
        // serde_json's default map is ordered by key
        let value = serde_json::to_value(self)?;
        serde_json::to_vec(&value)
    }
}

/// Run one request's checks inside its span and log the verdict
pub(crate) fn run_checks(
    msg_type: &str,
    checks: impl FnOnce() -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    let span = spans::validate_msg(MSG_ROUTE, msg_type);
    let _guard = span.enter();

    let verdict = checks();
    match &verdict {
        Ok(()) => trace!("Request accepted"),
        Err(e) => debug!(code = e.code(), details = e.details(), "Request rejected"),
    }
    verdict
}

/// Trim leading and trailing whitespace in place
pub(crate) fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Trim and lower-case in place
pub(crate) fn fold_in_place(value: &mut String) {
    *value = value.trim().to_lowercase();
}

/// All asset request kinds, tagged by their `msg_type`
///
/// # Examples
///
/// ```rust
/// use assetgate::{AssetMsg, Msg};
///
/// let json = r#"{
///     "type": "transfer_gateway_owner",
///     "value": {"owner": "owner1", "moniker": "gdex", "to": "owner2"}
/// }"#;
/// let msg: AssetMsg = serde_json::from_str(json).unwrap();
/// assert_eq!(msg.msg_type(), "transfer_gateway_owner");
/// assert_eq!(msg.signers().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AssetMsg {
    IssueToken(MsgIssueToken),
    CreateGateway(MsgCreateGateway),
    EditGateway(MsgEditGateway),
    TransferGatewayOwner(MsgTransferGatewayOwner),
}

impl Msg for AssetMsg {
    fn msg_type(&self) -> &'static str {
        match self {
            AssetMsg::IssueToken(msg) => msg.msg_type(),
            AssetMsg::CreateGateway(msg) => msg.msg_type(),
            AssetMsg::EditGateway(msg) => msg.msg_type(),
            AssetMsg::TransferGatewayOwner(msg) => msg.msg_type(),
        }
    }

    fn validate_basic(&mut self, config: &AssetConfig) -> Result<(), ValidationError> {
        match self {
            AssetMsg::IssueToken(msg) => msg.validate_basic(config),
            AssetMsg::CreateGateway(msg) => msg.validate_basic(config),
            AssetMsg::EditGateway(msg) => msg.validate_basic(config),
            AssetMsg::TransferGatewayOwner(msg) => msg.validate_basic(config),
        }
    }

    fn signers(&self) -> Vec<AccountId> {
        match self {
            AssetMsg::IssueToken(msg) => msg.signers(),
            AssetMsg::CreateGateway(msg) => msg.signers(),
            AssetMsg::EditGateway(msg) => msg.signers(),
            AssetMsg::TransferGatewayOwner(msg) => msg.signers(),
        }
    }

    /// Signs the inner request, so the bytes match those of the bare request
    fn sign_bytes(&self) -> serde_json::Result<Vec<u8>> {
        match self {
            AssetMsg::IssueToken(msg) => msg.sign_bytes(),
            AssetMsg::CreateGateway(msg) => msg.sign_bytes(),
            AssetMsg::EditGateway(msg) => msg.sign_bytes(),
            AssetMsg::TransferGatewayOwner(msg) => msg.sign_bytes(),
        }
    }
}

impl From<MsgIssueToken> for AssetMsg {
    fn from(msg: MsgIssueToken) -> Self {
        AssetMsg::IssueToken(msg)
    }
}

impl From<MsgCreateGateway> for AssetMsg {
    fn from(msg: MsgCreateGateway) -> Self {
        AssetMsg::CreateGateway(msg)
    }
}

impl From<MsgEditGateway> for AssetMsg {
    fn from(msg: MsgEditGateway) -> Self {
        AssetMsg::EditGateway(msg)
    }
}

impl From<MsgTransferGatewayOwner> for AssetMsg {
    fn from(msg: MsgTransferGatewayOwner) -> Self {
        AssetMsg::TransferGatewayOwner(msg)
    }
}
