//! Account identity type

use serde::{Deserialize, Serialize};

/// Account identity of a request participant (owner, recipient, signer)
///
/// Identities are opaque to this crate: only emptiness and equality are checked.
/// Signature collection against these identities happens outside of this crate.
///
/// # Examples
///
/// ```
/// use assetgate::AccountId;
///
/// let owner = AccountId::from("iaa1owner");
/// assert!(!owner.is_empty());
/// assert!(AccountId::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Copy with surrounding whitespace removed
    pub fn trimmed(&self) -> Self {
        Self(self.0.trim().to_string())
    }

    /// An empty identity means the account was not specified
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
