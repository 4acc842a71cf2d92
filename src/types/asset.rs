// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset family and source tags
//!
//! Both tags decode from any string without failing: values outside the known
//! set become `Unrecognized` and are rejected by request validation, which
//! reports them with the proper error kind.

use serde::{Deserialize, Serialize};

/// Family of an asset
///
/// # Examples
///
/// ```
/// use assetgate::AssetFamily;
///
/// assert_eq!("fungible".parse::<AssetFamily>().unwrap(), AssetFamily::Fungible);
/// assert!(!AssetFamily::from("collectible").is_known());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetFamily {
    Fungible,
    NonFungible,
    /// Any value outside the known family set
    Unrecognized(String),
}

impl AssetFamily {
    /// Decode from the single-byte family code
    pub fn from_code(code: u8) -> Self {
        match code {
            0x00 => AssetFamily::Fungible,
            0x01 => AssetFamily::NonFungible,
            other => AssetFamily::Unrecognized(format!("{:#04x}", other)),
        }
    }

    /// Single-byte family code, `None` if unrecognized
    pub fn code(&self) -> Option<u8> {
        match self {
            AssetFamily::Fungible => Some(0x00),
            AssetFamily::NonFungible => Some(0x01),
            AssetFamily::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AssetFamily::Fungible => "fungible",
            AssetFamily::NonFungible => "non-fungible",
            AssetFamily::Unrecognized(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AssetFamily::Unrecognized(_))
    }
}

impl From<&str> for AssetFamily {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "fungible" => AssetFamily::Fungible,
            "non-fungible" => AssetFamily::NonFungible,
            _ => AssetFamily::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for AssetFamily {
    fn from(value: String) -> Self {
        AssetFamily::from(value.as_str())
    }
}

impl From<AssetFamily> for String {
    fn from(value: AssetFamily) -> Self {
        value.as_str().to_string()
    }
}

impl std::str::FromStr for AssetFamily {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssetFamily::from(s))
    }
}

impl std::fmt::Display for AssetFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an asset originates
///
/// `External` is a reserved variant: it decodes, but issuing it is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetSource {
    /// Issued directly on the ledger by its owner
    Native,
    /// Pegged to another chain (not yet supported)
    External,
    /// Issued through a registered gateway
    Gateway,
    /// Any value outside the known source set
    Unrecognized(String),
}

impl AssetSource {
    /// Decode from the single-byte source code
    pub fn from_code(code: u8) -> Self {
        match code {
            0x00 => AssetSource::Native,
            0x01 => AssetSource::External,
            0x02 => AssetSource::Gateway,
            other => AssetSource::Unrecognized(format!("{:#04x}", other)),
        }
    }

    /// Single-byte source code, `None` if unrecognized
    pub fn code(&self) -> Option<u8> {
        match self {
            AssetSource::Native => Some(0x00),
            AssetSource::External => Some(0x01),
            AssetSource::Gateway => Some(0x02),
            AssetSource::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AssetSource::Native => "native",
            AssetSource::External => "external",
            AssetSource::Gateway => "gateway",
            AssetSource::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for AssetSource {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "native" => AssetSource::Native,
            "external" => AssetSource::External,
            "gateway" => AssetSource::Gateway,
            _ => AssetSource::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for AssetSource {
    fn from(value: String) -> Self {
        AssetSource::from(value.as_str())
    }
}

impl From<AssetSource> for String {
    fn from(value: AssetSource) -> Self {
        value.as_str().to_string()
    }
}

impl std::str::FromStr for AssetSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssetSource::from(s))
    }
}

impl std::fmt::Display for AssetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_codes() {
        assert_eq!(AssetFamily::from_code(0x00), AssetFamily::Fungible);
        assert_eq!(AssetFamily::from_code(0x01), AssetFamily::NonFungible);
        assert_eq!(
            AssetFamily::from_code(0x07),
            AssetFamily::Unrecognized("0x07".to_string())
        );
        assert_eq!(AssetFamily::NonFungible.code(), Some(0x01));
    }

    #[test]
    fn test_source_codes() {
        assert_eq!(AssetSource::from_code(0x00), AssetSource::Native);
        assert_eq!(AssetSource::from_code(0x01), AssetSource::External);
        assert_eq!(AssetSource::from_code(0x02), AssetSource::Gateway);
        assert_eq!(AssetSource::from_code(0x03).code(), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(AssetSource::from(" Gateway "), AssetSource::Gateway);
        assert_eq!(AssetFamily::from("NON-FUNGIBLE"), AssetFamily::NonFungible);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&AssetFamily::NonFungible).unwrap();
        assert_eq!(json, r#""non-fungible""#);

        let source: AssetSource = serde_json::from_str(r#""wrapped""#).unwrap();
        assert_eq!(source, AssetSource::Unrecognized("wrapped".to_string()));
        assert_eq!(serde_json::to_string(&source).unwrap(), r#""wrapped""#);
    }
}
