// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Optional update field type

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of an edit request that is either left untouched or set to a value
///
/// `Set(String::new())` means "clear this field", which is different from
/// `Unset` ("leave this field as it is").
///
/// On the wire an unset field is absent (or `null`); use
/// `#[serde(default, skip_serializing_if = "FieldUpdate::is_unset")]` on struct fields.
///
/// # Examples
///
/// ```
/// use assetgate::FieldUpdate;
///
/// let website: FieldUpdate<String> = FieldUpdate::Set(String::new());
/// assert!(website.is_set());
/// assert_eq!(website.as_set().map(String::as_str), Some(""));
///
/// let details: FieldUpdate<String> = FieldUpdate::default();
/// assert!(details.is_unset());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// The caller does not intend to change the field
    #[default]
    Unset,
    /// The caller intends to replace the field with this value
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, FieldUpdate::Set(_))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, FieldUpdate::Unset)
    }

    /// Borrow the new value, if one was provided
    pub fn as_set(&self) -> Option<&T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Unset => None,
        }
    }

    /// Mutably borrow the new value, if one was provided
    pub fn as_set_mut(&mut self) -> Option<&mut T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Unset => None,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Unset,
        }
    }
}

impl<T> From<FieldUpdate<T>> for Option<T> {
    fn from(value: FieldUpdate<T>) -> Self {
        match value {
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Unset => None,
        }
    }
}

impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_set().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(FieldUpdate::from)
    }
}
