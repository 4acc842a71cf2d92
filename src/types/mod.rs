// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across assetgate.
//!
//! This module provides newtype wrappers and tags for request fields:
//! - Account identities
//! - Integer coins (fees)
//! - Asset family and source tags
//! - Three-state update fields for edit requests

pub mod account;
pub mod asset;
pub mod coin;
pub mod field;

// Note: Public types are re-exported from lib.rs, not here
