//! Strongly-typed product identifier.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Raised when a string does not parse as a [`ProductId`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid product id: {0}")]
pub struct InvalidProductId(String);

/// Identifier of a product record.
///
/// Assigned by the store on insert and immutable afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered), so sorting by id follows insertion order.
    /// Prefer passing IDs explicitly in tests for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ProductId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = InvalidProductId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s).map_err(|e| InvalidProductId(e.to_string()))?;
        Ok(Self(uuid))
    }
}
