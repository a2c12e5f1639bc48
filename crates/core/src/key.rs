//! Opaque, caller-assigned entity keys.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Opaque entity key.
///
/// Keys are never generated by the domain: external callers mint them
/// (registration numbers, course codes, ...) and the domain only requires
/// them to be unique within one registry table. The key's content carries no
/// meaning here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityKey(String);

impl EntityKey {
    /// Wrap a caller-assigned key verbatim.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EntityKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for EntityKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for EntityKey {
    type Err = DomainError;

    /// Parse a key from external textual input. Blank keys are rejected;
    /// everything else is accepted verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_id("EntityKey: key cannot be blank"));
        }
        Ok(Self(s.to_string()))
    }
}
