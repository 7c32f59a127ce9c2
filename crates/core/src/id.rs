//! Product identifiers.
//!
//! Supply ids are operator-assigned codes (e.g. `FOOD-001`), not generated UUIDs,
//! so the newtype wraps a plain string and compares by exact, case-sensitive
//! equality.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an identifier, rejecting blank input.
    ///
    /// The value is kept verbatim (no trimming) so lookups stay exact.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("must not be blank"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_ids() {
        assert!(matches!(ProductId::new(""), Err(DomainError::InvalidId(_))));
        assert!(matches!(ProductId::new("   "), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn keeps_value_verbatim() {
        let id: ProductId = " F-1".parse().unwrap();
        assert_eq!(id.as_str(), " F-1");
        assert_ne!(id, "F-1");
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let id = ProductId::new("med-7").unwrap();
        assert_eq!(id, "med-7");
        assert_ne!(id, "MED-7");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ProductId::new("TOOL-3").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"TOOL-3\"");
        let back: ProductId = serde_json::from_str("\"TOOL-3\"").unwrap();
        assert_eq!(back, id);
    }
}
