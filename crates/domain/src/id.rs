//! Typed identifier for people, backed by the storage-assigned integer key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a [`Person`](crate::person::Person).
///
/// Assigned by storage on creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    /// Wrap a raw storage key.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Access the raw storage key.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for PersonId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PersonId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_decimal_text() {
        let id: PersonId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn should_return_invalid_id_when_parsing_non_numeric_text() {
        let result = PersonId::from_str("abc");
        assert_eq!(result, Err(ValidationError::InvalidId("abc".to_string())));
    }

    #[test]
    fn should_reject_empty_and_fractional_text() {
        assert!(PersonId::from_str("").is_err());
        assert!(PersonId::from_str("1.5").is_err());
    }

    #[test]
    fn should_serialize_as_bare_number() {
        let json = serde_json::to_string(&PersonId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn should_display_raw_value() {
        assert_eq!(PersonId::from(999_999).to_string(), "999999");
    }
}
