//! Person — the single record kept by rolodex.

use serde::{Deserialize, Serialize};

use crate::id::PersonId;

/// A stored person: the storage-assigned identifier plus contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
}

impl Person {
    /// Attach an identifier to submitted details.
    #[must_use]
    pub fn new(id: PersonId, details: NewPerson) -> Self {
        Self {
            id,
            name: details.name,
            email: details.email,
        }
    }
}

/// Details of a person that has not been stored yet.
///
/// Clients never choose the identifier: an `id` field in a payload is ignored.
/// Absent fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
}

impl NewPerson {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
