//! The persisted contact book document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single stored contact.
///
/// Records are immutable once created; there is no update or delete
/// operation anywhere in the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Opaque unique id, assigned at creation.
    pub id: String,
    /// Trimmed display name; matched case-insensitively for duplicates.
    pub full_name: String,
    /// Normalized phone in the form `+<countryDigits><subscriberDigits>`.
    pub number: String,
    /// Creation time, fixed at insert.
    pub timestamp: DateTime<Utc>,
}

impl ContactRecord {
    /// ## Summary
    /// Creates a record with a fresh time-ordered id (UUIDv7) and the
    /// current time as its creation timestamp.
    #[must_use]
    pub fn new(full_name: String, number: String) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            full_name,
            number,
            timestamp: Utc::now(),
        }
    }
}

/// The whole persisted document: `{count, contacts[]}`.
///
/// `count` is a redundant cache of `contacts.len()`; [`ContactBook::push`]
/// is the only mutation and keeps the two consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBook {
    pub count: usize,
    pub contacts: Vec<ContactRecord>,
}

impl ContactBook {
    /// Appends a record and recomputes `count`.
    pub fn push(&mut self, record: ContactRecord) {
        self.contacts.push(record);
        self.count = self.contacts.len();
    }

    /// Returns whether the book holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
