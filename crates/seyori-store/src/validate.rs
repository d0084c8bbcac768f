//! Input validation, normalization, and duplicate detection for new contacts.

use serde::Serialize;
use thiserror::Error;

use crate::model::ContactBook;

/// Minimum number of subscriber digits after stripping.
const MIN_SUBSCRIBER_DIGITS: usize = 5;

/// Which request field a rejection is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Number,
}

/// A rejected create request: human-readable message plus the offending field.
///
/// Duplicates are reported field-tagged like validation failures: a name
/// collision carries [`Field::FullName`], a number collision [`Field::Number`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ContactRejection {
    pub message: String,
    pub field: Option<Field>,
}

impl ContactRejection {
    fn field(message: &str, field: Field) -> Self {
        Self {
            message: message.to_string(),
            field: Some(field),
        }
    }
}

/// A validated contact ready to be appended: trimmed name and composed phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub full_name: String,
    pub number: String,
}

/// Strips every non-digit character.
#[must_use]
pub fn normalize_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

fn allowed_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, '-' | '.' | ',' | '\'' | '"' | '(' | ')')
}

/// ## Summary
/// Validates and normalizes a proposed contact against the current book.
///
/// The name is trimmed and checked against the allowed character class, the
/// subscriber number must strip to at least five digits, and the composed
/// phone is `+` followed by the country and subscriber digits. Duplicate
/// detection is a linear scan: names compare case-insensitively, numbers by
/// their digits only.
///
/// ## Errors
/// Returns a field-tagged [`ContactRejection`] on the first failed rule.
pub fn validate_new_contact(
    book: &ContactBook,
    full_name: &str,
    country_code: &str,
    number: &str,
) -> Result<NewContact, ContactRejection> {
    let name = full_name.trim();

    if name.is_empty() || !name.chars().all(allowed_name_char) {
        return Err(ContactRejection::field(
            "Name can contain letters, spaces, and basic punctuation (-.,'\"())",
            Field::FullName,
        ));
    }

    let subscriber_digits = normalize_digits(number);
    if subscriber_digits.len() < MIN_SUBSCRIBER_DIGITS {
        return Err(ContactRejection::field(
            "Phone number must be at least 5 digits",
            Field::Number,
        ));
    }

    let composed = format!("+{}{subscriber_digits}", normalize_digits(country_code));

    if book
        .contacts
        .iter()
        .any(|c| c.full_name.eq_ignore_ascii_case(name))
    {
        return Err(ContactRejection::field(
            "A contact with this name already exists",
            Field::FullName,
        ));
    }

    let composed_digits = normalize_digits(&composed);
    if book
        .contacts
        .iter()
        .any(|c| normalize_digits(&c.number) == composed_digits)
    {
        return Err(ContactRejection::field(
            "A contact with this number already exists",
            Field::Number,
        ));
    }

    Ok(NewContact {
        full_name: name.to_string(),
        number: composed,
    })
}
