//! Card data assembled before serialization.

use crate::error::{VcardError, VcardResult};

/// A single contact card.
///
/// Holds the structured name split plus the optional properties the export
/// endpoint fills in. Serialization lives in [`crate::build`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    /// Given name (first whitespace-separated token of the display name).
    pub first_name: String,
    /// Family name (remaining tokens joined with a single space; may be empty).
    pub last_name: String,
    /// Digits-only cell phone value.
    pub cell_phone: Option<String>,
    /// Digits-only work phone value.
    pub work_phone: Option<String>,
    /// Free-text note.
    pub note: Option<String>,
}

impl Card {
    /// ## Summary
    /// Builds a card from a display name, splitting it into first and last
    /// name. The first whitespace-separated token becomes the first name and
    /// the remaining tokens, joined with a space, the last name.
    ///
    /// ## Errors
    /// Returns [`VcardError::EmptyName`] if the name holds no tokens. Stored
    /// records always have a validated non-empty name, so this only fires on
    /// hand-edited data.
    pub fn from_full_name(full_name: &str) -> VcardResult<Self> {
        let mut tokens = full_name.split_whitespace();
        let first_name = tokens.next().ok_or(VcardError::EmptyName)?.to_string();
        let last_name = tokens.collect::<Vec<_>>().join(" ");

        Ok(Self {
            first_name,
            last_name,
            ..Self::default()
        })
    }

    /// Returns the formatted name (FN property value).
    #[must_use]
    pub fn formatted_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}
