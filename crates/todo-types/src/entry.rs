use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Minimum number of characters a title must have when an entry is created.
pub const MIN_TITLE_CHARS: usize = 3;

/// A to-do item.
///
/// `id` is assigned once at creation and never changes afterwards, even when
/// the other fields are replaced by an update. The struct itself does not
/// enforce any field rules: stores keep whatever they are given, and the
/// service applies [`validate_title`] before creating an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub done: bool,
}

impl Entry {
    /// Create a not-yet-done entry with the given identity.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            done: false,
        }
    }

    /// Builder-style setter for the completion flag.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Returns `true` if this entry carries a usable storage key.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Check the creation-time title rule.
///
/// Length is counted in Unicode scalar values, not bytes, so `"añ"` is two
/// characters.
pub fn validate_title(title: &str) -> Result<(), TypeError> {
    let actual = title.chars().count();
    if actual < MIN_TITLE_CHARS {
        return Err(TypeError::TitleTooShort {
            min: MIN_TITLE_CHARS,
            actual,
        });
    }
    Ok(())
}
