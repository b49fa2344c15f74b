//! Note domain record.
//!
//! # Responsibility
//! - Define the immutable title/status record the store collects.
//! - Enforce creation-time normalization: trimmed title, trimmed
//!   lower-cased status, both non-empty.
//!
//! # Invariants
//! - `id` is unique within one store session and never reused.
//! - No field is mutated after construction; lifecycle is create/delete.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one note within a store session.
///
/// Issued by the store from a strictly-increasing counter, so two notes
/// created back to back always receive distinct ids.
pub type NoteId = u64;

/// Validation error raised when note creation input is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Status is empty after trimming.
    EmptyStatus,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title cannot be blank"),
            Self::EmptyStatus => write!(f, "note status cannot be blank"),
        }
    }
}

impl Error for NoteValidationError {}

/// Immutable note record: a title plus a free-text status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-issued unique id, assigned at creation.
    pub id: NoteId,
    /// User text, trimmed but otherwise verbatim (case preserved).
    pub title: String,
    /// Free-text label, trimmed and lower-cased at creation time.
    pub status: String,
}

impl Note {
    /// Builds a note from raw user input.
    ///
    /// # Contract
    /// - Both inputs are trimmed before validation.
    /// - Title keeps its case; status is stored lower-cased.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyStatus` when the respective input trims to
    ///   nothing. No partially-valid note is ever produced.
    pub fn new(id: NoteId, title: &str, status: &str) -> Result<Self, NoteValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        let status = status.trim();
        if status.is_empty() {
            return Err(NoteValidationError::EmptyStatus);
        }
        Ok(Self {
            id,
            title: title.to_string(),
            status: status.to_lowercase(),
        })
    }
}

/// Read-only badge counts derived from the store contents.
///
/// No "other" count is exposed; statuses outside `active`/`completed`
/// only contribute to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteValidationError};

    #[test]
    fn new_trims_title_and_lowercases_status() {
        let note = Note::new(7, "  Buy milk ", " Active\t").unwrap();
        assert_eq!(note.id, 7);
        assert_eq!(note.title, "Buy milk");
        assert_eq!(note.status, "active");
    }

    #[test]
    fn new_preserves_title_case() {
        let note = Note::new(1, "Call MOM", "pending").unwrap();
        assert_eq!(note.title, "Call MOM");
    }

    #[test]
    fn new_rejects_blank_fields() {
        assert_eq!(
            Note::new(1, "   ", "active").unwrap_err(),
            NoteValidationError::EmptyTitle
        );
        assert_eq!(
            Note::new(1, "title", " \n ").unwrap_err(),
            NoteValidationError::EmptyStatus
        );
    }
}
