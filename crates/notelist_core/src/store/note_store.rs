//! In-memory note store.
//!
//! # Responsibility
//! - Apply the add/normalize/filter/order/remove rules over one in-memory
//!   note list.
//! - Derive the filtered-and-ordered view and the badge counts on demand.
//!
//! # Invariants
//! - Every stored note has a non-empty title and a non-empty lowercase
//!   status; invalid input is rejected before it reaches the collection.
//! - Ids come from a strictly-increasing counter and are never reused,
//!   including after deletion.
//! - The all-view is bucketed `active`, then `completed`, then everything
//!   else, with insertion order preserved inside each bucket.
//! - Views are recomputed per call; nothing is cached.

use crate::model::filter::Filter;
use crate::model::note::{Note, NoteCounts, NoteId, NoteValidationError};
use log::{debug, info};

/// Pure state container for one note list session.
///
/// The store has no side effects beyond log events. In particular the
/// confirmation step that guards bulk clears belongs to the caller:
/// check `clear_candidate_count()` first, obtain confirmation, then call
/// `clear_filtered()` with the already-affirmed intent.
#[derive(Debug)]
pub struct NoteStore {
    notes: Vec<Note>,
    filter: Filter,
    next_id: NoteId,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Creates an empty store with the default `all` filter.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            filter: Filter::All,
            next_id: 1,
        }
    }

    /// Adds one note from raw user input.
    ///
    /// # Contract
    /// - Trims both inputs; lower-cases the status (title case preserved).
    /// - Appends to the end of the backing collection.
    /// - No duplicate detection: identical title/status pairs coexist as
    ///   distinct notes.
    /// - Returns the assigned id so the caller can reset its input fields.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyStatus` when the respective input trims to
    ///   nothing; the collection is left unchanged.
    pub fn add(&mut self, title: &str, status: &str) -> Result<NoteId, NoteValidationError> {
        let note = Note::new(self.next_id, title, status)?;
        let id = note.id;
        self.next_id += 1;
        debug!(
            "event=note_added module=store status=ok id={id} label={}",
            note.status
        );
        self.notes.push(note);
        Ok(id)
    }

    /// Removes the note with the given id; absent ids are a silent no-op.
    pub fn delete(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() != before {
            debug!("event=note_deleted module=store status=ok id={id}");
        }
    }

    /// Currently active filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Replaces the active filter. Never rejected; stored notes are
    /// untouched.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Pure first phase of clear-filtered: how many notes the mutating
    /// half would remove under the current filter.
    ///
    /// Callers offer the destructive-action confirmation only when this
    /// is non-zero.
    pub fn clear_candidate_count(&self) -> usize {
        self.view().len()
    }

    /// Mutating half of clear-filtered. Call only with already-affirmed
    /// intent.
    ///
    /// # Contract
    /// - Empty filtered view: no-op, returns 0.
    /// - Filter `all`: empties the entire collection.
    /// - Filter `active`/`completed`: removes exactly the notes whose
    ///   status equals the filter value; every other note survives.
    /// - Returns the number of notes removed.
    pub fn clear_filtered(&mut self) -> usize {
        if self.clear_candidate_count() == 0 {
            return 0;
        }
        let before = self.notes.len();
        match self.filter {
            Filter::All => self.notes.clear(),
            Filter::Active | Filter::Completed => {
                let label = self.filter.as_str();
                self.notes.retain(|note| note.status != label);
            }
        }
        let removed = before - self.notes.len();
        info!(
            "event=notes_cleared module=store status=ok filter={} removed={removed}",
            self.filter
        );
        removed
    }

    /// Filtered-and-ordered view under the current filter.
    ///
    /// Recomputed on every call. Under `active`/`completed` this is the
    /// exact subsequence of notes with that status, in insertion order.
    /// Under `all` it is the 3-bucket stable concatenation: `active`
    /// notes first, then `completed`, then all remaining statuses
    /// together, each bucket in insertion order.
    pub fn view(&self) -> Vec<&Note> {
        match self.filter {
            Filter::Active | Filter::Completed => {
                let label = self.filter.as_str();
                self.notes
                    .iter()
                    .filter(|note| note.status == label)
                    .collect()
            }
            Filter::All => {
                let mut ordered = Vec::with_capacity(self.notes.len());
                ordered.extend(self.notes.iter().filter(|note| note.status == "active"));
                ordered.extend(self.notes.iter().filter(|note| note.status == "completed"));
                ordered.extend(
                    self.notes
                        .iter()
                        .filter(|note| note.status != "active" && note.status != "completed"),
                );
                ordered
            }
        }
    }

    /// Badge counts over the whole collection, independent of the active
    /// filter.
    pub fn counts(&self) -> NoteCounts {
        NoteCounts {
            total: self.notes.len(),
            active: self
                .notes
                .iter()
                .filter(|note| note.status == "active")
                .count(),
            completed: self
                .notes
                .iter()
                .filter(|note| note.status == "completed")
                .count(),
        }
    }

    /// Total number of stored notes regardless of filter.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True when the store holds no notes at all.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
