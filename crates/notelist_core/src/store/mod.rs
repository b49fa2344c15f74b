//! Note collection state machine.
//!
//! # Responsibility
//! - Own the note collection and the active view filter for one session.
//! - Expose the full mutation contract: add, delete, set-filter,
//!   clear-filtered.
//!
//! # Invariants
//! - Insertion order of the backing collection is the canonical order;
//!   every derived view is stable with respect to it.
//! - All mutation flows through `NoteStore` methods; no handle to the
//!   backing collection escapes.

pub mod note_store;
