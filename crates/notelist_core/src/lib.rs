//! Core domain logic for the notelist workspace.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter::{Filter, FilterParseError};
pub use model::note::{Note, NoteCounts, NoteId, NoteValidationError};
pub use store::note_store::NoteStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
