//! Domain model for the note list.
//!
//! # Responsibility
//! - Define the canonical note record and its creation-time validation.
//! - Define the filter vocabulary shared by store and presentation layers.
//!
//! # Invariants
//! - A `Note` can only come into existence with a non-empty trimmed title
//!   and a non-empty lowercase status.
//! - Filter values outside `all|active|completed` never reach the store;
//!   they are rejected at the parse boundary.

pub mod filter;
pub mod note;
