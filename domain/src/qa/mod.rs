//! Question/answer domain.
//!
//! - [`entities::Question`] — a question owning an ordered list of answers
//! - [`entities::Answer`] — a single answer to a question
//! - [`collection::Collection`] — the root aggregate holding every question
//! - [`value_objects`] — question and answer identifiers

pub mod collection;
pub mod entities;
pub mod value_objects;
