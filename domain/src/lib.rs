//! Domain layer for responder
//!
//! This crate contains the question/answer entities and the collection
//! aggregate that enforces id uniqueness and ordering.
//! It has no dependencies on storage or HTTP concerns.
//!
//! # Core Concepts
//!
//! - **Question**: a free-text prompt with an author, owning its answers
//! - **Answer**: a free-text reply, unique within its parent question
//! - **Collection**: every question, in insertion order; the unit of persistence

pub mod core;
pub mod qa;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use qa::{
    collection::Collection,
    entities::{Answer, Question},
    value_objects::{AnswerId, QuestionId},
};
