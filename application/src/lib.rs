//! Application layer for responder
//!
//! This crate contains the question repository use case and the document
//! store port it persists through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::document_store::{DocumentStore, StoreError};
pub use use_cases::question_repository::{QuestionRepository, RepositoryError};
