//! Core domain concepts shared across the crate.
//!
//! - [`error::DomainError`] — lookup and uniqueness failures on the collection

pub mod error;
