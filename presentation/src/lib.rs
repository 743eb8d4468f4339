//! Presentation layer for responder
//!
//! This crate contains the CLI definition and the HTTP API that exposes
//! the question repository.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, router, serve};
