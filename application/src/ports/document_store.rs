//! Document Store port
//!
//! Defines how the application reads and writes the whole question
//! collection. Implementations (adapters) live in the infrastructure layer
//! and own the serialization format.

use async_trait::async_trait;
use responder_domain::Collection;
use thiserror::Error;

/// Errors that can occur while loading or saving the collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The persistence medium could not be read or written
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The persisted content is not a valid collection
    #[error("Corrupt data: {0}")]
    Corrupt(String),
}

/// Persists and retrieves the entire collection as one unit.
///
/// No caching: every call round-trips through the medium. `save` replaces
/// the previous content atomically, so a failed save leaves it intact.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read and deserialize the persisted collection
    async fn load(&self) -> Result<Collection, StoreError>;

    /// Serialize and persist the collection, replacing prior content
    async fn save(&self, collection: &Collection) -> Result<(), StoreError>;

    /// Create an empty collection if nothing has been persisted yet
    async fn ensure_initialized(&self) -> Result<(), StoreError>;
}
