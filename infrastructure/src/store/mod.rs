//! Storage adapters — persistence of the question collection.
//!
//! Provides [`JsonFileStore`], a single-file JSON implementation of the
//! [`DocumentStore`](responder_application::DocumentStore) port.

mod json_file_store;

pub use json_file_store::JsonFileStore;
