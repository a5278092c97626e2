//! Inventory GraphQL input types
//!
//! This crate provides the typed input records sent as mutation variables
//! to the inventory GraphQL API, together with their mapping conversions
//! and error types. It performs no network I/O; assembling and sending the
//! mutation request is the consumer's job.

pub mod error;
pub mod models;

// Re-export commonly used types
pub use error::InputError;
pub use models::{FileInput, FileInputBuilder, FileType};
