//! Error types module
//!
//! Errors raised when building or decoding GraphQL input records. Both
//! variants are synchronous and returned to the immediate caller; this
//! crate never catches or retries.

/// Error raised when an input record cannot be built or decoded.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A required field was never set. Carries the field's wire name.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The mapping's shape or a value's type does not match the schema.
    #[error("Failed to decode input: {0}")]
    Decode(#[from] serde_json::Error),
}
