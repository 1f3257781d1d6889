//! # Decode Errors
//!
//! Error type for strict model decoding. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Missing required fields are reported by name, as a distinct variant,
//!   so callers can tell schema violations apart from syntax errors.
//! - Everything the underlying JSON decoder rejects — malformed syntax,
//!   type mismatches, unknown fields — is propagated unchanged.
//! - No retries, no silent defaults: every variant means the document was
//!   rejected as a whole.

use thiserror::Error;

/// Failure while decoding a JSON document into a generated model.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A property the schema marks as required was absent from the document.
    #[error("no value given for required property `{field}`")]
    MissingField {
        /// External (wire) name of the missing property.
        field: &'static str,
    },

    /// Malformed JSON, a type mismatch, or a property outside the schema.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// True if this error is the named required property being absent.
    pub fn is_missing(&self, field: &str) -> bool {
        matches!(self, DecodeError::MissingField { field: f } if *f == field)
    }
}
