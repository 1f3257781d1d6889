//! # Strict Two-Pass Decoding
//!
//! The decoding half of the model codec contract. Every generated model
//! funnels its `Deserialize` impl through [`from_value`]:
//!
//! 1. **Pass one** looks at the document as a generic JSON object and
//!    confirms every required key is present, reporting the first missing
//!    one by name.
//! 2. **Pass two** decodes into the model's internal representation
//!    struct, whose `#[serde(deny_unknown_fields)]` rejects any key the
//!    schema does not declare.
//!
//! Both passes run before the caller's value is touched, so a failing
//! document never leaves a partially-populated model behind.
//!
//! The encoding half is [`ToMap`]: models produce their wire form as a
//! key-value map with required keys unconditionally present and optional
//! keys present only when set.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Wire-form production for generated models.
///
/// Implementations insert required keys unconditionally and optional keys
/// only when the field is set, using the schema's external key names.
/// `Serialize` impls delegate here so that the two stay in lockstep.
pub trait ToMap {
    /// The serialized key-value form of the model.
    fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error>;
}

/// Confirm that every required key is present on the decoded document.
///
/// Non-object values pass through untouched; the typed pass reports the
/// type mismatch with the decoder's own, more precise error.
///
/// # Errors
///
/// Returns [`DecodeError::MissingField`] naming the first absent key.
pub fn check_required(
    value: &Value,
    required: &'static [&'static str],
) -> Result<(), DecodeError> {
    if let Some(object) = value.as_object() {
        for &field in required {
            if !object.contains_key(field) {
                return Err(DecodeError::MissingField { field });
            }
        }
    }
    Ok(())
}

/// Decode a generic JSON value into a model representation, strictly.
///
/// `T` is the model's internal representation struct and must carry
/// `#[serde(deny_unknown_fields)]` so that pass two rejects undeclared
/// keys.
///
/// # Errors
///
/// [`DecodeError::MissingField`] if a required key is absent;
/// [`DecodeError::Json`] for type mismatches and unknown fields.
pub fn from_value<T: DeserializeOwned>(
    value: Value,
    required: &'static [&'static str],
) -> Result<T, DecodeError> {
    check_required(&value, required)?;
    Ok(serde_json::from_value(value)?)
}

/// Parse a JSON string and decode it strictly. See [`from_value`].
pub fn from_str<T: DeserializeOwned>(
    data: &str,
    required: &'static [&'static str],
) -> Result<T, DecodeError> {
    from_value(serde_json::from_str(data)?, required)
}

/// Parse JSON bytes and decode them strictly. See [`from_value`].
pub fn from_slice<T: DeserializeOwned>(
    data: &[u8],
    required: &'static [&'static str],
) -> Result<T, DecodeError> {
    from_value(serde_json::from_slice(data)?, required)
}
