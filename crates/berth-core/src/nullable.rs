//! # Nullable Wrapper — Three-State Optional Fields
//!
//! `Nullable<T>` carries a schema-nullable field through serialization
//! without collapsing its three states:
//!
//! | State | Wire form | `is_set()` | `get()` |
//! |---|---|---|---|
//! | unset | key absent | `false` | `None` |
//! | explicit null | `"key": null` | `true` | `None` |
//! | value | `"key": <value>` | `true` | `Some(&v)` |
//!
//! A plain `Option<T>` cannot represent the first two states separately,
//! which is exactly the distinction API consumers rely on: "the client
//! didn't send this field" versus "the client explicitly cleared it."
//!
//! ## Embedding
//!
//! The wrapper itself always serializes its inner value (`null` when
//! absent). Omission of the key is the parent's job:
//!
//! ```ignore
//! #[serde(default, skip_serializing_if = "Nullable::is_unset")]
//! last_used_at: Nullable<DateTime<Utc>>,
//! ```
//!
//! Deserialization always marks the wrapper set — it only runs when the
//! key was present. The unset state is produced solely by `default`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field value that distinguishes absent, explicit-null, and present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nullable<T> {
    value: Option<T>,
    set: bool,
}

impl<T> Nullable<T> {
    /// A wrapper set to a concrete value.
    pub fn new(value: T) -> Self {
        Self { value: Some(value), set: true }
    }

    /// A wrapper explicitly set to null.
    pub fn null() -> Self {
        Self { value: None, set: true }
    }

    /// The set value, if any. `None` both when unset and when explicitly
    /// null; use [`is_set`](Self::is_set) to tell the two apart.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Assign a value (or an explicit null) and mark the field set.
    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
        self.set = true;
    }

    /// True if the field was assigned, including an explicit null.
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// True if the field was never assigned. Predicate for the parent's
    /// `skip_serializing_if`.
    pub fn is_unset(&self) -> bool {
        !self.set
    }

    /// Return the field to the unset state.
    pub fn unset(&mut self) {
        self.value = None;
        self.set = false;
    }

    /// Consume the wrapper, yielding the inner value if one was set.
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

/// The default is the unset state: the key does not appear on the wire.
impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self { value: None, set: false }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Unset wrappers only reach here when the parent did not skip the
        // key; they serialize as null, same as an explicit null.
        self.value.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Running at all means the key was present, so the result is set.
        Ok(Self { value: Option::<T>::deserialize(deserializer)?, set: true })
    }
}
