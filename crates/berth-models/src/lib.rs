//! # berth-models — Typed DTO Models for the Berth Platform API
//!
//! Data-transfer objects mirroring the Berth REST API's JSON schemas, one
//! module per resource. Every model speaks the same codec contract,
//! implemented once in [`berth_core`]:
//!
//! - serialization emits required keys unconditionally and optional keys
//!   only when set, under the schema's external (camelCase) names;
//! - deserialization is strict: a missing required key fails with an error
//!   naming it, and any key outside the schema rejects the whole document;
//! - optional fields keep tri-state presence (unset / set-to-empty /
//!   set-to-value), and schema-nullable fields additionally distinguish an
//!   explicit `null` from an absent key via [`berth_core::Nullable`].
//!
//! Models hold their fields privately; construction goes through `new`
//! (required fields at the call site, optionals unset) or `Default` (all
//! zero, for tooling that populates field-by-field), and mutation goes
//! through setters. The HTTP layer that moves these documents lives
//! elsewhere; everything here is a plain in-memory value.

pub mod completion_item;
pub mod pagination;
pub mod volume;

pub use completion_item::{CompletionItem, NullableCompletionItem};
pub use pagination::PaginatedVolumes;
pub use volume::{Volume, VolumeState};
