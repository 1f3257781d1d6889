//! # berth-core — Shared Codec Machinery for Berth API Client Models
//!
//! Every generated model in the Berth API client satisfies one contract:
//! serialize with required keys always present and optional keys omitted
//! when unset, and deserialize strictly — rejecting documents that miss a
//! required key or carry a key outside the schema. This crate is the single
//! implementation of that contract; the model crates only declare fields
//! and delegate here.
//!
//! ## Key Design Principles
//!
//! 1. **Two-pass strict decoding.** Pass one inspects the generic JSON
//!    object and reports missing required keys by name. Pass two decodes
//!    into the typed representation with unknown-field rejection. Either
//!    failure rejects the whole document; no partially-populated model
//!    ever escapes.
//!
//! 2. **Presence is `Option`.** An unset optional field is `None`, never a
//!    zero value. `Some("")` and `None` are different states and survive a
//!    round trip as different states.
//!
//! 3. **`Nullable<T>` for schema-nullable fields.** Three states — key
//!    absent, key explicitly `null`, key with a value — encoded as an
//!    is-set flag over an inner `Option`. Consumers distinguish "the
//!    client didn't send this" from "the client cleared it."
//!
//! ## Crate Policy
//!
//! - No dependencies on other `berth-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod nullable;
pub mod strict;

// Re-export primary types for ergonomic imports.
pub use error::DecodeError;
pub use nullable::Nullable;
pub use strict::ToMap;
