//! # Wire-Shape Tests: Models ↔ Berth API JSON Schemas
//!
//! These tests pin the exact serialized form of each model against
//! hand-written documents shaped like the API's responses. If a field is
//! renamed, loses its presence handling, or starts leaking unset keys,
//! these catch the drift before a release does.
//!
//! ## Test Strategy
//!
//! 1. **Shape assertions**: serialize a model, compare against the literal
//!    document key-for-key.
//! 2. **Strictness assertions**: feed documents that miss required keys or
//!    carry undeclared ones, verify rejection with the expected error.
//! 3. **Presence assertions**: verify the unset / null / value states of
//!    nullable fields survive a full round trip.

use berth_core::{Nullable, ToMap};
use berth_models::{CompletionItem, NullableCompletionItem, PaginatedVolumes, Volume, VolumeState};
use serde_json::{json, Value};

fn volume_doc() -> Value {
    json!({
        "id": "7b9f8a10-4c9e-4f5a-9f37-2f8f6f2d1c55",
        "name": "build-cache",
        "organizationId": "c1a2b3d4-0000-4000-8000-000000000001",
        "state": "ready",
        "createdAt": "2026-03-01T08:30:00Z",
        "updatedAt": "2026-03-05T16:45:00Z",
        "errorReason": null
    })
}

// ===========================================================================
// CompletionItem
// ===========================================================================

#[test]
fn completion_item_serializes_schema_shape() {
    let mut item = CompletionItem::new("to_string");
    item.set_kind(2.0);
    item.set_detail("fn to_string(&self) -> String");
    item.set_sort_text("0001");
    item.set_filter_text("to_string");
    item.set_insert_text("to_string()");
    item.set_documentation(
        json!({"summary": "Converts the value to a String"})
            .as_object()
            .cloned()
            .unwrap(),
    );

    let expected = json!({
        "label": "to_string",
        "kind": 2.0,
        "detail": "fn to_string(&self) -> String",
        "documentation": {"summary": "Converts the value to a String"},
        "sortText": "0001",
        "filterText": "to_string",
        "insertText": "to_string()"
    });
    assert_eq!(serde_json::to_value(&item).unwrap(), expected);
}

#[test]
fn completion_item_minimal_shape_has_no_extra_keys() {
    let item = CompletionItem::new("x");
    assert_eq!(serde_json::to_string(&item).unwrap(), r#"{"label":"x"}"#);
}

#[test]
fn completion_item_decodes_response_document() {
    let item: CompletionItem = serde_json::from_value(json!({
        "label": "spawn",
        "kind": 3,
        "insertText": "spawn($0)"
    }))
    .unwrap();
    assert_eq!(item.label(), "spawn");
    assert_eq!(item.kind(), Some(3.0));
    assert_eq!(item.insert_text(), Some("spawn($0)"));
    assert!(!item.has_detail());
    assert!(!item.has_documentation());
}

#[test]
fn completion_item_rejects_undeclared_key() {
    let err = CompletionItem::from_json(r#"{"label":"x","score":0.9}"#).unwrap_err();
    assert!(err.to_string().contains("score"), "got: {err}");
}

#[test]
fn completion_item_missing_label_is_named() {
    let err = CompletionItem::from_json(r#"{"insertText":"x()"}"#).unwrap_err();
    assert_eq!(err.to_string(), "no value given for required property `label`");
}

#[test]
fn completion_item_to_map_is_the_serialized_form() {
    let mut item = CompletionItem::new("x");
    item.set_kind(1.0);
    let map = item.to_map().unwrap();
    assert_eq!(Value::Object(map), serde_json::to_value(&item).unwrap());
}

// ===========================================================================
// Nullable embedding
// ===========================================================================

#[test]
fn nullable_completion_item_three_states() {
    let unset: NullableCompletionItem = Nullable::default();
    assert!(unset.is_unset());

    let cleared = NullableCompletionItem::null();
    assert_eq!(serde_json::to_value(&cleared).unwrap(), Value::Null);

    let present = NullableCompletionItem::new(CompletionItem::new("x"));
    assert_eq!(serde_json::to_value(&present).unwrap(), json!({"label": "x"}));
}

#[test]
fn nullable_completion_item_decode_marks_set() {
    let cleared: NullableCompletionItem = serde_json::from_value(Value::Null).unwrap();
    assert!(cleared.is_set());
    assert!(cleared.get().is_none());

    let present: NullableCompletionItem =
        serde_json::from_value(json!({"label": "x"})).unwrap();
    assert_eq!(present.get().map(CompletionItem::label), Some("x"));
}

#[test]
fn nullable_inner_value_still_decodes_strictly() {
    let res: Result<NullableCompletionItem, _> =
        serde_json::from_value(json!({"label": "x", "bogus": 1}));
    assert!(res.is_err());
}

// ===========================================================================
// Volume
// ===========================================================================

#[test]
fn volume_round_trips_response_document() {
    let volume = Volume::from_value(volume_doc()).unwrap();
    assert_eq!(volume.name(), "build-cache");
    assert_eq!(volume.state(), VolumeState::Ready);
    assert_eq!(volume.error_reason(), None);
    assert!(volume.last_used_at().is_unset());

    // Key set is reproduced exactly: errorReason present (null), lastUsedAt absent.
    let reserialized = serde_json::to_value(&volume).unwrap();
    let map = reserialized.as_object().unwrap();
    assert!(map["errorReason"].is_null());
    assert!(!map.contains_key("lastUsedAt"));
    assert_eq!(map.len(), 7);
}

#[test]
fn volume_explicit_null_last_used_at_round_trips_as_null() {
    let mut doc = volume_doc();
    doc["lastUsedAt"] = Value::Null;
    let volume = Volume::from_value(doc).unwrap();
    assert!(volume.last_used_at().is_set());

    let reserialized = serde_json::to_value(&volume).unwrap();
    assert!(reserialized.as_object().unwrap()["lastUsedAt"].is_null());
}

#[test]
fn volume_error_state_document() {
    let mut doc = volume_doc();
    doc["state"] = Value::from("error");
    doc["errorReason"] = Value::from("backing store unreachable");
    let volume = Volume::from_value(doc).unwrap();
    assert_eq!(volume.state(), VolumeState::Error);
    assert_eq!(volume.error_reason(), Some("backing store unreachable"));
}

#[test]
fn volume_missing_required_keys_are_named() {
    for key in ["id", "name", "organizationId", "state", "createdAt", "updatedAt", "errorReason"] {
        let mut doc = volume_doc();
        doc.as_object_mut().unwrap().remove(key);
        let err = Volume::from_value(doc).unwrap_err();
        assert!(err.is_missing(key), "removing {key} got: {err}");
    }
}

#[test]
fn volume_future_state_is_forward_compatible() {
    let mut doc = volume_doc();
    doc["state"] = Value::from("archived");
    assert_eq!(Volume::from_value(doc).unwrap().state(), VolumeState::Unknown);
}

// ===========================================================================
// PaginatedVolumes
// ===========================================================================

#[test]
fn paginated_volumes_decodes_listing_document() {
    let doc = json!({
        "items": [volume_doc()],
        "total": 23,
        "page": 1,
        "totalPages": 3
    });
    let page = PaginatedVolumes::from_value(doc).unwrap();
    assert_eq!(page.items().len(), 1);
    assert_eq!(page.total(), 23);
    assert_eq!(page.page(), 1);
    assert_eq!(page.total_pages(), 3);
}

#[test]
fn paginated_volumes_strictness_recurses_into_items() {
    let mut bad_item = volume_doc();
    bad_item["snapshotId"] = Value::from("abc");
    let doc = json!({
        "items": [bad_item],
        "total": 1,
        "page": 1,
        "totalPages": 1
    });
    assert!(PaginatedVolumes::from_value(doc).is_err());
}

#[test]
fn paginated_volumes_missing_item_required_key_rejects_page() {
    let mut bad_item = volume_doc();
    bad_item.as_object_mut().unwrap().remove("errorReason");
    let doc = json!({
        "items": [bad_item],
        "total": 1,
        "page": 1,
        "totalPages": 1
    });
    let err = PaginatedVolumes::from_value(doc).unwrap_err();
    assert!(err.to_string().contains("errorReason"), "got: {err}");
}
