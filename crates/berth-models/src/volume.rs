//! # Volume
//!
//! A persistent storage volume attachable to Berth workspaces, as carried
//! by the volume listing and lifecycle endpoints.
//!
//! Two nullable flavors meet here. `errorReason` is required-but-nullable:
//! the key is always on the wire, `null` while the volume is healthy.
//! `lastUsedAt` is optional-and-nullable, so it keeps the full three-state
//! encoding through [`Nullable`]: never attached (key absent), explicitly
//! cleared (`null`), or a concrete timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

use berth_core::{strict, DecodeError, Nullable, ToMap};

/// Lifecycle state of a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeState {
    Creating,
    Ready,
    PendingCreate,
    PendingDelete,
    Deleting,
    Deleted,
    Error,
    /// Forward-compatible catch-all for states the API introduces after
    /// this client version is deployed.
    #[serde(other)]
    Unknown,
}

/// A storage volume belonging to an organization.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    id: Uuid,
    name: String,
    organization_id: Uuid,
    state: VolumeState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    error_reason: Option<String>,
    last_used_at: Nullable<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct VolumeRepr {
    id: Uuid,
    name: String,
    organization_id: Uuid,
    state: VolumeState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    error_reason: Option<String>,
    #[serde(default)]
    last_used_at: Nullable<DateTime<Utc>>,
}

impl Volume {
    const REQUIRED: &'static [&'static str] = &[
        "id",
        "name",
        "organizationId",
        "state",
        "createdAt",
        "updatedAt",
        "errorReason",
    ];

    /// New volume from the required fields; `lastUsedAt` starts unset.
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        organization_id: Uuid,
        state: VolumeState,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        error_reason: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            organization_id,
            state,
            created_at,
            updated_at,
            error_reason,
            last_used_at: Nullable::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    pub fn set_organization_id(&mut self, organization_id: Uuid) {
        self.organization_id = organization_id;
    }

    pub fn state(&self) -> VolumeState {
        self.state
    }

    pub fn set_state(&mut self, state: VolumeState) {
        self.state = state;
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    /// Why the volume is in [`VolumeState::Error`], `None` otherwise.
    pub fn error_reason(&self) -> Option<&str> {
        self.error_reason.as_deref()
    }

    pub fn set_error_reason(&mut self, error_reason: Option<String>) {
        self.error_reason = error_reason;
    }

    /// When the volume was last attached, with full three-state presence.
    pub fn last_used_at(&self) -> &Nullable<DateTime<Utc>> {
        &self.last_used_at
    }

    /// Assign `lastUsedAt` (pass `None` for an explicit null).
    pub fn set_last_used_at(&mut self, last_used_at: Option<DateTime<Utc>>) {
        self.last_used_at.set(last_used_at);
    }

    /// Drop `lastUsedAt` from the wire form entirely.
    pub fn unset_last_used_at(&mut self) {
        self.last_used_at.unset();
    }

    /// Strict decode from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MissingField`] for an absent required key;
    /// [`DecodeError::Json`] for undeclared keys and type mismatches.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let repr: VolumeRepr = strict::from_value(value, Self::REQUIRED)?;
        Ok(Self {
            id: repr.id,
            name: repr.name,
            organization_id: repr.organization_id,
            state: repr.state,
            created_at: repr.created_at,
            updated_at: repr.updated_at,
            error_reason: repr.error_reason,
            last_used_at: repr.last_used_at,
        })
    }

    /// Strict decode from a JSON string. See [`Volume::from_value`].
    pub fn from_json(data: &str) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_str(data)?)
    }
}

/// Zero-valued instance for tooling that populates field-by-field; carries
/// no validity until the (de)serialization boundary checks it.
impl Default for Volume {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            name: String::new(),
            organization_id: Uuid::nil(),
            state: VolumeState::Unknown,
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            error_reason: None,
            last_used_at: Nullable::default(),
        }
    }
}

impl ToMap for Volume {
    fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut map = Map::new();
        map.insert("id".into(), serde_json::to_value(self.id)?);
        map.insert("name".into(), Value::from(self.name.clone()));
        map.insert("organizationId".into(), serde_json::to_value(self.organization_id)?);
        map.insert("state".into(), serde_json::to_value(self.state)?);
        map.insert("createdAt".into(), serde_json::to_value(self.created_at)?);
        map.insert("updatedAt".into(), serde_json::to_value(self.updated_at)?);
        // Required-but-nullable: the key is always present.
        map.insert("errorReason".into(), serde_json::to_value(&self.error_reason)?);
        if self.last_used_at.is_set() {
            map.insert("lastUsedAt".into(), serde_json::to_value(self.last_used_at.get())?);
        }
        Ok(map)
    }
}

impl Serialize for Volume {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().map_err(serde::ser::Error::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Volume {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}
