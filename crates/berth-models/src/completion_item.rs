//! # Completion Item
//!
//! A single completion suggestion produced by the language tooling running
//! inside a Berth workspace, as carried by the
//! `GET /workspaces/{id}/toolbox/lsp/completions` response.
//!
//! `label` is the only required property. The remaining properties are
//! optional with full presence tracking: an item whose `detail` was set to
//! the empty string serializes `"detail": ""`, while an item whose `detail`
//! was never set omits the key entirely. `documentation` is schema-less in
//! the API and stays a free-form JSON object here.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use berth_core::{strict, DecodeError, Nullable, ToMap};

/// `CompletionItem` embedded as a nullable field of another model.
pub type NullableCompletionItem = Nullable<CompletionItem>;

/// A completion suggestion for a position in a workspace document.
///
/// Fields are private; use [`CompletionItem::new`] plus the setters, or
/// `Default` when a zero-valued instance is needed before population.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompletionItem {
    label: String,
    kind: Option<f64>,
    detail: Option<String>,
    documentation: Option<Map<String, Value>>,
    sort_text: Option<String>,
    filter_text: Option<String>,
    insert_text: Option<String>,
}

/// Internal wire representation. Decoding goes through this struct so that
/// `deny_unknown_fields` enforces the schema's closed key set.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CompletionItemRepr {
    label: String,
    kind: Option<f64>,
    detail: Option<String>,
    documentation: Option<Map<String, Value>>,
    sort_text: Option<String>,
    filter_text: Option<String>,
    insert_text: Option<String>,
}

impl CompletionItem {
    const REQUIRED: &'static [&'static str] = &["label"];

    /// New item with the required `label` and every optional field unset.
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// The numeric kind code, if set. The API leaves the code range open,
    /// so no closed enum is imposed here.
    pub fn kind(&self) -> Option<f64> {
        self.kind
    }

    pub fn has_kind(&self) -> bool {
        self.kind.is_some()
    }

    pub fn set_kind(&mut self, kind: f64) {
        self.kind = Some(kind);
    }

    /// The short description, if set.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.detail = Some(detail.into());
    }

    /// Free-form documentation metadata, if set. Schema-less in the API.
    pub fn documentation(&self) -> Option<&Map<String, Value>> {
        self.documentation.as_ref()
    }

    pub fn has_documentation(&self) -> bool {
        self.documentation.is_some()
    }

    pub fn set_documentation(&mut self, documentation: Map<String, Value>) {
        self.documentation = Some(documentation);
    }

    /// The ordering key, if set.
    pub fn sort_text(&self) -> Option<&str> {
        self.sort_text.as_deref()
    }

    pub fn has_sort_text(&self) -> bool {
        self.sort_text.is_some()
    }

    pub fn set_sort_text(&mut self, sort_text: impl Into<String>) {
        self.sort_text = Some(sort_text.into());
    }

    /// The matching key, if set.
    pub fn filter_text(&self) -> Option<&str> {
        self.filter_text.as_deref()
    }

    pub fn has_filter_text(&self) -> bool {
        self.filter_text.is_some()
    }

    pub fn set_filter_text(&mut self, filter_text: impl Into<String>) {
        self.filter_text = Some(filter_text.into());
    }

    /// The literal to insert, if set.
    pub fn insert_text(&self) -> Option<&str> {
        self.insert_text.as_deref()
    }

    pub fn has_insert_text(&self) -> bool {
        self.insert_text.is_some()
    }

    pub fn set_insert_text(&mut self, insert_text: impl Into<String>) {
        self.insert_text = Some(insert_text.into());
    }

    /// Strict decode from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MissingField`] when `label` is absent;
    /// [`DecodeError::Json`] for undeclared keys and type mismatches.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let repr: CompletionItemRepr = strict::from_value(value, Self::REQUIRED)?;
        Ok(Self {
            label: repr.label,
            kind: repr.kind,
            detail: repr.detail,
            documentation: repr.documentation,
            sort_text: repr.sort_text,
            filter_text: repr.filter_text,
            insert_text: repr.insert_text,
        })
    }

    /// Strict decode from a JSON string. See [`CompletionItem::from_value`].
    pub fn from_json(data: &str) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_str(data)?)
    }
}

impl ToMap for CompletionItem {
    fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut map = Map::new();
        map.insert("label".into(), Value::from(self.label.clone()));
        if let Some(kind) = self.kind {
            map.insert("kind".into(), Value::from(kind));
        }
        if let Some(detail) = &self.detail {
            map.insert("detail".into(), Value::from(detail.clone()));
        }
        if let Some(documentation) = &self.documentation {
            map.insert("documentation".into(), Value::Object(documentation.clone()));
        }
        if let Some(sort_text) = &self.sort_text {
            map.insert("sortText".into(), Value::from(sort_text.clone()));
        }
        if let Some(filter_text) = &self.filter_text {
            map.insert("filterText".into(), Value::from(filter_text.clone()));
        }
        if let Some(insert_text) = &self.insert_text {
            map.insert("insertText".into(), Value::from(insert_text.clone()));
        }
        Ok(map)
    }
}

impl Serialize for CompletionItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().map_err(serde::ser::Error::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CompletionItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}
