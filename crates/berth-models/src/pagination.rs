//! # Paginated Volume Listing
//!
//! The page envelope returned by `GET /volumes`. Every key is required;
//! strictness recurses into the items, so one malformed volume rejects
//! the whole page.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use berth_core::{strict, DecodeError, ToMap};

use crate::volume::Volume;

/// One page of a volume listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaginatedVolumes {
    items: Vec<Volume>,
    total: u64,
    page: u32,
    total_pages: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PaginatedVolumesRepr {
    items: Vec<Volume>,
    total: u64,
    page: u32,
    total_pages: u32,
}

impl PaginatedVolumes {
    const REQUIRED: &'static [&'static str] = &["items", "total", "page", "totalPages"];

    pub fn new(items: Vec<Volume>, total: u64, page: u32, total_pages: u32) -> Self {
        Self { items, total, page, total_pages }
    }

    pub fn items(&self) -> &[Volume] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<Volume>) {
        self.items = items;
    }

    /// Matching volumes across all pages.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    /// One-based index of this page.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
    }

    /// Strict decode from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MissingField`] for an absent required key;
    /// [`DecodeError::Json`] for undeclared keys and type mismatches,
    /// including inside any item.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let repr: PaginatedVolumesRepr = strict::from_value(value, Self::REQUIRED)?;
        Ok(Self {
            items: repr.items,
            total: repr.total,
            page: repr.page,
            total_pages: repr.total_pages,
        })
    }

    /// Strict decode from a JSON string. See [`PaginatedVolumes::from_value`].
    pub fn from_json(data: &str) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_str(data)?)
    }
}

impl ToMap for PaginatedVolumes {
    fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut map = Map::new();
        map.insert("items".into(), serde_json::to_value(&self.items)?);
        map.insert("total".into(), Value::from(self.total));
        map.insert("page".into(), Value::from(self.page));
        map.insert("totalPages".into(), Value::from(self.total_pages));
        Ok(map)
    }
}

impl Serialize for PaginatedVolumes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().map_err(serde::ser::Error::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PaginatedVolumes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}
