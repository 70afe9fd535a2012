use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use swatch_color::{Rgb, parse_hex};
use uuid::Uuid;

use crate::error::ValidationError;

/// Opaque record identifier, unique within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One saved color. Records are never edited in place.
///
/// Records are only built by [`Collection::add`] and [`Collection::load`],
/// which keep ids non-empty and unique and names trimmed and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorRecord {
    id: RecordId,
    name: String,
    value: Rgb,
}

impl ColorRecord {
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Rgb {
        self.value
    }
}

/// How a collection blob was interpreted on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No blob was stored yet.
    Missing,
    /// The blob parsed; `dropped` records were unusable and skipped.
    Loaded { dropped: usize },
    /// The blob was not a JSON array; nothing could be recovered.
    Invalid(String),
}

/// Result of loading a collection blob.
#[derive(Debug, Clone)]
pub struct CollectionLoad {
    collection: Collection,
    status: LoadStatus,
}

impl CollectionLoad {
    pub fn new(collection: Collection, status: LoadStatus) -> Self {
        Self { collection, status }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn into_parts(self) -> (Collection, LoadStatus) {
        (self.collection, self.status)
    }
}

/// Saved colors in insertion order.
///
/// Mutating operations return a new collection and leave `self` alone, so
/// the caller decides when a change counts as committed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection {
    records: Vec<ColorRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a stored blob.
    ///
    /// Unusable records are dropped individually instead of failing the
    /// whole load.
    pub fn load(blob: Option<&str>) -> CollectionLoad {
        let Some(blob) = blob.filter(|blob| !blob.trim().is_empty()) else {
            return CollectionLoad::new(Self::new(), LoadStatus::Missing);
        };

        let items = match serde_json::from_str::<Value>(blob) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                return CollectionLoad::new(
                    Self::new(),
                    LoadStatus::Invalid(String::from(
                        "expected a JSON array of records",
                    )),
                );
            },
            Err(err) => {
                return CollectionLoad::new(
                    Self::new(),
                    LoadStatus::Invalid(format!("{err}")),
                );
            },
        };

        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(items.len());
        let mut dropped = 0;
        for (index, item) in items.iter().enumerate() {
            match record_from_json(item) {
                Ok(record) if seen.insert(record.id.clone()) => {
                    records.push(record);
                },
                Ok(record) => {
                    log::warn!(
                        "dropping saved color {index}: duplicate id {}",
                        record.id
                    );
                    dropped += 1;
                },
                Err(reason) => {
                    log::warn!("dropping saved color {index}: {reason}");
                    dropped += 1;
                },
            }
        }

        CollectionLoad::new(Self { records }, LoadStatus::Loaded { dropped })
    }

    /// Append a new record named `name` (trimmed).
    ///
    /// Returns the extended collection and the new record.
    pub fn add(
        &self,
        name: &str,
        value: Rgb,
    ) -> Result<(Self, ColorRecord), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let mut id = RecordId::generate();
        while self.contains(&id) {
            id = RecordId::generate();
        }

        let record = ColorRecord {
            id,
            name: name.to_string(),
            value,
        };
        let mut records = self.records.clone();
        records.push(record.clone());
        Ok((Self { records }, record))
    }

    /// Collection without the record `id`; unknown ids change nothing.
    pub fn remove(&self, id: &RecordId) -> Self {
        let records = self
            .records
            .iter()
            .filter(|record| &record.id != id)
            .cloned()
            .collect();
        Self { records }
    }

    /// Render the whole collection as one reloadable JSON array.
    pub fn serialize(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }

    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&ColorRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn record_from_json(value: &Value) -> Result<ColorRecord, String> {
    let id = read_string_field(value, "id")
        .filter(|id| !id.is_empty())
        .ok_or_else(|| String::from("missing id"))?;
    let name = read_string_field(value, "name")
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| String::from("missing name"))?;
    let raw_value = read_string_field(value, "value")
        .ok_or_else(|| String::from("missing value"))?;
    let color = parse_hex(raw_value.trim())
        .map_err(|err| format!("value {raw_value:?}: {err}"))?;

    Ok(ColorRecord {
        id: RecordId::new(id),
        name,
        value: color,
    })
}

fn read_string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}
