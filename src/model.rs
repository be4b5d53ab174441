//! Data model for the consolidated catalog — format-agnostic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identity declared by one descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub group: String,
    pub name: String,
    pub version: String,
}

/// Project key → descriptor. Serializes as a bare mapping so templates can
/// index it directly (`site.data.properties.<key>.version`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, Descriptor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any previous record under the same key.
    /// Returns the replaced record; fields are never merged.
    pub fn insert(&mut self, key: impl Into<String>, descriptor: Descriptor) -> Option<Descriptor> {
        self.entries.insert(key.into(), descriptor)
    }

    pub fn get(&self, key: &str) -> Option<&Descriptor> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
