//! Catalog type definitions and lookup helpers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::preview::PreviewNode;

/// Errors raised while loading a catalog configuration.
#[derive(Debug, Error)]
pub enum CatalogConfigError {
    /// The JSON payload did not deserialize into a catalog.
    #[error("invalid catalog config: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The catalog deserialized but holds no entries.
    #[error("catalog config has no entries")]
    Empty,
    /// Two entries share the same key.
    #[error("duplicate catalog key: {0}")]
    DuplicateKey(String),
}

/// A single preview + snippet pair, keyed by a stable slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Stable, unique identifier (doubles as the shareable query value).
    pub key: String,
    /// Display title.
    pub title: String,
    /// Optional one-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Preview descriptor rendered live next to the snippet.
    pub preview: PreviewNode,
    /// Raw, possibly JSX-flavored markup fed to the normalizer.
    pub raw_markup: String,
}

/// A display group of entries; insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogGroup {
    /// Stable group key.
    pub key: String,
    /// Group label shown as the sidebar header.
    pub label: String,
    /// Entries in display order.
    pub entries: Vec<CatalogEntry>,
}

/// One selectable sidebar item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    /// Display label.
    pub label: String,
    /// Selection key forwarded to the controller.
    pub key: String,
}

/// One sidebar group header with its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarGroup {
    /// Stable group key.
    pub key: String,
    /// Group header label.
    pub label: String,
    /// Items in display order.
    pub items: Vec<SidebarItem>,
}

/// The whole immutable catalog, built once at startup and injected
/// read-only into the viewer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Groups in display order.
    pub groups: Vec<CatalogGroup>,
}

impl CatalogConfig {
    /// Deserialize and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogConfigError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, CatalogConfigError> {
        if self.groups.iter().all(|g| g.entries.is_empty()) {
            return Err(CatalogConfigError::Empty);
        }
        let mut seen = HashSet::new();
        for group in &self.groups {
            for entry in &group.entries {
                if !seen.insert(entry.key.as_str()) {
                    return Err(CatalogConfigError::DuplicateKey(entry.key.clone()));
                }
            }
        }
        Ok(self)
    }

    /// Look up an entry by key.
    pub fn entry(&self, key: &str) -> Option<&CatalogEntry> {
        self.groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .find(|e| e.key == key)
    }

    /// All keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .map(|e| e.key.as_str())
    }

    /// The default selection: the first key in display order.
    pub fn first_key(&self) -> Option<&str> {
        self.keys().next()
    }

    /// Total number of entries across groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// Whether the catalog holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Label/key pairs for the navigation shell, preserving grouping.
    pub fn sidebar_groups(&self) -> Vec<SidebarGroup> {
        self.groups
            .iter()
            .map(|g| SidebarGroup {
                key: g.key.clone(),
                label: g.label.clone(),
                items: g
                    .entries
                    .iter()
                    .map(|e| SidebarItem {
                        label: e.title.clone(),
                        key: e.key.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}
