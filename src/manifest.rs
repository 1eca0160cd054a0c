//! `icons` block of a browser extension manifest.json
//!
//! Chrome and Firefox both expect the extension icons as an object mapping the
//! pixel size (as a string key) to a path relative to the extension root.
//! Keys are written in the order the icons were added, so the snippet printed
//! after generation reads 16, 48, 128 rather than in lexicographic order.

use anyhow::{Context, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Root of the manifest snippet: `{ "icons": { ... } }`
#[derive(serde::Serialize, Debug, Clone, Default)]
pub struct ManifestIcons {
    /// Size to path entries, in insertion order
    pub icons: IconEntries,
}

/// Ordered `size -> path` entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconEntries(Vec<(u32, String)>);

impl ManifestIcons {
    /// Creates an empty snippet
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an icon entry
    ///
    /// # Arguments
    /// * `size` - The icon edge length in pixels
    /// * `path` - The path of the PNG relative to the extension root
    pub fn add_icon(&mut self, size: u32, path: String) {
        self.icons.0.push((size, path));
    }

    /// Number of icon entries
    pub fn len(&self) -> usize {
        self.icons.0.len()
    }

    /// Whether no icon has been added yet
    pub fn is_empty(&self) -> bool {
        self.icons.0.is_empty()
    }

    /// Pretty-printed JSON ready to paste into manifest.json
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest icons")
    }
}

impl Serialize for IconEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (size, path) in &self.0 {
            map.serialize_entry(&size.to_string(), path)?;
        }
        map.end()
    }
}
