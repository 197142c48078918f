//! Asset registry for the text blobs produced during one compilation pass.
//!
//! Assets are keyed by output filename and kept in insertion order so that
//! emitted output is deterministic.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Broad category of an asset, derived from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Script,
    Style,
    Html,
    Other,
}

impl AssetKind {
    /// Determine the kind from a filename's extension.
    pub fn from_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "js" | "mjs" | "cjs" => AssetKind::Script,
            "css" => AssetKind::Style,
            "html" | "htm" => AssetKind::Html,
            _ => AssetKind::Other,
        }
    }
}

/// A named, immutable piece of generated content.
///
/// Cloning is cheap: the content is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    name: String,
    content: Arc<str>,
    kind: AssetKind,
}

impl Asset {
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        let kind = AssetKind::from_name(&name);
        Self {
            name,
            content: content.into(),
            kind,
        }
    }

    /// Output filename, relative to the output directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }
}

/// Thread-safe asset registry.
///
/// Owned by a [`Compilation`](crate::Compilation) for the duration of one
/// pass. Handles are cheap to clone and share the same storage.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    inner: Arc<RwLock<IndexMap<String, Asset>>>,
}

impl AssetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset, replacing any previous asset with the same name.
    ///
    /// Returns the stored asset.
    pub fn insert(&self, name: impl Into<String>, content: impl Into<Arc<str>>) -> Asset {
        let asset = Asset::new(name, content);
        let mut inner = self.inner.write();
        inner.insert(asset.name.clone(), asset.clone());
        asset
    }

    /// Get an asset by name.
    pub fn get(&self, name: &str) -> Option<Asset> {
        self.inner.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains_key(name)
    }

    /// Remove an asset, keeping the order of the remaining ones.
    pub fn remove(&self, name: &str) -> Option<Asset> {
        self.inner.write().shift_remove(name)
    }

    /// Names of all registered assets in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.inner.read().keys().cloned().collect()
    }

    /// Get all registered assets in insertion order.
    pub fn all_assets(&self) -> Vec<Asset> {
        self.inner.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all assets from the registry.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}
