//! State of a single compilation pass.

use indexmap::IndexMap;
use std::sync::Arc;

use crate::asset::{Asset, AssetRegistry};
use crate::chunk::Chunk;

/// Assets and chunks produced by one pass, plus the public path that links
/// in generated HTML are prefixed with.
///
/// A fresh `Compilation` is built for every pass; nothing carries over.
#[derive(Debug, Clone, Default)]
pub struct Compilation {
    assets: AssetRegistry,
    chunks: IndexMap<String, Chunk>,
    public_path: String,
}

impl Compilation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
        self.public_path = public_path.into();
        self
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    /// Add an asset to the registry.
    pub fn emit_asset(&self, name: impl Into<String>, content: impl Into<Arc<str>>) -> Asset {
        self.assets.insert(name, content)
    }

    /// Add a chunk. A chunk with the same name is replaced in place.
    pub fn add_chunk(&mut self, chunk: Chunk) {
        self.chunks.insert(chunk.name.clone(), chunk);
    }

    pub fn chunk(&self, name: &str) -> Option<&Chunk> {
        self.chunks.get(name)
    }

    /// Chunks in the order they were added.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn chunk_names(&self) -> impl Iterator<Item = &str> {
        self.chunks.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_keep_insertion_order() {
        let mut compilation = Compilation::new();
        compilation.add_chunk(Chunk::new("page2"));
        compilation.add_chunk(Chunk::new("page1"));

        assert_eq!(compilation.chunk_names().collect::<Vec<_>>(), vec!["page2", "page1"]);
        assert!(compilation.chunk("page1").is_some());
        assert!(compilation.chunk("page3").is_none());
    }

    #[test]
    fn test_emit_asset() {
        let compilation = Compilation::new().with_public_path("/static/");
        compilation.emit_asset("styles.css", "body {}");

        assert_eq!(compilation.public_path(), "/static/");
        assert!(compilation.assets().contains("styles.css"));
    }
}
