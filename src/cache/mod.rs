//! Asset Cache Queries
//!
//! Read-only checks of whether the assets a battle needs (engine build, map,
//! game archive) are already available locally. The cache itself belongs to
//! the download layer; this facade only asks.

use std::sync::Arc;

/// Local asset availability, as maintained by the download layer.
pub trait AssetCache: Send + Sync {
    /// Whether `version` of the engine is installed.
    fn has_engine(&self, version: &str) -> bool;

    /// Whether a map with `checksum` is present.
    fn has_map(&self, checksum: i32) -> bool;

    /// Whether the named game archive is present.
    fn has_game(&self, name: &str) -> bool;
}

/// Facade answering capability queries for the battle list.
///
/// A missing cache is a disabled feature, not an error: every query answers
/// `false` until one is attached.
#[derive(Default)]
pub struct CapabilityQuery {
    cache: Option<Arc<dyn AssetCache>>,
}

impl CapabilityQuery {
    /// Facade with no cache attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Facade over `cache`.
    pub fn with_cache(cache: Arc<dyn AssetCache>) -> Self {
        Self { cache: Some(cache) }
    }

    /// Attach (or replace) the asset cache.
    pub fn set_cache(&mut self, cache: Arc<dyn AssetCache>) {
        self.cache = Some(cache);
    }

    /// Whether the engine `version` is available locally.
    pub fn has_engine(&self, version: &str) -> bool {
        self.cache.as_ref().is_some_and(|c| c.has_engine(version))
    }

    /// Whether the map with `checksum` is available locally.
    pub fn has_map(&self, checksum: i32) -> bool {
        self.cache.as_ref().is_some_and(|c| c.has_map(checksum))
    }

    /// Whether the game `name` is available locally.
    ///
    /// Game lookups are not wired up: archive names are not versioned
    /// consistently enough to trust a name match, so this answers `false`
    /// without consulting the cache. Known limitation, not a failure path.
    pub fn has_game(&self, _name: &str) -> bool {
        false
    }
}
