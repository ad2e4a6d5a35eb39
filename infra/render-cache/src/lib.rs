//! # Render Cache
//!
//! A server-side cache of previously rendered page output, keyed by request
//! path. Entries are served until something explicitly revalidates the path,
//! forcing the next request to recompute the page.
//!
//! The cache is shared by every request handler; [`RenderCache`] is a cheap
//! cloneable handle over a bounded [`moka`] cache.
//!
//! ## Example
//!
//! ```rust
//! use campus_render_cache::RenderCache;
//!
//! let cache = RenderCache::new(64);
//! cache.put("/contact", "<html>…</html>");
//! assert!(cache.get("/contact").is_some());
//!
//! cache.revalidate("/contact").unwrap();
//! assert!(cache.get("/contact").is_none());
//! ```

use moka::sync::Cache;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Hard upper bound on cached pages; the site has a handful of routes, so
/// anything near this limit indicates a keying bug rather than real load.
const MAX_CAPACITY: u64 = 1024;

#[derive(Debug, Error)]
pub enum RenderCacheError {
    /// Cache keys are absolute request paths; anything else would create an
    /// entry no request could ever hit.
    #[error("not a cacheable path: {0:?}")]
    InvalidPath(String),
}

/// Cloneable handle to the shared path→HTML cache.
#[derive(Debug, Clone)]
pub struct RenderCache {
    inner: Cache<String, Arc<str>>,
}

impl RenderCache {
    /// Builds a cache bounded at `capacity` pages (clamped to a hard maximum).
    #[must_use]
    pub fn new(capacity: u64) -> Self {
        Self { inner: Cache::builder().max_capacity(capacity.min(MAX_CAPACITY)).build() }
    }

    /// Returns the cached output for `path`, if present.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<Arc<str>> {
        self.inner.get(path)
    }

    /// Stores rendered output for `path`, replacing any previous entry.
    pub fn put(&self, path: impl Into<String>, html: impl Into<Arc<str>>) {
        let path = path.into();
        debug!(%path, "caching rendered page");
        self.inner.insert(path, html.into());
    }

    /// Invalidates the entry for `path` so the next request re-renders it.
    ///
    /// # Errors
    /// Returns [`RenderCacheError::InvalidPath`] when `path` is not an
    /// absolute request path. Revalidating a path with no cached entry is
    /// not an error.
    pub fn revalidate(&self, path: &str) -> Result<(), RenderCacheError> {
        if !path.starts_with('/') {
            return Err(RenderCacheError::InvalidPath(path.to_owned()));
        }
        debug!(%path, "revalidating cached page");
        self.inner.invalidate(path);
        Ok(())
    }

    /// Number of currently cached pages (approximate until pending work is
    /// flushed; [`run_pending_tasks`](moka::sync::Cache::run_pending_tasks)
    /// is called first so tests see a settled count).
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(MAX_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_round_trips() {
        let cache = RenderCache::new(8);
        cache.put("/", "<html>home</html>");
        assert_eq!(cache.get("/").as_deref(), Some("<html>home</html>"));
    }

    #[test]
    fn revalidate_removes_only_the_given_path() {
        let cache = RenderCache::new(8);
        cache.put("/", "home");
        cache.put("/contact", "contact");

        cache.revalidate("/contact").expect("valid path");

        assert!(cache.get("/contact").is_none());
        assert!(cache.get("/").is_some());
    }

    #[test]
    fn revalidate_missing_entry_is_ok() {
        let cache = RenderCache::new(8);
        assert!(cache.revalidate("/never-rendered").is_ok());
    }

    #[test]
    fn relative_paths_are_rejected() {
        let cache = RenderCache::new(8);
        let err = cache.revalidate("contact").unwrap_err();
        assert!(matches!(err, RenderCacheError::InvalidPath(_)));
    }

    #[test]
    fn entry_count_tracks_inserts() {
        let cache = RenderCache::new(8);
        cache.put("/", "a");
        cache.put("/programs", "b");
        assert_eq!(cache.entry_count(), 2);
    }
}
