//! Caching module for Suggest-RS
//!
//! Holds the per-context query templates. Eviction is delegated entirely to
//! the cache store; the service never invalidates templates itself.

use moka::future::Cache;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Cache for per-context query templates
pub struct TemplateCache {
    cache: Cache<String, Arc<Value>>,
}

impl TemplateCache {
    /// Create a new template cache
    ///
    /// A TTL of zero keeps templates until they are evicted by capacity.
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let mut builder = Cache::builder().max_capacity(max_capacity);
        if ttl_seconds > 0 {
            builder = builder.time_to_live(Duration::from_secs(ttl_seconds));
        }

        Self {
            cache: builder.build(),
        }
    }

    /// Get a cached template
    pub async fn get(&self, key: &str) -> Option<Arc<Value>> {
        self.cache.get(key).await
    }

    /// Store a template in the cache
    pub async fn set(&self, key: String, template: Arc<Value>) {
        self.cache.insert(key, template).await;
    }

    /// Read-through lookup: reuse the cached template or build and store it.
    ///
    /// The check and the insert are not exclusive across tasks; concurrent
    /// first-time lookups for the same key may build the template twice.
    /// Builds are pure, so the duplicates are identical and one wins.
    pub async fn get_or_compute<F, Fut, E>(&self, key: &str, build: F) -> Result<Arc<Value>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        if let Some(template) = self.cache.get(key).await {
            return Ok(template);
        }

        let template = Arc::new(build().await?);
        self.cache.insert(key.to_string(), template.clone()).await;

        Ok(template)
    }

    /// Clear the entire cache
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// Get cache size
    pub fn size(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new(0, 1000) // no expiry, 1k contexts
    }
}
