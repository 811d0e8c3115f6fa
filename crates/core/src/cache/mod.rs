//! In-memory response cache partitioned by endpoint.
//!
//! Stores raw response bodies keyed by the exact absolute-URL string, with
//! one bounded cache per endpoint partition. Capacity is weighed by payload
//! size, so eviction tracks memory use; entries carry no TTL and live until
//! evicted under capacity pressure.
//!
//! Keys are verbatim URL strings. Query-parameter order is significant, so
//! two semantically equal URLs with reordered parameters occupy two entries.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use moka::future::Cache;

/// Per-endpoint cache of raw response bodies.
///
/// Partitions are fixed at construction time. Lookups against a partition
/// that was never registered are always a miss and stores against one are
/// dropped, which is how requests without an owning endpoint bypass caching.
#[derive(Clone, Debug)]
pub struct ResponseCache {
    partitions: Arc<HashMap<&'static str, Cache<String, Bytes>>>,
}

impl ResponseCache {
    /// Create a cache with one partition per name, each bounded to
    /// `max_bytes` of keys plus payloads.
    pub fn new(partitions: &[&'static str], max_bytes: u64) -> Self {
        let partitions = partitions
            .iter()
            .map(|name| {
                let cache = Cache::builder()
                    .max_capacity(max_bytes)
                    .weigher(|key: &String, body: &Bytes| {
                        (key.len() + body.len()).try_into().unwrap_or(u32::MAX)
                    })
                    .build();
                (*name, cache)
            })
            .collect();

        Self { partitions: Arc::new(partitions) }
    }

    /// Look up the cached body for `url` within `partition`.
    ///
    /// Absent entries and unknown partitions both read as a miss, never as
    /// an error.
    pub async fn get(&self, partition: &str, url: &str) -> Option<Bytes> {
        self.partitions.get(partition)?.get(url).await
    }

    /// Store (or overwrite) the body for `url` within `partition`.
    pub async fn put(&self, partition: &str, url: &str, body: Bytes) {
        match self.partitions.get(partition) {
            Some(cache) => cache.insert(url.to_string(), body).await,
            None => tracing::debug!("no cache partition {partition}, dropping entry for {url}"),
        }
    }
}
