//! Bounded in-memory cache of analysis results.
//!
//! Keyed by the opaque per-upload video id. Entries expire after a TTL and
//! the least-recently-used entry is evicted once the map exceeds capacity.
//! Reads share a lock and stamp recency through an atomic, so concurrent
//! lookups for different ids do not block each other; racing writers for the
//! same id resolve last-writer-wins.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use qdance_models::AnalysisResult;
use tokio::sync::RwLock;
use tracing::debug;

struct CacheEntry {
    result: AnalysisResult,
    inserted_at: Instant,
    last_used: AtomicU64,
}

/// Process-wide analysis result cache.
pub struct ResultCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    capacity: usize,
    ttl: Duration,
    clock: AtomicU64,
}

impl ResultCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
            ttl,
            clock: AtomicU64::new(0),
        }
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Look up a cached result. Expired entries read as absent; they are
    /// physically dropped by the next `put`.
    pub async fn get(&self, video_id: &str) -> Option<AnalysisResult> {
        let entries = self.entries.read().await;
        let entry = entries.get(video_id)?;
        if entry.inserted_at.elapsed() > self.ttl {
            return None;
        }
        entry.last_used.store(self.tick(), Ordering::Relaxed);
        Some(entry.result.clone())
    }

    /// Insert or overwrite a result, dropping expired entries and evicting
    /// the least-recently-used entry while over capacity.
    pub async fn put(&self, video_id: impl Into<String>, result: AnalysisResult) {
        let video_id = video_id.into();
        let mut entries = self.entries.write().await;

        entries.retain(|_, entry| entry.inserted_at.elapsed() <= self.ttl);

        entries.insert(
            video_id.clone(),
            CacheEntry {
                result,
                inserted_at: Instant::now(),
                last_used: AtomicU64::new(self.tick()),
            },
        );

        while entries.len() > self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used.load(Ordering::Relaxed))
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    debug!(video_id = %id, "evicting least-recently-used cache entry");
                    entries.remove(&id);
                }
                None => break,
            }
        }
    }

    /// Number of live (possibly expired but not yet swept) entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
