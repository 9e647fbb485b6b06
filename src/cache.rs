//! The cache facade: dispatches keys to buckets, drives the multi-chunk
//! assembly protocol for large values, and enforces the oversized-record
//! guard. Everything below the facade only ever sees single records.

use std::sync::{Arc, RwLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::bucket::Bucket;
use crate::codec;
use crate::config::CacheOptions;
use crate::constants::{BUCKET_COUNT, MAX_BUCKET_SIZE, MAX_KEY_LEN};
use crate::error::{CacheError, Result};
use crate::hash::BucketHash;

/// A fixed-capacity, in-process byte cache keyed by arbitrary byte strings.
///
/// `Cache` is cheap to clone via `Arc<Cache>` and safe to share across
/// threads directly: every operation takes `&self`.
pub struct Cache {
    lock: RwLock<()>,
    buckets: Box<[Bucket]>,
    hash: Arc<dyn BucketHash>,
    max_item_bytes: u64,
}

impl Cache {
    /// Create a cache with default options (`DEFAULT_MAX_BYTES`, `AHash`).
    pub fn new() -> Self {
        Self::with_options(CacheOptions::default())
    }

    /// Create a cache with explicit options. `max_bytes` is clamped into a
    /// sane range per §4.6 before the per-bucket arenas are sized.
    pub fn with_options(options: CacheOptions) -> Self {
        let CacheOptions { mut max_bytes, hash } = options;

        let absolute_max = MAX_BUCKET_SIZE * BUCKET_COUNT as u64;
        if max_bytes < 1 {
            max_bytes = crate::constants::DEFAULT_MAX_BYTES;
        } else if max_bytes >= absolute_max {
            max_bytes = absolute_max - (1 << 30);
        }
        // Floor so every bucket gets at least one chunk's worth of arena.
        let min_bytes = crate::constants::CHUNK_SIZE as u64 * BUCKET_COUNT as u64;
        if max_bytes < min_bytes {
            max_bytes = min_bytes;
        }

        let per_bucket_bytes = max_bytes.div_ceil(BUCKET_COUNT as u64) as usize;
        let buckets: Box<[Bucket]> = (0..BUCKET_COUNT).map(|_| Bucket::new(per_bucket_bytes)).collect();

        tracing::info!(
            "cache initialized with {} buckets, {} bytes/bucket, {} bytes total",
            BUCKET_COUNT,
            per_bucket_bytes,
            per_bucket_bytes as u64 * BUCKET_COUNT as u64
        );

        Self {
            lock: RwLock::new(()),
            buckets,
            hash,
            max_item_bytes: max_bytes / 2,
        }
    }

    /// Store `value` under `key` with no expiration.
    pub fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.set_with_ttl(key, value, Duration::ZERO)
    }

    /// Store `value` under `key`, expiring after `ttl` (zero means "no
    /// expiration").
    pub fn set_with_ttl(&self, key: &[u8], value: &[u8], ttl: Duration) -> Result<()> {
        if key.is_empty() || value.is_empty() {
            return Err(CacheError::InvalidKey);
        }
        if key.len() > MAX_KEY_LEN {
            return Err(CacheError::TooBigKey);
        }
        let item_len = key.len() as u64 + (value.len() as u64).max(8) + 14;
        if item_len >= self.max_item_bytes {
            return Err(CacheError::TooBigKey);
        }

        let deadline_nanos = if ttl.is_zero() { 0 } else { now_nanos().saturating_add(ttl.as_nanos() as u64) };

        let _guard = self.lock.write().unwrap();
        for chunk in codec::encode(self.hash.as_ref(), key, value, deadline_nanos) {
            self.bucket_for(chunk.hash).set(&chunk.sub_key, &chunk.record, chunk.hash);
        }
        Ok(())
    }

    /// Fetch the value stored under `key`, if any and not expired.
    pub fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        let _guard = self.lock.read().unwrap();

        let primary_hash = self.hash.sum(key);
        let primary = self.bucket_for(primary_hash).get(key, primary_hash)?;
        let view = codec::decode(&primary);
        // The index pointed at a stranded continuation chunk; treat as miss.
        if view.position > 1 {
            return None;
        }
        if view.deadline_nanos != 0 && view.deadline_nanos < now_nanos() {
            return None;
        }
        if view.chunk_count == 1 {
            return Some(view.payload.to_vec());
        }

        let mut assembled = Vec::with_capacity(view.payload.len() * view.chunk_count as usize);
        assembled.extend_from_slice(view.payload);
        for position in 2..=view.chunk_count {
            let sk = codec::sub_key(key, position as u64);
            let h = self.hash.sum(&sk);
            let rec = self.bucket_for(h).get(&sk, h)?;
            assembled.extend_from_slice(codec::decode(&rec).payload);
        }
        Some(assembled)
    }

    /// Assert that a primary record exists for `key`. Unlike `get`, this
    /// does not walk continuation chunks and does not check the deadline.
    pub fn contains(&self, key: &[u8]) -> bool {
        let _guard = self.lock.read().unwrap();
        let h = self.hash.sum(key);
        self.bucket_for(h).contains(key, h)
    }

    /// Reset the deadline on the primary record for `key` to `now + ttl`.
    /// A no-op if the key is missing or its index entry points at a
    /// stranded continuation chunk.
    pub fn expire(&self, key: &[u8], ttl: Duration) {
        let _guard = self.lock.write().unwrap();
        let h = self.hash.sum(key);
        let deadline_nanos = now_nanos().saturating_add(ttl.as_nanos() as u64);
        self.bucket_for(h).set_deadline(key, h, deadline_nanos);
    }

    /// Drop the primary record's index entry for `key`. Continuation chunks
    /// of a large value are left in place but become unreachable, since the
    /// multi-chunk walk in `get` always starts from the primary.
    pub fn remove(&self, key: &[u8]) {
        if key.len() > MAX_KEY_LEN {
            return;
        }
        let _guard = self.lock.write().unwrap();
        let h = self.hash.sum(key);
        self.bucket_for(h).remove(h);
    }

    #[inline]
    fn bucket_for(&self, hash: u64) -> &Bucket {
        &self.buckets[hash as usize % BUCKET_COUNT]
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

fn now_nanos() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos() as u64
}
