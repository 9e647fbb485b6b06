//! One cache shard: an arena, its index, and the mutex that serializes
//! mutation of the two together.
//!
//! Per §5 of the design, a writer holding the cache-level write lock already
//! excludes every other writer; the per-bucket mutex exists so that readers
//! touching a *different* bucket than an in-flight writer never block, while
//! still giving this bucket's own arena+index pair a single consistent view.

use std::sync::Mutex;

use crate::arena::ChunkArena;
use crate::constants::MAX_GEN;
use crate::index::{self, Index};

struct BucketInner {
    arena: ChunkArena,
    index: Index,
}

/// One shard of the cache.
pub struct Bucket {
    inner: Mutex<BucketInner>,
}

impl Bucket {
    /// Create a bucket whose arena holds at least `arena_bytes`.
    pub fn new(arena_bytes: usize) -> Self {
        Self {
            inner: Mutex::new(BucketInner {
                arena: ChunkArena::new(arena_bytes),
                index: Index::new(),
            }),
        }
    }

    /// Store `rec` under `key`/`hash`, replacing any prior record for the
    /// same hash. If the arena's generation counter would overflow the
    /// index's packed field, the bucket performs a full reset instead of
    /// indexing the just-written record — the only eviction event besides
    /// ordinary arena wrap.
    pub fn set(&self, key: &[u8], rec: &[u8], hash: u64) {
        let mut inner = self.inner.lock().unwrap();
        let offset = inner.arena.append(key, rec);
        let generation = inner.arena.generation();
        if generation > MAX_GEN {
            tracing::warn!("generation counter exhausted at {}; resetting bucket", generation);
            inner.arena.reset();
            inner.index.clear();
            return;
        }
        inner.index.set(hash, generation, offset);
    }

    /// Fetch the full record bytes stored under `key`/`hash`, or `None` on a
    /// stale index entry, a hash collision, or no entry at all.
    pub fn get(&self, key: &[u8], hash: u64) -> Option<Vec<u8>> {
        let inner = self.inner.lock().unwrap();
        Self::read_locked(&inner, key, hash).map(|rec| rec.to_vec())
    }

    /// Like `get`, but only asserts presence without copying the record out.
    pub fn contains(&self, key: &[u8], hash: u64) -> bool {
        let inner = self.inner.lock().unwrap();
        Self::read_locked(&inner, key, hash).is_some()
    }

    /// Drop the index entry for `hash`. The arena bytes themselves are left
    /// dormant until the write cursor wraps back over them.
    pub fn remove(&self, hash: u64) {
        let mut inner = self.inner.lock().unwrap();
        inner.index.remove(hash);
    }

    /// Overwrite the deadline field of the record at `key`/`hash` in place.
    /// No-op (returns `false`) if the entry is missing, stale, or stranded
    /// at a continuation position (`position > 1` has no deadline field).
    pub fn set_deadline(&self, key: &[u8], hash: u64, deadline_nanos: u64) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let Some((generation, offset)) = inner.index.get(hash) else {
            return false;
        };
        if !index::is_live(generation, offset, inner.arena.generation(), inner.arena.write_pos()) {
            return false;
        }
        match inner.arena.read_mut(offset, key) {
            Some(rec) if rec[0] == 1 => {
                rec[2..10].copy_from_slice(&deadline_nanos.to_be_bytes());
                true
            }
            _ => false,
        }
    }

    fn read_locked<'a>(inner: &'a BucketInner, key: &[u8], hash: u64) -> Option<&'a [u8]> {
        let (generation, offset) = inner.index.get(hash)?;
        if !index::is_live(generation, offset, inner.arena.generation(), inner.arena.write_pos()) {
            return None;
        }
        inner.arena.read(offset, key)
    }
}
