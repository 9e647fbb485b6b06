//! Construction-time options for a `Cache`.
//!
//! This is deliberately a small builder, not a file- or env-loaded config
//! schema: the cache has exactly two knobs (§4.6), and process-level
//! wiring — reading a config file, parsing CLI flags — is out of scope for
//! this crate (see §1).

use std::sync::Arc;

use crate::constants::DEFAULT_MAX_BYTES;
use crate::hash::{AHash, BucketHash};

/// Options accepted by `Cache::with_options`.
pub struct CacheOptions {
    pub(crate) max_bytes: u64,
    pub(crate) hash: Arc<dyn BucketHash>,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            hash: Arc::new(AHash),
        }
    }
}

impl CacheOptions {
    /// Start from the defaults: `DEFAULT_MAX_BYTES` total budget, `AHash`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total arena budget across all buckets. Out-of-range values
    /// are clamped by `Cache::with_options`, not here, so the clamping rule
    /// stays in one place.
    pub fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Swap in a different hash capability.
    pub fn hash(mut self, hash: impl BucketHash + 'static) -> Self {
        self.hash = Arc::new(hash);
        self
    }
}
