//! A fixed-capacity, in-process byte cache keyed by arbitrary byte strings.
//!
//! The cache is sharded into a fixed number of independent buckets, each
//! owning a circular arena of bytes. Values larger than one arena chunk are
//! transparently split across several on-arena records and reassembled on
//! read; this is invisible at the `Cache` API. There is no explicit LRU —
//! eviction falls out of the circular arena reusing its oldest bytes once
//! the write cursor wraps.
//!
//! ```
//! use octet_cache::Cache;
//!
//! let cache = Cache::new();
//! cache.set(b"hello", b"world").unwrap();
//! assert_eq!(cache.get(b"hello"), Some(b"world".to_vec()));
//! ```
#![warn(missing_docs)]

pub mod arena;
pub mod bucket;
pub mod cache;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod hash;
pub mod index;

pub use cache::Cache;
pub use config::CacheOptions;
pub use error::{CacheError, Result};
pub use hash::{AHash, BucketHash};
