//! Facade-level scenarios exercising the full set/get/expire/remove surface
//! against a freshly constructed cache.

use std::time::Duration;

use octet_cache::{Cache, CacheError, CacheOptions};
use octet_cache::constants::{BUCKET_COUNT, CHUNK_SIZE};

#[test]
fn small_value_set_then_get() {
    let cache = Cache::new();
    let key = b"a";
    cache.set(key, key).unwrap();
    assert_eq!(cache.get(key), Some(key.to_vec()));
}

#[test]
fn value_spanning_multiple_chunks_round_trips() {
    let cache = Cache::new();
    let key = b"b";
    let mut big = vec![0u8; 2 << 16];
    big[0] = b'b';
    *big.last_mut().unwrap() = b'b';
    cache.set(key, &big).unwrap();
    let got = cache.get(key).unwrap();
    assert_eq!(got.len(), big.len());
    assert_eq!(got, big);
}

#[test]
fn ttl_expires_the_value() {
    let cache = Cache::new();
    let key = b"c";
    cache.set_with_ttl(key, key, Duration::from_millis(50)).unwrap();
    assert_eq!(cache.get(key), Some(key.to_vec()));
    std::thread::sleep(Duration::from_millis(80));
    assert_eq!(cache.get(key), None);
}

#[test]
fn expire_extends_then_shortens_ttl() {
    let cache = Cache::new();
    let key = b"d";
    cache.set_with_ttl(key, key, Duration::from_millis(30)).unwrap();
    cache.expire(key, Duration::from_secs(60));
    std::thread::sleep(Duration::from_millis(60));
    assert_eq!(cache.get(key), Some(key.to_vec()), "expire should have pushed the deadline out");

    cache.expire(key, Duration::from_millis(10));
    std::thread::sleep(Duration::from_millis(40));
    assert_eq!(cache.get(key), None);
}

#[test]
fn remove_drops_a_large_value() {
    let cache = Cache::new();
    let key = b"e";
    let big = vec![9u8; 3 << 16];
    cache.set(key, &big).unwrap();
    assert!(cache.contains(key));
    cache.remove(key);
    assert_eq!(cache.get(key), None);
    assert!(!cache.contains(key));
}

#[test]
fn empty_key_and_empty_value_are_rejected() {
    let cache = Cache::new();
    assert_eq!(cache.set(b"", b"v"), Err(CacheError::InvalidKey));
    assert_eq!(cache.set(b"k", b""), Err(CacheError::InvalidKey));
}

#[test]
fn overwriting_a_key_replaces_its_value() {
    let cache = Cache::new();
    let key = b"f";
    cache.set(key, b"first").unwrap();
    cache.set(key, b"second").unwrap();
    assert_eq!(cache.get(key), Some(b"second".to_vec()));
}

#[test]
fn many_keys_across_buckets_do_not_interfere() {
    let cache = Cache::new();
    for i in 0u32..2000 {
        let k = i.to_be_bytes();
        cache.set(&k, &k).unwrap();
    }
    for i in 0u32..2000 {
        let k = i.to_be_bytes();
        assert_eq!(cache.get(&k), Some(k.to_vec()));
    }
}

#[test]
fn arena_wrap_evicts_the_oldest_keys_through_the_facade() {
    let cache = Cache::with_options(
        CacheOptions::new().max_bytes(4 * CHUNK_SIZE as u64 * BUCKET_COUNT as u64),
    );
    let value = vec![0u8; 256];
    // Each bucket's arena holds roughly 956 slots of this size before it wraps.
    // A million distinct keys spread across 512 buckets averages ~1953 inserts
    // per bucket, comfortably forcing every bucket to wrap at least once.
    let total_keys = 1_000_000u32;
    for i in 0..total_keys {
        cache.set(&i.to_be_bytes(), &value).unwrap();
    }
    assert_eq!(cache.get(&0u32.to_be_bytes()), None, "earliest key should have been evicted by wrap");
    let last = total_keys - 1;
    assert_eq!(cache.get(&last.to_be_bytes()), Some(value), "most recent key should still be live");
}
