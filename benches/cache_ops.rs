use criterion::{black_box, criterion_group, criterion_main, Criterion};

use octet_cache::Cache;

fn single_chunk_set_get(c: &mut Criterion) {
    let cache = Cache::new();
    let value = vec![0u8; 256];
    c.bench_function("set single-chunk value", |b| {
        let mut i: u64 = 0;
        b.iter(|| {
            let key = i.to_be_bytes();
            cache.set(black_box(&key), black_box(&value)).unwrap();
            i += 1;
        })
    });

    cache.set(b"bench-key", &value).unwrap();
    c.bench_function("get single-chunk value", |b| {
        b.iter(|| black_box(cache.get(black_box(b"bench-key"))))
    });
}

fn multi_chunk_set_get(c: &mut Criterion) {
    let cache = Cache::new();
    let value = vec![0u8; 4 << 16];
    c.bench_function("set multi-chunk value", |b| {
        let mut i: u64 = 0;
        b.iter(|| {
            let key = i.to_be_bytes();
            cache.set(black_box(&key), black_box(&value)).unwrap();
            i += 1;
        })
    });

    cache.set(b"bench-key-big", &value).unwrap();
    c.bench_function("get multi-chunk value", |b| {
        b.iter(|| black_box(cache.get(black_box(b"bench-key-big"))))
    });
}

fn wrap_heavy_workload(c: &mut Criterion) {
    // A tiny cache so every insert forces a bucket to wrap its arena
    // almost immediately, stressing the eviction path rather than the
    // steady-state append path.
    let cache = Cache::with_options(
        octet_cache::CacheOptions::new().max_bytes(octet_cache::constants::CHUNK_SIZE as u64 * 512),
    );
    let value = vec![0u8; 64];
    c.bench_function("set under constant wrap pressure", |b| {
        let mut i: u64 = 0;
        b.iter(|| {
            let key = i.to_be_bytes();
            cache.set(black_box(&key), black_box(&value)).unwrap();
            i += 1;
        })
    });
}

criterion_group!(benches, single_chunk_set_get, multi_chunk_set_get, wrap_heavy_workload);
criterion_main!(benches);
