//! Criterion micro-benchmarks for paged item access.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pagepool_bench::{sequential, strided};
use pagepool_cache::{CacheConfig, PagedItemCache};
use pagepool_test_utils::CatalogSource;

const TOTAL: usize = 10_000;

fn make_cache() -> PagedItemCache<CatalogSource> {
    PagedItemCache::new(CatalogSource::generated(TOTAL), CacheConfig::default()).unwrap()
}

/// Benchmark: Walk all 10K items in order (one page swap per 100 items).
fn bench_sequential_walk(c: &mut Criterion) {
    let mut cache = make_cache();
    let order = sequential(TOTAL);
    c.bench_function("cache_sequential_10k", |b| {
        b.iter(|| {
            for &i in &order {
                black_box(cache.get_item(i).unwrap().price);
            }
        });
    });
}

/// Benchmark: 1K strided accesses, nearly every one a page swap.
fn bench_strided_swaps(c: &mut Criterion) {
    let mut cache = make_cache();
    let order = strided(TOTAL, 137, 1000);
    c.bench_function("cache_strided_1k", |b| {
        b.iter(|| {
            for &i in &order {
                black_box(cache.get_item(i).unwrap().equip_id);
            }
        });
    });
}

/// Benchmark: Repeated access within the resident page.
fn bench_resident_hits(c: &mut Criterion) {
    let mut cache = make_cache();
    cache.get_item(0).unwrap();
    c.bench_function("cache_resident_hit", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(cache.get_item(i).unwrap().sell_quantity);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_sequential_walk,
    bench_strided_swaps,
    bench_resident_hits
);
criterion_main!(benches);
