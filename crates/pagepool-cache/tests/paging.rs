//! Integration test: page swap sequences against a counting item source.
//!
//! Drives the cache through the canonical access patterns (round trip
//! across three pages, bounds at the last item, cleanup and reload) and
//! checks both the resident page and what the source was asked to load.

use pagepool_cache::{CacheConfig, CacheError, PagedItemCache};
use pagepool_core::PageIndex;
use pagepool_test_utils::CountingSource;

fn counting_cache(total: usize, page_size: usize) -> PagedItemCache<CountingSource> {
    PagedItemCache::new(CountingSource::new(total), CacheConfig::new(page_size)).unwrap()
}

fn resident_indices<const B: usize>(cache: &PagedItemCache<CountingSource, B>) -> Vec<usize> {
    cache.resident_items().map(|item| item.index).collect()
}

// ── Load/unload round trip: 250 items, 100 per page ─────────────────

#[test]
fn round_trip_over_three_pages() {
    let mut cache = counting_cache(250, 100);

    cache.load_page(PageIndex(0)).unwrap();
    assert_eq!(cache.active_len(), 100);
    assert_eq!(resident_indices(&cache), (0..100).collect::<Vec<_>>());
    let blocks_after_first = cache.pool().block_count();

    cache.load_page(PageIndex(1)).unwrap();
    assert_eq!(cache.active_len(), 100);
    assert_eq!(resident_indices(&cache), (100..200).collect::<Vec<_>>());
    assert_eq!(
        cache.pool().block_count(),
        blocks_after_first,
        "page 1 must reuse freed slots instead of growing"
    );

    cache.load_page(PageIndex(2)).unwrap();
    assert_eq!(cache.active_len(), 50);
    assert_eq!(resident_indices(&cache), (200..250).collect::<Vec<_>>());
    assert_eq!(cache.pool().live_count(), 50);
}

#[test]
fn page_sized_blocks_reuse_exact_slots() {
    let mut cache: PagedItemCache<CountingSource, 100> =
        PagedItemCache::new(CountingSource::new(250), CacheConfig::new(100)).unwrap();

    cache.load_page(PageIndex(0)).unwrap();
    let mut page0 = cache.active_handles().to_vec();
    cache.load_page(PageIndex(1)).unwrap();
    let mut page1 = cache.active_handles().to_vec();

    assert_eq!(cache.pool().block_count(), 1);
    page0.sort_by_key(|h| h.slot());
    page1.sort_by_key(|h| h.slot());
    assert_eq!(page0, page1);
}

#[test]
fn repeated_load_is_a_no_op() {
    let mut cache = counting_cache(250, 100);
    cache.load_page(PageIndex(1)).unwrap();
    let handles = cache.active_handles().to_vec();

    cache.load_page(PageIndex(1)).unwrap();
    assert_eq!(cache.active_handles(), handles.as_slice());
    assert_eq!(cache.source().total_inits(), 100);
}

#[test]
fn load_past_last_page_does_not_load_empty_page() {
    let mut cache = counting_cache(250, 100);
    cache.load_page(PageIndex(1)).unwrap();
    let result = cache.load_page(PageIndex(3));
    assert_eq!(
        result,
        Err(CacheError::PageOutOfRange {
            page: PageIndex(3),
            page_count: 3,
        })
    );
    // Bounds are checked before anything is unloaded.
    assert_eq!(cache.current_page(), Some(PageIndex(1)));
    assert_eq!(cache.active_len(), 100);
}

// ── Bounds ──────────────────────────────────────────────────────────

#[test]
fn last_item_loads_without_explicit_page_load() {
    let mut cache = counting_cache(250, 100);
    let item = *cache.get_item(249).unwrap();
    assert_eq!(item.index, 249);
    assert_eq!(cache.current_page(), Some(PageIndex(2)));
}

#[test]
fn index_past_end_is_out_of_range() {
    let mut cache = counting_cache(250, 100);
    let err = cache.get_item(250).unwrap_err();
    assert_eq!(
        err,
        CacheError::OutOfRange {
            index: 250,
            total: 250,
        }
    );
    assert_eq!(cache.source().total_inits(), 0);
    assert_eq!(cache.pool().block_count(), 0);
}

// ── Cleanup ─────────────────────────────────────────────────────────

#[test]
fn cleanup_then_access_reinitialises() {
    let mut cache = counting_cache(250, 100);
    assert_eq!(cache.get_item(0).unwrap().load_count, 1);

    cache.cleanup();
    assert_eq!(cache.active_len(), 0);
    assert_eq!(cache.current_page(), None);
    assert_eq!(cache.pool().live_count(), 0);

    let item = *cache.get_item(0).unwrap();
    assert_eq!(item.load_count, 2);
    assert_eq!(cache.source().init_count(0), 2);
}

// ── Small-page walk: 10 items, 4 per page ───────────────────────────

#[test]
fn small_page_walk() {
    let mut cache = counting_cache(10, 4);

    assert_eq!(cache.get_item(0).unwrap().index, 0);
    assert_eq!(cache.current_page(), Some(PageIndex(0)));
    assert_eq!(resident_indices(&cache), vec![0, 1, 2, 3]);

    assert_eq!(cache.get_item(5).unwrap().index, 5);
    assert_eq!(cache.current_page(), Some(PageIndex(1)));
    assert_eq!(resident_indices(&cache), vec![4, 5, 6, 7]);

    assert_eq!(cache.get_item(9).unwrap().index, 9);
    assert_eq!(cache.current_page(), Some(PageIndex(2)));
    assert_eq!(resident_indices(&cache), vec![8, 9]);

    assert!(matches!(
        cache.get_item(10),
        Err(CacheError::OutOfRange { index: 10, total: 10 })
    ));

    assert_eq!(cache.source().log(), (0..10).collect::<Vec<_>>().as_slice());
    assert_eq!(cache.pool().block_count(), 1);
}

#[test]
fn revisiting_a_page_reloads_it() {
    let mut cache = counting_cache(10, 4);
    cache.get_item(1).unwrap();
    cache.get_item(6).unwrap();
    let item = *cache.get_item(2).unwrap();
    assert_eq!(item.load_count, 2);
    assert_eq!(
        cache.source().distinct_indices().collect::<Vec<_>>(),
        (0..8).collect::<Vec<_>>()
    );
}

#[test]
fn reset_counts_isolates_later_loads() {
    let mut cache = counting_cache(10, 4);
    cache.get_item(0).unwrap();
    cache.source_mut().reset_counts();
    assert_eq!(cache.source().total_inits(), 0);

    // Resident page: no initializer calls.
    cache.get_item(3).unwrap();
    assert_eq!(cache.source().total_inits(), 0);

    cache.get_item(4).unwrap();
    assert_eq!(cache.source().log(), &[4, 5, 6, 7]);
    assert_eq!(cache.source().init_count(0), 0);
}
