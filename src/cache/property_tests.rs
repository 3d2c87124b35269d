//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check hit/refresh behaviour over arbitrary URLs and TTLs.

use proptest::prelude::*;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::TtlCache;
use crate::upstream::fake::FakeClient;

// == Strategies ==
/// Generates upstream-looking URLs
fn url_strategy() -> impl Strategy<Value = String> {
    "[a-z\\-]{1,24}(/[A-Z]{3})?/(now|current)"
        .prop_map(|path| format!("https://api-web.nhle.com/v1/{}", path))
}

/// TTLs between one second and one hour
fn ttl_strategy() -> impl Strategy<Value = Duration> {
    (1u64..3600).prop_map(Duration::from_secs)
}

/// Runs `fut` on a single-threaded runtime with the clock paused.
fn run_paused<F: Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
        .block_on(fut)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A second fetch inside the TTL window makes no upstream call and
    // returns the same data.
    #[test]
    fn prop_fetch_within_ttl_is_served_locally(
        url in url_strategy(),
        ttl in ttl_strategy(),
        fraction in 0.0f64..0.99,
    ) {
        let (calls, first, second) = run_paused(async {
            let fake = Arc::new(FakeClient::new());
            let cache = TtlCache::new(fake.clone());

            let first = cache.fetch(&url, ttl).await.unwrap();
            tokio::time::advance(ttl.mul_f64(fraction)).await;
            let second = cache.fetch(&url, ttl).await.unwrap();
            (fake.calls(), first, second)
        });

        prop_assert_eq!(calls, 1, "Fresh entry should not go upstream");
        prop_assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap(),
            "Cached payload should be identical"
        );
    }

    // Once the TTL has elapsed, exactly one new upstream call is made.
    #[test]
    fn prop_fetch_after_ttl_refreshes_once(
        url in url_strategy(),
        ttl in ttl_strategy(),
        extra in 0u64..600,
    ) {
        let calls = run_paused(async {
            let fake = Arc::new(FakeClient::new());
            let cache = TtlCache::new(fake.clone());

            cache.fetch(&url, ttl).await.unwrap();
            tokio::time::advance(ttl + Duration::from_secs(extra)).await;
            cache.fetch(&url, ttl).await.unwrap();
            cache.fetch(&url, ttl).await.unwrap();
            fake.calls()
        });

        prop_assert_eq!(calls, 2, "Expired entry should be refreshed exactly once");
    }

    // Hits plus misses always equals the number of fetches.
    #[test]
    fn prop_statistics_accuracy(urls in prop::collection::vec(url_strategy(), 1..30)) {
        let (stats, calls, distinct) = run_paused(async {
            let fake = Arc::new(FakeClient::new());
            let cache = TtlCache::new(fake.clone());
            for url in &urls {
                cache.fetch(url, Duration::from_secs(300)).await.unwrap();
            }
            let distinct = urls.iter().collect::<std::collections::HashSet<_>>().len();
            (cache.stats().await, fake.calls(), distinct)
        });

        prop_assert_eq!(stats.hits + stats.misses, urls.len() as u64);
        prop_assert_eq!(stats.misses, calls as u64);
        prop_assert_eq!(calls, distinct, "Each distinct URL fetched once");
        prop_assert_eq!(stats.total_entries, distinct);
    }
}
