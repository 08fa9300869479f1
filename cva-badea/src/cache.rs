//! Hourly memoization of feed downloads.
//!
//! Every interaction re-runs the pipeline, but the feed itself is only
//! downloaded once per (url, clock hour). The clock and the transport are
//! injected so the cache can be driven without a network or a real clock.

use crate::error::FetchError;
use crate::feed::RawFeed;
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use cva_utils::dates::truncate_to_hour;
use log::{debug, info};
use std::collections::HashMap;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Something that can GET a URL and hand back the decoded body text.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Cache key: the feed URL plus the hour the request was made in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub url: String,
    /// Start of the hour, in UTC
    pub hour: NaiveDateTime,
}

impl CacheKey {
    pub fn new<Tz: TimeZone>(url: &str, at: &DateTime<Tz>) -> Self {
        CacheKey {
            url: url.to_string(),
            hour: truncate_to_hour(at),
        }
    }
}

/// Successful downloads keyed by [`CacheKey`]. Entries are never evicted;
/// a long-running process gains one per distinct hour it fetches in.
#[derive(Debug, Default, Clone)]
pub struct FeedCache {
    entries: HashMap<CacheKey, RawFeed>,
}

impl FeedCache {
    pub fn get(&self, key: &CacheKey) -> Option<&RawFeed> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: CacheKey, feed: RawFeed) {
        self.entries.insert(key, feed);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fetches the raw feed through a [`Transport`], memoized in a [`FeedCache`].
pub struct FeedFetcher<T, C = SystemClock> {
    transport: T,
    clock: C,
    cache: FeedCache,
}

impl<T: Transport> FeedFetcher<T, SystemClock> {
    pub fn new(transport: T) -> Self {
        FeedFetcher::with_clock(transport, SystemClock)
    }
}

impl<T: Transport, C: Clock> FeedFetcher<T, C> {
    pub fn with_clock(transport: T, clock: C) -> Self {
        FeedFetcher {
            transport,
            clock,
            cache: FeedCache::default(),
        }
    }

    pub fn cache(&self) -> &FeedCache {
        &self.cache
    }

    /// Return the feed for `url`, downloading it only if this hour's copy
    /// is not cached yet. The returned feed keeps its original capture time.
    pub async fn fetch(&mut self, url: &str) -> Result<RawFeed, FetchError> {
        let now = self.clock.now();
        let key = CacheKey::new(url, &now);
        if let Some(feed) = self.cache.get(&key) {
            debug!("Feed cache hit for hour {}", key.hour);
            return Ok(feed.clone());
        }

        debug!("Feed cache miss for hour {}, downloading", key.hour);
        let text = self.transport.get_text(url).await?;
        if text.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }
        info!("Downloaded feed: {} bytes", text.len());

        let feed = RawFeed::new(text, now);
        self.cache.insert(key, feed.clone());
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const URL: &str = "https://example.test/feed.csv";
    const BODY: &str = "Territorio;Medida;Fecha diagnóstico;Valor;\n";

    /// Replays queued responses (then `BODY` forever) and counts calls.
    #[derive(Default)]
    struct FakeTransport {
        calls: Arc<AtomicUsize>,
        queued: Mutex<VecDeque<Result<String, FetchError>>>,
    }

    impl FakeTransport {
        fn with_responses(responses: Vec<Result<String, FetchError>>) -> Self {
            FakeTransport {
                calls: Arc::default(),
                queued: Mutex::new(responses.into()),
            }
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn get_text(&self, _url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.queued.lock().unwrap().pop_front();
            next.unwrap_or_else(|| Ok(BODY.to_string()))
        }
    }

    /// Clock pinned to a UTC time so hour boundaries do not depend on the host zone.
    #[derive(Clone)]
    struct FakeClock(Rc<Cell<DateTime<Local>>>);

    impl FakeClock {
        fn at(h: u32, m: u32) -> Self {
            FakeClock(Rc::new(Cell::new(
                Utc.with_ymd_and_hms(2021, 3, 15, h, m, 0)
                    .unwrap()
                    .with_timezone(&Local),
            )))
        }

        fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by);
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Local> {
            self.0.get()
        }
    }

    #[tokio::test]
    async fn test_same_hour_reuses_one_download() {
        let transport = FakeTransport::default();
        let calls = transport.calls.clone();
        let clock = FakeClock::at(10, 5);
        let mut fetcher = FeedFetcher::with_clock(transport, clock.clone());

        let first = fetcher.fetch(URL).await.unwrap();
        clock.advance(Duration::minutes(50));
        let second = fetcher.fetch(URL).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert_eq!(second.fetched_at(), first.fetched_at());
        assert_eq!(fetcher.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_new_hour_downloads_again() {
        let transport = FakeTransport::default();
        let calls = transport.calls.clone();
        let clock = FakeClock::at(10, 55);
        let mut fetcher = FeedFetcher::with_clock(transport, clock.clone());

        fetcher.fetch(URL).await.unwrap();
        clock.advance(Duration::minutes(10));
        let refreshed = fetcher.fetch(URL).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(refreshed.fetched_at(), clock.now());
        assert_eq!(fetcher.cache().len(), 2);
    }

    #[test]
    fn test_repeated_local_hour_gets_its_own_key() {
        let summer = FixedOffset::east_opt(2 * 3600).unwrap();
        let winter = FixedOffset::east_opt(3600).unwrap();
        let first = summer.with_ymd_and_hms(2021, 10, 31, 2, 30, 0).unwrap();
        let second = winter.with_ymd_and_hms(2021, 10, 31, 2, 30, 0).unwrap();
        assert_ne!(CacheKey::new(URL, &first), CacheKey::new(URL, &second));

        let later_same_hour = summer.with_ymd_and_hms(2021, 10, 31, 2, 59, 0).unwrap();
        assert_eq!(CacheKey::new(URL, &first), CacheKey::new(URL, &later_same_hour));
    }

    #[tokio::test]
    async fn test_different_url_is_a_different_key() {
        let transport = FakeTransport::default();
        let calls = transport.calls.clone();
        let mut fetcher = FeedFetcher::with_clock(transport, FakeClock::at(9, 0));

        fetcher.fetch(URL).await.unwrap();
        fetcher.fetch("https://mirror.test/feed.csv").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let transport = FakeTransport::with_responses(vec![
            Err(FetchError::Status(503)),
            Ok("   \n".to_string()),
        ]);
        let calls = transport.calls.clone();
        let mut fetcher = FeedFetcher::with_clock(transport, FakeClock::at(12, 0));

        assert_eq!(fetcher.fetch(URL).await, Err(FetchError::Status(503)));
        assert_eq!(fetcher.fetch(URL).await, Err(FetchError::EmptyBody));
        assert!(fetcher.cache().is_empty());

        let feed = fetcher.fetch(URL).await.unwrap();
        assert_eq!(feed.text(), BODY);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
