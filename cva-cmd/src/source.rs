//! Where a command gets its observations: the live feed or a snapshot.

use anyhow::Context;
use chrono::{DateTime, Local};
use cva_badea::cache::{Clock, FeedFetcher, Transport};
use cva_badea::client::HttpTransport;
use cva_badea::feed::{normalize, RawFeed, SkipReport};
use cva_badea::observation::ObservationTable;
use cva_badea::snapshot::Snapshot;
use log::{info, warn};
use std::path::Path;

/// A normalized table and when its data was captured.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub table: ObservationTable,
    pub fetched_at: DateTime<Local>,
    pub skipped: SkipReport,
}

/// Fetcher over HTTP with the wall clock.
pub fn http_fetcher() -> anyhow::Result<FeedFetcher<HttpTransport>> {
    let transport = HttpTransport::new().context("Failed to build HTTP client")?;
    Ok(FeedFetcher::new(transport))
}

/// Normalize a downloaded feed, logging what was skipped.
pub fn load_feed(feed: &RawFeed) -> anyhow::Result<Loaded> {
    let normalized = normalize(feed).context("Failed to normalize feed")?;
    report_skipped(&normalized.skipped);
    Ok(Loaded {
        table: normalized.table,
        fetched_at: feed.fetched_at(),
        skipped: normalized.skipped,
    })
}

/// Download (or reuse this hour's download of) the feed and normalize it.
pub async fn fetch_and_load<T: Transport, C: Clock>(
    fetcher: &mut FeedFetcher<T, C>,
    url: &str,
) -> anyhow::Result<Loaded> {
    let feed = fetcher
        .fetch(url)
        .await
        .context("Unable to load data from the feed")?;
    load_feed(&feed)
}

pub fn load_snapshot(path: &str) -> anyhow::Result<Loaded> {
    let snapshot = Snapshot::read(Path::new(path))
        .with_context(|| format!("Failed to read snapshot {}", path))?;
    info!(
        "Loaded {} observations from {} (captured {})",
        snapshot.table.len(),
        path,
        snapshot.fetched_at
    );
    Ok(Loaded {
        table: snapshot.table,
        fetched_at: snapshot.fetched_at,
        skipped: SkipReport::default(),
    })
}

pub fn report_skipped(skipped: &SkipReport) {
    if skipped.total() == 0 {
        return;
    }
    warn!(
        "Skipped {} rows: {} wrong field count, {} stray comma, {} empty field, {} unknown region, {} bad date, {} bad value",
        skipped.total(),
        skipped.field_count,
        skipped.stray_delimiter,
        skipped.empty_field,
        skipped.region,
        skipped.date,
        skipped.value
    );
}
