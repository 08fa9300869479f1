//! Download the feed once and keep it as a snapshot CSV.

use crate::source::{fetch_and_load, http_fetcher};
use anyhow::Context;
use cva_badea::snapshot::Snapshot;
use log::info;
use std::path::Path;

/// Fetch and normalize the feed, then write the snapshot to `snapshot_csv`.
///
/// The snapshot is what the chart app embeds at build time.
pub async fn run_fetch(snapshot_csv: &str, url: &str) -> anyhow::Result<()> {
    let mut fetcher = http_fetcher()?;
    info!("Fetching feed from {}", url);
    let loaded = fetch_and_load(&mut fetcher, url).await?;

    let snapshot = Snapshot::new(loaded.fetched_at, loaded.table);
    snapshot
        .write(Path::new(snapshot_csv))
        .with_context(|| format!("Failed to write snapshot {}", snapshot_csv))?;

    info!(
        "Fetch complete. {} observations ({} skipped) written to {}",
        snapshot.table.len(),
        loaded.skipped.total(),
        snapshot_csv
    );
    Ok(())
}
