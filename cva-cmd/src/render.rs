//! Render the dashboard for one selection as a standalone HTML page.

use crate::source::{http_fetcher, load_feed, load_snapshot, Loaded};
use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveDate};
use clap::Args;
use cva_badea::observation::ObservationTable;
use cva_badea::FEED_URL;
use cva_chart::dashboard::{Dashboard, Selection};
use cva_chart::layout::DeviceProfile;
use cva_chart::page::render_page;
use cva_data::views::province_names;
use log::{error, info, warn};
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Output path for the HTML page
    #[arg(short = 'o', long)]
    pub html: String,

    /// Read a snapshot CSV instead of downloading the feed
    #[arg(short = 's', long)]
    pub snapshot_csv: Option<String>,

    /// Feed URL
    #[arg(long, default_value = FEED_URL)]
    pub url: String,

    /// First date to show (YYYY-MM-DD); defaults to 2020-08-01 within the data
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Metric to chart; defaults to the second metric in the feed
    #[arg(long)]
    pub metric: Option<String>,

    /// Layout: mobile or desktop
    #[arg(long, default_value = "desktop")]
    pub device: DeviceProfile,

    /// Province for the desktop detail chart
    #[arg(long)]
    pub province: Option<String>,

    /// Re-render every N seconds; the feed is downloaded at most once per hour
    #[arg(long)]
    pub watch_secs: Option<u64>,
}

/// Apply the command-line choices on top of the initial selection.
pub fn selection_for(table: &ObservationTable, args: &RenderArgs) -> anyhow::Result<Selection> {
    let mut selection =
        Selection::initial(table).ok_or_else(|| anyhow!("No observations to render"))?;

    if let Some(from) = args.from {
        selection.date_from = from;
    }
    if let Some(metric) = &args.metric {
        let metrics = table.metrics();
        if !metrics.contains(metric) {
            bail!(
                "Unknown metric {:?}; available: {}",
                metric,
                metrics.join(", ")
            );
        }
        selection.metric = metric.clone();
    }
    selection.device = args.device;
    if let Some(province) = &args.province {
        if !province_names(table).contains(province) {
            warn!("Province {:?} not in data, using the default", province);
        }
        selection.province = Some(province.clone());
    }
    Ok(selection)
}

fn write_page(loaded: &Loaded, args: &RenderArgs) -> anyhow::Result<()> {
    let selection = selection_for(&loaded.table, args)?;
    let dashboard = Dashboard::build(&loaded.table, &selection);
    let html = render_page(&dashboard, loaded.fetched_at, Local::now());
    std::fs::write(&args.html, html).with_context(|| format!("Failed to write {}", args.html))?;
    info!(
        "Rendered {:?} from {} ({} layout) to {}",
        dashboard.metric, selection.date_from, selection.device, args.html
    );
    Ok(())
}

/// Fold the outcome of one refresh into the page data.
///
/// While watching, a failed download or normalization keeps the last good
/// data; without anything to fall back on the failure is returned.
fn apply_refresh(
    current: &mut Option<Loaded>,
    refreshed: anyhow::Result<Option<Loaded>>,
    watching: bool,
) -> anyhow::Result<()> {
    match refreshed {
        Ok(Some(loaded)) => *current = Some(loaded),
        Ok(None) => {}
        Err(e) if watching && current.is_some() => {
            error!("{:#}; keeping the last page", e);
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

pub async fn run_render(args: RenderArgs) -> anyhow::Result<()> {
    if let Some(path) = &args.snapshot_csv {
        if args.watch_secs.is_some() {
            warn!("--watch-secs has no effect with --snapshot-csv");
        }
        return write_page(&load_snapshot(path)?, &args);
    }

    let mut fetcher = http_fetcher()?;
    let mut current: Option<Loaded> = None;
    loop {
        let refreshed = match fetcher.fetch(&args.url).await {
            // Re-normalize only when the cache handed back a new download
            Ok(feed) if current.as_ref().map(|c| c.fetched_at) != Some(feed.fetched_at()) => {
                load_feed(&feed).map(Some)
            }
            Ok(_) => Ok(None),
            Err(e) => Err(anyhow::Error::new(e).context("Unable to load data from the feed")),
        };
        apply_refresh(&mut current, refreshed, args.watch_secs.is_some())?;
        if let Some(loaded) = &current {
            write_page(loaded, &args)?;
        }

        match args.watch_secs {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => break,
        }
    }
    Ok(())
}
