//! Print an overview of the observations.

use crate::source::{fetch_and_load, http_fetcher, load_snapshot, Loaded};
use cva_data::views::{province_names, whole_territory};
use std::fmt::Write as _;

/// Human-readable overview of a loaded table.
pub fn summarize(loaded: &Loaded) -> String {
    let table = &loaded.table;
    let mut out = String::new();
    let _ = writeln!(out, "Captured:     {}", loaded.fetched_at.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(
        out,
        "Observations: {} ({} skipped)",
        table.len(),
        loaded.skipped.total()
    );
    match table.date_bounds() {
        Some((min, max)) => {
            let _ = writeln!(out, "Dates:        {} to {}", min, max);
        }
        None => {
            let _ = writeln!(out, "Dates:        none");
        }
    }
    let _ = writeln!(out, "Territory:    {} rows", whole_territory(table).len());
    let _ = writeln!(out, "Provinces:    {}", province_names(table).join(", "));
    let _ = writeln!(out, "Metrics:");
    for metric in table.metrics() {
        let count = table.iter().filter(|o| o.metric == metric).count();
        let _ = writeln!(out, "  {} ({} rows)", metric, count);
    }
    out
}

pub async fn run_summary(snapshot_csv: Option<&str>, url: &str) -> anyhow::Result<()> {
    let loaded = match snapshot_csv {
        Some(path) => load_snapshot(path)?,
        None => {
            let mut fetcher = http_fetcher()?;
            fetch_and_load(&mut fetcher, url).await?
        }
    };
    print!("{}", summarize(&loaded));
    Ok(())
}
