//! Command implementations for CVA CLI.
//!
//! Provides subcommands for downloading the BADEA COVID-19 feed, rendering
//! the dashboard page and summarizing the data.

use clap::Subcommand;
use cva_badea::FEED_URL;

pub mod fetch;
pub mod render;
pub mod source;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Download and normalize the feed, then write a snapshot CSV
    Fetch {
        /// Output path for the normalized snapshot CSV
        #[arg(short = 'o', long)]
        snapshot_csv: String,

        /// Feed URL
        #[arg(long, default_value = FEED_URL)]
        url: String,
    },

    /// Render the dashboard for one selection as a standalone HTML page
    Render(render::RenderArgs),

    /// Print row counts, date range, metrics and regions
    Summary {
        /// Read a snapshot CSV instead of downloading the feed
        #[arg(short = 's', long)]
        snapshot_csv: Option<String>,

        /// Feed URL
        #[arg(long, default_value = FEED_URL)]
        url: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { snapshot_csv, url } => fetch::run_fetch(&snapshot_csv, &url).await,
        Command::Render(args) => render::run_render(args).await,
        Command::Summary { snapshot_csv, url } => {
            summary::run_summary(snapshot_csv.as_deref(), &url).await
        }
    }
}
