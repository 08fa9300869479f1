//! `cva-cli`: fetch the BADEA COVID-19 feed, snapshot it, and render the
//! Andalucía dashboard as a static page.
//!
//! Logs at `info` by default so skipped feed rows are visible; `-v` adds the
//! cache hits and misses. `RUST_LOG` overrides both.

use clap::Parser;
use env_logger::Env;

#[derive(Parser)]
#[command(
    name = "cva-cli",
    version,
    about = "COVID-19 Andalucía data and dashboard toolkit"
)]
struct Cli {
    /// Log debug details (cache hits, downloads)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: cva_cmd::Command,
}

impl Cli {
    fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.default_log_filter()))
        .init();
    cva_cmd::run(cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["cva-cli", "summary", "-v"]).unwrap();
        assert_eq!(cli.default_log_filter(), "debug");

        let cli = Cli::try_parse_from(["cva-cli", "summary"]).unwrap();
        assert_eq!(cli.default_log_filter(), "info");
    }

    #[test]
    fn test_render_needs_an_output_path() {
        assert!(Cli::try_parse_from(["cva-cli", "render"]).is_err());
    }
}
