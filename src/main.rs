//! CLI entry point for the imgrab tool.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use imgrab_core::{AbortPolicy, Collector, ScrapeConfig, ScrapeError, ScrapeRequest};
use tracing::{debug, error, info};

mod cli;
mod progress;

use cli::Args;
use progress::ConsoleProgress;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    // Resolve query and limit: flags first, interactive prompts as fallback.
    // A non-numeric prompted limit maps to 0 and is rejected by the
    // collector's precondition check, so no parsing error surfaces here.
    let interactive = io::stdin().is_terminal();
    let query = match (args.query, interactive) {
        (Some(query), _) => query,
        (None, true) => prompt("Enter a search query: ")?,
        (None, false) => String::new(),
    };
    let limit = match (args.limit, interactive) {
        (Some(limit), _) => limit,
        (None, true) => prompt("Enter the limit (number of images to download): ")?
            .parse()
            .unwrap_or(0),
        (None, false) => 0,
    };

    let request = ScrapeRequest::new(query, limit);
    let config = ScrapeConfig {
        output_dir: args.output_dir,
        inter_item_delay: Duration::from_millis(args.delay),
        abort_policy: if args.keep_partial {
            AbortPolicy::KeepPartial
        } else {
            AbortPolicy::DiscardPartial
        },
    };
    let output_dir = config.output_dir.clone();
    let collector = Collector::new(config);

    let show_progress = !args.quiet && io::stderr().is_terminal();
    let progress = ConsoleProgress::new(show_progress);

    info!("Starting image scraping");

    // Failures are reported on the console; the process still exits 0
    match collector.collect(&request, &progress).await {
        Ok(images) if images.is_empty() => {
            error!("No images were scraped");
        }
        Ok(images) => {
            info!(
                count = images.len(),
                output_dir = %output_dir.display(),
                "Image scraping completed successfully"
            );
        }
        Err(e @ ScrapeError::InvalidInput { .. }) => {
            error!("{e}");
        }
        Err(e) => {
            error!(error = %e, "An error occurred during scraping");
        }
    }

    Ok(())
}

/// Reads one line of interactive input after printing `label`.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
