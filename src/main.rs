// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr, controlled by RUST_LOG)
// 2. Load .env and parse command-line arguments
// 3. Run the pipeline: fetch contributors -> resolve profiles -> render
// 4. Exit with proper code (0 = success, 1 = error)
// =============================================================================

mod cli;        // src/cli.rs - command-line parsing
mod config;     // src/config.rs - policy constants and validated settings
mod github;     // src/github/ - GitHub API access
mod pipeline;   // src/pipeline.rs - the end-to-end flow
mod render;     // src/render/ - markdown table output

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use github::HttpSource;

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    // A missing .env file is fine; GITHUB_TOKEN may come from the shell
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let token = std::env::var("GITHUB_TOKEN").ok();
    let settings = cli.into_settings(token)?;

    if settings.token.is_none() {
        tracing::warn!("GITHUB_TOKEN is not set; anonymous requests are limited to 60 per hour");
    }

    let source = HttpSource::new(settings.token.as_deref(), settings.timeout)?;
    let report = pipeline::run(&source, &settings).await?;

    if let Some(path) = &settings.output {
        println!(
            "✅ Listed {} of {} contributor(s) from {} page(s) in {}",
            report.listed,
            report.qualifying,
            report.pages,
            path.display()
        );
    }

    Ok(())
}

// Logs go to stderr so `--stdout` output stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("contributors_table=info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
