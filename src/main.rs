//! # stepwise - interactive traversal walkthrough
//!
//! Terminal driver for the stepwise core: the analog of the original
//! page's button panel and consoles. It owns a [`SessionController`],
//! feeds it UI events parsed from stdin lines, and prints the latest
//! narration and stats after each event.
//!
//! The driver is strictly a collaborator: all traversal semantics live in
//! the `stepwise-*` library crates.
//!
//! [`SessionController`]: stepwise_session::SessionController

mod cli;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::repl::Repl;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut repl = Repl::new(cli.json_stats);

    if cli.seed_demo {
        repl.seed_demo().context("failed to seed the demo graph")?;
        info!("Demo graph loaded");
    }

    repl.run().await
}

/// Initialize the tracing subscriber with env-filter support.
///
/// Defaults to `warn` so traversal narration stays readable; set
/// `RUST_LOG=debug` to watch engine transitions.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
