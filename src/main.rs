use anyhow::{Context, Result};
use tracing::{info, warn};

mod config;
mod error;
mod models;
mod parsers;
mod pipeline;
mod render;
mod scheduler;
mod scrapers;
mod utils;

use crate::config::Config;
use crate::pipeline::Pipeline;
use crate::scheduler::Scheduler;
use crate::scrapers::PriceTableExtractor;
use crate::utils::http::{create_client, HttpFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("game_price_monitor=info".parse()?),
        )
        .init();

    info!("Starting Game Price Monitor");

    let config = Config::load()?;

    let client = create_client(&config.user_agent).context("Failed to build HTTP client")?;
    let extractor = PriceTableExtractor::new().context("Failed to compile page selectors")?;

    let pause = config.refresh_interval();
    let pipeline = Pipeline::new(config, Box::new(HttpFetcher::new(client)), Box::new(extractor));
    let scheduler = Scheduler::new(pipeline, pause);

    // First Ctrl-C stops after the current pass; a second one exits right away
    tokio::select! {
        _ = scheduler.run_until(interrupted()) => {}
        _ = async {
            interrupted().await;
            interrupted().await;
        } => warn!("Interrupted again, exiting without finishing the pass"),
    }

    Ok(())
}

async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
}
