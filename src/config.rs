use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_URLS_FILE: &str = "urls.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "game_prices.html";
pub const DEFAULT_REFRESH_INTERVAL_SECONDS: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub urls_file: String,
    pub output_file: String,
    /// Used for both the pause between passes and the page's meta-refresh.
    pub refresh_interval_seconds: u64,
    pub user_agent: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Built-in defaults only; the URL list is the sole operator input.
        let settings = config::Config::builder()
            .set_default("urls_file", DEFAULT_URLS_FILE)?
            .set_default("output_file", DEFAULT_OUTPUT_FILE)?
            .set_default("refresh_interval_seconds", DEFAULT_REFRESH_INTERVAL_SECONDS as i64)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .build()
            .context("Failed to build configuration")?;

        settings
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls_file: DEFAULT_URLS_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            refresh_interval_seconds: DEFAULT_REFRESH_INTERVAL_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
