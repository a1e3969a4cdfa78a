use async_trait::async_trait;

use crate::error::Result;
use crate::models::GamePage;

mod price_table;

pub use price_table::PriceTableExtractor;

/// Turns a fetched page body into a ranked game result.
pub trait PriceExtractor: Send + Sync {
    fn extract(&self, page_url: &str, html: &str) -> Result<GamePage>;
}

/// Retrieves the raw body of a page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}
