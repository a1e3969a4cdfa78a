/// One region's offer as displayed on the comparison page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecord {
    pub region: String,
    /// Original formatting kept, e.g. `฿1,234`.
    pub price: String,
}

impl PriceRecord {
    pub fn new(region: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            price: price.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GamePage {
    pub title: String,
    pub image_url: Option<String>,
    pub top_prices: Vec<PriceRecord>,
    pub source_url: String,
}

/// Result of one URL in a pass. Every listed URL yields exactly one entry.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEntry {
    Found(GamePage),
    Failed { url: String },
}

impl GameEntry {
    pub fn url(&self) -> &str {
        match self {
            GameEntry::Found(page) => &page.source_url,
            GameEntry::Failed { url } => url,
        }
    }

    /// Whether the entry renders as a priced card: it needs a title and at
    /// least one price, otherwise the dashboard shows it as a failed fetch.
    pub fn is_found(&self) -> bool {
        match self {
            GameEntry::Found(page) => !page.title.is_empty() && !page.top_prices.is_empty(),
            GameEntry::Failed { .. } => false,
        }
    }
}
