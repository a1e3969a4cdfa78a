use scraper::{Html, Selector};
use url::Url;

use crate::error::{MonitorError, Result};
use crate::models::{GamePage, PriceRecord, UNKNOWN_TITLE};
use crate::parsers::{element_text, rank_top_prices};
use crate::scrapers::PriceExtractor;

const TITLE_SELECTOR: &str = "h1.mt8.lc3.lcm2";
const HERO_PICTURE_SELECTOR: &str = "picture.game-hero-image";
const PRICE_ROW_SELECTOR: &str = "tr.pointer";
const PRICE_VALUE_SELECTOR: &str = "td.price-value";

/// Extractor for the comparison site's game pages: a title heading, a hero
/// picture and one `tr.pointer` row per region.
pub struct PriceTableExtractor {
    title: Selector,
    hero_picture: Selector,
    img: Selector,
    price_row: Selector,
    cell: Selector,
    price_value: Selector,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| MonitorError::Selector(format!("{css}: {e:?}")))
}

impl PriceTableExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            title: selector(TITLE_SELECTOR)?,
            hero_picture: selector(HERO_PICTURE_SELECTOR)?,
            img: selector("img")?,
            price_row: selector(PRICE_ROW_SELECTOR)?,
            cell: selector("td")?,
            price_value: selector(PRICE_VALUE_SELECTOR)?,
        })
    }

    fn extract_title(&self, document: &Html) -> String {
        document
            .select(&self.title)
            .next()
            .map(element_text)
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
    }

    fn extract_image(&self, document: &Html, page_url: &str) -> Option<String> {
        let picture = document.select(&self.hero_picture).next()?;
        let img = picture.select(&self.img).next()?;
        let src = img.value().attr("src").filter(|s| !s.trim().is_empty())?;

        // Relative sources are resolved against the page so the dashboard can load them
        let resolved = Url::parse(page_url)
            .and_then(|base| base.join(src))
            .map(|u| u.to_string())
            .unwrap_or_else(|_| src.to_string());

        Some(resolved)
    }

    fn extract_prices(&self, document: &Html) -> Result<Vec<PriceRecord>> {
        let mut records = Vec::new();

        for (index, row) in document.select(&self.price_row).enumerate() {
            let region = row
                .select(&self.cell)
                .nth(1)
                .map(element_text)
                .ok_or(MonitorError::MissingCell {
                    row: index + 1,
                    cell: "region",
                })?;

            let price = row
                .select(&self.price_value)
                .next()
                .map(element_text)
                .ok_or(MonitorError::MissingCell {
                    row: index + 1,
                    cell: "price",
                })?;

            records.push(PriceRecord::new(region, price));
        }

        Ok(records)
    }
}

impl PriceExtractor for PriceTableExtractor {
    fn extract(&self, page_url: &str, html: &str) -> Result<GamePage> {
        let document = Html::parse_document(html);

        let title = self.extract_title(&document);
        let image_url = self.extract_image(&document, page_url);
        let top_prices = rank_top_prices(self.extract_prices(&document)?)?;

        Ok(GamePage {
            title,
            image_url,
            top_prices,
            source_url: page_url.to_string(),
        })
    }
}
