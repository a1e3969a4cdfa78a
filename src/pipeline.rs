use chrono::NaiveDateTime;
use tracing::{error, info};

use crate::config::Config;
use crate::models::GameEntry;
use crate::render::{format_timestamp, render_dashboard};
use crate::scrapers::{PageFetcher, PriceExtractor};
use crate::utils::sources::load_urls;
use crate::utils::write::write_atomically;

/// Outcome of a single pass over the URL list.
#[derive(Debug, Clone)]
pub struct PassReport {
    pub entries: Vec<GameEntry>,
    pub document: String,
    pub written: bool,
}

impl PassReport {
    pub fn found(&self) -> usize {
        self.entries.iter().filter(|e| e.is_found()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.found()
    }
}

pub struct Pipeline {
    config: Config,
    fetcher: Box<dyn PageFetcher>,
    extractor: Box<dyn PriceExtractor>,
}

impl Pipeline {
    pub fn new(
        config: Config,
        fetcher: Box<dyn PageFetcher>,
        extractor: Box<dyn PriceExtractor>,
    ) -> Self {
        Self {
            config,
            fetcher,
            extractor,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the URL list, scrape every page in order, and overwrite the
    /// dashboard. Never fails: every error degrades to a failure card or a
    /// skipped write and is logged.
    pub async fn run_once(&self, captured_at: NaiveDateTime) -> PassReport {
        let urls = load_urls(&self.config.urls_file).await;
        info!("Checking {} game pages", urls.len());

        let mut entries = Vec::with_capacity(urls.len());
        for url in urls {
            entries.push(self.process_url(url).await);
        }

        let document = render_dashboard(
            &entries,
            &captured_at,
            self.config.refresh_interval_seconds,
        );

        let written = match write_atomically(&self.config.output_file, &document).await {
            Ok(()) => {
                info!(
                    "HTML file has been created successfully: {} (Last Update: {})",
                    self.config.output_file,
                    format_timestamp(&captured_at)
                );
                true
            }
            Err(e) => {
                error!("{}", e);
                false
            }
        };

        PassReport {
            entries,
            document,
            written,
        }
    }

    async fn process_url(&self, url: String) -> GameEntry {
        let html = match self.fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                error!("{}", e);
                return GameEntry::Failed { url };
            }
        };

        match self.extractor.extract(&url, &html) {
            Ok(page) => GameEntry::Found(page),
            Err(e) => {
                error!("Failed to extract prices from {}: {}", url, e);
                GameEntry::Failed { url }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use crate::models::PriceRecord;
    use crate::scrapers::PriceTableExtractor;
    use crate::utils::http::{create_client, HttpFetcher};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GAME_PAGE: &str = r#"<html><body>
<h1 class="mt8 lc3 lcm2">Hollow Knight</h1>
<picture class="game-hero-image"><img src="/hero/hk.jpg"></picture>
<table>
<tr class="pointer"><td></td><td>Argentina</td><td class="price-value">฿100</td></tr>
<tr class="pointer"><td></td><td>Brazil</td><td class="price-value">฿50</td></tr>
<tr class="pointer"><td></td><td>Chile</td><td class="price-value">฿75</td></tr>
<tr class="pointer"><td></td><td>Denmark</td><td class="price-value">฿20</td></tr>
</table>
</body></html>"#;

    const BROKEN_PAGE: &str = r#"<html><body>
<h1 class="mt8 lc3 lcm2">Broken</h1>
<table><tr class="pointer"><td></td><td>Peru</td><td class="price-value">soon</td></tr></table>
</body></html>"#;

    fn at(second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, second)
            .unwrap()
    }

    fn pipeline(dir: &Path) -> Pipeline {
        let config = Config {
            urls_file: dir.join("urls.txt").display().to_string(),
            output_file: dir.join("game_prices.html").display().to_string(),
            ..Config::default()
        };

        Pipeline::new(
            config,
            Box::new(HttpFetcher::new(create_client(DEFAULT_USER_AGENT).unwrap())),
            Box::new(PriceTableExtractor::new().unwrap()),
        )
    }

    async fn site() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/game/hollow-knight"))
            .respond_with(ResponseTemplate::new(200).set_body_string(GAME_PAGE))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/game/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BROKEN_PAGE))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/game/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn one_card_per_listed_url_in_order() {
        let server = site().await;
        let dir = tempfile::tempdir().unwrap();
        let base = server.uri();
        std::fs::write(
            dir.path().join("urls.txt"),
            format!(
                "{base}/game/gone\n\n   \n{base}/game/hollow-knight\n{base}/game/broken\nhttp://127.0.0.1:1/offline\n"
            ),
        )
        .unwrap();

        let pipeline = pipeline(dir.path());
        let report = pipeline.run_once(at(0)).await;

        assert!(report.written);
        assert_eq!(report.entries.len(), 4);
        assert_eq!(report.found(), 1);
        assert_eq!(report.failed(), 3);

        let urls: Vec<&str> = report.entries.iter().map(|e| e.url()).collect();
        assert_eq!(
            urls,
            vec![
                format!("{base}/game/gone"),
                format!("{base}/game/hollow-knight"),
                format!("{base}/game/broken"),
                "http://127.0.0.1:1/offline".to_string(),
            ]
        );

        match &report.entries[1] {
            GameEntry::Found(page) => {
                assert_eq!(page.title, "Hollow Knight");
                assert_eq!(page.image_url, Some(format!("{base}/hero/hk.jpg")));
                assert_eq!(
                    page.top_prices,
                    vec![
                        PriceRecord::new("Denmark", "฿20"),
                        PriceRecord::new("Brazil", "฿50"),
                        PriceRecord::new("Chile", "฿75"),
                    ]
                );
            }
            other => panic!("expected a priced game, got {other:?}"),
        }

        let written = std::fs::read_to_string(&pipeline.config().output_file).unwrap();
        assert_eq!(written, report.document);
        assert_eq!(written.matches("<div class=\"game\">").count(), 4);
        assert_eq!(written.matches("Could not fetch data for URL").count(), 3);
        assert!(written.contains("#3 Chile: <span>฿75</span>"));
        assert!(!written.contains("Argentina"));
    }

    #[tokio::test]
    async fn rerun_differs_only_in_timestamp() {
        let server = site().await;
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("urls.txt"),
            format!("{}/game/hollow-knight\n", server.uri()),
        )
        .unwrap();

        let pipeline = pipeline(dir.path());
        let first = pipeline.run_once(at(0)).await;
        let second = pipeline.run_once(at(15)).await;

        assert_ne!(first.document, second.document);
        assert_eq!(
            first.document.replace("2024-06-01 12:00:00", "<ts>"),
            second.document.replace("2024-06-01 12:00:15", "<ts>")
        );
    }

    #[tokio::test]
    async fn missing_url_file_renders_empty_dashboard() {
        let dir = tempfile::tempdir().unwrap();

        let pipeline = pipeline(dir.path());
        let report = pipeline.run_once(at(0)).await;

        assert!(report.entries.is_empty());
        assert!(report.written);
        let written = std::fs::read_to_string(&pipeline.config().output_file).unwrap();
        assert_eq!(written.matches("<div class=\"game\">").count(), 0);
        assert!(written.contains("Last Update: 2024-06-01 12:00:00"));
    }

    #[tokio::test]
    async fn write_failure_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            urls_file: dir.path().join("urls.txt").display().to_string(),
            output_file: dir
                .path()
                .join("no-such-dir")
                .join("game_prices.html")
                .display()
                .to_string(),
            ..Config::default()
        };
        let pipeline = Pipeline::new(
            config,
            Box::new(HttpFetcher::new(create_client(DEFAULT_USER_AGENT).unwrap())),
            Box::new(PriceTableExtractor::new().unwrap()),
        );

        let report = pipeline.run_once(at(0)).await;

        assert!(!report.written);
        assert!(report.document.contains("Last Update"));
    }
}
