use std::path::Path;

use tracing::error;

use crate::error::{MonitorError, Result};

/// Split a URL list into trimmed, non-blank lines, keeping order and duplicates.
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn read_url_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MonitorError::UrlList {
            path: path.display().to_string(),
            source,
        })?;

    Ok(parse_url_list(&content))
}

/// Like [`read_url_list`] but an unreadable file means "no games this pass".
pub async fn load_urls(path: impl AsRef<Path>) -> Vec<String> {
    match read_url_list(path).await {
        Ok(urls) => urls,
        Err(e) => {
            error!("{}", e);
            Vec::new()
        }
    }
}
