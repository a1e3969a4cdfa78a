use thiserror::Error;

pub type Result<T> = std::result::Result<T, MonitorError>;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Error reading the file {path}: {source}")]
    UrlList {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error during request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status}: {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Price row {row} is missing its {cell} cell")]
    MissingCell { row: usize, cell: &'static str },

    #[error("Could not parse price {raw:?}")]
    InvalidPrice { raw: String },

    #[error("Error writing to file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
