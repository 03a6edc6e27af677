// Error types for the catalog client.
// Separates API and record validation failures from cache collaborator failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid record data: {0}")]
    Validation(#[source] serde_json::Error),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Missing MARVEL_PUBLIC_KEY or MARVEL_PRIVATE_KEY environment variable")]
    MissingKeys,
}

impl CatalogError {
    /// True for errors reported by the API or raised while decoding its records.
    pub fn is_api_error(&self) -> bool {
        matches!(self, CatalogError::Api(_) | CatalogError::Validation(_))
    }

    /// True when the cache collaborator failed.
    pub fn is_cache_error(&self) -> bool {
        matches!(self, CatalogError::Cache(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
