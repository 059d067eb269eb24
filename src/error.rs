use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network or HTTP failure for a single page.
    #[error("transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    /// A numeric field held text the normalizer could not turn into a float.
    #[error("cannot parse {field:?} value {value:?} as a number")]
    Parse { field: String, value: String },

    /// Expected markup was missing.
    #[error("unexpected page structure: {0}")]
    Structure(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn transport(url: &str, reason: impl Into<String>) -> Self {
        ScrapeError::Transport {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub fn parse(field: &str, value: &str) -> Self {
        ScrapeError::Parse {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        ScrapeError::Transport {
            url,
            reason: e.to_string(),
        }
    }
}

impl From<url::ParseError> for ScrapeError {
    fn from(e: url::ParseError) -> Self {
        ScrapeError::InvalidUrl(e.to_string())
    }
}
