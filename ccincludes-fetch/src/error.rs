use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("FAILED to retrieve data due to HTTP {status} for url: {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("FAILED to retrieve data due to ConnectionError for url: {url}")]
    Connect { url: String },

    #[error("FAILED to retrieve data due to Timeout for url: {url}")]
    Timeout { url: String },

    #[error("FAILED to decode response body for url: {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("FAILED to retrieve data for url: {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Classify a transport error raised while talking to `url`.
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        let url = url.to_string();
        if err.is_timeout() {
            FetchError::Timeout { url }
        } else if err.is_connect() {
            FetchError::Connect { url }
        } else if let Some(status) = err.status() {
            FetchError::Status { url, status }
        } else {
            FetchError::Request { url, source: err }
        }
    }

    /// The URL the failed request was aimed at, when there was one.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Connect { url }
            | FetchError::Timeout { url }
            | FetchError::Decode { url, .. }
            | FetchError::Request { url, .. }
            | FetchError::InvalidUrl(url) => Some(url.as_str()),
            FetchError::Client(_) => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
