use crate::credentials::Credentials;
use crate::error::{FetchError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Sequential HTTP fetcher. No retries: the first failure is returned to the caller.
pub struct Fetcher {
    client: Client,
    credentials: Option<Credentials>,
}

impl Fetcher {
    pub fn new(timeout: Duration, credentials: Option<Credentials>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                "ccincludes/",
                env!("CARGO_PKG_VERSION"),
                " (https://github.com/creativecommons/ccincludes)"
            ))
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            credentials,
        })
    }

    /// Warm the upstream script/style cache with an anonymous request to the site root.
    pub async fn prime(&self, origin: &str) -> Result<()> {
        let url = join(origin, "/")?;
        debug!("Priming cache via {}", url);
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url.as_str(), e))?;
        let response = check_status(url.as_str(), response)?;
        // Body is irrelevant, but draining it lets the request complete upstream
        response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url.as_str(), e))?;
        Ok(())
    }

    /// GET `url` and decode the body as JSON. Basic auth is attached when configured.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let parsed =
            Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        debug!("Fetching {}", parsed);

        let mut request = self.client.get(parsed.as_str());
        if let Some(ref creds) = self.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        let response = check_status(url, response)?;
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Resolve `path` against `origin`, e.g. `https://example.org` + `/wp-json/x`.
pub fn join(origin: &str, path: &str) -> Result<Url> {
    Url::parse(origin)
        .and_then(|base| base.join(path))
        .map_err(|e| FetchError::InvalidUrl(format!("{}{}: {}", origin, path, e)))
}

fn check_status(url: &str, response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            url: url.to_string(),
            status,
        })
    }
}
