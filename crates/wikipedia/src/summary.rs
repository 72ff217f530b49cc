use std::time::Duration;

use crate::prelude::Error;
use wikipedia_core::summary::{build_url, parse_summary, ArticleSummary, API_URL, DEFAULT_LANG};

/// Seconds to wait for the upstream API before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Inputs of a random summary fetch
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// URL template with a `{lang}` placeholder
    pub api_url: String,
    /// Language edition, used as the subdomain
    pub lang: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchConfig {
    /// Request URL for this configuration
    pub fn url(&self) -> String {
        build_url(&self.api_url, &self.lang)
    }
}

/// Create the HTTP client used for the summary request
pub fn create_client(config: &FetchConfig) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::transport(&e))
}

/// Fetch and validate the summary of a random article
///
/// Sends a single GET request. A connection failure, a timeout or a 4xx/5xx
/// status is a [`Error::Transport`]; a body that is not a valid summary is a
/// [`Error::Validation`].
pub async fn fetch_random_summary(
    client: &reqwest::Client,
    config: &FetchConfig,
) -> Result<ArticleSummary, Error> {
    let url = config.url();
    log::debug!("GET {url} (timeout: {:?})", config.timeout);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::transport(&e))?;

    let status = response.status();
    log::debug!("{url} answered {status}");

    if status.is_client_error() || status.is_server_error() {
        log::warn!("upstream returned {status} for {url}");
        return Err(Error::Transport(format!("HTTP {status} for url {url}")));
    }

    let body = response.text().await.map_err(|e| Error::transport(&e))?;

    Ok(parse_summary(&body)?)
}
