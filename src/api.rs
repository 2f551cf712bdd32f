//! HTTP access to the arXiv search API.
//!
//! The fetcher talks to the network through the [`Transport`] trait so tests
//! can hand it canned pages. [`HttpTransport`] is the real implementation on
//! top of `reqwest`.
//!
//! There is no retry layer: a failed request or a non-success
//! status ends the run.

use crate::error::{Error, Result};
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};
use url::Url;

/// Something that can GET a URL and hand back the body.
pub trait Transport {
    /// Fetch `url` and return the response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpStatus`] for any non-2xx response and
    /// [`Error::Transport`] when the request itself fails or times out.
    async fn get(&self, url: &Url) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn get(&self, url: &Url) -> Result<String> {
        (**self).get(url).await
    }
}

/// `reqwest`-backed transport with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn get(&self, url: &Url) -> Result<String> {
        let t0 = Instant::now();
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), elapsed_ms = t0.elapsed().as_millis() as u64, "Request failed");
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}
