//! HTTP plumbing shared by every Chargify operation.

use std::fmt;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::ChargifyConfig;
use crate::error::ChargifyError;

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Default request timeout.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(30_000);

/// HTTP settings for a [`ChargifyClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Time allowed to establish a connection.
    pub connect_timeout: Duration,
    /// Time allowed for a whole request once sent.
    pub read_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

/// Chargify API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ChargifyClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for ChargifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChargifyClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl ChargifyClient {
    /// Create a client for `https://{subdomain}.chargify.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ChargifyError::Configuration`] if the subdomain is empty or
    /// does not form a valid host.
    pub fn new(
        subdomain: impl AsRef<str>,
        api_key: impl Into<String>,
    ) -> Result<Self, ChargifyError> {
        let subdomain = subdomain.as_ref().trim();
        if subdomain.is_empty() {
            return Err(ChargifyError::Configuration(
                "subdomain must not be empty".into(),
            ));
        }
        Self::with_options(
            format!("https://{subdomain}.chargify.com"),
            api_key,
            ClientOptions::default(),
        )
    }

    /// Create a client against an explicit base URL.
    ///
    /// A trailing `/` on `base_url` is ignored; a path prefix is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ChargifyError::Configuration`] if the URL cannot be parsed or
    /// cannot carry a path, and [`ChargifyError::Http`] if the HTTP client
    /// cannot be built.
    pub fn with_options(
        base_url: impl AsRef<str>,
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ChargifyError> {
        let raw = base_url.as_ref().trim_end_matches('/');
        let base_url = Url::parse(raw)
            .map_err(|e| ChargifyError::Configuration(format!("invalid base URL {raw:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ChargifyError::Configuration(format!(
                "base URL {raw:?} cannot carry a path"
            )));
        }

        let client = Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.read_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`ChargifyClient::with_options`], plus a configuration error
    /// when neither a base URL nor a subdomain is set.
    pub fn from_config(config: &ChargifyConfig) -> Result<Self, ChargifyError> {
        Self::with_options(config.base_url()?, config.api_key.clone(), config.options())
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Build `{base}/{segments...}.json`, percent-encoding each segment.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, ChargifyError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                ChargifyError::Configuration("base URL cannot carry a path".into())
            })?;
            path.pop_if_empty();
            if let Some((last, rest)) = segments.split_last() {
                path.extend(rest);
                path.push(&format!("{last}.json"));
            }
        }
        Ok(url)
    }

    /// Start an authenticated request to the given path.
    pub(crate) fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, ChargifyError> {
        let url = self.url(segments)?;
        tracing::debug!(method = %method, path = url.path(), "Chargify request");
        Ok(self
            .client
            .request(method, url)
            .basic_auth(&self.api_key, Some("x"))
            .header(ACCEPT, "application/json"))
    }

    /// Decode a successful response body, or map the failure.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ChargifyError> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Like [`Self::handle_response`], but a 404 yields `None`.
    pub(crate) async fn handle_optional<T: DeserializeOwned>(
        response: Response,
    ) -> Result<Option<T>, ChargifyError> {
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(path = response.url().path(), "Chargify resource not found");
            return Ok(None);
        }
        Self::handle_response(response).await.map(Some)
    }

    /// Check the status of a response whose body is not needed.
    pub(crate) async fn handle_empty(response: Response) -> Result<(), ChargifyError> {
        Self::check_status(response).await.map(drop)
    }

    async fn check_status(response: Response) -> Result<Response, ChargifyError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), path = %path, "Chargify request failed");
        Err(ChargifyError::from_response(status, &body))
    }
}
