//! HTTP client implementation

use reqwest::Response;
use serde::Serialize;
use tracing::debug;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
};

/// Production HTTP client
///
/// Wraps a pooled `reqwest::Client` built from [`HttpConfig`]. Every response
/// with a non-2xx status is converted into [`HttpError::HttpStatus`] carrying
/// the body text, so callers only ever see successful responses.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .redirect(if config.max_redirects > 0 {
                reqwest::redirect::Policy::limited(config.max_redirects)
            } else {
                reqwest::redirect::Policy::none()
            });

        let inner = builder
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Create HTTP client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpConfig::default())
    }

    /// Get underlying reqwest client (for advanced usage)
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Get configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Execute a GET request with ordered query parameters
    ///
    /// An empty `params` slice leaves the URL untouched; pairs are appended
    /// in slice order.
    pub async fn get(&self, url: &str, params: &[(String, String)]) -> Result<Response> {
        let url = url
            .parse::<url::Url>()
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        debug!("HTTP GET: {url}");

        let mut request = self.inner.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }

        Self::check_status(request.send().await.map_err(HttpError::RequestFailed)?).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post_json<B>(&self, url: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = url
            .parse::<url::Url>()
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        debug!("HTTP POST: {url}");

        let response = self
            .inner
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(HttpError::RequestFailed)?;

        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            return Err(HttpError::HttpStatus {
                status: response.status(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string()),
            });
        }

        Ok(response)
    }
}
