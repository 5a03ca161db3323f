//! Prediction operations against the model endpoints

use std::sync::Arc;

use pricepred_http::{HttpClient, HttpConfig, HttpError};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config,
    error::{request_failed, Result},
    models::{
        ModelStatus, PredictionForm, PredictionInput, PredictionResult,
        PredictionWithVariationsResult,
    },
};

/// Client for the prediction endpoints
///
/// Normalizes raw form state into the canonical [`PredictionInput`] and
/// submits it in one of two modes: a simple prediction, or a prediction with
/// backend-computed parameter variations. Which parameters vary and what the
/// candidate values are is entirely backend logic.
#[derive(Debug, Clone)]
pub struct ModelClient {
    http: Arc<HttpClient>,
    base_url: String,
}

impl ModelClient {
    /// Create a client against the configured base URL
    pub fn new() -> pricepred_http::Result<Self> {
        Self::with_base_url(config::api_base_url())
    }

    /// Create a client against a specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> pricepred_http::Result<Self> {
        let http = Arc::new(HttpClient::new(HttpConfig::model())?);
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with an injected transport
    pub fn with_client(http: Arc<HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Check whether the backend has a model loaded
    pub async fn status(&self) -> Result<bool> {
        let url = format!("{}/model/status", self.base_url);
        debug!("Checking model status: {url}");

        match self.get_status(&url).await {
            Ok(status) => Ok(status.loaded),
            Err(e) => Err(request_failed("Failed to check model status", e)),
        }
    }

    /// Predict the resale price for the given form state
    pub async fn predict(&self, form: &PredictionForm) -> Result<PredictionResult> {
        let input = PredictionInput::from_form(form);
        let url = format!("{}/predict", self.base_url);
        debug!(
            "Requesting prediction: {url} (remaining_lease: {})",
            input.remaining_lease
        );

        self.post(&url, &input)
            .await
            .map_err(|e| request_failed("Failed to predict price", e))
    }

    /// Predict the resale price plus price sensitivity across the backend's
    /// varied parameters
    pub async fn predict_with_variations(
        &self,
        form: &PredictionForm,
    ) -> Result<PredictionWithVariationsResult> {
        let input = PredictionInput::from_form(form);
        let url = format!("{}/predict-with-variations", self.base_url);
        debug!(
            "Requesting prediction with variations: {url} (remaining_lease: {})",
            input.remaining_lease
        );

        self.post(&url, &input)
            .await
            .map_err(|e| request_failed("Failed to predict price with variations", e))
    }

    async fn get_status(&self, url: &str) -> std::result::Result<ModelStatus, HttpError> {
        let response = self.http.get(url, &[]).await?;
        Ok(response.json().await?)
    }

    async fn post<T>(
        &self,
        url: &str,
        input: &PredictionInput,
    ) -> std::result::Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let response = self.http.post_json(url, input).await?;
        Ok(response.json().await?)
    }
}
