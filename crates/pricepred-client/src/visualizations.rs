//! Analytical query operations against the visualization endpoints
//!
//! Each operation takes only the filters its endpoint understands, encodes
//! them via [`FilterSet`], and passes the response JSON through as received.
//! This layer adds no schema validation; the view layer owns the shapes.

use std::sync::Arc;

use pricepred_http::{HttpClient, HttpConfig, HttpError};
use serde_json::Value;
use tracing::debug;

use crate::{
    config,
    error::{request_failed, Result},
    query::{FilterSet, ParameterSet, TownFilter},
};

/// Client for the `/visualizations/*` analytical endpoints
#[derive(Debug, Clone)]
pub struct VisualizationClient {
    http: Arc<HttpClient>,
    base_url: String,
}

impl VisualizationClient {
    /// Create a client against the configured base URL
    pub fn new() -> pricepred_http::Result<Self> {
        Self::with_base_url(config::api_base_url())
    }

    /// Create a client against a specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> pricepred_http::Result<Self> {
        let http = Arc::new(HttpClient::new(HttpConfig::default())?);
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with an injected transport
    pub fn with_client(http: Arc<HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Price trends over time, optionally narrowed by towns and flat type
    pub async fn price_trends(
        &self,
        towns: Option<TownFilter>,
        flat_type: Option<&str>,
    ) -> Result<Value> {
        let filters = FilterSet {
            town: towns,
            flat_type: flat_type.map(str::to_string),
            ..Default::default()
        };

        self.fetch(
            "/visualizations/price-trends",
            &filters,
            "Failed to fetch price trends",
        )
        .await
    }

    /// Price distribution, optionally narrowed by town and year
    pub async fn price_distribution(
        &self,
        town: Option<&str>,
        year: Option<u16>,
    ) -> Result<Value> {
        let filters = FilterSet {
            town: town.map(TownFilter::from),
            year,
            ..Default::default()
        };

        self.fetch(
            "/visualizations/price-distribution",
            &filters,
            "Failed to fetch price distribution",
        )
        .await
    }

    /// Price versus floor area, optionally narrowed by towns, flat type and year
    pub async fn price_vs_area(
        &self,
        towns: Option<TownFilter>,
        flat_type: Option<&str>,
        year: Option<u16>,
    ) -> Result<Value> {
        let filters = FilterSet {
            town: towns,
            flat_type: flat_type.map(str::to_string),
            year,
        };

        self.fetch(
            "/visualizations/price-vs-area",
            &filters,
            "Failed to fetch price vs area data",
        )
        .await
    }

    /// Town-by-town comparison, optionally narrowed by flat type and year
    pub async fn town_comparison(
        &self,
        flat_type: Option<&str>,
        year: Option<u16>,
    ) -> Result<Value> {
        let filters = FilterSet {
            flat_type: flat_type.map(str::to_string),
            year,
            ..Default::default()
        };

        self.fetch(
            "/visualizations/town-comparison",
            &filters,
            "Failed to fetch town comparison data",
        )
        .await
    }

    /// Economic indicators, optionally narrowed by town
    pub async fn economic_indicators(&self, town: Option<&str>) -> Result<Value> {
        let filters = FilterSet {
            town: town.map(TownFilter::from),
            ..Default::default()
        };

        self.fetch(
            "/visualizations/economic-indicators",
            &filters,
            "Failed to fetch economic indicators",
        )
        .await
    }

    /// Island-wide price heatmap, optionally narrowed by year
    pub async fn price_heatmap(&self, year: Option<u16>) -> Result<Value> {
        let filters = FilterSet {
            year,
            ..Default::default()
        };

        self.fetch(
            "/visualizations/price-heatmap",
            &filters,
            "Failed to fetch price heatmap data",
        )
        .await
    }

    /// School quality impact on prices, optionally narrowed by town and year
    pub async fn school_quality_impact(
        &self,
        town: Option<&str>,
        year: Option<u16>,
    ) -> Result<Value> {
        let filters = FilterSet {
            town: town.map(TownFilter::from),
            year,
            ..Default::default()
        };

        self.fetch(
            "/visualizations/school-quality-impact",
            &filters,
            "Failed to fetch school quality impact data",
        )
        .await
    }

    /// Remaining-lease impact on prices, optionally narrowed by town and flat type
    pub async fn lease_impact(
        &self,
        town: Option<&str>,
        flat_type: Option<&str>,
    ) -> Result<Value> {
        let filters = FilterSet {
            town: town.map(TownFilter::from),
            flat_type: flat_type.map(str::to_string),
            ..Default::default()
        };

        self.fetch(
            "/visualizations/lease-impact",
            &filters,
            "Failed to fetch lease impact data",
        )
        .await
    }

    /// Floor level impact on prices, optionally narrowed by town, flat type and year
    pub async fn floor_level_analysis(
        &self,
        town: Option<&str>,
        flat_type: Option<&str>,
        year: Option<u16>,
    ) -> Result<Value> {
        let filters = FilterSet {
            town: town.map(TownFilter::from),
            flat_type: flat_type.map(str::to_string),
            year,
        };

        self.fetch(
            "/visualizations/floor-level-analysis",
            &filters,
            "Failed to fetch floor level analysis data",
        )
        .await
    }

    /// MRT proximity impact on prices, optionally narrowed by town, flat type and year
    pub async fn mrt_proximity_analysis(
        &self,
        town: Option<&str>,
        flat_type: Option<&str>,
        year: Option<u16>,
    ) -> Result<Value> {
        let filters = FilterSet {
            town: town.map(TownFilter::from),
            flat_type: flat_type.map(str::to_string),
            year,
        };

        self.fetch(
            "/visualizations/mrt-proximity-analysis",
            &filters,
            "Failed to fetch MRT proximity analysis data",
        )
        .await
    }

    async fn fetch(
        &self,
        path: &str,
        filters: &FilterSet,
        message: &'static str,
    ) -> Result<Value> {
        let params = filters.encode();
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching {url} ({} filter params)", params.len());

        match self.get_value(&url, &params).await {
            Ok(value) => Ok(value),
            Err(e) => Err(request_failed(message, e)),
        }
    }

    async fn get_value(
        &self,
        url: &str,
        params: &ParameterSet,
    ) -> std::result::Result<Value, HttpError> {
        let response = self.http.get(url, params.entries()).await?;
        Ok(response.json().await?)
    }
}
