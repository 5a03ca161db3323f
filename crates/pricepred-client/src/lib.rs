//! PricePred API client - typed facade for the HDB resale price backend
//!
//! This crate turns loose, optionally-populated form state and filter
//! criteria into well-formed requests against the prediction/visualization
//! backend, and normalizes the responses into typed result shapes.
//!
//! Two entry points mirror the backend's two surfaces:
//!
//! - [`ModelClient`] - prediction requests (`/predict`,
//!   `/predict-with-variations`) and model status
//! - [`VisualizationClient`] - the analytical query endpoints under
//!   `/visualizations/*`
//!
//! Filter encoding is centralized in [`query::FilterSet`]; the canonical
//! remaining-lease string is produced by [`lease::format_remaining_lease`].

pub mod config;
pub mod error;
pub mod lease;
pub mod model;
pub mod models;
pub mod query;
pub mod visualizations;

pub use config::{api_base_url, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use lease::{format_remaining_lease, DEFAULT_REMAINING_LEASE};
pub use model::ModelClient;
pub use models::{
    ModelStatus, ParameterVariation, PredictionForm, PredictionInput, PredictionResult,
    PredictionWithVariationsResult, VariationItem,
};
pub use query::{FilterSet, ParameterSet, TownFilter};
pub use visualizations::VisualizationClient;
