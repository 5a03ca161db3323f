//! Data models for prediction requests and responses

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lease::format_remaining_lease;

/// Raw prediction form state
///
/// Typed mirror of the dwelling form: every field the user fills in, with
/// the two remaining-lease components independently optional. No validation
/// happens here; range and type checking is the backend's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    /// Transaction month (1-12)
    pub transaction_month: u8,
    /// Transaction year
    pub transaction_year: u16,
    /// Flat type (e.g. "4 ROOM")
    pub flat_type: String,
    /// Town name
    pub town: String,
    /// Block number
    pub block: String,
    /// Street name
    pub street_name: String,
    /// Storey range (e.g. "04 TO 06")
    pub storey_range: String,
    /// Floor area in square meters
    pub floor_area_sqm: f64,
    /// Flat model (e.g. "Model A")
    pub flat_model: String,
    /// Lease commencement year
    pub lease_commence_date: u16,
    /// Remaining lease, years component
    pub remaining_lease_years: Option<u32>,
    /// Remaining lease, months component
    pub remaining_lease_months: Option<u32>,
}

/// Canonical prediction payload sent to the backend
///
/// Field names match the wire format exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub month: u8,
    pub year: u16,
    pub flat_type: String,
    pub town: String,
    pub block: String,
    pub street_name: String,
    pub storey_range: String,
    pub floor_area_sqm: f64,
    pub flat_model: String,
    pub lease_commence_date: u16,
    /// Formatted remaining lease; never `"0 years 0 months"`
    pub remaining_lease: String,
}

impl PredictionInput {
    /// Build the canonical payload from raw form state
    ///
    /// Copies every field verbatim and derives `remaining_lease` from the
    /// form's two optional components. Deterministic: identical forms yield
    /// field-for-field identical payloads.
    pub fn from_form(form: &PredictionForm) -> Self {
        Self {
            month: form.transaction_month,
            year: form.transaction_year,
            flat_type: form.flat_type.clone(),
            town: form.town.clone(),
            block: form.block.clone(),
            street_name: form.street_name.clone(),
            storey_range: form.storey_range.clone(),
            floor_area_sqm: form.floor_area_sqm,
            flat_model: form.flat_model.clone(),
            lease_commence_date: form.lease_commence_date,
            remaining_lease: format_remaining_lease(
                form.remaining_lease_years,
                form.remaining_lease_months,
            ),
        }
    }
}

impl From<&PredictionForm> for PredictionInput {
    fn from(form: &PredictionForm) -> Self {
        Self::from_form(form)
    }
}

/// A single predicted price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted resale price
    pub price: f64,
}

/// Model availability, as reported by `/model/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStatus {
    /// Whether the backend has a model loaded
    pub loaded: bool,
}

/// One candidate value for a varied parameter and its predicted price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationItem {
    /// Candidate value (string or number, backend-defined)
    pub value: Value,
    /// Predicted price at this value
    pub price: f64,
    /// Absolute difference from the base prediction
    pub difference: f64,
    /// Percentage difference from the base prediction
    pub percentage_difference: f64,
}

/// Price sensitivity across one parameter's alternative values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterVariation {
    /// Varied parameter name (e.g. "flat_model")
    pub parameter: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// The input's own value for this parameter (string or number)
    pub base_value: Value,
    /// Candidate values in backend order
    pub variations: Vec<VariationItem>,
}

/// Base prediction plus per-parameter sensitivity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionWithVariationsResult {
    /// Predicted price for the submitted input
    pub base_prediction: f64,
    /// Sensitivity across varied parameters, in backend order
    pub variations: Vec<ParameterVariation>,
}
