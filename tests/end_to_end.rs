//! End-to-end flows across the transport and client crates

use std::error::Error as _;
use std::sync::Arc;

use pricepred_client::{ModelClient, PredictionForm, TownFilter, VisualizationClient};
use pricepred_http::{HttpClient, HttpConfig};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bedok_form() -> PredictionForm {
    PredictionForm {
        transaction_month: 6,
        transaction_year: 2023,
        flat_type: "4 ROOM".to_string(),
        town: "BEDOK".to_string(),
        block: "123".to_string(),
        street_name: "BEDOK NORTH".to_string(),
        storey_range: "04 TO 06".to_string(),
        floor_area_sqm: 95.0,
        flat_model: "Model A".to_string(),
        lease_commence_date: 1990,
        remaining_lease_years: Some(0),
        remaining_lease_months: Some(0),
    }
}

/// The full prediction-page flow: check the model, predict, then pull a
/// visualization, all through one shared transport.
#[tokio::test]
async fn prediction_page_flow_against_one_backend() {
    let server = MockServer::start().await;
    let base_url = format!("{}/api", server.uri());

    Mock::given(method("GET"))
        .and(path("/api/model/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"loaded": true})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .and(body_json(json!({
            "month": 6,
            "year": 2023,
            "flat_type": "4 ROOM",
            "town": "BEDOK",
            "block": "123",
            "street_name": "BEDOK NORTH",
            "storey_range": "04 TO 06",
            "floor_area_sqm": 95.0,
            "flat_model": "Model A",
            "lease_commence_date": 1990,
            "remaining_lease": "1 years 0 months",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"price": 452310.5})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/visualizations/price-trends"))
        .and(query_param("towns[0]", "BEDOK"))
        .and(query_param("flatType", "4 ROOM"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"trends": [1, 2, 3]})))
        .expect(1)
        .mount(&server)
        .await;

    let http = Arc::new(HttpClient::new(HttpConfig::default()).unwrap());
    let model = ModelClient::with_client(Arc::clone(&http), base_url.clone());
    let visualizations = VisualizationClient::with_client(http, base_url);

    assert!(model.status().await.unwrap());

    let prediction = model.predict(&bedok_form()).await.unwrap();
    assert_eq!(prediction.price, 452310.5);

    let trends = visualizations
        .price_trends(
            Some(TownFilter::Multiple(vec!["BEDOK".to_string()])),
            Some("4 ROOM"),
        )
        .await
        .unwrap();
    assert_eq!(trends, json!({"trends": [1, 2, 3]}));
}

/// A transport failure during the heatmap query surfaces the fixed
/// operation message, with the underlying error kept as the source.
#[tokio::test]
async fn heatmap_transport_failure_yields_exact_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/visualizations/price-heatmap"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = VisualizationClient::with_base_url(format!("{}/api", server.uri())).unwrap();
    let err = client.price_heatmap(Some(2023)).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch price heatmap data");
    assert!(err.source().is_some());
}

/// A backend that is down entirely (connection refused) collapses to the
/// same per-operation failure shape as an HTTP error status.
#[tokio::test]
async fn unreachable_backend_yields_same_failure_shape() {
    // Bind-then-drop leaves a port nothing is listening on.
    let server = MockServer::start().await;
    let base_url = format!("{}/api", server.uri());
    drop(server);

    let client = VisualizationClient::with_base_url(base_url).unwrap();
    let err = client.price_heatmap(None).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch price heatmap data");
    assert!(err.source().is_some());
}
