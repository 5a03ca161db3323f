//! Backend endpoint configuration

/// Default backend base path, matching the local development server
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable that overrides [`DEFAULT_BASE_URL`]
pub const BASE_URL_ENV: &str = "PRICEPRED_API_URL";

/// Resolve the backend base URL
///
/// Precedence: `PRICEPRED_API_URL` environment variable, then the built-in
/// default. A set-but-empty variable counts as unset.
pub fn api_base_url() -> String {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
