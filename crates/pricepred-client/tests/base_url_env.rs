//! Base-URL resolution precedence
//!
//! Kept in its own test binary because it mutates process environment.

use pricepred_client::{api_base_url, BASE_URL_ENV, DEFAULT_BASE_URL};

#[test]
fn env_var_overrides_default_and_empty_is_ignored() {
    std::env::remove_var(BASE_URL_ENV);
    assert_eq!(api_base_url(), DEFAULT_BASE_URL);

    std::env::set_var(BASE_URL_ENV, "http://staging:8000/api");
    assert_eq!(api_base_url(), "http://staging:8000/api");

    std::env::set_var(BASE_URL_ENV, "");
    assert_eq!(api_base_url(), DEFAULT_BASE_URL);

    std::env::remove_var(BASE_URL_ENV);
}
