//! URL helpers for building absolute API base URLs.

use axum::http::HeaderMap;

/// Build the API base URL (`{scheme}://{host}/api`) using forwarding headers
/// when present. Needed for correct resource links behind reverse proxies.
pub fn base_url_from_headers(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .or_else(|| headers.get("x-forwarded-scheme"))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get("host"))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    format!("{}://{}/api", scheme, host)
}
