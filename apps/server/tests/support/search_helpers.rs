use axum::http::{Method, StatusCode};
use serde_json::Value;

use super::{assert_status, TestApp};

/// Run a certificate search and return the page envelope.
pub async fn search_certificates(app: &TestApp, query: &str) -> anyhow::Result<Value> {
    let path = if query.is_empty() {
        "/api/certificates".to_string()
    } else {
        format!("/api/certificates?{query}")
    };

    let (status, _headers, body) = app.request(Method::GET, &path, None).await?;
    assert_status(status, StatusCode::OK, "search certificates");

    Ok(serde_json::from_slice(&body)?)
}

/// Run a certificate search expecting a client error; returns the status.
pub async fn search_certificates_expecting_error(
    app: &TestApp,
    query: &str,
) -> anyhow::Result<StatusCode> {
    let path = format!("/api/certificates?{query}");
    let (status, _headers, _body) = app.request(Method::GET, &path, None).await?;
    assert!(
        status.is_client_error(),
        "expected client error for query '{query}', got {status}"
    );
    Ok(status)
}
