use anyhow::Context as _;
use axum::http::{Method, StatusCode};
use serde_json::Value;

use super::{assert_status, to_json_body, CertificateBuilder, TestApp};

/// Create a certificate via the API and return its id.
pub async fn create_certificate(app: &TestApp, builder: CertificateBuilder) -> anyhow::Result<i64> {
    let body = builder.build();
    let (status, _headers, response_body) = app
        .request(Method::POST, "/api/certificates", Some(to_json_body(&body)?))
        .await?;
    assert_status(status, StatusCode::CREATED, "create certificate");

    let created: Value = serde_json::from_slice(&response_body)?;
    created["id"].as_i64().context("created certificate id")
}

/// Insert a user directly; users have no write API surface.
pub async fn seed_user(app: &TestApp, username: &str) -> anyhow::Result<i64> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO app_user (username, first_name, last_name) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind("Test")
    .bind("User")
    .fetch_one(&app.state.db_pool)
    .await
    .context("seed user")?;
    Ok(id)
}

/// Place an order via the API and return the order JSON.
pub async fn place_order(
    app: &TestApp,
    user_id: i64,
    certificate_id: i64,
) -> anyhow::Result<Value> {
    let body = serde_json::json!({ "certificateId": certificate_id });
    let (status, _headers, response_body) = app
        .request(
            Method::POST,
            &format!("/api/users/{user_id}/orders"),
            Some(to_json_body(&body)?),
        )
        .await?;
    assert_status(status, StatusCode::CREATED, "place order");

    Ok(serde_json::from_slice(&response_body)?)
}
