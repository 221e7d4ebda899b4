use crate::support::*;
use axum::http::{Method, StatusCode};
use serde_json::Value;

#[tokio::test]
async fn users_are_listed_paginated() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for i in 0..3 {
                seed_user(app, &format!("user_{i}")).await?;
            }

            let (status, _headers, body) = app
                .request(Method::GET, "/api/users?page=1&pageSize=2", None)
                .await?;
            assert_status(status, StatusCode::OK, "list users");

            let page: Value = serde_json::from_slice(&body)?;
            assert_page_meta(&page, 1, 2, 2, 3)?;

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn read_user_carries_orders_link() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let id = seed_user(app, "linked").await?;

            let (status, _headers, body) = app
                .request(Method::GET, &format!("/api/users/{id}"), None)
                .await?;
            assert_status(status, StatusCode::OK, "read user");

            let user: Value = serde_json::from_slice(&body)?;
            assert_eq!(user["username"], "linked");
            assert_has_link(&user, "self")?;
            assert_has_link(&user, "orders")?;

            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn read_missing_user_is_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) =
                app.request(Method::GET, "/api/users/999999", None).await?;
            assert_status(status, StatusCode::NOT_FOUND, "read missing user");

            Ok(())
        })
    })
    .await
}
