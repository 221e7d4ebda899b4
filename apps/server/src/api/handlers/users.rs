//! User handlers - read-only

use axum::{
    extract::{Path, RawQuery, State},
    http::HeaderMap,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value as JsonValue;

use crate::api::{links::attach_links, query::parse_query_items, url as api_url};
use crate::models::User;
use crate::state::AppState;
use crate::Result;

fn user_to_wire(base_url: &str, user: &User) -> Result<JsonValue> {
    let wire = super::to_wire(user)?;
    Ok(attach_links(
        wire,
        &[
            ("self", format!("{}/users/{}", base_url, user.id)),
            ("orders", format!("{}/users/{}/orders", base_url, user.id)),
        ],
    ))
}

/// List users (GET /api/users)
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
) -> Result<Response> {
    let items = parse_query_items(raw_query.as_deref())?;
    let base_url = api_url::base_url_from_headers(&headers);

    let page = state.user_service.list(&items).await?;
    let page = super::page_to_wire(page, |user| user_to_wire(&base_url, user))?;

    Ok(Json(page).into_response())
}

/// Read a user (GET /api/users/:id)
pub async fn read_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Response> {
    let user = state.user_service.get(id).await?;
    let base_url = api_url::base_url_from_headers(&headers);

    Ok(Json(user_to_wire(&base_url, &user)?).into_response())
}
