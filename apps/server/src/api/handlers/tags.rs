//! Tag handlers

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value as JsonValue;

use crate::api::{links::attach_links, query::parse_query_items, url as api_url};
use crate::models::Tag;
use crate::services::tags::CreateTagRequest;
use crate::state::AppState;
use crate::{Error, Result};

fn tag_to_wire(base_url: &str, tag: &Tag) -> Result<JsonValue> {
    let wire = super::to_wire(tag)?;
    Ok(attach_links(
        wire,
        &[
            ("self", format!("{}/tags/{}", base_url, tag.id)),
            ("collection", format!("{}/tags", base_url)),
        ],
    ))
}

/// List tags (GET /api/tags)
pub async fn list_tags(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
) -> Result<Response> {
    let items = parse_query_items(raw_query.as_deref())?;
    let base_url = api_url::base_url_from_headers(&headers);

    let page = state.tag_service.list(&items).await?;
    let page = super::page_to_wire(page, |tag| tag_to_wire(&base_url, tag))?;

    Ok(Json(page).into_response())
}

/// Read a tag (GET /api/tags/:id)
pub async fn read_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Response> {
    let tag = state.tag_service.get(id).await?;
    let base_url = api_url::base_url_from_headers(&headers);

    Ok(Json(tag_to_wire(&base_url, &tag)?).into_response())
}

/// Create a tag (POST /api/tags)
///
/// Duplicate names are rejected with 409.
pub async fn create_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateTagRequest>,
) -> Result<Response> {
    let tag = state.tag_service.create(request).await?;
    let base_url = api_url::base_url_from_headers(&headers);
    let location = format!("{}/tags/{}", base_url, tag.id);

    let mut response = (StatusCode::CREATED, Json(tag_to_wire(&base_url, &tag)?)).into_response();
    if let Ok(value) = location.parse() {
        response.headers_mut().insert(header::LOCATION, value);
    }

    Ok(response)
}

/// Delete a tag (DELETE /api/tags/:id)
pub async fn delete_tag(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response> {
    state.tag_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// The most widely used tag among orders of the highest-spending user
/// (GET /api/tags/most-used)
pub async fn most_used_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let tag = state
        .tag_service
        .most_used_of_top_spender()
        .await?
        .ok_or_else(|| Error::NotFound("no orders have been placed yet".to_string()))?;
    let base_url = api_url::base_url_from_headers(&headers);

    Ok(Json(tag_to_wire(&base_url, &tag)?).into_response())
}
