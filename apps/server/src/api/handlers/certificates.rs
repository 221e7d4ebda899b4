//! Certificate handlers
//!
//! The collection GET is the search endpoint: filters, tag intersection,
//! sorting, and pagination are all expressed as query parameters and parsed
//! into a `SearchCriteria` by the service.

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value as JsonValue;

use crate::api::{links::attach_links, query::parse_query_items, url as api_url};
use crate::models::Certificate;
use crate::services::certificates::{CreateCertificateRequest, UpdateCertificateRequest};
use crate::state::AppState;
use crate::Result;

fn certificate_to_wire(base_url: &str, certificate: &Certificate) -> Result<JsonValue> {
    let wire = super::to_wire(certificate)?;
    Ok(attach_links(
        wire,
        &[
            (
                "self",
                format!("{}/certificates/{}", base_url, certificate.id),
            ),
            ("collection", format!("{}/certificates", base_url)),
        ],
    ))
}

/// Search certificates (GET /api/certificates)
///
/// Query parameters: `name`, `description`, `tag` (repeatable),
/// `orderByName`, `orderByCreateDate`, `page`, `pageSize`.
pub async fn search_certificates(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
) -> Result<Response> {
    let items = parse_query_items(raw_query.as_deref())?;
    let base_url = api_url::base_url_from_headers(&headers);

    let result = state.certificate_service.search(&items).await;

    let status_label = if result.is_ok() { "ok" } else { "error" };
    crate::metrics::SEARCH_REQUESTS_TOTAL
        .with_label_values(&[status_label])
        .inc();

    let page = result?;
    crate::metrics::SEARCH_RESULTS
        .with_label_values(&["ok"])
        .observe(page.content.len() as f64);

    let page = super::page_to_wire(page, |certificate| {
        certificate_to_wire(&base_url, certificate)
    })?;

    Ok(Json(page).into_response())
}

/// Read a certificate (GET /api/certificates/:id)
pub async fn read_certificate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Response> {
    let certificate = state.certificate_service.get(id).await?;
    let base_url = api_url::base_url_from_headers(&headers);

    Ok(Json(certificate_to_wire(&base_url, &certificate)?).into_response())
}

/// Create a certificate (POST /api/certificates)
///
/// Tags named in the request are created on the fly when missing.
/// Returns 201 with a Location header.
pub async fn create_certificate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateCertificateRequest>,
) -> Result<Response> {
    let certificate = state.certificate_service.create(request).await?;
    let base_url = api_url::base_url_from_headers(&headers);
    let location = format!("{}/certificates/{}", base_url, certificate.id);

    let mut response = (
        StatusCode::CREATED,
        Json(certificate_to_wire(&base_url, &certificate)?),
    )
        .into_response();
    if let Ok(value) = location.parse() {
        response.headers_mut().insert(header::LOCATION, value);
    }

    Ok(response)
}

/// Partially update a certificate (PATCH /api/certificates/:id)
///
/// Absent fields keep their value; `tags` replaces the attached set when
/// present. `last_update_date` is touched, `create_date` never changes.
pub async fn update_certificate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCertificateRequest>,
) -> Result<Response> {
    let certificate = state.certificate_service.update(id, request).await?;
    let base_url = api_url::base_url_from_headers(&headers);

    Ok(Json(certificate_to_wire(&base_url, &certificate)?).into_response())
}

/// Delete a certificate (DELETE /api/certificates/:id)
pub async fn delete_certificate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    state.certificate_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
