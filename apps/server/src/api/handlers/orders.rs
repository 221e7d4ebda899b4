//! Order handlers - scoped under their owning user

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value as JsonValue;

use crate::api::{links::attach_links, query::parse_query_items, url as api_url};
use crate::models::Order;
use crate::services::orders::CreateOrderRequest;
use crate::state::AppState;
use crate::Result;

fn order_to_wire(base_url: &str, order: &Order) -> Result<JsonValue> {
    let wire = super::to_wire(order)?;

    let mut relations = vec![
        (
            "self",
            format!("{}/users/{}/orders/{}", base_url, order.user_id, order.id),
        ),
        ("user", format!("{}/users/{}", base_url, order.user_id)),
    ];
    if let Some(certificate_id) = order.certificate_id {
        relations.push((
            "certificate",
            format!("{}/certificates/{}", base_url, certificate_id),
        ));
    }

    Ok(attach_links(wire, &relations))
}

/// List a user's orders (GET /api/users/:id/orders)
pub async fn list_user_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response> {
    let items = parse_query_items(raw_query.as_deref())?;
    let base_url = api_url::base_url_from_headers(&headers);

    let page = state.order_service.list_for_user(user_id, &items).await?;
    let page = super::page_to_wire(page, |order| order_to_wire(&base_url, order))?;

    Ok(Json(page).into_response())
}

/// Read one of a user's orders (GET /api/users/:id/orders/:order_id)
pub async fn read_user_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((user_id, order_id)): Path<(i64, i64)>,
) -> Result<Response> {
    let order = state.order_service.get_for_user(user_id, order_id).await?;
    let base_url = api_url::base_url_from_headers(&headers);

    Ok(Json(order_to_wire(&base_url, &order)?).into_response())
}

/// Place an order (POST /api/users/:id/orders)
///
/// The certificate's current price is snapshotted into the order.
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Response> {
    let order = state.order_service.create(user_id, request).await?;
    let base_url = api_url::base_url_from_headers(&headers);
    let location = format!("{}/users/{}/orders/{}", base_url, user_id, order.id);

    let mut response =
        (StatusCode::CREATED, Json(order_to_wire(&base_url, &order)?)).into_response();
    if let Ok(value) = location.parse() {
        response.headers_mut().insert(header::LOCATION, value);
    }

    Ok(response)
}
