//! Catalog API routes
//!
//! All routes are nested under `/api`. Certificate search is the collection
//! GET; the `most-used` tag route is registered before `/tags/:id` so the
//! literal segment wins over the parameterized one.

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{certificates, orders, tags, users};
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Certificates: search + CRUD
        .route(
            "/certificates",
            get(certificates::search_certificates).post(certificates::create_certificate),
        )
        .route(
            "/certificates/:id",
            get(certificates::read_certificate)
                .patch(certificates::update_certificate)
                .delete(certificates::delete_certificate),
        )
        // Tags (exact routes before parameterized ones)
        .route("/tags/most-used", get(tags::most_used_tag))
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route("/tags/:id", get(tags::read_tag).delete(tags::delete_tag))
        // Users and their orders
        .route("/users", get(users::list_users))
        .route("/users/:id", get(users::read_user))
        .route(
            "/users/:id/orders",
            get(orders::list_user_orders).post(orders::create_order),
        )
        .route("/users/:id/orders/:order_id", get(orders::read_user_order))
}
