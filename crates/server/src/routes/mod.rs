//! HTTP surface: storefront routes plus the `/admin` back-office.

mod account;
mod admin;
mod categories;
mod orders;
mod plans;
mod products;
mod recommendations;
mod wishlist;

use axum::Router;
use axum::routing::{delete, get, post, put};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // storefront
        .route("/products", get(products::list))
        .route("/products/{id}", get(products::detail))
        .route("/categories", get(categories::list))
        .route("/meal-plans", get(plans::list))
        .route("/recommendations", post(recommendations::from_prompt))
        .route("/recommendations/image", post(recommendations::from_image))
        .route("/checkout", post(orders::checkout))
        .route("/orders", get(orders::list_mine))
        .route("/wishlist", get(wishlist::get_mine))
        .route("/wishlist/toggle", post(wishlist::toggle))
        .route("/register", post(account::register))
        .route(
            "/profile",
            get(account::profile).put(account::update_profile),
        )
        // back-office
        .route("/admin/products", put(admin::upsert_product))
        .route("/admin/products/{id}", delete(admin::delete_product))
        .route("/admin/categories", put(admin::upsert_category))
        .route("/admin/categories/{id}", delete(admin::delete_category))
        .route("/admin/orders", get(admin::orders))
        .route("/admin/users", get(admin::users))
        .route("/admin/reports", get(admin::reports))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(json!({ "status": "ok" }))
}
