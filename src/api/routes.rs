//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    category_handler, create_handler, get_handler, health_handler, list_handler,
    search_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /products` - Paginated listing
/// - `POST /products` - Create a product
/// - `GET /products/search` - Relevance-ranked text search
/// - `GET /products/category/:category` - Paginated listing of one category
/// - `GET /products/:id` - Fetch one product
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static segments win over `:id` in the matcher
    Router::new()
        .route("/products", get(list_handler).post(create_handler))
        .route("/products/search", get(search_handler))
        .route("/products/category/:category", get(category_handler))
        .route("/products/:id", get(get_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
