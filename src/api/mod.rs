//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /products` - Paginated listing
//! - `POST /products` - Create a product
//! - `GET /products/search` - Relevance-ranked search
//! - `GET /products/category/:category` - Listing filtered by category
//! - `GET /products/:id` - Fetch one product
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
