//! Product Catalog - a product catalog service and its client
//!
//! The server provides paginated listing, relevance-ranked text search and
//! creation of products. The client side caches single-product reads and
//! drives a debounced, supersession-aware search list.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod store;

pub use api::AppState;
pub use config::{ClientConfig, Config};
pub use error::CatalogError;
