//! Client Module
//!
//! Client-side access to the catalog server: the HTTP seam, a per-product
//! cache with time-based expiration, and list/detail views that drive
//! debounced search and pagination.

mod api;
mod cache;
mod detail;
mod error;
mod list_view;
mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{search_or_list, CatalogApi, HttpCatalogClient};
pub use cache::{CacheEntry, CacheStats, ProductCache, DEFAULT_CACHE_TTL};
pub use detail::DetailView;
pub use error::{ClientError, Result};
pub use list_view::{ListState, ListView};
pub use service::ProductService;
