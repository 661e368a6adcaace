//! Query Module
//!
//! Server-side listing, text search and pagination over the product store.

mod pagination;
mod service;


pub use pagination::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use service::QueryService;
