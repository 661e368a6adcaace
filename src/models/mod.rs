//! Domain and transfer models for the catalog
//!
//! The `Product` document plus the DTOs used for serializing and
//! deserializing HTTP request and response bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::{Product, ProductDraft};
pub use requests::{NewProduct, PageQuery, SearchQuery};
pub use responses::{ErrorResponse, HealthResponse, ProductPage};
