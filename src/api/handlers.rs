//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, NewProduct, PageQuery, Product, ProductPage, SearchQuery};
use crate::query::{Pagination, QueryService};
use crate::store::ProductStore;

/// Application state shared across all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: QueryService,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: ProductStore) -> Self {
        Self {
            catalog: QueryService::new(store),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Replays the journal when `data_file` is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = match &config.data_file {
            Some(path) => ProductStore::open(path)?,
            None => ProductStore::new(),
        };
        Ok(Self::new(store))
    }
}

/// Handler for GET /products
pub async fn list_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<ProductPage>> {
    let Query(query) = query?;
    let pagination = Pagination::new(query.page, query.limit)?;
    let page = state.catalog.list(pagination).await?;
    Ok(Json(page))
}

/// Handler for GET /products/search
///
/// A missing or blank `term` lists the whole catalog.
pub async fn search_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<ProductPage>> {
    let Query(query) = query?;
    let pagination = Pagination::new(query.page, query.limit)?;
    let term = query.term.unwrap_or_default();
    let page = state.catalog.search(&term, pagination).await?;
    Ok(Json(page))
}

/// Handler for GET /products/category/:category
pub async fn category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<ProductPage>> {
    let Query(query) = query?;
    let pagination = Pagination::new(query.page, query.limit)?;
    let page = state.catalog.list_by_category(&category, pagination).await?;
    Ok(Json(page))
}

/// Handler for GET /products/:id
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = state.catalog.get_by_id(&id).await?;
    Ok(Json(product))
}

/// Handler for POST /products
pub async fn create_handler(
    State(state): State<AppState>,
    req: std::result::Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(req) = req?;
    let product = state.catalog.create(req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
