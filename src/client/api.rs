//! Catalog API seam and its HTTP implementation.

use std::future::Future;

use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::error::{ClientError, Result};
use crate::config::ClientConfig;
use crate::models::{ErrorResponse, NewProduct, Product, ProductPage};

/// Remote operations the client layer needs from the catalog server.
pub trait CatalogApi: Send + Sync + 'static {
    fn list(&self, page: u64, limit: u64) -> impl Future<Output = Result<ProductPage>> + Send;

    fn search(
        &self,
        term: &str,
        page: u64,
        limit: u64,
    ) -> impl Future<Output = Result<ProductPage>> + Send;

    fn get_product(&self, id: &str) -> impl Future<Output = Result<Product>> + Send;

    fn create_product(&self, product: &NewProduct)
        -> impl Future<Output = Result<Product>> + Send;
}

/// Routes to `list` for a blank term and to `search` otherwise.
pub async fn search_or_list<A: CatalogApi>(
    api: &A,
    term: &str,
    page: u64,
    limit: u64,
) -> Result<ProductPage> {
    let term = term.trim();
    if term.is_empty() {
        api.list(page, limit).await
    } else {
        api.search(term, page, limit).await
    }
}

// == HTTP Client ==
/// `CatalogApi` over the server's JSON endpoints.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.api_url)
    }

    /// Joins percent-encoded path segments onto the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl CatalogApi for HttpCatalogClient {
    async fn list(&self, page: u64, limit: u64) -> Result<ProductPage> {
        debug!("GET /products page={} limit={}", page, limit);
        let response = self
            .http
            .get(self.endpoint(&["products"]))
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        decode(response, None).await
    }

    async fn search(&self, term: &str, page: u64, limit: u64) -> Result<ProductPage> {
        debug!("GET /products/search term={:?} page={} limit={}", term, page, limit);
        let response = self
            .http
            .get(self.endpoint(&["products", "search"]))
            .query(&[("term", term.trim())])
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        decode(response, None).await
    }

    async fn get_product(&self, id: &str) -> Result<Product> {
        debug!("GET /products/{}", id);
        let response = self
            .http
            .get(self.endpoint(&["products", id]))
            .send()
            .await?;
        decode(response, Some(id)).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        let response = self
            .http
            .post(self.endpoint(&["products"]))
            .json(product)
            .send()
            .await?;
        decode(response, None).await
    }
}

/// Maps a response onto the body type or the client error taxonomy.
async fn decode<T: DeserializeOwned>(response: Response, id: Option<&str>) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ClientError::Decode(e.to_string())
            } else {
                ClientError::Transport(e)
            }
        });
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };

    Err(match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => ClientError::NotFound(id.to_string()),
        (StatusCode::BAD_REQUEST, _) => ClientError::Validation(message),
        _ => ClientError::Status {
            status: status.as_u16(),
            message,
        },
    })
}
