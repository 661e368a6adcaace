//! Product Service
//!
//! Client-side fetch layer: cached single-product reads, uncached listings.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::client::api::{search_or_list, CatalogApi};
use crate::client::cache::{CacheStats, ProductCache};
use crate::client::error::Result;
use crate::models::{NewProduct, Product, ProductPage};

pub struct ProductService<A> {
    api: Arc<A>,
    cache: ProductCache,
}

impl<A: CatalogApi> ProductService<A> {
    pub fn new(api: A, cache_ttl: Duration) -> Self {
        Self::with_shared(Arc::new(api), cache_ttl)
    }

    /// Builds a service over an api handle shared with other components.
    pub fn with_shared(api: Arc<A>, cache_ttl: Duration) -> Self {
        Self {
            api,
            cache: ProductCache::new(cache_ttl),
        }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    // == Get Product ==
    /// Returns a fresh cached product or fetches and caches it.
    ///
    /// Failed fetches leave the cache untouched.
    pub async fn get_product(&mut self, id: &str) -> Result<Product> {
        let now = Instant::now();
        if let Some(product) = self.cache.get(id, now) {
            debug!("product cache hit for {}", id);
            return Ok(product.clone());
        }

        debug!("product cache miss for {}", id);
        let product = self.api.get_product(id).await?;
        self.cache.insert(id, product.clone(), now);
        Ok(product)
    }

    // == Search Or List ==
    /// Never cached: blank terms list, others search.
    pub async fn search_or_list(&self, term: &str, page: u64, limit: u64) -> Result<ProductPage> {
        search_or_list(self.api.as_ref(), term, page, limit).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        self.api.create_product(product).await
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
