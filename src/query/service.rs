//! Query Service
//!
//! Paginated listing, relevance-ranked search, lookup and creation over the
//! shared product store.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};
use crate::models::{NewProduct, Product, ProductDraft, ProductPage};
use crate::query::Pagination;
use crate::store::{ProductStore, TextQuery};

/// Read/write access to the catalog, shared across request handlers.
#[derive(Clone, Debug, Default)]
pub struct QueryService {
    store: Arc<RwLock<ProductStore>>,
}

impl QueryService {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    // == List ==
    /// One page of products in insertion order, plus the collection size.
    pub async fn list(&self, pagination: Pagination) -> Result<ProductPage> {
        let store = self.store.read().await;
        let products = pagination.apply(store.iter());
        Ok(ProductPage::new(owned(products), store.len() as u64))
    }

    // == Search ==
    /// One page of text matches ranked by relevance.
    ///
    /// An empty or whitespace-only term behaves exactly like `list`.
    pub async fn search(&self, term: &str, pagination: Pagination) -> Result<ProductPage> {
        if term.trim().is_empty() {
            return self.list(pagination).await;
        }

        let query = TextQuery::parse(term);
        let store = self.store.read().await;
        let matches = store.search(&query);
        let total = matches.len() as u64;
        debug!("search {:?} matched {} products", term, total);

        let products = pagination.apply(matches);
        Ok(ProductPage::new(owned(products), total))
    }

    // == List By Category ==
    /// One page of products carrying `category`, in insertion order.
    pub async fn list_by_category(
        &self,
        category: &str,
        pagination: Pagination,
    ) -> Result<ProductPage> {
        let store = self.store.read().await;
        let total = store.with_category(category).count() as u64;
        let products = pagination.apply(store.with_category(category));
        Ok(ProductPage::new(owned(products), total))
    }

    // == Get By Id ==
    pub async fn get_by_id(&self, id: &str) -> Result<Product> {
        let store = self.store.read().await;
        store
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    // == Create ==
    /// Validates and stores a new product, returning the stored form.
    pub async fn create(&self, new: NewProduct) -> Result<Product> {
        let draft = ProductDraft::try_from(new).map_err(|msg| {
            warn!("rejected product: {}", msg);
            CatalogError::Validation(msg)
        })?;

        let mut store = self.store.write().await;
        let product = store.insert(draft)?;
        info!("created product {} ({})", product.id, product.name);
        Ok(product)
    }

    /// Number of stored products.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}

/// Clones only the products that made it onto the page.
fn owned(page: Vec<&Product>) -> Vec<Product> {
    page.into_iter().cloned().collect()
}
