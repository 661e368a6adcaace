//! Single-product view backed by the cached fetch layer.

use tracing::warn;

use crate::client::api::CatalogApi;
use crate::client::error::ClientError;
use crate::client::service::ProductService;
use crate::models::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailView {
    pub product: Option<Product>,
    /// Empty when the last load succeeded
    pub error_message: String,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `id` through the service cache.
    ///
    /// A missing product clears the view and shows a not-found message; any
    /// other failure keeps the previous product and shows the error.
    pub async fn load<A: CatalogApi>(&mut self, service: &mut ProductService<A>, id: &str) {
        match service.get_product(id).await {
            Ok(product) => {
                self.product = Some(product);
                self.error_message.clear();
            }
            Err(ClientError::NotFound(_)) => {
                self.product = None;
                self.error_message = format!("Product with ID {} not found.", id);
            }
            Err(err) => {
                warn!("failed to load product {}: {}", id, err);
                self.error_message = err.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::cache::DEFAULT_CACHE_TTL;
    use crate::client::testing::{sample_product, FakeCatalog};

    fn service() -> ProductService<FakeCatalog> {
        let api = FakeCatalog::new(0).with_product(sample_product("p1", "Lamp"));
        ProductService::new(api, DEFAULT_CACHE_TTL)
    }

    #[tokio::test]
    async fn test_load_found() {
        let mut service = service();
        let mut view = DetailView::new();

        view.load(&mut service, "p1").await;

        assert_eq!(view.product.as_ref().map(|p| p.name.as_str()), Some("Lamp"));
        assert!(view.error_message.is_empty());
    }

    #[tokio::test]
    async fn test_load_not_found_shows_message() {
        let mut service = service();
        let mut view = DetailView::new();

        view.load(&mut service, "p1").await;
        view.load(&mut service, "missing").await;

        assert!(view.product.is_none());
        assert_eq!(view.error_message, "Product with ID missing not found.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_failure_keeps_previous_product() {
        let mut service = service();
        let mut view = DetailView::new();
        view.load(&mut service, "p1").await;

        // expire the cache so the next load hits the failing api
        tokio::time::advance(DEFAULT_CACHE_TTL).await;
        service.api().fail("p1");
        view.load(&mut service, "p1").await;

        assert!(view.product.is_some());
        assert!(!view.error_message.is_empty());
    }
}
