//! In-memory `CatalogApi` used by the client unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;

use crate::client::error::{ClientError, Result};
use crate::client::CatalogApi;
use crate::models::{NewProduct, Product, ProductPage};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List { page: u64, limit: u64 },
    Search { term: String, page: u64, limit: u64 },
    Get(String),
    Create,
}

pub fn sample_product(id: &str, name: &str) -> Product {
    let now = Utc::now();
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        price: 1.0,
        categories: Vec::new(),
        stock: 1,
        created_at: now,
        updated_at: now,
    }
}

/// Records every call. Listings return one product named `page-{n}` and a
/// configurable total; searches return one product named after the term.
pub struct FakeCatalog {
    calls: Mutex<Vec<Call>>,
    products: Mutex<HashMap<String, Product>>,
    delays: Mutex<HashMap<String, Duration>>,
    failing: Mutex<HashSet<String>>,
    list_total: u64,
}

impl FakeCatalog {
    pub fn new(list_total: u64) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            products: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            list_total,
        }
    }

    pub fn with_product(self, product: Product) -> Self {
        self.products
            .lock()
            .unwrap()
            .insert(product.id.clone(), product);
        self
    }

    /// Delays responses for `term` (use "" for listings and ids for gets).
    pub fn delay(&self, term: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(term.to_string(), delay);
    }

    /// Makes requests for `term` (or id) fail with a 500.
    pub fn fail(&self, term: &str) {
        self.failing.lock().unwrap().insert(term.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Search { term, .. } => Some(term),
                _ => None,
            })
            .collect()
    }

    pub fn get_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Get(_)))
            .count()
    }

    async fn respond(&self, key: &str) -> Result<()> {
        let delay = self.delays.lock().unwrap().get(key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.lock().unwrap().contains(key) {
            return Err(ClientError::Status {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }
}

impl CatalogApi for FakeCatalog {
    async fn list(&self, page: u64, limit: u64) -> Result<ProductPage> {
        self.calls.lock().unwrap().push(Call::List { page, limit });
        self.respond("").await?;
        let product = sample_product(&format!("list-{page}"), &format!("page-{page}"));
        Ok(ProductPage::new(vec![product], self.list_total))
    }

    async fn search(&self, term: &str, page: u64, limit: u64) -> Result<ProductPage> {
        self.calls.lock().unwrap().push(Call::Search {
            term: term.to_string(),
            page,
            limit,
        });
        self.respond(term).await?;
        Ok(ProductPage::new(vec![sample_product(term, term)], 1))
    }

    async fn get_product(&self, id: &str) -> Result<Product> {
        self.calls.lock().unwrap().push(Call::Get(id.to_string()));
        self.respond(id).await?;
        self.products
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        self.calls.lock().unwrap().push(Call::Create);
        let created = sample_product(
            &format!("{:024x}", self.calls.lock().unwrap().len()),
            product.name.as_deref().unwrap_or_default(),
        );
        self.products
            .lock()
            .unwrap()
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }
}
