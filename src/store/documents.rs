//! Product Store Module
//!
//! Insertion-ordered document collection with an id index, a text index over
//! name and description, and an optional journal for persistence.

use std::collections::HashMap;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::error::{CatalogError, Result};
use crate::models::{Product, ProductDraft};
use crate::store::{normalize_id, IdGenerator, Journal, TextIndex, TextQuery};

// == Product Store ==
#[derive(Debug, Default)]
pub struct ProductStore {
    /// Documents in insertion order
    products: Vec<Product>,
    /// Id to position in `products`
    positions: HashMap<String, usize>,
    index: TextIndex,
    ids: IdGenerator,
    journal: Option<Journal>,
}

impl ProductStore {
    // == Constructor ==
    /// Creates an empty, memory-only store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a store backed by the journal at `path`, replaying its contents.
    pub fn open(path: &Path) -> Result<Self> {
        let (journal, existing) = Journal::open(path)?;
        let mut store = Self::new();
        for product in existing {
            if store.positions.contains_key(&product.id) {
                return Err(CatalogError::Internal(format!(
                    "duplicate id {} in journal {}",
                    product.id,
                    path.display()
                )));
            }
            store.push(product);
        }
        info!(
            "Replayed {} products from {}",
            store.len(),
            journal.path().display()
        );
        store.journal = Some(journal);
        Ok(store)
    }

    // == Insert ==
    /// Assigns an id and timestamps to `draft` and stores it.
    ///
    /// The journal is written before the in-memory collection so a failed
    /// write leaves the store unchanged.
    pub fn insert(&mut self, draft: ProductDraft) -> Result<Product> {
        let now = Utc::now();
        let mut id = self.ids.next_id(now);
        while self.positions.contains_key(&id) {
            id = self.ids.next_id(now);
        }

        let product = draft.into_product(id, now);
        if let Some(journal) = self.journal.as_mut() {
            journal.append(&product)?;
        }

        self.push(product.clone());
        Ok(product)
    }

    fn push(&mut self, product: Product) {
        let position = self
            .index
            .push(&product.name, product.description.as_deref());
        debug_assert_eq!(position, self.products.len());
        self.positions.insert(product.id.clone(), position);
        self.products.push(product);
    }

    // == Get ==
    /// Looks up a product by id. Malformed ids simply find nothing.
    pub fn get(&self, id: &str) -> Option<&Product> {
        let id = normalize_id(id)?;
        self.positions.get(&id).map(|&pos| &self.products[pos])
    }

    /// All products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Text matches, most relevant first.
    pub fn search(&self, query: &TextQuery) -> Vec<&Product> {
        self.index
            .search(query)
            .into_iter()
            .map(|(pos, _)| &self.products[pos])
            .collect()
    }

    /// Products tagged with `category`, in insertion order.
    pub fn with_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |p| p.categories.iter().any(|c| c == category))
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
