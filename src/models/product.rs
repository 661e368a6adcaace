//! Product entity
//!
//! The stored document shape, shared by the server and the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::NewProduct;

/// A catalog product as stored and returned by the server.
///
/// `id`, `created_at` and `updated_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    pub stock: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated product fields, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub categories: Vec<String>,
    pub stock: u64,
}

impl ProductDraft {
    /// Stamps the draft with a store-assigned id and timestamp.
    pub fn into_product(self, id: String, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            categories: self.categories,
            stock: self.stock,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<NewProduct> for ProductDraft {
    type Error = String;

    fn try_from(new: NewProduct) -> Result<Self, Self::Error> {
        if let Some(msg) = new.validate() {
            return Err(msg);
        }

        // validate() guarantees the required fields are present
        let (Some(name), Some(price), Some(stock)) = (new.name, new.price, new.stock) else {
            return Err("name, price and stock are required".to_string());
        };

        let mut categories: Vec<String> = Vec::new();
        for category in new.categories.unwrap_or_default() {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        Ok(Self {
            name: name.trim().to_string(),
            description: new.description,
            price,
            categories,
            stock: stock as u64,
        })
    }
}
