//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::{Deserialize, Serialize};

/// Query string for paginated listings (GET /products, GET /products/category/:category)
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Query string for GET /products/search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Search term; missing is treated as empty
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Request body for POST /products
///
/// Every field is optional on the wire; `validate` enforces the required ones.
/// Store-assigned fields (`_id`, `createdAt`, `updatedAt`) are ignored if sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl NewProduct {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match &self.name {
            None => return Some("name is required".to_string()),
            Some(name) if name.trim().is_empty() => {
                return Some("name cannot be empty".to_string())
            }
            _ => {}
        }
        match self.price {
            None => return Some("price is required".to_string()),
            Some(price) if !price.is_finite() || price < 0.0 => {
                return Some("price must be a non-negative number".to_string())
            }
            _ => {}
        }
        match self.stock {
            None => return Some("stock is required".to_string()),
            Some(stock) if stock < 0 => {
                return Some("stock must be a non-negative integer".to_string())
            }
            _ => {}
        }
        None
    }
}
