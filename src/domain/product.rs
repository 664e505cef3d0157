//! Product - Catalog Item and Page Data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as returned by the catalog API
///
/// Identity is `id`; products are never mutated after they are received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID
    pub id: u64,
    /// Display title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Thumbnail image URL
    #[serde(default)]
    pub thumbnail: String,
    /// Unit price
    pub price: Decimal,
}

impl Product {
    /// Price formatted for display, e.g. `$9.99`
    pub fn price_label(&self) -> String {
        format!("${}", self.price.normalize())
    }
}

/// One page of the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products in server order
    pub products: Vec<Product>,
    /// Total number of products known to the server
    pub total: u32,
    /// Offset echoed back by the server
    #[serde(default)]
    pub skip: u32,
    /// Page size echoed back by the server
    #[serde(default)]
    pub limit: u32,
}

impl ProductPage {
    /// Number of products in this page, before any de-duplication
    pub fn fetched_count(&self) -> u32 {
        self.products.len() as u32
    }
}

/// Offset and size of a single page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// Number of products to skip
    pub offset: u32,
    /// Number of products to return
    pub limit: u32,
}
