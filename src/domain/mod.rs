//! Domain - Pure Data Structures and Wire Types
//!
//! These types don't depend on GPUI and represent the catalog API and its configuration.

pub mod config;
pub mod product;

pub use config::CatalogConfig;
pub use product::{PageRequest, Product, ProductPage};
