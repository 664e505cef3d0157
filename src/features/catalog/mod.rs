//! Catalog Feature
//!
//! Infinite-scroll product listing.

pub mod controller;
pub mod page;

pub use controller::CatalogController;
pub use page::CatalogPage;
