//! Catalog Components
//!
//! Product cards and the responsive grid that lays them out.

pub mod product_card;
pub mod product_grid;

pub use product_card::ProductCard;
pub use product_grid::{grid_columns, ProductGrid};
