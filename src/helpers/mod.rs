//! Helper Utilities
//!
//! Common utilities used across the application.

mod bounded;
mod fs;

pub use bounded::BoundedDeque;
pub use fs::*;
