//! Service Layer
//!
//! Abstraction over the remote catalog API and the async runtime it needs.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               CatalogController              │
//! └──────────────────────────────────────────────┘
//!                       │ PageRequest
//!                       ▼
//! ┌──────────────────┐     ┌─────────────────────┐
//! │  run_in_tokio    │ ──▶ │   HttpPageFetcher   │
//! │  (runtime)       │     │   (reqwest)         │
//! └──────────────────┘     └─────────────────────┘
//!                       │ ProductPage / FetchError
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │           CatalogState (pure update)         │
//! └──────────────────────────────────────────────┘
//! ```

mod catalog_client;
mod runtime;

pub use catalog_client::*;
pub use runtime::*;
