//! Tokio Runtime Bridge
//!
//! GPUI drives its own executor, but reqwest needs a tokio reactor.
//! Catalog fetches are handed to a shared tokio runtime and the result is
//! awaited back on the GPUI side.
//!
//! ```text
//! GPUI foreground task
//!       │
//!       ▼
//! run_in_tokio(fetcher.fetch_page(..))
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! ProductPage / FetchError returned to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("catalog-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// Panics inside the future are resumed on the awaiting side.
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}
