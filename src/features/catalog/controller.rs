//! Catalog Controller
//!
//! Feeds events into the catalog state and runs the fetches it asks for.

use std::sync::Arc;

use gpui::{App, WeakEntity};

use crate::domain::PageRequest;
use crate::services::{run_in_tokio, HttpPageFetcher, PageFetcher};
use crate::state::catalog_state::{CatalogEvent, CatalogState};

/// Catalog page controller
pub struct CatalogController<F: PageFetcher = HttpPageFetcher> {
    catalog: WeakEntity<CatalogState>,
    fetcher: Arc<F>,
}

impl<F: PageFetcher> Clone for CatalogController<F> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            fetcher: self.fetcher.clone(),
        }
    }
}

impl<F: PageFetcher> CatalogController<F> {
    /// Create a controller for a catalog entity owned by the page
    pub fn new(catalog: WeakEntity<CatalogState>, fetcher: Arc<F>) -> Self {
        Self { catalog, fetcher }
    }

    /// Load the first page
    pub fn start(&self, cx: &mut App) {
        self.dispatch(CatalogEvent::Started, cx);
    }

    /// Report a sentinel visibility change
    pub fn set_sentinel_visible(&self, visible: bool, cx: &mut App) {
        self.dispatch(CatalogEvent::SentinelVisibilityChanged(visible), cx);
    }

    fn dispatch(&self, event: CatalogEvent, cx: &mut App) {
        let request = self.catalog.update(cx, |state, cx| {
            let request = state.apply(event);
            cx.notify();
            request
        });

        match request {
            Ok(Some(request)) => self.spawn_fetch(request, cx),
            Ok(None) => {}
            Err(_) => tracing::debug!("Catalog released, dropping event"),
        }
    }

    /// Fetch on the tokio runtime and feed the outcome back in
    ///
    /// The task is detached: nothing cancels it, and a result that arrives
    /// after the page is gone is dropped by `dispatch`.
    fn spawn_fetch(&self, request: PageRequest, cx: &mut App) {
        tracing::info!(offset = request.offset, limit = request.limit, "Requesting catalog page");
        let controller = self.clone();
        let fetch = fetch_event(self.fetcher.clone(), request);

        cx.spawn(async move |cx| {
            let event = run_in_tokio(fetch).await;
            if cx.update(|cx| controller.dispatch(event, cx)).is_err() {
                tracing::debug!(offset = request.offset, "App closed, dropping fetched page");
            }
        })
        .detach();
    }
}

/// Run one fetch and turn its outcome into a catalog event
pub async fn fetch_event<F: PageFetcher>(fetcher: Arc<F>, request: PageRequest) -> CatalogEvent {
    match fetcher.fetch_page(request).await {
        Ok(page) => CatalogEvent::PageLoaded(page),
        Err(error) => CatalogEvent::PageFailed(error),
    }
}
