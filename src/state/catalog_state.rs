//! CatalogState - Accumulated Products and Scroll Trigger
//!
//! The catalog is an explicit state object driven by [`CatalogEvent`]s. Every
//! transition is a plain function of the current state and the event, so the
//! loader can be exercised without a window.
//!
//! A loaded page changes the layout, so the visibility reported before it is
//! stale. `PageLoaded` clears it and waits for the view to measure again.
//!
//! ```text
//! Started ───────────────▶ fetch(offset)            (offset not advanced)
//! PageLoaded ────────────▶ merge; sentinel_visible = false
//! SentinelVisibility(true) ─┐
//! PageFailed ───────────────┴▶ visible && !exhausted && !loading
//!                                  ? offset += page_size; fetch(offset)
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::constants::SKIPPED_OFFSETS_CAPACITY;
use crate::domain::{PageRequest, Product, ProductPage};
use crate::helpers::BoundedDeque;
use crate::services::FetchError;

/// Inputs to the catalog state machine
#[derive(Debug)]
pub enum CatalogEvent {
    /// The catalog view was created; loads the first page
    Started,
    /// The sentinel at the end of the list became visible or hidden
    SentinelVisibilityChanged(bool),
    /// The outstanding fetch succeeded
    PageLoaded(ProductPage),
    /// The outstanding fetch failed
    PageFailed(FetchError),
}

/// Catalog state for one mounted view
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Products in first-seen order, unique by id
    items: Arc<[Arc<Product>]>,
    /// Offset of the most recently requested page
    offset: u32,
    /// Server reported no products beyond those fetched
    exhausted: bool,
    /// A fetch is outstanding
    loading: bool,
    /// Last reported sentinel visibility
    sentinel_visible: bool,
    /// Initial load was issued
    started: bool,
    /// Fixed page size
    page_size: u32,
    /// Number of pages merged so far
    loaded_pages: u32,
    /// Failed fetches since creation
    failed_fetches: u32,
    /// Most recent offsets whose fetch failed and were never retried
    skipped_offsets: BoundedDeque<u32>,
}

impl CatalogState {
    /// Create an empty catalog
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new().into(),
            offset: 0,
            exhausted: false,
            loading: false,
            sentinel_visible: false,
            started: false,
            page_size,
            loaded_pages: 0,
            failed_fetches: 0,
            skipped_offsets: BoundedDeque::new(SKIPPED_OFFSETS_CAPACITY),
        }
    }

    // ==================== Getters ====================

    pub fn items(&self) -> &[Arc<Product>] {
        &self.items
    }

    /// Shared handle to the current items, for rendering without copying
    pub fn snapshot(&self) -> Arc<[Arc<Product>]> {
        self.items.clone()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sentinel_visible(&self) -> bool {
        self.sentinel_visible
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Bumped on every merged page; a change means the layout must be measured again
    pub fn loaded_pages(&self) -> u32 {
        self.loaded_pages
    }

    pub fn failed_fetches(&self) -> u32 {
        self.failed_fetches
    }

    /// Most recent offsets lost to failed fetches, oldest first
    pub fn skipped_offsets(&self) -> Vec<u32> {
        self.skipped_offsets.to_vec()
    }

    // ==================== Transitions ====================

    /// Apply an event, returning the page to fetch if one must be issued
    ///
    /// The caller owns the actual request and must report its outcome with
    /// [`CatalogEvent::PageLoaded`] or [`CatalogEvent::PageFailed`].
    pub fn apply(&mut self, event: CatalogEvent) -> Option<PageRequest> {
        match event {
            CatalogEvent::Started => {
                if self.started || self.loading || self.exhausted {
                    return None;
                }
                self.started = true;
                self.loading = true;
                Some(self.request())
            }

            CatalogEvent::SentinelVisibilityChanged(visible) => {
                self.sentinel_visible = visible;
                self.try_advance()
            }

            CatalogEvent::PageLoaded(page) => {
                if !self.loading {
                    tracing::warn!(offset = self.offset, "Ignoring page with no fetch outstanding");
                    return None;
                }
                let page_size = self.page_size;
                let state = std::mem::replace(self, CatalogState::new(page_size));
                *self = merge(state, page);
                self.loading = false;
                self.loaded_pages = self.loaded_pages.wrapping_add(1);
                self.sentinel_visible = false;
                None
            }

            CatalogEvent::PageFailed(error) => {
                if !self.loading {
                    tracing::warn!(offset = self.offset, error = %error, "Ignoring failure with no fetch outstanding");
                    return None;
                }
                tracing::error!(offset = self.offset, error = %error, "Failed to fetch catalog page");
                // The offset stays advanced, so this page is never requested again.
                self.skipped_offsets.push(self.offset);
                self.failed_fetches = self.failed_fetches.saturating_add(1);
                tracing::warn!(
                    offset = self.offset,
                    skipped = self.failed_fetches,
                    "Catalog page skipped after failed fetch"
                );
                self.loading = false;
                self.try_advance()
            }
        }
    }

    /// Advance to the next page when the trigger guard allows it
    fn try_advance(&mut self) -> Option<PageRequest> {
        if !should_advance(self) {
            return None;
        }
        self.offset = self.offset.saturating_add(self.page_size);
        self.loading = true;
        tracing::debug!(offset = self.offset, "Scroll trigger fired");
        Some(self.request())
    }

    fn request(&self) -> PageRequest {
        PageRequest {
            offset: self.offset,
            limit: self.page_size,
        }
    }
}

/// Trigger guard: sentinel visible, more pages remain, nothing in flight
pub fn should_advance(state: &CatalogState) -> bool {
    state.sentinel_visible && !state.exhausted && !state.loading
}

/// Merge a fetched page into the catalog
///
/// Products whose id is already present (or repeated within the page) are
/// dropped; survivors are appended in server order. Exhaustion is decided from
/// the raw page size, so a page made only of duplicates still moves the
/// catalog towards its end.
pub fn merge(mut state: CatalogState, page: ProductPage) -> CatalogState {
    let fetched = page.fetched_count();
    let mut seen: AHashSet<u64> = state.items.iter().map(|p| p.id).collect();

    let before = state.items.len();
    let mut items = state.items.to_vec();
    items.extend(
        page.products
            .into_iter()
            .filter(|p| seen.insert(p.id))
            .map(Arc::new),
    );
    let appended = items.len() - before;
    state.items = items.into();

    if page.total <= state.offset.saturating_add(fetched) {
        state.exhausted = true;
    }

    tracing::debug!(
        offset = state.offset,
        fetched,
        appended,
        duplicates = fetched as usize - appended,
        total = page.total,
        exhausted = state.exhausted,
        "Merged catalog page"
    );

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            thumbnail: format!("https://example.com/{id}.png"),
            price: Decimal::new(999, 2),
        }
    }

    fn page(ids: impl IntoIterator<Item = u64>, total: u32) -> ProductPage {
        ProductPage {
            products: ids.into_iter().map(product).collect(),
            total,
            skip: 0,
            limit: 10,
        }
    }

    fn ids(state: &CatalogState) -> Vec<u64> {
        state.items().iter().map(|p| p.id).collect()
    }

    fn failure() -> FetchError {
        FetchError::Status {
            url: "http://localhost/products".to_string(),
            status: 500,
        }
    }

    #[test]
    fn merge_drops_duplicates_and_keeps_first_seen_order() {
        let state = CatalogState::new(10);
        let state = merge(state, page([3, 1, 2], 100));
        let state = merge(state, page([2, 4, 1, 5, 4], 100));

        assert_eq!(ids(&state), vec![3, 1, 2, 4, 5]);
        assert!(!state.is_exhausted());
    }

    #[test]
    fn start_fetches_first_page_without_advancing() {
        let mut state = CatalogState::new(10);

        let request = state.apply(CatalogEvent::Started);
        assert_eq!(request, Some(PageRequest { offset: 0, limit: 10 }));
        assert!(state.is_loading());

        assert_eq!(state.apply(CatalogEvent::Started), None);

        let next = state.apply(CatalogEvent::PageLoaded(page(1..=10, 35)));
        assert_eq!(next, None);
        assert_eq!(state.items().len(), 10);
        assert_eq!(state.offset(), 0);
        assert!(!state.is_exhausted());
        assert!(!state.is_loading());
    }

    #[test]
    fn catalog_of_25_is_exhausted_after_third_page() {
        let mut state = CatalogState::new(10);
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::PageLoaded(page(1..=10, 25)));

        let second = state.apply(CatalogEvent::SentinelVisibilityChanged(true));
        assert_eq!(second, Some(PageRequest { offset: 10, limit: 10 }));

        assert_eq!(state.apply(CatalogEvent::PageLoaded(page(11..=20, 25))), None);
        let third = state.apply(CatalogEvent::SentinelVisibilityChanged(true));
        assert_eq!(third, Some(PageRequest { offset: 20, limit: 10 }));

        assert_eq!(state.apply(CatalogEvent::PageLoaded(page(21..=25, 25))), None);
        assert_eq!(state.apply(CatalogEvent::SentinelVisibilityChanged(true)), None);
        assert!(state.is_exhausted());
        assert_eq!(state.items().len(), 25);

        assert_eq!(state.apply(CatalogEvent::SentinelVisibilityChanged(false)), None);
        assert_eq!(state.apply(CatalogEvent::SentinelVisibilityChanged(true)), None);
        assert_eq!(state.offset(), 20);
    }

    #[test]
    fn visibility_while_loading_does_not_issue_second_fetch() {
        let mut state = CatalogState::new(10);
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::PageLoaded(page(1..=10, 100)));

        assert!(state.apply(CatalogEvent::SentinelVisibilityChanged(true)).is_some());
        assert_eq!(state.offset(), 10);

        assert_eq!(state.apply(CatalogEvent::SentinelVisibilityChanged(false)), None);
        assert_eq!(state.apply(CatalogEvent::SentinelVisibilityChanged(true)), None);
        assert_eq!(state.offset(), 10);
        assert!(state.is_loading());
    }

    #[test]
    fn duplicate_only_page_still_reaches_exhaustion() {
        let mut state = CatalogState::new(10);
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::PageLoaded(page(1..=10, 20)));
        state.apply(CatalogEvent::SentinelVisibilityChanged(true));
        assert_eq!(state.offset(), 10);

        let next = state.apply(CatalogEvent::PageLoaded(page(1..=10, 20)));
        assert_eq!(next, None);
        assert_eq!(ids(&state), (1..=10).collect::<Vec<_>>());
        assert!(state.is_exhausted());
    }

    #[test]
    fn duplicate_only_page_short_of_total_keeps_loading_pages() {
        let mut state = CatalogState::new(10);
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::PageLoaded(page(1..=10, 40)));
        state.apply(CatalogEvent::SentinelVisibilityChanged(true));

        assert_eq!(state.apply(CatalogEvent::PageLoaded(page(1..=10, 40))), None);
        assert_eq!(state.items().len(), 10);
        assert!(!state.is_exhausted());

        let next = state.apply(CatalogEvent::SentinelVisibilityChanged(true));
        assert_eq!(next, Some(PageRequest { offset: 20, limit: 10 }));
    }

    #[test]
    fn short_final_page_exhausts_via_total() {
        let mut state = CatalogState::new(10);
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::PageLoaded(page(1..=3, 3)));
        assert!(state.is_exhausted());
        assert_eq!(state.apply(CatalogEvent::SentinelVisibilityChanged(true)), None);
    }

    #[test]
    fn failed_fetch_leaves_catalog_untouched_except_loading() {
        let mut state = CatalogState::new(10);
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::PageLoaded(page(1..=10, 100)));
        state.apply(CatalogEvent::SentinelVisibilityChanged(true));
        state.apply(CatalogEvent::SentinelVisibilityChanged(false));

        let before = (ids(&state), state.offset(), state.is_exhausted());
        let next = state.apply(CatalogEvent::PageFailed(failure()));

        assert_eq!(next, None);
        assert_eq!((ids(&state), state.offset(), state.is_exhausted()), before);
        assert!(!state.is_loading());
        assert_eq!(state.skipped_offsets(), vec![10]);
        assert_eq!(state.failed_fetches(), 1);

        // Scrolling again moves on to the next page; the failed one stays missing.
        let retry = state.apply(CatalogEvent::SentinelVisibilityChanged(true));
        assert_eq!(retry, Some(PageRequest { offset: 20, limit: 10 }));
    }

    #[test]
    fn loaded_page_waits_for_fresh_visibility_before_advancing() {
        let mut state = CatalogState::new(10);
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::PageLoaded(page(1..=10, 100)));
        assert_eq!(state.loaded_pages(), 1);

        let second = state.apply(CatalogEvent::SentinelVisibilityChanged(true));
        assert_eq!(second, Some(PageRequest { offset: 10, limit: 10 }));

        // The visibility reported before the page landed no longer counts.
        assert_eq!(state.apply(CatalogEvent::PageLoaded(page(11..=20, 100))), None);
        assert!(!state.sentinel_visible());
        assert!(!state.is_loading());
        assert_eq!(state.offset(), 10);
        assert_eq!(state.loaded_pages(), 2);

        // New layout pushed the sentinel off screen: nothing more is fetched.
        assert_eq!(state.apply(CatalogEvent::SentinelVisibilityChanged(false)), None);
        assert_eq!(state.offset(), 10);

        // Scrolling down again fetches exactly one more page.
        let third = state.apply(CatalogEvent::SentinelVisibilityChanged(true));
        assert_eq!(third, Some(PageRequest { offset: 20, limit: 10 }));
    }

    #[test]
    fn repeated_failures_keep_only_recent_offsets() {
        let mut state = CatalogState::new(10);
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::PageLoaded(page(1..=10, 10_000)));
        state.apply(CatalogEvent::SentinelVisibilityChanged(true));

        // With the sentinel on screen every failure re-fires the trigger.
        let failures = SKIPPED_OFFSETS_CAPACITY as u32 + 8;
        for _ in 0..failures {
            assert!(state.apply(CatalogEvent::PageFailed(failure())).is_some());
        }

        let skipped = state.skipped_offsets();
        assert_eq!(state.failed_fetches(), failures);
        assert_eq!(skipped.len(), SKIPPED_OFFSETS_CAPACITY);
        assert_eq!(skipped.last(), Some(&(failures * 10)));
        assert_eq!(
            skipped.first(),
            Some(&((failures - SKIPPED_OFFSETS_CAPACITY as u32 + 1) * 10))
        );
    }

    #[test]
    fn snapshot_shares_items_without_copying() {
        let mut state = CatalogState::new(10);
        state.apply(CatalogEvent::Started);
        state.apply(CatalogEvent::PageLoaded(page(1..=10, 100)));

        let first = state.snapshot();
        let second = state.snapshot();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 10);
    }

    #[test]
    fn completion_without_outstanding_fetch_is_ignored() {
        let mut state = CatalogState::new(10);
        assert_eq!(state.apply(CatalogEvent::PageLoaded(page(1..=10, 10))), None);
        assert!(state.items().is_empty());
        assert_eq!(state.apply(CatalogEvent::PageFailed(failure())), None);
        assert!(state.skipped_offsets().is_empty());
    }

    #[test]
    fn guard_requires_all_three_conditions() {
        let mut state = CatalogState::new(10);
        assert!(!should_advance(&state));

        state.sentinel_visible = true;
        assert!(should_advance(&state));

        state.loading = true;
        assert!(!should_advance(&state));

        state.loading = false;
        state.exhausted = true;
        assert!(!should_advance(&state));
    }
}
