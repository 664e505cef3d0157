//! Catalog Page
//!
//! Scrollable product grid with a loading indicator and an invisible sentinel
//! at the end. The sentinel's layout is checked against the scroll viewport on
//! every frame; visibility changes are forwarded to the controller. After each
//! merged page the observer is reset, so the first frame laid out with the new
//! items reports visibility afresh.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gpui::{
    canvas, div, prelude::*, px, Bounds, ClickEvent, Context, Entity, IntoElement, ParentElement,
    Pixels, Render, ScrollHandle, Styled, Subscription, Window,
};

use crate::app::entities::AppEntities;
use crate::components::catalog::{grid_columns, ProductGrid};
use crate::components::layout::header::Header;
use crate::components::primitives::LoadingIndicator;
use crate::constants::{PAGE_PADDING, PAGE_SIZE, SENTINEL_HEIGHT, SENTINEL_THRESHOLD};
use crate::features::catalog::controller::CatalogController;
use crate::i18n::{t, t_count};
use crate::services::HttpPageFetcher;
use crate::state::catalog_state::CatalogState;
use crate::state::visibility::{VerticalSpan, VisibilityObserver};
use crate::theme::colors::CatalogColors;

/// Catalog page component
pub struct CatalogPage {
    entities: AppEntities,
    catalog: Entity<CatalogState>,
    controller: CatalogController<HttpPageFetcher>,
    scroll_handle: ScrollHandle,
    sentinel: Rc<RefCell<VisibilityObserver>>,
    /// `CatalogState::loaded_pages` the observer was last reset for
    measured_pages: u32,
    _subscriptions: Vec<Subscription>,
}

impl CatalogPage {
    pub fn new(
        entities: AppEntities,
        fetcher: Arc<HttpPageFetcher>,
        cx: &mut Context<Self>,
    ) -> Self {
        let catalog = cx.new(|_| CatalogState::new(PAGE_SIZE));
        let controller = CatalogController::new(catalog.downgrade(), fetcher);

        let subscriptions = vec![
            cx.observe(&catalog, |this, catalog, cx| {
                let loaded = catalog.read(cx).loaded_pages();
                if loaded != this.measured_pages {
                    this.measured_pages = loaded;
                    this.sentinel.borrow_mut().reset();
                }
                cx.notify();
            }),
            cx.observe(&entities.i18n, |_this, _, cx| cx.notify()),
        ];

        controller.start(cx);

        Self {
            entities,
            catalog,
            controller,
            scroll_handle: ScrollHandle::new(),
            sentinel: Rc::new(RefCell::new(VisibilityObserver::new(SENTINEL_THRESHOLD))),
            measured_pages: 0,
            _subscriptions: subscriptions,
        }
    }

    /// Zero-content marker whose visibility requests the next page
    fn render_sentinel(&self) -> impl IntoElement {
        let scroll_handle = self.scroll_handle.clone();
        let observer = self.sentinel.clone();
        let controller = self.controller.clone();

        canvas(
            move |bounds, _window, cx| {
                let viewport = vertical_span(scroll_handle.bounds());
                let changed = observer.borrow_mut().observe(viewport, vertical_span(bounds));
                if let Some(visible) = changed {
                    tracing::trace!(visible, "Sentinel visibility changed");
                    cx.defer(move |cx| controller.set_sentinel_visible(visible, cx));
                }
            },
            |_bounds, _state, _window, _cx| {},
        )
        .w_full()
        .h(px(SENTINEL_HEIGHT))
    }
}

fn vertical_span(bounds: Bounds<Pixels>) -> VerticalSpan {
    VerticalSpan::new(f32::from(bounds.top()), f32::from(bounds.bottom()))
}

impl Render for CatalogPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (items, loading, exhausted) = {
            let catalog = self.catalog.read(cx);
            (
                catalog.snapshot(),
                catalog.is_loading(),
                catalog.is_exhausted(),
            )
        };
        let count = items.len();
        let columns = grid_columns(f32::from(window.viewport_size().width));

        let header = Header::new(
            t(locale, "app-title"),
            t_count(locale, "catalog-count", count),
            locale.display_name(),
        )
        .on_toggle_locale(cx.listener(|this, _event: &ClickEvent, _window, cx| {
            this.entities.i18n.update(cx, |i18n, cx| {
                i18n.toggle_locale();
                cx.notify();
            });
        }));

        div()
            .id("catalog-scroll")
            .size_full()
            .overflow_y_scroll()
            .track_scroll(&self.scroll_handle)
            .bg(CatalogColors::background())
            .p(px(PAGE_PADDING))
            .child(header)
            .child(ProductGrid::new(items, columns))
            .when(count == 0 && !loading, |this| {
                this.child(
                    div()
                        .w_full()
                        .my_8()
                        .flex()
                        .justify_center()
                        .text_color(CatalogColors::text_muted())
                        .child(t(locale, "catalog-empty")),
                )
            })
            .when(loading, |this| {
                this.child(LoadingIndicator::new().label(t(locale, "catalog-loading")))
            })
            .when(exhausted && count > 0, |this| {
                this.child(
                    div()
                        .w_full()
                        .my_8()
                        .flex()
                        .justify_center()
                        .text_sm()
                        .text_color(CatalogColors::text_muted())
                        .child(t(locale, "catalog-end")),
                )
            })
            .child(self.render_sentinel())
    }
}
