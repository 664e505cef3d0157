//! Product Grid
//!
//! Lays products out in rows whose column count follows the window width.

use std::sync::Arc;

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use super::product_card::ProductCard;
use crate::constants::{GRID_BREAKPOINT_LG, GRID_BREAKPOINT_MD, GRID_BREAKPOINT_SM, GRID_GAP, GRID_MAX_WIDTH};
use crate::domain::Product;

/// Number of grid columns for a window width
pub fn grid_columns(width: f32) -> usize {
    if width >= GRID_BREAKPOINT_LG {
        4
    } else if width >= GRID_BREAKPOINT_MD {
        3
    } else if width >= GRID_BREAKPOINT_SM {
        2
    } else {
        1
    }
}

/// Grid of product cards
#[derive(IntoElement)]
pub struct ProductGrid {
    products: Arc<[Arc<Product>]>,
    columns: usize,
}

impl ProductGrid {
    pub fn new(products: Arc<[Arc<Product>]>, columns: usize) -> Self {
        Self {
            products,
            columns: columns.max(1),
        }
    }
}

impl RenderOnce for ProductGrid {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let columns = self.columns;

        div()
            .w_full()
            .max_w(px(GRID_MAX_WIDTH))
            .mx_auto()
            .flex()
            .flex_col()
            .gap(px(GRID_GAP))
            .children(self.products.chunks(columns).map(|row| {
                // Pad the last row so its cards keep the column width.
                let fillers = columns - row.len();
                div()
                    .w_full()
                    .flex()
                    .items_start()
                    .gap(px(GRID_GAP))
                    .children(row.iter().map(|product| {
                        div()
                            .flex_1()
                            .min_w(px(0.0))
                            .child(ProductCard::new(product.clone()))
                    }))
                    .children((0..fillers).map(|_| div().flex_1()))
            }))
    }
}
