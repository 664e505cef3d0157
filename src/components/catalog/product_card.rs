//! Product Card
//!
//! Thumbnail, title, two-line description and price of a single product.

use std::sync::Arc;

use gpui::{
    div, img, prelude::*, px, App, FontWeight, IntoElement, ObjectFit, ParentElement, RenderOnce,
    Styled, Window,
};

use crate::constants::CARD_IMAGE_HEIGHT;
use crate::domain::Product;
use crate::theme::colors::CatalogColors;
use crate::theme::typography::Typography;

/// Card for one product
#[derive(IntoElement)]
pub struct ProductCard {
    product: Arc<Product>,
}

impl ProductCard {
    pub fn new(product: Arc<Product>) -> Self {
        Self { product }
    }
}

impl RenderOnce for ProductCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let Product {
            title,
            description,
            thumbnail,
            ..
        } = &*self.product;

        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(CatalogColors::card_bg())
            .rounded_xl()
            .overflow_hidden()
            .border_1()
            .border_color(CatalogColors::border())
            .shadow_sm()
            .hover(|s| s.shadow_lg().border_color(CatalogColors::card_hover_border()))
            // Thumbnail
            .child(
                div()
                    .w_full()
                    .h(px(CARD_IMAGE_HEIGHT))
                    .bg(CatalogColors::image_placeholder())
                    .when(!thumbnail.is_empty(), |this| {
                        this.child(
                            img(thumbnail.clone())
                                .w_full()
                                .h(px(CARD_IMAGE_HEIGHT))
                                .object_fit(ObjectFit::Cover),
                        )
                    }),
            )
            // Body
            .child(
                div()
                    .p_4()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(CatalogColors::text_primary())
                            .child(title.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(CatalogColors::text_secondary())
                            .line_clamp(2)
                            .child(description.clone()),
                    )
                    .child(
                        div()
                            .mt_2()
                            .font_weight(FontWeight::BOLD)
                            .text_color(CatalogColors::price())
                            .child(self.product.price_label()),
                    ),
            )
    }
}
