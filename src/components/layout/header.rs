//! Header Component
//!
//! Catalog title, loaded item count and language switcher.

use gpui::{
    div, px, App, ClickEvent, FontWeight, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::constants::GRID_MAX_WIDTH;
use crate::theme::colors::CatalogColors;
use crate::theme::typography::Typography;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Header component
#[derive(IntoElement)]
pub struct Header {
    title: SharedString,
    count_label: SharedString,
    lang_label: SharedString,
    on_toggle_locale: Option<ClickHandler>,
}

impl Header {
    pub fn new(
        title: impl Into<SharedString>,
        count_label: impl Into<SharedString>,
        lang_label: impl Into<SharedString>,
    ) -> Self {
        Self {
            title: title.into(),
            count_label: count_label.into(),
            lang_label: lang_label.into(),
            on_toggle_locale: None,
        }
    }

    /// Set the language switcher handler
    pub fn on_toggle_locale(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_toggle_locale = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut switcher = div()
            .id("lang-switcher")
            .px_3()
            .py_1()
            .rounded_md()
            .border_1()
            .border_color(CatalogColors::border())
            .text_color(CatalogColors::text_secondary())
            .text_size(px(13.0))
            .child(self.lang_label);

        if let Some(handler) = self.on_toggle_locale {
            switcher = switcher
                .cursor_pointer()
                .hover(|s| s.bg(CatalogColors::image_placeholder()))
                .on_click(handler);
        }

        div()
            .w_full()
            .max_w(px(GRID_MAX_WIDTH))
            .mx_auto()
            .mb_8()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_size(px(Typography::TEXT_3XL))
                    .font_weight(FontWeight::BOLD)
                    .text_color(CatalogColors::title())
                    .child(self.title),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(CatalogColors::text_muted())
                            .child(self.count_label),
                    )
                    .child(switcher),
            )
    }
}
