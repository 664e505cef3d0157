//! Loading Indicator
//!
//! Spinning loader shown while a catalog page is in flight.

use std::time::Duration;

use gpui::{
    percentage, prelude::*, Animation, AnimationExt, App, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Transformation, Window,
};
use gpui_component::{h_flex, label::Label, Icon, IconName};

use crate::theme::colors::CatalogColors;

/// Spinner with an optional caption
#[derive(IntoElement)]
pub struct LoadingIndicator {
    label: Option<SharedString>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self { label: None }
    }

    /// Caption shown next to the spinner
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for LoadingIndicator {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        h_flex()
            .w_full()
            .my_8()
            .gap_3()
            .justify_center()
            .items_center()
            .child(
                Icon::new(IconName::Loader)
                    .size_10()
                    .text_color(CatalogColors::spinner())
                    .with_animation(
                        "catalog-loading",
                        Animation::new(Duration::from_millis(800)).repeat(),
                        |icon, delta| icon.transform(Transformation::rotate(percentage(delta))),
                    ),
            )
            .when_some(self.label, |this, label| {
                this.child(Label::new(label).text_sm().text_color(CatalogColors::text_muted()))
            })
    }
}
