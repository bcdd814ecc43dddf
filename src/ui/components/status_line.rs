//! StatusLine component - the single line of overlay text

use gpui::{div, prelude::*, px, IntoElement, SharedString};

use crate::ui::Theme;

/// Properties for the status line
pub struct StatusLineProps {
    pub text: SharedString,
    pub font_family: &'static str,
    pub font_size: f32,
}

/// Render the status line, centered and clipped to the overlay
pub fn render_status_line(props: StatusLineProps, theme: &Theme) -> impl IntoElement {
    let StatusLineProps {
        text,
        font_family,
        font_size,
    } = props;

    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .overflow_hidden()
        .px_2()
        .font_family(font_family)
        .text_size(px(font_size))
        .text_color(theme.text)
        .whitespace_nowrap()
        .child(text)
}
