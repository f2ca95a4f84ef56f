use gpui::{
    App, IntoElement, Refineable, RenderOnce, SharedString, StyleRefinement, Styled, Window, div,
    prelude::*,
};

use crate::theme::ThemeExt;

/// One line of text that may shrink below its content width inside a flex
/// row and ends in an ellipsis when it does.
///
/// Font family and size default to the theme's body text. Styles set on the
/// element win over those defaults.
#[derive(IntoElement)]
pub struct TruncatedText {
    text: SharedString,
    style: StyleRefinement,
}

pub fn truncated_text(text: impl Into<SharedString>) -> TruncatedText {
    TruncatedText {
        text: text.into(),
        style: StyleRefinement::default(),
    }
}

impl Styled for TruncatedText {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for TruncatedText {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let font = &cx.get_theme().layout.text.default_font;

        div()
            .min_w_0()
            .overflow_hidden()
            .whitespace_nowrap()
            .text_ellipsis()
            .font_family(font.family[0].clone())
            .text_size(font.sizes.body)
            .map(|mut this| {
                this.style().refine(&self.style);
                this
            })
            .child(self.text)
    }
}
