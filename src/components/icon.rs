use gpui::{
    App, Hsla, IntoElement, Pixels, RenderOnce, SharedString, Styled, Window, px, svg,
};

use crate::theme::ThemeExt;

/// A square SVG glyph.
///
/// Drawn in the theme's primary text color unless [`Icon::color`] is set.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Pixels,
    color: Option<Hsla>,
}

impl Icon {
    /// Takes an SVG asset path or a [`crate::DialogIconKind`].
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: px(16.),
            color: None,
        }
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let color = self
            .color
            .unwrap_or_else(|| cx.theme_variant().colors.text.primary.into());

        svg()
            .path(self.path)
            .flex_none()
            .size(self.size)
            .min_w(self.size)
            .min_h(self.size)
            .text_color(color)
    }
}
