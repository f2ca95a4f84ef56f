use gpui::{
    App, ImageSource, IntoElement, ObjectFit, ParentElement, Pixels, RenderOnce, Rgba,
    SharedString, Styled, StyledImage, Window, div, img, prelude::FluentBuilder, px,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::{entities::PeerId, theme::ThemeExt, utils::rgb_a};

/// Number of placeholder colors every theme variant provides.
pub const AVATAR_PLACEHOLDER_COUNT: usize = 8;

/// Index into the theme's avatar placeholder palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AvatarPlaceholder(pub usize);

impl AvatarPlaceholder {
    pub fn resolve(&self, cx: &App) -> Rgba {
        let palette = &cx.theme_variant().colors.avatar_placeholders;
        palette[self.0 % palette.len()]
    }
}

/// Picks a stable placeholder color for a peer: `|id| mod 8`.
pub fn avatar_placeholder(peer_id: PeerId) -> AvatarPlaceholder {
    AvatarPlaceholder((peer_id.0.unsigned_abs() % AVATAR_PLACEHOLDER_COUNT as u64) as usize)
}

/// Upper-cased first grapheme of the first two words of `title`.
pub fn avatar_initials(title: &str) -> SharedString {
    title
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.graphemes(true).next())
        .map(|grapheme| grapheme.to_uppercase())
        .collect::<String>()
        .into()
}

/// Circular avatar. Shows the image when one is set, initials over the
/// placeholder color otherwise.
#[derive(IntoElement)]
pub struct PeerAvatar {
    title: SharedString,
    image: Option<ImageSource>,
    placeholder: AvatarPlaceholder,
    size: Pixels,
}

impl PeerAvatar {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            image: None,
            placeholder: AvatarPlaceholder(0),
            size: px(36.),
        }
    }

    pub fn image(mut self, image: impl Into<ImageSource>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn placeholder(mut self, placeholder: AvatarPlaceholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }
}

impl RenderOnce for PeerAvatar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let size = self.size;
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let background = self.placeholder.resolve(cx);

        div()
            .flex_none()
            .relative()
            .size(size)
            .rounded_full()
            .overflow_hidden()
            .flex()
            .items_center()
            .justify_center()
            .bg(background)
            .font_family(font_family)
            .text_size(size * 0.4)
            .text_color(rgb_a(0xFFFFFF, 1.))
            .child(avatar_initials(&self.title))
            .when_some(self.image, |this, image| {
                this.child(
                    img(image)
                        .absolute()
                        .inset_0()
                        .size_full()
                        .rounded_full()
                        .object_fit(ObjectFit::Cover),
                )
            })
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_placeholder_resolves_from_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let palette = cx.theme_variant().colors.avatar_placeholders.clone();

            for index in 0..AVATAR_PLACEHOLDER_COUNT {
                assert_eq!(AvatarPlaceholder(index).resolve(cx), palette[index]);
            }
        });
    }
}
