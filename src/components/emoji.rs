use gpui::{
    AnyElement, App, AppContext, Context, ElementId, InteractiveElement, IntoElement,
    ParentElement, Render, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
    div, img, prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::{
    emoji::{EmojiCatalog, EmojiEntry, EmojiSpriteSheet, NativeEmojiSupport, SPRITE_GRID_SIZE},
    theme::ThemeExt,
};

const DEFAULT_SIZE: f32 = 20.;
/// Inline sprite glyphs above this size are nudged up to sit on the baseline.
const INLINE_OFFSET_THRESHOLD: f32 = 15.;
const INLINE_OFFSET: f32 = -2.;
const BLOCK_LINE_HEIGHT_FACTOR: f32 = 1.19;

/// A square window into the sprite sheet, described the way a CSS
/// background would be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteViewport {
    /// Edge length of the viewport in pixels.
    pub box_size: f32,
    /// Sheet size as a percentage of the viewport.
    pub background_size: f32,
    /// Horizontal and vertical background position in percent.
    pub position: (f32, f32),
    pub margin_top: f32,
}

impl SpriteViewport {
    pub fn new(entry: &EmojiEntry, size: f32, inline: bool) -> Self {
        let grid = SPRITE_GRID_SIZE as f32;
        let step = 100. / (grid - 1.);

        Self {
            box_size: size + 2.,
            background_size: grid * 100.,
            position: (step * entry.x as f32, step * entry.y as f32),
            margin_top: if inline && size > INLINE_OFFSET_THRESHOLD {
                INLINE_OFFSET
            } else {
                0.
            },
        }
    }

    /// Pixel size of the whole sheet when scaled to this viewport.
    pub fn sheet_size(&self) -> f32 {
        self.box_size * self.background_size / 100.
    }

    /// Pixel offset of the sheet's top-left corner relative to the viewport.
    pub fn sheet_offset(&self) -> (f32, f32) {
        let free_space = self.box_size - self.sheet_size();
        (
            free_space * self.position.0 / 100.,
            free_space * self.position.1 / 100.,
        )
    }
}

/// Text styling for glyphs drawn with the platform font.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NativeGlyph {
    pub font_size: f32,
    /// Fixed box for block glyphs; inline glyphs inherit the line height.
    pub block: Option<(f32, f32)>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EmojiRendering {
    Native(NativeGlyph),
    Sprite(SpriteViewport),
}

impl EmojiRendering {
    /// Chooses how `entry` is drawn at `size`.
    pub fn resolve(
        entry: &EmojiEntry,
        size: f32,
        inline: bool,
        support: &NativeEmojiSupport,
    ) -> Self {
        if support.renders(entry) {
            EmojiRendering::Native(NativeGlyph {
                font_size: size,
                block: (!inline).then_some((size, size * BLOCK_LINE_HEIGHT_FACTOR)),
            })
        } else {
            EmojiRendering::Sprite(SpriteViewport::new(entry, size, inline))
        }
    }
}

/// Renders one emoji character. Characters missing from the catalog render
/// nothing.
#[derive(IntoElement)]
pub struct Emoji {
    id: Option<ElementId>,
    char: SharedString,
    size: f32,
    inline: bool,
    catalog: Option<&'static EmojiCatalog>,
    children: SmallVec<[AnyElement; 1]>,
}

impl Emoji {
    pub fn new(char: impl Into<SharedString>) -> Self {
        Self {
            id: None,
            char: char.into(),
            size: DEFAULT_SIZE,
            inline: false,
            catalog: None,
            children: SmallVec::new(),
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Makes the glyph hoverable, showing its catalog name as a tooltip.
    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Looks glyphs up in `catalog` instead of the built-in one.
    pub fn catalog(mut self, catalog: &'static EmojiCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    fn entry(&self) -> Option<&'static EmojiEntry> {
        self.catalog
            .unwrap_or_else(EmojiCatalog::builtin)
            .get(&self.char)
    }

    fn title(&self) -> Option<SharedString> {
        self.id.as_ref()?;
        self.entry().map(|entry| entry.name.clone().into())
    }
}

impl ParentElement for Emoji {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl RenderOnce for Emoji {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let Some(entry) = self.entry() else {
            log::trace!("no catalog entry for {:?}", self.char);
            return None;
        };

        let title = self.title();
        let id = self.id;

        let support = cx
            .try_global::<NativeEmojiSupport>()
            .copied()
            .unwrap_or(NativeEmojiSupport::NONE);

        let element = match EmojiRendering::resolve(entry, self.size, self.inline, &support) {
            EmojiRendering::Native(glyph) => {
                let content = if self.children.is_empty() {
                    SmallVec::from_buf([self.char.into_any_element()])
                } else {
                    self.children
                };

                div()
                    .flex_none()
                    .text_size(px(glyph.font_size))
                    .when_some(glyph.block, |this, (height, line_height)| {
                        this.h(px(height)).line_height(px(line_height))
                    })
                    .children(content)
            }

            EmojiRendering::Sprite(viewport) => {
                let sheet = cx
                    .try_global::<EmojiSpriteSheet>()
                    .cloned()
                    .unwrap_or_default();
                let (left, top) = viewport.sheet_offset();
                let sheet_size = viewport.sheet_size();

                div()
                    .flex_none()
                    .relative()
                    .overflow_hidden()
                    .size(px(viewport.box_size))
                    .mt(px(viewport.margin_top))
                    .child(
                        img(sheet.path)
                            .absolute()
                            .left(px(left))
                            .top(px(top))
                            .size(px(sheet_size)),
                    )
            }
        };

        let element = match id.zip(title) {
            Some((id, title)) => element
                .id(id)
                .tooltip(move |_window, cx| {
                    let title = title.clone();
                    cx.new(|_cx| EmojiTitle { title }).into()
                })
                .into_any_element(),
            None => element.into_any_element(),
        };

        Some(element)
    }
}

/// Hover label carrying an emoji's catalog name.
struct EmojiTitle {
    title: SharedString,
}

impl Render for EmojiTitle {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = &cx.get_theme().layout;
        let colors = &cx.theme_variant().colors;

        div()
            .px(layout.padding.md)
            .py(layout.padding.sm)
            .rounded(layout.corner_radii.sm)
            .bg(colors.background.secondary)
            .text_color(colors.text.primary)
            .text_size(layout.text.default_font.sizes.caption)
            .child(self.title.clone())
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use crate::theme::{Theme, ThemeExt};
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_emoji_renders_both_paths(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.set_global(NativeEmojiSupport {
                max_version: Some(5.0),
            });
            cx.set_global(EmojiSpriteSheet::default());

            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| EmojiTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }

    struct EmojiTestView;

    impl gpui::Render for EmojiTestView {
        fn render(
            &mut self,
            _window: &mut gpui::Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .flex()
                .child(Emoji::new("😀"))
                .child(Emoji::new("🫡").inline(true).size(18.))
                .child(Emoji::new("😀").id("grin"))
                .child(Emoji::new("🫡").id("salute").size(32.))
                .child(Emoji::new("nope"))
        }
    }
}
