use gpui::{App, ClickEvent, ElementId, IntoElement, Pixels, RenderOnce, SharedString, Window};

use crate::{
    components::{Button, ButtonPalette, ButtonVariant},
    theme::{ThemeAccentKind, ThemeExt},
    utils::rgb_a,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconButtonSize {
    #[default]
    Normal,
    Large,
}

impl IconButtonSize {
    pub fn resolve(&self, cx: &App) -> Pixels {
        match self {
            IconButtonSize::Normal => cx.get_theme().layout.size.lg,
            IconButtonSize::Large => cx.get_theme().layout.size.xl,
        }
    }
}

/// A round, glyph-only [`Button`] tinted with one of the theme's accents.
///
/// Flat buttons are filled with the accent and draw the glyph in white, the
/// other style is a translucent tint with an accent-colored glyph.
#[derive(IntoElement)]
pub struct IconButton {
    id: ElementId,
    glyph: SharedString,
    accent: ThemeAccentKind,
    size: IconButtonSize,
    flat: bool,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl IconButton {
    pub fn new(id: impl Into<ElementId>, glyph: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            glyph: glyph.into(),
            accent: ThemeAccentKind::Primary,
            size: IconButtonSize::Normal,
            flat: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn accent(mut self, accent: ThemeAccentKind) -> Self {
        self.accent = accent;
        self
    }

    pub fn size(mut self, size: IconButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn glyph(&self) -> &SharedString {
        &self.glyph
    }

    fn palette(&self, cx: &App) -> ButtonPalette {
        if self.flat {
            let background = cx.theme_variant().colors.background.primary;
            return ButtonPalette::solid(self.accent.resolve(cx), rgb_a(0xFFFFFF, 1.), background);
        }

        match self.accent {
            ThemeAccentKind::Primary => ButtonVariant::Secondary,
            ThemeAccentKind::Constructive => ButtonVariant::Constructive,
            ThemeAccentKind::Destructive => ButtonVariant::Destructive,
            ThemeAccentKind::Informative => ButtonVariant::Informative,
        }
        .palette(cx)
    }
}

impl RenderOnce for IconButton {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let diameter = self.size.resolve(cx);
        let palette = self.palette(cx);

        let button = Button::new(self.id)
            .icon(self.glyph)
            .icon_size(diameter * 0.5)
            .size(diameter)
            .p(gpui::px(0.))
            .rounded(diameter / 2.)
            .palette(palette)
            .disabled(self.disabled);

        match self.on_click {
            Some(on_click) => button.on_click(on_click),
            None => button,
        }
    }
}
