use std::time::Duration;

use gpui::{
    App, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, Length, MouseButton, ParentElement, Pixels, RenderOnce, Rgba, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px, relative,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::TransitionExt;

use crate::{
    components::Icon,
    conditional_transition,
    primitives::{FocusRing, truncated_text},
    theme::{ThemeAccentKind, ThemeExt},
    utils::{ElementIdExt, PixelsExt, RgbaExt, SquircleExt, disabled_transition},
};

mod icon_button;
pub use icon_button::*;

const HOVER_STRENGTH: f32 = 0.15;
const PRESS_STRENGTH: f32 = 0.35;
const TINT_ALPHA: f32 = 0.1;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Colors a button moves between while it is hovered and pressed.
///
/// `highlight` is the opacity of the lit border at rest and
/// `highlight_active` the one while hovered or pressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonPalette {
    pub bg: Rgba,
    pub bg_hover: Rgba,
    pub bg_press: Rgba,
    pub text: Rgba,
    pub highlight: f32,
    pub highlight_active: f32,
}

impl ButtonPalette {
    /// Filled with `color`. `background` is the surface the button sits on.
    pub fn solid(color: Rgba, text: Rgba, background: Rgba) -> Self {
        Self {
            bg: color,
            bg_hover: color.apply_delta(&background, HOVER_STRENGTH),
            bg_press: color.apply_delta(&background, PRESS_STRENGTH),
            text,
            highlight: 0.15,
            highlight_active: 0.15,
        }
    }

    /// A translucent wash of `color` behind `color` text.
    pub fn tinted(color: Rgba, background: Rgba) -> Self {
        Self {
            bg: color.alpha(TINT_ALPHA),
            bg_hover: color
                .apply_delta(&background, HOVER_STRENGTH)
                .alpha(TINT_ALPHA * 1.5),
            bg_press: color
                .apply_delta(&background, PRESS_STRENGTH)
                .alpha(TINT_ALPHA * 2.),
            text: color,
            highlight: 0.05,
            highlight_active: 0.05,
        }
    }

    /// Only text until hovered.
    pub fn ghost(color: Rgba, background: Rgba) -> Self {
        Self {
            bg: color.alpha(0.),
            bg_hover: color.alpha(TINT_ALPHA),
            bg_press: color
                .apply_delta(&background, HOVER_STRENGTH)
                .alpha(TINT_ALPHA),
            text: color,
            highlight: 0.,
            highlight_active: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ButtonFill {
    Solid,
    Tinted,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    SecondaryGhost,
    Constructive,
    ConstructiveGhost,
    Destructive,
    DestructiveGhost,
    Informative,
    InformativeGhost,
}

impl ButtonVariant {
    fn fill(&self) -> ButtonFill {
        match self {
            ButtonVariant::Primary => ButtonFill::Solid,
            ButtonVariant::Secondary
            | ButtonVariant::Constructive
            | ButtonVariant::Destructive
            | ButtonVariant::Informative => ButtonFill::Tinted,
            ButtonVariant::SecondaryGhost
            | ButtonVariant::ConstructiveGhost
            | ButtonVariant::DestructiveGhost
            | ButtonVariant::InformativeGhost => ButtonFill::Ghost,
        }
    }

    fn color(&self, cx: &App) -> Rgba {
        match self {
            ButtonVariant::Primary => ThemeAccentKind::Primary.resolve(cx),
            ButtonVariant::Secondary | ButtonVariant::SecondaryGhost => {
                cx.theme_variant().colors.text.secondary
            }
            ButtonVariant::Constructive | ButtonVariant::ConstructiveGhost => {
                ThemeAccentKind::Constructive.resolve(cx)
            }
            ButtonVariant::Destructive | ButtonVariant::DestructiveGhost => {
                ThemeAccentKind::Destructive.resolve(cx)
            }
            ButtonVariant::Informative | ButtonVariant::InformativeGhost => {
                ThemeAccentKind::Informative.resolve(cx)
            }
        }
    }

    pub fn palette(&self, cx: &App) -> ButtonPalette {
        let colors = &cx.theme_variant().colors;
        let background = colors.background.primary;
        let color = self.color(cx);

        match self.fill() {
            ButtonFill::Solid => ButtonPalette::solid(color, colors.text.primary, background),
            ButtonFill::Tinted => ButtonPalette::tinted(color, background),
            ButtonFill::Ghost => ButtonPalette::ghost(color, background),
        }
    }
}

/// Themed squircle button with an optional leading glyph.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: Option<SharedString>,
    icon: Option<SharedString>,
    icon_size: Pixels,
    variant: ButtonVariant,
    palette: Option<ButtonPalette>,
    disabled: bool,
    on_click: Option<ClickHandler>,
    justify_start: bool,
    padding: Option<Pixels>,
    width: Length,
    height: Option<Length>,
    corner_radius: Option<Pixels>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            icon: None,
            icon_size: px(16.),
            variant: ButtonVariant::Primary,
            palette: None,
            disabled: false,
            on_click: None,
            justify_start: false,
            padding: None,
            width: Length::Auto,
            height: None,
            corner_radius: None,
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Glyph drawn before the text, an asset path or a
    /// [`crate::DialogIconKind`].
    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_size(mut self, icon_size: impl Into<Pixels>) -> Self {
        self.icon_size = icon_size.into();
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Custom colors, replacing the variant's.
    pub fn palette(mut self, palette: ButtonPalette) -> Self {
        self.palette = Some(palette);
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

    /// Aligns the content to the leading edge instead of centering it.
    pub fn justify_start(mut self) -> Self {
        self.justify_start = true;
        self
    }

    pub fn rounded(mut self, corner_radius: impl Into<Pixels>) -> Self {
        self.corner_radius = Some(corner_radius.into());
        self
    }

    /// Uniform padding, replacing the padding derived from the theme.
    pub fn p(mut self, padding: impl Into<Pixels>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn w_full(mut self) -> Self {
        self.width = relative(1.).into();
        self
    }

    /// Fixed square size, used by glyph-only buttons.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        let size = size.into();
        self.width = size;
        self.height = Some(size);
        self
    }

    fn resolved_palette(&self, cx: &App) -> ButtonPalette {
        self.palette.unwrap_or_else(|| self.variant.palette(cx))
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let palette = self.resolved_palette(cx);

        let layout = &cx.get_theme().layout;
        let font = &layout.text.default_font;
        let font_family = font.family[0].clone();
        let text_size = font.sizes.body;
        let gap = layout.padding.lg;
        let corner_radius = self.corner_radius.unwrap_or(layout.corner_radii.md);
        let vertical_padding =
            layout
                .size
                .lg
                .padding_needed_for_height(window, text_size, font.line_height);

        let hovered = window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_, _| false);
        let pressed =
            window.use_keyed_state(self.id.with_suffix("state:pressed"), cx, |_, _| false);
        let focus_handle = window
            .use_keyed_state(self.id.with_suffix("state:focus_handle"), cx, |_, cx| {
                cx.focus_handle().tab_stop(true)
            })
            .read(cx)
            .clone();

        let is_hover = *hovered.read(cx);
        let is_focus = focus_handle.is_focused(window);
        let is_active = is_focus || *pressed.read(cx);

        if is_focus && self.disabled {
            window.blur();
        }

        let opacity_state = disabled_transition(self.id.clone(), window, cx, self.disabled);

        let bg_state = conditional_transition!(
            self.id.with_suffix("state:transition:bg"),
            window,
            cx,
            Duration::from_millis(250),
            {
                is_active => palette.bg_press,
                is_hover => palette.bg_hover,
                _ => palette.bg
            }
        );

        let highlight_state = conditional_transition!(
            self.id.with_suffix("state:transition:highlight"),
            window,
            cx,
            Duration::from_millis(250),
            {
                is_active || is_hover => palette.highlight_active,
                _ => palette.highlight
            }
        );

        let text_color_state = conditional_transition!(
            self.id.with_suffix("state:transition:text"),
            window,
            cx,
            Duration::from_millis(250),
            palette.text
        );

        let icon = self.icon;
        let icon_size = self.icon_size;
        let justify_start = self.justify_start;

        let content = div()
            .w_full()
            .flex()
            .items_center()
            .gap(gap)
            .map(|this| {
                if justify_start {
                    this.justify_start()
                } else {
                    this.justify_center()
                }
            })
            .with_transitions(text_color_state, move |_cx, this, text_color| {
                this.text_color(text_color)
                    .when_some(icon.clone(), |this, icon| {
                        this.child(Icon::new(icon).size(icon_size).color(text_color))
                    })
            })
            .when_some(self.text, |this, text| {
                this.child(
                    truncated_text(text)
                        .font_family(font_family)
                        .text_size(text_size),
                )
            });

        div()
            .debug_selector(|| self.id.to_string())
            .id(self.id.clone())
            .relative()
            .flex_none()
            .flex()
            .flex_col()
            .justify_center()
            .w(self.width)
            .when_some(self.height, |this, height| this.h(height))
            .map(|this| match self.padding {
                Some(padding) => this.p(padding),
                None => this.py(vertical_padding).px(gap),
            })
            .cursor(if self.disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .with_transitions(opacity_state, |_cx, this, opacity| this.opacity(opacity))
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle.clone())
                    .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .border(px(1.))
                    .border_inside()
                    .with_transitions(
                        (bg_state, highlight_state),
                        |_cx, this, (bg, highlight)| this.bg(bg).border_highlight_color(highlight),
                    ),
            )
            .child(content)
            .when(!self.disabled, |this| {
                let on_click = self.on_click;
                let hovered_on_hover = hovered.clone();
                let pressed_on_down = pressed.clone();
                let pressed_on_click = pressed.clone();

                this.on_hover(move |hover, _window, cx| {
                    hovered_on_hover.update(cx, |this, cx| {
                        *this = *hover;
                        cx.notify();
                    });
                })
                .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                    // Keeps the focus ring hidden for pointer presses.
                    window.prevent_default();
                    pressed_on_down.update(cx, |this, cx| {
                        *this = true;
                        cx.notify();
                    });
                })
                .on_click(move |event, window, cx| {
                    window.prevent_default();
                    cx.stop_propagation();

                    if !is_focus {
                        window.blur();
                    }

                    pressed_on_click.update(cx, |this, cx| {
                        *this = false;
                        cx.notify();
                    });

                    if let Some(on_click) = on_click.as_ref() {
                        (on_click)(event, window, cx);
                    }
                })
                .on_mouse_up_out(MouseButton::Left, move |_event, _window, cx| {
                    hovered.update(cx, |this, cx| {
                        *this = false;
                        cx.notify();
                    });
                    pressed.update(cx, |this, cx| {
                        *this = false;
                        cx.notify();
                    });
                })
                .track_focus(&focus_handle)
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_ghost_variants_start_transparent(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            for variant in [
                ButtonVariant::SecondaryGhost,
                ButtonVariant::ConstructiveGhost,
                ButtonVariant::DestructiveGhost,
                ButtonVariant::InformativeGhost,
            ] {
                let palette = variant.palette(cx);
                assert_eq!(palette.bg.a, 0., "{variant:?} should be transparent");
                assert!(palette.bg_hover.a > 0.);
            }
        });
    }

    #[gpui::test]
    fn test_variant_text_follows_accent(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let destructive = cx.theme_variant().colors.accent.destructive;

            assert_eq!(ButtonVariant::Destructive.palette(cx).text, destructive);
            assert_eq!(ButtonVariant::DestructiveGhost.palette(cx).text, destructive);
            assert_eq!(
                ButtonVariant::Primary.palette(cx).bg,
                cx.theme_variant().colors.accent.primary
            );
        });
    }

    #[gpui::test]
    fn test_custom_palette_replaces_variant(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let colors = &cx.theme_variant().colors;
            let palette =
                ButtonPalette::solid(colors.accent.constructive, colors.text.primary, colors.background.primary);

            let button = Button::new("answer")
                .variant(ButtonVariant::Destructive)
                .palette(palette);

            assert_eq!(button.resolved_palette(cx), palette);
            assert_eq!(
                Button::new("end").resolved_palette(cx),
                ButtonVariant::Primary.palette(cx)
            );
        });
    }

    struct ButtonTestView;

    impl gpui::Render for ButtonTestView {
        fn render(
            &mut self,
            _window: &mut Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(Button::new("next").text("Next").w_full())
                .child(Button::new("finish").text("Create").disabled(true))
                .child(
                    Button::new("remove")
                        .text("Remove photo")
                        .variant(ButtonVariant::DestructiveGhost)
                        .justify_start(),
                )
        }
    }

    #[gpui::test]
    fn test_button_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| ButtonTestView))
                .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }
}
