use std::time::Duration;

use gpui::{
    App, ElementId, Entity, InteractiveElement, IntoElement, ParentElement, RenderOnce, Rgba,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_primitives::input::{Input, InputState};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::{Lerp, TransitionExt};

use crate::{
    conditional_transition,
    primitives::FocusRing,
    theme::ThemeExt,
    utils::{ElementIdExt, PixelsExt, RgbaExt, disabled_transition},
};

/// Labelled text input used by the dialog forms.
///
/// The text lives in the caller's [`InputState`], so it survives re-renders.
#[derive(IntoElement)]
pub struct TextField {
    id: ElementId,
    state: Entity<InputState>,
    label: Option<SharedString>,
    prefix: Option<SharedString>,
    invalid: bool,
    disabled: bool,
    input: Input,
}

struct FieldColors {
    fill: Rgba,
    border: Rgba,
    border_hover: Rgba,
    focus: Rgba,
    invalid: Rgba,
    text: Rgba,
    muted: Rgba,
}

impl FieldColors {
    fn from_theme(cx: &App) -> Self {
        let colors = &cx.theme_variant().colors;
        let border = colors.background.quaternary;

        Self {
            fill: colors.background.tertiary,
            border,
            border_hover: border.lerp(&colors.text.primary, 0.07),
            focus: colors.accent.primary,
            invalid: colors.accent.destructive,
            text: colors.text.primary,
            muted: colors.text.secondary,
        }
    }

    fn ring(&self, invalid: bool) -> Rgba {
        if invalid { self.invalid } else { self.focus }
    }
}

impl TextField {
    pub fn new(id: impl Into<ElementId>, state: Entity<InputState>) -> Self {
        let id = id.into();
        let input = Input::new(id.with_suffix("input"), state.clone());

        Self {
            id,
            state,
            label: None,
            prefix: None,
            invalid: false,
            disabled: false,
            input,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Fixed text before the editable part, e.g. the public link host.
    pub fn prefix(mut self, prefix: impl Into<SharedString>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn placeholder(mut self, text: impl Into<SharedString>) -> Self {
        self.input = self.input.placeholder(text);
        self
    }

    pub fn multiline(mut self) -> Self {
        self.input = self.input.multiline();
        self
    }

    /// Normalizes every edit before it is stored.
    pub fn map_text(
        mut self,
        f: impl Fn(SharedString) -> SharedString + Send + Sync + 'static,
    ) -> Self {
        self.input = self.input.map_text(f);
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl RenderOnce for TextField {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = FieldColors::from_theme(cx);

        let layout = &cx.get_theme().layout;
        let font = &layout.text.default_font;
        let font_family = font.family[0].clone();
        let line_height = font.line_height;
        let text_size = font.sizes.body;
        let caption_size = font.sizes.caption;
        let corner_radius = layout.corner_radii.md;
        let inset = layout.padding.lg;
        let label_gap = layout.padding.sm;
        let vertical_inset = layout
            .size
            .lg
            .padding_needed_for_height(window, text_size, line_height);

        let hovered = window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_, _| false);
        let is_hover = *hovered.read(cx);

        let focus_handle = self.state.read(cx).focus_handle.clone();
        let is_focus = focus_handle.is_focused(window);
        let is_invalid = self.invalid;
        let is_disabled = self.disabled;

        if is_focus && is_disabled {
            window.blur();
        }

        let opacity_state = disabled_transition(self.id.clone(), window, cx, is_disabled);
        let border_state = conditional_transition!(
            self.id.with_suffix("state:transition:border_color"),
            window,
            cx,
            Duration::from_millis(400),
            {
                is_invalid => colors.invalid,
                is_focus => colors.focus,
                is_hover => colors.border_hover,
                _ => colors.border
            }
        );

        let input = self
            .input
            .w_full()
            .font_family(font_family.clone())
            .text_size(text_size)
            .line_height(line_height)
            .text_color(colors.text)
            .placeholder_text_color(colors.muted)
            .selection_color(colors.focus.alpha(0.3))
            .disabled(is_disabled);

        let row = div()
            .w_full()
            .min_h_auto()
            .flex()
            .items_center()
            .when_some(self.prefix, |this, prefix| {
                this.child(
                    div()
                        .flex_none()
                        .font_family(font_family.clone())
                        .text_size(text_size)
                        .line_height(line_height)
                        .text_color(colors.muted)
                        .child(prefix),
                )
            })
            .child(input);

        let field = div()
            .id(self.id.clone())
            .relative()
            .w_full()
            .min_h_auto()
            .py(vertical_inset)
            .px(inset)
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle)
                    .color(colors.ring(is_invalid))
                    .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(colors.fill)
                    .border(px(1.))
                    .border_inside()
                    .with_transitions(border_state, |_cx, this, border| this.border_color(border)),
            )
            .child(row)
            .when(!is_disabled, |this| {
                this.on_hover(move |hover, _window, cx| {
                    hovered.update(cx, |this, cx| {
                        *this = *hover;
                        cx.notify();
                    });
                })
            });

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap(label_gap)
            .with_transitions(opacity_state, |_cx, this, opacity| this.opacity(opacity))
            .when_some(self.label, |this, label| {
                this.child(
                    div()
                        .font_family(font_family)
                        .text_size(caption_size)
                        .text_color(colors.muted)
                        .child(label),
                )
            })
            .child(field)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_invalid_ring_uses_destructive_accent(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let colors = FieldColors::from_theme(cx);
            let accent = &cx.theme_variant().colors.accent;

            assert_eq!(colors.ring(true), accent.destructive);
            assert_eq!(colors.ring(false), accent.primary);
        });
    }

    struct TextFieldTestView {
        state: Entity<InputState>,
    }

    impl gpui::Render for TextFieldTestView {
        fn render(
            &mut self,
            _window: &mut Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div()
                .size_full()
                .child(
                    TextField::new("shortname", self.state.clone())
                        .label("Short name")
                        .prefix("dlg.im/")
                        .placeholder("design"),
                )
                .child(
                    TextField::new("about", self.state.clone())
                        .multiline()
                        .invalid(true)
                        .disabled(true),
                )
        }
    }

    #[gpui::test]
    fn test_text_field_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            gpui_primitives::input::init(cx);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|cx| TextFieldTestView {
                    state: cx.new(|cx| InputState::new(cx)),
                })
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }
}
