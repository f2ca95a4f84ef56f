use std::time::Duration;

use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, MouseButton, ParentElement,
    Pixels, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px, relative, svg,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::{Lerp, TransitionExt};

use crate::{
    DialogIconKind, conditional_transition,
    primitives::FocusRing,
    theme::ThemeExt,
    utils::{
        ElementIdExt, RgbaExt, SquircleExt, checked_transition, disabled_transition, rgb_a,
    },
};

type ToggleHandler = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckboxShape {
    #[default]
    Square,
    /// Used by pickers where the whole row is the hit target.
    Circle,
}

impl CheckboxShape {
    fn corner_radius(&self, size: Pixels, cx: &App) -> Pixels {
        match self {
            CheckboxShape::Square => cx.get_theme().layout.corner_radii.sm,
            CheckboxShape::Circle => size / 2.,
        }
    }
}

/// Check box whose checked flag is owned by the caller.
///
/// `on_click` receives the value the box should switch to. Without a
/// handler the box only displays its state and clicks reach the parent.
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    glyph: SharedString,
    shape: CheckboxShape,
    checked: bool,
    disabled: bool,
    on_click: Option<ToggleHandler>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            glyph: DialogIconKind::Checkmark.into(),
            shape: CheckboxShape::Square,
            checked: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn glyph(mut self, glyph: impl Into<SharedString>) -> Self {
        self.glyph = glyph.into();
        self
    }

    pub fn shape(mut self, shape: CheckboxShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, on_click: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    fn toggle(&self, window: &mut Window, cx: &mut App) {
        if let Some(on_click) = self.on_click.as_ref() {
            (on_click)(&!self.checked, window, cx);
        }
    }
}

impl RenderOnce for Checkbox {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let size = cx.get_theme().layout.size.sm;
        let corner_radius = self.shape.corner_radius(size, cx);

        let colors = &cx.theme_variant().colors;
        let accent: Rgba = colors.accent.primary;
        let fill = colors.background.tertiary;
        let border = colors.background.quaternary;
        let border_hover = border.lerp(&colors.text.primary, 0.07);
        let border_pressed = border.lerp(&colors.text.primary, 0.16);

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
        let is_pressed = *pressed.read(cx);
        let is_focus = focus_handle.is_focused(window);
        let is_disabled = self.disabled;

        if is_focus && is_disabled {
            window.blur();
        }

        let opacity_state = disabled_transition(self.id.clone(), window, cx, is_disabled);
        let checked_state = checked_transition(
            self.id.clone(),
            window,
            cx,
            Duration::from_millis(285),
            self.checked,
        );
        let border_state = conditional_transition!(
            self.id.with_suffix("state:transition:border_color"),
            window,
            cx,
            Duration::from_millis(365),
            {
                is_focus => accent,
                is_pressed => border_pressed,
                is_hover => border_hover,
                _ => border
            }
        );

        let glyph = self.glyph.clone();
        let interactive = !is_disabled && self.on_click.is_some();

        div()
            .id(self.id.clone())
            .relative()
            .flex_none()
            .size(size)
            .flex()
            .items_center()
            .justify_center()
            .when(interactive, |this| this.cursor(CursorStyle::PointingHand))
            .with_transitions(opacity_state, |_cx, this, opacity| this.opacity(opacity))
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle.clone())
                    .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(fill)
                    .border(px(1.))
                    .border_inside()
                    .with_transitions(border_state, |_cx, this, border| this.border_color(border)),
            )
            .child(
                div()
                    .absolute()
                    .size_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .with_transitions(checked_state, move |_cx, this, delta| {
                        this.child(
                            squircle()
                                .absolute_expand()
                                .rounded(corner_radius)
                                .border(px(1.))
                                .border_inside()
                                .bg(accent.alpha(delta))
                                .border_highlight_color(delta * 0.15),
                        )
                        .child(
                            svg()
                                .path(glyph.clone())
                                .size(relative(0.48))
                                .text_color(rgb_a(0xFFFFFF, delta)),
                        )
                    }),
            )
            .when(interactive, |this| {
                let hovered_on_hover = hovered.clone();
                let pressed_on_down = pressed.clone();

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
                .on_mouse_up_out(MouseButton::Left, {
                    let pressed = pressed.clone();
                    move |_event, _window, cx| {
                        hovered.update(cx, |this, cx| {
                            *this = false;
                            cx.notify();
                        });
                        pressed.update(cx, |this, cx| {
                            *this = false;
                            cx.notify();
                        });
                    }
                })
                .on_click(move |_event, window, cx| {
                    window.prevent_default();
                    cx.stop_propagation();

                    if !is_focus {
                        window.blur();
                    }

                    pressed.update(cx, |this, cx| {
                        *this = false;
                        cx.notify();
                    });

                    self.toggle(window, cx);
                })
                .track_focus(&focus_handle)
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::theme::Theme;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_circle_radius_is_half_the_size(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let size = px(24.);
            assert_eq!(CheckboxShape::Circle.corner_radius(size, cx), px(12.));
            assert_eq!(
                CheckboxShape::Square.corner_radius(size, cx),
                cx.get_theme().layout.corner_radii.sm
            );
        });
    }

    #[gpui::test]
    fn test_toggle_reports_the_opposite_value(cx: &mut TestAppContext) {
        let reported = Rc::new(Cell::new(None));

        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        let cx = cx.add_empty_window();

        cx.update(|window, cx| {
            let reported = reported.clone();
            Checkbox::new("agree")
                .checked(true)
                .on_click(move |value: &bool, _window: &mut Window, _cx: &mut App| {
                    reported.set(Some(*value))
                })
                .toggle(window, cx);
        });

        assert_eq!(reported.get(), Some(false));
    }

    #[gpui::test]
    fn test_toggle_without_handler_is_a_no_op(cx: &mut TestAppContext) {
        cx.update(|cx| cx.set_theme(Theme::DEFAULT));
        let cx = cx.add_empty_window();

        cx.update(|window, cx| Checkbox::new("display-only").checked(true).toggle(window, cx));
    }

    struct CheckboxTestView {
        checked: bool,
    }

    impl gpui::Render for CheckboxTestView {
        fn render(&mut self, _window: &mut Window, cx: &mut gpui::Context<Self>) -> impl IntoElement {
            div()
                .size_full()
                .child(
                    Checkbox::new("interactive")
                        .checked(self.checked)
                        .on_click(cx.listener(|view, checked: &bool, _window, cx| {
                            view.checked = *checked;
                            cx.notify();
                        })),
                )
                .child(
                    Checkbox::new("display")
                        .shape(CheckboxShape::Circle)
                        .checked(true)
                        .disabled(true),
                )
        }
    }

    #[gpui::test]
    fn test_checkbox_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| CheckboxTestView { checked: false })
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);
    }
}
