use std::time::Duration;

use gpui::{
    App, ElementId, FocusHandle, IntoElement, Pixels, RenderOnce, Rgba, Styled, Window, px,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::TransitionExt;

use crate::{conditional_transition, theme::ThemeExt, utils::RgbaExt};

/// How far outside the host the ring starts before it settles.
const SPREAD: f32 = 8.;

/// Keyboard focus indicator. Placed as a child of the focusable element, it
/// grows out of the element's edges while `focus_handle` is focused.
#[derive(IntoElement)]
pub struct FocusRing {
    id: ElementId,
    focus_handle: FocusHandle,
    color: Option<Rgba>,
    corner_radius: Pixels,
}

impl FocusRing {
    pub fn new(id: impl Into<ElementId>, focus_handle: FocusHandle) -> Self {
        Self {
            id: id.into(),
            focus_handle,
            color: None,
            corner_radius: px(8.),
        }
    }

    /// Defaults to the primary accent.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Corner radius of the host element.
    pub fn rounded(mut self, corner_radius: impl Into<Pixels>) -> Self {
        self.corner_radius = corner_radius.into();
        self
    }
}

fn ring_geometry(corner_radius: Pixels, progress: f32) -> (Pixels, Pixels) {
    let spread = px((1. - progress) * SPREAD);
    (-spread, corner_radius + spread + px(1.))
}

impl RenderOnce for FocusRing {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let color = self
            .color
            .unwrap_or_else(|| cx.theme_variant().colors.accent.primary);
        let corner_radius = self.corner_radius;
        let is_focused = self.focus_handle.is_focused(window);

        let progress = conditional_transition!(
            self.id,
            window,
            cx,
            Duration::from_millis(365),
            {
                is_focused => 1.,
                _ => 0.
            }
        );

        squircle()
            .absolute()
            .border(px(3.))
            .border_outside()
            .with_transitions(progress, move |_cx, this, progress| {
                let (inset, radius) = ring_geometry(corner_radius, progress);

                this.inset(inset)
                    .rounded(radius)
                    .border_color(color.alpha(progress * 0.3))
            })
    }
}
