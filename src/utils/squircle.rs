use gpui::{ColorSpace, linear_color_stop, linear_gradient};
use gpui_squircle::{Squircle, SquircleStyled};

use crate::utils::rgb_a;

const LIT_EDGE: u32 = 0xE8E4FF;
const SHADED_EDGE: u32 = 0x110F15;

pub trait SquircleExt {
    /// Border lit from above, fading to shade at the bottom edge.
    fn border_highlight_color(self, opacity: f32) -> Self;
}

impl SquircleExt for Squircle {
    fn border_highlight_color(self, opacity: f32) -> Self {
        let lit = linear_color_stop(rgb_a(LIT_EDGE, opacity), 0.);
        let shaded = linear_color_stop(rgb_a(SHADED_EDGE, opacity), 1.);

        self.border_color(linear_gradient(180., lit, shaded).color_space(ColorSpace::Oklab))
    }
}
