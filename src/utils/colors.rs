use gpui::Rgba;

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Moves the color away from `background` by `strength`, which lightens
    /// colors on dark backgrounds and darkens them on light ones.
    fn apply_delta(&self, background: &Rgba, strength: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn apply_delta(&self, background: &Rgba, strength: f32) -> Self {
        let shift = |channel: f32, bg: f32| {
            let delta = channel - bg;
            let target = if delta >= 0. { 1. } else { 0. };
            (channel + (target - channel) * strength).clamp(0., 1.)
        };

        Rgba {
            r: shift(self.r, background.r),
            g: shift(self.g, background.g),
            b: shift(self.b, background.b),
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_a_splits_channels() {
        let color = rgb_a(0xFF8000, 0.5);
        assert_eq!(color.r, 1.);
        assert!((color.g - 128. / 255.).abs() < f32::EPSILON);
        assert_eq!(color.b, 0.);
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn test_apply_delta_lightens_on_dark_background() {
        let dark = rgb_a(0x101010, 1.);
        let accent = rgb_a(0x4060C0, 1.);
        let shifted = accent.apply_delta(&dark, 0.25);

        assert!(shifted.r > accent.r);
        assert!(shifted.b > accent.b);
        assert_eq!(shifted.a, accent.a);
    }

    #[test]
    fn test_apply_delta_darkens_on_light_background() {
        let light = rgb_a(0xFAFAFA, 1.);
        let accent = rgb_a(0x4060C0, 1.);
        let shifted = accent.apply_delta(&light, 0.25);

        assert!(shifted.r < accent.r);
        assert!(shifted.g < accent.g);
    }
}
