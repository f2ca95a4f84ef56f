use gpui::App;

use crate::theme::{ActiveVariantId, Theme, ThemeVariant};

/// Theme access on the app context. Components read everything they draw
/// with from here, so [`ThemeExt::set_theme`] must run before the first frame.
pub trait ThemeExt {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    fn get_theme(&self) -> &Theme;

    /// Switches between dark and light. Out of range indices fall back to
    /// the first variant.
    fn set_theme_variant(&mut self, index: usize);

    fn theme_variant(&self) -> &ThemeVariant;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn set_theme_variant(&mut self, index: usize) {
        self.set_global(ActiveVariantId(index));
    }

    fn theme_variant(&self) -> &ThemeVariant {
        self.get_theme().variants.active(self)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::ThemeVariantKind;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_custom_theme_replaces_builtin(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let mut custom: Theme = Theme::DEFAULT.clone();
            custom.name = "Custom".into();

            cx.set_theme(Theme::DEFAULT);
            cx.set_theme(custom);
            assert_eq!(cx.get_theme().name.as_ref(), "Custom");
        });
    }

    #[gpui::test]
    fn test_theme_has_layout(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let size = &cx.get_theme().layout.size;

            assert!(size.sm > gpui::px(0.));
            assert!(size.is_ascending());
        });
    }

    #[gpui::test]
    fn test_active_variant_defaults_to_first(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            assert_eq!(cx.theme_variant().kind, ThemeVariantKind::Dark);
        });
    }

    #[gpui::test]
    fn test_active_variant_can_be_switched(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.set_theme_variant(1);
            assert_eq!(cx.theme_variant().kind, ThemeVariantKind::Light);
        });
    }

    #[gpui::test]
    fn test_out_of_range_variant_falls_back(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.set_theme_variant(42);
            assert_eq!(cx.theme_variant().kind, ThemeVariantKind::Dark);
        });
    }

    #[gpui::test]
    fn test_theme_variant_has_colors(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let colors = &cx.theme_variant().colors;

            assert!(colors.text.primary.a > 0.0);
            assert!(colors.text.secondary.a > 0.0);
            assert!(colors.accent.informative.a > 0.0);
            assert_eq!(colors.avatar_placeholders.len(), 8);
        });
    }
}
