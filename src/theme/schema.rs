use std::{ops::Deref, sync::LazyLock};

use gpui::{AbsoluteLength, App, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{de_abs_length, de_def_length, de_font_family, de_non_empty, de_pixels};

/// Colors and metrics shared by every component, loaded from JSON.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub variants: ThemeVariants,
}

/// Handle to a theme compiled into the crate. Parsed once on first use.
pub struct BuiltinTheme(fn() -> &'static Theme);

impl Deref for BuiltinTheme {
    type Target = Theme;

    fn deref(&self) -> &Theme {
        (self.0)()
    }
}

impl AsRef<Theme> for BuiltinTheme {
    fn as_ref(&self) -> &Theme {
        (self.0)()
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

fn dialog_theme() -> &'static Theme {
    static THEME: LazyLock<Theme> = LazyLock::new(|| {
        Theme::from_json(include_str!("../../themes/default.json"))
            .unwrap_or_else(|err| panic!("built-in dialog theme is invalid: {err}"))
    });

    &THEME
}

impl Theme {
    pub const DEFAULT: BuiltinTheme = BuiltinTheme(dialog_theme);

    pub fn from_json(json: impl AsRef<str>) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeScale,
    pub size: ThemeScale,
    pub padding: ThemeScale,
}

/// Four steps of one metric, from smallest to largest.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ThemeScale {
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
}

impl ThemeScale {
    pub fn is_ascending(&self) -> bool {
        self.sm <= self.md && self.md <= self.lg && self.lg <= self.xl
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    /// Size of one rem in the windows the theme is applied to.
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_font_family")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_sm: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

/// Dark and light renditions of the theme. The first one is active until
/// [`crate::theme::ThemeExt::set_theme_variant`] picks another.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_non_empty")]
    pub variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    pub fn active(&self, cx: &App) -> &ThemeVariant {
        cx.try_global::<ActiveVariantId>()
            .and_then(|id| self.variants.get(id.0))
            .unwrap_or(&self.variants[0])
    }
}

pub struct ActiveVariantId(pub usize);

impl Global for ActiveVariantId {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub colors: ThemeColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
    /// Scrim drawn behind modals.
    pub overlay: Rgba,
    /// Fills for avatars without an image, picked per peer.
    #[serde(deserialize_with = "de_non_empty")]
    pub avatar_placeholders: SmallVec<[Rgba; 8]>,
}

/// Surfaces from the window background (`primary`) up to the most raised
/// layer (`quinary`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub quaternary: Rgba,
    pub quinary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    pub constructive: Rgba,
    pub destructive: Rgba,
    pub informative: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_theme_parses() {
        let theme: &Theme = &Theme::DEFAULT;

        assert_eq!(theme.name.as_ref(), "Dialog");
        assert_eq!(theme.variants.variants.len(), 2);
        assert!(theme.layout.size.is_ascending());
        assert!(theme.layout.padding.is_ascending());
        assert!(theme.layout.corner_radii.is_ascending());
    }

    #[test]
    fn test_theme_without_variants_is_rejected() {
        let mut json: serde_json::Value =
            serde_json::from_str(include_str!("../../themes/default.json")).unwrap();
        json["variants"] = serde_json::json!([]);

        assert!(Theme::from_json(json.to_string()).is_err());
    }
}
