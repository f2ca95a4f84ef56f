use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Semantic accent colors. Call controls and buttons pick one of these
/// instead of a raw color.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeAccentKind {
    #[assoc(resolve = cx.theme_variant().colors.accent.primary)]
    Primary,
    /// Positive actions, e.g. answering a call.
    #[assoc(resolve = cx.theme_variant().colors.accent.constructive)]
    Constructive,
    /// Destructive actions, e.g. ending a call.
    #[assoc(resolve = cx.theme_variant().colors.accent.destructive)]
    Destructive,
    /// Neutral toggles such as camera and screen sharing.
    #[assoc(resolve = cx.theme_variant().colors.accent.informative)]
    Informative,
}
