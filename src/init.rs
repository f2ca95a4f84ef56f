use gpui::{App, Window};

use crate::{
    emoji::{EmojiSpriteSheet, NativeEmojiSupport},
    theme::ThemeExt,
};

/// Registers the text input key bindings and installs the emoji globals
/// unless the host already set them.
pub fn init(cx: &mut App) {
    gpui_primitives::input::init(cx);

    if cx.try_global::<NativeEmojiSupport>().is_none() {
        let support = NativeEmojiSupport::detect();
        log::debug!("native emoji support: {:?}", support.max_version);
        cx.set_global(support);
    }

    if cx.try_global::<EmojiSpriteSheet>().is_none() {
        cx.set_global(EmojiSpriteSheet::default());
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_init_keeps_host_globals(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_global(NativeEmojiSupport::NONE);
            cx.set_global(EmojiSpriteSheet {
                path: "custom/sheet.png".into(),
            });

            init(cx);

            assert_eq!(cx.global::<NativeEmojiSupport>(), &NativeEmojiSupport::NONE);
            assert_eq!(
                cx.global::<EmojiSpriteSheet>().path.as_ref(),
                "custom/sheet.png"
            );
        });
    }

    #[gpui::test]
    fn test_init_installs_defaults(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init(cx);

            assert_eq!(
                cx.global::<EmojiSpriteSheet>().path,
                EmojiSpriteSheet::default().path
            );
            assert_eq!(
                cx.global::<NativeEmojiSupport>(),
                &NativeEmojiSupport::detect()
            );
        });
    }
}
