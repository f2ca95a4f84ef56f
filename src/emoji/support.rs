use cfg_if::cfg_if;
use gpui::{Global, SharedString};

use super::EmojiEntry;

/// Newest emoji version the platform's color font can draw.
///
/// `None` means glyphs always come from the sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NativeEmojiSupport {
    pub max_version: Option<f32>,
}

impl NativeEmojiSupport {
    pub const NONE: Self = Self { max_version: None };

    /// Best guess for the target platform's bundled emoji font.
    pub fn detect() -> Self {
        cfg_if! {
            if #[cfg(target_os = "macos")] {
                Self { max_version: Some(14.0) }
            } else if #[cfg(target_os = "windows")] {
                Self { max_version: Some(12.0) }
            } else {
                Self::NONE
            }
        }
    }

    pub fn renders(&self, entry: &EmojiEntry) -> bool {
        self.max_version
            .is_some_and(|max_version| entry.version <= max_version)
    }
}

impl Global for NativeEmojiSupport {}

/// Asset path of the shared sprite sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiSpriteSheet {
    pub path: SharedString,
}

impl Default for EmojiSpriteSheet {
    fn default() -> Self {
        Self {
            path: "emoji/sheet_apple_49.png".into(),
        }
    }
}

impl Global for EmojiSpriteSheet {}
