#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

/// Built-in glyphs that map to the bundled SVG assets.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum DialogIconKind {
    #[assoc(path = "icons/call.svg".into())]
    Call,
    #[assoc(path = "icons/call_end.svg".into())]
    CallEnd,
    #[assoc(path = "icons/mic.svg".into())]
    Mic,
    #[assoc(path = "icons/mic_off.svg".into())]
    MicOff,
    #[assoc(path = "icons/videocam.svg".into())]
    Videocam,
    #[assoc(path = "icons/videocam_off.svg".into())]
    VideocamOff,
    #[assoc(path = "icons/screen_share.svg".into())]
    ScreenShare,
    #[assoc(path = "icons/screen_share_stop.svg".into())]
    ScreenShareStop,
    #[assoc(path = "icons/arrow_back.svg".into())]
    ArrowBack,
    #[assoc(path = "icons/close.svg".into())]
    Close,
    /// Checkmark for confirmations and selections.
    #[assoc(path = "icons/checkmark.svg".into())]
    Checkmark,
    /// Shown over avatars to pick a new image.
    #[assoc(path = "icons/camera.svg".into())]
    Camera,
    #[assoc(path = "icons/group.svg".into())]
    Group,
    #[assoc(path = "icons/channel.svg".into())]
    Channel,
}

impl DialogIconKind {
    pub const ALL: [DialogIconKind; 14] = [
        Self::Call,
        Self::CallEnd,
        Self::Mic,
        Self::MicOff,
        Self::Videocam,
        Self::VideocamOff,
        Self::ScreenShare,
        Self::ScreenShareStop,
        Self::ArrowBack,
        Self::Close,
        Self::Checkmark,
        Self::Camera,
        Self::Group,
        Self::Channel,
    ];
}

impl From<DialogIconKind> for SharedString {
    fn from(value: DialogIconKind) -> Self {
        value.path()
    }
}
