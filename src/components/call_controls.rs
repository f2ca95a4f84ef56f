use std::rc::Rc;

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, Styled, Window,
    div, prelude::FluentBuilder,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::TransitionExt;
use serde::{Deserialize, Serialize};

use crate::{
    DialogIconKind,
    components::{IconButton, IconButtonSize},
    theme::{ThemeAccentKind, ThemeExt},
    utils::{ElementIdExt, RgbaExt, visibility_transition},
};

/// Phase of a voice or video call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallState {
    RingingIncoming,
    RingingOutgoing,
    Connecting,
    InProgress,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallAction {
    Answer,
    End,
    MuteToggle,
    CameraToggle,
    ScreenShareToggle,
}

impl CallAction {
    pub fn key(&self) -> &'static str {
        match self {
            CallAction::Answer => "answer",
            CallAction::End => "end",
            CallAction::MuteToggle => "mic",
            CallAction::CameraToggle => "camera",
            CallAction::ScreenShareToggle => "screen_share",
        }
    }
}

/// One derived control: what it does, how it looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallButton {
    pub action: CallAction,
    pub accent: ThemeAccentKind,
    pub glyph: DialogIconKind,
}

type CallHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// The button row shown during a call.
///
/// Which buttons exist depends only on the call state and on which toggle
/// handlers were supplied, see [`CallControls::buttons`].
#[derive(IntoElement)]
pub struct CallControls {
    id: ElementId,
    state: CallState,
    size: IconButtonSize,
    visible: bool,
    on_call: bool,
    with_video: bool,
    muted: bool,
    camera_on: bool,
    screen_share_on: bool,
    on_end: Option<CallHandler>,
    on_answer: Option<CallHandler>,
    on_mute_toggle: Option<CallHandler>,
    on_camera_toggle: Option<CallHandler>,
    on_screen_share_toggle: Option<CallHandler>,
}

impl CallControls {
    pub fn new(id: impl Into<ElementId>, state: CallState) -> Self {
        Self {
            id: id.into(),
            state,
            size: IconButtonSize::Normal,
            visible: true,
            on_call: false,
            with_video: false,
            muted: false,
            camera_on: false,
            screen_share_on: false,
            on_end: None,
            on_answer: None,
            on_mute_toggle: None,
            on_camera_toggle: None,
            on_screen_share_toggle: None,
        }
    }

    pub fn size(mut self, size: IconButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn on_call(mut self, on_call: bool) -> Self {
        self.on_call = on_call;
        self
    }

    pub fn with_video(mut self, with_video: bool) -> Self {
        self.with_video = with_video;
        self
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn camera_on(mut self, camera_on: bool) -> Self {
        self.camera_on = camera_on;
        self
    }

    pub fn screen_share_on(mut self, screen_share_on: bool) -> Self {
        self.screen_share_on = screen_share_on;
        self
    }

    pub fn on_end(mut self, on_end: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_end = Some(Rc::new(on_end));
        self
    }

    pub fn on_answer(mut self, on_answer: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_answer = Some(Rc::new(on_answer));
        self
    }

    pub fn on_mute_toggle(
        mut self,
        on_mute_toggle: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_mute_toggle = Some(Rc::new(on_mute_toggle));
        self
    }

    pub fn on_camera_toggle(
        mut self,
        on_camera_toggle: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_camera_toggle = Some(Rc::new(on_camera_toggle));
        self
    }

    pub fn on_screen_share_toggle(
        mut self,
        on_screen_share_toggle: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_screen_share_toggle = Some(Rc::new(on_screen_share_toggle));
        self
    }

    /// Ordered list of buttons for the current inputs.
    pub fn buttons(&self) -> Vec<CallButton> {
        let candidates = [
            (
                self.state == CallState::RingingIncoming,
                CallAction::Answer,
                ThemeAccentKind::Constructive,
                DialogIconKind::Call,
            ),
            (
                true,
                CallAction::End,
                ThemeAccentKind::Destructive,
                DialogIconKind::CallEnd,
            ),
            (
                self.on_mute_toggle.is_some(),
                CallAction::MuteToggle,
                ThemeAccentKind::Primary,
                if self.muted {
                    DialogIconKind::MicOff
                } else {
                    DialogIconKind::Mic
                },
            ),
            (
                self.on_camera_toggle.is_some(),
                CallAction::CameraToggle,
                ThemeAccentKind::Informative,
                if self.camera_on {
                    DialogIconKind::VideocamOff
                } else {
                    DialogIconKind::Videocam
                },
            ),
            (
                self.on_screen_share_toggle.is_some(),
                CallAction::ScreenShareToggle,
                ThemeAccentKind::Informative,
                if self.screen_share_on {
                    DialogIconKind::ScreenShareStop
                } else {
                    DialogIconKind::ScreenShare
                },
            ),
        ];

        candidates
            .into_iter()
            .filter(|(present, ..)| *present)
            .map(|(_, action, accent, glyph)| CallButton {
                action,
                accent,
                glyph,
            })
            .collect()
    }

    fn handler(&self, action: CallAction) -> Option<CallHandler> {
        match action {
            CallAction::Answer => self.on_answer.clone(),
            CallAction::End => self.on_end.clone(),
            CallAction::MuteToggle => self.on_mute_toggle.clone(),
            CallAction::CameraToggle => self.on_camera_toggle.clone(),
            CallAction::ScreenShareToggle => self.on_screen_share_toggle.clone(),
        }
    }
}

impl RenderOnce for CallControls {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let padding = &cx.get_theme().layout.padding;
        let gap = if self.on_call { padding.xl } else { padding.lg };
        let inset = padding.md;
        let corner_radius = cx.get_theme().layout.corner_radii.xl;
        let backdrop = cx.theme_variant().colors.overlay;

        let visibility = visibility_transition(self.id.clone(), window, cx, self.visible);
        let is_visible = self.visible;

        let buttons = self
            .buttons()
            .into_iter()
            .map(|button| {
                let handler = self.handler(button.action);

                IconButton::new(self.id.with_suffix(button.action.key()), button.glyph)
                    .flat(true)
                    .size(self.size)
                    .accent(button.accent)
                    .disabled(!is_visible)
                    .when_some(handler, |this, handler| {
                        this.on_click(move |_event, window, cx| (handler)(window, cx))
                    })
            })
            .collect::<Vec<_>>();

        div()
            .id(self.id.clone())
            .relative()
            .flex()
            .items_center()
            .justify_center()
            .gap(gap)
            .p(inset)
            .when(self.with_video, |this| {
                this.child(
                    squircle()
                        .absolute_expand()
                        .rounded(corner_radius)
                        .bg(backdrop.alpha(0.35)),
                )
            })
            .with_transitions(visibility, |_cx, this, opacity| this.opacity(opacity))
            .children(buttons)
    }
}
