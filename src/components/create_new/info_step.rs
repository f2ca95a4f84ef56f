use std::rc::Rc;

use gpui::{
    App, AppContext, CursorStyle, ElementId, Entity, ExternalPaths, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use gpui_primitives::input::InputState;

use super::{Avatar, CreateNewField, CreateNewRequest, LocalImage};
use crate::{
    DialogIconKind,
    components::{AvatarPlaceholder, Button, ButtonVariant, Icon, PeerAvatar, TextField},
    labels::Label,
    theme::ThemeExt,
    utils::{ElementIdExt, RgbaExt},
};

const AVATAR_SIZE: f32 = 72.;

/// Editor state of the info step's text fields.
#[derive(Clone)]
pub struct CreateNewInfoFields {
    pub title: Entity<InputState>,
    pub about: Entity<InputState>,
    pub shortname: Entity<InputState>,
}

/// An input buffer and the draft value it was last seeded from.
struct FieldBuffer {
    seeded: SharedString,
    input: Entity<InputState>,
}

impl FieldBuffer {
    fn new(value: SharedString, cx: &mut App) -> Self {
        let input = cx.new(|cx| InputState::new(cx).initial_value(value.clone()));
        Self {
            seeded: value,
            input,
        }
    }

    /// Follows changes the owner makes to the draft. Typed text is kept
    /// until the draft value itself changes.
    fn sync(&mut self, value: &SharedString, cx: &mut App) {
        if &self.seeded == value {
            return;
        }
        self.seeded = value.clone();

        if &self.input.read(cx).value() == value {
            return;
        }

        log::debug!("create-new field reseeded from the draft");
        let value = value.clone();
        self.input.update(cx, |input, cx| {
            input.clear();
            let cleared = std::mem::replace(input, InputState::new(cx));
            *input = cleared.initial_value(value);
            cx.notify();
        });
    }
}

/// Lowercases the short name and turns whitespace into `_` as it is typed.
/// Only leading separators are dropped, so a word break typed at the end
/// survives until the next character arrives.
pub fn normalize_shortname(text: SharedString) -> SharedString {
    let normalized: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();

    normalized.trim_start_matches('_').to_owned().into()
}

impl CreateNewInfoFields {
    /// Keyed field states that track `request`. A field is reseeded when
    /// the draft value differs from the one it last saw.
    pub fn use_keyed(
        id: &ElementId,
        request: &CreateNewRequest,
        window: &mut Window,
        cx: &mut App,
    ) -> Self {
        let mut field = |field: CreateNewField| {
            let value = request.field(field).clone();
            let seed = value.clone();
            let buffer = window.use_keyed_state(
                id.with_suffix(format!("field:{field:?}")),
                cx,
                move |_window, cx| FieldBuffer::new(seed, cx),
            );

            buffer.update(cx, |buffer, cx| {
                buffer.sync(&value, cx);
                buffer.input.clone()
            })
        };

        Self {
            title: field(CreateNewField::Title),
            about: field(CreateNewField::About),
            shortname: field(CreateNewField::Shortname),
        }
    }

    fn state(&self, field: CreateNewField) -> &Entity<InputState> {
        match field {
            CreateNewField::Title => &self.title,
            CreateNewField::About => &self.about,
            CreateNewField::Shortname => &self.shortname,
        }
    }

    /// Copies the edited text into the draft.
    pub fn commit(&self, request: &CreateNewRequest, cx: &App) -> CreateNewRequest {
        [
            CreateNewField::Title,
            CreateNewField::About,
            CreateNewField::Shortname,
        ]
        .into_iter()
        .fold(request.clone(), |draft, field| {
            let value = self.state(field).read(cx).value();
            if draft.field(field) == &value {
                draft
            } else {
                draft.with_field(field, value)
            }
        })
    }
}

type ImageHandler = Rc<dyn Fn(&LocalImage, &mut Window, &mut App) + 'static>;
type ActionHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Second wizard page: avatar, title, description and short name.
#[derive(IntoElement)]
pub struct CreateNewInfo {
    id: ElementId,
    avatar: Avatar,
    fields: CreateNewInfoFields,
    shortname_prefix: Option<SharedString>,
    invalid_field: Option<CreateNewField>,
    on_avatar_change: Option<ImageHandler>,
    on_avatar_pick: Option<ActionHandler>,
    on_avatar_remove: Option<ActionHandler>,
}

impl CreateNewInfo {
    pub fn new(
        id: impl Into<ElementId>,
        avatar: Avatar,
        fields: CreateNewInfoFields,
    ) -> Self {
        Self {
            id: id.into(),
            avatar,
            fields,
            shortname_prefix: None,
            invalid_field: None,
            on_avatar_change: None,
            on_avatar_pick: None,
            on_avatar_remove: None,
        }
    }

    pub fn shortname_prefix(mut self, prefix: Option<SharedString>) -> Self {
        self.shortname_prefix = prefix;
        self
    }

    /// Outlines `field` as rejected, e.g. a short name that is already taken.
    pub fn invalid_field(mut self, field: Option<CreateNewField>) -> Self {
        self.invalid_field = field;
        self
    }

    fn is_invalid(&self, field: CreateNewField) -> bool {
        self.invalid_field == Some(field)
    }

    /// Called with an image dropped onto the avatar.
    pub fn on_avatar_change(
        mut self,
        on_avatar_change: impl Fn(&LocalImage, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_avatar_change = Some(Rc::new(on_avatar_change));
        self
    }

    /// Called when the avatar is clicked. Opening a file chooser is up to
    /// the host.
    pub fn on_avatar_pick(mut self, on_avatar_pick: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_avatar_pick = Some(Rc::new(on_avatar_pick));
        self
    }

    pub fn on_avatar_remove(
        mut self,
        on_avatar_remove: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_avatar_remove = Some(Rc::new(on_avatar_remove));
        self
    }
}

impl RenderOnce for CreateNewInfo {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let gap = cx.get_theme().layout.padding.lg;
        let scrim = cx.theme_variant().colors.overlay;
        let title_invalid = self.is_invalid(CreateNewField::Title);
        let about_invalid = self.is_invalid(CreateNewField::About);
        let shortname_invalid = self.is_invalid(CreateNewField::Shortname);

        let avatar_picker = div()
            .id(self.id.with_suffix("avatar"))
            .flex_none()
            .relative()
            .size(px(AVATAR_SIZE))
            .rounded_full()
            .cursor(CursorStyle::PointingHand)
            .child(
                PeerAvatar::new(self.fields.title.read(cx).value())
                    .size(px(AVATAR_SIZE))
                    .placeholder(AvatarPlaceholder(0))
                    .when_some(self.avatar.image_source(), |this, image| this.image(image)),
            )
            .when(!self.avatar.is_set(), |this| {
                this.child(
                    div()
                        .absolute()
                        .inset_0()
                        .rounded_full()
                        .bg(scrim.alpha(0.4))
                        .flex()
                        .items_center()
                        .justify_center()
                        .child(Icon::new(DialogIconKind::Camera).size(px(24.))),
                )
            })
            .when_some(self.on_avatar_pick, |this, on_avatar_pick| {
                this.on_click(move |_event, window, cx| (on_avatar_pick)(window, cx))
            })
            .when_some(self.on_avatar_change, |this, on_avatar_change| {
                this.on_drop(move |paths: &ExternalPaths, window, cx| {
                    if let Some(path) = paths.paths().first() {
                        (on_avatar_change)(&LocalImage::new(path.clone()), window, cx);
                    }
                })
            });

        div()
            .id(self.id.clone())
            .flex()
            .flex_col()
            .gap(gap)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(gap)
                    .child(avatar_picker)
                    .child(
                        div().flex_1().min_w_0().child(
                            TextField::new(self.id.with_suffix("title"), self.fields.title.clone())
                                .label(Label::InfoTitle.resolve(cx))
                                .invalid(title_invalid),
                        ),
                    ),
            )
            .when(self.avatar.is_set(), |this| {
                this.when_some(self.on_avatar_remove, |this, on_avatar_remove| {
                    this.child(
                        Button::new(self.id.with_suffix("avatar_remove"))
                            .text(Label::AvatarRemove.resolve(cx))
                            .variant(ButtonVariant::DestructiveGhost)
                            .justify_start()
                            .on_click(move |_event, window, cx| (on_avatar_remove)(window, cx)),
                    )
                })
            })
            .child(
                TextField::new(self.id.with_suffix("about"), self.fields.about.clone())
                    .label(Label::InfoAbout.resolve(cx))
                    .multiline()
                    .invalid(about_invalid),
            )
            .child(
                TextField::new(self.id.with_suffix("shortname"), self.fields.shortname.clone())
                    .label(Label::InfoShortname.resolve(cx))
                    .map(|this| match self.shortname_prefix {
                        Some(prefix) => this.prefix(prefix),
                        None => this,
                    })
                    .map_text(normalize_shortname)
                    .invalid(shortname_invalid),
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext};

    use crate::components::create_new::CreateNewKind;

    fn buffer(
        cx: &mut TestAppContext,
        seeded: &'static str,
        typed: &'static str,
    ) -> Entity<FieldBuffer> {
        cx.new(|cx| FieldBuffer {
            seeded: seeded.into(),
            input: cx.new(|cx| InputState::new(cx).initial_value(typed)),
        })
    }

    fn sync(cx: &mut TestAppContext, buffer: &Entity<FieldBuffer>, value: &'static str) -> SharedString {
        cx.update(|cx| {
            buffer.update(cx, |buffer, cx| buffer.sync(&value.into(), cx));
            buffer.read(cx).input.read(cx).value()
        })
    }

    #[gpui::test]
    fn test_unchanged_draft_keeps_typed_text(cx: &mut TestAppContext) {
        let title = buffer(cx, "", "Book cl");
        assert_eq!(sync(cx, &title, "").as_ref(), "Book cl");
    }

    #[gpui::test]
    fn test_committed_text_coming_back_is_left_alone(cx: &mut TestAppContext) {
        let title = buffer(cx, "", "Book club");

        assert_eq!(sync(cx, &title, "Book club").as_ref(), "Book club");
        cx.update(|cx| assert_eq!(title.read(cx).seeded.as_ref(), "Book club"));
    }

    #[gpui::test]
    fn test_owner_replacing_the_draft_reseeds_the_field(cx: &mut TestAppContext) {
        let title = buffer(cx, "Book club", "Book club");
        assert_eq!(sync(cx, &title, "").as_ref(), "");

        let about = buffer(cx, "", "");
        assert_eq!(sync(cx, &about, "Set by the server").as_ref(), "Set by the server");
    }

    #[gpui::test]
    fn test_reseeded_fields_commit_nothing(cx: &mut TestAppContext) {
        let host = CreateNewRequest::new(CreateNewKind::Group)
            .with_field(CreateNewField::Title, "Host title");

        let title = buffer(cx, "", "");
        let about = buffer(cx, "", "");
        let shortname = buffer(cx, "", "");
        for (buffer, value) in [(&title, "Host title"), (&about, ""), (&shortname, "")] {
            sync(cx, buffer, value);
        }

        cx.update(|cx| {
            let fields = CreateNewInfoFields {
                title: title.read(cx).input.clone(),
                about: about.read(cx).input.clone(),
                shortname: shortname.read(cx).input.clone(),
            };
            assert_eq!(fields.commit(&host, cx), host);
        });
    }

    #[gpui::test]
    fn test_only_the_rejected_field_is_outlined(cx: &mut TestAppContext) {
        let fields = CreateNewInfoFields {
            title: cx.new(|cx| InputState::new(cx)),
            about: cx.new(|cx| InputState::new(cx)),
            shortname: cx.new(|cx| InputState::new(cx)),
        };

        let info = CreateNewInfo::new("info", Avatar::Unset, fields.clone());
        assert!(!info.is_invalid(CreateNewField::Shortname));

        let info = info.invalid_field(Some(CreateNewField::Shortname));
        assert!(info.is_invalid(CreateNewField::Shortname));
        assert!(!info.is_invalid(CreateNewField::Title));
        assert!(!info.is_invalid(CreateNewField::About));
    }

    #[test]
    fn test_shortname_keeps_word_breaks_while_typing() {
        let typed = |text: &'static str| normalize_shortname(text.into());

        assert_eq!(typed("my ").as_ref(), "my_");
        assert_eq!(typed("my t").as_ref(), "my_t");
        assert_eq!(typed("  My Team").as_ref(), "my_team");
        assert_eq!(typed("ÉQUIPE").as_ref(), "équipe");
    }

    #[gpui::test]
    fn test_commit_copies_edited_text(cx: &mut TestAppContext) {
        let draft = CreateNewRequest::new(CreateNewKind::Group)
            .with_field(CreateNewField::About, "unchanged");

        let fields = CreateNewInfoFields {
            title: cx.new(|cx| InputState::new(cx).initial_value("Design")),
            about: cx.new(|cx| InputState::new(cx).initial_value("unchanged")),
            shortname: cx.new(|cx| InputState::new(cx).initial_value("design")),
        };

        cx.update(|cx| {
            let committed = fields.commit(&draft, cx);

            assert_eq!(committed.title.as_ref(), "Design");
            assert_eq!(committed.about.as_ref(), "unchanged");
            assert_eq!(committed.shortname.as_ref(), "design");
            assert_eq!(committed.kind, draft.kind);
            assert_eq!(draft.title.as_ref(), "");
        });
    }

    #[gpui::test]
    fn test_commit_without_edits_is_identity(cx: &mut TestAppContext) {
        let draft = CreateNewRequest::default().with_field(CreateNewField::Title, "Ops");

        let fields = CreateNewInfoFields {
            title: cx.new(|cx| InputState::new(cx).initial_value("Ops")),
            about: cx.new(|cx| InputState::new(cx)),
            shortname: cx.new(|cx| InputState::new(cx)),
        };

        cx.update(|cx| assert_eq!(fields.commit(&draft, cx), draft));
    }
}
