use std::rc::Rc;

use gpui::{
    AnyElement, App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, prelude::FluentBuilder,
};

use super::{
    Avatar, CreateNewEffect, CreateNewEffects, CreateNewField, CreateNewInfo, CreateNewInfoFields,
    CreateNewIntent, CreateNewMembers, CreateNewRequest, CreateNewStep, CreateNewType,
};
use crate::{
    components::{
        Button, ButtonVariant, ImageEdit, Modal, ModalBack, ModalBody, ModalClose, ModalFooter,
        ModalHeader,
    },
    entities::Contact,
    theme::ThemeExt,
    utils::{ElementIdExt, RgbaExt},
};

type StepHandler = Rc<dyn Fn(&CreateNewStep, &mut Window, &mut App) + 'static>;
type RequestHandler = Rc<dyn Fn(&CreateNewRequest, &mut Window, &mut App) + 'static>;
type ActionHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Callbacks the wizard reports its effects through.
#[derive(Clone, Default)]
struct CreateNewHandlers {
    on_step_change: Option<StepHandler>,
    on_request_change: Option<RequestHandler>,
    on_submit: Option<RequestHandler>,
    on_close: Option<ActionHandler>,
}

impl CreateNewHandlers {
    fn run(&self, effects: CreateNewEffects, window: &mut Window, cx: &mut App) {
        for effect in effects {
            match effect {
                CreateNewEffect::ChangeStep(step) => {
                    if let Some(on_step_change) = &self.on_step_change {
                        (on_step_change)(&step, window, cx)
                    }
                }
                CreateNewEffect::ChangeRequest(request) => {
                    if let Some(on_request_change) = &self.on_request_change {
                        (on_request_change)(&request, window, cx)
                    }
                }
                CreateNewEffect::Submit(request) => {
                    if let Some(on_submit) = &self.on_submit {
                        (on_submit)(&request, window, cx)
                    }
                }
                CreateNewEffect::Close => {
                    if let Some(on_close) = &self.on_close {
                        (on_close)(window, cx)
                    }
                }
            }
        }
    }
}

/// Turns intents from the step bodies into handler calls.
struct Dispatcher {
    step: CreateNewStep,
    request: CreateNewRequest,
    fields: CreateNewInfoFields,
    handlers: CreateNewHandlers,
}

impl Dispatcher {
    fn effects(&self, intent: CreateNewIntent, cx: &App) -> CreateNewEffects {
        // Text typed on the info step reaches the draft when the user moves on.
        let committed = if self.step == CreateNewStep::Info && commits_fields(&intent) {
            self.fields.commit(&self.request, cx)
        } else {
            self.request.clone()
        };

        let mut effects = self.step.apply(&committed, intent);

        // An ignored intent leaves the draft alone, typed text included.
        if effects.is_empty() {
            return effects;
        }

        let reports_request = effects
            .iter()
            .any(|effect| matches!(effect, CreateNewEffect::ChangeRequest(_)));
        if committed != self.request && !reports_request {
            effects.insert(0, CreateNewEffect::ChangeRequest(committed));
        }

        effects
    }

    fn dispatch(&self, intent: CreateNewIntent, window: &mut Window, cx: &mut App) {
        let effects = self.effects(intent, cx);
        self.handlers.run(effects, window, cx)
    }
}

fn commits_fields(intent: &CreateNewIntent) -> bool {
    matches!(
        intent,
        CreateNewIntent::Next
            | CreateNewIntent::Prev
            | CreateNewIntent::EditAvatar(_)
            | CreateNewIntent::RemoveAvatar
    )
}

/// Multi-step modal that collects everything needed to create a group or
/// a channel.
///
/// The modal is stateless apart from the info step's text buffers. The
/// owner keeps `step` and `request` and feeds the values reported through
/// `on_step_change` and `on_request_change` back in on the next render.
#[derive(IntoElement)]
pub struct CreateNewModal {
    id: ElementId,
    step: CreateNewStep,
    request: CreateNewRequest,
    shortname_prefix: Option<SharedString>,
    contacts: Vec<Contact>,
    pending: bool,
    error: Option<SharedString>,
    invalid_field: Option<CreateNewField>,
    handlers: CreateNewHandlers,
    on_avatar_pick: Option<ActionHandler>,
}

impl CreateNewModal {
    pub fn new(id: impl Into<ElementId>, step: CreateNewStep, request: CreateNewRequest) -> Self {
        Self {
            id: id.into(),
            step,
            request,
            shortname_prefix: None,
            contacts: Vec::new(),
            pending: false,
            error: None,
            invalid_field: None,
            handlers: CreateNewHandlers::default(),
            on_avatar_pick: None,
        }
    }

    /// Text shown in front of the short name, e.g. `t.me/`.
    pub fn shortname_prefix(mut self, prefix: impl Into<SharedString>) -> Self {
        self.shortname_prefix = Some(prefix.into());
        self
    }

    pub fn contacts(mut self, contacts: impl IntoIterator<Item = Contact>) -> Self {
        self.contacts = contacts.into_iter().collect();
        self
    }

    /// Marks the submission as in flight. Disables the finish button.
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    pub fn error(mut self, error: Option<SharedString>) -> Self {
        self.error = error;
        self
    }

    /// Info field the host rejected, outlined until the next change.
    pub fn invalid_field(mut self, field: Option<CreateNewField>) -> Self {
        self.invalid_field = field;
        self
    }

    pub fn on_step_change(
        mut self,
        on_step_change: impl Fn(&CreateNewStep, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.handlers.on_step_change = Some(Rc::new(on_step_change));
        self
    }

    pub fn on_request_change(
        mut self,
        on_request_change: impl Fn(&CreateNewRequest, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.handlers.on_request_change = Some(Rc::new(on_request_change));
        self
    }

    pub fn on_submit(
        mut self,
        on_submit: impl Fn(&CreateNewRequest, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.handlers.on_submit = Some(Rc::new(on_submit));
        self
    }

    pub fn on_close(mut self, on_close: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.handlers.on_close = Some(Rc::new(on_close));
        self
    }

    /// Called when the avatar on the info step is clicked.
    ///
    /// The host opens its own file chooser. Once an image is chosen it sets
    /// the draft avatar to [`Avatar::Pending`] and the step to
    /// [`CreateNewStep::Avatar`], which is what dropping an image onto the
    /// avatar does.
    pub fn on_avatar_pick(mut self, on_avatar_pick: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_avatar_pick = Some(Rc::new(on_avatar_pick));
        self
    }

    fn body(
        &self,
        dispatcher: &Rc<Dispatcher>,
        fields: CreateNewInfoFields,
    ) -> Option<AnyElement> {
        let body_id = self.id.with_suffix("body");

        match self.step {
            CreateNewStep::Type => {
                let dispatcher = dispatcher.clone();
                Some(
                    CreateNewType::new(body_id, self.request.kind)
                        .on_change(move |kind, window, cx| {
                            dispatcher.dispatch(CreateNewIntent::ChooseKind(*kind), window, cx)
                        })
                        .into_any_element(),
                )
            }

            CreateNewStep::Info => {
                let on_change = dispatcher.clone();
                let on_remove = dispatcher.clone();

                Some(
                    CreateNewInfo::new(body_id, self.request.avatar.clone(), fields)
                        .shortname_prefix(self.shortname_prefix.clone())
                        .invalid_field(self.invalid_field)
                        .on_avatar_change(move |image, window, cx| {
                            on_change.dispatch(
                                CreateNewIntent::EditAvatar(Avatar::Pending(image.clone())),
                                window,
                                cx,
                            )
                        })
                        .on_avatar_remove(move |window, cx| {
                            on_remove.dispatch(CreateNewIntent::RemoveAvatar, window, cx)
                        })
                        .when_some(self.on_avatar_pick.clone(), |this, on_avatar_pick| {
                            this.on_avatar_pick(move |window, cx| (on_avatar_pick)(window, cx))
                        })
                        .into_any_element(),
                )
            }

            CreateNewStep::Avatar => self.request.avatar.pending().map(|image| {
                let dispatcher = dispatcher.clone();
                ImageEdit::new(body_id, image.clone())
                    .on_submit(move |image, window, cx| {
                        dispatcher.dispatch(CreateNewIntent::SubmitAvatar(image.clone()), window, cx)
                    })
                    .into_any_element()
            }),

            CreateNewStep::Members => {
                let dispatcher = dispatcher.clone();
                Some(
                    CreateNewMembers::new(
                        body_id,
                        self.contacts.clone(),
                        self.request.members.clone(),
                    )
                    .disabled(self.pending)
                    .on_toggle(move |peer, window, cx| {
                        dispatcher.dispatch(CreateNewIntent::ToggleMember(*peer), window, cx)
                    })
                    .into_any_element(),
                )
            }
        }
    }
}

impl RenderOnce for CreateNewModal {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let fields = CreateNewInfoFields::use_keyed(&self.id, &self.request, window, cx);

        let dispatcher = Rc::new(Dispatcher {
            step: self.step,
            request: self.request.clone(),
            fields: fields.clone(),
            handlers: self.handlers.clone(),
        });

        let kind = self.request.kind;
        let title = self.step.title_label(kind).resolve(cx);
        let body = self.body(&dispatcher, fields);

        let error = self.error.clone().filter(|_| self.step.shows_error());
        let destructive = cx.theme_variant().colors.accent.destructive;
        let layout = &cx.get_theme().layout;
        let corner_radius = layout.corner_radii.md;
        let padding = layout.padding.md;
        let banner_inset = layout.padding.xl;

        let footer = self.step.footer_label(kind).map(|label| {
            let intent = match self.step {
                CreateNewStep::Members => CreateNewIntent::Submit,
                _ => CreateNewIntent::Next,
            };
            let disabled = self.step == CreateNewStep::Members && self.pending;
            let dispatcher = dispatcher.clone();

            ModalFooter::new().child(
                Button::new(self.id.with_suffix("footer"))
                    .text(label.resolve(cx))
                    .variant(ButtonVariant::Primary)
                    .w_full()
                    .disabled(disabled)
                    .on_click(move |_event, window, cx| {
                        dispatcher.dispatch(intent.clone(), window, cx)
                    }),
            )
        });

        let on_back = dispatcher.clone();
        let on_close = dispatcher.clone();
        let on_backdrop = dispatcher;

        Modal::new(self.id.clone())
            .on_close(move |window, cx| on_backdrop.dispatch(CreateNewIntent::Close, window, cx))
            .child(
                ModalHeader::new()
                    .with_border(true)
                    .when(self.step.has_back(), |this| {
                        this.child(ModalBack::new(self.id.with_suffix("back")).on_click(
                            move |window, cx| on_back.dispatch(CreateNewIntent::Prev, window, cx),
                        ))
                    })
                    .child(title)
                    .child(ModalClose::new(self.id.with_suffix("close")).on_click(
                        move |window, cx| on_close.dispatch(CreateNewIntent::Close, window, cx),
                    )),
            )
            .when_some(error, |this, error| {
                this.child(
                    div()
                        .mx(banner_inset)
                        .mt(banner_inset)
                        .p(padding)
                        .rounded(corner_radius)
                        .bg(destructive.alpha(0.12))
                        .text_color(destructive)
                        .child(error),
                )
            })
            .child(ModalBody::new(self.id.with_suffix("scroll")).children(body))
            .children(footer)
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        components::create_new::{CreateNewKind, LocalImage},
        entities::{Peer, PeerId},
        theme::Theme,
    };
    use gpui::{AppContext, Modifiers, TestAppContext, VisualTestContext};
    use gpui_primitives::input::InputState;

    #[derive(Debug, PartialEq)]
    enum Reported {
        Step(CreateNewStep),
        Request(CreateNewRequest),
        Submit(CreateNewRequest),
        Close,
    }

    fn recording_handlers(log: &Rc<RefCell<Vec<Reported>>>) -> CreateNewHandlers {
        let steps = log.clone();
        let requests = log.clone();
        let submits = log.clone();
        let closes = log.clone();

        CreateNewHandlers {
            on_step_change: Some(Rc::new(
                move |step: &CreateNewStep, _: &mut Window, _: &mut App| {
                    steps.borrow_mut().push(Reported::Step(*step))
                },
            )),
            on_request_change: Some(Rc::new(
                move |request: &CreateNewRequest, _: &mut Window, _: &mut App| {
                    requests.borrow_mut().push(Reported::Request(request.clone()))
                },
            )),
            on_submit: Some(Rc::new(
                move |request: &CreateNewRequest, _: &mut Window, _: &mut App| {
                    submits.borrow_mut().push(Reported::Submit(request.clone()))
                },
            )),
            on_close: Some(Rc::new(move |_: &mut Window, _: &mut App| {
                closes.borrow_mut().push(Reported::Close)
            })),
        }
    }

    fn fields(cx: &mut TestAppContext, title: &str) -> CreateNewInfoFields {
        let title = title.to_owned();
        CreateNewInfoFields {
            title: cx.new(|cx| InputState::new(cx).initial_value(title)),
            about: cx.new(|cx| InputState::new(cx)),
            shortname: cx.new(|cx| InputState::new(cx)),
        }
    }

    #[gpui::test]
    fn test_next_on_info_commits_typed_text(cx: &mut TestAppContext) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let request = CreateNewRequest::new(CreateNewKind::Group);
        let dispatcher = Dispatcher {
            step: CreateNewStep::Info,
            request: request.clone(),
            fields: fields(cx, "Book club"),
            handlers: recording_handlers(&log),
        };

        let cx = cx.add_empty_window();
        cx.update(|window, cx| dispatcher.dispatch(CreateNewIntent::Next, window, cx));

        assert_eq!(
            *log.borrow(),
            [
                Reported::Request(request.with_field(CreateNewField::Title, "Book club")),
                Reported::Step(CreateNewStep::Members),
            ]
        );
    }

    #[gpui::test]
    fn test_dropped_image_opens_editor_with_committed_text(cx: &mut TestAppContext) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let request = CreateNewRequest::default();
        let image = LocalImage::new("/tmp/cat.png");
        let dispatcher = Dispatcher {
            step: CreateNewStep::Info,
            request: request.clone(),
            fields: fields(cx, "Cats"),
            handlers: recording_handlers(&log),
        };

        let cx = cx.add_empty_window();
        cx.update(|window, cx| {
            dispatcher.dispatch(
                CreateNewIntent::EditAvatar(Avatar::Pending(image.clone())),
                window,
                cx,
            )
        });

        assert_eq!(
            *log.borrow(),
            [
                Reported::Request(
                    request
                        .with_field(CreateNewField::Title, "Cats")
                        .with_avatar(Avatar::Pending(image))
                ),
                Reported::Step(CreateNewStep::Avatar),
            ]
        );
    }

    #[gpui::test]
    fn test_submit_and_close_reach_their_handlers(cx: &mut TestAppContext) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let request = CreateNewRequest::new(CreateNewKind::Channel).with_member_toggled(PeerId(9));
        let dispatcher = Dispatcher {
            step: CreateNewStep::Members,
            request: request.clone(),
            fields: fields(cx, ""),
            handlers: recording_handlers(&log),
        };

        let cx = cx.add_empty_window();
        cx.update(|window, cx| {
            dispatcher.dispatch(CreateNewIntent::Submit, window, cx);
            dispatcher.dispatch(CreateNewIntent::Close, window, cx);
        });

        assert_eq!(
            *log.borrow(),
            [Reported::Submit(request), Reported::Close]
        );
    }

    #[gpui::test]
    fn test_ignored_avatar_intents_commit_no_text(cx: &mut TestAppContext) {
        let dispatcher = Dispatcher {
            step: CreateNewStep::Info,
            request: CreateNewRequest::default(),
            fields: fields(cx, "typed but not committed"),
            handlers: CreateNewHandlers::default(),
        };

        cx.update(|cx| {
            for intent in [
                CreateNewIntent::EditAvatar(Avatar::Unset),
                CreateNewIntent::EditAvatar(Avatar::Stored("https://cdn.example/a.png".into())),
                CreateNewIntent::RemoveAvatar,
            ] {
                assert!(dispatcher.effects(intent, cx).is_empty());
            }
        });
    }

    #[gpui::test]
    fn test_text_is_not_committed_outside_info(cx: &mut TestAppContext) {
        let request = CreateNewRequest::default();
        let dispatcher = Dispatcher {
            step: CreateNewStep::Members,
            request: request.clone(),
            fields: fields(cx, "never committed"),
            handlers: CreateNewHandlers::default(),
        };

        let effects = cx.update(|cx| dispatcher.effects(CreateNewIntent::Prev, cx));

        assert_eq!(
            effects.as_slice(),
            [CreateNewEffect::ChangeStep(CreateNewStep::Info)]
        );
    }

    struct WizardTestView {
        step: CreateNewStep,
        request: CreateNewRequest,
        pending: bool,
        log: Rc<RefCell<Vec<Reported>>>,
    }

    impl WizardTestView {
        fn new(step: CreateNewStep, request: CreateNewRequest) -> Self {
            Self {
                step,
                request,
                pending: false,
                log: Rc::default(),
            }
        }
    }

    impl gpui::Render for WizardTestView {
        fn render(
            &mut self,
            _window: &mut Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            let mut modal = CreateNewModal::new("create-new", self.step, self.request.clone())
                .shortname_prefix("t.me/")
                .contacts([Contact {
                    peer: Peer::user(3),
                    title: "Ada Lovelace".into(),
                    avatar: None,
                }])
                .pending(self.pending)
                .error(Some("Name is taken".into()))
                .invalid_field(Some(CreateNewField::Shortname));
            modal.handlers = recording_handlers(&self.log);

            div().size_full().child(modal)
        }
    }

    fn click_footer(cx: &mut TestAppContext, view: WizardTestView) -> Vec<Reported> {
        let log = view.log.clone();
        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| view))
                .unwrap()
        });
        let mut cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();

        let selector = ElementId::from("create-new").with_suffix("footer").to_string();
        let bounds = cx
            .debug_bounds(Box::leak(selector.into_boxed_str()))
            .unwrap();
        cx.simulate_click(bounds.center(), Modifiers::none());

        log.take()
            .into_iter()
            .filter(|reported| !matches!(reported, Reported::Request(_)))
            .collect()
    }

    #[gpui::test]
    fn test_footer_submits_on_members(cx: &mut TestAppContext) {
        let request = CreateNewRequest::new(CreateNewKind::Group).with_member_toggled(PeerId(3));
        let reported = click_footer(cx, WizardTestView::new(CreateNewStep::Members, request.clone()));

        assert_eq!(reported, [Reported::Submit(request)]);
    }

    #[gpui::test]
    fn test_footer_is_inert_while_pending(cx: &mut TestAppContext) {
        let mut view = WizardTestView::new(CreateNewStep::Members, CreateNewRequest::default());
        view.pending = true;

        let reported = click_footer(cx, view);

        assert!(
            !reported.iter().any(|reported| matches!(reported, Reported::Submit(_))),
            "pending footer submitted: {reported:?}"
        );
    }

    #[gpui::test]
    fn test_footer_advances_before_members(cx: &mut TestAppContext) {
        let reported = click_footer(
            cx,
            WizardTestView::new(CreateNewStep::Type, CreateNewRequest::default()),
        );
        assert_eq!(reported, [Reported::Step(CreateNewStep::Info)]);

        let reported = click_footer(
            cx,
            WizardTestView::new(CreateNewStep::Info, CreateNewRequest::default()),
        );
        assert_eq!(reported, [Reported::Step(CreateNewStep::Members)]);
    }

    #[gpui::test]
    fn test_every_step_renders(cx: &mut TestAppContext) {
        let unset = CreateNewRequest::default();
        let pending = unset.with_avatar(Avatar::Pending(LocalImage::new("/tmp/cat.png")));

        for (step, request) in [
            (CreateNewStep::Type, unset.clone()),
            (CreateNewStep::Info, unset.clone()),
            (CreateNewStep::Avatar, pending),
            (CreateNewStep::Avatar, unset.clone()),
            (CreateNewStep::Members, unset.clone()),
        ] {
            let window = cx.update(|cx| {
                cx.set_theme(Theme::DEFAULT);
                cx.open_window(Default::default(), |_window, cx| {
                    cx.new(|_cx| WizardTestView::new(step, request))
                })
                .unwrap()
            });

            let visual = VisualTestContext::from_window(window.into(), cx);
            visual.run_until_parked();
        }
    }
}
