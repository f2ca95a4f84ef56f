use gpui::{
    App, AppContext, Application, Bounds, Context, SharedString, TitlebarOptions, Window,
    WindowBounds, WindowOptions, div, point, prelude::*, px, size,
};

use gpui_dialog::{
    DialogAssets, assets,
    components::{
        CallControls, CallState, Emoji,
        create_new::{CreateNewModal, CreateNewRequest, CreateNewStep},
    },
    entities::{Contact, Peer},
    theme::{Theme, ThemeExt},
};

struct Demo {
    step: CreateNewStep,
    request: CreateNewRequest,
    open: bool,
    muted: bool,
    created: Option<SharedString>,
}

impl Render for Demo {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_dialog::init_for_window(window, cx);

        let on_mute = cx.entity();
        let on_end = cx.entity();
        let on_close = cx.entity();

        let theme = cx.get_theme();
        let contacts = [(1, "Ada Lovelace"), (2, "Grace Hopper"), (3, "Alan Turing")].map(
            |(id, title)| Contact {
                peer: Peer::user(id),
                title: title.into(),
                avatar: None,
            },
        );

        div()
            .size_full()
            .text_size(theme.layout.text.default_font.sizes.body)
            .text_color(cx.theme_variant().colors.text.primary)
            .bg(cx.theme_variant().colors.background.primary)
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(px(24.))
            .child(
                div()
                    .flex()
                    .gap(px(8.))
                    .child(Emoji::new("👋").size(32.))
                    .child(Emoji::new("🎉").size(32.)),
            )
            .children(self.created.clone())
            .child(
                CallControls::new("call", CallState::InProgress)
                    .on_call(true)
                    .muted(self.muted)
                    .on_mute_toggle(move |_window, cx| {
                        on_mute.update(cx, |view, cx| {
                            view.muted = !view.muted;
                            cx.notify();
                        })
                    })
                    .on_end(move |_window, cx| {
                        on_end.update(cx, |view, cx| {
                            view.open = true;
                            cx.notify();
                        })
                    }),
            )
            .when(self.open, |this| {
                this.child(
                    CreateNewModal::new("create-new", self.step, self.request.clone())
                        .shortname_prefix("t.me/")
                        .contacts(contacts)
                        .on_step_change(cx.listener(|view, step, _window, cx| {
                            view.step = *step;
                            cx.notify();
                        }))
                        .on_request_change(cx.listener(|view, request, _window, cx| {
                            view.request = request.clone();
                            cx.notify();
                        }))
                        .on_submit(cx.listener(|view, request: &CreateNewRequest, _window, cx| {
                            view.created = Some(format!(
                                "Created {} with {} members",
                                request.title,
                                request.members.len()
                            )
                            .into());
                            view.open = false;
                            cx.notify();
                        }))
                        .on_close(move |_window, cx| {
                            on_close.update(cx, |view, cx| {
                                view.open = false;
                                view.step = CreateNewStep::default();
                                cx.notify();
                            })
                        }),
                )
            })
    }
}

fn main() {
    env_logger::init();

    Application::new()
        .with_assets(assets![DialogAssets])
        .run(|cx: &mut App| {
            gpui_dialog::init(cx);
            cx.set_theme(Theme::DEFAULT);

            let bounds = Bounds::centered(None, size(px(720.), px(720.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|_cx| Demo {
                        step: CreateNewStep::default(),
                        request: CreateNewRequest::default(),
                        open: true,
                        muted: false,
                        created: None,
                    })
                },
            )
            .unwrap();

            cx.activate(true);
        });
}
