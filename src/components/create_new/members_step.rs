use std::rc::Rc;

use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use indexmap::IndexSet;

use crate::{
    components::{Checkbox, CheckboxShape, PeerAvatar, avatar_placeholder},
    entities::{Contact, PeerId},
    labels::Label,
    primitives::truncated_text,
    theme::ThemeExt,
    utils::ElementIdExt,
};

const AVATAR_SIZE: f32 = 36.;

type ToggleHandler = Rc<dyn Fn(&PeerId, &mut Window, &mut App) + 'static>;

/// Last wizard page: choose which contacts join.
#[derive(IntoElement)]
pub struct CreateNewMembers {
    id: ElementId,
    contacts: Vec<Contact>,
    selected: IndexSet<PeerId>,
    disabled: bool,
    on_toggle: Option<ToggleHandler>,
}

impl CreateNewMembers {
    pub fn new(
        id: impl Into<ElementId>,
        contacts: impl IntoIterator<Item = Contact>,
        selected: IndexSet<PeerId>,
    ) -> Self {
        Self {
            id: id.into(),
            contacts: contacts.into_iter().collect(),
            selected,
            disabled: false,
            on_toggle: None,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_toggle(mut self, on_toggle: impl Fn(&PeerId, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(on_toggle));
        self
    }

    fn is_selected(&self, contact: &Contact) -> bool {
        self.selected.contains(&contact.peer.id)
    }
}

impl RenderOnce for CreateNewMembers {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let layout = &cx.get_theme().layout;
        let height = layout.size.xl;
        let padding = layout.padding.md;
        let corner_radius = layout.corner_radii.md;
        let text_size = layout.text.default_font.sizes.body;
        let colors = &cx.theme_variant().colors;
        let hover_color = colors.background.tertiary;
        let secondary_text_color = colors.text.secondary;

        if self.contacts.is_empty() {
            return div()
                .id(self.id)
                .py(padding)
                .text_size(text_size)
                .text_color(secondary_text_color)
                .child(Label::MembersEmpty.resolve(cx));
        }

        let rows = self
            .contacts
            .iter()
            .map(|contact| {
                let selected = self.is_selected(contact);
                let peer = contact.peer.id;
                let row_id = self.id.with_suffix(peer.0.to_string());
                let on_toggle = self.on_toggle.clone().filter(|_| !self.disabled);

                div()
                    .id(row_id.clone())
                    .w_full()
                    .h(height)
                    .px(padding)
                    .flex()
                    .items_center()
                    .gap(padding)
                    .rounded(corner_radius)
                    .when(!self.disabled, |this| {
                        this.cursor(CursorStyle::PointingHand)
                            .hover(|style| style.bg(hover_color))
                    })
                    .child(
                        PeerAvatar::new(contact.title.clone())
                            .placeholder(avatar_placeholder(peer))
                            .size(px(AVATAR_SIZE))
                            .when_some(contact.avatar.clone(), |this, image| this.image(image)),
                    )
                    .child(
                        truncated_text(contact.title.clone())
                            .flex_1()
                            .text_size(text_size),
                    )
                    .child(
                        Checkbox::new(row_id.with_suffix("check"))
                            .shape(CheckboxShape::Circle)
                            .checked(selected)
                            .disabled(self.disabled),
                    )
                    .when_some(on_toggle, |this, on_toggle| {
                        this.on_click(move |_event, window, cx| (on_toggle)(&peer, window, cx))
                    })
            })
            .collect::<Vec<_>>();

        div().id(self.id).flex().flex_col().children(rows)
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use crate::{entities::Peer, theme::Theme};
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    struct MembersTestView {
        contacts: Vec<Contact>,
    }

    impl gpui::Render for MembersTestView {
        fn render(
            &mut self,
            _window: &mut Window,
            _cx: &mut gpui::Context<Self>,
        ) -> impl IntoElement {
            div().size_full().child(CreateNewMembers::new(
                "members",
                self.contacts.clone(),
                IndexSet::new(),
            ))
        }
    }

    #[gpui::test]
    fn test_renders_with_and_without_contacts(cx: &mut TestAppContext) {
        for contacts in [
            Vec::new(),
            vec![Contact {
                peer: Peer::user(4),
                title: "Katherine Johnson".into(),
                avatar: None,
            }],
        ] {
            let window = cx.update(|cx| {
                cx.set_theme(Theme::DEFAULT);
                cx.open_window(Default::default(), |_window, cx| {
                    cx.new(|_cx| MembersTestView { contacts })
                })
                .unwrap()
            });

            let visual = VisualTestContext::from_window(window.into(), cx);
            visual.run_until_parked();
        }
    }
}
