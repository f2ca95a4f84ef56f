use std::rc::Rc;

use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};

use crate::{
    components::{PeerAvatar, avatar_placeholder},
    entities::ChatMember,
    primitives::truncated_text,
    theme::ThemeExt,
    utils::ElementIdExt,
};

const AVATAR_SIZE: f32 = 36.;

type MemberHandler = Rc<dyn Fn(&ChatMember, &mut Window, &mut App) + 'static>;

/// One selectable member row.
#[derive(IntoElement)]
pub struct AdminModalUserListItem {
    id: ElementId,
    member: ChatMember,
    hovered: bool,
    on_click: Option<MemberHandler>,
}

impl AdminModalUserListItem {
    pub fn new(id: impl Into<ElementId>, member: ChatMember) -> Self {
        Self {
            id: id.into(),
            member,
            hovered: false,
            on_click: None,
        }
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ChatMember, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    fn on_click_rc(mut self, on_click: Option<MemberHandler>) -> Self {
        self.on_click = on_click;
        self
    }

}

impl RenderOnce for AdminModalUserListItem {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let layout = &cx.get_theme().layout;
        let height = layout.size.xl;
        let padding = layout.padding.md;
        let corner_radius = layout.corner_radii.md;
        let text_size = layout.text.default_font.sizes.body;
        let hover_color = cx.theme_variant().colors.background.tertiary;

        let avatar = PeerAvatar::new(self.member.title.clone())
            .placeholder(avatar_placeholder(self.member.peer.id))
            .size(px(AVATAR_SIZE))
            .when_some(self.member.avatar.clone(), |this, image| this.image(image));

        let title = self.member.title.clone();
        let member = self.member;
        let on_click = self.on_click;

        div()
            .debug_selector(|| self.id.to_string())
            .id(self.id)
            .w_full()
            .h(height)
            .px(padding)
            .flex()
            .items_center()
            .gap(padding)
            .rounded(corner_radius)
            .cursor(CursorStyle::PointingHand)
            .when(self.hovered, |this| this.bg(hover_color))
            .child(avatar)
            .child(
                truncated_text(title).text_size(text_size),
            )
            .when_some(on_click, |this, on_click| {
                this.on_click(move |_event, window, cx| (on_click)(&member, window, cx))
            })
    }
}

/// Renders a slice of members, highlighting `hovered_index`.
#[derive(IntoElement)]
pub struct AdminModalUserList {
    id: ElementId,
    members: Vec<ChatMember>,
    hovered_index: Option<usize>,
    on_click: Option<MemberHandler>,
}

impl AdminModalUserList {
    pub fn new(id: impl Into<ElementId>, members: impl IntoIterator<Item = ChatMember>) -> Self {
        Self {
            id: id.into(),
            members: members.into_iter().collect(),
            hovered_index: None,
            on_click: None,
        }
    }

    pub fn hovered_index(mut self, hovered_index: Option<usize>) -> Self {
        self.hovered_index = hovered_index;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ChatMember, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    fn items(&self) -> Vec<AdminModalUserListItem> {
        self.members
            .iter()
            .enumerate()
            .map(|(index, member)| {
                AdminModalUserListItem::new(self.id.with_suffix(index.to_string()), member.clone())
                    .hovered(self.hovered_index == Some(index))
                    .on_click_rc(self.on_click.clone())
            })
            .collect()
    }
}

impl RenderOnce for AdminModalUserList {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let gap = cx.get_theme().layout.padding.sm;
        let items = self.items();

        div()
            .id(self.id)
            .flex()
            .flex_col()
            .gap(gap)
            .children(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Peer, PeerKind};

    fn member(id: i64, title: &str) -> ChatMember {
        ChatMember {
            peer: Peer::user(id),
            title: title.to_owned().into(),
            avatar: None,
        }
    }

    #[test]
    fn test_list_marks_only_hovered_row() {
        let list = AdminModalUserList::new("admins", [member(1, "Ada"), member(2, "Grace")])
            .hovered_index(Some(1));

        let highlighted = list.items().iter().map(|item| item.hovered).collect::<Vec<_>>();
        assert_eq!(highlighted, [false, true]);
    }

    #[test]
    fn test_list_without_hover_highlights_nothing() {
        let list = AdminModalUserList::new("admins", [member(1, "Ada"), member(2, "Grace")])
            .hovered_index(None);
        assert!(list.items().iter().all(|item| !item.hovered));

        let list = AdminModalUserList::new("admins", [member(1, "Ada")]).hovered_index(Some(4));
        assert!(list.items().iter().all(|item| !item.hovered));
    }

    #[test]
    fn test_item_keeps_member_untouched() {
        let original = ChatMember {
            peer: Peer {
                id: 7.into(),
                kind: PeerKind::User,
            },
            title: "Linus".into(),
            avatar: Some("https://example.com/avatar.png".into()),
        };

        let item = AdminModalUserListItem::new("row", original.clone()).hovered(true);
        assert_eq!(item.member, original);
        assert!(item.hovered);
    }
}
