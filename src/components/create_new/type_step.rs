use std::rc::Rc;

use gpui::{
    App, CursorStyle, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_transitions::TransitionExt;

use super::CreateNewKind;
use crate::{
    components::{Checkbox, CheckboxShape, Icon},
    labels::Label,
    theme::ThemeExt,
    utils::{ElementIdExt, RgbaExt, SelectableBorder},
};

type KindHandler = Rc<dyn Fn(&CreateNewKind, &mut Window, &mut App) + 'static>;

/// First wizard page: pick whether a group or a channel is created.
#[derive(IntoElement)]
pub struct CreateNewType {
    id: ElementId,
    kind: CreateNewKind,
    on_change: Option<KindHandler>,
}

impl CreateNewType {
    pub fn new(id: impl Into<ElementId>, kind: CreateNewKind) -> Self {
        Self {
            id: id.into(),
            kind,
            on_change: None,
        }
    }

    pub fn on_change(
        mut self,
        on_change: impl Fn(&CreateNewKind, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }
}

fn option_labels(kind: CreateNewKind) -> (Label, Label) {
    match kind {
        CreateNewKind::Group => (Label::TypeGroup, Label::TypeGroupHint),
        CreateNewKind::Channel => (Label::TypeChannel, Label::TypeChannelHint),
    }
}

impl RenderOnce for CreateNewType {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = &cx.theme_variant().colors;
        let accent = colors.accent.primary;
        let border = SelectableBorder {
            rest: colors.background.tertiary,
            hover: colors.background.quinary,
            selected: accent,
        };
        let primary_text_color = colors.text.primary;
        let secondary_text_color = colors.text.secondary;
        let layout = &cx.get_theme().layout;
        let padding = layout.padding.lg;
        let corner_radius = layout.corner_radii.lg;
        let caption_size = layout.text.default_font.sizes.caption;

        let options = [CreateNewKind::Group, CreateNewKind::Channel].map(|kind| {
            let selected = kind == self.kind;
            let (title, hint) = option_labels(kind);
            let on_change = self.on_change.clone();
            let option_id = self.id.with_suffix(format!("{kind:?}"));

            let is_hover_state =
                window.use_keyed_state(option_id.with_suffix("state:hover"), cx, |_window, _cx| {
                    false
                });
            let is_hover = *is_hover_state.read(cx);
            let border_color_state =
                border.transition(option_id.clone(), window, cx, is_hover, selected);

            div()
                .id(option_id.clone())
                .w_full()
                .p(padding)
                .flex()
                .items_center()
                .gap(padding)
                .rounded(corner_radius)
                .border_1()
                .with_transitions(border_color_state, |_cx, this, border_color| {
                    this.border_color(border_color)
                })
                .when(selected, |this| this.bg(accent.alpha(0.08)))
                .cursor(CursorStyle::PointingHand)
                .child(
                    Icon::new(kind.glyph())
                        .size(px(24.))
                        .color(if selected { accent } else { secondary_text_color }),
                )
                .child(
                    div()
                        .flex_1()
                        .min_w_0()
                        .flex()
                        .flex_col()
                        .child(
                            div()
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(primary_text_color)
                                .child(title.resolve(cx)),
                        )
                        .child(
                            div()
                                .text_size(caption_size)
                                .text_color(secondary_text_color)
                                .child(hint.resolve(cx)),
                        ),
                )
                // Clicks on the check bubble up to the row.
                .child(
                    Checkbox::new(option_id.with_suffix("check"))
                        .shape(CheckboxShape::Circle)
                        .checked(selected),
                )
                .on_hover(move |hover, _window, cx| {
                    is_hover_state.update(cx, |this, cx| {
                        *this = *hover;
                        cx.notify();
                    });
                })
                .when_some(on_change, |this, on_change| {
                    this.on_click(move |_event, window, cx| (on_change)(&kind, window, cx))
                })
        });

        div()
            .id(self.id)
            .flex()
            .flex_col()
            .gap(padding)
            .children(options)
    }
}
