use std::rc::Rc;

use gpui::{
    AnyElement, App, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, Pixels,
    RenderOnce, StatefulInteractiveElement, Styled, Window, deferred, div, prelude::FluentBuilder,
    px,
};
use gpui_squircle::{SquircleStyled, squircle};
use smallvec::SmallVec;

use crate::{
    DialogIconKind,
    components::{Button, ButtonVariant},
    theme::ThemeExt,
    utils::ElementIdExt,
};

type CloseHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// A centered panel over a dimmed backdrop.
///
/// The modal is painted deferred so it sits above its siblings. Clicking the
/// backdrop calls `on_close`; clicks inside the panel stay inside it.
#[derive(IntoElement)]
pub struct Modal {
    id: ElementId,
    width: Pixels,
    priority: usize,
    on_close: Option<CloseHandler>,
    children: SmallVec<[AnyElement; 4]>,
}

impl Modal {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            width: px(420.),
            priority: 1,
            on_close: None,
            children: SmallVec::new(),
        }
    }

    pub fn w(mut self, width: impl Into<Pixels>) -> Self {
        self.width = width.into();
        self
    }

    /// Paint order relative to other deferred elements.
    pub fn priority(mut self, priority: usize) -> Self {
        self.priority = priority;
        self
    }

    pub fn on_close(mut self, on_close: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(on_close));
        self
    }
}

impl ParentElement for Modal {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = &cx.theme_variant().colors;
        let overlay = colors.overlay;
        let background = colors.background.secondary;
        let border = colors.background.tertiary;
        let text_color = colors.text.primary;
        let corner_radius = cx.get_theme().layout.corner_radii.xl;
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let line_height = cx.get_theme().layout.text.default_font.line_height;

        let panel = div()
            .id(self.id.with_suffix("panel"))
            .relative()
            .w(self.width)
            .max_w_full()
            .flex()
            .flex_col()
            .font_family(font_family)
            .line_height(line_height)
            .text_color(text_color)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(background)
                    .border(px(1.))
                    .border_inside()
                    .border_color(border),
            )
            .children(self.children)
            .on_click(|_event, _window, cx| cx.stop_propagation());

        let on_close = self.on_close;

        deferred(
            div()
                .id(self.id)
                .absolute()
                .inset_0()
                .flex()
                .items_center()
                .justify_center()
                .bg(overlay)
                .occlude()
                .when_some(on_close, |this, on_close| {
                    this.on_click(move |_event, window, cx| (on_close)(window, cx))
                })
                .child(panel),
        )
        .priority(self.priority)
    }
}

/// Title row of a modal. Children are laid out left to right.
#[derive(IntoElement, Default)]
pub struct ModalHeader {
    with_border: bool,
    children: SmallVec<[AnyElement; 3]>,
}

impl ModalHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_border(mut self, with_border: bool) -> Self {
        self.with_border = with_border;
        self
    }
}

impl ParentElement for ModalHeader {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl RenderOnce for ModalHeader {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let layout = &cx.get_theme().layout;
        let height = layout.size.xl + layout.padding.md;
        let padding = layout.padding.xl;
        let gap = layout.padding.md;
        let text_size = layout.text.default_font.sizes.heading_sm;
        let border_color = cx.theme_variant().colors.background.tertiary;

        div()
            .flex_none()
            .h(height)
            .px(padding)
            .flex()
            .items_center()
            .gap(gap)
            .text_size(text_size)
            .font_weight(FontWeight::SEMIBOLD)
            .when(self.with_border, |this| {
                this.border_b_1().border_color(border_color)
            })
            .children(self.children)
    }
}

/// A ghost glyph button used in modal headers.
#[derive(IntoElement)]
struct ModalGlyphButton {
    id: ElementId,
    glyph: DialogIconKind,
    push_right: bool,
    on_click: Option<CloseHandler>,
}

impl RenderOnce for ModalGlyphButton {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let size = cx.get_theme().layout.size.md;
        let corner_radius = cx.get_theme().layout.corner_radii.md;

        let button = Button::new(self.id)
            .icon(self.glyph)
            .icon_size(px(18.))
            .variant(ButtonVariant::SecondaryGhost)
            .size(size)
            .p(px(0.))
            .rounded(corner_radius);

        div()
            .flex_none()
            .when(self.push_right, |this| this.ml_auto())
            .child(match self.on_click {
                Some(on_click) => button.on_click(move |_event, window, cx| (on_click)(window, cx)),
                None => button,
            })
    }
}

/// Close glyph, pushed to the right end of a [`ModalHeader`].
#[derive(IntoElement)]
pub struct ModalClose {
    id: ElementId,
    on_click: Option<CloseHandler>,
}

impl ModalClose {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            on_click: None,
        }
    }

    pub fn on_click(mut self, on_click: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }
}

impl RenderOnce for ModalClose {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        ModalGlyphButton {
            id: self.id,
            glyph: DialogIconKind::Close,
            push_right: true,
            on_click: self.on_click,
        }
    }
}

/// Back arrow placed before the title of a [`ModalHeader`].
#[derive(IntoElement)]
pub struct ModalBack {
    id: ElementId,
    on_click: Option<CloseHandler>,
}

impl ModalBack {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            on_click: None,
        }
    }

    pub fn on_click(mut self, on_click: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }
}

impl RenderOnce for ModalBack {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        ModalGlyphButton {
            id: self.id,
            glyph: DialogIconKind::ArrowBack,
            push_right: false,
            on_click: self.on_click,
        }
    }
}

/// Scrollable content area of a modal.
#[derive(IntoElement)]
pub struct ModalBody {
    id: ElementId,
    children: SmallVec<[AnyElement; 2]>,
}

impl ModalBody {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            children: SmallVec::new(),
        }
    }
}

impl ParentElement for ModalBody {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl RenderOnce for ModalBody {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let padding = cx.get_theme().layout.padding.xl;
        let text_size = cx.get_theme().layout.text.default_font.sizes.body;

        div()
            .id(self.id)
            .flex_1()
            .min_h_0()
            .max_h(px(480.))
            .overflow_y_scroll()
            .p(padding)
            .flex()
            .flex_col()
            .gap(padding)
            .text_size(text_size)
            .children(self.children)
    }
}

/// Action row at the bottom of a modal.
#[derive(IntoElement, Default)]
pub struct ModalFooter {
    children: SmallVec<[AnyElement; 2]>,
}

impl ModalFooter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParentElement for ModalFooter {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl RenderOnce for ModalFooter {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let padding = cx.get_theme().layout.padding.xl;

        div()
            .flex_none()
            .px(padding)
            .pb(padding)
            .flex()
            .gap(cx.get_theme().layout.padding.md)
            .children(self.children)
    }
}
