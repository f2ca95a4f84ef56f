use std::rc::Rc;

use gpui::{
    App, ElementId, IntoElement, ObjectFit, ParentElement, Pixels, RenderOnce, Styled,
    StyledImage, Window, div, img, px,
};

use crate::{
    components::{Button, ButtonVariant, create_new::LocalImage},
    labels::Label,
    theme::ThemeExt,
    utils::ElementIdExt,
};

/// Preview of a locally chosen image with a confirm button.
///
/// The preview is masked to a circle, the shape the avatar will have once
/// uploaded. Confirming hands the image back through `on_submit`.
#[derive(IntoElement)]
pub struct ImageEdit {
    id: ElementId,
    image: LocalImage,
    size: Pixels,
    height: Pixels,
    on_submit: Option<Rc<dyn Fn(&LocalImage, &mut Window, &mut App) + 'static>>,
}

impl ImageEdit {
    pub fn new(id: impl Into<ElementId>, image: LocalImage) -> Self {
        Self {
            id: id.into(),
            image,
            size: px(250.),
            height: px(320.),
            on_submit: None,
        }
    }

    /// Diameter of the circular preview.
    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }

    /// Height of the stage the preview sits on.
    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into();
        self
    }

    pub fn on_submit(
        mut self,
        on_submit: impl Fn(&LocalImage, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_submit = Some(Rc::new(on_submit));
        self
    }
}

impl RenderOnce for ImageEdit {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let stage_color = cx.theme_variant().colors.background.primary;
        let ring_color = cx.theme_variant().colors.background.quaternary;
        let corner_radius = cx.get_theme().layout.corner_radii.lg;
        let gap = cx.get_theme().layout.padding.xl;

        let image = self.image;
        let on_submit = self.on_submit;
        let submitted = image.clone();

        div()
            .w_full()
            .flex()
            .flex_col()
            .items_center()
            .gap(gap)
            .child(
                div()
                    .w_full()
                    .h(self.height)
                    .rounded(corner_radius)
                    .bg(stage_color)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        div()
                            .size(self.size)
                            .rounded_full()
                            .overflow_hidden()
                            .border_2()
                            .border_color(ring_color)
                            .child(
                                img(image.image_source())
                                    .size_full()
                                    .object_fit(ObjectFit::Cover),
                            ),
                    ),
            )
            .child(
                Button::new(self.id.with_suffix("submit"))
                    .text(Label::ImageEditSubmit.resolve(cx))
                    .variant(ButtonVariant::Constructive)
                    .w_full()
                    .on_click(move |_event, window, cx| {
                        if let Some(on_submit) = on_submit.as_ref() {
                            (on_submit)(&submitted, window, cx);
                        }
                    }),
            )
    }
}
