use gpui::{AbsoluteLength, DefiniteLength, Pixels, Window, px};

pub trait PixelsExt {
    /// Vertical padding that makes a single line of text reach this height.
    fn padding_needed_for_height(
        &self,
        window: &Window,
        text_size: AbsoluteLength,
        line_height: DefiniteLength,
    ) -> Pixels;
}

impl PixelsExt for Pixels {
    fn padding_needed_for_height(
        &self,
        window: &Window,
        text_size: AbsoluteLength,
        line_height: DefiniteLength,
    ) -> Pixels {
        let rem = window.rem_size();
        let line = match line_height {
            DefiniteLength::Fraction(fraction) => text_size.to_pixels(rem) * fraction,
            DefiniteLength::Absolute(length) => length.to_pixels(rem),
        };

        let padding = (*self - line) / 2.;
        if padding > px(0.) { padding } else { px(0.) }
    }
}
