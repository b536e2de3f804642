use iced::widget::svg;
use iced::{Color, Element, Length};
use jota_staking::{render_svg, Glyph, IconColor, IconProps};

/// Rasterise a core glyph at `size` pixels in `color`.
///
/// The SVG renderer has no notion of the surrounding text colour, so the
/// colour is always explicit here.
pub(crate) fn icon<'a, M: 'a>(glyph: Glyph, size: f32, color: Color) -> Element<'a, M> {
    let props = IconProps::new(size, IconColor::from_rgb(color.r, color.g, color.b));
    svg(svg::Handle::from_memory(render_svg(glyph, &props).into_bytes()))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into()
}
