//! Vector glyphs rendered to SVG markup.

/// Stroke-free glyphs drawn on a 24x24 viewBox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    CircledCrossRegular,
    Clock,
    CheckCircle,
    ExclamationCircle,
}

impl Glyph {
    fn path(self) -> &'static str {
        match self {
            Self::CircledCrossRegular => {
                "M8.90377 16.2L11.9998 13.104L15.0958 16.2L16.1998 15.096L13.1038 12L16.1998 8.90401\
                 L15.0958 7.80001L11.9998 10.896L8.90377 7.80001L7.79977 8.90401L10.8958 12\
                 L7.79977 15.096L8.90377 16.2ZM2.75977 12C2.75977 17.16 6.83977 21.24 11.9998 21.24\
                 C17.1838 21.24 21.2398 17.04 21.2398 12C21.2398 6.84001 17.1598 2.76001 11.9998 2.76001\
                 C6.83977 2.76001 2.75977 6.84001 2.75977 12ZM4.31977 12C4.31977 7.68001 7.70377 4.32001\
                 11.9998 4.32001C16.3198 4.32001 19.6798 7.68001 19.6798 12C19.6798 16.176 16.3198 19.68\
                 11.9998 19.68C7.70377 19.68 4.31977 16.296 4.31977 12Z"
            }
            Self::Clock => {
                "M12 2.76A9.24 9.24 0 1 0 12 21.24A9.24 9.24 0 1 0 12 2.76ZM12 4.32A7.68 7.68 0 1 1\
                 12 19.68A7.68 7.68 0 1 1 12 4.32ZM11.22 6.6V12.46L15.3 15.18L16.14 13.9L12.78 11.64\
                 V6.6Z"
            }
            Self::CheckCircle => {
                "M12 2.76A9.24 9.24 0 1 0 12 21.24A9.24 9.24 0 1 0 12 2.76ZM12 4.32A7.68 7.68 0 1 1\
                 12 19.68A7.68 7.68 0 1 1 12 4.32ZM10.56 15.84L16.92 9.48L15.84 8.4L10.56 13.68\
                 L8.16 11.28L7.08 12.36Z"
            }
            Self::ExclamationCircle => {
                "M12 2.76A9.24 9.24 0 1 0 12 21.24A9.24 9.24 0 1 0 12 2.76ZM12 4.32A7.68 7.68 0 1 1\
                 12 19.68A7.68 7.68 0 1 1 12 4.32ZM11.22 7.2H12.78V13.56H11.22ZM11.22 15.12H12.78\
                 V16.8H11.22Z"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconColor {
    /// Inherit from the surrounding text colour.
    CurrentColor,
    /// `#rrggbb` hex colour.
    Hex(String),
}

impl IconColor {
    /// From 0..=1 RGB components, as the view layer stores colours.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::Hex(format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b)))
    }

    fn as_attr(&self) -> &str {
        match self {
            Self::CurrentColor => "currentColor",
            Self::Hex(hex) => hex,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconProps {
    pub size: f32,
    pub color: IconColor,
}

impl Default for IconProps {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: IconColor::CurrentColor,
        }
    }
}

impl IconProps {
    pub fn new(size: f32, color: IconColor) -> Self {
        Self { size, color }
    }
}

/// Render `glyph` at `props.size` pixels filled with `props.color`.
#[must_use]
pub fn render_svg(glyph: Glyph, props: &IconProps) -> String {
    let path: String = glyph.path().split_whitespace().collect::<Vec<_>>().join(" ");
    format!(
        r#"<svg width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="{path}" fill="{fill}"/></svg>"#,
        size = props.size,
        fill = props.color.as_attr(),
    )
}
