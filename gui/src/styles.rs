use iced::font::Weight;
use iced::widget::{button, container, Space};
use iced::{Background, Border, Color, Element, Fill, Font, Shadow, Vector};

use jota_staking::provider::ThemeColor;

use crate::{ACTIVE, BORDER, MUTED, PRIMARY, SURFACE};

// -- Additional palette --

pub const ACCENT: Color = Color::from_rgb(0.059, 0.757, 0.718);
pub const DANGER: Color = Color::from_rgb(0.906, 0.192, 0.192);
pub const WARNING: Color = Color::from_rgb(1.0, 0.757, 0.027);

/// Map a semantic status colour onto the palette.
pub fn theme_color(color: ThemeColor) -> Color {
    match color {
        ThemeColor::Warning => WARNING,
        ThemeColor::MarketUp => ACCENT,
        ThemeColor::AlertRed => DANGER,
    }
}

// -- Fonts --

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

// -- Container styles --

pub fn card(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Dimmed layer behind the delegation modal.
pub fn backdrop(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.7))),
        ..Default::default()
    }
}

/// Tinted pill around a status badge.
pub fn badge(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color { a: 0.12, ..color })),
        text_color: Some(color),
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round tile behind a validator monogram or provider mark.
pub fn avatar(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACTIVE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

// -- Button styles --

pub fn btn_primary(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(PRIMARY)),
            ..base
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.19, 0.40, 1.0))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.11, 0.30, 0.88))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.15, 0.19, 0.25))),
            text_color: Color::from_rgba(1.0, 1.0, 1.0, 0.35),
            ..base
        },
    }
}

pub fn btn_secondary(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let border = Border {
        color: BORDER,
        width: 1.0,
        radius: 8.0.into(),
    };

    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: Color::from_rgb(0.85, 0.87, 0.90),
            border,
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(ACTIVE)),
            text_color: Color::WHITE,
            border,
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            text_color: Color::from_rgba(1.0, 1.0, 1.0, 0.3),
            border: Border {
                color: Color::from_rgba(0.204, 0.259, 0.337, 0.5),
                ..border
            },
            ..Default::default()
        },
    }
}

pub fn btn_ghost(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let border = Border {
        radius: 8.0.into(),
        ..Default::default()
    };
    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: Color::from_rgb(0.85, 0.87, 0.90),
            border,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.05))),
            text_color: Color::WHITE,
            border,
            ..Default::default()
        },
        _ => button::Style {
            text_color: MUTED,
            border,
            ..Default::default()
        },
    }
}

/// Breadcrumb entry: current step bold white, flagged steps red, reachable
/// steps clickable.
pub fn crumb(current: bool, flagged: bool) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = if flagged {
            DANGER
        } else if current {
            Color::WHITE
        } else {
            match status {
                button::Status::Hovered => Color::WHITE,
                _ => MUTED,
            }
        };
        button::Style {
            background: None,
            text_color,
            ..Default::default()
        }
    }
}

/// Validator list row; the chosen one keeps the active background.
pub fn list_row(active: bool) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if active {
            Some(Background::Color(ACTIVE))
        } else {
            match status {
                button::Status::Hovered => {
                    Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.04)))
                }
                _ => None,
            }
        };
        button::Style {
            background,
            text_color: Color::WHITE,
            border: Border {
                color: if active { PRIMARY } else { Color::TRANSPARENT },
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

pub fn toggle_btn(active: bool) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let border = Border {
            color: BORDER,
            width: 1.0,
            radius: 8.0.into(),
        };
        if active {
            button::Style {
                background: Some(Background::Color(PRIMARY)),
                text_color: Color::WHITE,
                border: Border { width: 0.0, ..border },
                ..Default::default()
            }
        } else {
            match status {
                button::Status::Hovered => button::Style {
                    background: Some(Background::Color(ACTIVE)),
                    text_color: Color::WHITE,
                    border,
                    ..Default::default()
                },
                _ => button::Style {
                    background: Some(Background::Color(Color::TRANSPARENT)),
                    text_color: MUTED,
                    border,
                    ..Default::default()
                },
            }
        }
    }
}

// -- Helpers --

pub fn separator<'a, M: 'a>() -> Element<'a, M> {
    container(Space::new())
        .width(Fill)
        .height(1)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color::from_rgba(
                0.204, 0.259, 0.337, 0.5,
            ))),
            ..Default::default()
        })
        .into()
}
