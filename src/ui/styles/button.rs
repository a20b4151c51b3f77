// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Style pour bouton secondaire (lien externe, action de support).
///
/// Glass look: transparent fill with a faint white border over the navy page.
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let (fill_alpha, border_alpha) = match status {
        button::Status::Hovered => (opacity::GLASS_SURFACE * 2.0, opacity::GLASS_BORDER * 2.0),
        button::Status::Pressed => (opacity::GLASS_SURFACE * 3.0, opacity::GLASS_BORDER * 2.0),
        _ => (opacity::GLASS_SURFACE, opacity::GLASS_BORDER),
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: fill_alpha,
            ..WHITE
        })),
        text_color: palette::BLUE_100,
        border: Border {
            color: Color {
                a: border_alpha,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the active entry in the language switcher.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::NAVY_700)),
            text_color: palette::BLUE_200,
            border: Border {
                color: Color {
                    a: opacity::GLASS_BORDER,
                    ..WHITE
                },
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for inactive entries in the language switcher.
pub fn unselected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::GLASS_SURFACE * 2.0,
                ..WHITE
            })),
            text_color: palette::BLUE_100,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: palette::BLUE_200,
            border: Border {
                color: Color {
                    a: opacity::GLASS_BORDER,
                    ..WHITE
                },
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for plain text links in the footer.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BLUE_100,
        _ => palette::BLUE_200,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
