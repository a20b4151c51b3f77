// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window page surface behind every screen.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_900)),
        text_color: Some(palette::BLUE_200),
        ..Default::default()
    }
}

/// Glass card used for the feature grid.
///
/// Translucent white over the navy page gives the frosted look without a
/// second surface palette.
pub fn glass_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLASS_SURFACE,
            ..Color::WHITE
        })),
        border: Border {
            color: Color {
                a: opacity::GLASS_BORDER,
                ..Color::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
