// SPDX-License-Identifier: MPL-2.0
//! Semantic color lookups on top of the raw design tokens.
//!
//! Widgets ask for a role (page background, heading text) instead of reaching
//! into the palette, so a rebrand only touches this file and `design_tokens`.

use iced::Color;

use super::design_tokens::palette;

/// Page background fill.
#[must_use]
pub fn page_background() -> Color {
    palette::NAVY_900
}

/// Color for headings and the wordmark.
#[must_use]
pub fn heading_text_color() -> Color {
    palette::BLUE_100
}

/// Color for body copy and captions.
#[must_use]
pub fn body_text_color() -> Color {
    palette::BLUE_200
}

/// Brand accent for primary actions.
#[must_use]
pub fn accent_color() -> Color {
    palette::PRIMARY_500
}

/// Colors of the three rings in the splash orbit animation, outermost first.
#[must_use]
pub fn orbit_ring_colors() -> [Color; 3] {
    [palette::PRIMARY_400, palette::CYAN_400, palette::VIOLET_400]
}
