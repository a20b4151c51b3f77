// SPDX-License-Identifier: MPL-2.0
//! Design system constants for the landing page.
//!
//! Single source of truth for colors, spacing, sizing, and typography so the
//! brand look stays consistent across sections. The page is a fixed dark
//! design; surfaces come from the navy scale, text from the blue scale.

/// Brand color palette.
pub mod palette {
    use iced::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;

    // Page surfaces, darkest to lightest
    /// Page background.
    pub const NAVY_900: Color = Color::from_rgb(0.027, 0.043, 0.09);
    /// Card and panel surface.
    pub const NAVY_800: Color = Color::from_rgb(0.05, 0.08, 0.16);
    /// Raised surface (toasts, hovered cards).
    pub const NAVY_700: Color = Color::from_rgb(0.09, 0.13, 0.24);

    // Text
    /// Headings and primary copy.
    pub const BLUE_100: Color = Color::from_rgb(0.91, 0.949, 1.0);
    /// Muted body copy and captions.
    pub const BLUE_200: Color = Color::from_rgb(0.718, 0.784, 0.906);

    // Brand accents
    pub const PRIMARY_400: Color = Color::from_rgb(0.35, 0.62, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.39, 0.82);

    /// Secondary accent used by the orbit animation and background orbs.
    pub const CYAN_400: Color = Color::from_rgb(0.29, 0.87, 0.95);
    /// Tertiary accent used by the orbit animation and background orbs.
    pub const VIOLET_400: Color = Color::from_rgb(0.55, 0.47, 0.96);

    // Severity colors for notifications
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314);
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953);
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.596, 0.0);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

/// Opacity levels for overlays and glass surfaces.
pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Glass card fill (white over navy).
    pub const GLASS_SURFACE: f32 = 0.05;
    /// Glass card border (white over navy).
    pub const GLASS_BORDER: f32 = 0.14;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

/// Spacing scale in logical pixels.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    /// Vertical rhythm between landing sections.
    pub const SECTION: f32 = 96.0;
}

/// Fixed element sizes in logical pixels.
pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    /// Side length of the splash orbit animation canvas.
    pub const SPLASH_ORBITS: f32 = 160.0;
    /// Width of a toast notification card.
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Maximum width of running text blocks (hero subtitle, vision copy).
    pub const CONTENT_MAX_WIDTH: f32 = 800.0;
    /// Width of one feature card.
    pub const CARD_WIDTH: f32 = 260.0;
}

/// Font sizes in logical pixels.
pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 48.0;
    /// Section headlines (vision).
    pub const TITLE_LG: f32 = 40.0;
    /// Card titles.
    pub const TITLE_MD: f32 = 24.0;
    /// Small headings.
    pub const TITLE_SM: f32 = 18.0;
    /// Lead paragraphs.
    pub const BODY_LG: f32 = 19.0;
    pub const BODY: f32 = 16.0;
    pub const BODY_SM: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

/// Border widths.
pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

/// Corner radii.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    /// Pill shape for hero and switcher buttons.
    pub const FULL: f32 = 9999.0;
}

/// Shadow presets.
pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        offset: Vector::new(0.0, 4.0),
        blur_radius: 16.0,
    };
}

// Compile-time sanity checks on the scales.
const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);
    assert!(spacing::XL < spacing::XXL);
    assert!(spacing::XXL < spacing::SECTION);

    assert!(opacity::TRANSPARENT >= 0.0);
    assert!(opacity::GLASS_SURFACE < opacity::GLASS_BORDER);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OPAQUE <= 1.0);

    assert!(typography::CAPTION < typography::BODY_SM);
    assert!(typography::BODY_SM < typography::BODY);
    assert!(typography::BODY < typography::BODY_LG);
    assert!(typography::TITLE_SM < typography::TITLE_MD);
    assert!(typography::TITLE_MD < typography::TITLE_LG);
    assert!(typography::TITLE_LG < typography::DISPLAY);
};
