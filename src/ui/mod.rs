// SPDX-License-Identifier: MPL-2.0
//! UI layer: screens, widgets, styles, and the design system.

pub mod design_tokens;
pub mod landing;
pub mod notifications;
pub mod splash;
pub mod styles;
pub mod theme;
pub mod widgets;
