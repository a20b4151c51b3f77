// SPDX-License-Identifier: MPL-2.0
//! Branded loading animation using Canvas for smooth rotation.
//!
//! Three concentric rings orbit at different speeds and directions around the
//! wordmark while the app boots. The whole drawing takes a global opacity so
//! the splash screen can fade it out.

use crate::ui::design_tokens::sizing;
use crate::ui::theme;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Angular speed of each ring relative to the base rotation, outermost first.
/// Negative values orbit counter-clockwise.
const RING_SPEEDS: [f32; 3] = [1.0, -0.7, 0.4];

/// Ring radii as a fraction of the canvas half-size, outermost first.
const RING_RADII: [f32; 3] = [0.9, 0.7, 0.5];

/// Orbit animation shown on the splash screen.
pub struct OrbitSpinner {
    cache: Cache,
    rotation: f32, // Base rotation angle in radians
    opacity: f32,
    size: f32,
}

impl OrbitSpinner {
    /// Creates the orbit animation at the given base angle and opacity.
    #[must_use]
    pub fn new(rotation: f32, opacity: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            opacity,
            size: sizing::SPLASH_ORBITS,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    fn fade(&self, color: Color) -> Color {
        Color {
            a: color.a * self.opacity,
            ..color
        }
    }
}

impl<Message> canvas::Program<Message> for OrbitSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let half = frame.width().min(frame.height()) / 2.0 - 4.0;
                let ring_colors = theme::orbit_ring_colors();

                for (index, (&speed, &radius_factor)) in
                    RING_SPEEDS.iter().zip(RING_RADII.iter()).enumerate()
                {
                    let radius = half * radius_factor;
                    let color = ring_colors[index];

                    // Faint full circle as the orbit track
                    let track = Path::circle(center, radius);
                    frame.stroke(
                        &track,
                        Stroke::default()
                            .with_width(2.0)
                            .with_color(self.fade(Color { a: 0.25, ..color })),
                    );

                    // Bright 120° arc orbiting along the track
                    let start_angle = self.rotation * speed - PI / 2.0;
                    let end_angle = start_angle + 2.0 * PI / 3.0;

                    let mut arc_path = canvas::path::Builder::new();

                    let start_x = center.x + radius * start_angle.cos();
                    let start_y = center.y + radius * start_angle.sin();
                    arc_path.move_to(Point::new(start_x, start_y));

                    // Approximate the arc with short line segments
                    let segments = 30;
                    #[allow(clippy::cast_precision_loss)]
                    // segments=30, i∈[1,30] - well within f32 precision
                    for i in 1..=segments {
                        let t = i as f32 / segments as f32;
                        let angle = start_angle + (end_angle - start_angle) * t;
                        let x = center.x + radius * angle.cos();
                        let y = center.y + radius * angle.sin();
                        arc_path.line_to(Point::new(x, y));
                    }

                    let arc = arc_path.build();
                    frame.stroke(
                        &arc,
                        Stroke::default()
                            .with_width(3.0)
                            .with_color(self.fade(color))
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }
            });

        vec![geometry]
    }
}
