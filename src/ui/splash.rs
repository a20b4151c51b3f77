// SPDX-License-Identifier: MPL-2.0
//! Branded splash screen shown while the app boots.
//!
//! The splash holds the orbit animation and wordmark for a fixed display
//! window, fades out, and then stays out of the way forever. Transitions are
//! driven by explicit timestamps so tests can replay exact timelines.

use std::time::{Duration, Instant};

use iced::widget::{Column, Container, Text};
use iced::{alignment, Color, Element, Length};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use crate::ui::widgets::OrbitSpinner;

/// Minimum time the splash stays fully visible.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(2500);

/// Length of the fade-out once the display window has elapsed.
pub const FADE_DURATION: Duration = Duration::from_millis(800);

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Lifecycle of the splash screen. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully visible, orbit animation running.
    Loading,
    /// Opacity ramping down to zero.
    FadingOut,
    /// Gone for good. The landing page owns the window now.
    Revealed,
}

/// Splash screen state.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    /// When the current phase started.
    phase_started_at: Instant,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
    /// Overall opacity of the splash content.
    opacity: f32,
    /// Set once the window is closing; freezes all further transitions.
    disposed: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Creates a splash starting its display window now.
    #[must_use]
    pub fn new() -> Self {
        Self::new_at(Instant::now())
    }

    /// Creates a splash whose display window starts at `now`.
    #[must_use]
    pub fn new_at(now: Instant) -> Self {
        Self {
            phase: Phase::Loading,
            phase_started_at: now,
            spinner_rotation: 0.0,
            opacity: 1.0,
            disposed: false,
        }
    }

    /// Advances the animation and phase machine to `now`.
    ///
    /// At most one phase transition happens per tick, so a large jump in time
    /// still walks Loading -> FadingOut -> Revealed in order.
    pub fn tick(&mut self, now: Instant) {
        if self.disposed {
            return;
        }

        self.spinner_rotation += SPINNER_SPEED;
        if self.spinner_rotation > std::f32::consts::TAU {
            self.spinner_rotation -= std::f32::consts::TAU;
        }

        let elapsed = now.saturating_duration_since(self.phase_started_at);

        match self.phase {
            Phase::Loading => {
                self.opacity = 1.0;
                if elapsed >= DISPLAY_DURATION {
                    self.phase = Phase::FadingOut;
                    self.phase_started_at = now;
                }
            }
            Phase::FadingOut => {
                if elapsed >= FADE_DURATION {
                    self.phase = Phase::Revealed;
                    self.phase_started_at = now;
                    self.opacity = 0.0;
                } else {
                    let progress = elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32();
                    self.opacity = (1.0 - progress).clamp(0.0, 1.0);
                }
            }
            Phase::Revealed => {
                self.opacity = 0.0;
            }
        }
    }

    /// Stops the splash permanently. Used when the window is closing mid-boot
    /// so no transition fires into a dying window.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current opacity of the splash content.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Whether the splash still needs ticks and screen space.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Revealed
    }
}

/// Renders the splash screen.
///
/// The splash emits no messages of its own, so it renders into whatever
/// message type the caller uses.
pub fn view<'a, Message: 'static>(state: &State, i18n: &'a I18n) -> Element<'a, Message> {
    let opacity = state.opacity();

    let orbits = OrbitSpinner::new(state.spinner_rotation(), opacity).into_element();

    let wordmark = Text::new("AGIPOCKET")
        .size(typography::DISPLAY)
        .color(Color {
            a: opacity,
            ..theme::heading_text_color()
        });

    let status = Text::new(i18n.tr("loading"))
        .size(typography::BODY)
        .color(Color {
            a: opacity,
            ..theme::body_text_color()
        });

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(orbits)
        .push(wordmark)
        .push(status);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_starts_loading_at_full_opacity() {
        let state = State::new();

        assert_eq!(state.phase(), Phase::Loading);
        assert!((state.opacity() - 1.0).abs() < f32::EPSILON);
        assert!(state.is_active());
    }

    #[test]
    fn display_window_holds_for_its_full_duration() {
        let t0 = Instant::now();
        let mut state = State::new_at(t0);

        state.tick(t0 + Duration::from_millis(2499));
        assert_eq!(state.phase(), Phase::Loading);

        state.tick(t0 + DISPLAY_DURATION);
        assert_eq!(state.phase(), Phase::FadingOut);
    }

    #[test]
    fn fade_completes_after_its_duration() {
        let t0 = Instant::now();
        let mut state = State::new_at(t0);

        let fade_start = t0 + DISPLAY_DURATION;
        state.tick(fade_start);
        assert_eq!(state.phase(), Phase::FadingOut);

        state.tick(fade_start + FADE_DURATION);
        assert_eq!(state.phase(), Phase::Revealed);
        assert!(!state.is_active());
        assert!(state.opacity().abs() < f32::EPSILON);
    }

    #[test]
    fn opacity_decreases_monotonically_during_fade() {
        let t0 = Instant::now();
        let mut state = State::new_at(t0);

        let fade_start = t0 + DISPLAY_DURATION;
        state.tick(fade_start);

        let mut previous = state.opacity();
        for step in 1..8 {
            state.tick(fade_start + Duration::from_millis(step * 100));
            let current = state.opacity();
            assert!(current <= previous);
            assert!((0.0..=1.0).contains(&current));
            previous = current;
        }
    }

    #[test]
    fn revealed_is_permanent() {
        let t0 = Instant::now();
        let mut state = State::new_at(t0);

        state.tick(t0 + DISPLAY_DURATION);
        state.tick(t0 + DISPLAY_DURATION + FADE_DURATION);
        assert_eq!(state.phase(), Phase::Revealed);

        // Plenty of further ticks must never resurrect the splash.
        for step in 1..20 {
            state.tick(t0 + DISPLAY_DURATION + FADE_DURATION + Duration::from_secs(step));
            assert_eq!(state.phase(), Phase::Revealed);
            assert!(state.opacity().abs() < f32::EPSILON);
        }
    }

    #[test]
    fn dispose_during_loading_freezes_the_phase_machine() {
        let t0 = Instant::now();
        let mut state = State::new_at(t0);

        state.dispose();

        // Even timestamps far past both thresholds must not transition.
        state.tick(t0 + Duration::from_secs(60));
        assert_eq!(state.phase(), Phase::Loading);

        state.tick(t0 + Duration::from_secs(120));
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn large_time_jump_advances_one_phase_per_tick() {
        let t0 = Instant::now();
        let mut state = State::new_at(t0);

        let far = t0 + Duration::from_secs(60);
        state.tick(far);
        assert_eq!(state.phase(), Phase::FadingOut);

        state.tick(far + Duration::from_secs(60));
        assert_eq!(state.phase(), Phase::Revealed);
    }

    #[test]
    fn ticks_advance_the_spinner() {
        let t0 = Instant::now();
        let mut state = State::new_at(t0);

        let initial = state.spinner_rotation();
        state.tick(t0 + Duration::from_millis(100));
        assert!(state.spinner_rotation() > initial);
    }
}
