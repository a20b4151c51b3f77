// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, Subscription};

/// Creates the native event subscription.
///
/// Only window close requests are of interest; they must reach `App::update`
/// so the splash can be disposed before the window goes away.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        None
    })
}

/// Creates a periodic tick subscription for the splash animation and
/// notification auto-dismiss.
///
/// The timer only runs while something actually needs it, so an idle landing
/// page schedules no wakeups.
pub fn create_tick_subscription(
    splash_active: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if splash_active || has_notifications {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
