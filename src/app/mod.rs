// SPDX-License-Identifier: MPL-2.0
//! Root application state and the iced update loop.
//!
//! `App` owns the pieces that outlive any single frame: the localization
//! catalogs, the splash phase machine, and the notification queue. The
//! update loop stays thin; anything with policy (language persistence,
//! link opening, splash disposal on close) lives in small named methods
//! next to it.

pub mod config;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification, Toast};
use crate::ui::{landing, splash, styles};
use iced::widget::{Container, Stack};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use unic_langid::LanguageIdentifier;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

pub struct App {
    pub i18n: I18n,
    splash: splash::State,
    notifications: notifications::Manager,
}

// Manual impl because I18n holds FluentBundle values, which are not Debug.
impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("splash_phase", &self.splash.phase())
            .field("visible_notifications", &self.notifications.visible_count())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Flags::default()).0
    }
}

#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests route through `update` so the splash is disposed
        // before the window goes away.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Build and run the application with the given startup flags.
///
/// # Errors
///
/// Returns an error if the iced runtime fails to start.
pub fn run(flags: Flags) -> iced::Result {
    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let flags_cell = std::cell::RefCell::new(Some(flags));
    let boot = move || {
        let flags = flags_cell
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    #[must_use]
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        // `--config-dir` was already handed to `paths::init_cli_overrides`
        // by `main`, so the plain loader resolves the right directory.
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = Self {
            i18n,
            splash: splash::State::new(),
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    #[allow(clippy::unused_self)] // iced expects a method here
    fn theme(&self) -> Theme {
        // The page is a fixed dark brand surface; widget defaults follow.
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.splash.is_active(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Landing(landing_message) => {
                match landing::update(&landing_message) {
                    landing::Event::LanguageSelected(locale) => {
                        self.apply_language_change(locale);
                    }
                    landing::Event::OpenLink(link) => self.open_link(link),
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.splash.tick(now);
                self.notifications.tick();
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                // Freeze the splash so no further animation work is scheduled
                // while the window is tearing down.
                self.splash.dispose();
                window::close(id)
            }
        }
    }

    /// Switch the active locale and persist the choice for the next launch.
    ///
    /// Unknown locales are rejected by [`I18n::set_locale`]; nothing is
    /// persisted in that case so the stored config never names a locale
    /// we cannot load.
    fn apply_language_change(&mut self, locale: LanguageIdentifier) {
        if !self.i18n.set_locale(locale.clone()) {
            return;
        }

        let (mut config, _) = config::load();
        config.general.language = Some(locale.to_string());
        if let Err(err) = config::save(&config) {
            eprintln!("Warning: Failed to save language preference: {err}");
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }

    fn open_link(&mut self, link: landing::Link) {
        if let Err(err) = webbrowser::open(link.url()) {
            eprintln!("Warning: Failed to open {}: {err}", link.url());
            self.notifications.push(
                Notification::error("notification-open-url-error").with_arg("url", link.url()),
            );
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match self.splash.phase() {
            splash::Phase::Loading => splash::view(&self.splash, &self.i18n),
            splash::Phase::FadingOut => {
                // Landing renders underneath so it shows through as the
                // splash opacity drops.
                let landing = landing::view(landing::ViewContext { i18n: &self.i18n })
                    .map(Message::Landing);
                Stack::new()
                    .push(landing)
                    .push(splash::view(&self.splash, &self.i18n))
                    .into()
            }
            splash::Phase::Revealed => {
                landing::view(landing::ViewContext { i18n: &self.i18n }).map(Message::Landing)
            }
        };

        let page = Container::new(screen)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page);

        if self.notifications.visible_count() > 0 {
            Stack::new()
                .push(page)
                .push(
                    Toast::view_overlay(&self.notifications, &self.i18n)
                        .map(Message::Notification),
                )
                .into()
        } else {
            page.into()
        }
    }
}
