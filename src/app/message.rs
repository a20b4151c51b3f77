// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::landing;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Landing(landing::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving the splash animation and toast auto-dismiss.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en`, `zh-CN`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `AGIPOCKET_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
