// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Non-blocking feedback for background failures (unreadable preferences,
//! a browser that refuses to open). Toasts stack in the bottom-right corner,
//! auto-dismiss by severity, and queue when too many arrive at once.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
