// SPDX-License-Identifier: MPL-2.0
//! `agipocket` is the desktop landing app for the AGIPOCKET wallet, built
//! with the Iced GUI framework.
//!
//! It shows a branded splash animation before revealing a marketing page,
//! and demonstrates runtime language switching with Fluent together with
//! persisted user preferences.

#![doc(html_root_url = "https://docs.rs/agipocket/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
