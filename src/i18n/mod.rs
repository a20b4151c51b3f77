// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation catalog loading, and string formatting.
//!
//! # Features
//!
//! - Locale detection from CLI, saved preference, or the OS locale list
//! - Embedded `.ftl` catalogs with an optional on-disk override directory
//! - Runtime language switching
//! - Per-key fallback to the default locale when translations are missing

pub mod fluent;
