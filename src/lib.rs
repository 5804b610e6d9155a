// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a property showcase built with the Iced GUI framework.
//!
//! It presents a gallery of room photographs with a keyboard-driven lightbox,
//! a validated contact form, 360° room-tour launching, and a persisted cookie
//! consent choice, and demonstrates internationalization with Fluent.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod lightbox;
pub mod tours;
pub mod ui;
