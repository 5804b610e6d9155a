// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery_grid`] - Thumbnail grid with the room-tour launcher
//! - [`contact_form`] - Validated contact form
//! - [`settings`] - Language and display preferences
//!
//! # Overlays
//!
//! - [`lightbox_overlay`] - Fullscreen image viewer above a dimmed backdrop
//! - [`consent_banner`] - Cookie consent prompt
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Responsive navigation bar with scroll-direction hiding
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod consent_banner;
pub mod contact_form;
pub mod design_tokens;
pub mod gallery_grid;
pub mod lightbox_overlay;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod styles;
