// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in a corner of the window to report
//! outcomes (tour launched, settings saved, scan failures) without blocking
//! interaction. Success and info toasts dismiss themselves; errors stay
//! until closed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
