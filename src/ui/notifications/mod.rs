// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Transient feedback for user actions: a scene applied, a device
//! toggled, a settings change saved. Toasts stack in the bottom-right
//! corner, at most three at a time with the rest queued behind them.
//! Success and info toasts leave after about three seconds, warnings
//! after five; errors stay until dismissed.
//!
//! A toast stores catalog keys rather than resolved strings, so live
//! toasts change language together with the rest of the UI.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.post(
//!     Notification::success("settings.saved").with_body("settings.savedDescription"),
//! );
//!
//! // In the view, stack the overlay over the screen content
//! let overlay = Toast::overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
