// SPDX-License-Identifier: MPL-2.0
//! Screens and the widgets they share.
//!
//! Every screen has the same shape: a `State` struct, a `Message` enum, a
//! free `update` that returns an `Event` for the app layer to fold, and a
//! `view` over a borrowed context. Nothing in here mutates application
//! state directly.
//!
//! # Screens
//!
//! - [`dashboard`] - Greeting, quick actions, device grid, and energy usage
//! - [`device_detail`] - Controls, metadata, and history for one device
//! - [`settings`] - Language, appearance, notification, and privacy preferences
//! - [`profile`] - Account holder information
//! - [`about`] - Application version and description
//!
//! # Shared pieces
//!
//! - [`navbar`] - Top bar with alert and language dropdowns
//! - [`notifications`] - Transient toast feedback
//! - [`styles`] - Widget style functions over [`design_tokens`]
//! - [`theming`] - Light/dark/system mode resolution

pub mod about;
pub mod dashboard;
pub mod design_tokens;
pub mod device_detail;
pub mod navbar;
pub mod notifications;
pub mod profile;
pub mod settings;
pub mod styles;
pub mod theming;
