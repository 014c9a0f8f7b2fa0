// SPDX-License-Identifier: MPL-2.0
//! `home_iq` is a smart home dashboard built with the Iced GUI framework.
//!
//! It drives a simulated device fleet and demonstrates internationalization
//! with per-locale catalogs, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/home_iq/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
