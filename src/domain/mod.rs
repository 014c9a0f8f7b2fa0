// SPDX-License-Identifier: MPL-2.0
//! Domain layer for the mock smart home.
//!
//! Pure types and rules, independent of the UI: the device fleet and its
//! transitions, energy datasets, scenes, the alert feed, and the profile
//! record. `serde` derives appear only on the handful of types that are
//! persisted.
//!
//! # Modules
//!
//! - [`device`]: devices, rooms, clamped control values, [`device::DeviceFleet`]
//! - [`energy`]: consumption datasets per period
//! - [`scene`]: quick-action scenes applied to the fleet
//! - [`alerts`]: the mock notification feed
//! - [`profile`]: the mock user profile

pub mod alerts;
pub mod device;
pub mod energy;
pub mod profile;
pub mod scene;
