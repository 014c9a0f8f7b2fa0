// SPDX-License-Identifier: MPL-2.0
//! Styles partagés entre les écrans.

pub mod button;
pub mod container;
pub mod slider;
