// SPDX-License-Identifier: MPL-2.0
//! Which screen the window is showing.

use crate::domain::device::DeviceId;
use crate::ui::navbar;

/// One variant per screen; `DeviceDetail` remembers which device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    DeviceDetail(DeviceId),
    Settings,
    Profile,
    About,
}

impl Screen {
    /// The navbar section this screen belongs to. A device detail
    /// screen keeps the dashboard link highlighted.
    pub fn section(self) -> navbar::Section {
        match self {
            Screen::Dashboard | Screen::DeviceDetail(_) => navbar::Section::Dashboard,
            Screen::Settings => navbar::Section::Settings,
            Screen::Profile => navbar::Section::Profile,
            Screen::About => navbar::Section::About,
        }
    }
}
