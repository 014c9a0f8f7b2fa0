// SPDX-License-Identifier: MPL-2.0
//! Quick-action scenes.
//!
//! A scene is a bulk edit of the fleet. Offline devices are skipped by
//! every rule, matching the single-device toggle behavior.

use super::device::{Brightness, DeviceFleet, DeviceKind, TargetTemperature};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    AllOff,
    AllOn,
    Morning,
    Night,
    Away,
    Movie,
}

impl Scene {
    /// Scenes in the order the quick-action row shows them.
    pub const ALL: [Scene; 6] = [
        Scene::AllOff,
        Scene::AllOn,
        Scene::Morning,
        Scene::Night,
        Scene::Away,
        Scene::Movie,
    ];

    pub fn i18n_key(self) -> &'static str {
        match self {
            Scene::AllOff => "action.turnAllOff",
            Scene::AllOn => "action.turnAllOn",
            Scene::Morning => "action.morningMode",
            Scene::Night => "action.nightMode",
            Scene::Away => "action.awayMode",
            Scene::Movie => "action.movieMode",
        }
    }

    /// Applies the scene to every online device it concerns.
    pub fn apply(self, fleet: &mut DeviceFleet) {
        let ids: Vec<_> = fleet.devices().iter().map(|d| d.id).collect();
        for id in ids {
            let Some(device) = fleet.get_mut(id) else {
                continue;
            };
            if !device.status.is_online() {
                continue;
            }
            match self {
                Scene::AllOff => device.is_on = false,
                Scene::AllOn => device.is_on = true,
                Scene::Morning => match &mut device.kind {
                    DeviceKind::Light { brightness } => {
                        device.is_on = true;
                        *brightness = Brightness::new(80);
                    }
                    DeviceKind::Thermostat { target } => {
                        device.is_on = true;
                        *target = TargetTemperature::new(22);
                    }
                    _ => {}
                },
                Scene::Night => match &mut device.kind {
                    DeviceKind::Light { .. } => device.is_on = false,
                    DeviceKind::Lock => device.is_on = true,
                    DeviceKind::Thermostat { target } => {
                        *target = TargetTemperature::new(18);
                    }
                    _ => {}
                },
                Scene::Away => match device.kind {
                    DeviceKind::Camera | DeviceKind::Lock => device.is_on = true,
                    _ => device.is_on = false,
                },
                Scene::Movie => match &mut device.kind {
                    DeviceKind::Light { brightness } => {
                        if device.room == super::device::Room::LivingRoom {
                            device.is_on = true;
                            *brightness = Brightness::new(20);
                        }
                    }
                    DeviceKind::Speaker { .. } => device.is_on = true,
                    _ => {}
                },
            }
        }
    }
}
