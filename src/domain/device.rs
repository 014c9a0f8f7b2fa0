// SPDX-License-Identifier: MPL-2.0
//! Devices, rooms, and the in-memory fleet.
//!
//! All device data is hard-coded; there is no backend and no device
//! communication. Control values are clamped newtypes so an out-of-range
//! brightness or temperature is unrepresentable.

use std::fmt;

/// Identifier of a device in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Light brightness in percent, clamped to 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Preset values offered by the detail screen.
    pub const PRESETS: [u8; 4] = [25, 50, 75, 100];

    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Thermostat target in whole degrees Celsius, clamped to 16–30.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetTemperature(u8);

impl TargetTemperature {
    pub const MIN: u8 = 16;
    pub const MAX: u8 = 30;

    #[must_use]
    pub fn new(celsius: u8) -> Self {
        Self(celsius.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TargetTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

/// Speaker volume in percent, clamped to 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume(u8);

impl Volume {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Device category, carrying the kind-specific control value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Light { brightness: Brightness },
    Thermostat { target: TargetTemperature },
    Camera,
    Speaker { volume: Volume },
    Outlet,
    Lock,
}

impl DeviceKind {
    /// Catalog key for the kind's display name.
    pub fn i18n_key(self) -> &'static str {
        match self {
            DeviceKind::Light { .. } => "device.type.light",
            DeviceKind::Thermostat { .. } => "device.type.thermostat",
            DeviceKind::Camera => "device.type.camera",
            DeviceKind::Speaker { .. } => "device.type.speaker",
            DeviceKind::Outlet => "device.type.outlet",
            DeviceKind::Lock => "device.type.lock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    Online,
    Offline,
}

impl DeviceStatus {
    pub fn i18n_key(self) -> &'static str {
        match self {
            DeviceStatus::Online => "device.status.online",
            DeviceStatus::Offline => "device.status.offline",
        }
    }

    pub fn is_online(self) -> bool {
        matches!(self, DeviceStatus::Online)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Room {
    LivingRoom,
    Kitchen,
    Bedroom,
    Office,
    Bathroom,
}

impl Room {
    /// Rooms in dashboard display order.
    pub const ALL: [Room; 5] = [
        Room::LivingRoom,
        Room::Kitchen,
        Room::Bedroom,
        Room::Office,
        Room::Bathroom,
    ];

    pub fn i18n_key(self) -> &'static str {
        match self {
            Room::LivingRoom => "room.livingRoom",
            Room::Kitchen => "room.kitchen",
            Room::Bedroom => "room.bedroom",
            Room::Office => "room.office",
            Room::Bathroom => "room.bathroom",
        }
    }
}

/// A single smart-home device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
    pub status: DeviceStatus,
    pub is_on: bool,
    pub room: Room,
    pub favorite: bool,
}

impl Device {
    fn new(
        id: u32,
        name: &str,
        kind: DeviceKind,
        status: DeviceStatus,
        is_on: bool,
        room: Room,
    ) -> Self {
        Self {
            id: DeviceId(id),
            name: name.to_string(),
            kind,
            status,
            is_on,
            room,
            favorite: false,
        }
    }

    /// Case-insensitive name match used by the dashboard search field.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Result of a power-toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerToggle {
    SwitchedOn,
    SwitchedOff,
    /// Device is offline; its state was left unchanged.
    Offline,
}

/// The in-memory device collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFleet {
    devices: Vec<Device>,
}

impl DeviceFleet {
    /// The canonical mock fleet. Every third device (starting with the
    /// first) is a favorite.
    pub fn mock() -> Self {
        let mut devices = vec![
            Device::new(
                1,
                "Living Room Light",
                DeviceKind::Light {
                    brightness: Brightness::new(80),
                },
                DeviceStatus::Online,
                true,
                Room::LivingRoom,
            ),
            Device::new(
                2,
                "Kitchen Light",
                DeviceKind::Light {
                    brightness: Brightness::new(60),
                },
                DeviceStatus::Online,
                false,
                Room::Kitchen,
            ),
            Device::new(
                3,
                "Bedroom Thermostat",
                DeviceKind::Thermostat {
                    target: TargetTemperature::new(22),
                },
                DeviceStatus::Online,
                true,
                Room::Bedroom,
            ),
            Device::new(
                4,
                "Front Door Camera",
                DeviceKind::Camera,
                DeviceStatus::Online,
                true,
                Room::LivingRoom,
            ),
            Device::new(
                5,
                "Kitchen Speaker",
                DeviceKind::Speaker {
                    volume: Volume::new(55),
                },
                DeviceStatus::Offline,
                false,
                Room::Kitchen,
            ),
            Device::new(
                6,
                "Office Outlet",
                DeviceKind::Outlet,
                DeviceStatus::Online,
                true,
                Room::Office,
            ),
            Device::new(
                7,
                "Front Door Lock",
                DeviceKind::Lock,
                DeviceStatus::Online,
                true,
                Room::LivingRoom,
            ),
            Device::new(
                8,
                "Bathroom Light",
                DeviceKind::Light {
                    brightness: Brightness::new(70),
                },
                DeviceStatus::Online,
                false,
                Room::Bathroom,
            ),
        ];
        for (index, device) in devices.iter_mut().enumerate() {
            device.favorite = index % 3 == 0;
        }
        Self { devices }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn get(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn get_mut(&mut self, id: DeviceId) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.id == id)
    }

    /// Toggles a device's power. Offline devices are not touched.
    pub fn toggle_power(&mut self, id: DeviceId) -> Option<PowerToggle> {
        let device = self.get_mut(id)?;
        if !device.status.is_online() {
            return Some(PowerToggle::Offline);
        }
        device.is_on = !device.is_on;
        Some(if device.is_on {
            PowerToggle::SwitchedOn
        } else {
            PowerToggle::SwitchedOff
        })
    }

    /// Sets a light's brightness. No-op for other kinds and unknown ids.
    pub fn set_brightness(&mut self, id: DeviceId, brightness: Brightness) {
        if let Some(device) = self.get_mut(id) {
            if let DeviceKind::Light { brightness: value } = &mut device.kind {
                *value = brightness;
            }
        }
    }

    /// Sets a thermostat's target. No-op for other kinds and unknown ids.
    pub fn set_target_temperature(&mut self, id: DeviceId, target: TargetTemperature) {
        if let Some(device) = self.get_mut(id) {
            if let DeviceKind::Thermostat { target: value } = &mut device.kind {
                *value = target;
            }
        }
    }

    /// Sets a speaker's volume. No-op for other kinds and unknown ids.
    pub fn set_volume(&mut self, id: DeviceId, volume: Volume) {
        if let Some(device) = self.get_mut(id) {
            if let DeviceKind::Speaker { volume: value } = &mut device.kind {
                *value = volume;
            }
        }
    }

    pub fn favorites(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter().filter(|d| d.favorite)
    }

    pub fn in_room(&self, room: Room) -> impl Iterator<Item = &Device> + '_ {
        self.devices.iter().filter(move |d| d.room == room)
    }

    /// Rooms that contain at least one device, in display order.
    pub fn occupied_rooms(&self) -> Vec<Room> {
        Room::ALL
            .into_iter()
            .filter(|room| self.devices.iter().any(|d| d.room == *room))
            .collect()
    }

    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Device> {
        self.devices.iter().filter(move |d| d.matches_search(query))
    }
}
