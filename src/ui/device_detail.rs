// SPDX-License-Identifier: MPL-2.0
//! Device detail screen.
//!
//! Stateless view over a single fleet entry. Unknown ids render a
//! not-found page with a way back to the dashboard. Control widgets
//! stay visible while a device is off or offline but take the
//! disabled styling; the application layer drops their events.

use crate::domain::device::{
    Brightness, Device, DeviceFleet, DeviceId, DeviceKind, DeviceStatus, TargetTemperature, Volume,
};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, slider, text, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Mock hardware metadata shown in the details table.
const MANUFACTURER: &str = "Philips";
const MODEL: &str = "Hue White A19";
const FIRMWARE_VERSION: &str = "1.0.5";
const IP_ADDRESS: &str = "192.168.1.101";
const MAC_ADDRESS: &str = "A1:B2:C3:D4:E5:F6";
const LAST_UPDATED: &str = "2023-08-15";

/// Messages emitted by the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    PowerToggled(DeviceId),
    BrightnessChanged(DeviceId, u8),
    TemperatureChanged(DeviceId, u8),
    VolumeChanged(DeviceId, u8),
    Refresh(DeviceId),
}

/// Device commands handed up to the app layer.
#[derive(Debug, Clone)]
pub enum Event {
    BackToDashboard,
    ToggleDevice(DeviceId),
    SetBrightness(DeviceId, Brightness),
    SetTargetTemperature(DeviceId, TargetTemperature),
    SetVolume(DeviceId, Volume),
    Refresh(DeviceId),
}

/// Process a detail screen message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Back => Event::BackToDashboard,
        Message::PowerToggled(id) => Event::ToggleDevice(id),
        Message::BrightnessChanged(id, value) => {
            Event::SetBrightness(id, Brightness::new(value))
        }
        Message::TemperatureChanged(id, value) => {
            Event::SetTargetTemperature(id, TargetTemperature::new(value))
        }
        Message::VolumeChanged(id, value) => Event::SetVolume(id, Volume::new(value)),
        Message::Refresh(id) => Event::Refresh(id),
    }
}

/// Borrowed fleet state plus the device the screen is showing.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub fleet: &'a DeviceFleet,
    pub device_id: DeviceId,
}

/// Render the detail screen for the device in the context.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(device) = ctx.fleet.get(ctx.device_id) else {
        return build_not_found(ctx.i18n);
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(720.0)
        .push(build_back_link(ctx.i18n))
        .push(build_header(ctx.i18n, device))
        .push(build_controls_section(ctx.i18n, device))
        .push(build_details_section(ctx.i18n, device))
        .push(build_history_section(ctx.i18n))
        .push(
            button(Text::new(ctx.i18n.tr("device.detail.refresh")).size(typography::BODY))
                .on_press(Message::Refresh(device.id))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

fn build_not_found<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("device.detail.notFound")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("device.detail.notFoundDescription"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        )
        .push(
            button(Text::new(i18n.tr("device.detail.returnToDashboard")).size(typography::BODY))
                .on_press(Message::Back)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn build_back_link<'a>(i18n: &I18n) -> Element<'a, Message> {
    button(
        Text::new(format!("\u{2190} {}", i18n.tr("navigation.dashboard"))).size(typography::BODY),
    )
    .on_press(Message::Back)
    .padding(spacing::XXS)
    .style(styles::button::plain)
    .into()
}

fn build_header<'a>(i18n: &I18n, device: &'a Device) -> Element<'a, Message> {
    let badge_color = if device.status.is_online() {
        palette::SUCCESS_500
    } else {
        palette::GRAY_500
    };
    let badge = Container::new(
        Text::new(i18n.tr(device.status.i18n_key())).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::badge(badge_color));

    let title_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(device.name.as_str()).size(typography::TITLE_LG))
        .push(badge);

    let kind_line = Text::new(format!(
        "{} \u{00B7} {}",
        i18n.tr(device.kind.i18n_key()),
        i18n.tr(device.room.i18n_key())
    ))
    .size(typography::BODY)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.weak.text),
    });

    Column::new()
        .spacing(spacing::XXS)
        .push(title_row)
        .push(kind_line)
        .into()
}

fn build_controls_section<'a>(i18n: &I18n, device: &'a Device) -> Element<'a, Message> {
    let mut section = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("device.detail.controls")).size(typography::TITLE_SM))
        .push(build_power_button(i18n, device));

    if let Some(control) = build_kind_control(i18n, device) {
        section = section.push(control);
    }

    Container::new(section)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn build_power_button<'a>(i18n: &I18n, device: &Device) -> Element<'a, Message> {
    let label_key = if device.is_on {
        "device.control.turnOff"
    } else {
        "device.control.turnOn"
    };

    let power = button(Text::new(i18n.tr(label_key)).size(typography::BODY))
        .on_press(Message::PowerToggled(device.id))
        .padding([spacing::XS, spacing::MD]);

    let power = if device.status == DeviceStatus::Offline {
        power.style(styles::button::disabled())
    } else if device.is_on {
        power.style(styles::button::selected)
    } else {
        power.style(styles::button::unselected)
    };

    power.into()
}

/// True when value changes would reach the hardware.
fn is_controllable(device: &Device) -> bool {
    device.is_on && device.status.is_online()
}

fn build_kind_control<'a>(i18n: &I18n, device: &'a Device) -> Option<Element<'a, Message>> {
    let id = device.id;
    match device.kind {
        DeviceKind::Light { brightness } => Some(build_light_control(i18n, device, id, brightness)),
        DeviceKind::Thermostat { target } => {
            let control = build_value_slider(
                i18n.tr("device.control.temperature"),
                target.to_string(),
                TargetTemperature::MIN..=TargetTemperature::MAX,
                target.value(),
                move |value| Message::TemperatureChanged(id, value),
                is_controllable(device),
            );
            Some(control)
        }
        DeviceKind::Speaker { volume } => {
            let control = build_value_slider(
                i18n.tr("device.control.volume"),
                volume.to_string(),
                Volume::MIN..=Volume::MAX,
                volume.value(),
                move |value| Message::VolumeChanged(id, value),
                is_controllable(device),
            );
            Some(control)
        }
        DeviceKind::Camera | DeviceKind::Outlet | DeviceKind::Lock => None,
    }
}

fn build_light_control<'a>(
    i18n: &I18n,
    device: &Device,
    id: DeviceId,
    brightness: Brightness,
) -> Element<'a, Message> {
    let enabled = is_controllable(device);
    let slider_part = build_value_slider(
        i18n.tr("device.control.brightness"),
        brightness.to_string(),
        Brightness::MIN..=Brightness::MAX,
        brightness.value(),
        move |value| Message::BrightnessChanged(id, value),
        enabled,
    );

    let mut presets = Row::new().spacing(spacing::XS);
    for preset in Brightness::PRESETS {
        let selected = brightness.value() == preset;
        let mut preset_button = button(
            Text::new(Brightness::new(preset).to_string()).size(typography::BODY_SM),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(if !enabled {
            styles::button::disabled()
        } else if selected {
            styles::button::selected
        } else {
            styles::button::unselected
        });
        if enabled {
            preset_button = preset_button.on_press(Message::BrightnessChanged(id, preset));
        }
        presets = presets.push(preset_button);
    }

    Column::new()
        .spacing(spacing::XS)
        .push(slider_part)
        .push(presets)
        .into()
}

fn build_value_slider<'a>(
    label: String,
    value_text: String,
    range: std::ops::RangeInclusive<u8>,
    value: u8,
    on_change: impl Fn(u8) -> Message + 'a,
    enabled: bool,
) -> Element<'a, Message> {
    let value_label = if enabled {
        Text::new(value_text).size(typography::BODY)
    } else {
        Text::new(value_text)
            .size(typography::BODY)
            .style(styles::slider::dimmed_label)
    };

    let control = slider(range, value, on_change);
    let control = if enabled {
        control.style(styles::slider::control)
    } else {
        control.style(styles::slider::disabled())
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(control)
                .push(value_label),
        )
        .into()
}

fn build_details_section<'a>(i18n: &I18n, device: &'a Device) -> Element<'a, Message> {
    let rows = [
        ("device.detail.manufacturer", MANUFACTURER.to_string()),
        ("device.detail.model", MODEL.to_string()),
        ("device.detail.firmwareVersion", FIRMWARE_VERSION.to_string()),
        ("device.detail.ipAddress", IP_ADDRESS.to_string()),
        ("device.detail.macAddress", MAC_ADDRESS.to_string()),
        ("device.detail.lastUpdated", LAST_UPDATED.to_string()),
        ("device.detail.room", i18n.tr(device.room.i18n_key())),
        ("device.detail.status", i18n.tr(device.status.i18n_key())),
    ];

    let mut table = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("device.detail.details")).size(typography::TITLE_SM));
    for (key, value) in rows {
        table = table.push(build_detail_row(i18n.tr(key), value));
    }

    Container::new(table)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn build_detail_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            Container::new(
                Text::new(label)
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.weak.text),
                    }),
            )
            .width(Length::FillPortion(1)),
        )
        .push(
            Container::new(Text::new(value).size(typography::BODY_SM))
                .width(Length::FillPortion(2)),
        )
        .into()
}

fn build_history_section<'a>(i18n: &I18n) -> Element<'a, Message> {
    let entries = [
        ("device.control.turnOn", "time.fiveMinAgo"),
        ("device.control.brightness", "time.oneHourAgo"),
        ("device.control.turnOff", "time.yesterday"),
    ];

    let mut list = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("device.detail.history")).size(typography::TITLE_SM));
    for (action_key, time_key) in entries {
        list = list.push(build_detail_row(i18n.tr(action_key), i18n.tr(time_key)));
    }

    Container::new(list)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
