// SPDX-License-Identifier: MPL-2.0
//! Device card for the dashboard grid.

use super::Message;
use crate::domain::device::{Device, DeviceKind, DeviceStatus};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, slider, text, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Render a single device card.
///
/// The card name opens the detail screen. The power button stays
/// pressable for offline devices so the tap can surface a warning.
pub fn view<'a>(i18n: &I18n, device: &'a Device) -> Element<'a, Message> {
    let name = button(Text::new(device.name.as_str()).size(typography::BODY_LG))
        .on_press(Message::OpenDevice(device.id))
        .padding(0)
        .style(styles::button::plain);

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

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Container::new(name).width(Length::Fill))
        .push(badge);

    let kind_line = Text::new(format!(
        "{} \u{00B7} {}",
        i18n.tr(device.kind.i18n_key()),
        i18n.tr(device.room.i18n_key())
    ))
    .size(typography::BODY_SM)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.weak.text),
    });

    let mut card = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(kind_line)
        .push(build_power_button(i18n, device));

    if let Some(control) = build_brightness_control(device) {
        card = card.push(control);
    }

    Container::new(card)
        .width(Length::Fixed(sizing::DEVICE_CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

fn build_power_button<'a>(i18n: &I18n, device: &Device) -> Element<'a, Message> {
    let label_key = if device.is_on {
        "device.control.turnOff"
    } else {
        "device.control.turnOn"
    };
    let label = Text::new(i18n.tr(label_key)).size(typography::BODY_SM);

    let power = button(label)
        .on_press(Message::DeviceToggled(device.id))
        .padding([spacing::XXS, spacing::SM]);

    let power = if device.status == DeviceStatus::Offline {
        power.style(styles::button::disabled())
    } else if device.is_on {
        power.style(styles::button::selected)
    } else {
        power.style(styles::button::unselected)
    };

    power.into()
}

fn build_brightness_control<'a>(device: &Device) -> Option<Element<'a, Message>> {
    let DeviceKind::Light { brightness } = device.kind else {
        return None;
    };
    if !device.is_on || device.status == DeviceStatus::Offline {
        return None;
    }

    let id = device.id;
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            slider(0..=100, brightness.value(), move |value| {
                Message::BrightnessChanged(id, value)
            })
            .style(styles::slider::control),
        )
        .push(Text::new(brightness.to_string()).size(typography::CAPTION));

    Some(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::DeviceFleet;

    #[test]
    fn card_renders_for_every_mock_device() {
        let i18n = I18n::default();
        let fleet = DeviceFleet::mock();
        for device in fleet.devices() {
            let _element = view(&i18n, device);
        }
    }

    #[test]
    fn brightness_control_only_for_powered_lights() {
        let fleet = DeviceFleet::mock();

        // Living Room Light is on, Kitchen Light is off.
        let on_light = fleet.get(crate::domain::device::DeviceId(1)).unwrap();
        let off_light = fleet.get(crate::domain::device::DeviceId(2)).unwrap();
        let camera = fleet.get(crate::domain::device::DeviceId(4)).unwrap();

        assert!(build_brightness_control(on_light).is_some());
        assert!(build_brightness_control(off_light).is_none());
        assert!(build_brightness_control(camera).is_none());
    }
}
