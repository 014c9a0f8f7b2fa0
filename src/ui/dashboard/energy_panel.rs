// SPDX-License-Identifier: MPL-2.0
//! Energy usage panel with a period selector and a bar chart.

use super::Message;
use crate::domain::energy::{self, EnergyPeriod};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Smallest bar height so near-zero samples stay visible.
const MIN_BAR_HEIGHT: f32 = 4.0;

/// Render the energy panel for the selected period.
pub fn view<'a>(i18n: &I18n, period: EnergyPeriod) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(
                Text::new(i18n.tr("dashboard.energy.title")).size(typography::TITLE_SM),
            )
            .width(Length::Fill),
        )
        .push(build_period_selector(i18n, period));

    let total = Text::new(format!(
        "{}: {:.1} {}",
        i18n.tr("dashboard.energy.total"),
        energy::total_kwh(period),
        i18n.tr("dashboard.energy.units")
    ))
    .size(typography::BODY)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.weak.text),
    });

    let panel = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(build_chart(period))
        .push(total);

    Container::new(panel)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn build_period_selector<'a>(i18n: &I18n, selected: EnergyPeriod) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XXS);
    for period in EnergyPeriod::ALL {
        row = row.push(
            button(Text::new(i18n.tr(period.i18n_key())).size(typography::BODY_SM))
                .on_press(Message::EnergyPeriodSelected(period))
                .padding([spacing::XXS, spacing::XS])
                .style(if period == selected {
                    styles::button::selected
                } else {
                    styles::button::unselected
                }),
        );
    }
    row.into()
}

fn build_chart<'a>(period: EnergyPeriod) -> Element<'a, Message> {
    let peak = energy::peak_kwh(period);
    let mut bars = Row::new().spacing(spacing::SM).align_y(Vertical::Bottom);

    for point in energy::consumption(period) {
        bars = bars.push(build_bar(point.label, point.kwh, peak));
    }

    Container::new(bars)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn build_bar<'a>(label: &'static str, kwh: f32, peak: f32) -> Element<'a, Message> {
    let height = if peak > 0.0 {
        (kwh / peak * sizing::CHART_HEIGHT).max(MIN_BAR_HEIGHT)
    } else {
        MIN_BAR_HEIGHT
    };

    let bar = Container::new(Space::new())
        .width(Length::Fixed(sizing::CHART_BAR_WIDTH))
        .height(Length::Fixed(height))
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::ENERGY_500.into()),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(format!("{kwh:.1}")).size(typography::CAPTION))
        .push(bar)
        .push(Text::new(label).size(typography::CAPTION).style(
            |theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            },
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_panel_renders_for_every_period() {
        let i18n = I18n::default();
        for period in EnergyPeriod::ALL {
            let _element = view(&i18n, period);
        }
    }

    #[test]
    fn bars_scale_against_the_period_peak() {
        for period in EnergyPeriod::ALL {
            let peak = energy::peak_kwh(period);
            for point in energy::consumption(period) {
                assert!(point.kwh <= peak);
            }
        }
    }
}
