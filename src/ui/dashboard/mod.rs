// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen with quick actions, the device grid and energy usage.
//!
//! The screen is organized in four bands: a greeting header, a row of
//! scene shortcuts, the searchable device grid with tab filters, and
//! the energy consumption panel. Tab and period selections survive a
//! restart through the session state file.

mod device_card;
mod energy_panel;

use crate::domain::device::{Brightness, DeviceFleet, DeviceId, Room};
use crate::domain::energy::EnergyPeriod;
use crate::domain::scene::Scene;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::Timelike;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text, text_input, Column, Container, Row, Text},
    Element, Length, Theme,
};
use serde::{Deserialize, Serialize};

/// Number of device cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Filter tabs above the device grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceTab {
    #[default]
    All,
    Rooms,
    Favorites,
}

impl DeviceTab {
    pub const ALL: [DeviceTab; 3] = [DeviceTab::All, DeviceTab::Rooms, DeviceTab::Favorites];

    pub fn i18n_key(self) -> &'static str {
        match self {
            DeviceTab::All => "dashboard.allDevices",
            DeviceTab::Rooms => "dashboard.rooms",
            DeviceTab::Favorites => "dashboard.favorites",
        }
    }
}

/// Local state of the dashboard screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub tab: DeviceTab,
    pub search: String,
    pub energy_period: EnergyPeriod,
}

/// Messages emitted by dashboard widgets.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(DeviceTab),
    SearchChanged(String),
    SceneTriggered(Scene),
    DeviceToggled(DeviceId),
    BrightnessChanged(DeviceId, u8),
    OpenDevice(DeviceId),
    EnergyPeriodSelected(EnergyPeriod),
}

/// What the app layer should do in response to an update.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Tab or energy period changed; the session state should be saved.
    SelectionChanged,
    SceneTriggered(Scene),
    ToggleDevice(DeviceId),
    SetBrightness(DeviceId, Brightness),
    OpenDevice(DeviceId),
}

/// Process a dashboard message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::TabSelected(tab) => {
            state.tab = tab;
            Event::SelectionChanged
        }
        Message::SearchChanged(query) => {
            state.search = query;
            Event::None
        }
        Message::SceneTriggered(scene) => Event::SceneTriggered(scene),
        Message::DeviceToggled(id) => Event::ToggleDevice(id),
        Message::BrightnessChanged(id, value) => {
            Event::SetBrightness(id, Brightness::new(value))
        }
        Message::OpenDevice(id) => Event::OpenDevice(id),
        Message::EnergyPeriodSelected(period) => {
            state.energy_period = period;
            Event::SelectionChanged
        }
    }
}

/// Borrowed fleet and session state the dashboard renders.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub fleet: &'a DeviceFleet,
    pub state: &'a State,
}

/// Render the dashboard screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let hour = chrono::Local::now().hour();

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(1080.0)
        .push(build_greeting(&ctx, hour))
        .push(build_quick_actions(&ctx))
        .push(build_device_section(&ctx))
        .push(energy_panel::view(ctx.i18n, ctx.state.energy_period));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Catalog key for the greeting matching the hour of day.
fn greeting_key_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "dashboard.greeting.morning",
        12..=17 => "dashboard.greeting.afternoon",
        18..=21 => "dashboard.greeting.evening",
        _ => "dashboard.greeting.night",
    }
}

fn build_greeting<'a>(ctx: &ViewContext<'a>, hour: u32) -> Element<'a, Message> {
    let greeting = Text::new(ctx.i18n.tr(greeting_key_for_hour(hour))).size(typography::TITLE_LG);
    let subtitle = Text::new(ctx.i18n.tr("app.subtitle"))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    Column::new()
        .spacing(spacing::XXS)
        .push(greeting)
        .push(subtitle)
        .into()
}

fn build_quick_actions<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);
    for scene in Scene::ALL {
        row = row.push(
            button(Text::new(ctx.i18n.tr(scene.i18n_key())).size(typography::BODY))
                .on_press(Message::SceneTriggered(scene))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::unselected),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("dashboard.quickActions")).size(typography::TITLE_SM))
        .push(row)
        .into()
}

fn build_device_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut tabs = Row::new().spacing(spacing::XS);
    for tab in DeviceTab::ALL {
        tabs = tabs.push(
            button(Text::new(ctx.i18n.tr(tab.i18n_key())).size(typography::BODY))
                .on_press(Message::TabSelected(tab))
                .padding([spacing::XS, spacing::SM])
                .style(if ctx.state.tab == tab {
                    styles::button::selected
                } else {
                    styles::button::unselected
                }),
        );
    }

    let search_box = text_input(
        &ctx.i18n.tr("search.placeholder"),
        &ctx.state.search,
    )
    .on_input(Message::SearchChanged)
    .padding(spacing::XS)
    .width(Length::Fixed(260.0));

    let header = Row::new()
        .spacing(spacing::SM)
        .push(Container::new(tabs).width(Length::Fill))
        .push(search_box);

    let body = match ctx.state.tab {
        DeviceTab::All => build_device_grid(ctx, ctx.fleet.search(&ctx.state.search).collect()),
        DeviceTab::Rooms => build_room_sections(ctx),
        DeviceTab::Favorites => {
            let favorites = filter_by_search(ctx, ctx.fleet.favorites().collect());
            build_device_grid(ctx, favorites)
        }
    };

    Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(body)
        .into()
}

fn filter_by_search<'a>(
    ctx: &ViewContext<'a>,
    devices: Vec<&'a crate::domain::device::Device>,
) -> Vec<&'a crate::domain::device::Device> {
    devices
        .into_iter()
        .filter(|device| device.matches_search(&ctx.state.search))
        .collect()
}

fn build_device_grid<'a>(
    ctx: &ViewContext<'a>,
    devices: Vec<&'a crate::domain::device::Device>,
) -> Element<'a, Message> {
    if devices.is_empty() {
        return Container::new(
            Text::new(ctx.i18n.tr("search.noResults"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .into();
    }

    let mut grid = Column::new().spacing(spacing::SM);
    for chunk in devices.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for device in chunk {
            row = row.push(device_card::view(ctx.i18n, device));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn build_room_sections<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut sections = Column::new().spacing(spacing::MD);
    let mut any = false;

    for room in ctx.fleet.occupied_rooms() {
        let devices = filter_by_search(ctx, ctx.fleet.in_room(room).collect());
        if devices.is_empty() {
            continue;
        }
        any = true;
        sections = sections.push(build_room_section(ctx, room, devices));
    }

    if !any {
        return build_device_grid(ctx, Vec::new());
    }

    sections.into()
}

fn build_room_section<'a>(
    ctx: &ViewContext<'a>,
    room: Room,
    devices: Vec<&'a crate::domain::device::Device>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr(room.i18n_key())).size(typography::TITLE_SM))
        .push(build_device_grid(ctx, devices))
        .into()
}
