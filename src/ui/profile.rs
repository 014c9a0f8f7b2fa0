// SPDX-License-Identifier: MPL-2.0
//! Profile screen showing the account holder's personal information.
//!
//! Read-only, so the screen emits no messages.

use crate::domain::profile::UserProfile;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{scrollable, text, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// The profile screen has no interactive widgets.
#[derive(Debug, Clone)]
pub enum Message {}

/// Borrowed profile data for the view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a UserProfile,
}

/// Render the profile screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(560.0)
        .push(Text::new(ctx.i18n.tr("profile.title")).size(typography::TITLE_LG))
        .push(build_identity_card(&ctx))
        .push(build_information_card(&ctx));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

fn build_identity_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let avatar = Container::new(
        Text::new(ctx.profile.initials()).size(typography::TITLE_SM),
    )
    .width(Length::Fixed(56.0))
    .height(Length::Fixed(56.0))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::badge(palette::PRIMARY_400));

    let identity = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.profile.name.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.profile.email.as_str())
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(avatar)
        .push(identity);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn build_information_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let rows = [
        ("profile.name", ctx.profile.name.as_str()),
        ("profile.email", ctx.profile.email.as_str()),
        ("profile.phone", ctx.profile.phone.as_str()),
        ("profile.address", ctx.profile.address.as_str()),
    ];

    let mut table = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("profile.personalInformation")).size(typography::TITLE_SM));
    for (key, value) in rows {
        table = table.push(build_row(ctx.i18n.tr(key), value));
    }

    Container::new(table)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn build_row<'a>(label: String, value: &'a str) -> Element<'a, Message> {
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
        .push(Container::new(Text::new(value).size(typography::BODY_SM)).width(Length::FillPortion(2)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_view_renders() {
        let i18n = I18n::default();
        let profile = UserProfile::mock();
        let _element = view(ViewContext {
            i18n: &i18n,
            profile: &profile,
        });
    }
}
