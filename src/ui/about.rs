// SPDX-License-Identifier: MPL-2.0
//! About screen showing the application name, version and description.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{rule, scrollable, text, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Version string baked in at compile time.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The about screen has no interactive widgets.
#[derive(Debug, Clone)]
pub enum Message {}

/// What the about screen needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.weak.text),
    }
}

/// Lays out the version card inside a centered scrollable.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(560.0)
        .push(Text::new(ctx.i18n.tr("about.title")).size(typography::TITLE_LG))
        .push(version_card(&ctx));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Card with the product name, version line, and description.
fn version_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let version_text = ctx
        .i18n
        .tr_with_args("about.version", &[("version", APP_VERSION.to_string())]);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("app.title")).size(typography::TITLE_MD))
        .push(Text::new(version_text).size(typography::BODY).style(muted));

    let body = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(rule::horizontal(1))
        .push(Text::new(ctx.i18n.tr("about.description")).size(typography::BODY))
        .push(
            Text::new(ctx.i18n.tr("app.subtitle"))
                .size(typography::BODY_SM)
                .style(muted),
        );

    Container::new(body)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
