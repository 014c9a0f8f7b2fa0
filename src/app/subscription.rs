// SPDX-License-Identifier: MPL-2.0
//! Background timers feeding `App::update`.
//!
//! Two timers run, each gated so the runtime stays idle when there is
//! nothing to do.

use super::{Message, Screen};
use iced::{time, Subscription};
use std::time::Duration;

/// 100ms pulse that expires toasts. Runs only while any toast is
/// alive, shown or backlogged.
pub fn toast_timer(toasts_alive: bool) -> Subscription<Message> {
    if toasts_alive {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Minute tick that redraws the dashboard greeting, which depends on
/// the time of day. Other screens render no clock.
pub fn greeting_clock(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Dashboard => time::every(Duration::from_secs(60)).map(Message::MinuteTick),
        _ => Subscription::none(),
    }
}
