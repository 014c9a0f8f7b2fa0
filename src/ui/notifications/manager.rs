// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifecycle.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// At most this many toasts render at once; the rest wait their turn.
const VISIBLE_SLOTS: usize = 3;

/// Inputs that advance the queue.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user clicked the close button on one toast.
    Dismiss(NotificationId),
    /// Periodic timer pulse; expired toasts leave on the next one.
    Tick,
}

/// Holds every live notification in a single deque. The first
/// [`VISIBLE_SLOTS`] entries are the on-screen window (newest first);
/// everything behind them is the backlog, so removing a shown
/// toast promotes the oldest waiting one without any shuffling.
#[derive(Debug, Default)]
pub struct Manager {
    items: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a notification. It shows immediately when a slot is
    /// free, otherwise it waits in the backlog.
    pub fn post(&mut self, notification: Notification) {
        if self.items.len() < VISIBLE_SLOTS {
            self.items.push_front(notification);
        } else {
            self.items.push_back(notification);
        }
    }

    /// Removes a notification wherever it currently sits.
    ///
    /// Returns `false` when the ID is unknown, e.g. a dismiss click
    /// racing an auto-dismiss tick.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.items.iter().position(|n| n.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops every shown notification that has outlived its display
    /// duration. Driven by the 100ms tick subscription.
    pub fn sweep(&mut self) {
        let expired: Vec<NotificationId> = self
            .shown()
            .filter(|n| n.is_expired())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn update(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.sweep();
            }
        }
    }

    /// The notifications currently on screen, newest first.
    pub fn shown(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().take(VISIBLE_SLOTS)
    }

    #[must_use]
    pub fn shown_len(&self) -> usize {
        self.items.len().min(VISIBLE_SLOTS)
    }

    #[must_use]
    pub fn backlog_len(&self) -> usize {
        self.items.len().saturating_sub(VISIBLE_SLOTS)
    }

    /// True once the last toast is gone; the tick subscription stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
