// SPDX-License-Identifier: MPL-2.0
//! Notification feed shown in the navbar dropdown.

/// One entry in the alert feed. Title, body, and timestamp are catalog
/// keys resolved at render time so the feed follows locale switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title_key: &'static str,
    pub body_key: &'static str,
    pub time_key: &'static str,
    pub read: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
}

impl AlertFeed {
    /// The canonical mock feed, newest first.
    pub fn mock() -> Self {
        Self {
            alerts: vec![
                Alert {
                    title_key: "notifications.newDevice",
                    body_key: "notifications.thermostatOnline",
                    time_key: "time.fiveMinAgo",
                    read: false,
                },
                Alert {
                    title_key: "notifications.energyAlert",
                    body_key: "notifications.unusualConsumption",
                    time_key: "time.oneHourAgo",
                    read: false,
                },
                Alert {
                    title_key: "notifications.securityAlert",
                    body_key: "notifications.motionDetected",
                    time_key: "time.yesterday",
                    read: true,
                },
            ],
        }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.read).count()
    }

    pub fn mark_all_read(&mut self) {
        for alert in &mut self.alerts {
            alert.read = true;
        }
    }
}
