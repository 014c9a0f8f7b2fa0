// SPDX-License-Identifier: MPL-2.0
//! The notification value type and its severity scale.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique notification handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// How loud a toast is: the severity picks the accent color and how
/// long the toast stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Errors stay until the user dismisses them.
    Error,
}

impl Severity {
    /// Accent color for the toast border and glyph.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// How long a toast of this severity stays visible, `None` for
    /// sticky errors.
    #[must_use]
    pub fn display_duration(self) -> Option<Duration> {
        let secs = match self {
            Severity::Success | Severity::Info => 3,
            Severity::Warning => 5,
            Severity::Error => return None,
        };
        Some(Duration::from_secs(secs))
    }
}

/// One toast-worth of feedback.
///
/// Carries catalog keys, not resolved text, so the toast renders in
/// whatever locale is active when it is drawn.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Catalog key for the toast title.
    title_key: String,
    /// Optional catalog key for the smaller description line.
    body_key: Option<String>,
    /// Arguments substituted into the title and body templates.
    args: Vec<(String, String)>,
    created: Instant,
    /// Overrides the severity's display duration when set.
    duration_override: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, title_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title_key: title_key.into(),
            body_key: None,
            args: Vec::new(),
            created: Instant::now(),
            duration_override: None,
        }
    }

    pub fn success(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, title_key)
    }

    pub fn info(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, title_key)
    }

    pub fn warning(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title_key)
    }

    pub fn error(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, title_key)
    }

    /// Adds a description line below the title.
    #[must_use]
    pub fn with_body(mut self, body_key: impl Into<String>) -> Self {
        self.body_key = Some(body_key.into());
        self
    }

    /// Adds an argument substituted into the title and body templates.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((key.into(), value.into()));
        self
    }

    /// Overrides the severity's default display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_override = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn body_key(&self) -> Option<&str> {
        self.body_key.as_deref()
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    /// Whether this notification has outlived its display duration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.duration_override
            .or_else(|| self.severity.display_duration())
            .is_some_and(|limit| self.created.elapsed() >= limit)
    }
}
