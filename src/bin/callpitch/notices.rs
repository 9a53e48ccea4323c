//! Transient status notices shown in the status bar, with a bounded history.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::theme::ThemeColors;

/// Most notices shown at once; older ones age out first.
pub(crate) const MAX_VISIBLE_NOTICES: usize = 3;
/// Dismissed notices kept for the history ring.
pub(crate) const NOTICE_HISTORY_MAX: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// How long a notice of this severity stays visible.
    #[must_use]
    pub(crate) fn dismiss_after(self) -> Duration {
        match self {
            Self::Info | Self::Success => Duration::from_millis(3000),
            Self::Warning => Duration::from_millis(4000),
            Self::Error => Duration::from_millis(5000),
        }
    }

    #[must_use]
    pub(crate) fn color(self, colors: &ThemeColors) -> Color {
        match self {
            Self::Info => colors.accent,
            Self::Success => colors.success,
            Self::Warning => colors.warning,
            Self::Error => colors.error,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub(crate) id: u64,
    pub(crate) severity: Severity,
    pub(crate) message: String,
    created_at: Instant,
}

impl Notice {
    fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.severity.dismiss_after()
    }
}

/// Queue of active notices plus a ring of recently dismissed ones.
#[derive(Debug)]
pub(crate) struct NoticeCenter {
    active: VecDeque<Notice>,
    history: VecDeque<Notice>,
    next_id: u64,
}

impl NoticeCenter {
    pub(crate) fn new() -> Self {
        Self {
            active: VecDeque::new(),
            history: VecDeque::new(),
            next_id: 1,
        }
    }

    pub(crate) fn push(&mut self, severity: Severity, message: impl Into<String>, now: Instant) {
        let notice = Notice {
            id: self.next_id,
            severity,
            message: message.into(),
            created_at: now,
        };
        self.next_id += 1;
        self.active.push_back(notice);
        while self.active.len() > MAX_VISIBLE_NOTICES {
            if let Some(evicted) = self.active.pop_front() {
                self.archive(evicted);
            }
        }
    }

    pub(crate) fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Severity::Info, message, now);
    }

    pub(crate) fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Severity::Success, message, now);
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Severity::Warning, message, now);
    }

    pub(crate) fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Severity::Error, message, now);
    }

    fn archive(&mut self, notice: Notice) {
        self.history.push_back(notice);
        while self.history.len() > NOTICE_HISTORY_MAX {
            self.history.pop_front();
        }
    }

    /// Expire aged notices; returns true when any were dismissed.
    pub(crate) fn step(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(front) = self.active.front() {
            if front.expired(now) {
                if let Some(expired) = self.active.pop_front() {
                    self.archive(expired);
                }
                changed = true;
            } else {
                break;
            }
        }
        // Notices behind the head can expire first when severities differ.
        let before = self.active.len();
        let mut kept = VecDeque::with_capacity(before);
        for notice in self.active.drain(..) {
            if notice.expired(now) {
                self.history.push_back(notice);
            } else {
                kept.push_back(notice);
            }
        }
        self.active = kept;
        while self.history.len() > NOTICE_HISTORY_MAX {
            self.history.pop_front();
        }
        changed || self.active.len() != before
    }

    /// Dismiss the newest visible notice.
    pub(crate) fn dismiss_latest(&mut self) -> bool {
        match self.active.pop_back() {
            Some(notice) => {
                self.archive(notice);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub(crate) fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.active.iter()
    }

    #[must_use]
    pub(crate) fn latest(&self) -> Option<&Notice> {
        self.active.back()
    }

    #[must_use]
    pub(crate) fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    #[must_use]
    pub(crate) fn history_len(&self) -> usize {
        self.history.len()
    }
}
