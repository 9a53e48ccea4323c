//! Hero phone mockup: incoming-call card with accept/decline interactions.

use std::time::{Duration, Instant};

const PRESS_FLASH: Duration = Duration::from_millis(600);
const DECLINE_REVERT: Duration = Duration::from_secs(2);

pub(crate) const INCOMING_LABEL: &str = "Incoming Call...";
pub(crate) const CONNECTED_LABEL: &str = "Connected...";
pub(crate) const DECLINED_LABEL: &str = "Call Declined";
pub(crate) const CALLER_NAME: &str = "AI Assistant";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MockupButton {
    Accept,
    Decline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockupPhase {
    Incoming,
    Connected,
    Declined { revert_at: Instant },
}

/// State machine for the decorative phone card.
///
/// Accept latches to Connected; decline shows a transient state and reverts
/// to Incoming on its own.
#[derive(Debug)]
pub(crate) struct PhoneMockup {
    phase: MockupPhase,
    flash: Option<(MockupButton, Instant)>,
}

impl PhoneMockup {
    pub(crate) fn new() -> Self {
        Self {
            phase: MockupPhase::Incoming,
            flash: None,
        }
    }

    pub(crate) fn accept(&mut self, now: Instant) {
        if matches!(self.phase, MockupPhase::Connected) {
            return;
        }
        self.phase = MockupPhase::Connected;
        self.flash = Some((MockupButton::Accept, now));
    }

    pub(crate) fn decline(&mut self, now: Instant) {
        if matches!(self.phase, MockupPhase::Connected) {
            return;
        }
        self.phase = MockupPhase::Declined {
            revert_at: now + DECLINE_REVERT,
        };
        self.flash = Some((MockupButton::Decline, now));
    }

    /// Advance timers; returns true when the card changed and needs a redraw.
    pub(crate) fn step(&mut self, now: Instant) -> bool {
        let mut redraw = false;
        if let MockupPhase::Declined { revert_at } = self.phase {
            if now >= revert_at {
                self.phase = MockupPhase::Incoming;
                redraw = true;
            }
        }
        if let Some((_, pressed_at)) = self.flash {
            if now.saturating_duration_since(pressed_at) >= PRESS_FLASH {
                self.flash = None;
                redraw = true;
            }
        }
        redraw
    }

    #[must_use]
    pub(crate) fn status_label(&self) -> &'static str {
        match self.phase {
            MockupPhase::Incoming => INCOMING_LABEL,
            MockupPhase::Connected => CONNECTED_LABEL,
            MockupPhase::Declined { .. } => DECLINED_LABEL,
        }
    }

    #[must_use]
    pub(crate) fn is_connected(&self) -> bool {
        matches!(self.phase, MockupPhase::Connected)
    }

    /// Which button is currently flashing from a recent press, if any.
    #[must_use]
    pub(crate) fn flashing(&self) -> Option<MockupButton> {
        self.flash.map(|(button, _)| button)
    }

    /// True while a timer is running and the card will change on its own.
    #[must_use]
    pub(crate) fn has_pending_work(&self) -> bool {
        self.flash.is_some() || matches!(self.phase, MockupPhase::Declined { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_latches_connected() {
        let mut mockup = PhoneMockup::new();
        let now = Instant::now();
        assert_eq!(mockup.status_label(), INCOMING_LABEL);
        mockup.accept(now);
        assert_eq!(mockup.status_label(), CONNECTED_LABEL);
        assert_eq!(mockup.flashing(), Some(MockupButton::Accept));

        // Further presses are ignored once connected.
        mockup.decline(now + Duration::from_secs(1));
        assert!(mockup.is_connected());
    }

    #[test]
    fn decline_reverts_to_incoming() {
        let mut mockup = PhoneMockup::new();
        let now = Instant::now();
        mockup.decline(now);
        assert_eq!(mockup.status_label(), DECLINED_LABEL);
        // The press flash expires first; the declined label holds through it.
        assert!(mockup.step(now + Duration::from_millis(700)));
        assert_eq!(mockup.status_label(), DECLINED_LABEL);
        assert!(!mockup.step(now + Duration::from_secs(1)));
        assert_eq!(mockup.status_label(), DECLINED_LABEL);
        assert!(mockup.step(now + Duration::from_millis(2100)));
        assert_eq!(mockup.status_label(), INCOMING_LABEL);
    }

    #[test]
    fn press_flash_expires() {
        let mut mockup = PhoneMockup::new();
        let now = Instant::now();
        mockup.accept(now);
        assert!(mockup.flashing().is_some());
        assert!(mockup.step(now + Duration::from_millis(700)));
        assert!(mockup.flashing().is_none());
        assert!(!mockup.has_pending_work());
    }

    #[test]
    fn decline_after_revert_works_again() {
        let mut mockup = PhoneMockup::new();
        let now = Instant::now();
        mockup.decline(now);
        mockup.step(now + Duration::from_secs(3));
        mockup.decline(now + Duration::from_secs(4));
        assert_eq!(mockup.status_label(), DECLINED_LABEL);
    }
}
