//! Explicit call-session record so sequencer state is owned, not global.

use std::time::Instant;

/// In-memory record of one simulated call: whether it is live, when it
/// started, and how much of the script has played.
///
/// `next_turn_index` only moves forward while the session is active and snaps
/// back to 0 when a new session starts.
#[derive(Debug, Clone, Default)]
pub struct CallSession {
    active: bool,
    started_at: Option<Instant>,
    next_turn_index: usize,
}

impl CallSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the session. Returns `false` (and changes nothing) when a
    /// session is already active.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.started_at = Some(now);
        self.next_turn_index = 0;
        true
    }

    /// Deactivate the session. Returns `false` when already inactive.
    ///
    /// The start timestamp survives until [`Self::clear_started_at`] so the
    /// frozen duration display can still be derived after the call ends.
    pub fn end(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        true
    }

    /// Forget the start timestamp (idle-display reset).
    pub fn clear_started_at(&mut self) {
        self.started_at = None;
    }

    /// Bump the turn index after a reveal. No-op while inactive.
    pub fn advance_turn(&mut self) {
        if self.active {
            self.next_turn_index += 1;
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    #[must_use]
    pub fn next_turn_index(&self) -> usize {
        self.next_turn_index
    }
}
