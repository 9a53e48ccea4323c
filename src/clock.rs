//! Call-clock formatting so the elapsed-time display stays consistent everywhere.

use std::time::Instant;

/// Format whole seconds as zero-padded `MM:SS`.
///
/// Minutes are not capped at 59: a call that runs an hour renders as `60:00`.
#[must_use]
pub fn format_clock(total_secs: u64) -> String {
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{mins:02}:{secs:02}")
}

/// Whole seconds elapsed between `started_at` and `now`, saturating at zero.
#[must_use]
pub fn whole_secs_between(started_at: Instant, now: Instant) -> u64 {
    now.saturating_duration_since(started_at).as_secs()
}
