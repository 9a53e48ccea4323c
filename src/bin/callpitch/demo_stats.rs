//! Per-run demo counters, printed as a summary after the TUI exits.

use std::time::Instant;

use callpitch::clock::format_clock;

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_DIM: &str = "\x1b[2m";
const ANSI_RESET: &str = "\x1b[0m";

/// Counters accumulated while the page runs.
#[derive(Debug)]
pub(crate) struct DemoStats {
    started_at: Instant,
    calls_started: u64,
    conversations_completed: u64,
    turns_revealed: u64,
    longest_call_secs: u64,
}

impl DemoStats {
    pub(crate) fn new(started_at: Instant) -> Self {
        Self {
            started_at,
            calls_started: 0,
            conversations_completed: 0,
            turns_revealed: 0,
            longest_call_secs: 0,
        }
    }

    pub(crate) fn record_call_started(&mut self) {
        self.calls_started += 1;
    }

    pub(crate) fn record_conversation_completed(&mut self) {
        self.conversations_completed += 1;
    }

    pub(crate) fn record_turn_revealed(&mut self) {
        self.turns_revealed += 1;
    }

    pub(crate) fn record_call_ended(&mut self, duration_secs: u64) {
        self.longest_call_secs = self.longest_call_secs.max(duration_secs);
    }

    #[must_use]
    pub(crate) fn calls_started(&self) -> u64 {
        self.calls_started
    }

    /// True when the user actually exercised the demo.
    #[must_use]
    pub(crate) fn has_activity(&self) -> bool {
        self.calls_started > 0 || self.turns_revealed > 0
    }

    fn session_secs(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.started_at).as_secs()
    }
}

fn stat_line(label: &str, value: &str, color: bool) -> String {
    if color {
        format!("  {ANSI_DIM}{label:<12}{ANSI_RESET} {value}")
    } else {
        format!("  {label:<12} {value}")
    }
}

/// Render the exit summary, or an empty string when nothing happened.
#[must_use]
pub(crate) fn format_demo_summary(stats: &DemoStats, now: Instant, color: bool) -> String {
    if !stats.has_activity() {
        return String::new();
    }
    let mut out = String::new();
    if color {
        out.push_str(&format!("{ANSI_BOLD}Demo Summary{ANSI_RESET}\n"));
    } else {
        out.push_str("Demo Summary\n");
    }
    out.push_str("------------\n");
    out.push_str(&stat_line("Calls", &stats.calls_started.to_string(), color));
    out.push('\n');
    out.push_str(&stat_line(
        "Completed",
        &stats.conversations_completed.to_string(),
        color,
    ));
    out.push('\n');
    out.push_str(&stat_line("Turns", &stats.turns_revealed.to_string(), color));
    out.push('\n');
    out.push_str(&stat_line(
        "Longest",
        &format_clock(stats.longest_call_secs),
        color,
    ));
    out.push('\n');
    out.push_str(&stat_line(
        "Session",
        &format_clock(stats.session_secs(now)),
        color,
    ));
    out.push('\n');
    out
}
