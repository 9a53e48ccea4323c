//! Character-by-character reveal state so transcript lines type in on a clock.

use std::time::{Duration, Instant};

/// Typing progress for one transcript entry.
///
/// Characters become visible on fixed deadlines: the first after a short
/// settle delay, each following one after the per-character interval. The
/// owner decides when (and whether) to keep advancing; a line that stops
/// being advanced simply freezes at its current prefix.
#[derive(Debug, Clone)]
pub struct TypewriterLine {
    text: String,
    visible_bytes: usize,
    revealed_chars: usize,
    total_chars: usize,
    next_char_at: Instant,
    interval: Duration,
}

impl TypewriterLine {
    #[must_use]
    pub fn new(text: String, appended_at: Instant, settle: Duration, interval: Duration) -> Self {
        let total_chars = text.chars().count();
        Self {
            text,
            visible_bytes: 0,
            revealed_chars: 0,
            total_chars,
            next_char_at: appended_at + settle,
            interval,
        }
    }

    /// Reveal every character whose deadline has passed. Returns `true` when
    /// the visible prefix grew.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut grew = false;
        while self.revealed_chars < self.total_chars && now >= self.next_char_at {
            if let Some(ch) = self.text[self.visible_bytes..].chars().next() {
                self.visible_bytes += ch.len_utf8();
            }
            self.revealed_chars += 1;
            self.next_char_at += self.interval;
            grew = true;
        }
        grew
    }

    /// The currently revealed prefix. Always a valid char boundary.
    #[must_use]
    pub fn visible(&self) -> &str {
        &self.text[..self.visible_bytes]
    }

    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed_chars >= self.total_chars
    }

    #[must_use]
    pub fn revealed_chars(&self) -> usize {
        self.revealed_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SETTLE: Duration = Duration::from_millis(100);
    const INTERVAL: Duration = Duration::from_millis(50);

    fn line(text: &str, appended_at: Instant) -> TypewriterLine {
        TypewriterLine::new(text.to_string(), appended_at, SETTLE, INTERVAL)
    }

    #[test]
    fn nothing_visible_before_settle_delay() {
        let t0 = Instant::now();
        let mut tw = line("hello", t0);
        assert!(!tw.advance(t0 + Duration::from_millis(99)));
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn first_char_appears_at_settle_then_one_per_interval() {
        let t0 = Instant::now();
        let mut tw = line("hello", t0);
        assert!(tw.advance(t0 + SETTLE));
        assert_eq!(tw.visible(), "h");

        assert!(tw.advance(t0 + SETTLE + INTERVAL * 3));
        assert_eq!(tw.visible(), "hell");

        assert!(tw.advance(t0 + SETTLE + INTERVAL * 4));
        assert_eq!(tw.visible(), "hello");
        assert!(tw.is_complete());
    }

    #[test]
    fn advance_past_completion_reports_no_growth() {
        let t0 = Instant::now();
        let mut tw = line("ok", t0);
        assert!(tw.advance(t0 + Duration::from_secs(5)));
        assert!(tw.is_complete());
        assert!(!tw.advance(t0 + Duration::from_secs(6)));
    }

    #[test]
    fn empty_text_is_complete_immediately() {
        let t0 = Instant::now();
        let mut tw = line("", t0);
        assert!(tw.is_complete());
        assert!(!tw.advance(t0 + Duration::from_secs(1)));
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn multibyte_text_reveals_on_char_boundaries() {
        let t0 = Instant::now();
        let mut tw = line("¿Qué? 世界 🦀", t0);
        for step in 0..tw.total_chars {
            tw.advance(t0 + SETTLE + INTERVAL * step as u32);
            assert_eq!(tw.revealed_chars(), step + 1);
            assert!(tw.full_text().starts_with(tw.visible()));
        }
        assert!(tw.is_complete());
        assert_eq!(tw.visible(), "¿Qué? 世界 🦀");
    }

    #[test]
    fn frozen_line_keeps_its_prefix_without_advance_calls() {
        let t0 = Instant::now();
        let mut tw = line("frozen mid word", t0);
        tw.advance(t0 + SETTLE + INTERVAL * 5);
        let snapshot = tw.visible().to_string();
        assert_eq!(snapshot, "frozen");
        // No further advance calls: the visible prefix must not change.
        assert_eq!(tw.visible(), snapshot);
        assert!(!tw.is_complete());
    }

    proptest! {
        #[test]
        fn every_step_is_a_char_boundary_prefix(text in ".{0,60}") {
            let t0 = Instant::now();
            let mut tw = TypewriterLine::new(text.clone(), t0, SETTLE, INTERVAL);
            let mut last_revealed = 0;
            for step in 0..=text.chars().count() + 2 {
                tw.advance(t0 + SETTLE + INTERVAL * step as u32);
                prop_assert!(text.starts_with(tw.visible()));
                prop_assert!(tw.revealed_chars() >= last_revealed);
                last_revealed = tw.revealed_chars();
            }
            prop_assert!(tw.is_complete());
            prop_assert_eq!(tw.visible(), text.as_str());
        }
    }
}
