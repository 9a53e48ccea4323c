//! Hero stat counters that count up from zero once the hero section reveals.

use std::time::{Duration, Instant};

const COUNT_UP: Duration = Duration::from_secs(2);

/// How a stat's final value is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatKind {
    /// Whole thousands shown as `12K+`.
    Thousands,
    /// One decimal place with a percent sign.
    Percent,
    /// Plain integer with a trailing plus.
    Plus,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct StatSpec {
    pub(crate) label: &'static str,
    pub(crate) target: f64,
    pub(crate) kind: StatKind,
}

pub(crate) const HERO_STATS: [StatSpec; 3] = [
    StatSpec {
        label: "Calls Handled",
        target: 12_000.0,
        kind: StatKind::Thousands,
    },
    StatSpec {
        label: "Satisfaction Rate",
        target: 98.6,
        kind: StatKind::Percent,
    },
    StatSpec {
        label: "Businesses Served",
        target: 150.0,
        kind: StatKind::Plus,
    },
];

fn format_stat(value: f64, kind: StatKind) -> String {
    match kind {
        StatKind::Thousands => format!("{}K+", (value / 1000.0).floor() as u64),
        StatKind::Percent => format!("{value:.1}%"),
        StatKind::Plus => format!("{}+", value.floor() as u64),
    }
}

/// Count-up state for the three hero stats.
///
/// Arms once, the first time the hero reveals, then interpolates toward the
/// targets over a fixed window.
#[derive(Debug)]
pub(crate) struct HeroStats {
    armed_at: Option<Instant>,
}

impl HeroStats {
    pub(crate) fn new() -> Self {
        Self { armed_at: None }
    }

    /// Start the count-up; later calls are ignored.
    pub(crate) fn arm(&mut self, now: Instant) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    fn progress(&self, now: Instant) -> f64 {
        match self.armed_at {
            None => 0.0,
            Some(at) => {
                let elapsed = now.saturating_duration_since(at);
                (elapsed.as_secs_f64() / COUNT_UP.as_secs_f64()).min(1.0)
            }
        }
    }

    /// Formatted `(label, value)` pairs at the current count-up progress.
    #[must_use]
    pub(crate) fn values(&self, now: Instant) -> Vec<(&'static str, String)> {
        let progress = self.progress(now);
        HERO_STATS
            .iter()
            .map(|spec| (spec.label, format_stat(spec.target * progress, spec.kind)))
            .collect()
    }

    /// True while the count-up is still animating (a redraw is needed).
    pub(crate) fn step(&self, now: Instant) -> bool {
        matches!(self.armed_at, Some(_) if self.progress(now) < 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_start_at_zero_before_arming() {
        let stats = HeroStats::new();
        let values = stats.values(Instant::now());
        assert_eq!(values[0], ("Calls Handled", "0K+".to_string()));
        assert_eq!(values[1], ("Satisfaction Rate", "0.0%".to_string()));
        assert_eq!(values[2], ("Businesses Served", "0+".to_string()));
    }

    #[test]
    fn count_up_reaches_the_targets() {
        let mut stats = HeroStats::new();
        let start = Instant::now();
        stats.arm(start);
        let done = start + Duration::from_secs(3);
        let values = stats.values(done);
        assert_eq!(values[0].1, "12K+");
        assert_eq!(values[1].1, "98.6%");
        assert_eq!(values[2].1, "150+");
        assert!(!stats.step(done));
    }

    #[test]
    fn halfway_values_are_partial() {
        let mut stats = HeroStats::new();
        let start = Instant::now();
        stats.arm(start);
        let half = start + Duration::from_secs(1);
        let values = stats.values(half);
        assert_eq!(values[0].1, "6K+");
        assert_eq!(values[1].1, "49.3%");
        assert_eq!(values[2].1, "75+");
        assert!(stats.step(half));
    }

    #[test]
    fn arming_twice_keeps_the_first_start() {
        let mut stats = HeroStats::new();
        let start = Instant::now();
        stats.arm(start);
        stats.arm(start + Duration::from_secs(10));
        assert_eq!(stats.values(start + Duration::from_secs(3))[0].1, "12K+");
    }
}
