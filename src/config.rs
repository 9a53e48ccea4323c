//! Core runtime flags shared by the landing binary so playback behavior is explicit.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::script::DemoScript;
use crate::sequencer::PlaybackTiming;

pub const DEFAULT_CHAR_INTERVAL_MS: u64 = 50;
pub const MIN_CHAR_INTERVAL_MS: u64 = 10;
pub const MAX_CHAR_INTERVAL_MS: u64 = 500;

/// Conversation pacing preset selecting a turn gap and trailing pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PacingProfile {
    /// 3 s between turns, 2 s trailing pause.
    #[default]
    Standard,
    /// 4 s between turns, 3 s trailing pause.
    Relaxed,
}

impl PacingProfile {
    #[must_use]
    pub fn timing(self) -> PlaybackTiming {
        match self {
            PacingProfile::Standard => PlaybackTiming::standard(),
            PacingProfile::Relaxed => PlaybackTiming::relaxed(),
        }
    }
}

impl std::fmt::Display for PacingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PacingProfile::Standard => "Standard",
            PacingProfile::Relaxed => "Relaxed",
        };
        write!(f, "{label}")
    }
}

/// Playback and logging flags; the binary flattens this into its own flag set.
#[derive(Debug, Parser, Clone)]
pub struct AppConfig {
    /// Demo script file (.toml or .json) replacing the built-in conversation
    #[arg(long = "script")]
    pub script: Option<PathBuf>,

    /// Conversation pacing preset (standard, relaxed)
    #[arg(long = "pace", value_enum, default_value_t = PacingProfile::Standard)]
    pub pace: PacingProfile,

    /// Delay between typed-out transcript characters (ms)
    #[arg(
        long = "char-interval-ms",
        default_value_t = DEFAULT_CHAR_INTERVAL_MS,
        value_parser = parse_char_interval_ms
    )]
    pub char_interval_ms: u64,

    /// Write JSON trace events to the local trace log
    #[arg(long = "logs", default_value_t = false)]
    pub logs: bool,

    /// Include frame and playback timing events in the trace log
    #[arg(long = "log-timings", default_value_t = false)]
    pub log_timings: bool,

    /// Suppress all log output even when other log flags are set
    #[arg(long = "no-logs", default_value_t = false)]
    pub no_logs: bool,
}

impl AppConfig {
    /// Resolved playback timing: the pacing preset with the char interval applied.
    #[must_use]
    pub fn playback_timing(&self) -> PlaybackTiming {
        self.pace
            .timing()
            .with_char_interval(Duration::from_millis(self.char_interval_ms))
    }

    /// Load and validate the demo script: `--script` when given, else built-in.
    ///
    /// # Errors
    ///
    /// Returns an error when the script file cannot be read or parsed, or when
    /// the loaded script fails validation.
    pub fn resolve_script(&self) -> Result<DemoScript> {
        let script = match &self.script {
            Some(path) => DemoScript::load(path)?,
            None => DemoScript::builtin(),
        };
        script.validate()?;
        Ok(script)
    }
}

fn parse_char_interval_ms(raw: &str) -> Result<u64, String> {
    let value: u64 = raw
        .parse()
        .map_err(|_| format!("invalid char interval '{raw}'"))?;
    if !(MIN_CHAR_INTERVAL_MS..=MAX_CHAR_INTERVAL_MS).contains(&value) {
        return Err(format!(
            "char interval must be between {MIN_CHAR_INTERVAL_MS} and {MAX_CHAR_INTERVAL_MS} ms"
        ));
    }
    Ok(value)
}
