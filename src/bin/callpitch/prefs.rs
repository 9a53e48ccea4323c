//! Read-only user preferences (`~/.config/callpitch/config.toml`).
//!
//! Loaded once at startup and merged under CLI flags: a flag the user passed
//! on the command line always wins over the file, and the file wins over the
//! built-in default. The file is never written.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;

use callpitch::config::{PacingProfile, MAX_CHAR_INTERVAL_MS, MIN_CHAR_INTERVAL_MS};

use crate::cli::LandingConfig;

const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "CALLPITCH_CONFIG_DIR";

/// Preferences the file can carry. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct Preferences {
    #[serde(default)]
    pub(crate) ui: UiPrefs,
    #[serde(default)]
    pub(crate) demo: DemoPrefs,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct UiPrefs {
    pub(crate) theme: Option<String>,
    pub(crate) ascii: Option<bool>,
    pub(crate) reduced_motion: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct DemoPrefs {
    pub(crate) pace: Option<String>,
    pub(crate) char_interval_ms: Option<u64>,
}

/// Which overridable flags the user actually passed on the command line.
///
/// Bool flags and value flags with built-in defaults cannot distinguish
/// "default" from "explicitly set to the default", so explicitness is read
/// from the raw argument list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ExplicitFlags {
    pub(crate) pace: bool,
    pub(crate) char_interval_ms: bool,
    pub(crate) ascii: bool,
    pub(crate) reduced_motion: bool,
}

impl ExplicitFlags {
    pub(crate) fn from_env_args() -> Self {
        Self::from_args(env::args())
    }

    pub(crate) fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut explicit = Self::default();
        for arg in args {
            let flag = arg.split('=').next().unwrap_or(&arg);
            match flag {
                "--pace" => explicit.pace = true,
                "--char-interval-ms" => explicit.char_interval_ms = true,
                "--ascii" => explicit.ascii = true,
                "--reduced-motion" => explicit.reduced_motion = true,
                _ => {}
            }
        }
        explicit
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::config_dir().map(|dir| dir.join("callpitch"))
}

pub(crate) fn preferences_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Load preferences, falling back to defaults when the file is missing.
///
/// A malformed file is reported on stderr once, before the TUI starts, and
/// otherwise treated as absent.
pub(crate) fn load_preferences() -> Preferences {
    let Some(path) = preferences_file_path() else {
        return Preferences::default();
    };
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(_) => return Preferences::default(),
    };
    match toml::from_str(&contents) {
        Ok(prefs) => prefs,
        Err(err) => {
            eprintln!(
                "callpitch: ignoring malformed preferences {}: {err}",
                path.display()
            );
            Preferences::default()
        }
    }
}

/// Merge file preferences under CLI flags.
pub(crate) fn apply_preferences(
    prefs: &Preferences,
    config: &mut LandingConfig,
    explicit: &ExplicitFlags,
) {
    if config.theme.is_none() {
        config.theme = prefs.ui.theme.clone();
    }
    if !explicit.ascii {
        if let Some(ascii) = prefs.ui.ascii {
            config.ascii = ascii;
        }
    }
    if !explicit.reduced_motion {
        if let Some(reduced) = prefs.ui.reduced_motion {
            config.reduced_motion = reduced;
        }
    }
    if !explicit.pace {
        if let Some(pace) = prefs
            .demo
            .pace
            .as_deref()
            .and_then(|name| PacingProfile::from_str(name, true).ok())
        {
            config.app.pace = pace;
        }
    }
    if !explicit.char_interval_ms {
        if let Some(interval) = prefs.demo.char_interval_ms {
            if (MIN_CHAR_INTERVAL_MS..=MAX_CHAR_INTERVAL_MS).contains(&interval) {
                config.app.char_interval_ms = interval;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(list: &[&str]) -> impl IntoIterator<Item = String> {
        list.iter().map(|s| (*s).to_string()).collect::<Vec<_>>()
    }

    fn full_prefs() -> Preferences {
        toml::from_str(
            r#"
            [ui]
            theme = "daylight"
            ascii = true
            reduced_motion = true

            [demo]
            pace = "relaxed"
            char_interval_ms = 80
            "#,
        )
        .expect("valid prefs")
    }

    #[test]
    fn explicit_flags_detect_plain_and_equals_forms() {
        let explicit = ExplicitFlags::from_args(args(&[
            "callpitch",
            "--pace",
            "relaxed",
            "--char-interval-ms=40",
        ]));
        assert!(explicit.pace);
        assert!(explicit.char_interval_ms);
        assert!(!explicit.ascii);
        assert!(!explicit.reduced_motion);
    }

    #[test]
    fn preferences_fill_in_unset_flags() {
        let mut config = LandingConfig::parse_from(["prefs-test"]);
        apply_preferences(&full_prefs(), &mut config, &ExplicitFlags::default());
        assert_eq!(config.theme.as_deref(), Some("daylight"));
        assert!(config.ascii);
        assert!(config.reduced_motion);
        assert_eq!(config.app.pace, PacingProfile::Relaxed);
        assert_eq!(config.app.char_interval_ms, 80);
    }

    #[test]
    fn cli_flags_always_win_over_preferences() {
        let mut config = LandingConfig::parse_from([
            "prefs-test",
            "--theme",
            "mono",
            "--pace",
            "standard",
            "--char-interval-ms",
            "25",
        ]);
        let explicit = ExplicitFlags::from_args(args(&[
            "prefs-test",
            "--theme",
            "mono",
            "--pace",
            "standard",
            "--char-interval-ms",
            "25",
        ]));
        apply_preferences(&full_prefs(), &mut config, &explicit);
        assert_eq!(config.theme.as_deref(), Some("mono"));
        assert_eq!(config.app.pace, PacingProfile::Standard);
        assert_eq!(config.app.char_interval_ms, 25);
    }

    #[test]
    fn out_of_range_preference_interval_is_ignored() {
        let prefs: Preferences =
            toml::from_str("[demo]\nchar_interval_ms = 5000\n").expect("valid prefs");
        let mut config = LandingConfig::parse_from(["prefs-test"]);
        let default_interval = config.app.char_interval_ms;
        apply_preferences(&prefs, &mut config, &ExplicitFlags::default());
        assert_eq!(config.app.char_interval_ms, default_interval);
    }

    #[test]
    fn unknown_pace_preference_is_ignored() {
        let prefs: Preferences = toml::from_str("[demo]\npace = \"blistering\"\n").expect("prefs");
        let mut config = LandingConfig::parse_from(["prefs-test"]);
        apply_preferences(&prefs, &mut config, &ExplicitFlags::default());
        assert_eq!(config.app.pace, PacingProfile::Standard);
    }

    #[test]
    fn empty_document_parses_to_defaults() {
        let prefs: Preferences = toml::from_str("").expect("empty prefs");
        assert_eq!(prefs, Preferences::default());
    }
}
