//! Terminal color-capability detection so theme fallbacks match host support.

use std::env;

/// Color mode capabilities of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ColorMode {
    /// 24-bit true color (16 million colors)
    #[default]
    TrueColor,
    /// 256 color mode
    Color256,
    /// Basic 16 ANSI colors
    Ansi16,
    /// No color support
    None,
}

impl ColorMode {
    /// Detect the terminal's color capabilities from environment variables.
    pub(crate) fn detect() -> Self {
        // NO_COLOR wins over everything (https://no-color.org/).
        if env::var("NO_COLOR").is_ok() {
            return Self::None;
        }

        if let Ok(colorterm) = env::var("COLORTERM") {
            if colorterm == "truecolor" || colorterm == "24bit" {
                return Self::TrueColor;
            }
        }

        // Some terminals support truecolor but do not set COLORTERM.
        if env_supports_truecolor_without_colorterm() {
            return Self::TrueColor;
        }

        if let Ok(term) = env::var("TERM") {
            if term.contains("256color") || term.contains("256-color") {
                return Self::Color256;
            }
            if term == "dumb" {
                return Self::None;
            }
        }

        // ANSI 16 is the safe fallback.
        Self::Ansi16
    }

    /// Check if colors are supported at all.
    #[must_use]
    pub(crate) fn supports_color(&self) -> bool {
        !matches!(self, Self::None)
    }
}

fn env_supports_truecolor_without_colorterm() -> bool {
    if let Ok(term_program) = env::var("TERM_PROGRAM") {
        let program = term_program.to_lowercase();
        if matches!(
            program.as_str(),
            "vscode" | "cursor" | "wezterm" | "iterm.app" | "warpterminal"
        ) || program.contains("jetbrains")
            || program.contains("jediterm")
        {
            return true;
        }
    }
    false
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrueColor => write!(f, "truecolor"),
            Self::Color256 => write!(f, "256"),
            Self::Ansi16 => write!(f, "ansi"),
            Self::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn with_env_vars<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
        static ENV_GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        let _guard = ENV_GUARD
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|e| e.into_inner());

        const KEYS: &[&str] = &["NO_COLOR", "COLORTERM", "TERM", "TERM_PROGRAM"];
        let prev: Vec<(String, Option<String>)> = KEYS
            .iter()
            .map(|key| ((*key).to_string(), env::var(key).ok()))
            .collect();
        for key in KEYS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        let out = f();

        for (key, value) in prev {
            match value {
                Some(v) => env::set_var(&key, v),
                None => env::remove_var(&key),
            }
        }
        out
    }

    #[test]
    fn supports_color_only_fails_for_none() {
        assert!(ColorMode::TrueColor.supports_color());
        assert!(ColorMode::Color256.supports_color());
        assert!(ColorMode::Ansi16.supports_color());
        assert!(!ColorMode::None.supports_color());
    }

    #[test]
    fn display_labels() {
        assert_eq!(ColorMode::TrueColor.to_string(), "truecolor");
        assert_eq!(ColorMode::Color256.to_string(), "256");
        assert_eq!(ColorMode::Ansi16.to_string(), "ansi");
        assert_eq!(ColorMode::None.to_string(), "none");
    }

    #[test]
    fn no_color_wins_over_truecolor_hints() {
        with_env_vars(
            &[
                ("NO_COLOR", Some("1")),
                ("COLORTERM", Some("truecolor")),
                ("TERM", Some("xterm-256color")),
            ],
            || assert_eq!(ColorMode::detect(), ColorMode::None),
        );
    }

    #[test]
    fn colorterm_truecolor_is_detected() {
        with_env_vars(
            &[("COLORTERM", Some("24bit")), ("TERM", Some("xterm-256color"))],
            || assert_eq!(ColorMode::detect(), ColorMode::TrueColor),
        );
    }

    #[test]
    fn term_256color_without_colorterm_is_256() {
        with_env_vars(&[("TERM", Some("xterm-256color"))], || {
            assert_eq!(ColorMode::detect(), ColorMode::Color256);
        });
    }

    #[test]
    fn vscode_term_program_implies_truecolor() {
        with_env_vars(
            &[("TERM", Some("xterm-256color")), ("TERM_PROGRAM", Some("vscode"))],
            || assert_eq!(ColorMode::detect(), ColorMode::TrueColor),
        );
    }

    #[test]
    fn dumb_term_has_no_color() {
        with_env_vars(&[("TERM", Some("dumb"))], || {
            assert_eq!(ColorMode::detect(), ColorMode::None);
        });
    }

    #[test]
    fn plain_xterm_falls_back_to_ansi16() {
        with_env_vars(&[("TERM", Some("xterm"))], || {
            assert_eq!(ColorMode::detect(), ColorMode::Ansi16);
        });
    }
}
