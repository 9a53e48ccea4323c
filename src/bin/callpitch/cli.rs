//! Binary flag surface flattening the library playback config into the page shell.

use clap::Parser;

use callpitch::config::AppConfig;

use crate::color_mode::ColorMode;
use crate::theme::Theme;

pub(crate) const DEFAULT_FPS: u64 = 30;
pub(crate) const MIN_FPS: u64 = 10;
pub(crate) const MAX_FPS: u64 = 120;

/// CLI for the terminal landing page.
#[derive(Debug, Parser, Clone)]
#[command(name = "callpitch", version, disable_help_flag = true)]
pub(crate) struct LandingConfig {
    #[command(flatten)]
    pub(crate) app: AppConfig,

    /// Color theme (midnight, daylight, mono)
    #[arg(long = "theme", env = "CALLPITCH_THEME")]
    pub(crate) theme: Option<String>,

    /// Disable colors entirely (also honors NO_COLOR)
    #[arg(long = "no-color", default_value_t = false)]
    pub(crate) no_color: bool,

    /// Force the ASCII glyph set
    #[arg(long = "ascii", default_value_t = false)]
    pub(crate) ascii: bool,

    /// Disable decorative animation (particles, scroll glide)
    #[arg(long = "reduced-motion", default_value_t = false)]
    pub(crate) reduced_motion: bool,

    /// Redraw cadence in frames per second
    #[arg(long = "fps", default_value_t = DEFAULT_FPS, value_parser = parse_fps)]
    pub(crate) fps: u64,

    /// Print an environment diagnostics report and exit
    #[arg(long = "doctor", default_value_t = false)]
    pub(crate) doctor: bool,

    /// Print the resolved demo script as TOML and exit
    #[arg(long = "dump-script", default_value_t = false)]
    pub(crate) dump_script: bool,

    /// Show the grouped help screen
    #[arg(long = "help", short = 'h', default_value_t = false)]
    pub(crate) help: bool,
}

impl LandingConfig {
    /// Resolve the theme: `--theme`/`CALLPITCH_THEME` (or a merged preference)
    /// over the default, degraded to mono when color is unavailable.
    pub(crate) fn resolve_theme(&self) -> anyhow::Result<Theme> {
        crate::theme::resolve_theme(self.theme.as_deref(), self.no_color, ColorMode::detect())
    }

    /// Time between idle redraws derived from `--fps`.
    #[must_use]
    pub(crate) fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / self.fps.max(1))
    }
}

fn parse_fps(raw: &str) -> Result<u64, String> {
    let value: u64 = raw.parse().map_err(|_| format!("invalid fps '{raw}'"))?;
    if !(MIN_FPS..=MAX_FPS).contains(&value) {
        return Err(format!("fps must be between {MIN_FPS} and {MAX_FPS}"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use callpitch::config::PacingProfile;
    use std::time::Duration;

    #[test]
    fn defaults_cover_the_whole_flag_set() {
        let config = LandingConfig::parse_from(["cli-test"]);
        assert!(config.theme.is_none() || std::env::var("CALLPITCH_THEME").is_ok());
        assert!(!config.no_color);
        assert!(!config.ascii);
        assert!(!config.reduced_motion);
        assert_eq!(config.fps, DEFAULT_FPS);
        assert!(!config.doctor);
        assert!(!config.dump_script);
        assert!(!config.help);
        assert_eq!(config.app.pace, PacingProfile::Standard);
    }

    #[test]
    fn fps_parser_enforces_bounds() {
        assert!(LandingConfig::try_parse_from(["cli-test", "--fps", "9"]).is_err());
        assert!(LandingConfig::try_parse_from(["cli-test", "--fps", "121"]).is_err());
        assert!(LandingConfig::try_parse_from(["cli-test", "--fps", "fast"]).is_err());
        let config = LandingConfig::parse_from(["cli-test", "--fps", "60"]);
        assert_eq!(config.fps, 60);
    }

    #[test]
    fn frame_interval_follows_fps() {
        let config = LandingConfig::parse_from(["cli-test", "--fps", "50"]);
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn flattened_app_flags_still_parse() {
        let config = LandingConfig::parse_from([
            "cli-test",
            "--pace",
            "relaxed",
            "--char-interval-ms",
            "40",
            "--theme",
            "mono",
        ]);
        assert_eq!(config.app.pace, PacingProfile::Relaxed);
        assert_eq!(config.app.char_interval_ms, 40);
        assert_eq!(config.theme.as_deref(), Some("mono"));
    }

    #[test]
    fn short_h_maps_to_custom_help() {
        let config = LandingConfig::parse_from(["cli-test", "-h"]);
        assert!(config.help);
    }
}
