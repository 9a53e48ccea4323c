//! Page palettes as semantic ratatui color tokens so widgets never hardcode colors.

use ratatui::style::Color;

use crate::color_mode::ColorMode;

/// Available page palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Theme {
    /// Indigo accent on a dark slate ground, matching the original page.
    #[default]
    Midnight,
    Daylight,
    Mono,
}

impl Theme {
    pub(crate) const NAMES: &'static [&'static str] = &["midnight", "daylight", "mono"];

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "midnight" => Some(Self::Midnight),
            "daylight" => Some(Self::Daylight),
            "mono" => Some(Self::Mono),
            _ => None,
        }
    }

    #[must_use]
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Midnight => "midnight",
            Self::Daylight => "daylight",
            Self::Mono => "mono",
        }
    }

    /// The next theme in cycle order, skipping nothing.
    #[must_use]
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Midnight => Self::Daylight,
            Self::Daylight => Self::Mono,
            Self::Mono => Self::Midnight,
        }
    }

    #[must_use]
    pub(crate) fn colors(self) -> ThemeColors {
        match self {
            Self::Midnight => ThemeColors {
                accent: Color::Rgb(99, 102, 241),
                accent_alt: Color::Rgb(139, 92, 246),
                fg: Color::Rgb(226, 232, 240),
                dim: Color::Rgb(100, 116, 139),
                success: Color::Rgb(16, 185, 129),
                warning: Color::Rgb(245, 158, 11),
                error: Color::Rgb(239, 68, 68),
                border: Color::Rgb(51, 65, 85),
                user_speaker: Color::Rgb(56, 189, 248),
                agent_speaker: Color::Rgb(129, 140, 248),
            },
            Self::Daylight => ThemeColors {
                accent: Color::Rgb(67, 56, 202),
                accent_alt: Color::Rgb(109, 40, 217),
                fg: Color::Rgb(30, 41, 59),
                dim: Color::Rgb(148, 163, 184),
                success: Color::Rgb(5, 150, 105),
                warning: Color::Rgb(217, 119, 6),
                error: Color::Rgb(220, 38, 38),
                border: Color::Rgb(203, 213, 225),
                user_speaker: Color::Rgb(2, 132, 199),
                agent_speaker: Color::Rgb(79, 70, 229),
            },
            Self::Mono => ThemeColors {
                accent: Color::Reset,
                accent_alt: Color::Reset,
                fg: Color::Reset,
                dim: Color::DarkGray,
                success: Color::Reset,
                warning: Color::Reset,
                error: Color::Reset,
                border: Color::DarkGray,
                user_speaker: Color::Reset,
                agent_speaker: Color::Reset,
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Semantic color tokens all widgets draw through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ThemeColors {
    pub(crate) accent: Color,
    pub(crate) accent_alt: Color,
    pub(crate) fg: Color,
    pub(crate) dim: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) error: Color,
    pub(crate) border: Color,
    pub(crate) user_speaker: Color,
    pub(crate) agent_speaker: Color,
}

/// Glyphs drawn around the page, with an ASCII fallback set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GlyphSet {
    Unicode,
    Ascii,
}

impl GlyphSet {
    /// Pick the glyph set from the locale unless the user forced ASCII.
    pub(crate) fn detect(force_ascii: bool) -> Self {
        if force_ascii {
            return Self::Ascii;
        }
        for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
            if let Ok(value) = std::env::var(key) {
                let upper = value.to_ascii_uppercase();
                if upper.contains("UTF-8") || upper.contains("UTF8") {
                    return Self::Unicode;
                }
            }
        }
        Self::Ascii
    }

    #[must_use]
    pub(crate) fn particle(self) -> char {
        match self {
            Self::Unicode => '·',
            Self::Ascii => '.',
        }
    }

    #[must_use]
    pub(crate) fn bullet(self) -> &'static str {
        match self {
            Self::Unicode => "▸",
            Self::Ascii => ">",
        }
    }

    #[must_use]
    pub(crate) fn separator(self) -> &'static str {
        match self {
            Self::Unicode => "·",
            Self::Ascii => "|",
        }
    }

    #[must_use]
    pub(crate) fn rule(self) -> char {
        match self {
            Self::Unicode => '─',
            Self::Ascii => '-',
        }
    }

    #[must_use]
    pub(crate) fn phone(self) -> &'static str {
        match self {
            Self::Unicode => "📞",
            Self::Ascii => "(tel)",
        }
    }
}

/// Resolve the theme from flag/env/preferences, honoring color support.
///
/// A theme name the page does not know is an error; no color support (or
/// `--no-color`/`NO_COLOR`) degrades every theme to mono.
pub(crate) fn resolve_theme(
    requested: Option<&str>,
    no_color: bool,
    color_mode: ColorMode,
) -> anyhow::Result<Theme> {
    let theme = match requested {
        Some(name) => Theme::from_name(name).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown theme '{name}'. Available: {}",
                Theme::NAMES.join(", ")
            )
        })?,
        None => Theme::default(),
    };
    if no_color || !color_mode.supports_color() {
        return Ok(Theme::Mono);
    }
    Ok(theme)
}
