//! Doctor-report assembly that surfaces runtime diagnostics and environment mismatches.

use std::{env, fmt::Display};

use crossterm::terminal::size as terminal_size;

use crate::config::AppConfig;
use crate::telemetry::{crash_log_path, tracing_log_path};

/// Structured text report builder used by `--doctor`.
pub struct DoctorReport {
    lines: Vec<String>,
}

impl DoctorReport {
    /// Create a new report with the provided title line.
    pub fn new(title: &str) -> Self {
        Self {
            lines: vec![title.to_string()],
        }
    }

    /// Append a section heading and blank separator line.
    pub fn section(&mut self, title: &str) {
        self.lines.push(String::new());
        self.lines.push(format!("{title}:"));
    }

    /// Append a `key: value` line in doctor output format.
    pub fn push_kv(&mut self, key: &str, value: impl Display) {
        self.lines.push(format!("  {key}: {value}"));
    }

    /// Append a raw line without key/value formatting.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Render the full report as newline-separated text.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Build the baseline doctor report for the landing binary.
pub fn base_doctor_report(config: &AppConfig, binary_name: &str) -> DoctorReport {
    let mut report = DoctorReport::new("CallPitch Doctor");
    report.push_kv("version", env!("CARGO_PKG_VERSION"));
    report.push_kv("binary", binary_name);
    report.push_kv("os", format!("{}/{}", env::consts::OS, env::consts::ARCH));

    report.section("Terminal");
    match terminal_size() {
        Ok((cols, rows)) => report.push_kv("size", format!("{cols}x{rows}")),
        Err(err) => report.push_kv("size", format!("error: {err}")),
    }
    if let Ok(term) = env::var("TERM") {
        report.push_kv("term", term);
    }
    if let Ok(colorterm) = env::var("COLORTERM") {
        report.push_kv("colorterm", colorterm);
    }
    if let Some(term_program) = format_term_program_for_report() {
        report.push_kv("term_program", term_program);
    }
    if env::var("NO_COLOR").is_ok() {
        report.push_kv("no_color", "set");
    }
    report.push_kv("color_mode", detect_color_mode());
    report.push_kv("unicode", detect_unicode_support());

    report.section("Config");
    let logs_enabled = (config.logs || config.log_timings) && !config.no_logs;
    report.push_kv("logs", if logs_enabled { "enabled" } else { "disabled" });
    report.push_kv("trace_log", tracing_log_path().display());
    report.push_kv("crash_log", crash_log_path().display());
    report.push_kv("pace", config.pace);
    report.push_kv("char_interval_ms", config.char_interval_ms);

    report.section("Script");
    match &config.script {
        Some(path) => report.push_kv("source", path.display()),
        None => report.push_kv("source", "builtin"),
    }
    match config.resolve_script() {
        Ok(script) => {
            report.push_kv("validation", "ok");
            report.push_kv("title", &script.title);
            report.push_kv("turns", script.turn_count());
        }
        Err(err) => report.push_kv("validation", format!("error: {err:#}")),
    }

    report
}

fn format_term_program_for_report() -> Option<String> {
    let term_program = env::var("TERM_PROGRAM").ok()?;
    let version = env::var("TERM_PROGRAM_VERSION").unwrap_or_else(|_| "unknown".to_string());
    Some(format!("{term_program} ({version})"))
}

fn detect_color_mode() -> String {
    if env::var("NO_COLOR").is_ok() {
        return "none (NO_COLOR)".to_string();
    }
    if let Ok(colorterm) = env::var("COLORTERM") {
        let value = colorterm.to_lowercase();
        if value == "truecolor" || value == "24bit" {
            return format!("truecolor (COLORTERM={colorterm})");
        }
    }
    if let Ok(term) = env::var("TERM") {
        let value = term.to_lowercase();
        if value.contains("256color") || value.contains("256-color") {
            return format!("256 (TERM={term})");
        }
        if value.contains("color") || value.contains("xterm") || value.contains("screen") {
            return format!("ansi (TERM={term})");
        }
        if value == "dumb" {
            return "none (TERM=dumb)".to_string();
        }
    }
    "ansi (default)".to_string()
}

fn detect_unicode_support() -> String {
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = env::var(key) {
            let upper = value.to_ascii_uppercase();
            if upper.contains("UTF-8") || upper.contains("UTF8") {
                return format!("likely ({key}={value})");
            }
            return format!("unknown ({key}={value})");
        }
    }
    "unknown (locale env not set)".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::sync::{Mutex, OnceLock};

    fn with_env_lock<T>(f: impl FnOnce() -> T) -> T {
        static ENV_GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        let _guard = ENV_GUARD
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        f()
    }

    fn set_or_clear_env(key: &str, value: Option<&str>) {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    fn with_env_vars<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
        with_env_lock(|| {
            let prev: Vec<(String, Option<String>)> = vars
                .iter()
                .map(|(key, _)| ((*key).to_string(), env::var(key).ok()))
                .collect();
            for (key, value) in vars {
                set_or_clear_env(key, *value);
            }
            let result = f();
            for (key, value) in prev {
                set_or_clear_env(&key, value.as_deref());
            }
            result
        })
    }

    fn test_config() -> AppConfig {
        AppConfig::parse_from(["doctor-test"])
    }

    #[test]
    fn report_builder_formats_sections_and_pairs() {
        let mut report = DoctorReport::new("Title");
        report.section("Block");
        report.push_kv("key", "value");
        report.push_line("raw");
        assert_eq!(report.render(), "Title\n\nBlock:\n  key: value\nraw");
    }

    #[test]
    fn format_term_program_reads_program_and_version() {
        with_env_vars(
            &[
                ("TERM_PROGRAM", Some("vscode")),
                ("TERM_PROGRAM_VERSION", Some("1.97.0")),
            ],
            || {
                assert_eq!(
                    format_term_program_for_report(),
                    Some("vscode (1.97.0)".to_string())
                );
            },
        );
    }

    #[test]
    fn format_term_program_is_none_without_env() {
        with_env_vars(
            &[("TERM_PROGRAM", None), ("TERM_PROGRAM_VERSION", None)],
            || {
                assert_eq!(format_term_program_for_report(), None);
            },
        );
    }

    #[test]
    fn detect_color_mode_honors_no_color_first() {
        with_env_vars(
            &[
                ("NO_COLOR", Some("1")),
                ("COLORTERM", Some("truecolor")),
                ("TERM", Some("xterm-256color")),
            ],
            || {
                assert_eq!(detect_color_mode(), "none (NO_COLOR)");
            },
        );
    }

    #[test]
    fn detect_color_mode_prefers_truecolor_over_term() {
        with_env_vars(
            &[
                ("NO_COLOR", None),
                ("COLORTERM", Some("truecolor")),
                ("TERM", Some("xterm-256color")),
            ],
            || {
                assert_eq!(detect_color_mode(), "truecolor (COLORTERM=truecolor)");
            },
        );
    }

    #[test]
    fn base_report_covers_script_and_config_sections() {
        with_env_vars(
            &[("CALLPITCH_TRACE_LOG", None), ("CALLPITCH_CRASH_LOG", None)],
            || {
                let report = base_doctor_report(&test_config(), "callpitch");
                let text = report.render();
                assert!(text.starts_with("CallPitch Doctor"));
                assert!(text.contains("binary: callpitch"));
                assert!(text.contains("Script:"));
                assert!(text.contains("source: builtin"));
                assert!(text.contains("validation: ok"));
                assert!(text.contains("turns: 9"));
                assert!(text.contains("logs: disabled"));
            },
        );
    }

    #[test]
    fn base_report_flags_unreadable_script() {
        let cfg = AppConfig::parse_from([
            "doctor-test",
            "--script",
            "/nonexistent/callpitch-script.toml",
        ]);
        let text = base_doctor_report(&cfg, "callpitch").render();
        assert!(text.contains("source: /nonexistent/callpitch-script.toml"));
        assert!(text.contains("validation: error"));
    }
}
