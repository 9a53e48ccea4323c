//! Grouped CLI help renderer so `--help` scans by concern instead of alphabet.

use std::collections::BTreeMap;

use clap::{Arg, CommandFactory};
use unicode_width::UnicodeWidthStr;

use crate::cli::LandingConfig;

const FLAG_COL: usize = 30;
const HELP_WIDTH: usize = 90;
const HELP_FOOTER: &str = "Tip: use --no-color or NO_COLOR=1 for plain output";

struct GroupSpec {
    title: &'static str,
    longs: &'static [&'static str],
}

const GROUPS: &[GroupSpec] = &[
    GroupSpec {
        title: "Demo",
        longs: &["script", "pace", "char-interval-ms"],
    },
    GroupSpec {
        title: "Appearance",
        longs: &["theme", "no-color", "ascii", "reduced-motion", "fps"],
    },
    GroupSpec {
        title: "Logging",
        longs: &["logs", "log-timings", "no-logs"],
    },
    GroupSpec {
        title: "Diagnostics",
        longs: &["doctor", "dump-script", "help", "version"],
    },
];

#[derive(Clone)]
struct HelpArgMeta {
    id: String,
    long: Option<String>,
    short: Option<char>,
    help: String,
    defaults: Vec<String>,
    env: Option<String>,
    takes_value: bool,
}

impl HelpArgMeta {
    fn from_arg(arg: &Arg) -> Self {
        let help = arg
            .get_help()
            .map(std::string::ToString::to_string)
            .unwrap_or_default();
        let defaults = arg
            .get_default_values()
            .iter()
            .map(|value| value.to_string_lossy().to_string())
            .collect();
        let env = arg
            .get_env()
            .map(|value| value.to_string_lossy().to_string());
        Self {
            id: arg.get_id().to_string(),
            long: arg.get_long().map(str::to_string),
            short: arg.get_short(),
            help,
            defaults,
            env,
            takes_value: arg.get_action().takes_values(),
        }
    }

    fn label(&self) -> String {
        let value_hint = if self.takes_value {
            format!(" <{}>", self.id.to_uppercase())
        } else {
            String::new()
        };
        match (self.short, self.long.as_deref()) {
            (Some(short), Some(long)) => format!("-{short}, --{long}{value_hint}"),
            (None, Some(long)) => format!("--{long}{value_hint}"),
            (Some(short), None) => format!("-{short}{value_hint}"),
            (None, None) => self.id.clone(),
        }
    }

    fn details(&self) -> Vec<String> {
        let mut details = Vec::new();
        if let Some(env) = &self.env {
            details.push(format!("[env: {env}]"));
        }
        // Boolean "false" defaults are noise; only show meaningful ones.
        let default = self.defaults.join(",");
        if self.takes_value && !default.is_empty() {
            details.push(format!("[default: {default}]"));
        }
        if details.is_empty() {
            Vec::new()
        } else {
            vec![details.join(" ")]
        }
    }
}

struct HelpSection {
    title: &'static str,
    entries: Vec<HelpArgMeta>,
}

pub(crate) fn print_grouped_help() {
    println!("{}", render_grouped_help());
}

pub(crate) fn render_grouped_help() -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "callpitch v{} - terminal landing page with a scripted AI call demo",
        env!("CARGO_PKG_VERSION")
    ));
    lines.push(String::new());
    lines.push("Usage: callpitch [OPTIONS]".to_string());
    lines.push(String::new());

    for (idx, section) in grouped_sections().iter().enumerate() {
        lines.push(format!("[{}]", section.title));
        for entry in &section.entries {
            let label = entry.label();
            let pad = FLAG_COL.saturating_sub(UnicodeWidthStr::width(label.as_str()));
            for (line_idx, chunk) in wrap_words(&entry.help, HELP_WIDTH - FLAG_COL - 4)
                .iter()
                .enumerate()
            {
                if line_idx == 0 {
                    lines.push(format!("  {label}{} {chunk}", " ".repeat(pad)));
                } else {
                    lines.push(format!("  {} {chunk}", " ".repeat(FLAG_COL)));
                }
            }
            for detail in entry.details() {
                lines.push(format!("  {} {detail}", " ".repeat(FLAG_COL)));
            }
        }
        if idx + 1 < GROUPS.len() {
            lines.push(String::new());
        }
    }

    lines.push(String::new());
    lines.push(HELP_FOOTER.to_string());
    lines.join("\n")
}

fn grouped_sections() -> Vec<HelpSection> {
    let mut by_long = BTreeMap::<String, HelpArgMeta>::new();
    let mut no_long = Vec::<HelpArgMeta>::new();
    for entry in collect_help_args() {
        if let Some(long) = &entry.long {
            by_long.insert(long.clone(), entry.clone());
        } else {
            no_long.push(entry);
        }
    }

    let mut sections = Vec::new();
    for spec in GROUPS {
        let mut entries = Vec::new();
        for long in spec.longs {
            if let Some(entry) = by_long.remove(*long) {
                entries.push(entry);
            }
        }
        if !entries.is_empty() {
            sections.push(HelpSection {
                title: spec.title,
                entries,
            });
        }
    }

    if !by_long.is_empty() || !no_long.is_empty() {
        let mut entries: Vec<HelpArgMeta> = by_long.into_values().collect();
        entries.extend(no_long);
        entries.sort_by_key(HelpArgMeta::label);
        sections.push(HelpSection {
            title: "Other",
            entries,
        });
    }
    sections
}

fn collect_help_args() -> Vec<HelpArgMeta> {
    LandingConfig::command()
        .get_arguments()
        .filter(|arg| !arg.is_hide_set())
        .map(HelpArgMeta::from_arg)
        .collect()
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty()
            && UnicodeWidthStr::width(current.as_str()) + 1 + UnicodeWidthStr::width(word) > width
        {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}
