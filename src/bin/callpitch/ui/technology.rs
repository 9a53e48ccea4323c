//! Technology section: a short bulleted stack description.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::AppState;
use crate::page::Section;

use super::{pad_section, section_header, truncate_width};

const STACK: [&str; 4] = [
    "Speech synthesis with controllable emotion, tone, and voice style",
    "Low-latency call streaming",
    "Scripted dialogue playback with natural pacing",
    "Calendar and CRM integrations",
];

pub(super) fn lines(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let colors = app.theme.colors();
    let revealed = app.page.is_revealed(Section::Technology);
    let body_style = if revealed {
        Style::default().fg(colors.fg)
    } else {
        Style::default().fg(colors.dim)
    };

    let mut out = vec![Line::from("")];
    out.extend(section_header(
        "Technology",
        width,
        app.glyphs.rule(),
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD),
        Style::default().fg(colors.border),
    ));
    out.push(Line::from(""));

    let bullet = app.glyphs.bullet();
    for item in STACK {
        out.push(Line::from(Span::styled(
            truncate_width(&format!("  {bullet} {item}"), width as usize),
            body_style,
        )));
    }

    pad_section(out, Section::Technology.height())
}
