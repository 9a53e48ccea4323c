//! Live demo panel: call status, duration, and the typed transcript window.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use callpitch::script::Speaker;
use callpitch::sequencer::{STATUS_ACTIVE, STATUS_ENDED};

use crate::app::AppState;
use crate::page::Section;

use super::{pad_section, section_header, truncate_width};

/// Transcript rows available inside the section; two rows per entry.
const TRANSCRIPT_ROWS: usize = 12;

pub(super) fn lines(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let colors = app.theme.colors();
    let seq = &app.sequencer;

    let mut out = vec![Line::from("")];
    out.extend(section_header(
        "Live Demo",
        width,
        app.glyphs.rule(),
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD),
        Style::default().fg(colors.border),
    ));

    let status = seq.status_line();
    let status_style = match status {
        STATUS_ACTIVE => Style::default().fg(colors.success),
        STATUS_ENDED => Style::default().fg(colors.warning),
        _ => Style::default().fg(colors.dim),
    };
    out.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(status.to_string(), status_style),
        Span::styled(
            format!("  {}  ", app.glyphs.separator()),
            Style::default().fg(colors.border),
        ),
        Span::styled(
            seq.duration_display().to_string(),
            Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
        ),
    ]));
    out.push(Line::from(""));

    let entries = seq.transcript();
    let visible = TRANSCRIPT_ROWS / 2;
    let start = entries.len().saturating_sub(visible);
    for entry in &entries[start..] {
        let speaker_color = match entry.turn.speaker {
            Speaker::User => colors.user_speaker,
            Speaker::Agent => colors.agent_speaker,
        };
        let text = format!(
            "  {:<4} {}",
            entry.turn.speaker.label(),
            entry.visible_text()
        );
        out.push(Line::from(Span::styled(
            truncate_width(&text, width as usize),
            Style::default().fg(speaker_color),
        )));
        let annotation = entry.turn.annotation(app.glyphs.separator());
        out.push(Line::from(Span::styled(
            truncate_width(&format!("       {annotation}"), width as usize),
            Style::default().fg(colors.dim).add_modifier(Modifier::ITALIC),
        )));
    }
    // Keep the hint row at a stable offset below the transcript window.
    while out.len() < 5 + TRANSCRIPT_ROWS {
        out.push(Line::from(""));
    }

    if seq.conversation_complete() {
        out.push(Line::from(Span::styled(
            "  Conversation complete - press E to end the call".to_string(),
            Style::default().fg(colors.warning),
        )));
    } else {
        out.push(Line::from(""));
    }
    out.push(Line::from(Span::styled(
        format!(
            "  S start {sep} E end {sep} click the panel to start",
            sep = app.glyphs.separator()
        ),
        Style::default().fg(colors.dim),
    )));

    pad_section(out, Section::Demo.height())
}
