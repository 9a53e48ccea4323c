//! Rendering: one virtual page of fixed-height sections under a navbar,
//! scrolled as a single paragraph, with a status row at the bottom.

pub(crate) mod navbar;

mod demo;
mod features;
mod hero;
mod statusbar;
mod technology;

use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::AppState;

pub(crate) fn draw(frame: &mut Frame, app: &AppState, now: Instant) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    navbar::render(frame, areas[0], app);

    let body = areas[1];
    let mut lines = Vec::new();
    lines.extend(hero::lines(app, body.width, now));
    lines.extend(features::lines(app, body.width));
    lines.extend(demo::lines(app, body.width));
    lines.extend(technology::lines(app, body.width));

    let page = Paragraph::new(Text::from(lines))
        .scroll((app.page.scroll_rows(body.height), 0));
    frame.render_widget(page, body);

    statusbar::render(frame, areas[2], app);
}

/// Clip or pad a section's lines to its fixed height so offsets stay exact.
fn pad_section(mut lines: Vec<Line<'static>>, height: u16) -> Vec<Line<'static>> {
    lines.truncate(height as usize);
    while lines.len() < height as usize {
        lines.push(Line::from(""));
    }
    lines
}

/// Truncate to a display width on character boundaries.
fn truncate_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// A single centered span, clipped to the viewport width.
fn centered_line(text: &str, width: u16, style: Style) -> Line<'static> {
    let clipped = truncate_width(text, width as usize);
    let pad = (width as usize).saturating_sub(UnicodeWidthStr::width(clipped.as_str())) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(clipped, style),
    ])
}

/// Section header plus a horizontal rule underneath.
fn section_header(
    title: &str,
    width: u16,
    rule: char,
    title_style: Style,
    rule_style: Style,
) -> Vec<Line<'static>> {
    let rule_width = (width as usize).saturating_sub(4).min(40);
    vec![
        Line::from(Span::styled(format!("  {title}"), title_style)),
        Line::from(Span::styled(
            format!("  {}", rule.to_string().repeat(rule_width)),
            rule_style,
        )),
    ]
}
