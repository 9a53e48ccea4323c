//! Feature cards, dimmed until the section first scrolls into view.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::AppState;
use crate::page::Section;

use super::{pad_section, section_header, truncate_width};

const FEATURES: [(&str, &str); 3] = [
    (
        "24/7 Availability",
        "Every call answered, day or night, holidays included",
    ),
    (
        "Natural Conversations",
        "Human-sounding voice with emotion and tone control",
    ),
    (
        "Instant Scheduling",
        "Appointments booked straight into your calendar",
    ),
];

pub(super) fn lines(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let colors = app.theme.colors();
    let revealed = app.page.is_revealed(Section::Features);

    let title_style = if revealed {
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.dim)
    };
    let card_title = if revealed {
        Style::default().fg(colors.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.dim)
    };
    let card_body = Style::default().fg(colors.dim);

    let mut out = vec![Line::from("")];
    out.extend(section_header(
        "Features",
        width,
        app.glyphs.rule(),
        title_style,
        Style::default().fg(colors.border),
    ));
    out.push(Line::from(""));

    let bullet = app.glyphs.bullet();
    for (title, body) in FEATURES {
        out.push(Line::from(Span::styled(
            truncate_width(&format!("  {bullet} {title}"), width as usize),
            card_title,
        )));
        out.push(Line::from(Span::styled(
            truncate_width(&format!("    {body}"), width as usize),
            card_body,
        )));
        out.push(Line::from(""));
    }

    pad_section(out, Section::Features.height())
}
