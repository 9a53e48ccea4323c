//! Top navigation row: brand, one tab per section, click hit-testing.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::page::Section;

const BRAND: &str = " CallPitch ";

/// `(start_column, end_column)` of each section tab, matching the render.
fn tab_columns() -> [(u16, u16, Section); Section::COUNT] {
    let mut start = BRAND.len() as u16 + 1;
    let mut out = [(0, 0, Section::Hero); Section::COUNT];
    for (slot, section) in out.iter_mut().zip(Section::all()) {
        let width = section.title().len() as u16 + 2;
        *slot = (start, start + width, section);
        start += width + 1;
    }
    out
}

/// The section whose tab covers column `x`, if any.
pub(crate) fn section_at_column(x: u16, width: u16) -> Option<Section> {
    if x >= width {
        return None;
    }
    tab_columns()
        .iter()
        .find(|(start, end, _)| x >= *start && x < *end)
        .map(|(_, _, section)| *section)
}

pub(crate) fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let colors = app.theme.colors();
    let active = app.page.active_section();

    let brand_style = if app.page.navbar_scrolled() {
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(BRAND.to_string(), brand_style), Span::raw(" ")];
    for section in Section::all() {
        let label = format!(" {} ", section.title());
        let style = if section == active {
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(colors.dim)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
