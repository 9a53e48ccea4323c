//! Bottom status row: key hints on the left, active notices on the right.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::AppState;

use super::truncate_width;

pub(crate) fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let colors = app.theme.colors();
    let sep = app.glyphs.separator();
    let hints = format!(
        " q quit {sep} s/e call {sep} t theme {sep} m motion {sep} 1-4 sections"
    );

    let mut spans = vec![Span::styled(
        hints.clone(),
        Style::default().fg(colors.dim),
    )];

    if app.notices.has_active() {
        let mut right = String::new();
        for notice in app.notices.visible() {
            right.push_str(&format!("  [{}] {}", notice.severity.label(), notice.message));
        }
        let right = right.trim_start().to_string();
        let used = UnicodeWidthStr::width(hints.as_str());
        let avail = (area.width as usize).saturating_sub(used + 2);
        let clipped = truncate_width(&right, avail);
        let pad = avail.saturating_sub(UnicodeWidthStr::width(clipped.as_str()));
        spans.push(Span::raw(" ".repeat(pad)));
        // Color the block by the newest notice's severity.
        if let Some(latest) = app.notices.latest() {
            spans.push(Span::styled(
                clipped,
                Style::default()
                    .fg(latest.severity.color(&colors))
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
