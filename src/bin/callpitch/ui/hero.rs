//! Hero band: particles, headline, animated stats, phone mockup card.

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::app::AppState;
use crate::page::Section;
use crate::phone_mockup::{CALLER_NAME, CONNECTED_LABEL, DECLINED_LABEL, MockupButton};
use crate::theme::GlyphSet;

use super::{centered_line, pad_section, truncate_width};

const HEADLINE: &str = "Answer Every Call with AI";
const TAGLINE: &str = "An AI voice agent that books appointments and never misses a call";
const PARTICLE_ROWS: u16 = 3;
const CARD_INNER: usize = 30;

pub(super) fn lines(app: &AppState, width: u16, now: Instant) -> Vec<Line<'static>> {
    let colors = app.theme.colors();
    let dim = Style::default().fg(colors.dim);
    let mut out = Vec::new();

    out.extend(particle_rows(app, width, now));
    out.push(Line::from(""));
    out.push(centered_line(
        HEADLINE,
        width,
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD),
    ));
    out.push(centered_line(TAGLINE, width, dim));
    out.push(Line::from(""));

    let cta = if app.page.cta_pending() {
        "Starting demo...".to_string()
    } else {
        "[ Enter ] Start the demo".to_string()
    };
    out.push(centered_line(
        &cta,
        width,
        Style::default()
            .fg(colors.accent_alt)
            .add_modifier(Modifier::BOLD),
    ));
    out.push(Line::from(""));

    let sep = format!("   {}   ", app.glyphs.separator());
    let stats = app
        .hero_stats
        .values(now)
        .into_iter()
        .map(|(label, value)| format!("{value} {label}"))
        .collect::<Vec<_>>()
        .join(&sep);
    out.push(centered_line(&stats, width, Style::default().fg(colors.fg)));
    out.push(Line::from(""));

    out.extend(mockup_card(app, width));

    pad_section(out, Section::Hero.height())
}

fn particle_rows(app: &AppState, width: u16, now: Instant) -> Vec<Line<'static>> {
    let colors = app.theme.colors();
    let elapsed = now.saturating_duration_since(app.started_at);
    let positions = app.particles.positions(elapsed, width.max(1), PARTICLE_ROWS);
    let glyph = app.glyphs.particle();

    let mut rows = vec![vec![' '; width as usize]; PARTICLE_ROWS as usize];
    for (x, y) in positions {
        if let Some(cell) = rows
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *cell = glyph;
        }
    }
    rows.into_iter()
        .map(|row| {
            Line::from(Span::styled(
                row.into_iter().collect::<String>(),
                Style::default().fg(colors.accent),
            ))
        })
        .collect()
}

fn mockup_card(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let colors = app.theme.colors();
    let (tl, tr, bl, br, h, v) = match app.glyphs {
        GlyphSet::Unicode => ('┌', '┐', '└', '┘', '─', '│'),
        GlyphSet::Ascii => ('+', '+', '+', '+', '-', '|'),
    };
    let border = Style::default().fg(colors.border);
    let status = app.mockup.status_label();
    let status_style = match status {
        CONNECTED_LABEL => Style::default().fg(colors.success),
        DECLINED_LABEL => Style::default().fg(colors.error),
        _ => Style::default().fg(colors.fg),
    };

    let accept_style = button_style(app, MockupButton::Accept);
    let decline_style = button_style(app, MockupButton::Decline);

    let pad = (width as usize).saturating_sub(CARD_INNER + 2) / 2;
    let indent = " ".repeat(pad);
    let edge = h.to_string().repeat(CARD_INNER);

    let inner = |spans: Vec<Span<'static>>| -> Line<'static> {
        let used: usize = spans
            .iter()
            .map(|span| UnicodeWidthStr::width(span.content.as_ref()))
            .sum();
        let mut all = vec![Span::raw(indent.clone()), Span::styled(v.to_string(), border)];
        all.extend(spans);
        all.push(Span::raw(" ".repeat(CARD_INNER.saturating_sub(used))));
        all.push(Span::styled(v.to_string(), border));
        Line::from(all)
    };

    vec![
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(format!("{tl}{edge}{tr}"), border),
        ]),
        inner(vec![Span::styled(
            truncate_width(&format!(" {} {}", app.glyphs.phone(), CALLER_NAME), CARD_INNER),
            Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
        )]),
        inner(vec![Span::styled(
            truncate_width(&format!(" {status}"), CARD_INNER),
            status_style,
        )]),
        inner(vec![
            Span::raw(" "),
            Span::styled("[A] Accept".to_string(), accept_style),
            Span::raw("  "),
            Span::styled("[D] Decline".to_string(), decline_style),
        ]),
        Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(format!("{bl}{edge}{br}"), border),
        ]),
    ]
}

fn button_style(app: &AppState, button: MockupButton) -> Style {
    let colors = app.theme.colors();
    let base = match button {
        MockupButton::Accept => Style::default().fg(colors.success),
        MockupButton::Decline => Style::default().fg(colors.error),
    };
    if app.mockup.flashing() == Some(button) {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}
