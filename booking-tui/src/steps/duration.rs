use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{RenderContext, StepContext};
use crate::form::MAX_HOURS;

/// Number of hours to book, adjusted with `↑`/`↓` or `+`/`-`.
#[derive(Debug, Default)]
pub struct DurationStep {
    pub(crate) mounted: bool,
}

impl DurationStep {
    pub(super) fn handle_key(&mut self, key: KeyEvent, ctx: StepContext<'_>) -> bool {
        let hours = &mut ctx.form.hours;
        match key.code {
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('k') => {
                *hours = (*hours + 1).min(MAX_HOURS);
                true
            }
            KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('j') => {
                *hours = hours.saturating_sub(1).max(1);
                true
            }
            _ => false,
        }
    }

    pub(super) fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let theme = ctx.theme;
        let hours = ctx.form.hours;

        let value = if hours == 0 {
            Span::styled("– nicht gewählt –", theme.dim)
        } else {
            Span::styled(format!("{hours} Stunden"), theme.bold)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Dauer: ", Style::default().fg(theme.fg)),
                value,
            ]),
            Line::from(""),
        ];

        if let Some(total) = ctx.form.total_cost(ctx.catalog) {
            lines.push(Line::from(vec![
                Span::styled("Kosten: ", Style::default().fg(theme.fg)),
                Span::styled(
                    booking_core::format_eur(total),
                    Style::default().fg(theme.accent),
                ),
            ]));
        }

        lines.push(Line::from(Span::styled(
            format!("↑/↓ ändern (1 bis {MAX_HOURS} Stunden)"),
            theme.dim,
        )));

        frame.render_widget(Paragraph::new(lines), area);
    }
}
