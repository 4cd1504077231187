use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::RenderContext;

/// Read-only overview; advancing from here submits the note.
#[derive(Debug, Default)]
pub struct SummaryStep {
    pub(crate) mounted: bool,
}

impl SummaryStep {
    pub(super) fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let theme = ctx.theme;

        let mut lines: Vec<Line> = ctx
            .form
            .summary_lines(ctx.catalog)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.fg))))
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Titel: ", Style::default().fg(theme.fg)),
            Span::styled(ctx.form.title.clone(), theme.bold),
        ]));
        if !ctx.form.content.is_empty() {
            lines.push(Line::from(Span::styled(ctx.form.content.clone(), theme.dim)));
        }
        lines.push(Line::from(""));

        match ctx.submitted {
            Some(note) => lines.push(Line::from(Span::styled(
                format!("Gesendet als Notiz #{}. Enter beendet.", note.id),
                Style::default().fg(theme.success),
            ))),
            None => lines.push(Line::from(Span::styled(
                "Enter sendet die Buchung.",
                Style::default().fg(theme.accent),
            ))),
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }
}
