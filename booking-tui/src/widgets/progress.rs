//! Step progress bar.
//!
//! Shows every step title with the active one highlighted, plus a hint line
//! that depends on whether the wizard is on its first or last step.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::Theme;

/// Snapshot of the controller state for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressWidget {
    pub titles: Vec<String>,
    pub active: usize,
    pub is_first: bool,
    pub is_last: bool,
}

impl ProgressWidget {
    /// "Schritt N von M"
    pub fn position_label(&self) -> String {
        format!("Schritt {} von {}", self.active + 1, self.titles.len())
    }

    /// Which navigation keys currently do something
    pub fn hint(&self) -> String {
        let mut parts = Vec::new();
        if !self.is_first {
            parts.push("← zurück");
        }
        parts.push(if self.is_last {
            "Enter senden"
        } else {
            "→ weiter"
        });
        parts.push("1-9 springen");
        parts.push("q beenden");
        parts.join("   ")
    }

    /// Step titles separated by arrows, active one highlighted
    pub fn to_paragraph(&self, theme: &Theme) -> Paragraph<'_> {
        let mut spans = vec![Span::styled(
            format!("{}  ", self.position_label()),
            Style::default().fg(theme.fg),
        )];

        for (index, title) in self.titles.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" › ", Style::default().fg(theme.border)));
            }
            let style = if index == self.active {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if index < self.active {
                Style::default().fg(theme.done)
            } else {
                Style::default().fg(theme.pending)
            };
            spans.push(Span::styled(format!("{} {}", index + 1, title), style));
        }

        Paragraph::new(vec![
            Line::from(spans),
            Line::from(Span::styled(self.hint(), theme.dim)),
        ])
    }
}
