use booking_core::HardwareItem;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::{RenderContext, StepContext};

/// Pick one visible catalog item.
///
/// `↑`/`↓` (or `k`/`j`) move the cursor, `Space` chooses the item under it.
#[derive(Debug, Default)]
pub struct HardwareStep {
    pub(crate) mounted: bool,
    cursor: usize,
}

impl HardwareStep {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent, ctx: StepContext<'_>) -> bool {
        let items: Vec<&HardwareItem> = ctx.catalog.visible().collect();
        if items.is_empty() {
            return false;
        }
        self.cursor = self.cursor.min(items.len() - 1);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(items.len() - 1);
                true
            }
            KeyCode::Char(' ') => {
                ctx.form.hardware = Some(items[self.cursor].id.clone());
                true
            }
            _ => false,
        }
    }

    pub(super) fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let theme = ctx.theme;
        let chosen = ctx.form.hardware.as_deref();

        let items: Vec<ListItem> = ctx
            .catalog
            .visible()
            .map(|item| {
                let marker = if chosen == Some(item.id.as_str()) {
                    "[x] "
                } else {
                    "[ ] "
                };
                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    Span::styled(item.name.clone(), theme.bold),
                ];
                if let Some(label) = item.hourly_cost_label() {
                    spans.push(Span::styled(format!("  {label}"), theme.dim));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let [list_area, detail_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(6)]).areas(area);

        if items.is_empty() {
            frame.render_widget(
                Paragraph::new("Keine Hardware verfügbar.").style(theme.dim),
                list_area,
            );
            return;
        }

        let cursor = self.cursor.min(items.len() - 1);
        let list = List::new(items).highlight_style(
            Style::default()
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD),
        );
        let mut state = ListState::default().with_selected(Some(cursor));
        frame.render_stateful_widget(list, list_area, &mut state);

        if let Some(item) = ctx.catalog.visible().nth(cursor) {
            let specs: Vec<Line> = item
                .specs
                .iter()
                .map(|spec| Line::from(format!("  • {spec}")))
                .collect();
            frame.render_widget(Paragraph::new(specs).style(theme.dim), detail_area);
        }
    }
}
