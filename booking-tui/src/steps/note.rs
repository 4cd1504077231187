use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{RenderContext, StepContext};

/// Which text field receives typed characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteField {
    #[default]
    Title,
    Content,
}

/// Free-text title and note. Typed characters go to the focused field,
/// `Tab` switches fields.
#[derive(Debug, Default)]
pub struct NoteStep {
    pub(crate) mounted: bool,
    focus: NoteField,
}

impl NoteStep {
    pub fn focus(&self) -> NoteField {
        self.focus
    }

    /// Focus starts on the title every time the step is shown
    pub(super) fn mount(&mut self) {
        self.mounted = true;
        self.focus = NoteField::Title;
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent, ctx: StepContext<'_>) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        let field = match self.focus {
            NoteField::Title => &mut ctx.form.title,
            NoteField::Content => &mut ctx.form.content,
        };

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    NoteField::Title => NoteField::Content,
                    NoteField::Content => NoteField::Title,
                };
                true
            }
            KeyCode::Backspace => {
                field.pop();
                true
            }
            KeyCode::Char(c) => {
                field.push(c);
                true
            }
            _ => false,
        }
    }

    pub(super) fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let theme = ctx.theme;
        let [title_area, content_area, hint_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let border = |field: NoteField| {
            if self.focus == field {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.border)
            }
        };

        frame.render_widget(
            Paragraph::new(ctx.form.title.as_str()).block(
                Block::default()
                    .title(" Titel ")
                    .borders(Borders::ALL)
                    .border_style(border(NoteField::Title)),
            ),
            title_area,
        );

        frame.render_widget(
            Paragraph::new(ctx.form.content.as_str())
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title(" Notiz ")
                        .borders(Borders::ALL)
                        .border_style(border(NoteField::Content)),
                ),
            content_area,
        );

        frame.render_widget(
            Paragraph::new("Tab wechselt das Feld, ← zurück, Enter weiter").style(theme.dim),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::BookingForm;
    use booking_core::Catalog;

    fn press(step: &mut NoteStep, form: &mut BookingForm, key: KeyEvent) -> bool {
        step.handle_key(
            key,
            StepContext {
                form,
                catalog: &Catalog::default(),
            },
        )
    }

    fn char_key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn typing_fills_focused_field() {
        let mut step = NoteStep::default();
        let mut form = BookingForm::default();

        for c in "hq1".chars() {
            assert!(press(&mut step, &mut form, char_key(c)));
        }
        press(&mut step, &mut form, KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        press(&mut step, &mut form, char_key('x'));

        assert_eq!(form.title, "hq1");
        assert_eq!(form.content, "x");
        assert_eq!(step.focus(), NoteField::Content);
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut step = NoteStep::default();
        let mut form = BookingForm {
            title: "ab".into(),
            ..Default::default()
        };

        press(
            &mut step,
            &mut form,
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
        );
        assert_eq!(form.title, "a");
    }

    #[test]
    fn control_chords_and_navigation_pass_through() {
        let mut step = NoteStep::default();
        let mut form = BookingForm::default();

        assert!(!press(
            &mut step,
            &mut form,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert!(!press(
            &mut step,
            &mut form,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
        ));
        assert!(form.title.is_empty());
    }

    #[test]
    fn mount_resets_focus() {
        let mut step = NoteStep::default();
        let mut form = BookingForm::default();
        press(&mut step, &mut form, KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));

        step.mount();
        assert_eq!(step.focus(), NoteField::Title);
    }
}
