//! Main application struct and event loop for the booking wizard.

use std::io;
use std::time::Duration;

use anyhow::Context;
use booking_core::{
    Catalog, FlowDefinition, Note, StepHost, Steps, WizardError, WizardHandle, WizardSession,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

use crate::client::NotesClient;
use crate::form::BookingForm;
use crate::keybindings::{Action, KeyBindings};
use crate::steps::{BookingStep, RenderContext, StepContext};
use crate::widgets::ProgressWidget;
use crate::{BookingTerminal, Theme, booking_default, restore_terminal, setup_terminal};

const BUNDLED_FLOW: &str = include_str!("flow.toml");

/// The flow used when none is configured
pub fn bundled_flow() -> Result<FlowDefinition, WizardError> {
    FlowDefinition::from_toml(BUNDLED_FLOW)
}

/// Message shown below the active step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Terminal booking wizard.
#[derive(Debug)]
pub struct App {
    session: WizardSession,
    handle: WizardHandle,
    steps: Steps<BookingStep>,
    host: StepHost,
    pub title: String,
    pub form: BookingForm,
    pub catalog: Catalog,
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub client: Option<NotesClient>,
    pub running: bool,
    pub status: Option<Status>,
    /// The note created by the summary step
    pub submitted: Option<Note>,
}

impl App {
    /// Compose the flow's steps and register them with a fresh session.
    pub fn new(flow: &FlowDefinition, catalog: Catalog) -> Result<Self, WizardError> {
        let steps = Steps::compose(&flow.children, BookingStep::for_child)?;
        let session = WizardSession::new();
        let handle = session.handle();

        let mut app = Self {
            session,
            handle,
            steps,
            host: StepHost::new(),
            title: flow.title.clone(),
            form: BookingForm::default(),
            catalog,
            keybindings: KeyBindings::default(),
            theme: booking_default(),
            client: None,
            running: true,
            status: None,
            submitted: None,
        };
        app.refresh()?;
        Ok(app)
    }

    /// App for the bundled flow
    pub fn bundled(catalog: Catalog) -> Result<Self, WizardError> {
        Self::new(&bundled_flow()?, catalog)
    }

    pub fn with_client(mut self, client: NotesClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn handle(&self) -> &WizardHandle {
        &self.handle
    }

    pub fn steps(&self) -> &Steps<BookingStep> {
        &self.steps
    }

    /// Index of the mounted step body
    pub fn mounted(&self) -> Option<usize> {
        self.host.mounted()
    }

    /// Register the steps and mount the active body.
    fn refresh(&mut self) -> Result<(), WizardError> {
        self.steps.sync(&self.handle)?;
        self.host.update(&mut self.steps, &self.handle)?;
        Ok(())
    }

    /// Handles a key event.
    ///
    /// Ctrl-C always quits. Otherwise the active body sees the key first and
    /// wizard-level bindings apply to whatever it leaves alone.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if let Some(index) = self.host.mounted()
            && let Some(step) = self.steps.get_mut(index)
        {
            let ctx = StepContext {
                form: &mut self.form,
                catalog: &self.catalog,
            };
            if step.body.handle_key(key, ctx) {
                return;
            }
        }

        if let Some(action) = self.keybindings.resolve(key) {
            let result = match self.execute_action(action).await {
                Ok(()) => self.refresh(),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    async fn execute_action(&mut self, action: Action) -> Result<(), WizardError> {
        match action {
            Action::Quit => self.running = false,
            Action::Previous => {
                self.handle.on_previous()?;
                self.status = None;
            }
            Action::GoTo(index) => {
                if self.handle.go_to(index)? {
                    self.status = None;
                }
            }
            Action::Next => self.advance().await?,
        }
        Ok(())
    }

    /// Validate the active step and move forward.
    ///
    /// On a submitting step the note is posted before advancing; a failed
    /// check or a failed post keeps the wizard where it is and shows the
    /// reason. Once a note has been submitted, advancing from the submitting
    /// step closes the wizard.
    async fn advance(&mut self) -> Result<(), WizardError> {
        let index = self.handle.active_step_index()?;
        let Some(step) = self.steps.get(index) else {
            return Ok(());
        };

        if step.body.submits() && self.submitted.is_some() {
            self.running = false;
            return Ok(());
        }

        let submission = step.body.submits().then(|| self.form.to_note(&self.catalog));
        let check = if step.body.submits() {
            self.steps
                .iter()
                .try_for_each(|s| s.body.validate(&self.form, &self.catalog))
        } else {
            step.body.validate(&self.form, &self.catalog)
        };
        let client = self.client.clone();

        let mut created = None;
        let slot = &mut created;
        let result = self
            .handle
            .on_next_with(move || async move {
                check?;
                if let Some(note) = submission {
                    let client = client.context("Kein Server für das Senden konfiguriert.")?;
                    *slot = Some(client.create_note(&note).await?);
                }
                Ok::<(), anyhow::Error>(())
            })
            .await;

        match result {
            Ok(_) => {
                self.status = created.as_ref().map(|note| {
                    Status::Info(format!("Buchung als Notiz #{} gespeichert.", note.id))
                });
                if created.is_some() {
                    self.submitted = created;
                }
                Ok(())
            }
            Err(WizardError::Callback(reason)) => {
                debug!(%reason, "step refused to advance");
                self.status = Some(Status::Error(reason.to_string()));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Current progress for the header
    pub fn progress(&self) -> ProgressWidget {
        let state = self.session.state();
        ProgressWidget {
            titles: self.steps.iter().map(|step| step.title.clone()).collect(),
            active: state.active_step_index,
            is_first: state.is_first_step(),
            is_last: state.is_last_step(),
        }
    }

    /// Renders the wizard: title, progress, the mounted step and the status line.
    pub fn render(&self, frame: &mut Frame) {
        let [title_area, progress_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(self.title.as_str()).style(self.theme.bold),
            title_area,
        );

        let progress = self.progress();
        frame.render_widget(progress.to_paragraph(&self.theme), progress_area);

        if let Some(step) = self.host.mounted().and_then(|i| self.steps.get(i)) {
            let block = Block::default()
                .title(format!(" {} ", step.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border));
            let inner = block.inner(body_area);
            frame.render_widget(block, body_area);

            let ctx = RenderContext {
                form: &self.form,
                catalog: &self.catalog,
                theme: &self.theme,
                submitted: self.submitted.as_ref(),
            };
            step.body.render(frame, inner, &ctx);
        }

        if let Some(status) = &self.status {
            let (text, color) = match status {
                Status::Info(text) => (text, self.theme.success),
                Status::Error(text) => (text, self.theme.error),
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    text.as_str(),
                    Style::default().fg(color),
                ))),
                status_area,
            );
        }
    }

    /// Runs the main event loop.
    ///
    /// Sets up the terminal, enters the render/input loop, and restores
    /// the terminal on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.event_loop(&mut terminal).await;

        self.host.clear(&mut self.steps);
        restore_terminal(&mut terminal)?;

        result
    }

    async fn event_loop(&mut self, terminal: &mut BookingTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key).await;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_core::{ChildSpec, StepId};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::bundled(Catalog::builtin().unwrap()).unwrap()
    }

    fn code(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ch(c: char) -> KeyEvent {
        code(KeyCode::Char(c))
    }

    async fn press_all(app: &mut App, keys: &[KeyEvent]) {
        for key in keys {
            app.handle_key(*key).await;
        }
    }

    fn active(app: &App) -> usize {
        app.handle().active_step_index().unwrap()
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn starts_on_first_step_with_only_it_mounted() {
        let app = app();
        assert_eq!(app.handle().step_count().unwrap(), 4);
        assert_eq!(active(&app), 0);
        assert_eq!(app.mounted(), Some(0));

        let mounted: Vec<bool> = app.steps().iter().map(|s| s.body.is_mounted()).collect();
        assert_eq!(mounted, vec![true, false, false, false]);
        assert!(app.running);
    }

    #[test]
    fn unknown_step_in_flow_rejected() {
        let flow = FlowDefinition {
            title: "x".into(),
            children: vec![ChildSpec::step("payment", "Zahlung")],
        };
        let err = App::new(&flow, Catalog::default()).unwrap_err();
        assert!(matches!(err, WizardError::UnknownStep(StepId::Text(_))));
    }

    #[test]
    fn empty_flow_rejected() {
        let err = App::new(&FlowDefinition::default(), Catalog::default()).unwrap_err();
        assert!(matches!(err, WizardError::EmptyComposition));
    }

    #[tokio::test]
    async fn next_blocked_until_hardware_chosen() {
        let mut app = app();

        app.handle_key(code(KeyCode::Enter)).await;
        assert_eq!(active(&app), 0);
        assert!(matches!(&app.status, Some(Status::Error(msg)) if msg.contains("Hardware")));

        press_all(&mut app, &[ch(' '), code(KeyCode::Right)]).await;
        assert_eq!(active(&app), 1);
        assert_eq!(app.status, None);
        assert_eq!(app.mounted(), Some(1));
        assert!(!app.steps().get(0).unwrap().body.is_mounted());
    }

    #[tokio::test]
    async fn previous_on_first_step_is_noop() {
        let mut app = app();
        app.handle_key(code(KeyCode::Left)).await;
        assert_eq!(active(&app), 0);
        assert!(app.running);
    }

    #[tokio::test]
    async fn digits_jump_and_out_of_range_ignored() {
        let mut app = app();

        app.handle_key(ch('3')).await;
        assert_eq!(active(&app), 2);
        assert_eq!(app.mounted(), Some(2));

        app.handle_key(ch('9')).await;
        assert_eq!(active(&app), 2);
    }

    #[tokio::test]
    async fn note_step_captures_letters() {
        let mut app = app();
        app.handle_key(ch('3')).await;

        press_all(&mut app, &[ch('q'), ch('h'), ch('1')]).await;
        assert_eq!(app.form.title, "qh1");
        assert_eq!(active(&app), 2);
        assert!(app.running);

        app.handle_key(code(KeyCode::Esc)).await;
        assert!(!app.running);
    }

    #[tokio::test]
    async fn ctrl_c_quits_from_text_entry() {
        let mut app = app();
        app.handle_key(ch('3')).await;
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await;
        assert!(!app.running);
        assert!(app.form.title.is_empty());
    }

    #[tokio::test]
    async fn summary_without_client_stays_put() {
        let mut app = app();
        press_all(
            &mut app,
            &[
                ch(' '),
                code(KeyCode::Enter),
                code(KeyCode::Up),
                code(KeyCode::Up),
                code(KeyCode::Enter),
                ch('T'),
                code(KeyCode::Enter),
            ],
        )
        .await;
        assert_eq!(active(&app), 3);

        app.handle_key(code(KeyCode::Enter)).await;
        assert_eq!(active(&app), 3);
        assert!(app.submitted.is_none());
        assert!(matches!(&app.status, Some(Status::Error(msg)) if msg.contains("Kein Server")));
    }

    #[tokio::test]
    async fn summary_revalidates_skipped_steps() {
        let mut app = app().with_client(NotesClient::new("http://127.0.0.1:9"));
        app.handle_key(ch('4')).await;
        assert_eq!(active(&app), 3);

        app.handle_key(code(KeyCode::Enter)).await;
        assert!(matches!(&app.status, Some(Status::Error(msg)) if msg.contains("Hardware")));
    }

    #[test]
    fn render_shows_only_active_step() {
        let app = app();
        let content = screen(&app);
        assert!(content.contains("Hardware buchen"), "{content}");
        assert!(content.contains("Schritt 1 von 4"), "{content}");
        assert!(content.contains("Meta Quest 3"), "{content}");
        assert!(!content.contains("Tab wechselt"), "{content}");
    }

    #[test]
    fn progress_reflects_position() {
        let app = app();
        let progress = app.progress();
        assert!(progress.is_first);
        assert!(!progress.is_last);
        assert_eq!(progress.titles.len(), 4);
    }
}
