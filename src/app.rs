//! Application state and core logic

use crate::config::TuiConfig;
use crate::error::SubmitError;
use crate::state::{AppState, Form, SplashState, View};
use crate::submit::{DelayedSubmitClient, SubmitClientTrait, SubmitReceipt};
use crate::validation::FieldId;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};

type SubmitOutcome = Result<SubmitReceipt, SubmitError>;

/// Longest the collaborator may take before the submit counts as timed out
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Collaborator receiving completed registrations
    submitter: Arc<dyn SubmitClientTrait>,
    /// Result channel of the in-flight submission
    pending_submit: Option<oneshot::Receiver<SubmitOutcome>>,
    submit_timeout: Duration,
    /// Whether the app should quit
    quit: bool,
    /// Status bar feedback message
    pub status_message: Option<String>,
    /// Loading gate state, `None` once the form is shown
    pub splash_state: Option<SplashState>,
    /// Frame counter driving the submit spinner
    pub tick: usize,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &TuiConfig) -> Self {
        let submitter = Arc::new(DelayedSubmitClient::new(config.submit_delay()));
        let state = AppState::new(config.profile(), config.redact_password());
        tracing::info!(
            profile = %config.profile(),
            redact_password = config.redact_password(),
            "Starting registration form"
        );
        Self::with_submitter(state, submitter)
    }

    /// Create an App around an explicit submit collaborator
    pub fn with_submitter(state: AppState, submitter: Arc<dyn SubmitClientTrait>) -> Self {
        let splash_state = matches!(state.current_view, View::Splash).then(SplashState::new);
        Self {
            state,
            submitter,
            pending_submit: None,
            submit_timeout: SUBMIT_TIMEOUT,
            quit: false,
            status_message: None,
            splash_state,
            tick: 0,
        }
    }

    /// Update loading gate state
    /// Returns true once the gate opens and the form is shown
    pub fn update_splash(&mut self) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update();
            if splash.is_ready() {
                self.finish_splash();
                return true;
            }
        }
        false
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::Form;
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Whether the screen needs fast redraws (gauge or spinner)
    pub fn is_animating(&self) -> bool {
        self.in_splash() || self.state.form.is_submitting()
    }

    /// Advance the animation frame counter
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Form => self.handle_form_key(key),
        }

        Ok(())
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        self.finish_splash();
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.status_message = None;

        let on_submit_row = self.state.form.is_submit_row_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if on_submit_row => {
                self.submit();
            }
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl => {
                self.submit();
            }
            KeyCode::Char('r') if ctrl => self.clear_form(),
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_from_clipboard()
            }
            KeyCode::Char(c) if !ctrl => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    /// Start submitting the form.
    ///
    /// Returns false without contacting the collaborator when the form is
    /// invalid or a submission is already running.
    pub fn submit(&mut self) -> bool {
        if self.state.form.is_submitting() {
            return false;
        }
        let Some(payload) = self.state.form.begin_submit() else {
            // show every field's error
            for id in FieldId::ALL {
                self.state.form.touch_field(id);
            }
            self.status_message = Some("Corrija os campos destacados".to_string());
            return false;
        };

        tracing::info!(
            password_redacted = payload.password_redacted,
            "Submitting registration"
        );

        let submitter = Arc::clone(&self.submitter);
        let timeout = self.submit_timeout;
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, submitter.submit(payload)).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(?timeout, "Submit collaborator did not answer in time");
                    Err(SubmitError::Timeout)
                }
            };
            // receiver is gone if the app quit mid-submit
            let _ = tx.send(result);
        });
        self.pending_submit = Some(rx);
        true
    }

    /// Check whether the in-flight submission has finished
    pub fn poll_submit(&mut self) {
        let Some(rx) = self.pending_submit.as_mut() else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(SubmitError::Network(
                "o envio terminou sem resposta".to_string(),
            )),
        };
        self.pending_submit = None;
        self.complete_submit(outcome);
    }

    fn complete_submit(&mut self, outcome: SubmitOutcome) {
        self.state.form.finish_submit();
        match outcome {
            Ok(receipt) => {
                tracing::info!(receipt_id = %receipt.id, "Submit completed");
                self.status_message = Some("Formulário enviado com sucesso!".to_string());
            }
            Err(e) => {
                tracing::warn!("Submit failed: {e}");
                self.push_error(format!(
                    "{e}\n\nPressione {} para tentar novamente.",
                    crate::platform::SUBMIT_SHORTCUT
                ));
            }
        }
    }

    /// Clear every field (ignored while submitting)
    fn clear_form(&mut self) {
        if self.state.form.is_submitting() {
            return;
        }
        self.state.form.reset();
        self.status_message = Some("Formulário limpo".to_string());
    }

    fn paste_from_clipboard(&mut self) {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => self.state.form.paste(&text),
            Err(e) => {
                tracing::warn!("Clipboard read failed: {e}");
                self.push_error(format!("Não foi possível colar: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormStatus;
    use crate::submit::MockSubmitClientTrait;
    use crate::validation::ValidationProfile;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn form_app(mock: MockSubmitClientTrait) -> App {
        let mut state = AppState::new(ValidationProfile::Strict, true);
        state.current_view = View::Form;
        App::with_submitter(state, Arc::new(mock))
    }

    fn fill_valid(app: &mut App) {
        let form = &mut app.state.form;
        form.set_field_value(FieldId::Name, "Maria da Silva");
        form.set_field_value(FieldId::PostalCode, "01310-100");
        form.set_field_value(FieldId::TaxId, "123.456.789-01");
        form.set_field_value(FieldId::Phone, "(11) 98765-4321");
        form.set_field_value(FieldId::Email, "maria@example.com");
        form.set_field_value(FieldId::Password, "Abcdefg1!");
    }

    async fn wait_for_idle(app: &mut App) {
        for _ in 0..200 {
            app.poll_submit();
            if !app.state.form.is_submitting() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission never completed");
    }

    mod splash {
        use super::*;

        #[test]
        fn test_new_app_starts_in_splash() {
            let app = App::new(&TuiConfig::default());
            assert!(app.in_splash());
            assert!(app.splash_state.is_some());
            assert!(app.is_animating());
        }

        #[test]
        fn test_any_key_skips_splash() {
            let mut app = App::new(&TuiConfig::default());
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert_eq!(app.state.current_view, View::Form);
            assert!(app.splash_state.is_none());
            // the skipping key is not typed into the form
            assert_eq!(app.state.form.field(FieldId::Name).value, "");
        }

        #[test]
        fn test_update_splash_before_ready() {
            let mut app = App::new(&TuiConfig::default());
            assert!(!app.update_splash());
            assert!(app.in_splash());
        }
    }

    mod keys {
        use super::*;

        #[test]
        fn test_typing_goes_to_active_field() {
            let mut app = form_app(MockSubmitClientTrait::new());
            for c in "Ana".chars() {
                app.handle_key(key(KeyCode::Char(c))).unwrap();
            }
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.state.form.field(FieldId::Name).value, "An");
        }

        #[test]
        fn test_tab_moves_and_touches() {
            let mut app = form_app(MockSubmitClientTrait::new());
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.form.active_field_index, 1);
            assert!(app.state.form.field(FieldId::Name).state.touched);

            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert_eq!(app.state.form.active_field_index, 0);
        }

        #[test]
        fn test_enter_on_field_advances() {
            let mut app = form_app(MockSubmitClientTrait::new());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.form.active_field_index, 1);
        }

        #[test]
        fn test_esc_quits() {
            let mut app = form_app(MockSubmitClientTrait::new());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = form_app(MockSubmitClientTrait::new());
            app.handle_key(ctrl('x')).unwrap();
            assert_eq!(app.state.form.field(FieldId::Name).value, "");
        }

        #[test]
        fn test_ctrl_r_clears_form() {
            let mut app = form_app(MockSubmitClientTrait::new());
            fill_valid(&mut app);
            app.handle_key(ctrl('r')).unwrap();
            assert_eq!(app.state.form.field(FieldId::Email).value, "");
            assert_eq!(app.status_message.as_deref(), Some("Formulário limpo"));
        }

        #[test]
        fn test_error_dialog_is_modal() {
            let mut app = form_app(MockSubmitClientTrait::new());
            app.push_error("boom");
            app.handle_key(key(KeyCode::Char('a'))).unwrap();
            assert_eq!(app.state.form.field(FieldId::Name).value, "");
            assert!(app.state.has_errors());

            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.has_errors());
            assert!(!app.should_quit());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_form_never_reaches_collaborator() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit().times(0);
            let mut app = form_app(mock);

            assert!(!app.submit());
            assert_eq!(app.state.form.status, FormStatus::Idle);
            assert_eq!(
                app.status_message.as_deref(),
                Some("Corrija os campos destacados")
            );
            assert!(app.state.form.fields().all(|field| field.state.touched));
            assert!(app.state.form.field(FieldId::Email).visible_error().is_some());
        }

        #[tokio::test]
        async fn test_end_to_end_success() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit()
                .withf(|payload| {
                    payload.password_redacted
                        && !payload.values.contains(FieldId::Password)
                        && payload.values.get(FieldId::Email) == "maria@example.com"
                })
                .times(1)
                .returning(|_| Ok(SubmitReceipt::now()));
            let mut app = form_app(mock);
            fill_valid(&mut app);
            assert!(app.state.form.can_submit());

            app.state.form.active_field_index = crate::state::RegistrationForm::SUBMIT_ROW;
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.form.status, FormStatus::Submitting);
            assert!(!app.state.form.can_submit());
            assert!(app.is_animating());

            wait_for_idle(&mut app).await;
            assert_eq!(app.state.form.status, FormStatus::Idle);
            assert!(app.state.form.can_submit());
            assert_eq!(
                app.status_message.as_deref(),
                Some("Formulário enviado com sucesso!")
            );
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_second_submit_ignored_while_in_flight() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Ok(SubmitReceipt::now()));
            let mut app = form_app(mock);
            fill_valid(&mut app);

            assert!(app.submit());
            assert!(!app.submit());
            app.handle_key(ctrl('s')).unwrap();

            wait_for_idle(&mut app).await;
        }

        #[tokio::test]
        async fn test_failure_surfaces_error_and_returns_to_idle() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(SubmitError::Timeout));
            let mut app = form_app(mock);
            fill_valid(&mut app);

            app.handle_key(ctrl('s')).unwrap();
            wait_for_idle(&mut app).await;

            assert_eq!(app.state.form.status, FormStatus::Idle);
            let error = app.state.current_error().unwrap();
            assert!(error.contains("Tempo esgotado"));
            // values are kept so the user can retry
            assert_eq!(app.state.form.field(FieldId::Name).value, "Maria da Silva");
        }

        struct StalledClient;

        #[async_trait::async_trait]
        impl SubmitClientTrait for StalledClient {
            async fn submit(
                &self,
                _payload: crate::submit::SubmissionPayload,
            ) -> Result<SubmitReceipt, SubmitError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(SubmitReceipt::now())
            }
        }

        #[tokio::test]
        async fn test_slow_collaborator_times_out() {
            let mut state = AppState::new(ValidationProfile::Strict, true);
            state.current_view = View::Form;
            let mut app = App::with_submitter(state, Arc::new(StalledClient));
            app.submit_timeout = Duration::from_millis(20);
            fill_valid(&mut app);

            assert!(app.submit());
            wait_for_idle(&mut app).await;

            assert_eq!(app.state.form.status, FormStatus::Idle);
            assert!(app.state.current_error().unwrap().contains("Tempo esgotado"));
        }

        #[test]
        fn test_dropped_sender_counts_as_network_failure() {
            let mut app = form_app(MockSubmitClientTrait::new());
            fill_valid(&mut app);
            assert!(app.state.form.begin_submit().is_some());

            let (tx, rx) = oneshot::channel::<SubmitOutcome>();
            drop(tx);
            app.pending_submit = Some(rx);
            app.poll_submit();

            assert_eq!(app.state.form.status, FormStatus::Idle);
            assert!(app.state.current_error().unwrap().contains("Falha de rede"));
            assert!(app.pending_submit.is_none());
        }

        #[test]
        fn test_poll_without_pending_is_noop() {
            let mut app = form_app(MockSubmitClientTrait::new());
            app.poll_submit();
            assert_eq!(app.state.form.status, FormStatus::Idle);
            assert!(!app.state.has_errors());
        }
    }
}
