//! Application state definitions

use super::forms::RegistrationForm;
use crate::validation::ValidationProfile;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Loading gate before the form appears
    #[default]
    Splash,
    Form,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: RegistrationForm,
    /// Errors waiting to be shown in the modal dialog, oldest first
    pub errors: VecDeque<String>,
}

impl AppState {
    pub fn new(profile: ValidationProfile, redact_password: bool) -> Self {
        Self {
            current_view: View::Splash,
            form: RegistrationForm::new(profile, redact_password),
            errors: VecDeque::new(),
        }
    }

    /// Queue an error for the dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently displayed
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the displayed error, revealing the next one
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
