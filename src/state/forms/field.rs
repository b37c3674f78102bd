//! Form field value objects

use crate::validation::FieldId;

/// Per-field validation status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Field has lost focus at least once
    pub touched: bool,
    /// Current validation message, `None` when valid or not yet validated
    pub error: Option<String>,
}

/// Represents a single form field with its value and validation status
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: String,
    pub state: FieldState,
}

impl FormField {
    /// Create an empty, untouched field
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            state: FieldState::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    /// Error to show on screen; hidden until the field has been touched
    pub fn visible_error(&self) -> Option<&str> {
        if self.state.touched {
            self.state.error.as_deref()
        } else {
            None
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.id.is_secret() {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Clear the field value and status
    pub fn clear(&mut self) {
        self.value.clear();
        self.state = FieldState::default();
    }
}
