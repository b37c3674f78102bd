//! Registration form state and submit lifecycle

use super::field::FormField;
use super::values::FormValues;
use crate::submit::SubmissionPayload;
use crate::validation::{self, validate_field, FieldId, ValidationProfile};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Submit lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
}

/// The registration form: values, per-field status and submit lifecycle
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    profile: ValidationProfile,
    redact_password: bool,
    /// Indexed by [`FieldId::index`]
    fields: Vec<FormField>,
    pub status: FormStatus,
    /// 0..=5 are the fields, 6 is the submit button row
    pub active_field_index: usize,
}

impl RegistrationForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = FieldId::ALL.len();

    pub fn new(profile: ValidationProfile, redact_password: bool) -> Self {
        Self {
            profile,
            redact_password,
            fields: FieldId::ALL.into_iter().map(FormField::new).collect(),
            status: FormStatus::Idle,
            active_field_index: 0,
        }
    }

    pub fn profile(&self) -> ValidationProfile {
        self.profile
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[id.index()]
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[id.index()]
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    /// Snapshot of the current values
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::default();
        for field in &self.fields {
            values.set(field.id, field.value.clone());
        }
        values
    }

    /// Store a new raw value and re-run that field's rule
    pub fn set_field_value(&mut self, id: FieldId, raw: impl Into<String>) {
        let value = raw.into();
        let error = validate_field(self.profile, id, &value)
            .err()
            .map(|e| e.message);
        let field = self.field_mut(id);
        field.value = value;
        field.state.error = error;
    }

    /// Mark a field as blurred so its error becomes visible.
    ///
    /// The field's rule runs again, so an empty required field reports its
    /// error on first blur even if it was never edited.
    pub fn touch_field(&mut self, id: FieldId) {
        let error = validate_field(self.profile, id, &self.field(id).value)
            .err()
            .map(|e| e.message);
        let state = &mut self.field_mut(id).state;
        state.touched = true;
        state.error = error;
    }

    /// True iff every field passes its rule against the current values
    pub fn compute_is_valid(&self) -> bool {
        validation::is_valid(self.profile, &self.values())
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Submit button enabled state
    pub fn can_submit(&self) -> bool {
        self.status == FormStatus::Idle && self.compute_is_valid()
    }

    /// Start a submission, returning the payload to hand off.
    ///
    /// Returns `None` and leaves the form untouched when any field is
    /// invalid or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmissionPayload> {
        if self.is_submitting() {
            tracing::debug!("submit ignored, already submitting");
            return None;
        }
        let failures = validation::validate_all(self.profile, &self.values());
        if !failures.is_empty() {
            let fields: Vec<&str> = failures.iter().map(|e| e.field.key()).collect();
            tracing::debug!(?fields, "submit ignored, form invalid");
            return None;
        }
        for id in FieldId::ALL {
            self.touch_field(id);
        }
        self.status = FormStatus::Submitting;
        Some(SubmissionPayload::new(self.values(), self.redact_password))
    }

    /// Return to idle once the collaborator has answered
    pub fn finish_submit(&mut self) {
        self.status = FormStatus::Idle;
    }

    /// Clear every field and go back to the first one
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.status = FormStatus::Idle;
        self.active_field_index = 0;
    }

    /// Field under the cursor, `None` on the submit row
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::from_index(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        let Some(id) = self.editable_field() else {
            return;
        };
        let mut value = self.field(id).value.clone();
        match id.mask() {
            Some(mask) => {
                if !c.is_ascii_digit() {
                    return;
                }
                value.push(c);
                value = mask.apply(&value);
            }
            None => value.push(c),
        }
        self.set_field_value(id, value);
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        let Some(id) = self.editable_field() else {
            return;
        };
        let mut value = self.field(id).value.clone();
        if value.pop().is_none() {
            return;
        }
        if let Some(mask) = id.mask() {
            value = mask.apply(&value);
        }
        self.set_field_value(id, value);
    }

    /// Append pasted text to the active field
    pub fn paste(&mut self, text: &str) {
        let Some(id) = self.editable_field() else {
            return;
        };
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        let mut value = self.field(id).value.clone();
        value.push_str(&pasted);
        if let Some(mask) = id.mask() {
            value = mask.apply(&value);
        }
        self.set_field_value(id, value);
    }

    /// Active field, if editing is currently allowed
    fn editable_field(&self) -> Option<FieldId> {
        if self.is_submitting() {
            return None;
        }
        self.active_field_id()
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(ValidationProfile::default(), true)
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FieldId::ALL.len() + 1 // fields + submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(Self::SUBMIT_ROW);
        if index != self.active_field_index {
            if let Some(id) = self.active_field_id() {
                self.touch_field(id);
            }
        }
        self.active_field_index = index;
    }
}
