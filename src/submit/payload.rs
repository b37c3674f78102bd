//! Data handed to the submit collaborator

use crate::state::FormValues;
use crate::validation::FieldId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Form values as sent downstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub values: FormValues,
    /// Whether the password was stripped before leaving the form
    #[serde(skip)]
    pub password_redacted: bool,
}

impl SubmissionPayload {
    pub fn new(values: FormValues, redact_password: bool) -> Self {
        let values = if redact_password {
            values.without(FieldId::Password)
        } else {
            values
        };
        Self {
            values,
            password_redacted: redact_password,
        }
    }
}

/// Acknowledgement returned by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmitReceipt {
    pub fn now() -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}
