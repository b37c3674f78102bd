//! Local submit client that simulates a network round trip
//!
//! There is no backend: the client waits for a fixed delay and always
//! accepts the registration.

use super::{SubmissionPayload, SubmitClientTrait, SubmitReceipt};
use crate::error::SubmitError;
use crate::validation::FieldId;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated round trip
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Submit client that succeeds after a fixed delay
#[derive(Debug, Clone)]
pub struct DelayedSubmitClient {
    delay: Duration,
}

impl DelayedSubmitClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DelayedSubmitClient {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl SubmitClientTrait for DelayedSubmitClient {
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmitReceipt, SubmitError> {
        // never log the secret, even when the payload carries it
        let loggable = payload.values.without(FieldId::Password);
        match serde_json::to_string(&loggable) {
            Ok(json) => tracing::info!(
                password_redacted = payload.password_redacted,
                "Form data: {json}"
            ),
            Err(e) => tracing::warn!("Failed to serialize form data for logging: {e}"),
        }

        tokio::time::sleep(self.delay).await;

        let receipt = SubmitReceipt::now();
        tracing::info!(receipt_id = %receipt.id, "Registration accepted");
        Ok(receipt)
    }
}
