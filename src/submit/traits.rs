//! Trait abstraction for the submit collaborator to enable mocking in tests

use super::{SubmissionPayload, SubmitReceipt};
use crate::error::SubmitError;
use async_trait::async_trait;

/// Sends a completed registration somewhere and reports the outcome
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitClientTrait: Send + Sync {
    /// Submit the payload, resolving once the receiver has answered
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmitReceipt, SubmitError>;
}
