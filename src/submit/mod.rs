//! Submit collaborator for the registration form

mod client;
mod payload;
mod traits;

pub use client::DelayedSubmitClient;
pub use payload::{SubmissionPayload, SubmitReceipt};
pub use traits::SubmitClientTrait;

#[cfg(test)]
pub use traits::MockSubmitClientTrait;
