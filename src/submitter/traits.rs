//! Trait abstraction for form submission to enable mocking in tests

use crate::state::Registration;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission target is no longer accepting registrations")]
    Closed,
}

/// Performs the real submission of a validated form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&mut self, registration: &Registration) -> Result<(), SubmitError>;
}
