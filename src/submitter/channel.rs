//! Channel-backed submitter used by the binary

use super::traits::{FormSubmitter, SubmitError};
use crate::state::Registration;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Forwards registrations to a receiver drained by `main` once the
/// terminal has been restored.
pub struct ChannelSubmitter {
    tx: mpsc::UnboundedSender<Registration>,
}

impl ChannelSubmitter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Registration>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl FormSubmitter for ChannelSubmitter {
    async fn submit(&mut self, registration: &Registration) -> Result<(), SubmitError> {
        self.tx
            .send(registration.clone())
            .map_err(|_| SubmitError::Closed)
    }
}
