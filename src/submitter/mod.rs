//! Hand-off of an accepted registration
//!
//! This is the terminal counterpart of a form's native submission: the
//! validator calls it once the form is valid and no longer cares what
//! happens to the data.

mod channel;
mod traits;

pub use channel::ChannelSubmitter;
pub use traits::{FormSubmitter, SubmitError};

#[cfg(test)]
pub use traits::MockFormSubmitter;
