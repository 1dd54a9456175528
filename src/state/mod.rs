//! Application state module

mod feedback;
mod forms;

pub use feedback::*;
pub use forms::*;
