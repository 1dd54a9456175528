//! Form rendering module
//!
//! - `field_renderer`: a single input and its feedback slot
//! - `registration_form`: the whole registration screen

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
