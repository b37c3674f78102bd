//! Form rendering module
//!
//! - `field_renderer`: a single input with its inline error
//! - `registration_form`: the registration screen layout

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
