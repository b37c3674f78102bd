//! Form domain layer
//!
//! Type-safe registration form state, decoupled from rendering so it can be
//! driven and tested without a terminal.

mod field;
mod form_state;
mod values;

pub use field::FormField;
pub use form_state::{Form, RegistrationForm};
pub use values::FormValues;

#[cfg(test)]
pub use field::FieldState;
#[cfg(test)]
pub use form_state::FormStatus;
