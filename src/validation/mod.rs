//! Validation rule set for the registration form
//!
//! - `field_id`: the six form fields and their metadata
//! - `mask`: display masks for CEP, CPF and cell phone input
//! - `profile`: strict vs lenient rule selection
//! - `rules`: the per-field rule table and aggregate checks

mod field_id;
mod mask;
mod profile;
mod rules;

pub use field_id::FieldId;
pub use mask::InputMask;
pub use profile::ValidationProfile;
pub use rules::{is_valid, validate_all, validate_field};
