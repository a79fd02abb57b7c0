//! Form domain layer
//!
//! Closed field keys, typed field values and the form record that holds them.

mod field;
mod form_state;

pub use field::{FieldKey, FieldKind, FieldValue};
pub use form_state::FormState;
