//! Multi-step signup wizard engine
//!
//! - `schema`: which fields each step shows
//! - `validation`: step-scoped validation and per-field error clearing
//! - `pricing`: figures derived from a plan and billing cycle
//! - `payload`: the registration handed to a submitter
//! - `machine`: the state machine tying these together

mod machine;
mod payload;
pub mod pricing;
pub mod schema;
mod seed;
pub mod validation;

pub use machine::{SuccessHandler, WizardStateMachine};
pub use payload::{RegistrationPayload, TRIAL_PERIOD_DAYS};
pub use pricing::PriceBreakdown;
pub use schema::{FieldDescriptor, FieldInput};
pub use seed::SeedParams;
