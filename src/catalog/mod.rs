//! Static catalogs of industries and plans
//!
//! Both catalogs are compiled in. Ids are closed enums, so every lookup is
//! infallible; unknown strings are rejected when they are parsed.

mod industry;
mod plan;

pub use industry::{IndustryConfig, IndustryId, Question, QuestionKind};
pub use plan::{BillingCycle, PlanConfig, PlanId, PlanPricing};
