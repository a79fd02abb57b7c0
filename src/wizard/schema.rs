//! Per-step field layout
//!
//! Step 2 is the only step whose field set depends on runtime state: the
//! selected industry's questions are appended after the fixed fields.

use crate::catalog::{IndustryConfig, QuestionKind};
use crate::state::{FieldKey, Step};

pub const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-1000", "1000+"];

pub const TIMELINES: &[&str] = &[
    "Immediately",
    "Within 1 month",
    "1-3 months",
    "3-6 months",
    "Just exploring",
];

pub const CHALLENGES: &[&str] = &[
    "Fuel costs",
    "Driver safety",
    "Maintenance downtime",
    "Compliance reporting",
    "Route efficiency",
    "Asset utilization",
];

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    Select(&'static [&'static str]),
    MultiSelect(&'static [&'static str]),
    Checkbox,
    Industry,
    Plan,
    Billing,
}

/// A field as presented on a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub label: &'static str,
    pub input: FieldInput,
    pub required: bool,
}

impl FieldDescriptor {
    const fn new(key: FieldKey, label: &'static str, input: FieldInput, required: bool) -> Self {
        Self {
            key,
            label,
            input,
            required,
        }
    }
}

const CONTACT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(FieldKey::FirstName, "First name", FieldInput::Text, true),
    FieldDescriptor::new(FieldKey::LastName, "Last name", FieldInput::Text, true),
    FieldDescriptor::new(FieldKey::Email, "Work email", FieldInput::Text, true),
    FieldDescriptor::new(FieldKey::Phone, "Phone (optional)", FieldInput::Text, false),
];

const ORGANIZATION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(FieldKey::Company, "Company", FieldInput::Text, true),
    FieldDescriptor::new(FieldKey::Role, "Your role", FieldInput::Text, true),
    FieldDescriptor::new(
        FieldKey::CompanySize,
        "Company size",
        FieldInput::Select(COMPANY_SIZES),
        true,
    ),
    FieldDescriptor::new(FieldKey::Industry, "Industry", FieldInput::Industry, true),
];

const PLANNING_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(FieldKey::Plan, "Plan", FieldInput::Plan, true),
    FieldDescriptor::new(FieldKey::BillingCycle, "Billing", FieldInput::Billing, true),
    FieldDescriptor::new(
        FieldKey::Timeline,
        "Rollout timeline",
        FieldInput::Select(TIMELINES),
        true,
    ),
    FieldDescriptor::new(
        FieldKey::Challenges,
        "Biggest challenges",
        FieldInput::MultiSelect(CHALLENGES),
        false,
    ),
];

const CONSENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        FieldKey::Terms,
        "I accept the Terms of Service",
        FieldInput::Checkbox,
        true,
    ),
    FieldDescriptor::new(
        FieldKey::Privacy,
        "I accept the Privacy Policy",
        FieldInput::Checkbox,
        true,
    ),
    FieldDescriptor::new(
        FieldKey::Marketing,
        "Send me product updates",
        FieldInput::Checkbox,
        false,
    ),
];

/// Ordered fields shown on `step` for the given industry
pub fn fields_for_step(step: Step, industry: &IndustryConfig) -> Vec<FieldDescriptor> {
    match step {
        Step::Contact => CONTACT_FIELDS.to_vec(),
        Step::Organization => {
            let mut fields = ORGANIZATION_FIELDS.to_vec();
            fields.extend(industry.specific_questions.iter().map(|q| FieldDescriptor {
                key: q.key,
                label: q.label,
                input: match q.kind {
                    QuestionKind::Select => FieldInput::Select(q.options),
                    QuestionKind::Text => FieldInput::Text,
                },
                required: true,
            }));
            fields
        }
        Step::Planning => PLANNING_FIELDS.to_vec(),
        Step::Consent => CONSENT_FIELDS.to_vec(),
    }
}

/// Keys shown on `step`
pub fn step_keys(step: Step, industry: &IndustryConfig) -> Vec<FieldKey> {
    fields_for_step(step, industry)
        .into_iter()
        .map(|f| f.key)
        .collect()
}
