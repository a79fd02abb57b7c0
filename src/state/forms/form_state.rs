//! Form state holding every collected field

use super::field::{FieldKey, FieldValue};
use crate::catalog::{BillingCycle, IndustryId, PlanId};
use crate::error::WizardError;

/// Values for every [`FieldKey`], indexed by key.
///
/// All keys are present from construction, so no field can ever be removed.
/// Mutation goes through [`crate::wizard::WizardStateMachine::update_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: [FieldValue; FieldKey::COUNT],
}

impl FormState {
    /// Create an empty form with the given catalog selections
    pub fn new(plan: PlanId, industry: IndustryId) -> Self {
        let mut values = std::array::from_fn(|i| FieldValue::empty(FieldKey::ALL[i].kind()));
        values[FieldKey::Plan.index()] = FieldValue::Plan(plan);
        values[FieldKey::Industry.index()] = FieldValue::Industry(industry);
        Self { values }
    }

    /// Preselect the billing cycle
    pub fn with_billing(mut self, cycle: BillingCycle) -> Self {
        self.values[FieldKey::BillingCycle.index()] = FieldValue::Billing(cycle);
        self
    }

    pub fn get(&self, key: FieldKey) -> &FieldValue {
        &self.values[key.index()]
    }

    /// Replace a field value, rejecting values of the wrong kind
    pub(crate) fn set(&mut self, key: FieldKey, value: FieldValue) -> Result<(), WizardError> {
        if value.kind() != key.kind() {
            return Err(WizardError::FieldKindMismatch {
                key,
                expected: key.kind(),
                actual: value.kind(),
            });
        }
        self.values[key.index()] = value;
        Ok(())
    }

    /// Text value of a field, trimmed
    pub fn text(&self, key: FieldKey) -> &str {
        self.get(key).as_text().trim()
    }

    pub fn flag(&self, key: FieldKey) -> bool {
        matches!(self.get(key), FieldValue::Flag(true))
    }

    pub fn choices(&self, key: FieldKey) -> &[String] {
        match self.get(key) {
            FieldValue::Choices(items) => items,
            _ => &[],
        }
    }

    pub fn industry(&self) -> IndustryId {
        match self.get(FieldKey::Industry) {
            FieldValue::Industry(id) => *id,
            _ => IndustryId::default(),
        }
    }

    pub fn plan(&self) -> PlanId {
        match self.get(FieldKey::Plan) {
            FieldValue::Plan(id) => *id,
            _ => PlanId::default(),
        }
    }

    pub fn billing_cycle(&self) -> BillingCycle {
        match self.get(FieldKey::BillingCycle) {
            FieldValue::Billing(cycle) => *cycle,
            _ => BillingCycle::default(),
        }
    }

    /// Full contact name as entered
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.text(FieldKey::FirstName),
            self.text(FieldKey::LastName)
        )
        .trim()
        .to_string()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldValue)> {
        FieldKey::ALL.into_iter().zip(self.values.iter())
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(PlanId::default(), IndustryId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_seeds_every_key() {
        let form = FormState::default();
        assert_eq!(form.iter().count(), FieldKey::COUNT);
        for (key, value) in form.iter() {
            assert_eq!(value.kind(), key.kind());
        }
    }

    #[test]
    fn test_new_applies_selections() {
        let form = FormState::new(PlanId::FleetEnterprise, IndustryId::Construction);
        assert_eq!(form.plan(), PlanId::FleetEnterprise);
        assert_eq!(form.industry(), IndustryId::Construction);
        assert_eq!(form.billing_cycle(), BillingCycle::Monthly);
    }

    #[test]
    fn test_set_accepts_matching_kind() {
        let mut form = FormState::default();
        form.set(FieldKey::Company, FieldValue::text("Acme Freight"))
            .unwrap();
        assert_eq!(form.text(FieldKey::Company), "Acme Freight");
    }

    #[test]
    fn test_set_rejects_wrong_kind_and_keeps_value() {
        let mut form = FormState::default();
        let err = form
            .set(FieldKey::Terms, FieldValue::text("yes"))
            .unwrap_err();
        assert_eq!(
            err,
            WizardError::FieldKindMismatch {
                key: FieldKey::Terms,
                expected: FieldKind::Flag,
                actual: FieldKind::Text,
            }
        );
        assert!(!form.flag(FieldKey::Terms));
    }

    #[test]
    fn test_text_is_trimmed() {
        let mut form = FormState::default();
        form.set(FieldKey::FirstName, FieldValue::text("  Ada "))
            .unwrap();
        assert_eq!(form.text(FieldKey::FirstName), "Ada");
    }

    #[test]
    fn test_full_name() {
        let mut form = FormState::default();
        form.set(FieldKey::FirstName, FieldValue::text("Ada")).unwrap();
        form.set(FieldKey::LastName, FieldValue::text("Lovelace"))
            .unwrap();
        assert_eq!(form.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_choices_default_empty() {
        let form = FormState::default();
        assert!(form.choices(FieldKey::Challenges).is_empty());
        assert!(form.choices(FieldKey::Company).is_empty());
    }
}
