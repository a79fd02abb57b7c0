//! Registration payload handed to the submitter

use crate::catalog::{IndustryId, PlanId};
use crate::state::{FieldKey, FormState};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the free trial granted on registration
pub const TRIAL_PERIOD_DAYS: i64 = 14;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub company: String,
    pub role: String,
    pub industry: IndustryId,
    pub plan: PlanId,
    pub registration_date: DateTime<Utc>,
    pub trial_expiry_date: DateTime<Utc>,
}

impl RegistrationPayload {
    /// Project a completed form into a payload. Deterministic in its inputs.
    pub fn from_form(form: &FormState, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: form.text(FieldKey::Email).to_string(),
            name: form.full_name(),
            company: form.text(FieldKey::Company).to_string(),
            role: form.text(FieldKey::Role).to_string(),
            industry: form.industry(),
            plan: form.plan(),
            registration_date: now,
            trial_expiry_date: now + Duration::days(TRIAL_PERIOD_DAYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldValue;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn filled_form() -> FormState {
        let mut form = FormState::new(PlanId::FleetEnterprise, IndustryId::Logistics);
        for (key, value) in [
            (FieldKey::FirstName, " Grace "),
            (FieldKey::LastName, "Hopper"),
            (FieldKey::Email, "grace@navy.mil"),
            (FieldKey::Company, "Navy Logistics"),
            (FieldKey::Role, "Director"),
        ] {
            form.set(key, FieldValue::text(value)).unwrap();
        }
        form
    }

    #[test]
    fn test_projection_is_deterministic() {
        let id = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let form = filled_form();
        assert_eq!(
            RegistrationPayload::from_form(&form, id, now),
            RegistrationPayload::from_form(&form, id, now)
        );
    }

    #[test]
    fn test_projection_fields() {
        let id = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let payload = RegistrationPayload::from_form(&filled_form(), id, now);

        assert_eq!(payload.id, id);
        assert_eq!(payload.name, "Grace Hopper");
        assert_eq!(payload.email, "grace@navy.mil");
        assert_eq!(payload.company, "Navy Logistics");
        assert_eq!(payload.role, "Director");
        assert_eq!(payload.industry, IndustryId::Logistics);
        assert_eq!(payload.plan, PlanId::FleetEnterprise);
    }

    #[test]
    fn test_trial_expires_fourteen_days_later() {
        let now = Utc.with_ymd_and_hms(2026, 12, 25, 0, 0, 0).unwrap();
        let payload = RegistrationPayload::from_form(&filled_form(), Uuid::new_v4(), now);
        assert_eq!(
            payload.trial_expiry_date,
            Utc.with_ymd_and_hms(2027, 1, 8, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_serializes_camel_case_with_iso_dates() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let payload = RegistrationPayload::from_form(&filled_form(), Uuid::nil(), now);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["registrationDate"], "2026-03-01T12:00:00Z");
        assert_eq!(json["trialExpiryDate"], "2026-03-15T12:00:00Z");
        assert_eq!(json["industry"], "logistics");
        assert_eq!(json["plan"], "fleet-enterprise");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
    }
}
