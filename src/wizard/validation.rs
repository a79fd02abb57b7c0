//! Step-scoped validation
//!
//! `validate_step` only ever reports keys that belong to the step being
//! validated, so earlier steps can hold invalid values without blocking
//! later navigation.

use crate::catalog::IndustryConfig;
use crate::state::{ErrorMap, FieldKey, FormState, Step};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-().]{7,20}$").expect("phone pattern compiles"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Minimum digits in a phone number, separators aside
const MIN_PHONE_DIGITS: usize = 7;

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
        && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Validate the fields of one step.
///
/// Returns an empty map when the step is complete. An industry with no
/// questions adds no requirements to the organization step.
pub fn validate_step(step: Step, form: &FormState, industry: &IndustryConfig) -> ErrorMap {
    let mut errors = ErrorMap::new();

    match step {
        Step::Contact => {
            require_text(&mut errors, form, FieldKey::FirstName, "First name is required");
            require_text(&mut errors, form, FieldKey::LastName, "Last name is required");

            let email = form.text(FieldKey::Email);
            if email.is_empty() {
                errors.insert(FieldKey::Email, "Email is required".to_string());
            } else if !is_valid_email(email) {
                errors.insert(FieldKey::Email, "Enter a valid email address".to_string());
            }

            let phone = form.text(FieldKey::Phone);
            if !phone.is_empty() && !is_valid_phone(phone) {
                errors.insert(FieldKey::Phone, "Enter a valid phone number".to_string());
            }
        }
        Step::Organization => {
            require_text(&mut errors, form, FieldKey::Company, "Company name is required");
            require_text(&mut errors, form, FieldKey::Role, "Role is required");
            require_text(
                &mut errors,
                form,
                FieldKey::CompanySize,
                "Select a company size",
            );

            for question in industry.specific_questions {
                if form.get(question.key).is_blank() {
                    errors.insert(question.key, format!("{} is required", question.label));
                }
            }
        }
        Step::Planning => {
            require_text(
                &mut errors,
                form,
                FieldKey::Timeline,
                "Select a rollout timeline",
            );
        }
        Step::Consent => {
            if !form.flag(FieldKey::Terms) {
                errors.insert(
                    FieldKey::Terms,
                    "You must accept the Terms of Service".to_string(),
                );
            }
            if !form.flag(FieldKey::Privacy) {
                errors.insert(
                    FieldKey::Privacy,
                    "You must accept the Privacy Policy".to_string(),
                );
            }
        }
    }

    errors
}

/// Drop the error for one field. Returns whether an error was present.
pub fn clear_field_error(errors: &mut ErrorMap, key: FieldKey) -> bool {
    errors.remove(&key).is_some()
}

fn require_text(errors: &mut ErrorMap, form: &FormState, key: FieldKey, message: &str) {
    if form.text(key).is_empty() {
        errors.insert(key, message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{IndustryId, PlanId};
    use crate::state::FieldValue;
    use crate::wizard::schema::step_keys;
    use pretty_assertions::assert_eq;

    fn form_with(values: &[(FieldKey, FieldValue)]) -> FormState {
        let mut form = FormState::default();
        for (key, value) in values {
            form.set(*key, value.clone()).unwrap();
        }
        form
    }

    fn keys(errors: &ErrorMap) -> Vec<FieldKey> {
        errors.keys().copied().collect()
    }

    mod patterns {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_emails() {
            assert!(is_valid_email("ops@acme.io"));
            assert!(is_valid_email("first.last+fleet@sub.example.com"));
        }

        #[test]
        fn test_invalid_emails() {
            assert!(!is_valid_email("ops"));
            assert!(!is_valid_email("ops@acme"));
            assert!(!is_valid_email("ops @acme.io"));
            assert!(!is_valid_email("@acme.io"));
        }

        #[test]
        fn test_phone_accepts_common_formats() {
            assert!(is_valid_phone("+1 (555) 123-4567"));
            assert!(is_valid_phone("555.123.4567"));
            assert!(is_valid_phone("+4930123456"));
        }

        #[test]
        fn test_phone_rejects_letters_and_short_input() {
            assert!(!is_valid_phone("call me"));
            assert!(!is_valid_phone("12345"));
            assert!(!is_valid_phone("555-CALL-NOW"));
        }

        #[test]
        fn test_phone_needs_digits_not_just_separators() {
            assert!(!is_valid_phone("-------"));
            assert!(!is_valid_phone("((((((("));
            assert!(!is_valid_phone("(1) --- ---"));
            assert!(is_valid_phone("(555) 0100 99"));
        }
    }

    mod contact_step {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_names_and_email() {
            let errors = validate_step(
                Step::Contact,
                &FormState::default(),
                IndustryId::Fleets.config(),
            );
            assert_eq!(
                keys(&errors),
                vec![FieldKey::FirstName, FieldKey::LastName, FieldKey::Email]
            );
        }

        #[test]
        fn test_missing_phone_is_valid() {
            let form = form_with(&[
                (FieldKey::FirstName, FieldValue::text("Ada")),
                (FieldKey::LastName, FieldValue::text("Lovelace")),
                (FieldKey::Email, FieldValue::text("ada@fleet.io")),
            ]);
            assert!(validate_step(Step::Contact, &form, IndustryId::Fleets.config()).is_empty());
        }

        #[test]
        fn test_bad_email_and_phone() {
            let form = form_with(&[
                (FieldKey::FirstName, FieldValue::text("Ada")),
                (FieldKey::LastName, FieldValue::text("Lovelace")),
                (FieldKey::Email, FieldValue::text("ada-at-fleet")),
                (FieldKey::Phone, FieldValue::text("not a phone")),
            ]);
            let errors = validate_step(Step::Contact, &form, IndustryId::Fleets.config());
            assert_eq!(keys(&errors), vec![FieldKey::Email, FieldKey::Phone]);
            assert_eq!(errors[&FieldKey::Email], "Enter a valid email address");
        }

        #[test]
        fn test_whitespace_names_are_missing() {
            let form = form_with(&[
                (FieldKey::FirstName, FieldValue::text("   ")),
                (FieldKey::LastName, FieldValue::text("Lovelace")),
                (FieldKey::Email, FieldValue::text("ada@fleet.io")),
            ]);
            let errors = validate_step(Step::Contact, &form, IndustryId::Fleets.config());
            assert_eq!(keys(&errors), vec![FieldKey::FirstName]);
        }
    }

    mod organization_step {
        use super::*;
        use pretty_assertions::assert_eq;

        fn base_org() -> Vec<(FieldKey, FieldValue)> {
            vec![
                (FieldKey::Company, FieldValue::text("Acme Freight")),
                (FieldKey::Role, FieldValue::text("Fleet manager")),
                (FieldKey::CompanySize, FieldValue::text("51-200")),
            ]
        }

        #[test]
        fn test_fleets_requires_fleet_size_and_type() {
            let form = form_with(&base_org());
            let errors = validate_step(Step::Organization, &form, IndustryId::Fleets.config());
            assert_eq!(keys(&errors), vec![FieldKey::FleetSize, FieldKey::FleetType]);
            assert_eq!(errors[&FieldKey::FleetSize], "Fleet size is required");
        }

        #[test]
        fn test_only_missing_question_is_reported() {
            let mut values = base_org();
            values.push((FieldKey::FleetType, FieldValue::text("Mixed")));
            let form = form_with(&values);
            let errors = validate_step(Step::Organization, &form, IndustryId::Fleets.config());
            assert_eq!(keys(&errors), vec![FieldKey::FleetSize]);
        }

        #[test]
        fn test_industry_switch_changes_required_keys() {
            let mut values = base_org();
            values.push((FieldKey::FleetSize, FieldValue::text("1-50")));
            values.push((FieldKey::FleetType, FieldValue::text("Mixed")));
            let form = form_with(&values);

            let fleets = validate_step(Step::Organization, &form, IndustryId::Fleets.config());
            assert!(fleets.is_empty());

            let construction =
                validate_step(Step::Organization, &form, IndustryId::Construction.config());
            assert_eq!(
                keys(&construction),
                vec![FieldKey::EquipmentCount, FieldKey::SiteCount]
            );
        }

        #[test]
        fn test_industry_without_questions_adds_nothing() {
            let form = form_with(&base_org());
            let errors =
                validate_step(Step::Organization, &form, IndustryId::FieldServices.config());
            assert!(errors.is_empty());
        }

        #[test]
        fn test_invalid_contact_fields_are_not_reported() {
            let mut values = base_org();
            values.push((FieldKey::Email, FieldValue::text("broken")));
            let form = form_with(&values);
            let errors =
                validate_step(Step::Organization, &form, IndustryId::FieldServices.config());
            assert!(errors.is_empty());
        }
    }

    mod planning_and_consent {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_planning_requires_only_timeline() {
            let errors = validate_step(
                Step::Planning,
                &FormState::default(),
                IndustryId::Fleets.config(),
            );
            assert_eq!(keys(&errors), vec![FieldKey::Timeline]);
        }

        #[test]
        fn test_challenges_have_no_minimum() {
            let form = form_with(&[(FieldKey::Timeline, FieldValue::text("1-3 months"))]);
            assert!(validate_step(Step::Planning, &form, IndustryId::Fleets.config()).is_empty());
        }

        #[test]
        fn test_consent_requires_terms_and_privacy() {
            let form = form_with(&[(FieldKey::Marketing, FieldValue::Flag(true))]);
            let errors = validate_step(Step::Consent, &form, IndustryId::Fleets.config());
            assert_eq!(keys(&errors), vec![FieldKey::Terms, FieldKey::Privacy]);
        }

        #[test]
        fn test_marketing_is_optional() {
            let form = form_with(&[
                (FieldKey::Terms, FieldValue::Flag(true)),
                (FieldKey::Privacy, FieldValue::Flag(true)),
            ]);
            assert!(validate_step(Step::Consent, &form, IndustryId::Fleets.config()).is_empty());
        }
    }

    mod step_isolation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_errors_stay_within_step_schema() {
            let forms = [
                FormState::default(),
                FormState::new(PlanId::FleetEssentials, IndustryId::PublicSector),
                form_with(&[
                    (FieldKey::Email, FieldValue::text("x")),
                    (FieldKey::Phone, FieldValue::text("?")),
                ]),
            ];
            for form in &forms {
                let industry = form.industry().config();
                for step in Step::ALL {
                    let allowed = step_keys(step, industry);
                    for key in validate_step(step, form, industry).keys() {
                        assert!(allowed.contains(key), "{key} reported on {step}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_clear_field_error() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldKey::Email, "Email is required".to_string());
        assert!(clear_field_error(&mut errors, FieldKey::Email));
        assert!(!clear_field_error(&mut errors, FieldKey::Email));
        assert!(errors.is_empty());
    }
}
