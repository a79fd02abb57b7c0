//! Industry catalog

use crate::error::CatalogError;
use crate::state::FieldKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Industry identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndustryId {
    #[default]
    Fleets,
    Logistics,
    Construction,
    PublicSector,
    FieldServices,
}

impl IndustryId {
    /// All industries in display order
    pub const ALL: [IndustryId; 5] = [
        IndustryId::Fleets,
        IndustryId::Logistics,
        IndustryId::Construction,
        IndustryId::PublicSector,
        IndustryId::FieldServices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fleets => "fleets",
            Self::Logistics => "logistics",
            Self::Construction => "construction",
            Self::PublicSector => "public-sector",
            Self::FieldServices => "field-services",
        }
    }

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|id| id == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let index = Self::ALL.iter().position(|id| id == self).unwrap_or(0);
        if index == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[index - 1]
        }
    }

    /// Look up the configuration for this industry
    pub fn config(&self) -> &'static IndustryConfig {
        IndustryConfig::lookup(*self)
    }
}

impl fmt::Display for IndustryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndustryId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownIndustry(s.to_string()))
    }
}

/// How an industry question collects its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Select,
    Text,
}

/// An additional required question asked only for one industry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub key: FieldKey,
    pub label: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [&'static str],
}

/// Display metadata and extra questions for an industry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryConfig {
    pub id: IndustryId,
    pub name: &'static str,
    pub description: &'static str,
    /// Questions required on the organization step, in display order
    pub specific_questions: &'static [Question],
}

impl IndustryConfig {
    pub fn lookup(id: IndustryId) -> &'static IndustryConfig {
        match id {
            IndustryId::Fleets => &FLEETS,
            IndustryId::Logistics => &LOGISTICS,
            IndustryId::Construction => &CONSTRUCTION,
            IndustryId::PublicSector => &PUBLIC_SECTOR,
            IndustryId::FieldServices => &FIELD_SERVICES,
        }
    }

    pub fn all() -> impl Iterator<Item = &'static IndustryConfig> {
        IndustryId::ALL.into_iter().map(Self::lookup)
    }
}

static FLEETS: IndustryConfig = IndustryConfig {
    id: IndustryId::Fleets,
    name: "Commercial Fleets",
    description: "Trucking, delivery and service vehicle operators",
    specific_questions: &[
        Question {
            key: FieldKey::FleetSize,
            label: "Fleet size",
            kind: QuestionKind::Select,
            options: &["1-50", "51-250", "251-1000", "1000+"],
        },
        Question {
            key: FieldKey::FleetType,
            label: "Primary vehicle type",
            kind: QuestionKind::Select,
            options: &["Light duty", "Heavy duty", "Mixed", "Specialty"],
        },
    ],
};

static LOGISTICS: IndustryConfig = IndustryConfig {
    id: IndustryId::Logistics,
    name: "Logistics & Distribution",
    description: "Freight, last-mile and third-party logistics",
    specific_questions: &[
        Question {
            key: FieldKey::ShipmentVolume,
            label: "Monthly shipments",
            kind: QuestionKind::Select,
            options: &["Under 1k", "1k-10k", "10k-100k", "100k+"],
        },
        Question {
            key: FieldKey::WarehouseCount,
            label: "Warehouses",
            kind: QuestionKind::Select,
            options: &["1", "2-5", "6-20", "20+"],
        },
    ],
};

static CONSTRUCTION: IndustryConfig = IndustryConfig {
    id: IndustryId::Construction,
    name: "Construction",
    description: "Heavy equipment and job-site operations",
    specific_questions: &[
        Question {
            key: FieldKey::EquipmentCount,
            label: "Tracked equipment",
            kind: QuestionKind::Select,
            options: &["1-25", "26-100", "101-500", "500+"],
        },
        Question {
            key: FieldKey::SiteCount,
            label: "Active job sites",
            kind: QuestionKind::Select,
            options: &["1-5", "6-20", "21-50", "50+"],
        },
    ],
};

static PUBLIC_SECTOR: IndustryConfig = IndustryConfig {
    id: IndustryId::PublicSector,
    name: "Public Sector",
    description: "Municipal, state and federal fleets",
    specific_questions: &[
        Question {
            key: FieldKey::AgencyType,
            label: "Agency type",
            kind: QuestionKind::Select,
            options: &["Municipal", "County", "State", "Federal"],
        },
        Question {
            key: FieldKey::ProcurementVehicle,
            label: "Procurement vehicle",
            kind: QuestionKind::Text,
            options: &[],
        },
    ],
};

static FIELD_SERVICES: IndustryConfig = IndustryConfig {
    id: IndustryId::FieldServices,
    name: "Field Services",
    description: "Technicians and mobile service crews",
    specific_questions: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKind;

    #[test]
    fn test_default_is_fleets() {
        assert_eq!(IndustryId::default(), IndustryId::Fleets);
    }

    #[test]
    fn test_every_id_resolves_to_its_own_config() {
        for id in IndustryId::ALL {
            assert_eq!(IndustryConfig::lookup(id).id, id);
        }
    }

    #[test]
    fn test_parse_round_trips_through_as_str() {
        for id in IndustryId::ALL {
            assert_eq!(id.as_str().parse::<IndustryId>(), Ok(id));
        }
    }

    #[test]
    fn test_parse_unknown_is_error() {
        assert_eq!(
            "mining".parse::<IndustryId>(),
            Err(CatalogError::UnknownIndustry("mining".to_string()))
        );
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(IndustryId::FieldServices.next(), IndustryId::Fleets);
        assert_eq!(IndustryId::Fleets.prev(), IndustryId::FieldServices);
        assert_eq!(IndustryId::Fleets.next().prev(), IndustryId::Fleets);
    }

    #[test]
    fn test_fleets_asks_size_and_type() {
        let keys: Vec<_> = IndustryId::Fleets
            .config()
            .specific_questions
            .iter()
            .map(|q| q.key)
            .collect();
        assert_eq!(keys, vec![FieldKey::FleetSize, FieldKey::FleetType]);
    }

    #[test]
    fn test_question_keys_are_text_fields() {
        for config in IndustryConfig::all() {
            for question in config.specific_questions {
                assert_eq!(question.key.kind(), FieldKind::Text, "{}", question.key);
            }
        }
    }

    #[test]
    fn test_select_questions_have_options() {
        for config in IndustryConfig::all() {
            for question in config.specific_questions {
                if question.kind == QuestionKind::Select {
                    assert!(!question.options.is_empty(), "{}", question.key);
                }
            }
        }
    }

    #[test]
    fn test_question_keys_are_not_shared_between_industries() {
        let mut seen = Vec::new();
        for config in IndustryConfig::all() {
            for question in config.specific_questions {
                assert!(!seen.contains(&question.key), "{}", question.key);
                seen.push(question.key);
            }
        }
    }

    #[test]
    fn test_serializes_as_kebab_case() {
        let json = serde_json::to_string(&IndustryId::PublicSector).unwrap();
        assert_eq!(json, "\"public-sector\"");
    }
}
