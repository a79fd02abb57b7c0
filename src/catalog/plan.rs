//! Plan catalog

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plan identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanId {
    FleetEssentials,
    #[default]
    FleetIntelligence,
    FleetEnterprise,
}

impl PlanId {
    pub const ALL: [PlanId; 3] = [
        PlanId::FleetEssentials,
        PlanId::FleetIntelligence,
        PlanId::FleetEnterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FleetEssentials => "fleet-essentials",
            Self::FleetIntelligence => "fleet-intelligence",
            Self::FleetEnterprise => "fleet-enterprise",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::FleetEssentials => Self::FleetIntelligence,
            Self::FleetIntelligence => Self::FleetEnterprise,
            Self::FleetEnterprise => Self::FleetEssentials,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::FleetEssentials => Self::FleetEnterprise,
            Self::FleetIntelligence => Self::FleetEssentials,
            Self::FleetEnterprise => Self::FleetIntelligence,
        }
    }

    pub fn config(&self) -> &'static PlanConfig {
        PlanConfig::lookup(*self)
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownPlan(s.to_string()))
    }
}

/// Billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Monthly => Self::Annual,
            Self::Annual => Self::Monthly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }
}

impl FromStr for BillingCycle {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "annual" => Ok(Self::Annual),
            other => Err(CatalogError::UnknownBillingCycle(other.to_string())),
        }
    }
}

/// Per-month prices in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanPricing {
    /// Price per month when billed monthly
    pub monthly: u32,
    /// Price per month when billed annually
    pub annual: u32,
    /// One-time onboarding fee
    pub setup: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    pub id: PlanId,
    pub name: &'static str,
    pub tagline: &'static str,
    pub pricing: PlanPricing,
    pub features: &'static [&'static str],
    pub compliance: &'static [&'static str],
}

impl PlanConfig {
    pub fn lookup(id: PlanId) -> &'static PlanConfig {
        match id {
            PlanId::FleetEssentials => &ESSENTIALS,
            PlanId::FleetIntelligence => &INTELLIGENCE,
            PlanId::FleetEnterprise => &ENTERPRISE,
        }
    }

    pub fn all() -> impl Iterator<Item = &'static PlanConfig> {
        PlanId::ALL.into_iter().map(Self::lookup)
    }
}

static ESSENTIALS: PlanConfig = PlanConfig {
    id: PlanId::FleetEssentials,
    name: "Fleet Essentials",
    tagline: "GPS tracking and maintenance basics",
    pricing: PlanPricing {
        monthly: 2500,
        annual: 2000,
        setup: 1500,
    },
    features: &[
        "Live GPS tracking",
        "Maintenance reminders",
        "Fuel reports",
    ],
    compliance: &["ELD"],
};

static INTELLIGENCE: PlanConfig = PlanConfig {
    id: PlanId::FleetIntelligence,
    name: "Fleet Intelligence",
    tagline: "Predictive analytics for growing fleets",
    pricing: PlanPricing {
        monthly: 8500,
        annual: 6800,
        setup: 5000,
    },
    features: &[
        "Everything in Essentials",
        "Predictive maintenance",
        "Driver safety scoring",
        "Route optimization",
    ],
    compliance: &["ELD", "IFTA", "DVIR"],
};

static ENTERPRISE: PlanConfig = PlanConfig {
    id: PlanId::FleetEnterprise,
    name: "Fleet Enterprise",
    tagline: "Dedicated support and custom integrations",
    pricing: PlanPricing {
        monthly: 18000,
        annual: 14400,
        setup: 12000,
    },
    features: &[
        "Everything in Intelligence",
        "Custom integrations",
        "Dedicated success manager",
        "99.9% uptime SLA",
    ],
    compliance: &["ELD", "IFTA", "DVIR", "SOC 2", "FedRAMP"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fleet_intelligence() {
        assert_eq!(PlanId::default(), PlanId::FleetIntelligence);
    }

    #[test]
    fn test_every_id_resolves_to_its_own_config() {
        for id in PlanId::ALL {
            assert_eq!(id.config().id, id);
        }
    }

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!(
            "fleet-enterprise".parse::<PlanId>(),
            Ok(PlanId::FleetEnterprise)
        );
        assert!(matches!(
            "platinum".parse::<PlanId>(),
            Err(CatalogError::UnknownPlan(_))
        ));
    }

    #[test]
    fn test_annual_never_costs_more_than_monthly() {
        for plan in PlanConfig::all() {
            assert!(plan.pricing.annual <= plan.pricing.monthly, "{}", plan.id);
        }
    }

    #[test]
    fn test_intelligence_pricing() {
        let pricing = PlanId::FleetIntelligence.config().pricing;
        assert_eq!(pricing.monthly, 8500);
        assert_eq!(pricing.annual, 6800);
    }

    #[test]
    fn test_next_cycles_through_all_plans() {
        let mut plan = PlanId::FleetEssentials;
        for _ in 0..PlanId::ALL.len() {
            plan = plan.next();
        }
        assert_eq!(plan, PlanId::FleetEssentials);
        assert_eq!(PlanId::FleetEssentials.prev(), PlanId::FleetEnterprise);
    }

    #[test]
    fn test_billing_cycle_toggle_and_parse() {
        assert_eq!(BillingCycle::Monthly.toggle(), BillingCycle::Annual);
        assert_eq!(BillingCycle::Annual.toggle(), BillingCycle::Monthly);
        assert_eq!("annual".parse::<BillingCycle>(), Ok(BillingCycle::Annual));
        assert!("weekly".parse::<BillingCycle>().is_err());
    }
}
