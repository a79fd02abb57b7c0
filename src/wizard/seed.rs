//! Seed parameters applied when a wizard is created

use crate::catalog::{BillingCycle, IndustryId, PlanId};
use crate::error::CatalogError;

/// Optional catalog pre-selections, usually taken from a query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedParams {
    pub plan: Option<PlanId>,
    pub industry: Option<IndustryId>,
    pub billing: Option<BillingCycle>,
}

impl SeedParams {
    /// Parse `plan=..&industry=..&billing=..`, with or without a leading `?`.
    ///
    /// Unrelated keys and empty values are ignored; an unknown plan,
    /// industry or billing cycle is an error.
    pub fn from_query(query: &str) -> Result<Self, CatalogError> {
        let mut seed = Self::default();
        let query = query.trim().trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                "plan" => seed.plan = Some(value.parse()?),
                "industry" => seed.industry = Some(value.parse()?),
                "billing" => seed.billing = Some(value.parse()?),
                _ => {}
            }
        }

        Ok(seed)
    }

    /// Fill unset values from `fallback`
    pub fn or(self, fallback: SeedParams) -> Self {
        Self {
            plan: self.plan.or(fallback.plan),
            industry: self.industry.or(fallback.industry),
            billing: self.billing.or(fallback.billing),
        }
    }

    pub fn plan_or_default(&self) -> PlanId {
        self.plan.unwrap_or_default()
    }

    pub fn industry_or_default(&self) -> IndustryId {
        self.industry.unwrap_or_default()
    }

    pub fn billing_or_default(&self) -> BillingCycle {
        self.billing.unwrap_or_default()
    }
}
