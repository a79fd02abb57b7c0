//! Derived pricing figures

use crate::catalog::{BillingCycle, PlanConfig};

/// Figures shown in the plan summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// Effective per-month price for the chosen billing cycle
    pub monthly_cost: u32,
    /// Saving over twelve months of annual billing; shown only for annual
    pub annual_savings: i64,
    /// One-time fee, independent of billing cycle
    pub setup_fee: u32,
}

impl PriceBreakdown {
    /// Twelve months at the effective price plus setup
    pub fn first_year_total(&self) -> u64 {
        u64::from(self.monthly_cost)
            .saturating_mul(12)
            .saturating_add(u64::from(self.setup_fee))
    }
}

pub fn derive(plan: &PlanConfig, cycle: BillingCycle) -> PriceBreakdown {
    let pricing = plan.pricing;
    let monthly_cost = match cycle {
        BillingCycle::Annual => pricing.annual,
        BillingCycle::Monthly => pricing.monthly,
    };

    PriceBreakdown {
        monthly_cost,
        annual_savings: (i64::from(pricing.monthly) - i64::from(pricing.annual)) * 12,
        setup_fee: pricing.setup,
    }
}
