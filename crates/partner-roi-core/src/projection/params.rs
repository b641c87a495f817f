use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RoiError;
use crate::types::{Money, Percent, Rate};
use crate::RoiResult;

// ---------------------------------------------------------------------------
// Engine input
// ---------------------------------------------------------------------------

/// Normalised projection inputs consumed by the engine.
///
/// Rates are fractions in `[0, 1]`. Use [`PartnerAssumptions`] when values
/// arrive as percentages from a form or command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// One-time partnership fee paid at month 0
    pub upfront_fee: Money,
    /// One-time onboarding / integration cost at month 0
    pub setup_costs: Money,
    pub monthly_tech_fee: Money,
    pub monthly_marketing: Money,
    pub monthly_staff_cost: Money,
    /// Total contract value of an average closed deal
    pub avg_deal_value: Money,
    /// Share of deal value retained as revenue
    pub commission_rate: Rate,
    /// Leads generated per month at full capacity
    pub leads_per_month: Decimal,
    /// Share of leads that close
    pub conversion_rate: Rate,
    /// Months to reach full operating capacity (at least 1)
    pub ramp_up_months: u32,
}

impl ProjectionParameters {
    /// Check every field against its domain, reporting the first violation.
    pub fn validate(&self) -> RoiResult<()> {
        let non_negative = [
            ("upfront_fee", self.upfront_fee),
            ("setup_costs", self.setup_costs),
            ("monthly_tech_fee", self.monthly_tech_fee),
            ("monthly_marketing", self.monthly_marketing),
            ("monthly_staff_cost", self.monthly_staff_cost),
            ("avg_deal_value", self.avg_deal_value),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(RoiError::invalid(field, "Cannot be negative"));
            }
        }

        check_fraction("commission_rate", self.commission_rate)?;

        if self.leads_per_month < Decimal::ZERO {
            return Err(RoiError::invalid(
                "leads_per_month",
                "Cannot be negative",
            ));
        }

        check_fraction("conversion_rate", self.conversion_rate)?;

        if self.ramp_up_months < 1 {
            return Err(RoiError::invalid(
                "ramp_up_months",
                "Must be at least 1 month",
            ));
        }

        Ok(())
    }

    /// One-time costs incurred before month 1.
    pub fn initial_investment(&self) -> RoiResult<Money> {
        self.upfront_fee
            .checked_add(self.setup_costs)
            .ok_or_else(|| RoiError::overflow("upfront_fee + setup_costs"))
    }

    /// Fixed recurring cost per month.
    pub fn total_monthly_cost(&self) -> RoiResult<Money> {
        self.monthly_tech_fee
            .checked_add(self.monthly_marketing)
            .and_then(|sum| sum.checked_add(self.monthly_staff_cost))
            .ok_or_else(|| {
                RoiError::overflow("monthly_tech_fee + monthly_marketing + monthly_staff_cost")
            })
    }

    /// Revenue per month once ramp-up is complete.
    pub fn max_monthly_revenue(&self) -> RoiResult<Money> {
        // Rates are fractions, so only the first product can overflow
        match self.leads_per_month.checked_mul(self.avg_deal_value) {
            Some(gross) => Ok(gross * self.conversion_rate * self.commission_rate),
            None => Err(RoiError::overflow("leads_per_month * avg_deal_value")),
        }
    }
}

fn check_fraction(field: &str, value: Rate) -> RoiResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(RoiError::invalid(field, "Must be between 0 and 1"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Boundary input (percentages)
// ---------------------------------------------------------------------------

/// Partner assumptions as entered by a person: commission and conversion are
/// percentages (30 = 30%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerAssumptions {
    pub upfront_fee: Money,
    pub setup_costs: Money,
    pub monthly_tech_fee: Money,
    pub monthly_marketing: Money,
    pub monthly_staff_cost: Money,
    pub avg_deal_value: Money,
    pub commission_pct: Percent,
    pub leads_per_month: Decimal,
    pub conversion_pct: Percent,
    pub ramp_up_months: u32,
}

impl PartnerAssumptions {
    /// Normalise percentages to fractions and validate the result.
    pub fn to_parameters(&self) -> RoiResult<ProjectionParameters> {
        let params = ProjectionParameters {
            upfront_fee: self.upfront_fee,
            setup_costs: self.setup_costs,
            monthly_tech_fee: self.monthly_tech_fee,
            monthly_marketing: self.monthly_marketing,
            monthly_staff_cost: self.monthly_staff_cost,
            avg_deal_value: self.avg_deal_value,
            commission_rate: pct_to_rate("commission_pct", self.commission_pct)?,
            leads_per_month: self.leads_per_month,
            conversion_rate: pct_to_rate("conversion_pct", self.conversion_pct)?,
            ramp_up_months: self.ramp_up_months,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn from_parameters(params: &ProjectionParameters) -> Self {
        Self {
            upfront_fee: params.upfront_fee,
            setup_costs: params.setup_costs,
            monthly_tech_fee: params.monthly_tech_fee,
            monthly_marketing: params.monthly_marketing,
            monthly_staff_cost: params.monthly_staff_cost,
            avg_deal_value: params.avg_deal_value,
            commission_pct: (params.commission_rate * dec!(100)).normalize(),
            leads_per_month: params.leads_per_month,
            conversion_pct: (params.conversion_rate * dec!(100)).normalize(),
            ramp_up_months: params.ramp_up_months,
        }
    }
}

/// Convert a boundary percentage in `[0, 100]` to a fraction.
pub fn pct_to_rate(field: &str, pct: Percent) -> RoiResult<Rate> {
    if pct < Decimal::ZERO || pct > dec!(100) {
        return Err(RoiError::invalid(field, "Must be between 0 and 100"));
    }
    Ok(pct / dec!(100))
}
