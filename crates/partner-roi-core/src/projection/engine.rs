use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::params::{PartnerAssumptions, ProjectionParameters};
use crate::error::RoiError;
use crate::types::{round_to_unit, with_metadata, ComputationOutput, Money};
use crate::RoiResult;

/// Fixed projection horizon in months.
pub const PROJECTION_MONTHS: u32 = 24;

/// Month whose cumulative cash is reported as first-year profit.
pub const FIRST_YEAR_MONTH: u32 = 12;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One month of the projection. Money fields are rounded to whole units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// 1-based month index
    pub month: u32,
    pub revenue: Money,
    pub expenses: Money,
    pub net_monthly: Money,
    /// Running balance after this month, starting from -(initial investment)
    pub cumulative_cash: Money,
}

/// Headline metrics derived from the completed series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub initial_investment: Money,
    pub monthly_burn: Money,
    pub monthly_revenue_at_scale: Money,
    pub monthly_net_at_scale: Money,
    /// First month with non-negative cumulative cash, if any within the horizon
    pub breakeven_month: Option<u32>,
    pub first_year_profit: Money,
    /// Percentage; `None` when there is no initial investment to return on
    pub roi_year1_pct: Option<Decimal>,
    pub two_year_profit: Money,
    pub roi_year2_pct: Option<Decimal>,
    pub total_revenue: Money,
}

/// Monthly series plus summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionOutput {
    pub monthly: Vec<MonthlyRecord>,
    pub summary: ProjectionSummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project the partnership's cash position over the 24-month horizon.
///
/// Revenue ramps linearly from `1/R` of capacity in month 1 to full capacity
/// in month `R` (`R = ramp_up_months`) and holds there. Cash accumulates at
/// full precision; records carry rounded figures. Pure: identical parameters
/// always give an identical result.
pub fn compute_projection(params: &ProjectionParameters) -> RoiResult<ProjectionOutput> {
    params.validate()?;

    let initial_investment = params.initial_investment()?;
    let total_monthly_cost = params.total_monthly_cost()?;
    let max_monthly_revenue = params.max_monthly_revenue()?;
    let ramp = Decimal::from(params.ramp_up_months);

    let mut cumulative_cash = -initial_investment;
    let mut breakeven_month: Option<u32> = None;
    let mut monthly = Vec::with_capacity(PROJECTION_MONTHS as usize);

    for month in 1..=PROJECTION_MONTHS {
        let revenue = if month <= params.ramp_up_months {
            match max_monthly_revenue.checked_mul(Decimal::from(month)) {
                Some(scaled) => scaled / ramp,
                None => return Err(RoiError::overflow(format!("ramp revenue in month {month}"))),
            }
        } else {
            max_monthly_revenue
        };
        // Both terms are non-negative, so the difference stays in range
        let net_monthly = revenue - total_monthly_cost;
        cumulative_cash = match cumulative_cash.checked_add(net_monthly) {
            Some(next) => next,
            None => {
                return Err(RoiError::overflow(format!(
                    "cumulative cash in month {month}"
                )))
            }
        };

        if breakeven_month.is_none() && cumulative_cash >= Decimal::ZERO {
            breakeven_month = Some(month);
        }

        monthly.push(MonthlyRecord {
            month,
            revenue: round_to_unit(revenue),
            expenses: round_to_unit(total_monthly_cost),
            net_monthly: round_to_unit(net_monthly),
            cumulative_cash: round_to_unit(cumulative_cash),
        });
    }

    let summary = summarize(
        Baseline {
            initial_investment,
            total_monthly_cost,
            max_monthly_revenue,
        },
        &monthly,
        breakeven_month,
    )?;

    tracing::debug!(
        breakeven_month = ?summary.breakeven_month,
        two_year_profit = %summary.two_year_profit,
        "projection computed"
    );

    Ok(ProjectionOutput { monthly, summary })
}

/// Run [`compute_projection`] and wrap the result in the standard envelope
/// with methodology, echoed assumptions, and advisory warnings.
pub fn run_projection(
    params: &ProjectionParameters,
) -> RoiResult<ComputationOutput<ProjectionOutput>> {
    let start = Instant::now();

    let output = compute_projection(params)?;
    let covers_costs = params.max_monthly_revenue()? > params.total_monthly_cost()?;
    let warnings = projection_warnings(covers_costs, &output.summary);

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "24-month partner cash flow projection with linear ramp-up",
        &PartnerAssumptions::from_parameters(params),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Unrounded constants derived once from the parameters.
struct Baseline {
    initial_investment: Money,
    total_monthly_cost: Money,
    max_monthly_revenue: Money,
}

fn summarize(
    baseline: Baseline,
    monthly: &[MonthlyRecord],
    breakeven_month: Option<u32>,
) -> RoiResult<ProjectionSummary> {
    let monthly_burn = round_to_unit(baseline.total_monthly_cost);
    let monthly_revenue_at_scale = round_to_unit(baseline.max_monthly_revenue);

    let first_year_profit = cumulative_at(monthly, FIRST_YEAR_MONTH);
    let two_year_profit = cumulative_at(monthly, PROJECTION_MONTHS);

    let total_revenue = monthly
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.revenue))
        .ok_or_else(|| RoiError::overflow("total revenue"))?;

    Ok(ProjectionSummary {
        initial_investment: round_to_unit(baseline.initial_investment),
        monthly_burn,
        monthly_revenue_at_scale,
        monthly_net_at_scale: monthly_revenue_at_scale - monthly_burn,
        breakeven_month,
        first_year_profit,
        roi_year1_pct: roi_pct(first_year_profit, baseline.initial_investment)?,
        two_year_profit,
        roi_year2_pct: roi_pct(two_year_profit, baseline.initial_investment)?,
        total_revenue,
    })
}

/// Cumulative cash of the given month; the horizon always covers it.
fn cumulative_at(monthly: &[MonthlyRecord], month: u32) -> Money {
    monthly
        .get(month as usize - 1)
        .map(|r| r.cumulative_cash)
        .unwrap_or(Decimal::ZERO)
}

/// Return on investment as a percentage, or `None` with nothing invested.
fn roi_pct(profit: Money, investment: Money) -> RoiResult<Option<Decimal>> {
    if investment.is_zero() {
        return Ok(None);
    }
    match profit
        .checked_div(investment)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
    {
        Some(pct) => Ok(Some(pct.round_dp(2).normalize())),
        None => Err(RoiError::overflow("return on investment")),
    }
}

fn projection_warnings(covers_costs: bool, summary: &ProjectionSummary) -> Vec<String> {
    let mut warnings = Vec::new();

    if !covers_costs {
        warnings.push(format!(
            "Revenue at full capacity ({}) does not cover monthly costs ({})",
            summary.monthly_revenue_at_scale, summary.monthly_burn
        ));
    }
    if summary.breakeven_month.is_none() {
        warnings.push(format!(
            "Breakeven not reached within the {PROJECTION_MONTHS}-month horizon"
        ));
    }
    if summary.roi_year1_pct.is_none() {
        warnings.push("ROI not applicable: initial investment is zero".to_string());
    }

    warnings
}
