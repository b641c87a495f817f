use partner_roi_core::projection::{
    compute_projection, PartnerAssumptions, ProjectionParameters, PROJECTION_MONTHS,
};
use partner_roi_core::RoiError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn scenario_a() -> ProjectionParameters {
    ProjectionParameters {
        upfront_fee: dec!(25000),
        setup_costs: dec!(5000),
        monthly_tech_fee: dec!(500),
        monthly_marketing: dec!(2000),
        monthly_staff_cost: dec!(0),
        avg_deal_value: dec!(15000),
        commission_rate: dec!(0.30),
        leads_per_month: dec!(20),
        conversion_rate: dec!(0.05),
        ramp_up_months: 3,
    }
}

/// Parameter sets whose monthly figures are whole numbers, so rounding never
/// hides a difference between the records and the running balance.
fn exact_grid() -> Vec<ProjectionParameters> {
    let mut grid = Vec::new();
    for ramp in [1, 2, 3, 4, 5, 6, 9, 10, 12] {
        for upfront in [dec!(0), dec!(10000), dec!(60000)] {
            for marketing in [dec!(0), dec!(2000), dec!(6000)] {
                let mut p = scenario_a();
                p.ramp_up_months = ramp;
                p.upfront_fee = upfront;
                p.setup_costs = dec!(0);
                p.monthly_marketing = marketing;
                grid.push(p);
            }
        }
    }
    grid
}

// ===========================================================================
// Series shape
// ===========================================================================

#[test]
fn test_always_24_ordered_months() {
    for p in exact_grid() {
        let out = compute_projection(&p).unwrap();
        assert_eq!(out.monthly.len(), PROJECTION_MONTHS as usize);
        for (i, r) in out.monthly.iter().enumerate() {
            assert_eq!(r.month, i as u32 + 1);
        }
    }
}

#[test]
fn test_expenses_constant() {
    let out = compute_projection(&scenario_a()).unwrap();
    assert!(out.monthly.iter().all(|r| r.expenses == dec!(2500)));
}

// ===========================================================================
// Accumulation identity
// ===========================================================================

#[test]
fn test_cumulative_equals_investment_plus_running_net() {
    for p in exact_grid() {
        let out = compute_projection(&p).unwrap();
        let mut running = -p.initial_investment().unwrap();
        for r in &out.monthly {
            running += r.net_monthly;
            assert_eq!(r.cumulative_cash, running, "month {} of {:?}", r.month, p);
        }
    }
}

#[test]
fn test_cumulative_within_rounding_of_running_net() {
    // Fractional inputs: each record is off by at most half a unit per step
    let mut p = scenario_a();
    p.avg_deal_value = dec!(14999.99);
    p.monthly_tech_fee = dec!(499.45);
    p.ramp_up_months = 7;
    let out = compute_projection(&p).unwrap();

    let mut running = -p.initial_investment().unwrap();
    for r in &out.monthly {
        running += r.net_monthly;
        let tolerance = Decimal::from(r.month);
        assert!(
            (r.cumulative_cash - running).abs() <= tolerance,
            "month {}: {} vs {}",
            r.month,
            r.cumulative_cash,
            running
        );
    }
}

// ===========================================================================
// Ramp-up
// ===========================================================================

#[test]
fn test_ramp_strictly_increasing_then_flat() {
    for ramp in 2..=12u32 {
        let mut p = scenario_a();
        p.ramp_up_months = ramp;
        let out = compute_projection(&p).unwrap();
        let revenue: Vec<Decimal> = out.monthly.iter().map(|r| r.revenue).collect();
        let r = ramp as usize;

        for m in 1..r {
            assert!(revenue[m - 1] < revenue[m], "ramp {ramp}, month {m}");
        }
        for m in r..revenue.len() {
            assert_eq!(revenue[m], revenue[r - 1], "ramp {ramp}, month {}", m + 1);
        }
        assert_eq!(revenue[r - 1], dec!(4500));
    }
}

// ===========================================================================
// Breakeven
// ===========================================================================

#[test]
fn test_breakeven_is_first_non_negative_month() {
    for p in exact_grid() {
        let out = compute_projection(&p).unwrap();
        let expected = out
            .monthly
            .iter()
            .find(|r| r.cumulative_cash >= Decimal::ZERO)
            .map(|r| r.month);
        assert_eq!(out.summary.breakeven_month, expected, "{:?}", p);
    }
}

#[test]
fn test_breakeven_scenario_a() {
    let out = compute_projection(&scenario_a()).unwrap();
    assert_eq!(out.summary.breakeven_month, Some(18));
    assert_eq!(out.monthly[16].cumulative_cash, dec!(-500));
    assert_eq!(out.monthly[17].cumulative_cash, dec!(1500));
}

#[test]
fn test_no_breakeven_when_costs_exceed_revenue() {
    let mut p = scenario_a();
    p.monthly_staff_cost = dec!(2000);
    let out = compute_projection(&p).unwrap();
    assert!(p.max_monthly_revenue().unwrap() <= p.total_monthly_cost().unwrap());
    assert_eq!(out.summary.breakeven_month, None);
}

#[test]
fn test_no_breakeven_when_deficit_too_deep() {
    // Profitable at scale, but 2000 / month cannot recover 100k in 24 months
    let mut p = scenario_a();
    p.upfront_fee = dec!(100000);
    let out = compute_projection(&p).unwrap();
    assert!(out.summary.monthly_net_at_scale > Decimal::ZERO);
    assert_eq!(out.summary.breakeven_month, None);
}

#[test]
fn test_zero_investment_breaks_even_in_month_one_when_profitable() {
    let mut p = scenario_a();
    p.upfront_fee = dec!(0);
    p.setup_costs = dec!(0);
    p.ramp_up_months = 1;
    let out = compute_projection(&p).unwrap();
    // capacity 3e11 / month against a 1e12 investment
    assert_eq!(out.summary.breakeven_month, Some(5));
}

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_scenario_b_no_revenue() {
    let mut p = scenario_a();
    p.leads_per_month = dec!(0);
    let out = compute_projection(&p).unwrap();

    assert_eq!(out.summary.monthly_revenue_at_scale, dec!(0));
    assert!(out.monthly.iter().all(|r| r.net_monthly == dec!(-2500)));
    for pair in out.monthly.windows(2) {
        assert!(pair[1].cumulative_cash < pair[0].cumulative_cash);
    }
    assert_eq!(out.summary.breakeven_month, None);
    assert_eq!(out.summary.two_year_profit, dec!(-90000));
}

#[test]
fn test_scenario_c_zero_investment_roi_not_applicable() {
    let mut p = scenario_a();
    p.upfront_fee = dec!(0);
    p.setup_costs = dec!(0);
    let out = compute_projection(&p).unwrap();

    assert_eq!(out.summary.initial_investment, dec!(0));
    assert_eq!(out.summary.roi_year1_pct, None);
    assert_eq!(out.summary.roi_year2_pct, None);
    // -1000 + 500 + 2000 * 10
    assert_eq!(out.summary.first_year_profit, dec!(19500));
}

#[test]
fn test_roi_serialises_as_null_when_not_applicable() {
    let mut p = scenario_a();
    p.upfront_fee = dec!(0);
    p.setup_costs = dec!(0);
    let out = compute_projection(&p).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert!(json["summary"]["roi_year1_pct"].is_null());
}

// ===========================================================================
// Purity
// ===========================================================================

#[test]
fn test_identical_inputs_identical_output() {
    let p = scenario_a();
    let first = serde_json::to_string(&compute_projection(&p).unwrap()).unwrap();
    let second = serde_json::to_string(&compute_projection(&p).unwrap()).unwrap();
    assert_eq!(first, second);
}

// ===========================================================================
// Boundary validation
// ===========================================================================

#[test]
fn test_zero_ramp_rejected_not_clamped() {
    let mut p = scenario_a();
    p.ramp_up_months = 0;
    match compute_projection(&p) {
        Err(RoiError::InvalidParameter { field, .. }) => assert_eq!(field, "ramp_up_months"),
        other => panic!("Expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn test_near_max_deal_value_is_an_error_not_a_panic() {
    let mut p = scenario_a();
    p.avg_deal_value = Decimal::MAX;
    p.leads_per_month = dec!(2);
    assert!(matches!(
        compute_projection(&p),
        Err(RoiError::Overflow { .. })
    ));

    // Same input entered as percentages
    let mut a = PartnerAssumptions::from_parameters(&scenario_a());
    a.avg_deal_value = Decimal::MAX - dec!(1);
    a.leads_per_month = dec!(3);
    let params = a.to_parameters().unwrap();
    assert!(compute_projection(&params).is_err());
}

#[test]
fn test_large_but_representable_values_still_project() {
    let mut p = scenario_a();
    p.avg_deal_value = dec!(1000000000000);
    p.upfront_fee = dec!(1000000000000);
    let out = compute_projection(&p).unwrap();
    assert_eq!(out.monthly.len(), PROJECTION_MONTHS as usize);
    // capacity 3e11 / month against a 1e12 investment
    assert_eq!(out.summary.breakeven_month, Some(5));
}

#[test]
fn test_assumptions_json_boundary() {
    let json = r#"{
        "upfront_fee": 25000,
        "setup_costs": 5000,
        "monthly_tech_fee": 500,
        "monthly_marketing": 2000,
        "monthly_staff_cost": 0,
        "avg_deal_value": 15000,
        "commission_pct": 30,
        "leads_per_month": 20,
        "conversion_pct": 5,
        "ramp_up_months": 3
    }"#;
    let assumptions: PartnerAssumptions = serde_json::from_str(json).unwrap();
    let params = assumptions.to_parameters().unwrap();
    assert_eq!(params, scenario_a());
}

#[test]
fn test_negative_ramp_fails_to_parse() {
    let json = r#"{
        "upfront_fee": 0, "setup_costs": 0, "monthly_tech_fee": 0,
        "monthly_marketing": 0, "monthly_staff_cost": 0, "avg_deal_value": 0,
        "commission_pct": 0, "leads_per_month": 0, "conversion_pct": 0,
        "ramp_up_months": -1
    }"#;
    assert!(serde_json::from_str::<PartnerAssumptions>(json).is_err());
}
