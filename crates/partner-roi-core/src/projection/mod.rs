//! 24-month partner projection: validated parameters in, monthly series and
//! summary out.

pub mod engine;
pub mod params;

pub use engine::{
    compute_projection, run_projection, MonthlyRecord, ProjectionOutput, ProjectionSummary,
    FIRST_YEAR_MONTH, PROJECTION_MONTHS,
};
pub use params::{pct_to_rate, PartnerAssumptions, ProjectionParameters};
