use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::fs::File;

use partner_roi_core::export::{self, DEFAULT_EXPORT_FILENAME};
use partner_roi_core::presets::Preset;
use partner_roi_core::projection::{self, PartnerAssumptions};

use crate::input;

/// Where the parameters come from, plus per-field overrides.
///
/// Rates are entered as percentages (30 for 30%).
#[derive(Args)]
pub struct ParamArgs {
    /// Path to JSON input file with partner assumptions
    #[arg(long)]
    pub input: Option<String>,

    /// Start from a preset: strategic, direct, white-label
    #[arg(long)]
    pub preset: Option<Preset>,

    /// One-time partnership fee
    #[arg(long)]
    pub upfront_fee: Option<Decimal>,

    /// One-time setup / integration cost
    #[arg(long)]
    pub setup_costs: Option<Decimal>,

    /// Monthly technology fee
    #[arg(long)]
    pub monthly_tech_fee: Option<Decimal>,

    /// Monthly marketing spend
    #[arg(long)]
    pub monthly_marketing: Option<Decimal>,

    /// Monthly dedicated staff cost
    #[arg(long)]
    pub monthly_staff_cost: Option<Decimal>,

    /// Average deal value (TCV)
    #[arg(long)]
    pub avg_deal_value: Option<Decimal>,

    /// Commission retained, in percent (e.g. 30)
    #[arg(long)]
    pub commission_pct: Option<Decimal>,

    /// Leads per month at full capacity
    #[arg(long)]
    pub leads_per_month: Option<Decimal>,

    /// Lead-to-deal conversion, in percent (e.g. 5)
    #[arg(long)]
    pub conversion_pct: Option<Decimal>,

    /// Months to reach full capacity (at least 1)
    #[arg(long)]
    pub ramp_up_months: Option<u32>,
}

/// Arguments for a projection run
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

/// Arguments for CSV export
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ExportArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Destination CSV file
    #[arg(long, default_value = DEFAULT_EXPORT_FILENAME)]
    pub file: String,
}

type Piped = Result<Option<PartnerAssumptions>, Box<dyn std::error::Error>>;

impl ParamArgs {
    /// Resolve the base assumptions (file, explicit preset, stdin, then the
    /// default preset) and apply any field flags on top.
    fn resolve(&self) -> Result<PartnerAssumptions, Box<dyn std::error::Error>> {
        self.resolve_with(input::stdin::read_stdin::<PartnerAssumptions>)
    }

    /// `piped` is only consulted when neither a file nor a preset was given.
    fn resolve_with(
        &self,
        piped: impl FnOnce() -> Piped,
    ) -> Result<PartnerAssumptions, Box<dyn std::error::Error>> {
        let mut assumptions: PartnerAssumptions = if let Some(ref path) = self.input {
            input::file::read_json(path)?
        } else if let Some(preset) = self.preset {
            preset.assumptions()
        } else if let Some(data) = piped()? {
            data
        } else {
            Preset::default().assumptions()
        };

        self.apply_overrides(&mut assumptions);
        Ok(assumptions)
    }

    fn apply_overrides(&self, assumptions: &mut PartnerAssumptions) {
        if let Some(v) = self.upfront_fee {
            assumptions.upfront_fee = v;
        }
        if let Some(v) = self.setup_costs {
            assumptions.setup_costs = v;
        }
        if let Some(v) = self.monthly_tech_fee {
            assumptions.monthly_tech_fee = v;
        }
        if let Some(v) = self.monthly_marketing {
            assumptions.monthly_marketing = v;
        }
        if let Some(v) = self.monthly_staff_cost {
            assumptions.monthly_staff_cost = v;
        }
        if let Some(v) = self.avg_deal_value {
            assumptions.avg_deal_value = v;
        }
        if let Some(v) = self.commission_pct {
            assumptions.commission_pct = v;
        }
        if let Some(v) = self.leads_per_month {
            assumptions.leads_per_month = v;
        }
        if let Some(v) = self.conversion_pct {
            assumptions.conversion_pct = v;
        }
        if let Some(v) = self.ramp_up_months {
            assumptions.ramp_up_months = v;
        }
    }
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = args.params.resolve()?.to_parameters()?;
    let result = projection::run_projection(&params)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = args.params.resolve()?.to_parameters()?;
    let output = projection::compute_projection(&params)?;

    let file = File::create(&args.file)
        .map_err(|e| format!("Failed to create '{}': {}", args.file, e))?;
    export::write_monthly_csv(&output.monthly, file)?;
    tracing::info!(file = %args.file, rows = output.monthly.len(), "exported monthly series");

    Ok(serde_json::json!({
        "file": args.file,
        "rows": output.monthly.len(),
        "breakeven_month": output.summary.breakeven_month,
    }))
}
