use serde::Serialize;
use serde_json::Value;

use partner_roi_core::presets::{self, Preset};
use partner_roi_core::projection::{PartnerAssumptions, ProjectionSummary};

#[derive(Debug, Serialize)]
struct PresetRow {
    preset: Preset,
    description: &'static str,
    #[serde(flatten)]
    assumptions: PartnerAssumptions,
}

#[derive(Debug, Serialize)]
struct ComparisonRow {
    preset: Preset,
    #[serde(flatten)]
    summary: ProjectionSummary,
}

pub fn run_presets() -> Result<Value, Box<dyn std::error::Error>> {
    let rows: Vec<PresetRow> = Preset::ALL
        .iter()
        .map(|&preset| PresetRow {
            preset,
            description: preset.description(),
            assumptions: preset.assumptions(),
        })
        .collect();
    Ok(serde_json::json!({ "results": rows }))
}

pub fn run_compare() -> Result<Value, Box<dyn std::error::Error>> {
    let rows: Vec<ComparisonRow> = presets::compare_presets()?
        .into_iter()
        .map(|c| ComparisonRow {
            preset: c.preset,
            summary: c.summary,
        })
        .collect();
    Ok(serde_json::json!({ "results": rows }))
}
