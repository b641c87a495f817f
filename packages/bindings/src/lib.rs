use napi::Result as NapiResult;
use napi_derive::napi;

use partner_roi_core::export;
use partner_roi_core::presets::{self, Preset};
use partner_roi_core::projection::{self, PartnerAssumptions};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_assumptions(input_json: &str) -> NapiResult<PartnerAssumptions> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Recompute the projection for the current form state. Intended to be called
/// on every edit; each call is independent.
#[napi]
pub fn compute_projection(input_json: String) -> NapiResult<String> {
    let params = parse_assumptions(&input_json)?
        .to_parameters()
        .map_err(to_napi_error)?;
    let output = projection::run_projection(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_preset_projection(preset: String) -> NapiResult<String> {
    let preset: Preset = preset.parse().map_err(to_napi_error)?;
    let params = preset.parameters().map_err(to_napi_error)?;
    let output = projection::run_projection(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Complete assumption bundle for a preset, for replacing the form state.
#[napi]
pub fn preset_assumptions(preset: String) -> NapiResult<String> {
    let preset: Preset = preset.parse().map_err(to_napi_error)?;
    serde_json::to_string(&preset.assumptions()).map_err(to_napi_error)
}

#[napi]
pub fn list_presets() -> NapiResult<String> {
    let names: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
    serde_json::to_string(&names).map_err(to_napi_error)
}

#[napi]
pub fn compare_presets() -> NapiResult<String> {
    let rows = presets::compare_presets().map_err(to_napi_error)?;
    serde_json::to_string(&rows).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[napi]
pub fn export_monthly_csv(input_json: String) -> NapiResult<String> {
    let params = parse_assumptions(&input_json)?
        .to_parameters()
        .map_err(to_napi_error)?;
    let output = projection::compute_projection(&params).map_err(to_napi_error)?;
    export::monthly_csv_string(&output.monthly).map_err(to_napi_error)
}
