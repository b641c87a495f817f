use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RoiError;
use crate::projection::{
    compute_projection, PartnerAssumptions, ProjectionParameters, ProjectionSummary,
};
use crate::RoiResult;

/// Named partnership models. Each one is a complete set of assumptions that
/// replaces whatever was entered before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Referral-style alliance: low investment, commission and volume
    Strategic,
    /// Direct reseller: moderate investment, commission and volume
    #[default]
    Direct,
    /// White-label partnership with dedicated staff
    WhiteLabel,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Strategic, Preset::Direct, Preset::WhiteLabel];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Strategic => "strategic",
            Preset::Direct => "direct",
            Preset::WhiteLabel => "white-label",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Strategic => "Low investment, low commission, low volume",
            Preset::Direct => "Moderate investment, commission and volume",
            Preset::WhiteLabel => {
                "High investment, high commission, high volume with dedicated staff"
            }
        }
    }

    pub fn assumptions(self) -> PartnerAssumptions {
        match self {
            Preset::Strategic => PartnerAssumptions {
                upfront_fee: dec!(10000),
                setup_costs: dec!(2500),
                monthly_tech_fee: dec!(200),
                monthly_marketing: dec!(500),
                monthly_staff_cost: dec!(0),
                avg_deal_value: dec!(15000),
                commission_pct: dec!(15),
                leads_per_month: dec!(15),
                conversion_pct: dec!(5),
                ramp_up_months: 3,
            },
            Preset::Direct => PartnerAssumptions {
                upfront_fee: dec!(25000),
                setup_costs: dec!(5000),
                monthly_tech_fee: dec!(500),
                monthly_marketing: dec!(2000),
                monthly_staff_cost: dec!(0),
                avg_deal_value: dec!(15000),
                commission_pct: dec!(30),
                leads_per_month: dec!(20),
                conversion_pct: dec!(5),
                ramp_up_months: 3,
            },
            Preset::WhiteLabel => PartnerAssumptions {
                upfront_fee: dec!(75000),
                setup_costs: dec!(15000),
                monthly_tech_fee: dec!(1500),
                monthly_marketing: dec!(5000),
                monthly_staff_cost: dec!(8000),
                avg_deal_value: dec!(15000),
                commission_pct: dec!(50),
                leads_per_month: dec!(50),
                conversion_pct: dec!(6),
                ramp_up_months: 6,
            },
        }
    }

    /// Normalised engine parameters for this preset.
    pub fn parameters(self) -> RoiResult<ProjectionParameters> {
        self.assumptions().to_parameters()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strategic" => Ok(Preset::Strategic),
            "direct" => Ok(Preset::Direct),
            "white-label" | "white_label" | "whitelabel" => Ok(Preset::WhiteLabel),
            _ => Err(RoiError::UnknownPreset(s.to_string())),
        }
    }
}

/// One row of a side-by-side preset comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetComparison {
    pub preset: Preset,
    pub description: String,
    pub summary: ProjectionSummary,
}

/// Project every preset and collect the summaries in declaration order.
pub fn compare_presets() -> RoiResult<Vec<PresetComparison>> {
    Preset::ALL
        .iter()
        .map(|&preset| -> RoiResult<PresetComparison> {
            let output = compute_projection(&preset.parameters()?)?;
            Ok(PresetComparison {
                preset,
                description: preset.description().to_string(),
                summary: output.summary,
            })
        })
        .collect()
}
