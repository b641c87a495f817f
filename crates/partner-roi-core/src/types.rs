use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Percentages as entered at the boundary (30 = 30%).
pub type Percent = Decimal;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Round half toward positive infinity to whole currency units.
///
/// -2.5 rounds to -2 and 2.5 rounds to 3, the same convention a browser's
/// `Math.round` applies to displayed figures.
pub fn round_to_unit(value: Decimal) -> Decimal {
    match value.checked_add(dec!(0.5)) {
        Some(shifted) => shifted.floor().normalize(),
        // Only integers sit this close to the top of the range
        None => value.normalize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_unit_half_goes_up() {
        assert_eq!(round_to_unit(dec!(2.5)), dec!(3));
        assert_eq!(round_to_unit(dec!(-2.5)), dec!(-2));
        assert_eq!(round_to_unit(dec!(-2.51)), dec!(-3));
        assert_eq!(round_to_unit(dec!(1499.9999)), dec!(1500));
    }

    #[test]
    fn test_round_to_unit_drops_scale() {
        assert_eq!(round_to_unit(dec!(1500.00)).to_string(), "1500");
        assert_eq!(round_to_unit(dec!(-0.4)).to_string(), "0");
    }

    #[test]
    fn test_round_to_unit_at_range_limit() {
        assert_eq!(round_to_unit(Decimal::MAX), Decimal::MAX);
    }
}
