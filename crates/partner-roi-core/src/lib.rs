pub mod error;
pub mod projection;
pub mod types;

#[cfg(feature = "presets")]
pub mod presets;

#[cfg(feature = "export")]
pub mod export;

pub use error::RoiError;
pub use projection::{
    compute_projection, run_projection, MonthlyRecord, PartnerAssumptions, ProjectionOutput,
    ProjectionParameters, ProjectionSummary,
};
pub use types::*;

/// Standard result type for all partner-roi operations
pub type RoiResult<T> = Result<T, RoiError>;
