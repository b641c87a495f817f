use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoiError {
    #[error("Invalid parameter: {field} — {reason}")]
    InvalidParameter { field: String, reason: String },

    #[error("Arithmetic overflow: {context}")]
    Overflow { context: String },

    #[error("Unknown preset: {0} (expected strategic, direct or white-label)")]
    UnknownPreset(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl RoiError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        RoiError::InvalidParameter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        RoiError::Overflow {
            context: context.into(),
        }
    }
}

impl From<serde_json::Error> for RoiError {
    fn from(e: serde_json::Error) -> Self {
        RoiError::Serialization(e.to_string())
    }
}

#[cfg(feature = "export")]
impl From<csv::Error> for RoiError {
    fn from(e: csv::Error) -> Self {
        RoiError::Export(e.to_string())
    }
}

impl From<std::io::Error> for RoiError {
    fn from(e: std::io::Error) -> Self {
        RoiError::Export(e.to_string())
    }
}
