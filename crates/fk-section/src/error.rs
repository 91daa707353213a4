//! Section geometry errors.

use fk_core::FkError;
use thiserror::Error;

pub type SectionResult<T> = Result<T, SectionError>;

/// Invalid section geometry. Raised before any meshing happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SectionError {
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Cover {cover} must be less than half the smaller dimension ({limit})")]
    CoverTooLarge { cover: f64, limit: f64 },

    #[error("Bar group '{name}' has negative {what}: {value}")]
    NegativeBarValue {
        name: String,
        what: &'static str,
        value: f64,
    },

    #[error("Rotation must be in [0, 360) degrees, got {degrees}")]
    RotationOutOfRange { degrees: f64 },

    #[error("Section has no fibers")]
    Empty,

    #[error("Section fibers have zero total area")]
    ZeroArea,
}

pub(crate) fn check_positive(value: f64, what: &'static str) -> SectionResult<f64> {
    if !value.is_finite() {
        return Err(SectionError::NonFinite { what, value });
    }
    if value <= 0.0 {
        return Err(SectionError::NonPositive { what, value });
    }
    Ok(value)
}

impl From<SectionError> for FkError {
    fn from(err: SectionError) -> Self {
        FkError::Configuration {
            what: format!("section: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SectionError::CoverTooLarge {
            cover: 13.0,
            limit: 12.0,
        };
        assert!(err.to_string().contains("13"));
    }

    #[test]
    fn error_to_fk_error() {
        let fk: FkError = SectionError::Empty.into();
        assert!(matches!(fk, FkError::Configuration { .. }));
    }
}
