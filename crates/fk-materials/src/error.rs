//! Material parameter errors.

use fk_core::FkError;
use thiserror::Error;

/// Result type for material construction.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Invalid material parameters. Raised at construction, never while evaluating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// Strength, modulus, or strain that must be strictly positive.
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Strain limits out of order (e.g. peak strain beyond ultimate strain).
    #[error("{lower_name} ({lower}) must be less than {upper_name} ({upper})")]
    NonMonotonicStrain {
        lower_name: &'static str,
        lower: f64,
        upper_name: &'static str,
        upper: f64,
    },

    #[error("Value out of range for {what}: {value} not in [{min}, {max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Mander requires the initial modulus to exceed the secant modulus at peak.
    #[error("Elastic modulus {ec} must exceed secant modulus {esec} at peak stress")]
    ModulusBelowSecant { ec: f64, esec: f64 },
}

pub(crate) fn check_positive(value: f64, what: &'static str) -> MaterialResult<f64> {
    if !value.is_finite() {
        return Err(MaterialError::NonFinite { what, value });
    }
    if value <= 0.0 {
        return Err(MaterialError::NonPositive { what, value });
    }
    Ok(value)
}

impl From<MaterialError> for FkError {
    fn from(err: MaterialError) -> Self {
        FkError::Configuration {
            what: format!("material: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MaterialError::NonPositive {
            what: "fpc",
            value: -4.0,
        };
        assert!(err.to_string().contains("fpc"));

        let err = MaterialError::NonMonotonicStrain {
            lower_name: "eo",
            lower: 0.02,
            upper_name: "emax",
            upper: 0.014,
        };
        assert!(err.to_string().contains("emax"));
    }

    #[test]
    fn error_to_fk_error() {
        let err = MaterialError::NonPositive {
            what: "fy",
            value: 0.0,
        };
        let fk: FkError = err.into();
        assert!(matches!(fk, FkError::Configuration { .. }));
    }

    #[test]
    fn check_positive_rejects_nan() {
        assert!(matches!(
            check_positive(f64::NAN, "es"),
            Err(MaterialError::NonFinite { .. })
        ));
    }
}
