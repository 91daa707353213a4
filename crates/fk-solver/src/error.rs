//! Error types for section solvers.

use fk_core::FkError;
use fk_materials::MaterialError;
use fk_section::SectionError;
use thiserror::Error;

/// Errors raised before a solve starts. Non-convergence is reported on the
/// result rows instead.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid solver parameters: {what}")]
    InvalidParams { what: String },

    #[error("Non-finite input {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Material error: {0}")]
    Material(#[from] MaterialError),

    #[error("Section error: {0}")]
    Section(#[from] SectionError),

    #[error(transparent)]
    Core(#[from] FkError),
}

pub type SolverResult<T> = Result<T, SolverError>;

pub(crate) fn check_finite(value: f64, what: &'static str) -> SolverResult<f64> {
    fk_core::ensure_finite(value, what).map_err(|_| SolverError::NonFinite { what, value })
}

impl From<SolverError> for FkError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::NonFinite { what, value } => FkError::NonFinite { what, value },
            SolverError::Material(e) => e.into(),
            SolverError::Section(e) => e.into(),
            SolverError::Core(e) => e,
            other => FkError::Configuration {
                what: other.to_string(),
            },
        }
    }
}
