//! Error types for the fk-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives the CLI a single error surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to write project file: {path}")]
    ProjectFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Material error: {0}")]
    Material(String),

    #[error("Section error: {0}")]
    Section(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fk-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<fk_project::ProjectError> for AppError {
    fn from(err: fk_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<fk_materials::MaterialError> for AppError {
    fn from(err: fk_materials::MaterialError) -> Self {
        AppError::Material(err.to_string())
    }
}

impl From<fk_section::SectionError> for AppError {
    fn from(err: fk_section::SectionError) -> Self {
        AppError::Section(err.to_string())
    }
}

impl From<fk_solver::SolverError> for AppError {
    fn from(err: fk_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<fk_results::ResultsError> for AppError {
    fn from(err: fk_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
