//! Shared application service layer for fiberkit.
//!
//! Turns a validated project into materials and a meshed section, runs the
//! configured analyses, and prepares preview data for plotting frontends.

pub mod analysis_service;
pub mod error;
pub mod preview;
pub mod project_service;

pub use analysis_service::{
    MaterialSet, build_materials, build_section, build_section_with, pm_params, run_moment_curvature,
    run_pm_interaction,
};
pub use error::{AppError, AppResult};
pub use preview::{FiberPreview, FiberShape, MaterialCurve, SectionPreview, preview};
pub use project_service::{load_project, save_project, validate_project};
