//! Project loading, saving, and validation.

use crate::analysis_service::build_section;
use crate::error::{AppError, AppResult};
use fk_project::schema::Project;
use std::path::Path;
use tracing::info;

/// Load, migrate and validate a project (`.json` or YAML).
pub fn load_project(path: &Path) -> AppResult<Project> {
    let project = fk_project::load(path)?;
    info!(path = %path.display(), name = %project.name, "loaded project");
    Ok(project)
}

/// Save project as YAML, or JSON for a `.json` path.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    let result = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => fk_project::save_json(path, project),
        _ => fk_project::save_yaml(path, project),
    };
    result.map_err(|e| match e {
        fk_project::ProjectError::Io(source) => AppError::ProjectFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

/// Schema validation plus a full material build and mesh.
///
/// Returns the number of fibers in the meshed section.
pub fn validate_project(project: &Project) -> AppResult<usize> {
    fk_project::validate_project(project).map_err(fk_project::ProjectError::from)?;
    let section = build_section(project)?;
    Ok(section.fibers().len())
}
