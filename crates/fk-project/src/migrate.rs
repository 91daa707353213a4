//! Schema migration framework.

use crate::ProjectError;
use crate::schema::Project;
use fk_core::UnitSystem;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut project: Project) -> Result<Project, ProjectError> {
    while project.version < LATEST_VERSION {
        project = migrate_one_version(project)?;
    }
    Ok(project)
}

fn migrate_one_version(project: Project) -> Result<Project, ProjectError> {
    match project.version {
        0 => migrate_v0_to_v1(project),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files predate the unit selector and were always imperial.
fn migrate_v0_to_v1(mut project: Project) -> Result<Project, ProjectError> {
    project.units = UnitSystem::Imperial;
    project.version = 1;
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrate_latest_is_noop() {
        let project = Project::default();
        let migrated = migrate_to_latest(project.clone()).unwrap();
        assert_eq!(migrated, project);
    }

    #[test]
    fn v0_is_imperial() {
        let project = Project {
            version: 0,
            units: UnitSystem::Metric,
            ..Project::default()
        };
        let migrated = migrate_to_latest(project).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);
        assert_eq!(migrated.units, UnitSystem::Imperial);
    }
}
