//! Project validation logic.
//!
//! Checks what can be checked without building materials: signs, finiteness,
//! ordering of strains, and that the cover fits inside the section. Law- and
//! mesher-specific checks run again when the section is built.

use crate::schema::{BarGroupDef, BarLayerDef, Project};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, value, "must be positive and finite"));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, value, "must be non-negative and finite"));
    }
    Ok(())
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let m = &project.materials;
    positive("materials.unconfined.fpc", m.unconfined.fpc)?;
    if let Some(ec) = m.unconfined.ec {
        positive("materials.unconfined.ec", ec)?;
    }
    if let Some(eu) = m.unconfined.ultimate_strain {
        positive("materials.unconfined.ultimate_strain", eu)?;
    }

    positive("materials.confined.fpc", m.confined.fpc)?;
    positive("materials.confined.peak_strain", m.confined.peak_strain)?;
    positive("materials.confined.ultimate_strain", m.confined.ultimate_strain)?;
    if m.confined.ultimate_strain <= m.confined.peak_strain {
        return Err(invalid(
            "materials.confined.ultimate_strain",
            m.confined.ultimate_strain,
            "must exceed peak_strain",
        ));
    }
    if let Some(ec) = m.confined.ec {
        positive("materials.confined.ec", ec)?;
    }

    positive("materials.steel.fy", m.steel.fy)?;
    positive("materials.steel.es", m.steel.es)?;
    if !(0.0..1.0).contains(&m.steel.hardening) {
        return Err(invalid(
            "materials.steel.hardening",
            m.steel.hardening,
            "must be in [0, 1)",
        ));
    }

    let s = &project.section;
    positive("section.width", s.width)?;
    positive("section.height", s.height)?;
    positive("section.cover", s.cover)?;
    positive("section.mesh_dx", s.mesh_dx)?;
    positive("section.mesh_dy", s.mesh_dy)?;
    if s.cover >= 0.5 * s.width.min(s.height) {
        return Err(invalid(
            "section.cover",
            s.cover,
            "must be less than half the smaller section dimension",
        ));
    }
    if !s.rotate_deg.is_finite() || !(0.0..360.0).contains(&s.rotate_deg) {
        return Err(invalid("section.rotate_deg", s.rotate_deg, "must be in [0, 360)"));
    }

    validate_layer("section.top_bars", &s.top_bars)?;
    validate_layer("section.mid_bars", &s.mid_bars)?;
    validate_layer("section.bottom_bars", &s.bottom_bars)?;

    let mut group_ids = HashSet::new();
    for group in &s.bar_groups {
        if !group_ids.insert(&group.id) {
            return Err(ValidationError::DuplicateId {
                id: group.id.clone(),
                context: "section.bar_groups".to_string(),
            });
        }
        validate_group(group)?;
    }

    if let Some(mk) = &project.analysis.moment_curvature {
        if !mk.axial_load.is_finite() {
            return Err(invalid(
                "analysis.moment_curvature.axial_load",
                mk.axial_load,
                "must be finite",
            ));
        }
        if !mk.phi_target.is_finite() {
            return Err(invalid(
                "analysis.moment_curvature.phi_target",
                mk.phi_target,
                "must be finite",
            ));
        }
        if mk.steps == 0 {
            return Err(invalid(
                "analysis.moment_curvature.steps",
                mk.steps,
                "must be at least 1",
            ));
        }
    }

    if let Some(pm) = &project.analysis.pm_interaction {
        positive("analysis.pm_interaction.ultimate_strain", pm.ultimate_strain)?;
        if pm.points < 2 {
            return Err(invalid(
                "analysis.pm_interaction.points",
                pm.points,
                "must be at least 2",
            ));
        }
    }

    Ok(())
}

fn validate_layer(field: &str, layer: &BarLayerDef) -> Result<(), ValidationError> {
    non_negative(&format!("{field}.area"), layer.area)?;
    non_negative(&format!("{field}.row_spacing"), layer.row_spacing)?;
    Ok(())
}

fn validate_group(group: &BarGroupDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("bar group '{}' {name}", group.id);
    for (name, value) in [("x0", group.x0), ("y0", group.y0)] {
        if !value.is_finite() {
            return Err(invalid(field(name), value, "must be finite"));
        }
    }
    non_negative(&field("width"), group.width)?;
    non_negative(&field("height"), group.height)?;
    non_negative(&field("area"), group.area)?;
    Ok(())
}
