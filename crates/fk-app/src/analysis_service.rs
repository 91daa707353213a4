//! Project -> materials -> section -> analyses.

use crate::error::AppResult;
use fk_materials::{Bilinear, Mander, Todeschini};
use fk_project::schema::{
    BarGroupDef, BarLayerDef, MomentCurvatureDef, PmInteractionDef, Project, TransverseDef,
};
use fk_section::{
    BarGroup, BarLayer, MeshSize, RectangularConfined, Section, SectionBuilder, SharedLaw,
};
use fk_solver::{
    MomentCurvatureConfig, MomentCurvatureResult, MomentCurvatureSolver, PmInteractionResult,
    PmInteractionSolver, PmParams, TransverseReinforcement,
};
use std::sync::Arc;
use tracing::{info, warn};

/// The three laws of a rectangular confined section.
#[derive(Debug, Clone)]
pub struct MaterialSet {
    pub unconfined: SharedLaw,
    pub confined: SharedLaw,
    pub steel: SharedLaw,
}

pub fn build_materials(project: &Project) -> AppResult<MaterialSet> {
    let m = &project.materials;
    let units = project.units;

    let unconfined = match m.unconfined.ec {
        Some(ec) => Todeschini::with_modulus(m.unconfined.fpc, ec)?,
        None => Todeschini::new(m.unconfined.fpc, units)?,
    };
    let unconfined = match m.unconfined.ultimate_strain {
        Some(eu) => unconfined.with_ultimate_strain(eu)?,
        None => unconfined,
    };

    let c = &m.confined;
    let confined = match c.ec {
        Some(ec) => Mander::with_modulus(c.fpc, c.peak_strain, c.ultimate_strain, ec)?,
        None => Mander::new(c.fpc, c.peak_strain, c.ultimate_strain, units)?,
    };

    let steel = Bilinear::new(m.steel.fy, m.steel.es)?.with_hardening(m.steel.hardening)?;

    Ok(MaterialSet {
        unconfined: Arc::new(unconfined),
        confined: Arc::new(confined),
        steel: Arc::new(steel),
    })
}

fn layer(def: &BarLayerDef) -> BarLayer {
    BarLayer {
        area: def.area,
        count: def.count,
        rows: def.rows,
        row_spacing: def.row_spacing,
    }
}

fn group(def: &BarGroupDef) -> BarGroup {
    BarGroup {
        x0: def.x0,
        y0: def.y0,
        width: def.width,
        height: def.height,
        nx: def.nx,
        ny: def.ny,
        area: def.area,
        perimeter_only: def.perimeter_only,
    }
}

/// Mesh the project's rectangular confined section.
pub fn build_section(project: &Project) -> AppResult<Section> {
    let materials = build_materials(project)?;
    build_section_with(project, &materials)
}

/// Mesh the project's section with already-built laws.
pub fn build_section_with(project: &Project, materials: &MaterialSet) -> AppResult<Section> {
    let s = &project.section;

    let geometry = RectangularConfined {
        width: s.width,
        height: s.height,
        cover: s.cover,
        mesh: MeshSize {
            dx: s.mesh_dx,
            dy: s.mesh_dy,
        },
        top_bars: layer(&s.top_bars),
        bottom_bars: layer(&s.bottom_bars),
    };
    let mut builder = SectionBuilder::rectangular_confined(
        &geometry,
        materials.confined.clone(),
        materials.unconfined.clone(),
        materials.steel.clone(),
    )?;

    // Mid-height layer spans the core width, perimeter bars only
    let mid = BarGroup {
        x0: -0.5 * s.width + s.cover,
        y0: 0.0,
        width: s.width - 2.0 * s.cover,
        height: 0.0,
        nx: s.mid_bars.count,
        ny: 1,
        area: s.mid_bars.area,
        perimeter_only: true,
    };
    builder.add_bar_group("mid", &mid, materials.steel.clone())?;

    for def in &s.bar_groups {
        builder.add_bar_group(&def.id, &group(def), materials.steel.clone())?;
    }

    Ok(builder.mesh(s.rotate_deg)?)
}

pub fn run_moment_curvature(
    section: &Section,
    def: &MomentCurvatureDef,
) -> AppResult<MomentCurvatureResult> {
    let config = MomentCurvatureConfig {
        steps: def.steps,
        parallel: def.parallel,
        ..MomentCurvatureConfig::default()
    };
    let result = MomentCurvatureSolver::new(section, config).run(def.axial_load, def.phi_target)?;

    if !result.is_converged() {
        warn!(
            unconverged = result.warnings().len(),
            "moment-curvature results contain unconverged rows"
        );
    }
    if let Some(row) = result.first_yield() {
        info!(
            curvature = row.curvature,
            moment = row.moment,
            "first tension yield"
        );
    }
    Ok(result)
}

/// ACI parameters from the project: cover concrete strength and steel.
pub fn pm_params(project: &Project, def: &PmInteractionDef) -> PmParams {
    PmParams {
        fpc: project.materials.unconfined.fpc,
        fy: project.materials.steel.fy,
        es: project.materials.steel.es,
        units: project.units,
        ultimate_strain: def.ultimate_strain,
        points: def.points,
        transverse: match def.transverse {
            TransverseDef::Tied => TransverseReinforcement::Tied,
            TransverseDef::Spiral => TransverseReinforcement::Spiral,
        },
        both_directions: def.both_directions,
    }
}

pub fn run_pm_interaction(
    project: &Project,
    section: &Section,
    def: &PmInteractionDef,
) -> AppResult<PmInteractionResult> {
    let solver = PmInteractionSolver::new(section, pm_params(project, def))?;
    Ok(solver.run()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_materials_use_project_units() {
        let materials = build_materials(&Project::default()).unwrap();
        assert_eq!(materials.unconfined.name(), "Concrete-Unconfined");
        assert_eq!(materials.confined.name(), "Concrete-Confined");
        assert_eq!(materials.steel.reference_points().yield_strain, Some(60.0 / 29_000.0));
    }

    #[test]
    fn pm_params_follow_project() {
        let mut project = Project::default();
        project.materials.unconfined.fpc = 5.0;
        let def = PmInteractionDef {
            transverse: TransverseDef::Spiral,
            ..PmInteractionDef::default()
        };
        let params = pm_params(&project, &def);
        assert_eq!(params.fpc, 5.0);
        assert_eq!(params.transverse, TransverseReinforcement::Spiral);
    }
}
